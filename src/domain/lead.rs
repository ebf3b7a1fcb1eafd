// src/domain/lead.rs

use chrono::NaiveDate;

use crate::data::RawLead;
use crate::domain::parse::{parse_acres, parse_date};

/// Explicit open/closed flag carried by some upstream records. When absent,
/// openness is derived from the lead's stage (see `domain::logic::is_open`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealStatus {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// One step of a lead's ordered pipeline progress. At most one step is
/// flagged `current`; the ingestion boundary normalizes records that violate
/// this before they reach the core.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressStage {
    pub name: String,
    pub completed: bool,
    pub current: bool,
    pub date: Option<String>,
}

/// One referral record, validated and ready for filtering/aggregation.
/// The core never mutates a lead; every derived value (effective stage,
/// numeric acreage, bucket) is recomputed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    pub id: String,
    pub name: String,
    /// Free-text acreage, e.g. "1,020 acres". Authoritative only after
    /// extraction via `acres_value`.
    pub acres: String,
    pub submission_date: String,
    /// Present only once the deal reaches Won or Lost.
    pub closed_date: Option<String>,
    /// Coarse, human-authored stage label. May be a legacy synonym.
    pub stage: String,
    /// Presentation tag correlated with `stage`; passed through untouched.
    pub stage_color: String,
    pub lost_reason: Option<String>,
    pub lost_comment: Option<String>,
    // Upstream attribution fields, used only by the Leads-tab filter.
    pub referral_code: Option<String>,
    pub pipeline: Option<String>,
    pub crm_stage: Option<String>,
    pub deal_status: Option<DealStatus>,
    pub contact: Contact,
    /// Ordered sub-stage progress; empty for leads with no tracked progress.
    pub progress: Vec<ProgressStage>,
}

impl Lead {
    /// Builds a validated `Lead` from the raw upstream payload. This is the
    /// anti-corruption layer between the wire shape and the core: essential
    /// identification fields must exist, and a progress list with more than
    /// one `current` flag is normalized to keep only the first in sequence
    /// order.
    pub fn from_raw(raw: &RawLead) -> Result<Self, String> {
        if raw.key.trim().is_empty() {
            return Err("Missing or empty record key".to_string());
        }
        if raw.lead_name.trim().is_empty() {
            return Err("Missing or empty lead name".to_string());
        }

        let deal_status = match raw.deal_status.as_deref() {
            Some("Open") => Some(DealStatus::Open),
            Some("Closed") => Some(DealStatus::Closed),
            _ => None,
        };

        let mut seen_current = false;
        let progress = raw
            .progress
            .as_ref()
            .map(|p| p.stages.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|stage| {
                let current = stage.current.unwrap_or(false) && !seen_current;
                seen_current |= current;
                ProgressStage {
                    name: stage.name.clone(),
                    completed: stage.completed,
                    current,
                    date: stage.date.clone(),
                }
            })
            .collect();

        Ok(Lead {
            id: raw.key.clone(),
            name: raw.lead_name.clone(),
            acres: raw.acres.clone(),
            submission_date: raw.submission_date.clone(),
            closed_date: raw.closed_date.clone(),
            stage: raw.stage.clone(),
            stage_color: raw.stage_color.clone(),
            lost_reason: raw.lost_reason.clone(),
            lost_comment: raw.lost_comment.clone(),
            referral_code: raw.referral_code.clone(),
            pipeline: raw.pipeline.clone(),
            crm_stage: raw.crm_stage.clone(),
            deal_status,
            contact: Contact {
                name: raw.contact.name.clone(),
                email: raw.contact.email.clone(),
                phone: raw.contact.phone.clone(),
            },
            progress,
        })
    }

    /// Numeric acreage extracted from the free-text field. 0 when the text
    /// carries no digits.
    pub fn acres_value(&self) -> i64 {
        parse_acres(&self.acres)
    }

    pub fn submission_date_parsed(&self) -> Option<NaiveDate> {
        parse_date(&self.submission_date)
    }

    pub fn closed_date_parsed(&self) -> Option<NaiveDate> {
        self.closed_date.as_deref().and_then(parse_date)
    }
}
