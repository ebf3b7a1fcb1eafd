// src/data.rs
//
// Raw upstream payload models plus the bundled sample collection. This is
// the ingestion boundary: everything past here is a validated `Lead`.

use serde::Deserialize;

use crate::domain::lead::Lead;
use crate::domain::stage::StageBucket;
use crate::errors::DashboardError;

// lead
//  ├── key, leadName, acres
//  ├── submissionDate / closedDate
//  ├── stage, stageColor, lostReason, lostComment
//  ├── referralCode, pipeline, crmStage, dealStatus
//  ├── contact { name, email, phone }
//  └── progress
//       └── stages[] { name, completed, current, date }

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLead {
    pub key: String,
    pub lead_name: String,
    pub acres: String,
    pub submission_date: String,
    pub closed_date: Option<String>,
    pub stage: String,
    pub stage_color: String,
    pub lost_reason: Option<String>,
    pub lost_comment: Option<String>,
    pub referral_code: Option<String>,
    pub pipeline: Option<String>,
    pub crm_stage: Option<String>,
    pub deal_status: Option<String>,
    pub contact: RawContact,
    pub progress: Option<RawProgress>,
}

#[derive(Debug, Deserialize)]
pub struct RawContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Deserialize)]
pub struct RawProgress {
    pub stages: Vec<RawProgressStage>,
}

#[derive(Debug, Deserialize)]
pub struct RawProgressStage {
    pub name: String,
    pub completed: bool,
    pub current: Option<bool>,
    pub date: Option<String>,
}

const SAMPLE_LEADS_JSON: &str = include_str!("../data/leads.json");

/// Parses a raw JSON payload into validated leads. Records that fail
/// validation are skipped with a warning rather than aborting the whole
/// load; data-quality oddities in kept records are warned about too.
pub fn parse_leads(json: &str) -> Result<Vec<Lead>, DashboardError> {
    let raw_leads: Vec<RawLead> =
        serde_json::from_str(json).map_err(|e| DashboardError::DataError(e.to_string()))?;

    let mut leads = Vec::with_capacity(raw_leads.len());
    for raw in &raw_leads {
        warn_on_quality_issues(raw);
        match Lead::from_raw(raw) {
            Ok(lead) => leads.push(lead),
            Err(reason) => eprintln!("Skipping record '{}': {}", raw.key, reason),
        }
    }
    Ok(leads)
}

/// The sample referral collection bundled with the crate.
pub fn sample_leads() -> Result<Vec<Lead>, DashboardError> {
    parse_leads(SAMPLE_LEADS_JSON)
}

fn warn_on_quality_issues(raw: &RawLead) {
    let current_count = raw
        .progress
        .as_ref()
        .map(|p| p.stages.iter().filter(|s| s.current == Some(true)).count())
        .unwrap_or(0);
    if current_count > 1 {
        eprintln!(
            "Record '{}': {} progress steps flagged current, keeping the first",
            raw.key, current_count
        );
    }

    // A closed date and a terminal stage should come as a pair.
    let terminal = StageBucket::canonicalize(&raw.stage).is_terminal();
    if terminal && raw.closed_date.is_none() {
        eprintln!(
            "Record '{}': terminal stage '{}' without a closed date",
            raw.key, raw.stage
        );
    }
    if !terminal && raw.closed_date.is_some() {
        eprintln!(
            "Record '{}': closed date set but stage '{}' is not terminal",
            raw.key, raw.stage
        );
    }
}
