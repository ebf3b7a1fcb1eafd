// src/domain/logic.rs

use crate::domain::lead::{DealStatus, Lead};
use crate::domain::stage::StageBucket;

/// Determines the single "effective" stage of a lead. The order of checks
/// determines the precedence of the sources:
///
/// 1. An explicit CRM stage from the upstream system wins outright.
/// 2. Otherwise the progress step flagged `current`.
/// 3. Otherwise the last completed progress step, in sequence order.
/// 4. Otherwise the coarse stage label on the record itself.
///
/// Total: a lead with none of the above yields "", which the canonicalizer
/// routes to the default bucket.
pub fn derive_effective_stage(lead: &Lead) -> &str {
    if let Some(crm_stage) = lead.crm_stage.as_deref() {
        if !crm_stage.trim().is_empty() {
            return crm_stage.trim();
        }
    }
    if let Some(current) = lead.progress.iter().find(|s| s.current) {
        return current.name.trim();
    }
    if let Some(last_completed) = lead.progress.iter().rev().find(|s| s.completed) {
        return last_completed.name.trim();
    }
    lead.stage.trim()
}

/// The bucket a lead aggregates into: effective stage, canonicalized.
pub fn derive_bucket(lead: &Lead) -> StageBucket {
    StageBucket::canonicalize(derive_effective_stage(lead))
}

/// Whether a deal is still open. An explicit upstream flag wins; otherwise
/// openness follows from the coarse stage not being terminal.
pub fn is_open(lead: &Lead) -> bool {
    match lead.deal_status {
        Some(status) => status == DealStatus::Open,
        None => !StageBucket::canonicalize(&lead.stage).is_terminal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lead::{Contact, ProgressStage};

    fn bare_lead() -> Lead {
        Lead {
            id: "t1".to_string(),
            name: "Test Lead".to_string(),
            acres: "10 acres".to_string(),
            submission_date: "10/01/2025".to_string(),
            closed_date: None,
            stage: "Invitation Sent".to_string(),
            stage_color: "blue".to_string(),
            lost_reason: None,
            lost_comment: None,
            referral_code: None,
            pipeline: None,
            crm_stage: None,
            deal_status: None,
            contact: Contact {
                name: "Test Contact".to_string(),
                email: "test@example.com".to_string(),
                phone: "(555) 555-0000".to_string(),
            },
            progress: Vec::new(),
        }
    }

    fn step(name: &str, completed: bool, current: bool) -> ProgressStage {
        ProgressStage {
            name: name.to_string(),
            completed,
            current,
            date: None,
        }
    }

    #[test]
    fn explicit_crm_stage_beats_progress() {
        let mut lead = bare_lead();
        lead.crm_stage = Some("Inbound Calls".to_string());
        lead.progress = vec![
            step("Contact Form Submitted", true, false),
            step("Request for Services Submitted", false, true),
        ];
        assert_eq!(derive_effective_stage(&lead), "Inbound Calls");
    }

    #[test]
    fn blank_crm_stage_is_skipped() {
        let mut lead = bare_lead();
        lead.crm_stage = Some("  ".to_string());
        lead.progress = vec![step("Agreement Sent", false, true)];
        assert_eq!(derive_effective_stage(&lead), "Agreement Sent");
    }

    #[test]
    fn current_step_beats_last_completed() {
        let mut lead = bare_lead();
        lead.progress = vec![
            step("Contact Form Submitted", true, false),
            step("Request for Services Submitted", false, true),
            step("Agreement Sent", false, false),
        ];
        assert_eq!(
            derive_effective_stage(&lead),
            "Request for Services Submitted"
        );
    }

    #[test]
    fn last_completed_by_sequence_order_when_no_current() {
        let mut lead = bare_lead();
        lead.progress = vec![
            step("Contact Form Submitted", true, false),
            step("Request for Services Submitted", true, false),
            step("Agreement Sent", false, false),
        ];
        assert_eq!(
            derive_effective_stage(&lead),
            "Request for Services Submitted"
        );
    }

    #[test]
    fn coarse_stage_is_the_fallback() {
        let lead = bare_lead();
        assert_eq!(derive_effective_stage(&lead), "Invitation Sent");
        assert_eq!(derive_bucket(&lead), StageBucket::InvitationSent);
    }

    #[test]
    fn empty_everything_yields_empty_string_and_default_bucket() {
        let mut lead = bare_lead();
        lead.stage = String::new();
        assert_eq!(derive_effective_stage(&lead), "");
        assert_eq!(derive_bucket(&lead), StageBucket::ContactInformation);
    }

    #[test]
    fn openness_prefers_explicit_flag_over_stage() {
        let mut lead = bare_lead();
        assert!(is_open(&lead));

        lead.deal_status = Some(DealStatus::Closed);
        assert!(!is_open(&lead));

        let mut won = bare_lead();
        won.stage = "Won".to_string();
        assert!(!is_open(&won));
        won.deal_status = Some(DealStatus::Open);
        assert!(is_open(&won));
    }
}
