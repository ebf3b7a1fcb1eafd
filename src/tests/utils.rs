use crate::domain::lead::{Contact, Lead, ProgressStage};

/// Builds a minimal lead for tests; callers overwrite the fields they care
/// about.
pub fn lead(key: &str, name: &str, acres: &str, submission_date: &str, stage: &str) -> Lead {
    Lead {
        id: key.to_string(),
        name: name.to_string(),
        acres: acres.to_string(),
        submission_date: submission_date.to_string(),
        closed_date: None,
        stage: stage.to_string(),
        stage_color: "blue".to_string(),
        lost_reason: None,
        lost_comment: None,
        referral_code: None,
        pipeline: None,
        crm_stage: None,
        deal_status: None,
        contact: Contact {
            name: name.to_string(),
            email: format!("{}@example.com", key),
            phone: "(555) 555-0000".to_string(),
        },
        progress: Vec::new(),
    }
}

pub fn step(name: &str, completed: bool, current: bool) -> ProgressStage {
    ProgressStage {
        name: name.to_string(),
        completed,
        current,
        date: None,
    }
}
