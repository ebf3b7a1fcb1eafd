use std::io::Write;

use chrono::Local;
use serde::Serialize;

use crate::domain::lead::Lead;
use crate::errors::DashboardError;

/// One exported row. Field renames double as the CSV header line.
#[derive(Debug, Serialize)]
struct LeadCsvRow<'a> {
    #[serde(rename = "Lead Name")]
    lead_name: &'a str,
    #[serde(rename = "Acres")]
    acres: &'a str,
    #[serde(rename = "Submission Date")]
    submission_date: &'a str,
    #[serde(rename = "Stage")]
    stage: &'a str,
    #[serde(rename = "Contact Name")]
    contact_name: &'a str,
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "Phone")]
    phone: &'a str,
}

impl<'a> LeadCsvRow<'a> {
    fn from_lead(lead: &'a Lead) -> Self {
        Self {
            lead_name: &lead.name,
            acres: &lead.acres,
            submission_date: &lead.submission_date,
            stage: &lead.stage,
            contact_name: &lead.contact.name,
            email: &lead.contact.email,
            phone: &lead.contact.phone,
        }
    }
}

/// Writes a filtered lead set as delimited text to any writer.
pub fn export_leads_csv<W: Write>(leads: &[&Lead], writer: W) -> Result<(), DashboardError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for lead in leads {
        csv_writer
            .serialize(LeadCsvRow::from_lead(lead))
            .map_err(|e| DashboardError::CsvError(format!("Failed to write row: {}", e)))?;
    }
    csv_writer
        .flush()
        .map_err(|e| DashboardError::CsvError(format!("Failed to flush output: {}", e)))?;
    Ok(())
}

/// Same export, returned as an in-memory string.
pub fn leads_csv_string(leads: &[&Lead]) -> Result<String, DashboardError> {
    let mut buffer = Vec::new();
    export_leads_csv(leads, &mut buffer)?;
    String::from_utf8(buffer)
        .map_err(|e| DashboardError::CsvError(format!("Export was not valid UTF-8: {}", e)))
}

/// Download filename, e.g. "leads_2025-10-17.csv".
pub fn leads_csv_filename() -> String {
    format!("leads_{}.csv", Local::now().format("%Y-%m-%d"))
}
