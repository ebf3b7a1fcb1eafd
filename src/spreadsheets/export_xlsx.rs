use rust_xlsxwriter::Workbook;

use crate::domain::lead::Lead;
use crate::domain::parse::{format_mmddyy, format_mmddyyyy};
use crate::errors::DashboardError;

/// Writes a filtered lead set as a spreadsheet and returns the saved
/// workbook bytes. Acreage is written as a number so the sheet can sum it.
pub fn export_leads_xlsx(leads: &[&Lead]) -> Result<Vec<u8>, DashboardError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    let headers = [
        "Lead Name",
        "Acres",
        "Submission Date",
        "Closed Date",
        "Stage",
        "Lost Reason",
        "Contact Name",
        "Email",
        "Phone",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                DashboardError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, lead) in leads.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet
            .write_string(r, 0, &lead.name)
            .map_err(|e| DashboardError::XlsxError(format!("Failed to write name: {}", e)))?;

        worksheet
            .write_number(r, 1, lead.acres_value() as f64)
            .map_err(|e| DashboardError::XlsxError(format!("Failed to write acres: {}", e)))?;

        worksheet
            .write_string(r, 2, format_mmddyyyy(Some(lead.submission_date.as_str())))
            .map_err(|e| {
                DashboardError::XlsxError(format!("Failed to write submission date: {}", e))
            })?;

        worksheet
            .write_string(r, 3, format_mmddyy(lead.closed_date.as_deref()))
            .map_err(|e| {
                DashboardError::XlsxError(format!("Failed to write closed date: {}", e))
            })?;

        worksheet
            .write_string(r, 4, &lead.stage)
            .map_err(|e| DashboardError::XlsxError(format!("Failed to write stage: {}", e)))?;

        let lost_reason = lead.lost_reason.as_deref().unwrap_or("");
        worksheet
            .write_string(r, 5, lost_reason)
            .map_err(|e| {
                DashboardError::XlsxError(format!("Failed to write lost reason: {}", e))
            })?;

        worksheet
            .write_string(r, 6, &lead.contact.name)
            .map_err(|e| {
                DashboardError::XlsxError(format!("Failed to write contact name: {}", e))
            })?;

        worksheet
            .write_string(r, 7, &lead.contact.email)
            .map_err(|e| DashboardError::XlsxError(format!("Failed to write email: {}", e)))?;

        worksheet
            .write_string(r, 8, &lead.contact.phone)
            .map_err(|e| DashboardError::XlsxError(format!("Failed to write phone: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| DashboardError::XlsxError(format!("Failed to save workbook: {}", e)))
}
