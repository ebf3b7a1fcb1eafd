pub mod export_csv;
pub mod export_xlsx;

pub use export_csv::{export_leads_csv, leads_csv_filename, leads_csv_string};
pub use export_xlsx::export_leads_xlsx;
