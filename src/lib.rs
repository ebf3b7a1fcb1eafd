//! Core engine of the partner-referral dashboard: canonicalizes messy
//! pipeline stage labels into a fixed bucket set, derives each lead's
//! effective stage from its progress history, filters lead collections with
//! composable predicates, and aggregates per-bucket counts and acreage for
//! the report views. Every operation is a pure, synchronous function over an
//! in-memory collection; the presentation layer owns all state.

pub mod data;
pub mod domain;
pub mod errors;
pub mod reports;
pub mod spreadsheets;

#[cfg(test)]
mod tests;

pub use data::{parse_leads, sample_leads};
pub use domain::aggregate::{aggregate_stages, tally, StageBreakdown, StageRow, StageTotals};
pub use domain::filter::{AttributionRule, DateField, DateRange, LeadFilter};
pub use domain::lead::{Contact, DealStatus, Lead, ProgressStage};
pub use domain::logic::{derive_bucket, derive_effective_stage, is_open};
pub use domain::stage::StageBucket;
pub use errors::DashboardError;
pub use reports::{
    dashboard_summary, referral_tab_rows, sort_leads, DashboardSummary, ReferralTab, SortKey,
};
