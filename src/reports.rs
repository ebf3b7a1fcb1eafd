// src/reports.rs
//
// The report assemblies the dashboard pages are built from. Each one is a
// pure composition of the filter, deriver and aggregator over a supplied
// lead collection; nothing here holds state between calls.

use crate::domain::aggregate::{aggregate_stages, tally, StageBreakdown, StageTotals};
use crate::domain::filter::{AttributionRule, DateField, DateRange, LeadFilter};
use crate::domain::lead::Lead;
use crate::domain::parse::parse_acres;
use crate::domain::stage::StageBucket;

/// Row order of the dashboard stage table: the mid-pipeline buckets only.
/// Earliest-stage and terminal buckets are shown as cards, not rows.
pub const DASHBOARD_STAGE_ORDER: [StageBucket; 5] = [
    StageBucket::RequestSubmitted,
    StageBucket::AgreementSent,
    StageBucket::SoilDataCollection,
    StageBucket::AnalystTeam,
    StageBucket::ReportCompleteNotPaid,
];

/// Buckets an "Active Deal" may sit in: everything between request intake
/// and payment, exclusive of the earliest contact buckets and of Won/Lost.
pub const ACTIVE_DEAL_BUCKETS: [StageBucket; 5] = DASHBOARD_STAGE_ORDER;

// Attribution rule for the Leads tab: referrals entering through this
// partner code and pipeline, still sitting in an intake CRM stage.
pub const RP_REFERRAL_CODE: &str = "JSMITH2024";
pub const REQUIRED_PIPELINE: &str = "Soil Nutrient Load Pipeline";
pub const CRM_ALLOWED_STAGES: [&str; 4] = [
    "Inbound Calls",
    "Inbound Contact Forms",
    "Invitation Email",
    "RFS Qualified Paused",
];

/// Everything the dashboard landing page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    /// Total referrals received, regardless of stage.
    pub referrals: usize,
    pub in_process: StageTotals,
    pub won: StageTotals,
    pub lost: StageTotals,
    /// Mid-pipeline breakdown of the in-process deals.
    pub stages: StageBreakdown,
}

/// Builds the dashboard landing page numbers from the full collection.
pub fn dashboard_summary(leads: &[Lead]) -> DashboardSummary {
    let won: Vec<&Lead> = leads
        .iter()
        .filter(|l| StageBucket::canonicalize(&l.stage) == StageBucket::Won)
        .collect();
    let lost: Vec<&Lead> = leads
        .iter()
        .filter(|l| StageBucket::canonicalize(&l.stage) == StageBucket::Lost)
        .collect();
    let active: Vec<&Lead> = leads
        .iter()
        .filter(|l| !StageBucket::canonicalize(&l.stage).is_terminal())
        .collect();

    DashboardSummary {
        referrals: leads.len(),
        in_process: tally(active.iter().copied()),
        won: tally(won.into_iter()),
        lost: tally(lost.into_iter()),
        stages: aggregate_stages(active, &DASHBOARD_STAGE_ORDER),
    }
}

/// The four tabs of the referrals page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferralTab {
    Leads,
    ActiveDeals,
    Won,
    Lost,
}

impl ReferralTab {
    /// Which date the shared range picker filters on for this tab. The
    /// terminal-bucket tabs filter by close date, the others by submission.
    pub fn date_field(&self) -> DateField {
        match self {
            ReferralTab::Won | ReferralTab::Lost => DateField::Closed,
            ReferralTab::Leads | ReferralTab::ActiveDeals => DateField::Submission,
        }
    }

    /// The full filter for this tab: the shared search text and date range
    /// combined with the tab's own membership rules.
    pub fn filter(&self, search: Option<&str>, range: Option<DateRange>) -> LeadFilter {
        let mut filter = LeadFilter {
            search: search.map(str::to_string),
            range,
            date_field: self.date_field(),
            ..LeadFilter::new()
        };
        match self {
            ReferralTab::Leads => {
                filter.open = Some(true);
                filter.attribution = Some(AttributionRule {
                    referral_code: RP_REFERRAL_CODE.to_string(),
                    pipeline: REQUIRED_PIPELINE.to_string(),
                    crm_stages: CRM_ALLOWED_STAGES.iter().map(|s| s.to_string()).collect(),
                });
            }
            ReferralTab::ActiveDeals => {
                filter.open = Some(true);
                filter.buckets = Some(ACTIVE_DEAL_BUCKETS.to_vec());
            }
            ReferralTab::Won => {
                filter.buckets = Some(vec![StageBucket::Won]);
            }
            ReferralTab::Lost => {
                filter.buckets = Some(vec![StageBucket::Lost]);
            }
        }
        filter
    }
}

/// The rows a referral tab displays, in collection order.
pub fn referral_tab_rows<'a>(
    leads: &'a [Lead],
    tab: ReferralTab,
    search: Option<&str>,
    range: Option<DateRange>,
) -> Vec<&'a Lead> {
    tab.filter(search, range).apply(leads)
}

/// Table sort keys. Acres sorts numerically on the extracted value, dates
/// chronologically; records with a missing/unparseable date sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    LeadName,
    Acres,
    SubmissionDate,
    ClosedDate,
    Stage,
}

pub fn sort_leads(rows: &mut [&Lead], key: SortKey, ascending: bool) {
    rows.sort_by(|a, b| {
        let ord = match key {
            SortKey::LeadName => a.name.cmp(&b.name),
            SortKey::Acres => parse_acres(&a.acres).cmp(&parse_acres(&b.acres)),
            SortKey::SubmissionDate => a.submission_date_parsed().cmp(&b.submission_date_parsed()),
            SortKey::ClosedDate => a.closed_date_parsed().cmp(&b.closed_date_parsed()),
            SortKey::Stage => a.stage.cmp(&b.stage),
        };
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}
