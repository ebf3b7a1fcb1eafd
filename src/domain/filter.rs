// src/domain/filter.rs

use chrono::NaiveDate;

use crate::domain::lead::Lead;
use crate::domain::logic::{derive_bucket, is_open};
use crate::domain::stage::StageBucket;

/// Which date on the record a range filter tests. The Won/Lost views filter
/// by close date, everything else by submission date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateField {
    #[default]
    Submission,
    Closed,
}

/// An inclusive date window. Either bound may be omitted for a one-sided
/// range; a range with neither bound matches everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Inclusive on both ends: a date equal to either bound is inside.
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

/// Attribution rule for the Leads view: the lead must carry this exact
/// referral code and pipeline, and a CRM stage from the allow-list. A lead
/// missing any of the three fields fails the rule.
#[derive(Debug, Clone)]
pub struct AttributionRule {
    pub referral_code: String,
    pub pipeline: String,
    pub crm_stages: Vec<String>,
}

impl AttributionRule {
    pub fn matches(&self, lead: &Lead) -> bool {
        let code_ok = lead.referral_code.as_deref() == Some(self.referral_code.as_str());
        let pipeline_ok = lead.pipeline.as_deref() == Some(self.pipeline.as_str());
        let crm_ok = lead
            .crm_stage
            .as_deref()
            .is_some_and(|stage| self.crm_stages.iter().any(|s| s == stage));
        code_ok && pipeline_ok && crm_ok
    }
}

/// Composable lead filter. Every predicate is independently omittable
/// (None means "matches everything") and the enabled predicates are ANDed.
/// Stateless and total: filtering never fails, it only narrows.
#[derive(Debug, Clone, Default)]
pub struct LeadFilter {
    /// Case-insensitive substring match over the lead's display fields.
    pub search: Option<String>,
    pub range: Option<DateRange>,
    /// Which date field `range` tests.
    pub date_field: DateField,
    /// Some(true) keeps only open deals, Some(false) only closed ones.
    pub open: Option<bool>,
    /// Allow-set of buckets the lead's derived stage must canonicalize into.
    pub buckets: Option<Vec<StageBucket>>,
    pub attribution: Option<AttributionRule>,
}

impl LeadFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self, lead: &Lead) -> bool {
        self.matches_search(lead)
            && self.matches_range(lead)
            && self.matches_open(lead)
            && self.matches_buckets(lead)
            && self.matches_attribution(lead)
    }

    /// Keeps the leads that pass every enabled predicate, preserving input
    /// order. An all-disabled filter returns the input unchanged.
    pub fn apply<'a>(&self, leads: &'a [Lead]) -> Vec<&'a Lead> {
        leads.iter().filter(|lead| self.matches(lead)).collect()
    }

    fn matches_search(&self, lead: &Lead) -> bool {
        let Some(query) = self.search.as_deref() else {
            return true;
        };
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let haystack = [
            lead.name.as_str(),
            lead.acres.as_str(),
            lead.submission_date.as_str(),
            lead.closed_date.as_deref().unwrap_or(""),
            lead.stage.as_str(),
            lead.lost_reason.as_deref().unwrap_or(""),
            lead.contact.name.as_str(),
            lead.contact.email.as_str(),
            lead.contact.phone.as_str(),
        ]
        .join(" ")
        .to_lowercase();
        haystack.contains(&query)
    }

    fn matches_range(&self, lead: &Lead) -> bool {
        let Some(range) = self.range else {
            return true;
        };
        if range.is_unbounded() {
            return true;
        }
        // A record missing the selected date fails closed while a bound is
        // active, rather than erroring.
        let date = match self.date_field {
            DateField::Submission => lead.submission_date_parsed(),
            DateField::Closed => lead.closed_date_parsed(),
        };
        match date {
            Some(date) => range.contains(date),
            None => false,
        }
    }

    fn matches_open(&self, lead: &Lead) -> bool {
        match self.open {
            Some(want_open) => is_open(lead) == want_open,
            None => true,
        }
    }

    fn matches_buckets(&self, lead: &Lead) -> bool {
        match &self.buckets {
            Some(allowed) => allowed.contains(&derive_bucket(lead)),
            None => true,
        }
    }

    fn matches_attribution(&self, lead: &Lead) -> bool {
        match &self.attribution {
            Some(rule) => rule.matches(lead),
            None => true,
        }
    }
}
