// src/domain/aggregate.rs

use crate::domain::lead::Lead;
use crate::domain::logic::{derive_bucket, derive_effective_stage};
use crate::domain::stage::StageBucket;

/// Deal count plus summed acreage, the pair every dashboard card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageTotals {
    pub deals: usize,
    pub acres: i64,
}

impl StageTotals {
    fn add(&mut self, lead: &Lead) {
        self.deals += 1;
        self.acres += lead.acres_value();
    }
}

/// One row of a per-stage report table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageRow {
    pub bucket: StageBucket,
    pub totals: StageTotals,
}

/// An ordered per-bucket breakdown. `unmapped` counts leads whose effective
/// stage label was not in the canonicalization table and therefore landed in
/// the default bucket; the assignment itself is unchanged, the count just
/// surfaces the data-quality gap instead of hiding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageBreakdown {
    pub rows: Vec<StageRow>,
    pub unmapped: usize,
}

impl StageBreakdown {
    pub fn totals_for(&self, bucket: StageBucket) -> Option<StageTotals> {
        self.rows
            .iter()
            .find(|row| row.bucket == bucket)
            .map(|row| row.totals)
    }
}

/// Groups leads by derived+canonicalized bucket and sums count and acreage
/// per bucket. `order` defines both which buckets appear and their row
/// order; leads whose bucket is not in `order` contribute to no row. Pass
/// `StageBucket::ALL` for total coverage, or a report-specific subset.
pub fn aggregate_stages<'a, I>(leads: I, order: &[StageBucket]) -> StageBreakdown
where
    I: IntoIterator<Item = &'a Lead>,
{
    let mut rows: Vec<StageRow> = order
        .iter()
        .map(|&bucket| StageRow {
            bucket,
            totals: StageTotals::default(),
        })
        .collect();
    let mut unmapped = 0;

    for lead in leads {
        if StageBucket::lookup(derive_effective_stage(lead)).is_none() {
            unmapped += 1;
        }
        let bucket = derive_bucket(lead);
        if let Some(row) = rows.iter_mut().find(|row| row.bucket == bucket) {
            row.totals.add(lead);
        }
    }

    StageBreakdown { rows, unmapped }
}

/// Flat count + acreage over an already-filtered set (the dashboard cards).
pub fn tally<'a, I>(leads: I) -> StageTotals
where
    I: IntoIterator<Item = &'a Lead>,
{
    let mut totals = StageTotals::default();
    for lead in leads {
        totals.add(lead);
    }
    totals
}
