// src/domain/stage.rs

use std::fmt;

/// The closed set of pipeline buckets every lead aggregates into.
///
/// Raw stage labels arrive from three naming schemes that evolved
/// independently (the dashboard display labels, the progress-step names,
/// and the CRM ops labels). All of them collapse into these buckets via
/// `StageBucket::canonicalize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StageBucket {
    ContactInformation,
    InvitationSent,
    RequestSubmitted,
    AgreementSent,
    SoilDataCollection,
    AnalystTeam,
    ReportCompleteNotPaid,
    Won,
    Lost,
}

/// Many-to-one synonym table. Labels are matched after trimming; anything
/// not listed here falls back to `ContactInformation` so every record lands
/// in exactly one bucket. New synonyms get a row here, nothing else changes.
const STAGE_SYNONYMS: &[(&str, StageBucket)] = &[
    // Earliest bucket
    ("Contact Information", StageBucket::ContactInformation),
    ("Contact Info Only", StageBucket::ContactInformation),
    // Invitation
    ("Invitation Sent", StageBucket::InvitationSent),
    ("Invitation Email", StageBucket::InvitationSent),
    // Request for services
    ("RFS Submitted", StageBucket::RequestSubmitted),
    ("Request for Services Submitted", StageBucket::RequestSubmitted),
    ("Contact Form Submitted", StageBucket::RequestSubmitted),
    // Agreement
    ("Agreement Sent", StageBucket::AgreementSent),
    ("Service Contract Under Review", StageBucket::AgreementSent),
    ("Docusign", StageBucket::AgreementSent),
    // Soil sampling
    ("Soil Data Collection", StageBucket::SoilDataCollection),
    ("Soil Sampling & Data Collection", StageBucket::SoilDataCollection),
    ("Soil Team", StageBucket::SoilDataCollection),
    // Analysis
    ("Analyst Team", StageBucket::AnalystTeam),
    ("Soils Complete/Analyst Queue", StageBucket::AnalystTeam),
    // Report delivered, awaiting payment
    ("Report Complete/Not Paid", StageBucket::ReportCompleteNotPaid),
    ("Report Complete", StageBucket::ReportCompleteNotPaid),
    ("Report Review NOT PAID", StageBucket::ReportCompleteNotPaid),
    // Terminal
    ("Won", StageBucket::Won),
    ("Lost", StageBucket::Lost),
];

impl StageBucket {
    /// Every bucket, in pipeline order.
    pub const ALL: [StageBucket; 9] = [
        StageBucket::ContactInformation,
        StageBucket::InvitationSent,
        StageBucket::RequestSubmitted,
        StageBucket::AgreementSent,
        StageBucket::SoilDataCollection,
        StageBucket::AnalystTeam,
        StageBucket::ReportCompleteNotPaid,
        StageBucket::Won,
        StageBucket::Lost,
    ];

    /// Maps any observed stage label to its bucket. Total: unrecognized
    /// labels map to the earliest bucket rather than failing, so aggregate
    /// coverage never drops a record. Use `lookup` when the caller needs to
    /// know whether the label was actually recognized.
    pub fn canonicalize(raw_label: &str) -> StageBucket {
        Self::lookup(raw_label).unwrap_or(StageBucket::ContactInformation)
    }

    /// Table lookup without the fallback.
    pub fn lookup(raw_label: &str) -> Option<StageBucket> {
        let label = raw_label.trim();
        STAGE_SYNONYMS
            .iter()
            .find(|(synonym, _)| *synonym == label)
            .map(|(_, bucket)| *bucket)
    }

    /// The canonical display label. These are fixed points of
    /// `canonicalize`: canonicalizing a bucket's own label returns the
    /// same bucket.
    pub fn label(&self) -> &'static str {
        match self {
            StageBucket::ContactInformation => "Contact Information",
            StageBucket::InvitationSent => "Invitation Sent",
            StageBucket::RequestSubmitted => "RFS Submitted",
            StageBucket::AgreementSent => "Agreement Sent",
            StageBucket::SoilDataCollection => "Soil Data Collection",
            StageBucket::AnalystTeam => "Analyst Team",
            StageBucket::ReportCompleteNotPaid => "Report Complete/Not Paid",
            StageBucket::Won => "Won",
            StageBucket::Lost => "Lost",
        }
    }

    /// The CRM ops-team label shown on the Active Deals view.
    pub fn pipeline_label(&self) -> &'static str {
        match self {
            StageBucket::AgreementSent => "Docusign",
            StageBucket::SoilDataCollection => "Soil Team",
            StageBucket::ReportCompleteNotPaid => "Report Review NOT PAID",
            other => other.label(),
        }
    }

    /// Won and Lost are the buckets a deal never leaves.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StageBucket::Won | StageBucket::Lost)
    }
}

impl fmt::Display for StageBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
