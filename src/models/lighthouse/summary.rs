use serde::Serialize;

/// Printed in place of a vital the report does not carry.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CategoryScore {
    pub title: String,
    /// Score on a 0-100 scale, rounded to the nearest integer.
    pub score: u8,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Vitals {
    pub lcp: String,
    pub cls: String,
    pub inp: String,
}

/// Header details copied from the report, all optional.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct ReportHeader {
    pub lighthouse_version: Option<String>,
    pub requested_url: Option<String>,
    pub fetch_time: Option<String>,
    pub runtime_error: Option<String>,
}

/// What gets printed at the end of a successful run.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Summary {
    pub header: ReportHeader,
    pub scores: Vec<CategoryScore>,
    pub vitals: Vitals,
}
