//! Error types for a probe-and-audit run

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// Result type alias using [`AuditError`]
pub type Result<T> = std::result::Result<T, AuditError>;

/// Everything that can end a run early. All variants are fatal for the run;
/// the only retried failures are the transient probe errors, which never
/// surface here.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("server at {} did not respond within {}s", .url, .timeout.as_secs_f64())]
    ServerUnreachable { url: String, timeout: Duration },

    #[error("probe failed: {0}")]
    Probe(#[from] reqwest::Error),

    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Lighthouse exited with {status}: {detail}")]
    ToolFailed { status: ExitStatus, detail: String },

    #[error("failed to read report {}: {source}", .path.display())]
    ReportRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("report is not valid JSON: {0}")]
    ReportParse(#[source] serde_json::Error),

    #[error("unexpected report shape: {0}")]
    UnexpectedShape(String),
}

impl AuditError {
    /// True when the audit tool itself ran and reported failure, as opposed
    /// to a launch, probe, or report problem.
    pub fn is_tool_failure(&self) -> bool {
        matches!(self, AuditError::ToolFailed { .. })
    }

    /// Split a decode error into malformed input and well-formed input with
    /// the wrong shape.
    pub fn from_decode(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => AuditError::UnexpectedShape(err.to_string()),
            _ => AuditError::ReportParse(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_are_classified() {
        let truncated = serde_json::from_str::<serde_json::Value>("{\"categories\": {")
            .expect_err("truncated input");
        assert!(matches!(
            AuditError::from_decode(truncated),
            AuditError::ReportParse(_)
        ));

        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Needs {
            categories: u32,
        }
        let wrong = serde_json::from_str::<Needs>("{}").expect_err("missing field");
        assert!(matches!(
            AuditError::from_decode(wrong),
            AuditError::UnexpectedShape(_)
        ));
    }

    #[test]
    fn only_tool_failed_is_a_tool_failure() {
        assert!(!AuditError::UnexpectedShape("x".into()).is_tool_failure());
        assert!(!AuditError::InvalidConfig("x".into()).is_tool_failure());
    }
}
