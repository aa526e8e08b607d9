use crate::error::{AuditError, Result};
use crate::utils::parse_target_url;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TARGET_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_OUTPUT_PATH: &str = "lighthouse-report.json";
pub const DEFAULT_CATEGORIES: [&str; 4] = ["performance", "accessibility", "best-practices", "seo"];

/// `npx` is a batch shim on Windows and cannot be spawned without its extension.
#[cfg(windows)]
pub const DEFAULT_PROGRAM: &str = "npx.cmd";
#[cfg(not(windows))]
pub const DEFAULT_PROGRAM: &str = "npx";

/// Settings shared by the prober and the audit invoker. Built once and
/// never mutated during a run.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub target_url: String,
    pub timeout: Duration,
    pub retry_interval: Duration,
    pub output_path: PathBuf,
    /// Executable that runs Lighthouse.
    pub program: String,
    /// Arguments placed before the target URL, e.g. `lighthouse` for `npx`.
    pub program_args: Vec<String>,
    pub categories: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        AuditConfig {
            target_url: DEFAULT_TARGET_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry_interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            program: DEFAULT_PROGRAM.to_string(),
            program_args: vec!["lighthouse".to_string()],
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl AuditConfig {
    pub fn validate(&self) -> Result<()> {
        parse_target_url(&self.target_url)?;

        if self.timeout.is_zero() {
            return Err(AuditError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }
        if self.retry_interval.is_zero() {
            return Err(AuditError::InvalidConfig(
                "retry interval must be greater than zero".to_string(),
            ));
        }
        if self.program.trim().is_empty() {
            return Err(AuditError::InvalidConfig(
                "audit program must not be empty".to_string(),
            ));
        }
        if self.categories.iter().all(|c| c.trim().is_empty()) {
            return Err(AuditError::InvalidConfig(
                "at least one audit category is required".to_string(),
            ));
        }
        Ok(())
    }
}
