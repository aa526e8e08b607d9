// src/services/site_audit_service/mod.rs

pub mod compute;
pub mod lighthouse;
pub mod probe;

pub use compute::{extract_summary, render_summary, round_score};
pub use lighthouse::{lighthouse_args, run_lighthouse};
pub use probe::{wait_for_server, AttemptError, HttpCheck, ReachabilityCheck};

use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use crate::models::{RunState, Summary};
use crate::utils::read_report;
use log::debug;

/// Tracks where a run is, and logs each step.
struct Pipeline {
    state: RunState,
}

impl Pipeline {
    fn new() -> Self {
        Pipeline {
            state: RunState::Idle,
        }
    }

    fn advance(&mut self, next: RunState) {
        debug_assert!(!self.state.is_terminal(), "run already {}", self.state);
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {} -> {}",
            self.state,
            next
        );
        debug!("run state {} -> {}", self.state, next);
        self.state = next;
    }

    fn fail(&mut self, err: AuditError) -> AuditError {
        self.advance(RunState::Failed);
        err
    }
}

/// Wait for the server, audit it, and print the summary.
///
/// Probing uses the production HTTP check; see [`run_with`] to substitute
/// another one.
pub async fn run(config: &AuditConfig) -> Result<Summary> {
    let check = HttpCheck::new()?;
    run_with(&check, config).await
}

pub async fn run_with<C: ReachabilityCheck>(check: &C, config: &AuditConfig) -> Result<Summary> {
    config.validate()?;
    let mut pipeline = Pipeline::new();

    pipeline.advance(RunState::Probing);
    println!("Checking if server is running at {}...", config.target_url);
    let reachable = wait_for_server(
        check,
        &config.target_url,
        config.timeout,
        config.retry_interval,
    )
    .await
    .map_err(|e| pipeline.fail(e))?;

    if !reachable {
        return Err(pipeline.fail(AuditError::ServerUnreachable {
            url: config.target_url.clone(),
            timeout: config.timeout,
        }));
    }

    pipeline.advance(RunState::AuditRunning);
    println!("Running Lighthouse audit for {}...", config.target_url);
    let summary = async {
        run_lighthouse(config).await?;
        let report = read_report(&config.output_path).await?;
        extract_summary(&report)
    }
    .await
    .map_err(|e| pipeline.fail(e))?;

    pipeline.advance(RunState::Reporting);
    print!("{}", render_summary(&summary));

    pipeline.advance(RunState::Done);
    Ok(summary)
}

/// The line printed for a failed run.
pub fn describe_failure(err: &AuditError) -> String {
    match err {
        AuditError::ServerUnreachable { .. } => {
            format!("Server not found! Start the server first ({}).", err)
        }
        AuditError::InvalidConfig(_) => err.to_string(),
        e if e.is_tool_failure() => format!("Error running Lighthouse: {}", e),
        e => format!("Unexpected error: {}", e),
    }
}
