use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use log::{debug, info};
use std::collections::VecDeque;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use tokio::fs;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{ChildStderr, Command};

const STDERR_TAIL_LINES: usize = 20;

/// Arguments passed to the audit program, in order. Each element is one argv
/// entry; nothing goes through a shell, so the Chrome flags need no quoting.
pub fn lighthouse_args(config: &AuditConfig) -> Vec<String> {
    let categories: Vec<&str> = config
        .categories
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect();

    let mut args = config.program_args.clone();
    args.push(config.target_url.clone());
    args.push("--output=json".to_string());
    args.push(format!("--output-path={}", config.output_path.display()));
    args.push("--chrome-flags=--headless --no-sandbox".to_string());
    args.push(format!("--only-categories={}", categories.join(",")));
    args
}

/// Run Lighthouse against the configured URL and wait for it to exit.
///
/// Both output streams reach the user as the tool runs. Lighthouse logs its
/// progress on stderr, so that stream is relayed line by line and its tail is
/// kept for the failure detail. There is no timeout on the wait.
pub async fn run_lighthouse(config: &AuditConfig) -> Result<()> {
    remove_stale_report(&config.output_path).await?;

    let args = lighthouse_args(config);
    info!("launching {} {}", config.program, args.join(" "));

    let launch_error = |source: std::io::Error| AuditError::Launch {
        program: config.program.clone(),
        source,
    };

    let mut child = Command::new(&config.program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(launch_error)?;

    let mut tail = StderrTail::default();
    if let Some(stderr) = child.stderr.take() {
        relay_stderr(stderr, &mut tail).await.map_err(launch_error)?;
    }
    let status = child.wait().await.map_err(launch_error)?;

    if !status.success() {
        return Err(AuditError::ToolFailed {
            status,
            detail: tail.into_detail(),
        });
    }

    debug!("Lighthouse report saved to {}", config.output_path.display());
    Ok(())
}

/// A report left over from an earlier run must not be mistaken for this
/// run's output if the tool exits cleanly without writing one.
async fn remove_stale_report(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => {
            debug!("removed previous report {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(AuditError::ReportRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Copy the tool's stderr to ours until it closes, remembering the last lines.
async fn relay_stderr(stderr: ChildStderr, tail: &mut StderrTail) -> std::io::Result<()> {
    let mut reader = BufReader::new(stderr);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end();
        eprintln!("{}", line);
        tail.push(line);
    }
}

/// Last non-blank stderr lines of the tool.
#[derive(Debug, Default)]
struct StderrTail {
    lines: VecDeque<String>,
}

impl StderrTail {
    fn push(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        if self.lines.len() == STDERR_TAIL_LINES {
            self.lines.pop_front();
        }
        self.lines.push_back(line.to_string());
    }

    fn into_detail(self) -> String {
        if self.lines.is_empty() {
            return "no output on stderr".to_string();
        }
        Vec::from(self.lines).join("\n")
    }
}
