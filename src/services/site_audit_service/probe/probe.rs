use crate::error::{AuditError, Result};
use log::debug;
use reqwest::Client;
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Why a single reachability attempt did not succeed.
#[derive(Debug)]
pub enum AttemptError {
    /// The server is not accepting requests yet. Retried until the timeout.
    NotReady(String),
    /// Anything else. Ends the probe immediately.
    Fatal(AuditError),
}

/// One reachability attempt against a URL.
#[allow(async_fn_in_trait)]
pub trait ReachabilityCheck {
    async fn check(&self, url: &str) -> std::result::Result<(), AttemptError>;
}

/// Plain HTTP GET with the client's default timeouts. Proxy environment
/// variables are ignored; the target is normally a local dev server.
#[derive(Debug, Clone)]
pub struct HttpCheck {
    client: Client,
}

impl HttpCheck {
    pub fn new() -> Result<Self> {
        let client = Client::builder().no_proxy().build()?;
        Ok(HttpCheck { client })
    }
}

impl ReachabilityCheck for HttpCheck {
    async fn check(&self, url: &str) -> std::result::Result<(), AttemptError> {
        match self.client.get(url).send().await {
            Ok(response) => match response.error_for_status() {
                Ok(_) => Ok(()),
                // Up but not serving yet, e.g. a dev server still compiling.
                Err(e) => Err(AttemptError::NotReady(e.to_string())),
            },
            Err(e) if is_transient(&e) => Err(AttemptError::NotReady(e.to_string())),
            Err(e) => Err(AttemptError::Fatal(AuditError::Probe(e))),
        }
    }
}

fn is_transient(error: &reqwest::Error) -> bool {
    error.is_connect() || error.is_timeout() || error.is_request()
}

/// Poll `url` until one attempt succeeds or `timeout` has elapsed.
///
/// Returns `Ok(true)` on the first successful attempt and `Ok(false)` once
/// the timeout is reached without one. The last sleep is clipped to the
/// remaining time, so a failing probe returns between `timeout` and
/// `timeout + interval`. Non-transient errors are returned as `Err` without
/// retrying.
pub async fn wait_for_server<C: ReachabilityCheck>(
    check: &C,
    url: &str,
    timeout: Duration,
    interval: Duration,
) -> Result<bool> {
    let start = Instant::now();
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        match check.check(url).await {
            Ok(()) => {
                debug!("{} reachable after {} attempt(s)", url, attempts);
                return Ok(true);
            }
            Err(AttemptError::NotReady(reason)) => {
                debug!("attempt {} against {} failed: {}", attempts, url, reason);
            }
            Err(AttemptError::Fatal(e)) => return Err(e),
        }

        let elapsed = start.elapsed();
        if elapsed >= timeout {
            debug!("giving up on {} after {} attempt(s)", url, attempts);
            return Ok(false);
        }
        sleep(interval.min(timeout - elapsed)).await;
    }
}
