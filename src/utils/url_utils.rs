use crate::error::{AuditError, Result};
use reqwest::Url;

/// Parse the probe target, accepting only http and https URLs with a host.
pub fn parse_target_url(target: &str) -> Result<Url> {
    let url = Url::parse(target)
        .map_err(|e| AuditError::InvalidConfig(format!("invalid target URL {}: {}", target, e)))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AuditError::InvalidConfig(format!(
                "unsupported URL scheme {:?} in {}",
                other, target
            )))
        }
    }

    if url.host_str().is_none() {
        return Err(AuditError::InvalidConfig(format!(
            "target URL {} has no host",
            target
        )));
    }

    Ok(url)
}
