use crate::error::{AuditError, Result};
use crate::models::Report;
use std::path::Path;
use tokio::fs;

/// Read and decode the report the audit tool wrote. Only call this after the
/// tool has exited, the file is not written atomically.
pub async fn read_report(path: &Path) -> Result<Report> {
    let buffer = fs::read(path).await.map_err(|source| AuditError::ReportRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice::<Report>(&buffer).map_err(AuditError::from_decode)
}
