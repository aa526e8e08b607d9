//! Wait for a local web server to come up, run Lighthouse against it, and
//! summarize the category scores and core web vitals.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::AuditConfig;
pub use error::{AuditError, Result};
