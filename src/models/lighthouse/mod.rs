pub mod report;
pub mod category;
pub mod audit;
pub mod summary;
pub mod status;

pub use report::{Report, RuntimeError};
pub use category::{Categories, Category};
pub use audit::{Audit, Audits};
pub use summary::{CategoryScore, ReportHeader, Summary, Vitals, NOT_AVAILABLE};
pub use status::RunState;
