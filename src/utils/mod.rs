pub mod url_utils;
pub mod file_utils;
pub mod log_utils;

pub use url_utils::parse_target_url;
pub use file_utils::read_report;
pub use log_utils::init_logging;
