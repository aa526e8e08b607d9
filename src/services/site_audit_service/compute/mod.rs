pub mod summary;

pub use summary::{extract_summary, render_summary, round_score};
