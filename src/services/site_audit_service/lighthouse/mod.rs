pub mod lighthouse;

pub use lighthouse::{lighthouse_args, run_lighthouse};
