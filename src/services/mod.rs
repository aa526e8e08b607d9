pub mod site_audit_service;

pub use site_audit_service::{
    describe_failure, extract_summary, render_summary, run, run_lighthouse, run_with,
    wait_for_server, HttpCheck, ReachabilityCheck,
};
