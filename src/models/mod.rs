// src/models/mod.rs

pub mod lighthouse;

pub use lighthouse::{
    Audit, Audits, Categories, Category, CategoryScore, Report, ReportHeader, RunState, RuntimeError,
    Summary, Vitals, NOT_AVAILABLE,
};
