//! growthpath-report: JSON, Markdown and HTML output for the final report
//! and the improvement plan.

pub mod document;
pub mod html;
pub mod markdown;

pub use document::{FinalReport, PlanReport};
