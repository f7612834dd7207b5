//! Output formatting for subnet details.
//!
//! - [`report`] - sectioned text report for the terminal
//! - [`json`] - machine readable JSON

mod json;
mod report;

pub use json::subnet_json;
pub use report::{heading, subnet_report};
