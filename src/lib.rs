pub mod config;
pub mod error;
pub mod extractor;
pub mod parser;
pub mod plan;

pub use crate::config::Settings;
pub use crate::error::{ExtractError, Result};
pub use crate::extractor::PlanExtractor;
pub use crate::plan::{PlanRecord, UNLIMITED_MINUTES};
