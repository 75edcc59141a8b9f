pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::plan::{Milestone, PlanDocument, ProjectInfo};
pub use utils::error::{PlanError, Result};
