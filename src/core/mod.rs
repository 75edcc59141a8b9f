pub mod plan;

pub use crate::utils::error::Result;
pub use plan::{Milestone, PlanDocument, ProjectInfo};
