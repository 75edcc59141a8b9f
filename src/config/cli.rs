use crate::utils::error::{PlanError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

const VALID_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "recipe-plan")]
#[command(about = "Loads and validates the shopping-list agent milestone plan")]
pub struct CliConfig {
    #[arg(long, default_value = "./plan.toml")]
    pub plan_path: String,

    #[arg(long, default_value = "text", help = "Output format: text or json")]
    pub format: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("plan_path", &self.plan_path)?;

        if !VALID_FORMATS.contains(&self.format.as_str()) {
            return Err(PlanError::ValidationError {
                field: "format".to_string(),
                message: format!(
                    "Unsupported format '{}'. Valid formats: {}",
                    self.format,
                    VALID_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CliConfig::parse_from(["recipe-plan"]);
        assert_eq!(config.plan_path, "./plan.toml");
        assert_eq!(config.format, "text");
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unsupported_format_rejected() {
        let config = CliConfig::parse_from(["recipe-plan", "--format", "yaml"]);
        assert!(config.validate().is_err());
    }
}
