use crate::utils::error::{PlanError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlanError::ValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_slug(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    let valid = value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if !valid {
        return Err(PlanError::ValidationError {
            field: field_name.to_string(),
            message: format!(
                "'{}' is not a valid slug (lowercase letters, digits, '-' and '_' only)",
                value
            ),
        });
    }
    Ok(())
}

pub fn validate_unique_ids<'a, I>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(PlanError::ValidationError {
                field: field_name.to_string(),
                message: format!("Duplicate id '{}'", id),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_string_rejects_whitespace() {
        assert!(validate_non_empty_string("field", "value").is_ok());
        assert!(validate_non_empty_string("field", "").is_err());
        assert!(validate_non_empty_string("field", "   ").is_err());
    }

    #[test]
    fn test_slug_format() {
        assert!(validate_slug("id", "fetch-web-content").is_ok());
        assert!(validate_slug("id", "step_2").is_ok());
        assert!(validate_slug("id", "Fetch Content").is_err());
        assert!(validate_slug("id", "").is_err());
    }

    #[test]
    fn test_unique_ids_detects_duplicates() {
        assert!(validate_unique_ids("ids", vec!["a", "b", "c"]).is_ok());

        let err = validate_unique_ids("ids", vec!["a", "dup", "dup"]).unwrap_err();
        match err {
            PlanError::ValidationError { field, message } => {
                assert_eq!(field, "ids");
                assert!(message.contains("dup"));
            }
            other => panic!("Unexpected error: {:?}", other),
        }
    }
}
