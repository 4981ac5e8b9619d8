use crate::utils::error::{AppError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Table names must be plain SQL identifiers and the list must not be empty.
pub fn validate_table_names(field_name: &str, tables: &[String]) -> Result<()> {
    if tables.is_empty() {
        return Err(AppError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for table in tables {
        validate_non_empty_string(field_name, table)?;

        let mut chars = table.chars();
        let valid_start = chars
            .next()
            .map(|c| c.is_ascii_alphabetic() || c == '_')
            .unwrap_or(false);
        if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(AppError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: table.clone(),
                reason: "Table names may only contain letters, digits and underscores"
                    .to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("database.path", "airport.db").is_ok());
        assert!(validate_path("database.path", "").is_err());
        assert!(validate_path("database.path", "air\0port.db").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "runway").is_ok());
        assert!(validate_non_empty_string("name", "  ").is_err());
    }

    #[test]
    fn test_validate_table_names() {
        let tables = vec!["continent".to_string(), "airport_frequency".to_string()];
        assert!(validate_table_names("required_tables", &tables).is_ok());

        assert!(matches!(
            validate_table_names("required_tables", &[]),
            Err(AppError::MissingConfigError { .. })
        ));

        let invalid = vec!["runway; DROP TABLE x".to_string()];
        assert!(validate_table_names("required_tables", &invalid).is_err());

        let leading_digit = vec!["1runway".to_string()];
        assert!(validate_table_names("required_tables", &leading_digit).is_err());
    }
}
