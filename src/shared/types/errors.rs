use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Structurally invalid ride measurements (negative values, bad date).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A pricing rule violates its authoring constraints.
    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        Self::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        let err = DomainError::not_found("PricingConfig", "id", 7);
        assert_eq!(err.to_string(), "Not found: PricingConfig with id=7");
    }

    #[test]
    fn invalid_input_message() {
        let err = DomainError::InvalidInput("distance must be non-negative".into());
        assert_eq!(
            err.to_string(),
            "Invalid input: distance must be non-negative"
        );
    }
}
