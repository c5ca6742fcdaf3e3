//! TOML policy file loader

use std::path::Path;

use crate::application::dto::PolicyDocument;
use crate::shared::errors::ConfigError;

pub fn load_policy_file(path: &Path) -> Result<PolicyDocument, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_policy(&raw)
}

pub fn parse_policy(raw: &str) -> Result<PolicyDocument, ConfigError> {
    Ok(toml::from_str(raw)?)
}
