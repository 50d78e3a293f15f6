use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A tuning value that would make the rules divide by zero or run backwards.
    #[error("invalid configuration: {field} = {value} ({reason})")]
    InvalidConfiguration {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, value: f32, reason: &'static str) -> Self {
        Self::InvalidConfiguration { field, value, reason }
    }
}

pub(crate) fn require_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, value, "must be a finite value > 0"))
    }
}

pub(crate) fn require_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, value, "must be a finite value >= 0"))
    }
}
