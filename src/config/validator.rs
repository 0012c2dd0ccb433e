//! Configuration validation rules.
//!
//! - The submission endpoint must be an http(s) URL
//! - Timeouts and debounce delays must be positive

use crate::config::schema::ShowroomConfig;
use crate::error::{Result, ShowroomError};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Dotted config key the error is about
    pub key: String,
}

impl ValidationError {
    fn new(rule: &str, key: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            key: key.to_string(),
        }
    }
}

/// Validate a configuration and return every problem found.
pub fn validate_config(config: &ShowroomConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(endpoint) = &config.submission.endpoint {
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            errors.push(ValidationError::new(
                "endpoint-scheme",
                "submission.endpoint",
                format!("Submission endpoint '{}' must start with http:// or https://", endpoint),
            ));
        }
    }

    if config.submission.timeout_secs == 0 {
        errors.push(ValidationError::new(
            "zero-timeout",
            "submission.timeout_secs",
            "Submission timeout must be greater than zero".to_string(),
        ));
    }

    if config.inventory.debounce_ms == 0 {
        errors.push(ValidationError::new(
            "zero-debounce",
            "inventory.debounce_ms",
            "Filter debounce delay must be greater than zero".to_string(),
        ));
    }

    errors
}

/// Validate a configuration, failing with every message joined.
pub fn validate(config: &ShowroomConfig) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        return Ok(());
    }

    Err(ShowroomError::ConfigValidationError {
        message: errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ShowroomConfig::default()).is_empty());
        assert!(validate(&ShowroomConfig::default()).is_ok());
    }

    #[test]
    fn endpoint_must_be_http() {
        let mut config = ShowroomConfig::default();
        config.submission.endpoint = Some("ftp://leads.example.com".to_string());

        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "endpoint-scheme");
        assert_eq!(errors[0].key, "submission.endpoint");
    }

    #[test]
    fn https_endpoint_is_valid() {
        let mut config = ShowroomConfig::default();
        config.submission.endpoint = Some("https://leads.example.com".to_string());
        assert!(validate_config(&config).is_empty());
    }

    #[test]
    fn collects_every_problem() {
        let mut config = ShowroomConfig::default();
        config.submission.endpoint = Some("leads".to_string());
        config.submission.timeout_secs = 0;
        config.inventory.debounce_ms = 0;

        let rules: Vec<_> = validate_config(&config).into_iter().map(|e| e.rule).collect();
        assert_eq!(rules, vec!["endpoint-scheme", "zero-timeout", "zero-debounce"]);

        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }
}
