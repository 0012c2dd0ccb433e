//! Error types for showroom operations.
//!
//! This module defines [`ShowroomError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ShowroomError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ShowroomError::Other`) inside collaborator adapters
//! - Validation problems are never errors: they travel as an
//!   [`ErrorMap`](crate::wizard::ErrorMap)

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for showroom operations.
#[derive(Debug, Error)]
pub enum ShowroomError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Failed to read or parse an inventory file.
    #[error("Failed to load inventory at {path}: {message}")]
    InventoryParseError { path: PathBuf, message: String },

    /// No listing with the given id exists in the inventory.
    #[error("Unknown vehicle: {id}")]
    UnknownVehicle { id: String },

    /// A field received a value it cannot hold.
    #[error("Invalid value for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    /// A field is not part of the draft in its current shape.
    #[error("Field '{field}' is not available: {reason}")]
    FieldUnavailable { field: String, reason: String },

    /// The payment method was chosen by the host and is fixed for the session.
    #[error("Payment method was preselected and cannot be changed")]
    PaymentMethodLocked,

    /// A wizard operation was called from a state that does not allow it.
    #[error("Invalid wizard state: {message}")]
    InvalidWizardState { message: String },

    /// A step failed validation where the buyer cannot be asked again.
    #[error("Step '{step}' is incomplete: {errors}")]
    ValidationFailed { step: String, errors: String },

    /// Export requested before the draft is complete.
    #[error("Order document can only be exported once all details are filled in")]
    ExportUnavailable,

    /// Lead submission could not be completed.
    #[error("Submission failed: {message}")]
    Submission { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for showroom operations.
pub type Result<T> = std::result::Result<T, ShowroomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = ShowroomError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ShowroomError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn inventory_parse_error_displays_path() {
        let err = ShowroomError::InventoryParseError {
            path: PathBuf::from("stock.yml"),
            message: "expected a sequence".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("stock.yml"));
        assert!(msg.contains("expected a sequence"));
    }

    #[test]
    fn invalid_input_displays_field_and_message() {
        let err = ShowroomError::InvalidInput {
            field: "buyerType".into(),
            message: "unknown option 'dealer'".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("buyerType"));
        assert!(msg.contains("dealer"));
    }

    #[test]
    fn field_unavailable_displays_reason() {
        let err = ShowroomError::FieldUnavailable {
            field: "jobSector".into(),
            reason: "payment method is not finance".into(),
        };
        assert!(err.to_string().contains("not finance"));
    }

    #[test]
    fn validation_failed_lists_errors() {
        let err = ShowroomError::ValidationFailed {
            step: "personal_info".into(),
            errors: "Phone: Please enter your phone number".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("personal_info"));
        assert!(msg.contains("Phone"));
    }

    #[test]
    fn unknown_vehicle_displays_id() {
        let err = ShowroomError::UnknownVehicle { id: "cx-90".into() };
        assert!(err.to_string().contains("cx-90"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ShowroomError = io_err.into();
        assert!(matches!(err, ShowroomError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: ShowroomError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, ShowroomError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
