//! # Error Types
//!
//! Structured error types for beam_core. Every fallible operation returns a
//! [`BeamResult`], and each [`BeamError`] variant carries enough context to
//! tell which call was rejected and why.
//!
//! Range and configuration errors are raised at the offending call. Structural
//! errors can only be detected once the full support set is known, so they are
//! raised by `validate_structure` or on the first solve.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn check_position(position_m: f64, length_m: f64) -> BeamResult<()> {
//!     if !(0.0..=length_m).contains(&position_m) {
//!         return Err(BeamError::out_of_range(
//!             "position",
//!             position_m,
//!             format!("must lie within [0, {length_m}]"),
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_position(2.0, 5.0).is_ok());
//! assert_eq!(check_position(6.0, 5.0).unwrap_err().error_code(), "RANGE_ERROR");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for beam configuration and analysis.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// A position or interval lies outside `[0, L]`, or `start >= end`
    #[error("Out of range '{field}': {value} - {reason}")]
    Range {
        field: String,
        value: String,
        reason: String,
    },

    /// The support set does not match the declared beam configuration
    #[error("Configuration error ({configuration}): {reason}")]
    Configuration {
        configuration: String,
        reason: String,
    },

    /// Total static unknowns differ from 3 (unstable or indeterminate)
    #[error("Structural error: {unknowns} static unknowns, expected 3 - {reason}")]
    Structural { unknowns: u32, reason: String },

    /// A non-position argument is invalid (non-finite, non-positive length, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Generic internal error (should be unreachable)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BeamError {
    /// Create a Range error
    pub fn out_of_range(field: impl Into<String>, value: impl ToString, reason: impl Into<String>) -> Self {
        BeamError::Range {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a Configuration error
    pub fn configuration(configuration: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::Configuration {
            configuration: configuration.into(),
            reason: reason.into(),
        }
    }

    /// Create a Structural error
    pub fn structural(unknowns: u32, reason: impl Into<String>) -> Self {
        BeamError::Structural {
            unknowns,
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl ToString, reason: impl Into<String>) -> Self {
        BeamError::InvalidInput {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        BeamError::Internal {
            message: message.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::Range { .. } => "RANGE_ERROR",
            BeamError::Configuration { .. } => "CONFIGURATION_ERROR",
            BeamError::Structural { .. } => "STRUCTURAL_ERROR",
            BeamError::InvalidInput { .. } => "INVALID_INPUT",
            BeamError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

/// Reject NaN and infinities for a named numeric argument.
pub(crate) fn ensure_finite(field: &str, value: f64) -> BeamResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BeamError::invalid_input(field, value, "must be a finite number"))
    }
}

/// Which equilibrium equation a residual belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquilibriumCheck {
    /// ΣFy over loads and reactions
    VerticalForce,
    /// ΣM about the solver's reference support
    MomentAboutReference,
}

impl std::fmt::Display for EquilibriumCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EquilibriumCheck::VerticalForce => "ΣFy",
            EquilibriumCheck::MomentAboutReference => "ΣM (reference)",
        };
        f.write_str(name)
    }
}

/// Non-fatal post-solve finding: an equilibrium residual exceeded tolerance.
///
/// Warnings are logged and stored on the reactions; they never abort a solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericalWarning {
    pub check: EquilibriumCheck,
    pub residual: f64,
    pub tolerance: f64,
}

impl std::fmt::Display for NumericalWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "equilibrium residual {} = {:.3e} exceeds tolerance {:.1e}",
            self.check, self.residual, self.tolerance
        )
    }
}
