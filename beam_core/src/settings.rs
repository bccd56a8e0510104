//! # Analysis Settings
//!
//! Tunables shared by the solver and the diagram evaluator. Settings are
//! plain serde data so they can travel with a beam definition; every field
//! has a default, so partial JSON is accepted.
//!
//! ```rust
//! use beam_core::settings::AnalysisSettings;
//!
//! let settings: AnalysisSettings = serde_json::from_str(r#"{"default_sample_points": 501}"#).unwrap();
//! assert_eq!(settings.default_sample_points, 501);
//! assert_eq!(settings.equilibrium_tolerance, 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

/// Default absolute tolerance for the post-solve equilibrium check (N, N·m)
pub const DEFAULT_EQUILIBRIUM_TOLERANCE: f64 = 1e-9;

/// Default number of diagram samples (every 1% of the length)
pub const DEFAULT_SAMPLE_POINTS: usize = 101;

/// Settings applied to one beam's analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Absolute tolerance on equilibrium residuals; exceeding it raises a
    /// `NumericalWarning`
    pub equilibrium_tolerance: f64,

    /// Sample count used by `sample_default`
    pub default_sample_points: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            equilibrium_tolerance: DEFAULT_EQUILIBRIUM_TOLERANCE,
            default_sample_points: DEFAULT_SAMPLE_POINTS,
        }
    }
}

impl AnalysisSettings {
    /// Set the equilibrium tolerance and return self (builder pattern)
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.equilibrium_tolerance = tolerance;
        self
    }

    /// Set the default sample count and return self (builder pattern)
    pub fn with_sample_points(mut self, points: usize) -> Self {
        self.default_sample_points = points;
        self
    }

    /// Validate settings values
    pub fn validate(&self) -> BeamResult<()> {
        if !self.equilibrium_tolerance.is_finite() || self.equilibrium_tolerance < 0.0 {
            return Err(BeamError::invalid_input(
                "equilibrium_tolerance",
                self.equilibrium_tolerance,
                "Tolerance must be a finite, non-negative number",
            ));
        }
        if self.default_sample_points < 2 {
            return Err(BeamError::invalid_input(
                "default_sample_points",
                self.default_sample_points,
                "At least 2 samples are needed to span both beam ends",
            ));
        }
        Ok(())
    }
}
