//! # beam_core - Statically Determinate Beam Analysis
//!
//! `beam_core` solves support reactions of statically determinate 2D beams
//! (simply supported, cantilever, pinned + roller with overhangs) and
//! evaluates shear, moment and axial-force diagrams along them.
//!
//! ## Design Philosophy
//!
//! - **Declared configuration**: a beam states up front how it is supported,
//!   and every support is checked against that as it is added
//! - **Explicit state**: solved reactions live inside the beam's `Solved`
//!   state, so any change drops them
//! - **JSON-First**: all public data types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Sign Convention
//!
//! Forces (loads and reactions) are positive downward and moments positive
//! counter-clockwise. Shear is positive when the left part tends upward;
//! bending moment is positive sagging. SI units throughout (m, N, N·m).
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{Beam, BeamConfiguration, SupportKind};
//!
//! let mut beam = Beam::new(5.0, BeamConfiguration::SimpleRoller)?.with_label("Lintel L1");
//! let roller = beam.add_support(SupportKind::Roller, 0.0)?;
//! let pinned = beam.add_support(SupportKind::Pinned, 5.0)?;
//! beam.add_point_load(1000.0, 2.0)?;
//!
//! let reactions = beam.reactions()?;
//! assert!((reactions.get(roller).unwrap().vertical + 600.0).abs() < 1e-9);
//! assert!((reactions.get(pinned).unwrap().vertical + 400.0).abs() < 1e-9);
//!
//! let samples = beam.sample(51)?;
//! assert_eq!(samples.last().unwrap().position, 5.0);
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&beam).unwrap();
//! # assert!(json.contains("Lintel L1"));
//! # Ok::<(), beam_core::BeamError>(())
//! ```
//!
//! ## Modules
//!
//! - [`beam`] - Beam model, configurations and analysis state
//! - [`supports`] - Support kinds and restraint counts
//! - [`loads`] - Point, distributed and moment loads
//! - [`solver`] - Equilibrium solver and reactions
//! - [`diagram`] - Shear/moment diagrams, critical points and extremes
//! - [`settings`] - Analysis tolerances and defaults
//! - [`errors`] - Structured error types

pub mod beam;
pub mod diagram;
pub mod errors;
pub mod loads;
pub mod settings;
pub mod solver;
pub mod supports;

// Re-export commonly used types at crate root for convenience
pub use beam::{Beam, BeamConfiguration, BeamDefinition, BeamStatus};
pub use diagram::{Analysis, CriticalPoint, DiagramExtremes, DiagramSample, SectionForces};
pub use errors::{BeamError, BeamResult, NumericalWarning};
pub use loads::{AppliedLoad, Load, LoadId};
pub use settings::AnalysisSettings;
pub use solver::{Reactions, SupportReaction};
pub use supports::{Support, SupportId, SupportKind};
