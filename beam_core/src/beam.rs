//! # Beam Model
//!
//! A straight beam of length `L` with its declared support configuration,
//! supports, loads and analysis state.
//!
//! ## Configurations
//!
//! | Configuration     | Supports                                   |
//! |-------------------|--------------------------------------------|
//! | `SimplySupported` | two vertical supports, declared left to right |
//! | `Cantilever`      | one fixed support at `x = 0` or `x = L`    |
//! | `SimpleRoller`    | one pinned + one roller, any order, overhangs allowed |
//!
//! ## Lifecycle
//!
//! ```text
//! Unconfigured ──add──▶ Configured ──validate_structure──▶ Solvable ──solve──▶ Solved
//!                           ▲                                                     │
//!                           └────────────────── any mutation ─────────────────────┘
//! ```
//!
//! Solved reactions live inside the `Solved` state, so a mutation that
//! replaces the state drops them: a stale cache cannot be read.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::{Beam, BeamConfiguration, BeamStatus};
//! use beam_core::supports::SupportKind;
//!
//! let mut beam = Beam::new(5.0, BeamConfiguration::SimpleRoller)?;
//! assert_eq!(beam.status(), BeamStatus::Unconfigured);
//!
//! beam.add_support(SupportKind::Roller, 0.0)?;
//! beam.add_support(SupportKind::Pinned, 5.0)?;
//! beam.add_point_load(1000.0, 2.0)?;
//! beam.validate_structure()?;
//! assert_eq!(beam.status(), BeamStatus::Solvable);
//!
//! let total: f64 = beam.reactions()?.supports.iter().map(|r| r.vertical).sum();
//! assert!((total + 1000.0).abs() < 1e-9);
//! assert_eq!(beam.status(), BeamStatus::Solved);
//! # Ok::<(), beam_core::errors::BeamError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::diagram::{Analysis, DiagramSample, SectionForces};
use crate::errors::{ensure_finite, BeamError, BeamResult};
use crate::loads::{check_within, AppliedLoad, Load, LoadId};
use crate::settings::AnalysisSettings;
use crate::solver::{self, Reactions};
use crate::supports::{Support, SupportId, SupportKind};

/// Label given to beams created without one
pub const DEFAULT_BEAM_LABEL: &str = "Unnamed beam";

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Support configuration a beam declares; selects the solver strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeamConfiguration {
    /// Two vertical supports A and B, declared with `A` left of `B`
    SimplySupported,
    /// A single fixed support at one end
    Cantilever,
    /// One pinned and one roller support in either order; loads may sit on
    /// overhangs beyond either support
    SimpleRoller,
}

impl BeamConfiguration {
    /// Number of supports this configuration takes
    pub fn support_count(&self) -> usize {
        match self {
            BeamConfiguration::Cantilever => 1,
            BeamConfiguration::SimplySupported | BeamConfiguration::SimpleRoller => 2,
        }
    }

    /// Returns true if a support of `kind` may be placed on this configuration
    pub fn allows(&self, kind: SupportKind) -> bool {
        match self {
            BeamConfiguration::Cantilever => kind == SupportKind::Fixed,
            BeamConfiguration::SimplySupported | BeamConfiguration::SimpleRoller => {
                kind != SupportKind::Fixed
            }
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BeamConfiguration::SimplySupported => "Simply supported",
            BeamConfiguration::Cantilever => "Cantilever",
            BeamConfiguration::SimpleRoller => "Pinned + roller",
        }
    }
}

impl std::fmt::Display for BeamConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Analysis state of a beam. Reactions exist only in `Solved`.
#[derive(Debug, Clone, Default)]
enum BeamState {
    #[default]
    Unconfigured,
    Configured,
    Solvable,
    Solved(Reactions),
}

/// Payload-free view of a beam's state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeamStatus {
    /// Nothing added yet
    Unconfigured,
    /// Supports and/or loads added, structure not yet validated
    Configured,
    /// `validate_structure` passed
    Solvable,
    /// Reactions computed and cached
    Solved,
}

// =============================================================================
// BEAM
// =============================================================================

/// A straight beam with supports and loads.
///
/// Serializes as a [`BeamDefinition`]; deserializing replays every support
/// and load through the same checks as the `add_*` methods. Cached reactions
/// are never serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "BeamDefinition", try_from = "BeamDefinition")]
pub struct Beam {
    label: String,
    length: f64,
    configuration: BeamConfiguration,
    settings: AnalysisSettings,
    supports: Vec<Support>,
    loads: Vec<AppliedLoad>,
    state: BeamState,
}

impl Beam {
    /// Create an empty beam.
    ///
    /// # Errors
    ///
    /// `InvalidInput` unless `length` is finite and positive.
    pub fn new(length: f64, configuration: BeamConfiguration) -> BeamResult<Self> {
        if !length.is_finite() || length <= 0.0 {
            return Err(BeamError::invalid_input(
                "length",
                length,
                "Beam length must be a finite, positive number",
            ));
        }
        Ok(Beam {
            label: DEFAULT_BEAM_LABEL.to_string(),
            length,
            configuration,
            settings: AnalysisSettings::default(),
            supports: Vec::new(),
            loads: Vec::new(),
            state: BeamState::Unconfigured,
        })
    }

    /// Set label and return self (builder pattern)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Replace the analysis settings and return self (builder pattern)
    pub fn with_settings(mut self, settings: AnalysisSettings) -> BeamResult<Self> {
        settings.validate()?;
        self.settings = settings;
        self.invalidate();
        Ok(self)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Beam length (m)
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn configuration(&self) -> BeamConfiguration {
        self.configuration
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Supports in declaration order
    pub fn supports(&self) -> &[Support] {
        &self.supports
    }

    /// Loads in declaration order
    pub fn loads(&self) -> &[AppliedLoad] {
        &self.loads
    }

    /// Get a load by ID
    pub fn load(&self, id: LoadId) -> Option<&AppliedLoad> {
        self.loads.iter().find(|l| l.id == id)
    }

    /// Get a support by ID
    pub fn support(&self, id: SupportId) -> Option<&Support> {
        self.supports.iter().find(|s| s.id == id)
    }

    pub fn status(&self) -> BeamStatus {
        match self.state {
            BeamState::Unconfigured => BeamStatus::Unconfigured,
            BeamState::Configured => BeamStatus::Configured,
            BeamState::Solvable => BeamStatus::Solvable,
            BeamState::Solved(_) => BeamStatus::Solved,
        }
    }

    // -------------------------------------------------------------------------
    // Loads
    // -------------------------------------------------------------------------

    /// Add a point force (N, positive downward) at `position` (m).
    ///
    /// # Errors
    ///
    /// `Range` unless `position ∈ [0, L]`.
    pub fn add_point_load(&mut self, magnitude: f64, position: f64) -> BeamResult<LoadId> {
        self.add_load(Load::point(magnitude, position))
    }

    /// Add a uniform distributed force (N/m, positive downward) over `[start, end]`.
    ///
    /// # Errors
    ///
    /// `Range` unless `0 ≤ start < end ≤ L`.
    pub fn add_distributed_load(&mut self, intensity: f64, start: f64, end: f64) -> BeamResult<LoadId> {
        self.add_load(Load::distributed(intensity, start, end))
    }

    /// Add a couple (N·m, positive counter-clockwise) at `position` (m).
    ///
    /// # Errors
    ///
    /// `Range` unless `position ∈ [0, L]`.
    pub fn add_moment(&mut self, magnitude: f64, position: f64) -> BeamResult<LoadId> {
        self.add_load(Load::moment(magnitude, position))
    }

    /// Add any load with a generated label
    pub fn add_load(&mut self, load: Load) -> BeamResult<LoadId> {
        self.push_load(AppliedLoad::new(load))
    }

    /// Add any load with a user label
    pub fn add_labeled_load(&mut self, load: Load, label: impl Into<String>) -> BeamResult<LoadId> {
        self.push_load(AppliedLoad::new(load).with_label(label))
    }

    fn push_load(&mut self, mut applied: AppliedLoad) -> BeamResult<LoadId> {
        applied.load.validate(self.length)?;
        if self.load(applied.id).is_some() {
            return Err(BeamError::invalid_input(
                "load_id",
                applied.id.0,
                "A load with this ID is already on the beam",
            ));
        }
        if applied.label.is_empty() {
            applied.label = applied.load.default_label();
        }
        let id = applied.id;
        self.loads.push(applied);
        self.invalidate();
        Ok(id)
    }

    /// Remove a load by ID.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if no load has this ID.
    pub fn remove_load(&mut self, id: LoadId) -> BeamResult<AppliedLoad> {
        let index = self
            .loads
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| BeamError::invalid_input("load_id", id.0, "No load with this ID"))?;
        let removed = self.loads.remove(index);
        self.invalidate();
        Ok(removed)
    }

    /// Remove every load
    pub fn clear_loads(&mut self) {
        self.loads.clear();
        self.invalidate();
    }

    // -------------------------------------------------------------------------
    // Supports
    // -------------------------------------------------------------------------

    /// Add a support at `position` (m).
    ///
    /// # Errors
    ///
    /// - `Range` unless `position ∈ [0, L]`, and for `Fixed` unless it is an end
    /// - `Configuration` if the declared configuration does not take this
    ///   kind, is already full, or the placement contradicts it
    pub fn add_support(&mut self, kind: SupportKind, position: f64) -> BeamResult<SupportId> {
        self.push_support(Support::new(kind, position))
    }

    fn push_support(&mut self, support: Support) -> BeamResult<SupportId> {
        ensure_finite("position", support.position)?;
        check_within("position", support.position, self.length)?;
        if support.kind == SupportKind::Fixed
            && support.position != 0.0
            && support.position != self.length
        {
            return Err(BeamError::out_of_range(
                "position",
                support.position,
                format!("Fixed support must be at a beam end (0 or {})", self.length),
            ));
        }
        if self.support(support.id).is_some() {
            return Err(BeamError::invalid_input(
                "support_id",
                support.id,
                "A support with this ID is already on the beam",
            ));
        }
        self.check_placement(&support)?;

        let id = support.id;
        self.supports.push(support);
        self.invalidate();
        Ok(id)
    }

    fn check_placement(&self, support: &Support) -> BeamResult<()> {
        let configuration = self.configuration;
        let reject = |reason: String| -> BeamResult<()> {
            Err(BeamError::configuration(configuration.display_name(), reason))
        };

        if !configuration.allows(support.kind) {
            return reject(format!("{} support is not allowed", support.kind));
        }
        if self.supports.len() >= configuration.support_count() {
            return reject(format!(
                "Already has {} support(s), the configuration takes {}",
                self.supports.len(),
                configuration.support_count()
            ));
        }
        if let Some(existing) = self.supports.iter().find(|s| s.position == support.position) {
            return reject(format!(
                "Position already taken by {existing}"
            ));
        }
        match (configuration, self.supports.first()) {
            (BeamConfiguration::SimplySupported, Some(first)) if support.position <= first.position => {
                reject(format!(
                    "Support B (x = {}) must lie right of support A (x = {})",
                    support.position, first.position
                ))
            }
            (BeamConfiguration::SimpleRoller, Some(first)) if first.kind == support.kind => reject(
                "Needs exactly one pinned and one roller support".to_string(),
            ),
            _ => Ok(()),
        }
    }

    /// Remove every support (to reconfigure support positions)
    pub fn clear_supports(&mut self) {
        self.supports.clear();
        self.invalidate();
    }

    // -------------------------------------------------------------------------
    // Validation and solving
    // -------------------------------------------------------------------------

    /// Count static unknowns without changing state.
    ///
    /// Returns the count (always 3) when the structure is determinate.
    pub fn check_structure(&self) -> BeamResult<u32> {
        let unknowns: u32 = self.supports.iter().map(|s| s.kind.constrained_unknowns()).sum();
        match unknowns {
            3 => Ok(unknowns),
            n if n < 3 => Err(BeamError::structural(
                n,
                "Structure is unstable - add restraint",
            )),
            n => Err(BeamError::structural(
                n,
                "Structure is statically indeterminate - remove restraint",
            )),
        }
    }

    /// Check static determinacy and move to `Solvable`.
    ///
    /// # Errors
    ///
    /// `Structural` unless the supports supply exactly 3 static unknowns.
    pub fn validate_structure(&mut self) -> BeamResult<()> {
        self.check_structure()?;
        if !matches!(self.state, BeamState::Solved(_) | BeamState::Solvable) {
            log::trace!("beam '{}' is solvable", self.label);
            self.state = BeamState::Solvable;
        }
        Ok(())
    }

    /// Reactions, solving first if needed. Repeated calls without mutation
    /// return the cached result.
    pub fn reactions(&mut self) -> BeamResult<&Reactions> {
        self.ensure_solved()?;
        match &self.state {
            BeamState::Solved(reactions) => Ok(reactions),
            _ => Err(BeamError::internal("beam not solved after solve")),
        }
    }

    /// Reactions if the beam is already solved
    pub fn cached_reactions(&self) -> Option<&Reactions> {
        match &self.state {
            BeamState::Solved(reactions) => Some(reactions),
            _ => None,
        }
    }

    /// Immutable diagram snapshot, solving first if needed.
    ///
    /// The snapshot borrows the beam, so the beam cannot be mutated while
    /// it is in use.
    pub fn analysis(&mut self) -> BeamResult<Analysis<'_>> {
        self.ensure_solved()?;
        let beam: &Beam = self;
        match &beam.state {
            BeamState::Solved(reactions) => Ok(Analysis::new(beam, reactions)),
            _ => Err(BeamError::internal("beam not solved after solve")),
        }
    }

    /// Diagram snapshot of an already solved beam, without solving
    pub fn solved_analysis(&self) -> Option<Analysis<'_>> {
        self.cached_reactions()
            .map(|reactions| Analysis::new(self, reactions))
    }

    /// Section forces at `x` (see [`Analysis::evaluate_at`])
    pub fn evaluate_at(&mut self, x: f64) -> BeamResult<SectionForces> {
        self.analysis()?.evaluate_at(x)
    }

    /// `n` evenly spaced diagram samples over `[0, L]` (see [`Analysis::sample`])
    pub fn sample(&mut self, n_points: usize) -> BeamResult<Vec<DiagramSample>> {
        self.analysis()?.sample(n_points)
    }

    fn ensure_solved(&mut self) -> BeamResult<()> {
        if matches!(self.state, BeamState::Solved(_)) {
            return Ok(());
        }
        self.validate_structure()?;
        let reactions = solver::solve(self)?;
        log::trace!("beam '{}' is solved", self.label);
        self.state = BeamState::Solved(reactions);
        Ok(())
    }

    fn invalidate(&mut self) {
        if matches!(self.state, BeamState::Solved(_)) {
            log::debug!("beam '{}' changed, cached reactions dropped", self.label);
        }
        self.state = if self.supports.is_empty() && self.loads.is_empty() {
            BeamState::Unconfigured
        } else {
            BeamState::Configured
        };
    }
}

// =============================================================================
// SERIALIZED FORM
// =============================================================================

/// Plain-data form of a beam, used for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDefinition {
    #[serde(default = "default_label")]
    pub label: String,
    pub length: f64,
    pub configuration: BeamConfiguration,
    #[serde(default)]
    pub settings: AnalysisSettings,
    #[serde(default)]
    pub supports: Vec<Support>,
    #[serde(default)]
    pub loads: Vec<AppliedLoad>,
}

fn default_label() -> String {
    DEFAULT_BEAM_LABEL.to_string()
}

impl From<Beam> for BeamDefinition {
    fn from(beam: Beam) -> Self {
        BeamDefinition {
            label: beam.label,
            length: beam.length,
            configuration: beam.configuration,
            settings: beam.settings,
            supports: beam.supports,
            loads: beam.loads,
        }
    }
}

impl TryFrom<BeamDefinition> for Beam {
    type Error = BeamError;

    fn try_from(definition: BeamDefinition) -> BeamResult<Self> {
        let mut beam = Beam::new(definition.length, definition.configuration)?
            .with_label(definition.label)
            .with_settings(definition.settings)?;
        for support in definition.supports {
            beam.push_support(support)?;
        }
        for load in definition.loads {
            beam.push_load(load)?;
        }
        Ok(beam)
    }
}
