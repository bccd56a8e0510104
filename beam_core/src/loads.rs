//! # Loads
//!
//! Load definitions and their per-load statics.
//!
//! ## Sign Convention
//!
//! - Forces (point and distributed): positive downward
//! - Applied moments (couples): positive counter-clockwise
//!
//! Each load answers two questions, and both solver and diagram evaluator
//! are built from these answers by superposition:
//!
//! - its resultant and overturning moment about a reference point
//!   ([`Load::resultant`], [`Load::overturning_moment_about`])
//! - how much of it lies left of a cut at `x`, and the moment of that part
//!   about the cut ([`Load::left_of_cut`])

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ensure_finite, BeamError, BeamResult};

/// A load applied to the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Load {
    /// Concentrated force (N) at position (m from left end)
    PointForce { magnitude: f64, position: f64 },

    /// Uniform line load (N/m) over `[start, end]` (m from left end)
    DistributedForce { intensity: f64, start: f64, end: f64 },

    /// Concentrated couple (N·m) at position (m from left end).
    /// Positive = counter-clockwise
    Moment { magnitude: f64, position: f64 },
}

/// Part of a load lying left of a cut, reduced to the cut.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CutContribution {
    /// Vertical force left of the cut (N, positive downward)
    pub force: f64,
    /// Counter-clockwise moment about the cut (N·m)
    pub moment: f64,
}

impl std::ops::AddAssign for CutContribution {
    fn add_assign(&mut self, rhs: Self) {
        self.force += rhs.force;
        self.moment += rhs.moment;
    }
}

impl Load {
    /// Create a point force
    pub fn point(magnitude: f64, position: f64) -> Self {
        Load::PointForce { magnitude, position }
    }

    /// Create a uniform distributed force
    pub fn distributed(intensity: f64, start: f64, end: f64) -> Self {
        Load::DistributedForce { intensity, start, end }
    }

    /// Create an applied couple
    pub fn moment(magnitude: f64, position: f64) -> Self {
        Load::Moment { magnitude, position }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Load::PointForce { .. } => "Point force",
            Load::DistributedForce { .. } => "Distributed force",
            Load::Moment { .. } => "Moment",
        }
    }

    /// Check this load against a beam of the given length.
    ///
    /// Non-finite numbers are `InvalidInput`; positions outside `[0, L]`
    /// and empty intervals are `Range` errors.
    pub fn validate(&self, length: f64) -> BeamResult<()> {
        match *self {
            Load::PointForce { magnitude, position } | Load::Moment { magnitude, position } => {
                ensure_finite("magnitude", magnitude)?;
                ensure_finite("position", position)?;
                check_within("position", position, length)
            }
            Load::DistributedForce { intensity, start, end } => {
                ensure_finite("intensity", intensity)?;
                ensure_finite("start", start)?;
                ensure_finite("end", end)?;
                check_within("start", start, length)?;
                check_within("end", end, length)?;
                if start >= end {
                    return Err(BeamError::out_of_range(
                        "end",
                        end,
                        format!("Distributed load must end after its start ({start})"),
                    ));
                }
                Ok(())
            }
        }
    }

    /// Total vertical force (N, positive downward). Zero for a couple.
    pub fn resultant(&self) -> f64 {
        match *self {
            Load::PointForce { magnitude, .. } => magnitude,
            Load::DistributedForce { intensity, start, end } => intensity * (end - start),
            Load::Moment { .. } => 0.0,
        }
    }

    /// Clockwise moment of the load about `pivot` (N·m).
    ///
    /// A downward force right of the pivot turns clockwise, so a force
    /// contributes `F·(x - pivot)`; a counter-clockwise couple enters as `-M`.
    pub fn overturning_moment_about(&self, pivot: f64) -> f64 {
        match *self {
            Load::PointForce { magnitude, position } => magnitude * (position - pivot),
            Load::DistributedForce { intensity, start, end } => {
                let total = intensity * (end - start);
                total * ((start + end) / 2.0 - pivot)
            }
            Load::Moment { magnitude, .. } => -magnitude,
        }
    }

    /// Part of this load left of a cut at `x`, reduced to the cut.
    ///
    /// Concentrated actions exactly at the cut count only when
    /// `include_at_cut` is set (right-continuous evaluation). A distributed
    /// load partly past the cut contributes only its covered length
    /// `x - start`, acting at the centroid of that length.
    pub fn left_of_cut(&self, x: f64, include_at_cut: bool) -> CutContribution {
        match *self {
            Load::PointForce { magnitude, position } => {
                if is_left_of(position, x, include_at_cut) {
                    CutContribution {
                        force: magnitude,
                        moment: magnitude * (x - position),
                    }
                } else {
                    CutContribution::default()
                }
            }
            Load::DistributedForce { intensity, start, end } => {
                if x <= start {
                    return CutContribution::default();
                }
                let covered_end = x.min(end);
                let force = intensity * (covered_end - start);
                let centroid = (start + covered_end) / 2.0;
                CutContribution {
                    force,
                    moment: force * (x - centroid),
                }
            }
            Load::Moment { magnitude, position } => {
                if is_left_of(position, x, include_at_cut) {
                    CutContribution {
                        force: 0.0,
                        moment: magnitude,
                    }
                } else {
                    CutContribution::default()
                }
            }
        }
    }

    /// Positions where this load makes V or M change slope or jump
    pub fn breakpoints(&self) -> Vec<f64> {
        match *self {
            Load::PointForce { position, .. } | Load::Moment { position, .. } => vec![position],
            Load::DistributedForce { start, end, .. } => vec![start, end],
        }
    }

    /// Generated label, e.g. `P1000N@2m`, `q300N/m_0-4m`, `M50N.m@1m`
    pub fn default_label(&self) -> String {
        match *self {
            Load::PointForce { magnitude, position } => format!("P{magnitude}N@{position}m"),
            Load::DistributedForce { intensity, start, end } => {
                format!("q{intensity}N/m_{start}-{end}m")
            }
            Load::Moment { magnitude, position } => format!("M{magnitude}N.m@{position}m"),
        }
    }
}

fn is_left_of(position: f64, x: f64, include_at_cut: bool) -> bool {
    if include_at_cut {
        position <= x
    } else {
        position < x
    }
}

/// Range check shared by loads and supports
pub(crate) fn check_within(field: &str, position: f64, length: f64) -> BeamResult<()> {
    if (0.0..=length).contains(&position) {
        Ok(())
    } else {
        Err(BeamError::out_of_range(
            field,
            position,
            format!("must lie within the beam [0, {length}]"),
        ))
    }
}

/// Stable identity of an applied load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadId(pub Uuid);

impl LoadId {
    pub fn new() -> Self {
        LoadId(Uuid::new_v4())
    }
}

impl Default for LoadId {
    fn default() -> Self {
        Self::new()
    }
}

/// A load entry on a beam: the load plus its identity and label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedLoad {
    /// Unique identifier for this load
    pub id: LoadId,

    /// User label, or a generated one
    #[serde(default)]
    pub label: String,

    /// The load itself
    pub load: Load,
}

impl AppliedLoad {
    /// Wrap a load with a fresh id and generated label
    pub fn new(load: Load) -> Self {
        AppliedLoad {
            id: LoadId::new(),
            label: load.default_label(),
            load,
        }
    }

    /// Set label and return self (builder pattern). An empty label keeps
    /// the generated one.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        if !label.is_empty() {
            self.label = label;
        }
        self
    }
}
