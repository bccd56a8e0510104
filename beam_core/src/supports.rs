//! # Supports
//!
//! Support kinds and their restraint counts.
//!
//! A support restrains some of the three rigid-body motions of a 2D beam:
//! vertical translation, rotation and axial translation. The *transverse*
//! restraints give the reactions this crate solves for (a vertical force,
//! plus a moment for a fixed support). The *axial* restraint only matters for
//! counting: with no axial loads modeled it carries no force, but a beam needs
//! exactly one of it to be neither free to slide nor axially over-restrained.
//!
//! | Kind   | Transverse | Axial | Static unknowns |
//! |--------|-----------:|------:|----------------:|
//! | Pinned | 1          | 1     | 2               |
//! | Roller | 1          | 0     | 1               |
//! | Fixed  | 2          | 1     | 3               |

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Support condition at a point on the beam
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SupportKind {
    /// Pinned/hinged support - restrains vertical and axial displacement,
    /// allows rotation
    #[default]
    Pinned,

    /// Roller support - restrains vertical displacement only
    Roller,

    /// Fixed support - restrains displacement and rotation; creates a
    /// moment reaction
    Fixed,
}

impl SupportKind {
    /// Transverse unknowns this support contributes (vertical force, moment)
    pub fn transverse_unknowns(&self) -> u32 {
        match self {
            SupportKind::Pinned | SupportKind::Roller => 1,
            SupportKind::Fixed => 2,
        }
    }

    /// Axial unknowns this support contributes
    pub fn axial_unknowns(&self) -> u32 {
        match self {
            SupportKind::Pinned | SupportKind::Fixed => 1,
            SupportKind::Roller => 0,
        }
    }

    /// Total static unknowns (transverse + axial)
    pub fn constrained_unknowns(&self) -> u32 {
        self.transverse_unknowns() + self.axial_unknowns()
    }

    /// Returns true if this support carries a moment reaction
    pub fn restrains_rotation(&self) -> bool {
        matches!(self, SupportKind::Fixed)
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportKind::Pinned => "Pinned",
            SupportKind::Roller => "Roller",
            SupportKind::Fixed => "Fixed",
        }
    }

    /// Get short symbol for diagrams
    pub fn symbol(&self) -> &'static str {
        match self {
            SupportKind::Pinned => "△",
            SupportKind::Roller => "○",
            SupportKind::Fixed => "▣",
        }
    }
}

impl std::fmt::Display for SupportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Stable identity of a support, used to key reactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportId(pub Uuid);

impl SupportId {
    pub fn new() -> Self {
        SupportId(Uuid::new_v4())
    }
}

impl Default for SupportId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SupportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A support placed on the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Unique identifier for this support
    pub id: SupportId,

    /// Support condition
    pub kind: SupportKind,

    /// Distance from the left end of the beam (m)
    pub position: f64,
}

impl Support {
    /// Create a support with a fresh identifier
    pub fn new(kind: SupportKind, position: f64) -> Self {
        Support {
            id: SupportId::new(),
            kind,
            position,
        }
    }

    /// Create with a specific identifier
    pub fn with_id(mut self, id: SupportId) -> Self {
        self.id = id;
        self
    }
}

impl std::fmt::Display for Support {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} @ {} m", self.kind.symbol(), self.kind, self.position)
    }
}
