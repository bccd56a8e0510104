//! # Diagram Evaluator
//!
//! Internal forces along a solved beam: shear V, bending moment M and axial
//! force N, from superposition of every load and reaction left of a cut.
//!
//! ## Sign Convention
//!
//! - Shear: positive when the part left of the cut tends upward,
//!   `V(x) = -Σ(forces left of x)` with forces positive downward
//! - Moment: positive sagging (tension on bottom fibre),
//!   `M(x) = -Σ(counter-clockwise moments about x of actions left of x)`
//! - Axial: always zero (no axial loads are modeled)
//!
//! Concentrated actions make V and M jump. [`Analysis::evaluate_at`] is
//! right-continuous (an action exactly at the cut is included);
//! [`Analysis::evaluate_left_of`] gives the left limit.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::{Beam, BeamConfiguration};
//! use beam_core::supports::SupportKind;
//!
//! let mut beam = Beam::new(8.0, BeamConfiguration::SimplySupported)?;
//! beam.add_support(SupportKind::Pinned, 0.0)?;
//! beam.add_support(SupportKind::Roller, 8.0)?;
//! beam.add_distributed_load(1000.0, 0.0, 8.0)?;
//!
//! let analysis = beam.analysis()?;
//! let extremes = analysis.extremes();
//! // wL²/8 at midspan
//! assert!((extremes.max_moment.value - 8000.0).abs() < 1e-9);
//! assert!((extremes.max_moment.position - 4.0).abs() < 1e-12);
//! # Ok::<(), beam_core::errors::BeamError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::beam::Beam;
use crate::errors::{ensure_finite, BeamError, BeamResult};
use crate::loads::{check_within, CutContribution};
use crate::solver::Reactions;

/// Internal forces at one position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionForces {
    /// Shear force V (N)
    pub shear: f64,
    /// Bending moment M (N·m), positive sagging
    pub moment: f64,
    /// Axial force N (N), positive in tension
    pub axial: f64,
}

/// One point of a sampled diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramSample {
    /// Position along the beam (m)
    pub position: f64,
    pub shear: f64,
    pub moment: f64,
    pub axial: f64,
}

impl DiagramSample {
    fn new(position: f64, forces: SectionForces) -> Self {
        DiagramSample {
            position,
            shear: forces.shear,
            moment: forces.moment,
            axial: forces.axial,
        }
    }
}

/// Why a position is a critical point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CriticalPointKind {
    /// x = 0 or x = L
    BeamEnd,
    /// A support position
    Support,
    /// A point load, couple, or distributed-load edge
    Load,
    /// Shear changes sign inside a segment (moment extremum)
    ShearZero,
}

/// A position where V or M can reach an extreme value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalPoint {
    pub position: f64,
    pub kind: CriticalPointKind,
    /// Left limit of the section forces
    pub left: SectionForces,
    /// Right limit (equal to `left` where nothing concentrated acts)
    pub right: SectionForces,
}

/// A value and where it occurs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extreme {
    pub value: f64,
    pub position: f64,
}

/// Maximum and minimum shear and moment over the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramExtremes {
    pub max_shear: Extreme,
    pub min_shear: Extreme,
    pub max_moment: Extreme,
    pub min_moment: Extreme,
}

impl DiagramExtremes {
    /// Largest shear magnitude, keeping its sign
    pub fn max_abs_shear(&self) -> Extreme {
        larger_magnitude(self.max_shear, self.min_shear)
    }

    /// Largest moment magnitude, keeping its sign
    pub fn max_abs_moment(&self) -> Extreme {
        larger_magnitude(self.max_moment, self.min_moment)
    }
}

fn larger_magnitude(a: Extreme, b: Extreme) -> Extreme {
    if b.value.abs() > a.value.abs() {
        b
    } else {
        a
    }
}

/// Interpolated shear zero crossing between two samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearZeroCrossing {
    pub position: f64,
    /// Moment interpolated at `position`
    pub moment: f64,
}

// =============================================================================
// ANALYSIS
// =============================================================================

/// Immutable snapshot of a solved beam.
///
/// Holds shared borrows only, so it is `Copy` and can be handed to several
/// threads for sampling. The beam cannot change while a snapshot is alive.
#[derive(Debug, Clone, Copy)]
pub struct Analysis<'a> {
    beam: &'a Beam,
    reactions: &'a Reactions,
}

impl<'a> Analysis<'a> {
    pub(crate) fn new(beam: &'a Beam, reactions: &'a Reactions) -> Self {
        Analysis { beam, reactions }
    }

    pub fn beam(&self) -> &'a Beam {
        self.beam
    }

    pub fn reactions(&self) -> &'a Reactions {
        self.reactions
    }

    /// Section forces at `x`, including actions exactly at `x`.
    ///
    /// # Errors
    ///
    /// `Range` unless `x ∈ [0, L]`.
    pub fn evaluate_at(&self, x: f64) -> BeamResult<SectionForces> {
        self.check_position(x)?;
        Ok(self.section_forces(x, true))
    }

    /// Left limit of the section forces at `x` (actions at `x` excluded).
    pub fn evaluate_left_of(&self, x: f64) -> BeamResult<SectionForces> {
        self.check_position(x)?;
        Ok(self.section_forces(x, false))
    }

    /// `n_points` evenly spaced samples over `[0, L]`, both ends included.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if `n_points < 2`.
    pub fn sample(&self, n_points: usize) -> BeamResult<Vec<DiagramSample>> {
        let positions = sample_positions(self.beam.length(), n_points)?;
        Ok(positions
            .into_iter()
            .map(|x| DiagramSample::new(x, self.section_forces(x, true)))
            .collect())
    }

    /// Samples at the beam's default density
    pub fn sample_default(&self) -> BeamResult<Vec<DiagramSample>> {
        self.sample(self.beam.settings().default_sample_points)
    }

    /// Exact critical points, sorted by position.
    ///
    /// Between consecutive breakpoints (ends, supports, load positions and
    /// distributed-load edges) V is linear, so a sign change of V inside a
    /// segment is located exactly rather than by sampling.
    pub fn critical_points(&self) -> Vec<CriticalPoint> {
        let breakpoints = self.breakpoints();
        let mut points = Vec::with_capacity(breakpoints.len() * 2);

        for (i, &x) in breakpoints.iter().enumerate() {
            points.push(CriticalPoint {
                position: x,
                kind: self.classify(x),
                left: self.section_forces(x, false),
                right: self.section_forces(x, true),
            });

            let Some(&next) = breakpoints.get(i + 1) else {
                continue;
            };
            let v_start = self.section_forces(x, true).shear;
            let v_end = self.section_forces(next, false).shear;
            if v_start * v_end < 0.0 {
                let zero = x + v_start * (next - x) / (v_start - v_end);
                let forces = self.section_forces(zero, true);
                points.push(CriticalPoint {
                    position: zero,
                    kind: CriticalPointKind::ShearZero,
                    left: forces,
                    right: forces,
                });
            }
        }
        points
    }

    /// Maximum and minimum V and M, taken over both limits at every
    /// critical point.
    pub fn extremes(&self) -> DiagramExtremes {
        let origin = self.section_forces(0.0, true);
        let start = Extreme {
            value: 0.0,
            position: 0.0,
        };
        let mut extremes = DiagramExtremes {
            max_shear: Extreme { value: origin.shear, ..start },
            min_shear: Extreme { value: origin.shear, ..start },
            max_moment: Extreme { value: origin.moment, ..start },
            min_moment: Extreme { value: origin.moment, ..start },
        };

        for point in self.critical_points() {
            // The left limit at x = 0 lies off the beam
            let sides = if point.position == 0.0 {
                vec![point.right]
            } else {
                vec![point.left, point.right]
            };
            for forces in sides {
                let at = |value| Extreme {
                    value,
                    position: point.position,
                };
                if forces.shear > extremes.max_shear.value {
                    extremes.max_shear = at(forces.shear);
                }
                if forces.shear < extremes.min_shear.value {
                    extremes.min_shear = at(forces.shear);
                }
                if forces.moment > extremes.max_moment.value {
                    extremes.max_moment = at(forces.moment);
                }
                if forces.moment < extremes.min_moment.value {
                    extremes.min_moment = at(forces.moment);
                }
            }
        }
        extremes
    }

    fn check_position(&self, x: f64) -> BeamResult<()> {
        ensure_finite("x", x)?;
        check_within("x", x, self.beam.length())
    }

    fn section_forces(&self, x: f64, include_at_cut: bool) -> SectionForces {
        let mut left = self.reactions.left_of_cut(x, include_at_cut);
        for applied in self.beam.loads() {
            left += applied.load.left_of_cut(x, include_at_cut);
        }
        let CutContribution { force, moment } = left;
        SectionForces {
            shear: -force,
            moment: -moment,
            axial: 0.0,
        }
    }

    /// Sorted, de-duplicated positions where V or M can jump or kink
    fn breakpoints(&self) -> Vec<f64> {
        let length = self.beam.length();
        let mut positions = vec![0.0, length];
        positions.extend(self.beam.supports().iter().map(|s| s.position));
        for applied in self.beam.loads() {
            positions.extend(applied.load.breakpoints());
        }
        positions.sort_by(f64::total_cmp);
        positions.dedup();
        positions
    }

    fn classify(&self, x: f64) -> CriticalPointKind {
        if self.beam.supports().iter().any(|s| s.position == x) {
            CriticalPointKind::Support
        } else if self
            .beam
            .loads()
            .iter()
            .any(|l| l.load.breakpoints().contains(&x))
        {
            CriticalPointKind::Load
        } else {
            CriticalPointKind::BeamEnd
        }
    }
}

// =============================================================================
// SAMPLING
// =============================================================================

/// `n_points` evenly spaced positions over `[0, length]`; the last is
/// exactly `length`.
pub fn sample_positions(length: f64, n_points: usize) -> BeamResult<Vec<f64>> {
    if n_points < 2 {
        return Err(BeamError::invalid_input(
            "n_points",
            n_points,
            "At least 2 samples are needed to span both beam ends",
        ));
    }
    let last = n_points - 1;
    let mut positions: Vec<f64> = (0..n_points)
        .map(|i| length * i as f64 / last as f64)
        .collect();
    positions[last] = length;
    Ok(positions)
}

/// Shear zero crossings between adjacent samples, with linearly
/// interpolated moment.
///
/// Resolution-bounded: a sign change across a point load is reported inside
/// the sample interval, not at the load. Use
/// [`Analysis::critical_points`] for exact positions.
pub fn shear_zero_crossings(samples: &[DiagramSample]) -> Vec<ShearZeroCrossing> {
    samples
        .windows(2)
        .filter(|pair| pair[0].shear * pair[1].shear < 0.0)
        .map(|pair| {
            let (a, b) = (&pair[0], &pair[1]);
            let t = a.shear / (a.shear - b.shear);
            ShearZeroCrossing {
                position: a.position + t * (b.position - a.position),
                moment: a.moment + t * (b.moment - a.moment),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beam::BeamConfiguration;
    use crate::supports::SupportKind;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn simple_span(length: f64) -> Beam {
        let mut beam = Beam::new(length, BeamConfiguration::SimplySupported).unwrap();
        beam.add_support(SupportKind::Pinned, 0.0).unwrap();
        beam.add_support(SupportKind::Roller, length).unwrap();
        beam
    }

    #[test]
    fn test_point_load_jump_is_exact() {
        let mut beam = simple_span(5.0);
        beam.add_point_load(1000.0, 2.0).unwrap();
        let analysis = beam.analysis().unwrap();

        let at = analysis.evaluate_at(2.0).unwrap();
        let before = analysis.evaluate_left_of(2.0).unwrap();
        assert_eq!(at.shear - before.shear, -1000.0);
        assert_relative_eq!(before.shear, 600.0);
        assert_relative_eq!(at.shear, -400.0);
        // M is continuous under a point load: R_A · 2
        assert_relative_eq!(at.moment, 1200.0);
        assert_relative_eq!(before.moment, 1200.0);
        assert_eq!(at.axial, 0.0);
    }

    #[test]
    fn test_simple_span_ends() {
        let mut beam = simple_span(6.0);
        beam.add_point_load(300.0, 1.0).unwrap();
        beam.add_distributed_load(200.0, 2.0, 5.0).unwrap();

        let start = beam.evaluate_at(0.0).unwrap();
        assert_abs_diff_eq!(start.moment, 0.0, epsilon = 1e-9);
        let end = beam.evaluate_at(6.0).unwrap();
        assert_abs_diff_eq!(end.shear, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(end.moment, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cantilever_free_end() {
        let mut beam = Beam::new(4.0, BeamConfiguration::Cantilever).unwrap();
        beam.add_support(SupportKind::Fixed, 0.0).unwrap();
        beam.add_distributed_load(300.0, 0.0, 4.0).unwrap();
        beam.add_point_load(500.0, 4.0).unwrap();
        let analysis = beam.analysis().unwrap();

        let root = analysis.evaluate_at(0.0).unwrap();
        assert_relative_eq!(root.shear, 1700.0);
        assert_relative_eq!(root.moment, -4400.0);

        let tip = analysis.evaluate_at(4.0).unwrap();
        assert_abs_diff_eq!(tip.shear, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(tip.moment, 0.0, epsilon = 1e-9);

        // Left of the tip load only the 500 N remains
        assert_relative_eq!(analysis.evaluate_left_of(4.0).unwrap().shear, 500.0);
    }

    #[test]
    fn test_couple_jump() {
        let (length, m0) = (6.0, 900.0);
        let mut beam = simple_span(length);
        beam.add_moment(m0, 3.0).unwrap();
        let analysis = beam.analysis().unwrap();

        let before = analysis.evaluate_left_of(3.0).unwrap();
        let after = analysis.evaluate_at(3.0).unwrap();
        assert_relative_eq!(after.moment - before.moment, -m0);
        // R_A = -M0/L (upward), so M rises to +M0/2 before the couple
        assert_relative_eq!(before.moment, m0 / 2.0);
        assert_relative_eq!(after.moment, -m0 / 2.0);
        assert_relative_eq!(before.shear, after.shear);
    }

    #[test]
    fn test_sample_positions() {
        let mut beam = simple_span(7.3);
        let samples = beam.sample(11).unwrap();
        assert_eq!(samples.len(), 11);
        assert_eq!(samples[0].position, 0.0);
        assert_eq!(samples[10].position, 7.3);
        assert!(samples.windows(2).all(|w| w[0].position < w[1].position));

        assert!(matches!(beam.sample(1), Err(BeamError::InvalidInput { .. })));
        assert!(matches!(beam.sample(0), Err(BeamError::InvalidInput { .. })));
        assert_eq!(beam.sample(2).unwrap().len(), 2);

        let analysis = beam.analysis().unwrap();
        assert_eq!(analysis.sample_default().unwrap().len(), 101);
    }

    #[test]
    fn test_out_of_range_queries() {
        let mut beam = simple_span(5.0);
        assert!(matches!(beam.evaluate_at(5.01), Err(BeamError::Range { .. })));
        let analysis = beam.analysis().unwrap();
        assert!(matches!(analysis.evaluate_at(-0.1), Err(BeamError::Range { .. })));
        assert!(matches!(
            analysis.evaluate_left_of(f64::NAN),
            Err(BeamError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_uniform_load_extremes() {
        let (length, w) = (10.0, 400.0);
        let mut beam = simple_span(length);
        beam.add_distributed_load(w, 0.0, length).unwrap();
        let analysis = beam.analysis().unwrap();

        let zero = analysis
            .critical_points()
            .into_iter()
            .find(|p| p.kind == CriticalPointKind::ShearZero)
            .unwrap();
        assert_relative_eq!(zero.position, length / 2.0);
        assert_relative_eq!(zero.left.moment, w * length * length / 8.0);

        let extremes = analysis.extremes();
        assert_relative_eq!(extremes.max_moment.value, 5000.0);
        assert_relative_eq!(extremes.max_shear.value, w * length / 2.0);
        assert_eq!(extremes.max_shear.position, 0.0);
        assert_relative_eq!(extremes.min_shear.value, -w * length / 2.0);
        assert_eq!(extremes.min_shear.position, length);
        assert_relative_eq!(extremes.max_abs_moment().value, 5000.0);
    }

    #[test]
    fn test_critical_points_layout() {
        let mut beam = Beam::new(12.0, BeamConfiguration::SimpleRoller).unwrap();
        beam.add_support(SupportKind::Pinned, 2.0).unwrap();
        beam.add_support(SupportKind::Roller, 10.0).unwrap();
        beam.add_point_load(500.0, 0.0).unwrap();
        beam.add_point_load(800.0, 6.0).unwrap();
        let analysis = beam.analysis().unwrap();

        let points = analysis.critical_points();
        let positions: Vec<f64> = points.iter().map(|p| p.position).collect();
        assert_eq!(positions, vec![0.0, 2.0, 6.0, 10.0, 12.0]);

        let kinds: Vec<CriticalPointKind> = points.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                CriticalPointKind::Load,
                CriticalPointKind::Support,
                CriticalPointKind::Load,
                CriticalPointKind::Support,
                CriticalPointKind::BeamEnd,
            ]
        );

        // Overhang end carries no shear or moment
        let free_end = points.last().unwrap();
        assert_abs_diff_eq!(free_end.right.shear, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(free_end.right.moment, 0.0, epsilon = 1e-9);

        // Hogging over the left support from the overhang load
        assert_relative_eq!(points[1].left.moment, -1000.0);
    }

    #[test]
    fn test_sampled_zero_crossings() {
        let mut beam = simple_span(10.0);
        beam.add_distributed_load(100.0, 0.0, 10.0).unwrap();
        let samples = beam.sample(5).unwrap();

        // Samples at 0, 2.5, 5, 7.5, 10: V(5) = 0 exactly, so no strict sign change
        assert!(shear_zero_crossings(&samples).is_empty());

        let samples = beam.sample(4).unwrap();
        let crossings = shear_zero_crossings(&samples);
        assert_eq!(crossings.len(), 1);
        assert_relative_eq!(crossings[0].position, 5.0, epsilon = 1e-9);
        // Linear interpolation of M under-estimates the parabola peak
        assert!(crossings[0].moment < 1250.0);
    }

    #[test]
    fn test_snapshot_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Copy>(_: T) {}

        let mut beam = simple_span(4.0);
        beam.add_point_load(100.0, 1.0).unwrap();
        let analysis = beam.analysis().unwrap();
        assert_send_sync(analysis);

        let halves: Vec<Vec<DiagramSample>> = std::thread::scope(|scope| {
            let left = scope.spawn(move || analysis.sample(5).unwrap());
            let right = scope.spawn(move || analysis.sample(9).unwrap());
            vec![left.join().unwrap(), right.join().unwrap()]
        });
        assert_eq!(halves[0][2], halves[1][4]);
    }
}
