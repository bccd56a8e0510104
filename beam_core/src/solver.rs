//! # Equilibrium Solver
//!
//! Support reactions of a statically determinate beam from the two
//! in-plane equilibrium equations (ΣFy = 0, ΣM = 0).
//!
//! ## Strategies
//!
//! One strategy per [`BeamConfiguration`], selected by [`solve`]:
//!
//! - **Two vertical supports** A and B: moments about A give `R_B`, vertical
//!   balance gives `R_A`
//! - **Cantilever**: the fixed support takes all of ΣFy and resists the
//!   overturning moment about itself
//! - **Pinned + roller**: supports ordered by position, then solved as two
//!   vertical supports; loads on overhangs enter the sums like any other
//!
//! ## Sign Convention
//!
//! - Reaction forces: positive downward (an upward reaction is negative)
//! - Reaction moments: positive counter-clockwise
//! - `load_moment`: clockwise (overturning) moment of the applied loads
//!   about the reference position
//!
//! ## Example
//!
//! ```rust
//! use beam_core::beam::{Beam, BeamConfiguration};
//! use beam_core::solver;
//! use beam_core::supports::SupportKind;
//!
//! let mut beam = Beam::new(4.0, BeamConfiguration::Cantilever)?;
//! let wall = beam.add_support(SupportKind::Fixed, 0.0)?;
//! beam.add_point_load(500.0, 4.0)?;
//!
//! let reactions = solver::solve(&beam)?;
//! let fixed = reactions.get(wall).expect("reaction for the wall");
//! assert_eq!(fixed.vertical, -500.0);
//! assert_eq!(fixed.moment, Some(2000.0));
//! # Ok::<(), beam_core::errors::BeamError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::beam::{Beam, BeamConfiguration};
use crate::errors::{BeamError, BeamResult, EquilibriumCheck, NumericalWarning};
use crate::loads::{AppliedLoad, CutContribution};
use crate::supports::{Support, SupportId, SupportKind};

// =============================================================================
// RESULTS
// =============================================================================

/// Reaction at one support
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupportReaction {
    pub support_id: SupportId,
    pub kind: SupportKind,
    /// Support position (m)
    pub position: f64,
    /// Vertical reaction (N, positive downward)
    pub vertical: f64,
    /// Reaction moment (N·m, positive counter-clockwise); `Some` only for
    /// fixed supports
    pub moment: Option<f64>,
}

impl SupportReaction {
    /// This reaction reduced to a cut at `x`, if it lies left of the cut
    pub fn left_of_cut(&self, x: f64, include_at_cut: bool) -> CutContribution {
        let left = if include_at_cut {
            self.position <= x
        } else {
            self.position < x
        };
        if !left {
            return CutContribution::default();
        }
        CutContribution {
            force: self.vertical,
            moment: self.vertical * (x - self.position) + self.moment.unwrap_or(0.0),
        }
    }

    /// Clockwise moment of this reaction about `pivot`
    fn overturning_moment_about(&self, pivot: f64) -> f64 {
        self.vertical * (self.position - pivot) - self.moment.unwrap_or(0.0)
    }
}

/// Equilibrium residuals after a solve (should all be ~0).
///
/// The scales are the sums of absolute terms entering each equation. The
/// tolerance is applied relative to them once they exceed 1, so round-off
/// on heavily loaded beams is not reported.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EquilibriumResiduals {
    /// ΣFy of loads and reactions (N)
    pub vertical_force: f64,
    /// ΣM about the reference position (N·m)
    pub moment_about_reference: f64,
    /// Σ|Fy| of loads and reactions (N)
    pub force_scale: f64,
    /// Σ|M| of loads and reactions about the reference position (N·m)
    pub moment_scale: f64,
}

/// Solved support reactions of a beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reactions {
    /// Configuration the reactions were solved for
    pub configuration: BeamConfiguration,

    /// One entry per support, in declaration order
    pub supports: Vec<SupportReaction>,

    /// Position moments were taken about (support A or the fixed support)
    pub reference_position: f64,

    /// ΣFy of the applied loads (N, positive downward)
    pub load_force: f64,

    /// Clockwise moment of the applied loads about `reference_position` (N·m)
    pub load_moment: f64,

    pub residuals: EquilibriumResiduals,

    /// Residuals that exceeded the tolerance
    pub warnings: Vec<NumericalWarning>,
}

impl Reactions {
    /// Reaction at a support
    pub fn get(&self, id: SupportId) -> Option<&SupportReaction> {
        self.supports.iter().find(|r| r.support_id == id)
    }

    /// Sum of vertical reactions (N, positive downward)
    pub fn total_vertical(&self) -> f64 {
        self.supports.iter().map(|r| r.vertical).sum()
    }

    /// True when every equilibrium residual was within tolerance
    pub fn is_balanced(&self) -> bool {
        self.warnings.is_empty()
    }

    /// All reactions left of a cut at `x`, reduced to the cut
    pub fn left_of_cut(&self, x: f64, include_at_cut: bool) -> CutContribution {
        let mut total = CutContribution::default();
        for reaction in &self.supports {
            total += reaction.left_of_cut(x, include_at_cut);
        }
        total
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Solve reactions for a beam with the strategy its configuration selects.
///
/// # Errors
///
/// - `Structural` unless the supports supply exactly 3 static unknowns
/// - `Configuration` if the supports do not fit the strategy
pub fn solve(beam: &Beam) -> BeamResult<Reactions> {
    beam.check_structure()?;
    let reactions = match beam.configuration() {
        BeamConfiguration::SimplySupported => solve_simply_supported(beam),
        BeamConfiguration::Cantilever => solve_cantilever(beam),
        BeamConfiguration::SimpleRoller => solve_simple_roller(beam),
    }?;

    log::debug!(
        "solved '{}' ({}): ΣFy(loads) = {:.6}, reactions = {:?}",
        beam.label(),
        reactions.configuration,
        reactions.load_force,
        reactions
            .supports
            .iter()
            .map(|r| (r.position, r.vertical, r.moment))
            .collect::<Vec<_>>()
    );
    Ok(reactions)
}

/// Two vertical supports, declared left to right.
pub fn solve_simply_supported(beam: &Beam) -> BeamResult<Reactions> {
    let [a, b] = two_vertical_supports(beam, BeamConfiguration::SimplySupported)?;
    if a.position >= b.position {
        return Err(mismatch(
            BeamConfiguration::SimplySupported,
            format!(
                "Support A (x = {}) must lie left of support B (x = {})",
                a.position, b.position
            ),
        ));
    }
    Ok(solve_two_supports(beam, BeamConfiguration::SimplySupported, &a, &b))
}

/// One pinned and one roller support in either order, overhangs allowed.
pub fn solve_simple_roller(beam: &Beam) -> BeamResult<Reactions> {
    let [first, second] = two_vertical_supports(beam, BeamConfiguration::SimpleRoller)?;
    // Fixed is already excluded, so differing kinds means one pinned and one roller
    if first.kind == second.kind {
        return Err(mismatch(
            BeamConfiguration::SimpleRoller,
            "Needs exactly one pinned and one roller support",
        ));
    }
    if first.position == second.position {
        return Err(mismatch(BeamConfiguration::SimpleRoller, "Supports coincide"));
    }

    let (a, b) = if first.position < second.position {
        (first, second)
    } else {
        (second, first)
    };
    Ok(solve_two_supports(beam, BeamConfiguration::SimpleRoller, &a, &b))
}

/// Single fixed support at one end.
pub fn solve_cantilever(beam: &Beam) -> BeamResult<Reactions> {
    let configuration = BeamConfiguration::Cantilever;
    require_configuration(beam, configuration)?;

    let fixed = match beam.supports() {
        [support] if support.kind == SupportKind::Fixed => *support,
        [support] => {
            return Err(mismatch(
                configuration,
                format!("Needs a fixed support, found {}", support.kind),
            ))
        }
        supports => {
            return Err(mismatch(
                configuration,
                format!("Needs exactly 1 support, found {}", supports.len()),
            ))
        }
    };

    let pivot = fixed.position;
    let (load_force, load_moment) = load_sums(beam.loads(), pivot);
    let reaction = SupportReaction {
        support_id: fixed.id,
        kind: fixed.kind,
        position: fixed.position,
        vertical: -load_force,
        moment: fixed.kind.restrains_rotation().then_some(load_moment),
    };

    Ok(finish(beam, configuration, vec![reaction], pivot, load_force, load_moment))
}

// =============================================================================
// HELPERS
// =============================================================================

fn mismatch(configuration: BeamConfiguration, reason: impl Into<String>) -> BeamError {
    BeamError::configuration(configuration.display_name(), reason)
}

fn require_configuration(beam: &Beam, expected: BeamConfiguration) -> BeamResult<()> {
    if beam.configuration() == expected {
        Ok(())
    } else {
        Err(mismatch(
            expected,
            format!("Beam is declared {}", beam.configuration()),
        ))
    }
}

fn two_vertical_supports(beam: &Beam, configuration: BeamConfiguration) -> BeamResult<[Support; 2]> {
    require_configuration(beam, configuration)?;
    match beam.supports() {
        [a, b] => {
            if a.kind == SupportKind::Fixed || b.kind == SupportKind::Fixed {
                return Err(mismatch(configuration, "Fixed supports are not allowed"));
            }
            Ok([*a, *b])
        }
        supports => Err(mismatch(
            configuration,
            format!("Needs exactly 2 supports, found {}", supports.len()),
        )),
    }
}

/// ΣFy and clockwise ΣM of all loads about `pivot`
fn load_sums(loads: &[AppliedLoad], pivot: f64) -> (f64, f64) {
    loads.iter().fold((0.0, 0.0), |(force, moment), applied| {
        (
            force + applied.load.resultant(),
            moment + applied.load.overturning_moment_about(pivot),
        )
    })
}

/// Reactions for vertical supports `a` (left) and `b` (right), mapped back
/// to declaration order by position (support positions are distinct).
fn solve_two_supports(
    beam: &Beam,
    configuration: BeamConfiguration,
    a: &Support,
    b: &Support,
) -> Reactions {
    let (load_force, load_moment) = load_sums(beam.loads(), a.position);
    let r_b = -load_moment / (b.position - a.position);
    let r_a = -load_force - r_b;

    let supports = beam
        .supports()
        .iter()
        .map(|support| SupportReaction {
            support_id: support.id,
            kind: support.kind,
            position: support.position,
            vertical: if support.position == a.position { r_a } else { r_b },
            moment: None,
        })
        .collect();

    finish(beam, configuration, supports, a.position, load_force, load_moment)
}

fn finish(
    beam: &Beam,
    configuration: BeamConfiguration,
    supports: Vec<SupportReaction>,
    reference_position: f64,
    load_force: f64,
    load_moment: f64,
) -> Reactions {
    let mut reactions = Reactions {
        configuration,
        supports,
        reference_position,
        load_force,
        load_moment,
        residuals: EquilibriumResiduals::default(),
        warnings: Vec::new(),
    };
    reactions.residuals = residuals(beam.loads(), &reactions);
    reactions.warnings = check_equilibrium(&reactions.residuals, beam.settings().equilibrium_tolerance);
    reactions
}

fn residuals(loads: &[AppliedLoad], reactions: &Reactions) -> EquilibriumResiduals {
    let pivot = reactions.reference_position;
    let reaction_moments = reactions
        .supports
        .iter()
        .map(|r| r.overturning_moment_about(pivot));

    EquilibriumResiduals {
        vertical_force: reactions.load_force + reactions.total_vertical(),
        moment_about_reference: reactions.load_moment + reaction_moments.clone().sum::<f64>(),
        force_scale: loads.iter().map(|l| l.load.resultant().abs()).sum::<f64>()
            + reactions.supports.iter().map(|r| r.vertical.abs()).sum::<f64>(),
        moment_scale: loads
            .iter()
            .map(|l| l.load.overturning_moment_about(pivot).abs())
            .sum::<f64>()
            + reaction_moments.map(f64::abs).sum::<f64>(),
    }
}

/// Compare residuals against `tolerance`, scaled by the magnitude of each
/// equation once that exceeds 1. Each violation is logged and returned.
/// Never fails the solve.
pub fn check_equilibrium(residuals: &EquilibriumResiduals, tolerance: f64) -> Vec<NumericalWarning> {
    [
        (
            EquilibriumCheck::VerticalForce,
            residuals.vertical_force,
            residuals.force_scale,
        ),
        (
            EquilibriumCheck::MomentAboutReference,
            residuals.moment_about_reference,
            residuals.moment_scale,
        ),
    ]
    .into_iter()
    .map(|(check, residual, scale)| (check, residual, tolerance * scale.max(1.0)))
    .filter(|(_, residual, limit)| residual.abs() > *limit)
    .map(|(check, residual, limit)| {
        let warning = NumericalWarning {
            check,
            residual,
            tolerance: limit,
        };
        log::warn!("{warning}");
        warning
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AnalysisSettings;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Clockwise ΣM of loads and reactions about any pivot
    fn moment_about(beam: &Beam, reactions: &Reactions, pivot: f64) -> f64 {
        let (_, loads) = load_sums(beam.loads(), pivot);
        loads
            + reactions
                .supports
                .iter()
                .map(|r| r.overturning_moment_about(pivot))
                .sum::<f64>()
    }

    #[test]
    fn test_roller_pinned_point_load() {
        init_logging();
        let mut beam = Beam::new(5.0, BeamConfiguration::SimpleRoller).unwrap();
        let roller = beam.add_support(SupportKind::Roller, 0.0).unwrap();
        let pinned = beam.add_support(SupportKind::Pinned, 5.0).unwrap();
        beam.add_point_load(1000.0, 2.0).unwrap();

        let reactions = beam.reactions().unwrap();
        assert_relative_eq!(reactions.get(roller).unwrap().vertical, -600.0);
        assert_relative_eq!(reactions.get(pinned).unwrap().vertical, -400.0);
        assert!(reactions.residuals.vertical_force.abs() < 1e-9);
        assert!(reactions.is_balanced());
        assert_eq!(reactions.get(roller).unwrap().moment, None);
    }

    #[test]
    fn test_point_load_closed_form() {
        let (pa, pb, p, x) = (1.0, 7.0, 2400.0, 2.5);
        let mut beam = Beam::new(8.0, BeamConfiguration::SimplySupported).unwrap();
        let a = beam.add_support(SupportKind::Pinned, pa).unwrap();
        let b = beam.add_support(SupportKind::Roller, pb).unwrap();
        beam.add_point_load(p, x).unwrap();

        let reactions = solve(&beam).unwrap();
        assert_relative_eq!(reactions.get(a).unwrap().vertical, -p * (pb - x) / (pb - pa));
        assert_relative_eq!(reactions.get(b).unwrap().vertical, -p * (x - pa) / (pb - pa));
        assert_eq!(reactions.reference_position, pa);
    }

    #[test]
    fn test_zero_load() {
        let mut beam = Beam::new(6.0, BeamConfiguration::SimplySupported).unwrap();
        beam.add_support(SupportKind::Pinned, 0.0).unwrap();
        beam.add_support(SupportKind::Roller, 6.0).unwrap();

        let reactions = solve(&beam).unwrap();
        assert!(reactions.supports.iter().all(|r| r.vertical == 0.0));
        assert_eq!(reactions.load_moment, 0.0);
        assert_eq!(reactions.residuals, EquilibriumResiduals::default());
    }

    #[test]
    fn test_cantilever_distributed_and_tip_load() {
        let mut beam = Beam::new(4.0, BeamConfiguration::Cantilever).unwrap();
        let wall = beam.add_support(SupportKind::Fixed, 0.0).unwrap();
        beam.add_distributed_load(300.0, 0.0, 4.0).unwrap();
        beam.add_point_load(500.0, 4.0).unwrap();

        let reactions = solve(&beam).unwrap();
        let fixed = reactions.get(wall).unwrap();
        assert_relative_eq!(fixed.vertical, -1700.0);
        assert_relative_eq!(fixed.moment.unwrap(), 4400.0);
        assert!(reactions.is_balanced());
    }

    #[test]
    fn test_cantilever_fixed_at_right_end() {
        let mut beam = Beam::new(3.0, BeamConfiguration::Cantilever).unwrap();
        let wall = beam.add_support(SupportKind::Fixed, 3.0).unwrap();
        beam.add_point_load(200.0, 0.0).unwrap();

        let reactions = solve(&beam).unwrap();
        let fixed = reactions.get(wall).unwrap();
        assert_relative_eq!(fixed.vertical, -200.0);
        // Load left of the wall turns counter-clockwise, the wall resists clockwise
        assert_relative_eq!(fixed.moment.unwrap(), -600.0);
        assert_abs_diff_eq!(moment_about(&beam, &reactions, 0.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_overhangs() {
        let mut beam = Beam::new(12.0, BeamConfiguration::SimpleRoller).unwrap();
        let roller = beam.add_support(SupportKind::Roller, 10.0).unwrap();
        let pinned = beam.add_support(SupportKind::Pinned, 2.0).unwrap();
        beam.add_point_load(400.0, 0.0).unwrap();
        beam.add_point_load(900.0, 12.0).unwrap();
        beam.add_distributed_load(100.0, 0.0, 12.0).unwrap();
        beam.add_moment(250.0, 11.0).unwrap();

        let reactions = solve(&beam).unwrap();
        // Roles swap so the reference is the left-most support
        assert_eq!(reactions.reference_position, 2.0);
        // Declaration order is kept
        assert_eq!(reactions.supports[0].support_id, roller);
        assert_eq!(reactions.supports[1].support_id, pinned);

        // ΣM about x = 2: 400·(-2) + 900·10 + 1200·4 - 250 = 12750
        assert_relative_eq!(reactions.load_moment, 12750.0);
        assert_relative_eq!(reactions.get(roller).unwrap().vertical, -12750.0 / 8.0);
        assert_relative_eq!(
            reactions.get(pinned).unwrap().vertical,
            -2500.0 + 12750.0 / 8.0
        );
        assert_abs_diff_eq!(reactions.residuals.vertical_force, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(reactions.residuals.moment_about_reference, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(moment_about(&beam, &reactions, 0.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_couple_signs() {
        let (length, m0) = (6.0, 900.0);
        let mut beam = Beam::new(length, BeamConfiguration::SimplySupported).unwrap();
        let a = beam.add_support(SupportKind::Pinned, 0.0).unwrap();
        let b = beam.add_support(SupportKind::Roller, length).unwrap();
        beam.add_moment(m0, length / 2.0).unwrap();

        let reactions = solve(&beam).unwrap();
        assert_relative_eq!(reactions.get(a).unwrap().vertical, -m0 / length);
        assert_relative_eq!(reactions.get(b).unwrap().vertical, m0 / length);
        assert_eq!(reactions.load_force, 0.0);
    }

    #[test]
    fn test_cached_reactions_are_reused() {
        let mut beam = Beam::new(5.0, BeamConfiguration::SimpleRoller).unwrap();
        beam.add_support(SupportKind::Pinned, 0.0).unwrap();
        beam.add_support(SupportKind::Roller, 5.0).unwrap();
        beam.add_point_load(1000.0, 2.0).unwrap();

        let first = beam.reactions().unwrap().clone();
        let second = beam.reactions().unwrap().clone();
        for (r1, r2) in first.supports.iter().zip(&second.supports) {
            assert_eq!(r1.vertical.to_bits(), r2.vertical.to_bits());
        }

        beam.add_point_load(1000.0, 4.0).unwrap();
        let third = beam.reactions().unwrap();
        assert_relative_eq!(third.total_vertical(), -2000.0);
    }

    #[test]
    fn test_strategy_mismatch() {
        let mut beam = Beam::new(4.0, BeamConfiguration::Cantilever).unwrap();
        beam.add_support(SupportKind::Fixed, 0.0).unwrap();

        assert!(matches!(
            solve_simply_supported(&beam),
            Err(BeamError::Configuration { .. })
        ));
        assert!(matches!(
            solve_simple_roller(&beam),
            Err(BeamError::Configuration { .. })
        ));
        assert!(solve_cantilever(&beam).is_ok());

        let mut simple = Beam::new(4.0, BeamConfiguration::SimplySupported).unwrap();
        simple.add_support(SupportKind::Pinned, 0.0).unwrap();
        assert!(matches!(
            solve_simply_supported(&simple),
            Err(BeamError::Configuration { .. })
        ));
        assert!(matches!(solve(&simple), Err(BeamError::Structural { .. })));
    }

    #[test]
    fn test_check_equilibrium_warnings() {
        init_logging();
        let residuals = EquilibriumResiduals {
            vertical_force: 1e-6,
            moment_about_reference: -5e-3,
            force_scale: 0.5,
            moment_scale: 2.0e3,
        };

        let warnings = check_equilibrium(&residuals, 1e-9);
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].check, EquilibriumCheck::VerticalForce);
        // Small scales keep the tolerance absolute
        assert_eq!(warnings[0].tolerance, 1e-9);
        assert_eq!(warnings[1].check, EquilibriumCheck::MomentAboutReference);
        assert_eq!(warnings[1].residual, -5e-3);
        assert_relative_eq!(warnings[1].tolerance, 2.0e-6);

        // 1e-6 against 1e-5 passes; -5e-3 against 1e-5 · 2000 = 2e-2 passes
        assert!(check_equilibrium(&residuals, 1e-5).is_empty());
    }

    #[test]
    fn test_heavy_loads_stay_balanced() {
        init_logging();
        let mut beam = Beam::new(12.0, BeamConfiguration::SimpleRoller).unwrap();
        beam.add_support(SupportKind::Pinned, 1.3).unwrap();
        beam.add_support(SupportKind::Roller, 10.7).unwrap();
        beam.add_point_load(1.2e6, 3.7).unwrap();
        beam.add_point_load(2.4e6, 7.3).unwrap();
        beam.add_point_load(0.9e6, 11.9).unwrap();
        beam.add_distributed_load(3.5e5, 0.1, 11.3).unwrap();
        beam.add_moment(7.7e5, 5.9).unwrap();

        let reactions = solve(&beam).unwrap();
        assert!(reactions.is_balanced(), "{:?}", reactions.warnings);
        assert!(reactions.residuals.force_scale > 1e6);
        assert_relative_eq!(
            reactions.total_vertical(),
            -reactions.load_force,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_round_off_warning_does_not_abort() {
        init_logging();
        let mut beam = Beam::new(49.0, BeamConfiguration::SimplySupported)
            .unwrap()
            .with_settings(AnalysisSettings::default().with_tolerance(0.0))
            .unwrap();
        beam.add_support(SupportKind::Pinned, 0.0).unwrap();
        beam.add_support(SupportKind::Roller, 49.0).unwrap();
        // ΣM_A = 1, R_B = -1/49, and (1/49)·49 rounds to 1 - 2⁻⁵³
        beam.add_point_load(1.0, 1.0).unwrap();

        let reactions = beam.reactions().unwrap();
        assert!(!reactions.is_balanced());
        let warning = reactions
            .warnings
            .iter()
            .find(|w| w.check == EquilibriumCheck::MomentAboutReference)
            .unwrap();
        assert!(warning.residual != 0.0);
        assert_eq!(warning.tolerance, 0.0);
        assert_eq!(beam.status(), crate::beam::BeamStatus::Solved);
    }

    #[test]
    fn test_zero_tolerance_exact_loads() {
        let mut beam = Beam::new(10.0, BeamConfiguration::SimplySupported)
            .unwrap()
            .with_settings(AnalysisSettings::default().with_tolerance(0.0))
            .unwrap();
        beam.add_support(SupportKind::Pinned, 0.0).unwrap();
        beam.add_support(SupportKind::Roller, 10.0).unwrap();
        beam.add_point_load(1000.0, 5.0).unwrap();

        // Exactly representable: no round-off, no warnings even at zero tolerance
        let reactions = beam.reactions().unwrap();
        assert!(reactions.is_balanced());
        assert_eq!(reactions.total_vertical(), -1000.0);
    }

    #[test]
    fn test_reactions_serialization() {
        let mut beam = Beam::new(4.0, BeamConfiguration::Cantilever).unwrap();
        beam.add_support(SupportKind::Fixed, 4.0).unwrap();
        beam.add_point_load(100.0, 1.0).unwrap();

        let reactions = solve(&beam).unwrap();
        let json = serde_json::to_string(&reactions).unwrap();
        let parsed: Reactions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, reactions);
    }
}
