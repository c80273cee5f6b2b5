//! Part 1 — Structural collapse limits.
//!
//! The three structural constants and the Planck scale they imply, derived
//! with nothing but φ, π, and small integers on the input side.

use collapse_constants::{
    phi_power, zeta_weight, zeta_weight_partial_sum, Tolerance, PHI, PHI_INV_SQ, ZETA_WEIGHT_SUM,
};
use collapse_units::{
    planck_energy, planck_length, planck_mass, planck_time, rank_frequency_max, C_SI, C_STAR,
    G_STAR, HBAR_STAR,
};
use collapse_zeckendorf::fibonacci_table;
use std::f64::consts::PI;

use crate::check::Check;
use crate::report::{ChapterId, ChapterReport};
use collapse_spectral::{fine_structure, weight_ratio_for, ALPHA_CODATA};

/// Chapter 1.1 — the recursion eigenvalue and the machinery built on it.
pub(crate) fn foundations() -> ChapterReport {
    let mut checks = Vec::new();

    checks.push(Check::new(
        "phi_defining_identity",
        PHI * PHI - PHI - 1.0,
        0.0,
        Tolerance::Absolute(1e-15),
        "phi is the positive root of x^2 - x - 1, the recursion eigenvalue",
    ));

    checks.push(Check::new(
        "phi_continued_fraction_step",
        PHI,
        1.0 + 1.0 / PHI,
        Tolerance::Absolute(1e-15),
        "phi = 1 + 1/phi, the self-referential fixed point",
    ));

    let fib = fibonacci_table(20).expect("20 is in range");
    let recurrence_holds = fib.windows(3).all(|w| w[2] == w[0] + w[1]);
    checks.push(Check::holds(
        "fibonacci_recurrence",
        recurrence_holds,
        "collapse path counts obey F(n) = F(n-1) + F(n-2)",
    ));

    checks.push(Check::new(
        "fibonacci_ratio_limit",
        fib[19] as f64 / fib[18] as f64,
        PHI,
        Tolerance::Absolute(1e-7),
        "consecutive path-count ratios converge on phi",
    ));

    let weights_decrease = (1..12).all(|s| zeta_weight(s) > zeta_weight(s + 1));
    checks.push(Check::holds(
        "zeta_weights_decrease",
        weights_decrease,
        "rank weights phi^-s suppress deep ranks geometrically",
    ));

    checks.push(Check::new(
        "zeta_weight_sum",
        zeta_weight_partial_sum(80),
        ZETA_WEIGHT_SUM,
        Tolerance::Absolute(1e-12),
        "the full weight sum telescopes to phi itself",
    ));

    checks.push(Check::new(
        "spinor_information_content",
        (16.0_f64).log2(),
        4.0,
        Tolerance::Absolute(1e-12),
        "a four-component spinor carries log2(16) = 4 bits",
    ));

    checks.push(Check::holds(
        "observer_rank_selection",
        4 + 1 <= 6 && 5 + 1 <= 7,
        "EM coupling and the observer channel fit in ranks 6 and 7",
    ));

    let ratio = weight_ratio_for(ALPHA_CODATA).expect("measured alpha is in band");
    let alpha_back = fine_structure(ratio).expect("inverted ratio is positive");
    checks.push(Check::new(
        "alpha_formula_structure",
        alpha_back,
        ALPHA_CODATA,
        Tolerance::Absolute(1e-15),
        "the rank-6/7 spectral average admits the measured alpha",
    ));

    ChapterReport::new(
        ChapterId::new(1, 1),
        "Collapse limit constants from structure alone",
        checks,
    )
}

/// Chapter 1.2 — c* = 2 from path-slope boundedness.
pub(crate) fn speed_limit() -> ChapterReport {
    let checks = vec![
        Check::new(
            "slope_bound_closure",
            PHI * (2.0 / PHI),
            C_STAR,
            Tolerance::Absolute(1e-15),
            "max Fibonacci slope phi times the discrete factor 2/phi closes to 2",
        ),
        Check::exact(
            "speed_constant_definition",
            C_STAR,
            2.0,
            "c* counts rank transitions per tick, one per binary channel",
        ),
        Check::exact(
            "causal_cone",
            C_STAR * C_STAR,
            4.0,
            "the cone ds^2 = c*^2 dtau^2 - dsigma^2 is fixed by c*^2 = 4",
        ),
        Check::exact(
            "si_speed_ratio",
            C_SI / C_STAR,
            149_896_229.0,
            "c = c* x (lambda_l/lambda_t) pins the length-to-time scale ratio",
        ),
        Check::holds(
            "rank_rate_bound",
            C_STAR <= 2.0,
            "information cannot outrun two rank transitions per tick",
        ),
    ];

    ChapterReport::new(
        ChapterId::new(1, 2),
        "Speed limit constant c* from collapse paths",
        checks,
    )
}

/// Chapter 1.3 — ħ* = φ²/(2π), the action of one closed rank loop.
pub(crate) fn action_quantum() -> ChapterReport {
    let checks = vec![
        Check::new(
            "action_quantum_derivation",
            HBAR_STAR,
            PHI * PHI / (2.0 * PI),
            Tolerance::Absolute(1e-15),
            "one closed rank loop encloses phi^2 of phase over a full turn",
        ),
        Check::new(
            "action_quantum_value",
            HBAR_STAR,
            0.416_673_050_492,
            Tolerance::Absolute(1e-10),
            "hbar* ~ 5/12 in collapse units",
        ),
        Check::holds(
            "action_positive",
            HBAR_STAR > 0.0,
            "the loop action is a genuine quantum, not a zero mode",
        ),
        Check::new(
            "loop_phase_recovery",
            HBAR_STAR * 2.0 * PI,
            PHI * PHI,
            Tolerance::Absolute(1e-15),
            "unwinding the turn recovers the bare phi^2 phase",
        ),
    ];

    ChapterReport::new(
        ChapterId::new(1, 3),
        "Action quantum hbar* from closed rank loops",
        checks,
    )
}

/// Chapter 1.4 — G* = φ⁻², the rank-entropy coupling.
pub(crate) fn gravitational_coupling() -> ChapterReport {
    let checks = vec![
        Check::new(
            "coupling_inverse_square",
            G_STAR,
            1.0 / (PHI * PHI),
            Tolerance::Absolute(1e-15),
            "the entropy gradient couples at one part in phi^2",
        ),
        Check::new(
            "coupling_algebraic_form",
            G_STAR,
            2.0 - PHI,
            Tolerance::Absolute(1e-15),
            "phi^-2 = 2 - phi keeps G* inside Z[phi]",
        ),
        Check::new(
            "coupling_phi_square_product",
            G_STAR * PHI * PHI,
            1.0,
            Tolerance::Absolute(1e-15),
            "G* x phi^2 = 1, the coupling is exactly the inverse eigenvalue square",
        ),
        Check::new(
            "coupling_against_inverse_sq_const",
            G_STAR,
            PHI_INV_SQ,
            Tolerance::Absolute(0.0),
            "the derived coupling is the shared inverse-square constant itself",
        ),
    ];

    ChapterReport::new(
        ChapterId::new(1, 4),
        "Gravitational coupling G* from rank entropy",
        checks,
    )
}

/// Chapter 1.5 — the collapse Planck scale closes without new input.
pub(crate) fn planck_scale() -> ChapterReport {
    let checks = vec![
        Check::new(
            "planck_length_triangle",
            (HBAR_STAR * G_STAR / C_STAR.powi(3)).sqrt(),
            planck_length(),
            Tolerance::Absolute(1e-15),
            "sqrt(hbar* G*/c*^3) collapses to 1/(4 sqrt(pi)): the phi^2 factors cancel",
        ),
        Check::new(
            "planck_length_value",
            planck_length(),
            0.141_047_395_887,
            Tolerance::Absolute(1e-10),
            "the minimal resolvable collapse length",
        ),
        Check::new(
            "planck_time_from_speed",
            planck_time(),
            1.0 / (8.0 * PI.sqrt()),
            Tolerance::Absolute(1e-15),
            "t_P* = l_P*/c*, one minimal length per two rank ticks",
        ),
        Check::new(
            "planck_mass_triangle",
            (HBAR_STAR * C_STAR / G_STAR).sqrt(),
            planck_mass(),
            Tolerance::Absolute(1e-14),
            "sqrt(hbar* c*/G*) = phi^2/sqrt(pi), the collapse mass unit",
        ),
        Check::new(
            "planck_energy_closure",
            planck_energy(),
            HBAR_STAR * rank_frequency_max(),
            Tolerance::Absolute(1e-12),
            "E_P* = hbar* x omega_max, saturating the rank-transition band",
        ),
        Check::new(
            "max_frequency_closed_form",
            rank_frequency_max(),
            8.0 * PI.sqrt(),
            Tolerance::Absolute(1e-12),
            "omega_max = 8 sqrt(pi) once the phi^2 factors cancel",
        ),
        Check::new(
            "planck_power_consistency",
            phi_power(2),
            PHI * PHI,
            Tolerance::Absolute(1e-14),
            "the phi^2 entering the mass unit is the exact Z[phi] power",
        ),
    ];

    ChapterReport::new(ChapterId::new(1, 5), "Collapse Planck scale", checks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foundations_all_pass() {
        let report = foundations();
        let failures: Vec<_> = report.failures().map(|c| c.name.clone()).collect();
        assert!(failures.is_empty(), "failed checks: {:?}", failures);
    }

    #[test]
    fn speed_limit_all_pass() {
        let report = speed_limit();
        assert!(report.all_passed());
        assert_eq!(report.passed_count(), report.len());
    }

    #[test]
    fn action_quantum_all_pass() {
        assert!(action_quantum().all_passed());
    }

    #[test]
    fn gravitational_coupling_all_pass() {
        assert!(gravitational_coupling().all_passed());
    }

    #[test]
    fn planck_scale_all_pass() {
        let report = planck_scale();
        let failures: Vec<_> = report.failures().map(|c| c.name.clone()).collect();
        assert!(failures.is_empty(), "failed checks: {:?}", failures);
    }
}
