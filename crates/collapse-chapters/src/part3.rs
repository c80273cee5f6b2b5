//! Part 3 — Spectral constants.
//!
//! α from the rank-6/7 average, the rank ladder the SI constants sit on,
//! and the atomic constants α drags along.

use collapse_constants::{phi_power, zeta_weight, Tolerance};
use collapse_spectral::{
    bohr_radius, em_coupling, fine_structure, nearest_rank, phi_rank, rydberg_constant,
    spectral_average, weight_ratio_for, ALPHA_CODATA, BOHR_RADIUS_CODATA, CHANNEL_RANK,
    INVERSE_ALPHA_CODATA, OBSERVER_RANK, RYDBERG_CODATA,
};
use collapse_units::C_SI;
use std::f64::consts::PI;

use crate::check::Check;
use crate::report::{ChapterId, ChapterReport};

/// Chapter 3.1 — the measured α inside the rank-6/7 band.
pub(crate) fn fine_structure_average() -> ChapterReport {
    let ratio = weight_ratio_for(ALPHA_CODATA).expect("measured alpha is in band");
    let mut checks = Vec::new();

    checks.push(Check::new(
        "weight_ratio",
        ratio,
        1.155_028_858_456,
        Tolerance::Absolute(1e-9),
        "the measured alpha implies a mild tilt toward the rank-6 weight",
    ));

    let alpha_back = fine_structure(ratio).expect("inverted ratio is positive");
    checks.push(Check::new(
        "alpha_roundtrip",
        alpha_back,
        ALPHA_CODATA,
        Tolerance::Absolute(1e-15),
        "averaging with the inverted ratio returns alpha to machine precision",
    ));

    let avg = spectral_average(ratio).expect("inverted ratio is positive");
    let in_band = avg > zeta_weight(CHANNEL_RANK) && avg < zeta_weight(OBSERVER_RANK);
    checks.push(Check::holds(
        "average_in_band",
        in_band,
        "the average interpolates strictly between phi^-7 and phi^-6",
    ));

    let midpoint = spectral_average(1.0).expect("balanced ratio is positive");
    checks.push(Check::new(
        "balanced_midpoint",
        midpoint,
        (zeta_weight(OBSERVER_RANK) + zeta_weight(CHANNEL_RANK)) / 2.0,
        Tolerance::Absolute(1e-15),
        "an even ratio averages the two weights exactly",
    ));

    let g = em_coupling(ALPHA_CODATA).expect("measured alpha is positive");
    checks.push(Check::new(
        "em_coupling_strength",
        g,
        0.302_822,
        Tolerance::Absolute(1e-5),
        "g = sqrt(4 pi alpha), the electromagnetic vertex strength",
    ));

    checks.push(Check::new(
        "inverse_coupling_square",
        1.0 / (g * g),
        10.905,
        Tolerance::Absolute(0.01),
        "1/(4 pi alpha) ~ 10.9 normalizes the vacuum impedance",
    ));

    ChapterReport::new(
        ChapterId::new(3, 1),
        "Fine-structure constant from rank-6/7 averaging",
        checks,
    )
}

/// Chapter 3.2 — log_φ places the SI constants on the rank ladder.
pub(crate) fn phi_trace_ranks() -> ChapterReport {
    let mut checks = Vec::new();

    let c_rank = phi_rank(C_SI).expect("c is positive");
    checks.push(Check::new(
        "speed_of_light_rank",
        c_rank,
        40.5613,
        Tolerance::Absolute(1e-3),
        "log_phi(299792458) lands just under 41, its leading Zeckendorf index",
    ));

    let (c_nearest, c_residual) = nearest_rank(C_SI).expect("c is positive");
    checks.push(Check::exact(
        "speed_of_light_nearest_rank",
        c_nearest as f64,
        41.0,
        "rounding the rank recovers the greedy Fibonacci pick",
    ));
    checks.push(Check::holds(
        "speed_residual_in_half_band",
        c_residual.abs() < 0.5,
        "the residual stays inside the half-rank band",
    ));

    let alpha_rank = phi_rank(INVERSE_ALPHA_CODATA).expect("1/alpha is positive");
    checks.push(Check::new(
        "inverse_alpha_rank",
        alpha_rank,
        10.2247,
        Tolerance::Absolute(1e-3),
        "1/alpha clusters at rank 10 with a fifth of a rank to spare",
    ));

    let (alpha_nearest, alpha_residual) = nearest_rank(INVERSE_ALPHA_CODATA).expect("positive");
    checks.push(Check::holds(
        "inverse_alpha_clusters_at_ten",
        alpha_nearest == 10 && alpha_residual.abs() < 0.25,
        "the clustering is tight enough to name the rank",
    ));

    let (pure_nearest, pure_residual) = nearest_rank(phi_power(21)).expect("positive");
    checks.push(Check::holds(
        "pure_power_sits_on_rung",
        pure_nearest == 21 && pure_residual.abs() < 1e-10,
        "a pure phi-power has zero residual, calibrating the ladder",
    ));

    ChapterReport::new(
        ChapterId::new(3, 2),
        "Phi-trace ranks of the SI constants",
        checks,
    )
}

/// Chapter 3.3 — Rydberg and Bohr follow once α is fixed.
pub(crate) fn atomic_constants() -> ChapterReport {
    let r_inf = rydberg_constant(ALPHA_CODATA).expect("measured alpha is positive");
    let a0 = bohr_radius(ALPHA_CODATA).expect("measured alpha is positive");

    let checks = vec![
        Check::new(
            "rydberg_constant",
            r_inf,
            RYDBERG_CODATA,
            Tolerance::Relative(1e-8),
            "R_inf = m_e c alpha^2/(2h) against the CODATA value",
        ),
        Check::new(
            "bohr_radius",
            a0,
            BOHR_RADIUS_CODATA,
            Tolerance::Relative(1e-8),
            "a_0 = hbar/(m_e c alpha) against the CODATA value",
        ),
        Check::new(
            "product_identity",
            r_inf * a0,
            ALPHA_CODATA / (4.0 * PI),
            Tolerance::Relative(1e-10),
            "R_inf x a_0 = alpha/(4 pi): the electron mass drops out",
        ),
        Check::holds(
            "atomic_scales_positive",
            r_inf > 0.0 && a0 > 0.0,
            "both scales are physical magnitudes",
        ),
    ];

    ChapterReport::new(
        ChapterId::new(3, 3),
        "Atomic constants downstream of alpha",
        checks,
    )
}
