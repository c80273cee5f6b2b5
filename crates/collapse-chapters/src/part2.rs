//! Part 2 — Collapse–SI equivalence.
//!
//! The dimensionless system meets the measured one: three λ factors carry
//! every collapse quantity to SI, the observer's depth below the Planck
//! scale explains the magnitudes, and the SI speed of light decomposes
//! over the Fibonacci basis.

use collapse_constants::Tolerance;
use collapse_spectral::phi_rank;
use collapse_units::{
    scale_levels, Dim, ScaleMap, C_SI, C_STAR, G_SI, G_STAR, HBAR_SI, HBAR_STAR, HUMAN_BIT_RATE,
    PLANCK_BIT_RATE,
};
use collapse_zeckendorf::Zeckendorf;

use crate::check::Check;
use crate::report::{ChapterId, ChapterReport};

/// Chapter 2.1 — the λ scale map reproduces c, ħ, and G.
pub(crate) fn scale_mapping() -> ChapterReport {
    let map = ScaleMap::from_planck_si();
    let mut checks = Vec::new();

    checks.push(Check::holds(
        "scale_factors_positive",
        map.lambda_length > 0.0 && map.lambda_time > 0.0 && map.lambda_mass > 0.0,
        "all three lambda factors are positive magnitudes",
    ));

    checks.push(Check::new(
        "speed_constraint",
        map.to_si(C_STAR, Dim::SPEED),
        C_SI,
        Tolerance::Relative(1e-6),
        "c = c* x lambda_l/lambda_t, limited by the published Planck-scale digits",
    ));

    checks.push(Check::new(
        "action_constraint",
        map.to_si(HBAR_STAR, Dim::ACTION),
        HBAR_SI,
        Tolerance::Relative(1e-6),
        "hbar = hbar* x lambda_m lambda_l^2/lambda_t",
    ));

    checks.push(Check::new(
        "gravitation_constraint",
        map.to_si(G_STAR, Dim::GRAVITATION),
        G_SI,
        Tolerance::Relative(1e-5),
        "G = G* x lambda_l^3/(lambda_m lambda_t^2)",
    ));

    checks.push(Check::new(
        "dimension_composition",
        map.si_factor(Dim::SPEED),
        map.lambda_length / map.lambda_time,
        Tolerance::Relative(1e-12),
        "the dimension vector composes the same factor as the hand-written ratio",
    ));

    ChapterReport::new(ChapterId::new(2, 1), "Scale mapping to SI units", checks)
}

/// Chapter 2.2 — where the observer sits on the rank ladder.
pub(crate) fn observer_depth() -> ChapterReport {
    let levels =
        scale_levels(PLANCK_BIT_RATE, HUMAN_BIT_RATE).expect("published rates are positive");

    let checks = vec![
        Check::new(
            "observer_levels",
            levels,
            153.12,
            Tolerance::Absolute(0.1),
            "humans process ~1e11 bits/s against the Planck 1e43: about 153 phi-levels down",
        ),
        Check::holds(
            "well_below_planck",
            levels > 50.0,
            "the observer is far below the Planck scale",
        ),
        Check::holds(
            "not_infinitely_deep",
            levels < 200.0,
            "but not infinitely far: the hierarchy is finite",
        ),
    ];

    ChapterReport::new(
        ChapterId::new(2, 2),
        "Observer depth below the Planck scale",
        checks,
    )
}

/// Chapter 2.3 — 299 792 458 over the Fibonacci basis.
pub(crate) fn zeckendorf_speed() -> ChapterReport {
    let c = 299_792_458_u64;
    let zeck = Zeckendorf::encode(c).expect("c is positive");
    let mut checks = Vec::new();

    checks.push(Check::exact(
        "decomposition_sum",
        zeck.value() as f64,
        c as f64,
        "the ten Fibonacci terms reconstruct the SI speed of light exactly",
    ));

    checks.push(Check::exact(
        "term_count",
        zeck.len() as f64,
        10.0,
        "a sparse ten-term footprint across indices 1 to 41",
    ));

    checks.push(Check::exact(
        "leading_index",
        zeck.leading_index() as f64,
        41.0,
        "the leading term is F41 = 267 914 296",
    ));

    let non_consecutive = zeck.indices().windows(2).all(|w| w[0] >= w[1] + 2);
    checks.push(Check::holds(
        "non_consecutivity",
        non_consecutive,
        "no two chosen indices are adjacent, as Zeckendorf's theorem demands",
    ));

    let rank = phi_rank(c as f64).expect("c is positive");
    checks.push(Check::new(
        "phi_rank_alignment",
        rank,
        40.561,
        Tolerance::Absolute(0.01),
        "log_phi(c) sits just below the leading index: F41 <= c < F42",
    ));

    checks.push(Check::holds(
        "rank_brackets_leading_index",
        rank.ceil() as u32 == zeck.leading_index(),
        "the greedy pick is the rank's ceiling",
    ));

    ChapterReport::new(
        ChapterId::new(2, 3),
        "Zeckendorf structure of the speed of light",
        checks,
    )
}
