//! Part 4 — Collapse cosmology.
//!
//! The dark-energy fraction from the binary cascade and the Hubble scale
//! it has to live with.

use collapse_constants::{Tolerance, PHI};
use collapse_cosmology::{
    cascade_level_1, critical_density, hubble_length, hubble_si, hubble_time_gyr,
    CASCADE_LEVEL_0, H0_OBSERVED_KM_S_MPC, OMEGA_LAMBDA, OMEGA_LAMBDA_OBSERVED, OMEGA_MATTER,
};

use crate::check::Check;
use crate::report::{ChapterId, ChapterReport};

/// Chapter 4.1 — Ω_Λ = 1/2 + 1/(2φ²) with no fitted parameter.
pub(crate) fn dark_energy() -> ChapterReport {
    let checks = vec![
        Check::exact(
            "cascade_level_0",
            CASCADE_LEVEL_0,
            0.5,
            "level 0 is the even observer/observable split",
        ),
        Check::new(
            "cascade_level_1",
            cascade_level_1(),
            1.0 / (2.0 * PHI * PHI),
            Tolerance::Absolute(1e-15),
            "level 1 is the 3D packing correction 1/(2 phi^2)",
        ),
        Check::new(
            "dark_energy_fraction",
            OMEGA_LAMBDA,
            0.690_983_005_625,
            Tolerance::Absolute(1e-11),
            "the cascade sums to (3 - phi)/2",
        ),
        Check::new(
            "against_observation",
            OMEGA_LAMBDA,
            OMEGA_LAMBDA_OBSERVED,
            Tolerance::Relative(2e-3),
            "within 0.2% of the observed 0.69, with nothing fitted",
        ),
        Check::new(
            "budget_closure",
            OMEGA_LAMBDA + OMEGA_MATTER,
            1.0,
            Tolerance::Absolute(1e-15),
            "dark energy and matter exhaust the budget in a flat cosmology",
        ),
        Check::new(
            "matter_fraction",
            OMEGA_MATTER,
            0.315,
            Tolerance::Relative(0.03),
            "Omega_m ~ 0.309 against the measured 0.315, inside 2%",
        ),
    ];

    ChapterReport::new(
        ChapterId::new(4, 1),
        "Dark-energy fraction from the binary cascade",
        checks,
    )
}

/// Chapter 4.2 — the Hubble rate in SI and the densities it implies.
pub(crate) fn hubble_scale() -> ChapterReport {
    let h_si = hubble_si(H0_OBSERVED_KM_S_MPC).expect("observed rate is positive");
    let mut checks = Vec::new();

    checks.push(Check::new(
        "hubble_rate_si",
        h_si,
        2.184_269_371_6e-18,
        Tolerance::Relative(1e-9),
        "67.4 km/s/Mpc in SI: one expansion e-fold per ~14.5 Gyr",
    ));

    let rho_c = critical_density(h_si).expect("rate is positive");
    checks.push(Check::new(
        "critical_density",
        rho_c,
        8.5327e-27,
        Tolerance::Relative(1e-4),
        "rho_c = 3H^2/(8 pi G), a few protons per cubic meter",
    ));

    let t_hubble = hubble_time_gyr(h_si).expect("rate is positive");
    checks.push(Check::new(
        "hubble_time_vs_cosmic_age",
        t_hubble,
        13.8,
        Tolerance::Relative(0.1),
        "1/H0 overshoots the 13.8 Gyr age by the early deceleration, inside 10%",
    ));

    let l_hubble = hubble_length(h_si).expect("rate is positive");
    checks.push(Check::holds(
        "hubble_length_bracket",
        l_hubble > 1.3e26 && l_hubble < 1.4e26,
        "c/H0 ~ 1.37e26 m, a bit over four gigaparsecs",
    ));

    ChapterReport::new(
        ChapterId::new(4, 2),
        "Hubble scale and critical density",
        checks,
    )
}
