//! Fixed constant set. Values are literals so every run prints the same report.

use crate::domain::models::ConstantEntry;

pub use std::f64::consts::PI;

// Physical constants (SI).
pub const H_BAR: f64 = 1.054571817e-34;
pub const PLANCK_TIME: f64 = 5.391e-44;
pub const SPEED_OF_LIGHT: f64 = 2.998e8;
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;
pub const PROTON_MASS_KG: f64 = 1.673e-27;

// Particle masses in eV.
pub const ELECTRON_MASS_EV: f64 = 0.511e6;
pub const PROTON_MASS_EV: f64 = 938.3e6;
pub const MUON_MASS_EV: f64 = 105.66e6;
pub const TAU_MASS_EV: f64 = 1776.86e6;

// Observed couplings.
pub const ALPHA_OBSERVED: f64 = 1.0 / 137.036;
pub const ALPHA_S_OBSERVED: f64 = 0.1179;
pub const WEINBERG_SIN2_OBSERVED: f64 = 0.2312;
pub const ALPHA_MZ_OBSERVED: f64 = 1.0 / 127.9;

// Mathematical constants, written as the shortest round-trip literal of the
// correctly rounded expression in the trailing comment.
pub const PHI: f64 = 1.618033988749895; // (1 + sqrt 5) / 2
pub const SQRT_3: f64 = 1.7320508075688772;
pub const SQRT_5: f64 = 2.23606797749979;

/// Emergence constant.
pub const MU: i64 = 34;
/// Time emergence depth.
pub const MU_TIME: i64 = 44;

/// Bridge constant `π² - 1/√3`.
pub fn bridge() -> f64 {
    PI.powi(2) - 1.0 / SQRT_3
}

/// The constant set as a listing, in declaration order.
pub fn constant_set() -> Vec<ConstantEntry> {
    vec![
        ConstantEntry::new("h_bar", H_BAR, "J·s", "reduced Planck constant"),
        ConstantEntry::new("t_P", PLANCK_TIME, "s", "Planck time"),
        ConstantEntry::new("c", SPEED_OF_LIGHT, "m/s", "speed of light"),
        ConstantEntry::new("G", GRAVITATIONAL_CONSTANT, "m³/kg·s²", "gravitational constant"),
        ConstantEntry::new("m_p_kg", PROTON_MASS_KG, "kg", "proton mass"),
        ConstantEntry::new("m_e", ELECTRON_MASS_EV, "eV", "electron mass"),
        ConstantEntry::new("m_p", PROTON_MASS_EV, "eV", "proton mass"),
        ConstantEntry::new("m_mu", MUON_MASS_EV, "eV", "muon mass"),
        ConstantEntry::new("m_tau", TAU_MASS_EV, "eV", "tau mass"),
        ConstantEntry::new("alpha_obs", ALPHA_OBSERVED, "", "fine-structure constant"),
        ConstantEntry::new("alpha_s_obs", ALPHA_S_OBSERVED, "", "strong coupling at M_Z"),
        ConstantEntry::new("sin2_obs", WEINBERG_SIN2_OBSERVED, "", "weak mixing angle sin²θ_W"),
        ConstantEntry::new("alpha_mz_obs", ALPHA_MZ_OBSERVED, "", "fine-structure constant at M_Z"),
        ConstantEntry::new("pi", PI, "", "π"),
        ConstantEntry::new("phi", PHI, "", "golden ratio"),
        ConstantEntry::new("sqrt3", SQRT_3, "", "√3"),
        ConstantEntry::new("sqrt5", SQRT_5, "", "√5"),
        ConstantEntry::new("mu", MU as f64, "", "emergence constant"),
        ConstantEntry::new("mu_time", MU_TIME as f64, "", "time emergence depth"),
        ConstantEntry::new("bridge", bridge(), "", "bridge constant π² - 1/√3"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn irrational_literals_match_their_expressions() {
        assert_eq!(PHI, (1.0 + 5f64.sqrt()) / 2.0);
        assert_eq!(SQRT_3, 3f64.sqrt());
        assert_eq!(SQRT_5, 5f64.sqrt());
    }

    #[test]
    fn bridge_is_close_to_nine_point_two_nine() {
        assert!((bridge() - 9.292254131899732).abs() < 1e-12);
    }

    #[test]
    fn constant_set_symbols_are_unique() {
        let set = constant_set();
        let mut symbols: Vec<_> = set.iter().map(|c| c.symbol).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), set.len());
    }
}
