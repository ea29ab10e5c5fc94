//! The verification sections, in report order.
//!
//! Each section writes its explanation block into the [`Report`] and records
//! one row per check. Formatting of every printed number is part of the output
//! contract (`tests/fixtures/report.txt`).

use std::fmt::Write;

use anyhow::Context;

use crate::domain::constants::*;
use crate::domain::models::{Criterion, StatusLabels};
use crate::services::evaluator::evaluate;
use crate::services::fibonacci::fibonacci;
use crate::services::format::{scientific, thousands};
use crate::services::report::Report;

const ONE_PERCENT: Criterion = Criterion::RelativeError { max_pct: 1.0 };

/// sin²θ_W denominator: μ_time as measured (log₁₀(1/t_P) ≈ 43.27).
const MEASURED_TIME_DEPTH: f64 = 43.27;
const Z_MASS_MEV: f64 = 91_000.0;
const ELECTRON_MASS_MEV: f64 = 0.511;
/// Upper bound on the neutrino mass sum, eV.
const NEUTRINO_SUM_BOUND: f64 = 0.12;
const HIERARCHY: f64 = 1e39;

/// Runs every section and the closing summary.
pub fn run_all(report: &mut Report) -> anyhow::Result<()> {
    tracing::info!("starting verification");
    report.header()?;
    let mu_physical = emergence_constant(report)?;
    bridge_relation(report, mu_physical)?;
    fundamental_constants(report)?;
    running_coupling(report)?;
    neutrino_masses(report)?;
    conservation_law(report)?;
    report.summary()?;
    tracing::info!(
        passed = report.passed(),
        total = report.records.len(),
        "verification complete"
    );
    Ok(())
}

/// Energy-to-index mapping `n = log₁₀(E/m_e) / 44`.
pub fn energy_index(energy_mev: f64) -> f64 {
    (energy_mev / ELECTRON_MASS_MEV).log10() / MU_TIME as f64
}

/// Physical μ: log₁₀ of the Planck information rate `1/ℏ` over one bit/J·s.
pub fn mu_physical() -> f64 {
    (1.0 / H_BAR).log10()
}

/// Mathematical μ: `π³ + (21/22)π`.
pub fn mu_mathematical() -> f64 {
    PI.powi(3) + (21.0 / 22.0) * PI
}

/// `α_G = G m_p² / (ℏ c)`.
pub fn gravitational_coupling() -> f64 {
    GRAVITATIONAL_CONSTANT * PROTON_MASS_KG.powi(2) / (H_BAR * SPEED_OF_LIGHT)
}

/// Returns the physical μ, which the bridge relation builds on.
fn emergence_constant(report: &mut Report) -> anyhow::Result<f64> {
    report.section("SECTION 1: EMERGENCE CONSTANT (μ = 34)")?;
    let out = &mut report.text;

    let e_planck = 1.0 / H_BAR;
    let mu_phys = mu_physical();
    writeln!(out)?;
    writeln!(out, "  [1.1] Physical Derivation")?;
    writeln!(out, "        E_Planck = 1/ℏ = {} bits/J·s", scientific(e_planck, 3))?;
    writeln!(out, "        E_human ≈ 1 bit/J·s")?;
    writeln!(out, "        μ = log₁₀(E_Planck/E_human) = {:.3}", mu_phys)?;

    let mu_math = mu_mathematical();
    writeln!(out)?;
    writeln!(out, "  [1.2] Mathematical Derivation (Kirandeep's Formula)")?;
    writeln!(out, "        μ = π³ + (21/22)π")?;
    writeln!(
        out,
        "        μ = {:.3} + {:.3}",
        PI.powi(3),
        (21.0 / 22.0) * PI
    )?;
    writeln!(out, "        μ = {:.3}", mu_math)?;

    let m = evaluate(
        "μ convergence",
        mu_math,
        mu_phys,
        ONE_PERCENT,
        StatusLabels::PASS_FAIL,
    )?;
    writeln!(out)?;
    writeln!(out, "  [1.3] Convergence of Two Independent Derivations")?;
    writeln!(out, "        Physical:     {:.3}", mu_phys)?;
    writeln!(out, "        Mathematical: {:.3}", mu_math)?;
    writeln!(out, "        Difference:   {:.2}%", m.metric)?;
    writeln!(out, "        Status:       {}", m.status)?;

    report.record("μ convergence", format!("{:.2}%", m.metric), &m);
    Ok(mu_phys)
}

fn bridge_relation(report: &mut Report, mu_phys: f64) -> anyhow::Result<()> {
    report.section("SECTION 2: KIRANDEEP'S BRIDGE RELATION")?;
    let out = &mut report.text;

    let mu_time = (1.0 / PLANCK_TIME).log10();
    let calculated = mu_time - mu_phys;
    let formula = bridge();

    writeln!(out)?;
    writeln!(out, "  [2.1] Time Emergence Depth")?;
    writeln!(out, "        μ_time = log₁₀(1/t_P) = {:.2}", mu_time)?;
    writeln!(out)?;
    writeln!(out, "  [2.2] Kirandeep's Bridge Relation: B = π² - 1/√3")?;
    writeln!(out, "        Calculated (μ_time - μ): {:.3}", calculated)?;
    writeln!(out, "        Formula (π² - 1/√3):     {:.3}", formula)?;

    let m = evaluate(
        "Bridge relation",
        formula,
        calculated,
        Criterion::AbsoluteDifference { max: 0.1 },
        StatusLabels::EXACT,
    )?;
    writeln!(out, "        Status: {}", m.status)?;

    report.record("Bridge relation", format!("{:.3}", formula), &m);
    Ok(())
}

fn fundamental_constants(report: &mut Report) -> anyhow::Result<()> {
    report.section("SECTION 3: FUNDAMENTAL CONSTANT PREDICTIONS")?;
    let mu = MU as f64;

    // Fine structure constant
    let alpha = 1.0 / (4.0 * mu + 1.0);
    let m = evaluate(
        "Fine structure α",
        alpha,
        ALPHA_OBSERVED,
        ONE_PERCENT,
        StatusLabels::PASS_FAIL,
    )?;
    let out = &mut report.text;
    writeln!(out)?;
    writeln!(out, "  [3.1] Fine Structure Constant (α)")?;
    writeln!(out, "        Formula: α = 1/(4μ + 1) = 1/{}", 4 * MU + 1)?;
    writeln!(out, "        Predicted: 1/{:.0}", 1.0 / alpha)?;
    writeln!(out, "        Observed:  1/{:.3}", 1.0 / ALPHA_OBSERVED)?;
    writeln!(out, "        Error:     {:.3}%", m.metric)?;
    writeln!(out, "        Status:    {}", m.status)?;
    report.record("Fine structure α", format!("{:.3}%", m.metric), &m);

    // Proton/electron
    let proton_pred = MU * (MU_TIME + 10);
    let proton_obs = PROTON_MASS_EV / ELECTRON_MASS_EV;
    let m = evaluate(
        "Mass ratio m_p/m_e",
        proton_pred as f64,
        proton_obs,
        ONE_PERCENT,
        StatusLabels::PASS_FAIL,
    )?;
    let out = &mut report.text;
    writeln!(out)?;
    writeln!(out, "  [3.2] Proton/Electron Mass Ratio")?;
    writeln!(
        out,
        "        Formula: m_p/m_e = μ × (μ_time + π²) = {} × {}",
        MU,
        MU_TIME + 10
    )?;
    writeln!(out, "        Predicted: {}", proton_pred)?;
    writeln!(out, "        Observed:  {:.2}", proton_obs)?;
    writeln!(out, "        Error:     {:.3}%", m.metric)?;
    writeln!(out, "        Status:    {}", m.status)?;
    report.record("Mass ratio m_p/m_e", format!("{:.3}%", m.metric), &m);

    // Muon/electron
    let golden_term = PI * PHI + 1.0;
    let muon_pred = mu * golden_term;
    let muon_obs = MUON_MASS_EV / ELECTRON_MASS_EV;
    let m = evaluate(
        "Mass ratio m_μ/m_e",
        muon_pred,
        muon_obs,
        ONE_PERCENT,
        StatusLabels::PASS_FAIL,
    )?;
    let out = &mut report.text;
    writeln!(out)?;
    writeln!(out, "  [3.3] Muon/Electron Mass Ratio")?;
    writeln!(
        out,
        "        Formula: m_μ/m_e = μ × (πφ + 1) = {} × {:.2}",
        MU, golden_term
    )?;
    writeln!(out, "        Predicted: {:.1}", muon_pred)?;
    writeln!(out, "        Observed:  {:.2}", muon_obs)?;
    writeln!(out, "        Error:     {:.3}%", m.metric)?;
    writeln!(out, "        Status:    {}", m.status)?;
    report.record("Mass ratio m_μ/m_e", format!("{:.3}%", m.metric), &m);

    // Tau/electron
    let tau_pred = 3 * MU * MU;
    let tau_obs = TAU_MASS_EV / ELECTRON_MASS_EV;
    let m = evaluate(
        "Mass ratio m_τ/m_e",
        tau_pred as f64,
        tau_obs,
        ONE_PERCENT,
        StatusLabels::PASS_FAIL,
    )?;
    let out = &mut report.text;
    writeln!(out)?;
    writeln!(out, "  [3.4] Tau/Electron Mass Ratio")?;
    writeln!(out, "        Formula: m_τ/m_e = 3μ² = 3 × {}²", MU)?;
    writeln!(out, "        Predicted: {}", tau_pred)?;
    writeln!(out, "        Observed:  {:.0}", tau_obs)?;
    writeln!(out, "        Error:     {:.2}%", m.metric)?;
    writeln!(out, "        Status:    {}", m.status)?;
    report.record("Mass ratio m_τ/m_e", format!("{:.2}%", m.metric), &m);

    // Strong coupling
    let alpha_s = 4.0 / mu;
    let m = evaluate(
        "Strong coupling α_s",
        alpha_s,
        ALPHA_S_OBSERVED,
        ONE_PERCENT,
        StatusLabels::PASS_FAIL,
    )?;
    let out = &mut report.text;
    writeln!(out)?;
    writeln!(out, "  [3.5] Strong Coupling Constant (α_s)")?;
    writeln!(out, "        Formula: α_s = 4/μ = 4/{}", MU)?;
    writeln!(out, "        Predicted: {:.4}", alpha_s)?;
    writeln!(out, "        Observed:  {}", ALPHA_S_OBSERVED)?;
    writeln!(out, "        Error:     {:.2}%", m.metric)?;
    writeln!(out, "        Status:    {}", m.status)?;
    report.record("Strong coupling α_s", format!("{:.2}%", m.metric), &m);

    // Weinberg angle
    let sin2 = PI.powi(2) / MEASURED_TIME_DEPTH;
    let m = evaluate(
        "Weinberg angle",
        sin2,
        WEINBERG_SIN2_OBSERVED,
        Criterion::RelativeError { max_pct: 5.0 },
        StatusLabels::PASS_FAIL,
    )?;
    let out = &mut report.text;
    writeln!(out)?;
    writeln!(out, "  [3.6] Weinberg Angle (sin²θ_W)")?;
    writeln!(out, "        Formula: sin²θ_W = π²/μ_time")?;
    writeln!(out, "        Predicted: {:.3}", sin2)?;
    writeln!(out, "        Observed:  {}", WEINBERG_SIN2_OBSERVED)?;
    writeln!(out, "        Error:     {:.1}%", m.metric)?;
    writeln!(out, "        Status:    {}", m.status)?;
    report.record("Weinberg angle", format!("{:.1}%", m.metric), &m);

    Ok(())
}

fn running_coupling(report: &mut Report) -> anyhow::Result<()> {
    report.section("SECTION 4: KIRANDEEP'S RUNNING FORMULAS")?;

    let n = energy_index(Z_MASS_MEV);
    let alpha_mz = 1.0 / (137.0 - 78.0 * n);
    let m = evaluate(
        "Running α(M_Z)",
        alpha_mz,
        ALPHA_MZ_OBSERVED,
        ONE_PERCENT,
        StatusLabels::PASS_FAIL,
    )?;

    let out = &mut report.text;
    writeln!(out)?;
    writeln!(out, "  [4.1] Running α at M_Z (91 GeV)")?;
    writeln!(
        out,
        "        Energy mapping: n = log₁₀(E/m_e)/44 = {:.3}",
        n
    )?;
    writeln!(out, "        Formula: α(E) = 1/(137 - 78n)")?;
    writeln!(out, "        Predicted: 1/{:.1}", 1.0 / alpha_mz)?;
    writeln!(out, "        Observed:  1/{:.1}", 1.0 / ALPHA_MZ_OBSERVED)?;
    writeln!(out, "        Error:     {:.2}%", m.metric)?;
    writeln!(out, "        Status:    {}", m.status)?;

    report.record("Running α(M_Z)", format!("{:.2}%", m.metric), &m);
    Ok(())
}

fn neutrino_masses(report: &mut Report) -> anyhow::Result<()> {
    report.section("SECTION 5: KIRANDEEP'S NEUTRINO FORMULA")?;
    let out = &mut report.text;

    writeln!(out)?;
    writeln!(out, "  Formula: m_ν_i = m_e / F(μ + i)")?;
    writeln!(out, "  where F(n) is the nth Fibonacci number")?;
    writeln!(out)?;

    let mut total = 0.0;
    for i in 1..=3 {
        let index = MU + i;
        let term = fibonacci(index).with_context(|| format!("F({}) overflows u64", index))?;
        let mass = ELECTRON_MASS_EV / term as f64;
        total += mass;
        writeln!(
            out,
            "  m_ν_{} = {}/F({}) = {}/{} = {:.3} eV",
            4 - i,
            ELECTRON_MASS_EV,
            index,
            ELECTRON_MASS_EV,
            thousands(term),
            mass
        )?;
    }

    let m = evaluate(
        "Neutrino sum",
        total,
        NEUTRINO_SUM_BOUND,
        Criterion::UpperBound,
        StatusLabels::BOUND,
    )?;
    writeln!(out)?;
    writeln!(out, "  Sum Σm_ν = {:.3} eV", total)?;
    writeln!(out, "  Cosmological bound: < {} eV", NEUTRINO_SUM_BOUND)?;
    writeln!(out, "  Status: {}", m.status)?;

    report.record("Neutrino sum", format!("{:.3} eV", total), &m);
    Ok(())
}

fn conservation_law(report: &mut Report) -> anyhow::Result<()> {
    report.section("SECTION 6: KIRANDEEP'S CONSERVATION LAW")?;
    let out = &mut report.text;

    let alpha_g = gravitational_coupling();
    let product = HIERARCHY * alpha_g;

    writeln!(out)?;
    writeln!(out, "  Formula: Γ × α_G = 1")?;
    writeln!(out, "  α_G = Gm_p²/ℏc = {}", scientific(alpha_g, 2))?;
    writeln!(out, "  Γ = 10³⁹")?;
    writeln!(out, "  Product: Γ × α_G = {:.2}", product)?;
    writeln!(out)?;
    writeln!(
        out,
        "  Note: Conservation law is order-of-magnitude (10³⁹ × 10⁻³⁹ = 1)"
    )?;
    writeln!(
        out,
        "  Exact calculation: {:.2} ≈ 1 within factor of 10",
        product
    )?;

    let m = evaluate(
        "Conservation Γ×α_G",
        product,
        1.0,
        Criterion::OrderOfMagnitude {
            low: 0.1,
            high: 10.0,
        },
        StatusLabels::ORDER_OF_MAGNITUDE,
    )?;
    writeln!(out, "  Status: {}", m.status)?;

    report.record("Conservation Γ×α_G", format!("{:.2}", product), &m);
    Ok(())
}
