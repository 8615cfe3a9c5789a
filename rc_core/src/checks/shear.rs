//! # Shear Design Checks
//!
//! Concrete shear capacity plus the stirrup-related limits that go with
//! it. Two capacity models exist side by side and are selected by
//! [`ShearModel`]; they are not numerically equivalent:
//!
//! - [`ShearModel::SizeEffect`] - size-effect factor `k` with the
//!   `fck^(1/3)` capacity expression, result in newtons
//! - [`ShearModel::Simplified`] - the short `0.53·√fck·b·d` expression in
//!   kilonewtons, used by the simplified report variant; when the demand
//!   exceeds `Vc` the remainder is assigned to stirrups as `Vs`
//!
//! Angles are taken in degrees to match the tabular inputs.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{KiloNewtons, Newtons};

/// Which concrete shear capacity model a check run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShearModel {
    /// Size-effect capacity check (Vcd vs Vu)
    SizeEffect,
    /// Simplified capacity split into Vc and required Vs
    Simplified,
}

/// Size-effect concrete shear capacity outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearCapacity {
    /// Design concrete shear capacity Vcd (N)
    pub vcd_n: f64,
    /// Lower-bound capacity Vcd,min (N)
    pub vcd_min_n: f64,
    /// Vcd ≥ Vu (demand converted to N)
    pub pass: bool,
}

/// Simplified shear model outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedShear {
    /// Concrete shear capacity Vc (kN)
    pub vc_kn: f64,
    /// Required stirrup contribution Vs = Vu − Vc (kN); 0 when Vu ≤ Vc
    pub vs_kn: f64,
    /// Whether stirrups are required (Vu > Vc)
    pub stirrups_required: bool,
}

/// Minimum shear reinforcement ratio check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StirrupRatio {
    /// Minimum ratio ρv,min = 0.08·√fck/fvy
    pub rho_v_min: f64,
    /// Provided ratio ρv = Av/(s·b)
    pub rho_v_use: f64,
    /// ρv ≥ ρv,min
    pub pass: bool,
}

/// Supplemental longitudinal tension from shear (strut-and-tie style).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupplementalTension {
    /// Available tension margin ΔTr = (Mn − Mu)/z with z = 0.9·d
    pub delta_tr: f64,
    /// Tension demand ΔT = 0.5·Vu·(cot θ − cot α)
    pub delta_t: f64,
    /// ΔTr ≥ ΔT
    pub pass: bool,
}

fn validate_positive(pairs: &[(&str, f64)]) -> CalcResult<()> {
    for (field, value) in pairs {
        if *value <= 0.0 || !value.is_finite() {
            return Err(CalcError::invalid_geometry(
                *field,
                value.to_string(),
                "Must be positive",
            ));
        }
    }
    Ok(())
}

/// Size-effect concrete shear capacity.
///
/// `k = min(1 + √(200/d), 2)`,
/// `Vcd = 0.85·φc·k·0.17·fck^(1/3)·b·d` (N),
/// `Vcd_min = 0.4·φc·0.63·√fck·b·d` (N).
/// The demand `Vu` comes in as kN and is aligned to newtons for the
/// comparison; `Vu = 0` always passes.
pub fn shear_capacity(
    vu_kn: f64,
    b_mm: f64,
    d_mm: f64,
    fck_mpa: f64,
    phi_c: f64,
) -> CalcResult<ShearCapacity> {
    validate_positive(&[("b_mm", b_mm), ("d_mm", d_mm), ("fck_mpa", fck_mpa)])?;

    let k = (1.0 + (200.0 / d_mm).sqrt()).min(2.0);
    let vcd = 0.85 * phi_c * k * 0.17 * fck_mpa.powf(1.0 / 3.0) * b_mm * d_mm;
    let vcd_min = 0.4 * phi_c * 0.63 * fck_mpa.sqrt() * b_mm * d_mm;
    let Newtons(vu_n) = KiloNewtons(vu_kn).into();

    Ok(ShearCapacity {
        vcd_n: vcd,
        vcd_min_n: vcd_min,
        pass: vcd >= vu_n,
    })
}

/// Simplified shear model: `Vc = 0.53·√fck·b·d·1e-3` (kN).
///
/// When `Vu ≤ Vc` no stirrups are required; otherwise the remainder
/// `Vs = Vu − Vc` is reported as the stirrup demand. Exceeding `Vc` is a
/// normal outcome here, not a failure.
pub fn simplified_shear(
    vu_kn: f64,
    b_mm: f64,
    d_mm: f64,
    fck_mpa: f64,
) -> CalcResult<SimplifiedShear> {
    validate_positive(&[("b_mm", b_mm), ("d_mm", d_mm), ("fck_mpa", fck_mpa)])?;

    let vc = 0.53 * fck_mpa.sqrt() * b_mm * d_mm * 1e-3;
    let stirrups_required = vu_kn > vc;

    Ok(SimplifiedShear {
        vc_kn: vc,
        vs_kn: if stirrups_required { vu_kn - vc } else { 0.0 },
        stirrups_required,
    })
}

/// Minimum shear reinforcement ratio.
///
/// `ρv,min = 0.08·√fck/fvy`, `ρv = Av/(s·b)`.
pub fn min_shear_reinforcement(
    av_use_mm2: f64,
    s_mm: f64,
    b_mm: f64,
    fck_mpa: f64,
    fvy_mpa: f64,
) -> CalcResult<StirrupRatio> {
    validate_positive(&[
        ("s_mm", s_mm),
        ("b_mm", b_mm),
        ("fck_mpa", fck_mpa),
        ("fvy_mpa", fvy_mpa),
    ])?;

    let rho_min = 0.08 * fck_mpa.sqrt() / fvy_mpa;
    let rho_use = av_use_mm2 / (s_mm * b_mm);

    Ok(StirrupRatio {
        rho_v_min: rho_min,
        rho_v_use: rho_use,
        pass: rho_use >= rho_min,
    })
}

/// Maximum stirrup spacing.
///
/// `Smax = min(0.75·d·(1 + cot θ), 600)` mm with θ in degrees
/// (vertical stirrups: θ = 90°, cot θ = 0).
pub fn max_stirrup_spacing(d_mm: f64, theta_deg: f64) -> f64 {
    let cot_theta = 1.0 / theta_deg.to_radians().tan();
    (0.75 * d_mm * (1.0 + cot_theta)).min(600.0)
}

/// Supplemental longitudinal tension demand caused by shear.
///
/// `z = 0.9·d`, `ΔTr = (Mn − Mu)/z`,
/// `ΔT = 0.5·Vu·(cot θ − cot α)` with the strut angle θ (typically 45°)
/// and stirrup angle α (typically 90°).
pub fn supplemental_tension(
    mn_knm: f64,
    mu_knm: f64,
    vu_kn: f64,
    d_mm: f64,
    theta_deg: f64,
    alpha_deg: f64,
) -> CalcResult<SupplementalTension> {
    validate_positive(&[("d_mm", d_mm)])?;

    let z = 0.9 * d_mm;
    let delta_tr = (mn_knm - mu_knm) / z;
    let cot = |deg: f64| 1.0 / deg.to_radians().tan();
    let delta_t = 0.5 * vu_kn * (cot(theta_deg) - cot(alpha_deg));

    Ok(SupplementalTension {
        delta_tr,
        delta_t,
        pass: delta_tr >= delta_t,
    })
}
