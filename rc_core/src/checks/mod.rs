//! # Section Checks
//!
//! The calculation engine. Each check is a pure function over scalar
//! inputs; the per-section pipeline lives in [`section`] and follows the
//! pattern:
//!
//! - `SectionInput` - Input parameters (JSON-serializable)
//! - `SectionResult` - Flat record of computed values and pass flags
//! - `check_section(input, config) -> Result<SectionResult, CalcError>`
//!
//! Stages run in order (shear and serviceability reuse flexural outputs),
//! but every section record is independent: any number of records may be
//! evaluated in any order or in parallel.
//!
//! ## Available Checks
//!
//! - [`flexure`] - Required steel area, min/max bounds, neutral axis,
//!   strain, design moment capacity
//! - [`shear`] - Concrete shear capacity, minimum stirrups, spacing,
//!   supplemental longitudinal tension
//! - [`serviceability`] - Uncracked edge stress, crack-control steel,
//!   indirect crack-width estimate

pub mod flexure;
pub mod section;
pub mod serviceability;
pub mod shear;

use serde::{Deserialize, Serialize};

pub use flexure::FlexuralModel;
pub use section::{check_all, check_section, SectionInput, SectionOutcome, SectionResult, Stirrups};
pub use shear::ShearModel;

/// Configuration for a section check run.
///
/// All factors are explicit values passed into every call, so two runs
/// with different code bases can coexist in one process.
///
/// ## JSON Example
///
/// ```json
/// {
///   "flexural_model": "StrengthReductionFactored",
///   "shear_model": "SizeEffect",
///   "phi": 0.90,
///   "phi_c": 0.65,
///   "phi_s": 0.90,
///   "alpha": 0.80,
///   "beta": 0.40,
///   "eps_cu": 0.0033,
///   "stirrup_angle_deg": 90.0,
///   "strut_angle_deg": 45.0,
///   "crack_width_factor": 0.6,
///   "allowable_crack_width_mm": 0.3
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Which required-steel-area formulation to use
    pub flexural_model: FlexuralModel,

    /// Which concrete shear capacity model to use
    pub shear_model: ShearModel,

    /// Flexural strength-reduction factor φ
    pub phi: f64,

    /// Concrete strength-reduction factor φc
    pub phi_c: f64,

    /// Steel strength-reduction factor φs
    pub phi_s: f64,

    /// Equivalent stress block factor α
    pub alpha: f64,

    /// Equivalent stress block factor β
    pub beta: f64,

    /// Ultimate concrete compressive strain εcu
    pub eps_cu: f64,

    /// Stirrup inclination θ (degrees) for the spacing limit
    pub stirrup_angle_deg: f64,

    /// Compression strut inclination θ (degrees) for supplemental tension
    pub strut_angle_deg: f64,

    /// Indirect crack-width reduction factor
    pub crack_width_factor: f64,

    /// Allowable crack width (mm)
    pub allowable_crack_width_mm: f64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            flexural_model: FlexuralModel::StrengthReductionFactored,
            shear_model: ShearModel::SizeEffect,
            phi: 0.90,
            phi_c: 0.65,
            phi_s: 0.90,
            alpha: 0.80,
            beta: 0.40,
            eps_cu: 0.0033,
            stirrup_angle_deg: 90.0,
            strut_angle_deg: 45.0,
            crack_width_factor: 0.6,
            allowable_crack_width_mm: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let cfg = CheckConfig::default();
        assert_eq!(cfg.phi, 0.90);
        assert_eq!(cfg.phi_c, 0.65);
        assert_eq!(cfg.alpha, 0.80);
        assert_eq!(cfg.flexural_model, FlexuralModel::StrengthReductionFactored);
        assert_eq!(cfg.shear_model, ShearModel::SizeEffect);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let cfg = CheckConfig {
            flexural_model: FlexuralModel::SimplifiedAci,
            shear_model: ShearModel::Simplified,
            phi: 0.85,
            ..CheckConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let roundtrip: CheckConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, roundtrip);
    }
}
