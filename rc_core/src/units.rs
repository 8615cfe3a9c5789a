//! # Unit Types
//!
//! Type-safe wrappers for the SI units this engine works in. Newtype
//! wrappers over `f64` provide compile-time safety against unit confusion
//! while serializing as plain numbers.
//!
//! ## SI Units (Primary)
//!
//! The engine follows the mm/MPa/kN convention common to concrete design
//! codes:
//! - Length: millimeters (mm)
//! - Area: square millimeters (mm²)
//! - Stress: megapascals (MPa = N/mm²)
//! - Force: newtons (N), kilonewtons (kN)
//! - Moment: newton-millimeters (N·mm), kilonewton-meters (kN·m)
//!
//! The mixed-unit conversions that pepper the formulas (`Mu·1e6`,
//! `Vu·1000`) live here as `From` impls so the checks read cleanly.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::units::{KiloNewtonMeters, NewtonMillimeters};
//!
//! let mu = KiloNewtonMeters(242.015);
//! let mu_nmm: NewtonMillimeters = mu.into();
//! assert_eq!(mu_nmm.0, 242.015e6);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length and Area
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Area in square millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimeters(pub f64);

/// Section modulus in cubic millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMillimeters(pub f64);

// ============================================================================
// Stress
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

// ============================================================================
// Force
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Moment
// ============================================================================

/// Moment in newton-millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

/// Moment in kilonewton-meters (1 kN·m = 1e6 N·mm)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

impl From<KiloNewtonMeters> for NewtonMillimeters {
    fn from(knm: KiloNewtonMeters) -> Self {
        NewtonMillimeters(knm.0 * 1e6)
    }
}

impl From<NewtonMillimeters> for KiloNewtonMeters {
    fn from(nmm: NewtonMillimeters) -> Self {
        KiloNewtonMeters(nmm.0 / 1e6)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(SquareMillimeters);
impl_arithmetic!(CubicMillimeters);
impl_arithmetic!(Megapascals);
impl_arithmetic!(Newtons);
impl_arithmetic!(KiloNewtons);
impl_arithmetic!(NewtonMillimeters);
impl_arithmetic!(KiloNewtonMeters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knm_to_nmm() {
        let mu = KiloNewtonMeters(242.015);
        let nmm: NewtonMillimeters = mu.into();
        assert_eq!(nmm.0, 242.015e6);
    }

    #[test]
    fn test_kn_to_n() {
        let vu = KiloNewtons(167.204);
        let n: Newtons = vu.into();
        assert_eq!(n.0, 167204.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimeters(250.0);
        let b = Millimeters(100.0);
        assert_eq!((a + b).0, 350.0);
        assert_eq!((a - b).0, 150.0);
        assert_eq!((a * 2.0).0, 500.0);
        assert_eq!((a / 2.0).0, 125.0);
    }

    #[test]
    fn test_serialization() {
        let d = Millimeters(250.0);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "250.0");

        let roundtrip: Millimeters = serde_json::from_str(&json).unwrap();
        assert_eq!(d, roundtrip);
    }
}
