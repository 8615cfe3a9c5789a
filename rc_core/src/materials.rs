//! # Materials Database
//!
//! Concrete and reinforcing steel definitions for section checks.
//!
//! The engine itself only consumes raw strengths (`fck`, `fy`, `fvy` in
//! MPa); this module supplies the standard grades those numbers usually
//! come from, plus nominal areas of deformed bars so a bar callout like
//! `10 x D29` can be turned into a provided steel area.
//!
//! ## Example
//!
//! ```rust
//! use rc_core::materials::{ConcreteGrade, RebarGrade, RebarSize, Materials};
//!
//! let mats = Materials {
//!     fck_mpa: ConcreteGrade::C40.fck_mpa(),
//!     fy_mpa: RebarGrade::Sd500.fy_mpa(),
//!     fvy_mpa: RebarGrade::Sd400.fy_mpa(),
//! };
//! assert_eq!(mats.fck_mpa, 40.0);
//!
//! // 10 x D29 bottom layer
//! let as_prov = RebarSize::D29.nominal_area_mm2() * 10.0;
//! assert!((as_prov - 6424.0).abs() < 1.0);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Material strengths used by a section check.
///
/// Defaults to a typical deck slab combination: C27 concrete with SD400
/// bars for both flexural and shear reinforcement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Materials {
    /// Concrete compressive strength fck (MPa)
    pub fck_mpa: f64,
    /// Flexural rebar yield strength fy (MPa)
    pub fy_mpa: f64,
    /// Shear rebar (stirrup) yield strength fvy (MPa)
    pub fvy_mpa: f64,
}

impl Default for Materials {
    fn default() -> Self {
        Materials {
            fck_mpa: ConcreteGrade::C27.fck_mpa(),
            fy_mpa: RebarGrade::Sd400.fy_mpa(),
            fvy_mpa: RebarGrade::Sd400.fy_mpa(),
        }
    }
}

/// Standard concrete strength classes (KS/KDS designations)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcreteGrade {
    C21,
    C24,
    C27,
    C30,
    C35,
    C40,
}

impl ConcreteGrade {
    /// Characteristic compressive strength fck (MPa)
    pub fn fck_mpa(self) -> f64 {
        match self {
            ConcreteGrade::C21 => 21.0,
            ConcreteGrade::C24 => 24.0,
            ConcreteGrade::C27 => 27.0,
            ConcreteGrade::C30 => 30.0,
            ConcreteGrade::C35 => 35.0,
            ConcreteGrade::C40 => 40.0,
        }
    }
}

/// Standard deformed-bar steel grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RebarGrade {
    Sd300,
    Sd400,
    Sd500,
    Sd600,
}

impl RebarGrade {
    /// Yield strength fy (MPa)
    pub fn fy_mpa(self) -> f64 {
        match self {
            RebarGrade::Sd300 => 300.0,
            RebarGrade::Sd400 => 400.0,
            RebarGrade::Sd500 => 500.0,
            RebarGrade::Sd600 => 600.0,
        }
    }
}

/// Deformed bar designations (KS D 3504)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RebarSize {
    D10,
    D13,
    D16,
    D19,
    D22,
    D25,
    D29,
    D32,
    D35,
}

/// Nominal bar properties: (diameter mm, cross-section area mm²)
static REBAR_TABLE: Lazy<HashMap<RebarSize, (f64, f64)>> = Lazy::new(|| {
    use RebarSize::*;
    HashMap::from([
        (D10, (9.53, 71.33)),
        (D13, (12.7, 126.7)),
        (D16, (15.9, 198.6)),
        (D19, (19.1, 286.5)),
        (D22, (22.2, 387.1)),
        (D25, (25.4, 506.7)),
        (D29, (28.6, 642.4)),
        (D32, (31.8, 794.2)),
        (D35, (34.9, 956.6)),
    ])
});

impl RebarSize {
    /// Nominal diameter (mm)
    pub fn nominal_diameter_mm(self) -> f64 {
        REBAR_TABLE[&self].0
    }

    /// Nominal cross-section area (mm²)
    pub fn nominal_area_mm2(self) -> f64 {
        REBAR_TABLE[&self].1
    }

    /// Total area of `count` bars in one layer (mm²)
    pub fn layer_area_mm2(self, count: u32) -> f64 {
        self.nominal_area_mm2() * count as f64
    }
}
