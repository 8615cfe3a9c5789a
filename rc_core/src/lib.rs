//! # rc_core - Reinforced Concrete Section Check Engine
//!
//! `rc_core` is the computational heart of Rebara, providing design
//! checks for reinforced concrete sections with a clean, JSON-friendly
//! API. Every input and output is serializable, so the engine slots into
//! CLIs, services, and AI-assistant integrations alike.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions that take input and return results
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Batch-Safe**: one bad section never aborts the rest
//!
//! ## Quick Start
//!
//! ```rust
//! use rc_core::checks::{check_section, CheckConfig, SectionInput};
//!
//! let input = SectionInput {
//!     label: "Midspan".to_string(),
//!     b_mm: 1000.0,
//!     d_mm: 250.0,
//!     cover_mm: 50.0,
//!     mu_knm: 242.015,
//!     vu_kn: 167.204,
//!     ..SectionInput::default()
//! };
//!
//! let result = check_section(&input, &CheckConfig::default()).unwrap();
//! println!("As,req = {:.1} mm2", result.as_req_mm2);
//! ```
//!
//! ## Modules
//!
//! - [`checks`] - Flexure, shear, and serviceability checks plus the
//!   per-section pipeline
//! - [`materials`] - Concrete/rebar grades and bar-size tables
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`project`] - Project container, metadata, and settings
//! - [`file_io`] - File operations with atomic saves and locking
//! - [`report`] - Plain-text calculation sheets and CSV export

pub mod checks;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod project;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use checks::{check_all, check_section, CheckConfig, SectionInput, SectionOutcome, SectionResult};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project, FileLock};
pub use project::{GlobalSettings, Project, ProjectMetadata};
