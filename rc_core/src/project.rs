//! # Project Data Structures
//!
//! The `Project` struct is the root container for a batch of section
//! checks. Projects serialize to `.rcd` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: GlobalSettings (design code, check config, defaults)
//! └── sections: HashMap<Uuid, SectionInput> (all design points)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use rc_core::project::Project;
//!
//! let project = Project::new("Jane Engineer", "25-042", "ACME Corp");
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&project).unwrap();
//!
//! // Save to file (see file_io module for atomic saves)
//! std::fs::write("project.rcd", &json).unwrap();
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::checks::{check_all, CheckConfig, SectionInput, SectionOutcome};
use crate::materials::Materials;

/// Current schema version for .rcd files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// This is the top-level struct that gets serialized to `.rcd` files.
/// Sections are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Global settings (design code, check config, default materials)
    pub settings: GlobalSettings,

    /// All section inputs, keyed by UUID
    pub sections: HashMap<Uuid, SectionInput>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Arguments
    ///
    /// * `engineer` - Name of the responsible engineer
    /// * `job_id` - Job/project number (e.g., "25-001")
    /// * `client` - Client name
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            sections: HashMap::new(),
        }
    }

    /// Add a section to the project. Returns the UUID assigned to it.
    pub fn add_section(&mut self, section: SectionInput) -> Uuid {
        let id = Uuid::new_v4();
        self.sections.insert(id, section);
        self.touch();
        id
    }

    /// Remove a section by UUID. Returns the removed input if it existed.
    pub fn remove_section(&mut self, id: &Uuid) -> Option<SectionInput> {
        let section = self.sections.remove(id);
        if section.is_some() {
            self.touch();
        }
        section
    }

    /// Get a section by UUID.
    pub fn get_section(&self, id: &Uuid) -> Option<&SectionInput> {
        self.sections.get(id)
    }

    /// Get a mutable reference to a section by UUID.
    ///
    /// Note: updates the modified timestamp when the section is found.
    pub fn get_section_mut(&mut self, id: &Uuid) -> Option<&mut SectionInput> {
        if self.sections.contains_key(id) {
            self.meta.modified = Utc::now();
            self.sections.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Run every section through the check pipeline with the project's
    /// check configuration, sorted by label for stable output.
    pub fn check_all_sections(&self) -> Vec<SectionOutcome> {
        let mut inputs: Vec<SectionInput> = self.sections.values().cloned().collect();
        inputs.sort_by(|a, b| a.label.cmp(&b.label));
        check_all(&inputs, &self.settings.check_config)
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Design code label (e.g., "KDS 14 20")
    pub design_code: String,

    /// Factors and model selections applied to every section
    pub check_config: CheckConfig,

    /// Default materials for new sections
    pub default_materials: Materials,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            design_code: "KDS 14 20".to_string(),
            check_config: CheckConfig::default(),
            default_materials: Materials::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = Project::new("John Doe", "25-001", "Acme Corp");
        assert_eq!(project.meta.engineer, "John Doe");
        assert_eq!(project.meta.job_id, "25-001");
        assert_eq!(project.meta.client, "Acme Corp");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
    }

    #[test]
    fn test_project_serialization() {
        let project = Project::new("Jane Engineer", "25-042", "Test Client");
        let json = serde_json::to_string_pretty(&project).unwrap();

        assert!(json.contains("Jane Engineer"));
        assert!(json.contains("25-042"));
        assert!(json.contains("KDS 14 20"));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.engineer, "Jane Engineer");
    }

    #[test]
    fn test_add_remove_section() {
        let mut project = Project::new("Engineer", "25-001", "Client");

        let section = SectionInput {
            label: "Midspan".to_string(),
            mu_knm: 100.0,
            ..SectionInput::default()
        };

        let id = project.add_section(section);
        assert_eq!(project.section_count(), 1);
        assert!(project.get_section(&id).is_some());

        let removed = project.remove_section(&id);
        assert!(removed.is_some());
        assert_eq!(project.section_count(), 0);
    }

    #[test]
    fn test_check_all_sections_sorted() {
        let mut project = Project::new("Engineer", "25-001", "Client");
        project.add_section(SectionInput {
            label: "B support".to_string(),
            mu_knm: 50.0,
            ..SectionInput::default()
        });
        project.add_section(SectionInput {
            label: "A midspan".to_string(),
            mu_knm: 100.0,
            ..SectionInput::default()
        });

        let outcomes = project.check_all_sections();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].label, "A midspan");
        assert_eq!(outcomes[1].label, "B support");
    }

    #[test]
    fn test_modified_timestamp_advances() {
        let mut project = Project::new("Engineer", "25-001", "Client");
        let created = project.meta.modified;
        project.add_section(SectionInput::default());
        assert!(project.meta.modified >= created);
    }
}
