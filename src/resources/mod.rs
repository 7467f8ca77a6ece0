// Static resource tables
//
// Loaded once at startup (built-in or from a JSON file) and shared read-only
// by every request.

mod helplines;
mod messages;

pub use helplines::HelplineDirectory;
pub use messages::{ComfortMessages, SupportCategory, SupportMessages};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::crisis::CrisisKeywords;
use crate::errors::CompanionError;

/// All phrase tables and directories the companion answers from.
///
/// Any section missing from a resource file keeps its built-in value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    pub crisis_keywords: CrisisKeywords,
    pub comfort: ComfortMessages,
    pub support: SupportMessages,
    pub coping_activities: Vec<String>,
    pub breathing_exercises: Vec<String>,
    pub helplines: HelplineDirectory,
    pub welcome_templates: Vec<String>,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            crisis_keywords: CrisisKeywords::default(),
            comfort: ComfortMessages::default(),
            support: SupportMessages::default(),
            coping_activities: messages::default_coping_activities(),
            breathing_exercises: messages::default_breathing_exercises(),
            helplines: HelplineDirectory::default(),
            welcome_templates: messages::default_welcome_templates(),
        }
    }
}

impl Resources {
    /// Load resource tables from a JSON file and validate them
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read resources file: {}", path.display()))?;

        let resources: Resources = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse resources file: {}", path.display()))?;
        resources.validate()?;

        tracing::info!(path = %path.display(), "Loaded resource tables");
        Ok(resources)
    }

    /// Every table must be non-empty
    pub fn validate(&self) -> Result<(), CompanionError> {
        self.crisis_keywords.validate()?;

        let mut tables: Vec<(String, &[String])> = vec![
            ("comfort.crisis_immediate".to_string(), self.comfort.crisis_immediate.as_slice()),
            ("comfort.crisis_support".to_string(), self.comfort.crisis_support.as_slice()),
            ("comfort.comfort".to_string(), self.comfort.comfort.as_slice()),
            ("coping_activities".to_string(), self.coping_activities.as_slice()),
            ("breathing_exercises".to_string(), self.breathing_exercises.as_slice()),
            ("welcome_templates".to_string(), self.welcome_templates.as_slice()),
        ];
        for category in SupportCategory::ALL {
            tables.push((format!("support.{}", category), self.support.get(category)));
        }

        if let Some((name, _)) = tables.iter().find(|(_, list)| list.is_empty()) {
            return Err(CompanionError::InvalidResources(format!(
                "table '{}' is empty",
                name
            )));
        }

        if self.helplines.is_empty() {
            return Err(CompanionError::InvalidResources(
                "helpline directory is empty".to_string(),
            ));
        }

        Ok(())
    }
}
