use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// SettingsWarning
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsWarning {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Optional `.folio/settings.yaml`. Every key has a default, and a missing
/// file means all defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// File name of the generated document, relative to the root.
    #[serde(default = "default_output")]
    pub output: String,
    /// Drafts older than this many hours are discarded on resume.
    #[serde(default = "default_draft_ttl_hours")]
    pub draft_ttl_hours: u32,
}

fn default_output() -> String {
    paths::DEFAULT_OUTPUT.to_string()
}

fn default_draft_ttl_hours() -> u32 {
    24
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: default_output(),
            draft_ttl_hours: default_draft_ttl_hours(),
        }
    }
}

impl Settings {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::settings_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Settings = serde_yaml::from_str(&data)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::settings_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn validate(&self) -> Vec<SettingsWarning> {
        let mut warnings = Vec::new();
        if self.output.trim().is_empty() {
            warnings.push(SettingsWarning {
                message: format!(
                    "output is empty; '{}' will be used",
                    paths::DEFAULT_OUTPUT
                ),
            });
        }
        if self.draft_ttl_hours == 0 {
            warnings.push(SettingsWarning {
                message: "draft_ttl_hours is 0; saved drafts will always be discarded".to_string(),
            });
        }
        warnings
    }

    /// Output file name, falling back to `config.json` when blank.
    pub fn output_name(&self) -> &str {
        if self.output.trim().is_empty() {
            paths::DEFAULT_OUTPUT
        } else {
            &self.output
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
