use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Features
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub about: bool,
    pub projects: bool,
    pub experience: bool,
    pub skills: bool,
    pub github_projects: bool,
}

impl Features {
    pub fn enabled_count(&self) -> usize {
        [
            self.about,
            self.projects,
            self.experience,
            self.skills,
            self.github_projects,
        ]
        .into_iter()
        .filter(|on| *on)
        .count()
    }
}

// ---------------------------------------------------------------------------
// Site / header
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
    pub og_image: String,
    pub twitter_card: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub title: String,
    pub description: String,
    pub seo: Seo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub greeting: String,
    pub tagline: String,
}

// ---------------------------------------------------------------------------
// Social links
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: String,
    /// Only ever `Some(true)`, for the GitHub link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<ProjectLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projects {
    pub title: String,
    #[serde(default)]
    pub items: Vec<Project>,
}

// ---------------------------------------------------------------------------
// Experience
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub company: String,
    pub role: String,
    pub responsibilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub logo: String,
    pub logo_dark: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub title: String,
    #[serde(default)]
    pub categories: Vec<SkillCategory>,
}

// ---------------------------------------------------------------------------
// GitHub projects / footer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubProjects {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub show_social_links: bool,
    pub show_built_with: bool,
    pub built_with_text: String,
    pub tagline: String,
}

// ---------------------------------------------------------------------------
// ConfigDocument (top-level)
// ---------------------------------------------------------------------------

/// The `config.json` consumed by the portfolio site. Field order here is the
/// key order of the serialized file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub features: Features,
    pub site: Site,
    pub header: Header,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    pub github_username: String,
    pub about: About,
    pub projects: Projects,
    pub experience: Experience,
    pub skills: Skills,
    pub github_projects: GithubProjects,
    pub footer: Footer,
}

impl ConfigDocument {
    /// Pretty JSON with 2-space indentation, newline-terminated.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let doc: ConfigDocument = serde_json::from_str(&data)?;
        Ok(doc)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = self.to_pretty_json()?;
        crate::io::atomic_write(path, data.as_bytes())?;
        tracing::info!(path = %path.display(), "wrote configuration");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::WizardAnswers;
    use crate::transform::generate;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn enabled_count_counts_true_flags() {
        let features = Features {
            about: true,
            projects: false,
            experience: true,
            skills: false,
            github_projects: true,
        };
        assert_eq!(features.enabled_count(), 3);
    }

    #[test]
    fn required_key_only_when_set() {
        let plain = SocialLink {
            name: "Blog".into(),
            url: "https://ada.dev".into(),
            icon: "website".into(),
            required: None,
        };
        let value = serde_json::to_value(&plain).unwrap();
        assert!(value.get("required").is_none());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let answers = WizardAnswers::from_value(json!({
            "name": "Ada",
            "projects": [{"name": "Engine", "link": "https://example.com"}],
        }))
        .unwrap();
        let doc = generate(&answers);

        doc.save(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("}\n"));
        assert_eq!(ConfigDocument::load(&path).unwrap(), doc);
    }
}
