use crate::document::ConfigDocument;
use serde::{Deserialize, Serialize};

/// Counts shown to the user once a document has been generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub sections_enabled: usize,
    pub social_links: usize,
    pub projects: usize,
    pub experience: usize,
    pub skill_categories: usize,
    pub about_paragraphs: usize,
}

pub fn summarize(doc: &ConfigDocument) -> Summary {
    Summary {
        sections_enabled: doc.features.enabled_count(),
        social_links: doc.social_links.len(),
        projects: doc.projects.items.len(),
        experience: doc.experience.jobs.len(),
        skill_categories: doc.skills.categories.len(),
        about_paragraphs: doc.about.paragraphs.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::WizardAnswers;
    use crate::transform::generate;
    use serde_json::json;

    #[test]
    fn empty_document_summary() {
        let summary = summarize(&generate(&WizardAnswers::new()));
        assert_eq!(
            summary,
            Summary {
                sections_enabled: 5,
                social_links: 0,
                projects: 0,
                experience: 0,
                skill_categories: 0,
                about_paragraphs: 1,
            }
        );
    }

    #[test]
    fn counts_surviving_records_only() {
        let answers = WizardAnswers::from_value(json!({
            "skillsEnabled": false,
            "githubProjectsEnabled": false,
            "socialLinks": [
                {"name": "GitHub", "url": "u", "icon": "github"},
                {"name": "Broken", "url": "u"},
            ],
            "projects": [{"name": "A"}, {"name": "B"}, {"name": ""}],
            "experience": [{"company": "Acme", "role": "Dev"}],
            "skillCategories": [{"name": "Langs", "items": ["Rust"]}],
            "aboutParagraph1": "Hi",
            "aboutParagraph2": "There",
        }))
        .unwrap();
        let summary = summarize(&generate(&answers));
        assert_eq!(summary.sections_enabled, 3);
        assert_eq!(summary.social_links, 1);
        assert_eq!(summary.projects, 2);
        assert_eq!(summary.experience, 1);
        assert_eq!(summary.skill_categories, 1);
        assert_eq!(summary.about_paragraphs, 2);
    }
}
