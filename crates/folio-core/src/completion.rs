use crate::accessors::{non_blank, records};
use crate::answers::WizardAnswers;

/// Percentage (0–100) of wizard checkpoints the answers already satisfy.
///
/// Eight equally weighted checkpoints: name, tagline, GitHub username, at
/// least one social link, at least one about paragraph, and at least one
/// experience, project and skill-category record.
pub fn completion(answers: &WizardAnswers) -> u8 {
    let filled = |key: &str| non_blank(answers.get(key)).is_some();
    let listed = |key: &str| !records(answers.get(key)).is_empty();

    let checkpoints = [
        filled("name"),
        filled("tagline"),
        filled("githubUsername"),
        listed("socialLinks"),
        ["aboutParagraph1", "aboutParagraph2", "aboutParagraph3"]
            .into_iter()
            .any(filled),
        listed("experience"),
        listed("projects"),
        listed("skillCategories"),
    ];

    let completed = checkpoints.iter().filter(|done| **done).count();
    ((completed as f64 / checkpoints.len() as f64) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn answers(value: serde_json::Value) -> WizardAnswers {
        WizardAnswers::from_value(value).unwrap()
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(completion(&WizardAnswers::new()), 0);
    }

    #[test]
    fn basic_info_only() {
        let a = answers(json!({"name": "Ada", "tagline": "Engineer", "githubUsername": "ada"}));
        // 3 of 8
        assert_eq!(completion(&a), 38);
    }

    #[test]
    fn blank_values_do_not_count() {
        let a = answers(json!({"name": "  ", "aboutParagraph2": "", "socialLinks": []}));
        assert_eq!(completion(&a), 0);
    }

    #[test]
    fn everything_filled() {
        let a = answers(json!({
            "name": "Ada",
            "tagline": "Engineer",
            "githubUsername": "ada",
            "socialLinks": [{"name": "GitHub"}],
            "aboutParagraph3": "Hello",
            "experience": [{}],
            "projects": [{}],
            "skillCategories": [{}],
        }));
        assert_eq!(completion(&a), 100);
    }
}
