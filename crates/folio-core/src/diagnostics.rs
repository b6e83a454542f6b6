use crate::accessors::{field, non_blank, records, text_list};
use crate::answers::WizardAnswers;
use crate::step::SocialIcon;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// AnswerWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    /// The record or value is ignored by the transform.
    Dropped,
    /// Kept as-is, but probably not what the user meant.
    Warning,
}

impl AnswerWarning {
    fn dropped(message: String) -> Self {
        Self {
            level: WarnLevel::Dropped,
            message,
        }
    }

    fn warning(message: String) -> Self {
        Self {
            level: WarnLevel::Warning,
            message,
        }
    }
}

const TOGGLES: &[&str] = &[
    "aboutEnabled",
    "projectsEnabled",
    "experienceEnabled",
    "skillsEnabled",
    "githubProjectsEnabled",
    "footerSocialLinks",
];

const LIST_KEYS: &[&str] = &["socialLinks", "experience", "projects", "skillCategories"];

/// Explain what `generate` will silently drop or ignore for these answers.
pub fn diagnose(answers: &WizardAnswers) -> Vec<AnswerWarning> {
    let mut warnings = Vec::new();

    for key in TOGGLES {
        match answers.get(key) {
            None | Some(Value::Bool(_)) => {}
            Some(other) => warnings.push(AnswerWarning::dropped(format!(
                "{key}: expected true or false, found {other}; section stays enabled"
            ))),
        }
    }

    for key in LIST_KEYS {
        if let Some(value) = answers.get(key) {
            if !value.is_array() {
                warnings.push(AnswerWarning::dropped(format!(
                    "{key}: expected a list, ignored"
                )));
            }
        }
    }

    for (i, link) in records(answers.get("socialLinks")).iter().enumerate() {
        let missing = missing_fields(link, &["name", "url", "icon"]);
        if !missing.is_empty() {
            warnings.push(AnswerWarning::dropped(format!(
                "socialLinks[{i}]: missing {}",
                missing.join(", ")
            )));
            continue;
        }
        if let Some(icon) = field(link, "icon") {
            if icon.parse::<SocialIcon>().is_err() {
                warnings.push(AnswerWarning::warning(format!(
                    "socialLinks[{i}]: icon '{icon}' is not a known icon"
                )));
            }
        }
    }

    for (i, job) in records(answers.get("experience")).iter().enumerate() {
        let missing = missing_fields(job, &["company", "role"]);
        if !missing.is_empty() {
            warnings.push(AnswerWarning::dropped(format!(
                "experience[{i}]: missing {}",
                missing.join(", ")
            )));
        }
    }

    for (i, project) in records(answers.get("projects")).iter().enumerate() {
        if non_blank(project.get("name")).is_none() {
            warnings.push(AnswerWarning::dropped(format!("projects[{i}]: missing name")));
        }
    }

    for (i, category) in records(answers.get("skillCategories")).iter().enumerate() {
        let mut missing = missing_fields(category, &["name"]);
        if text_list(category.get("items")).is_empty() {
            missing.push("items");
        }
        if !missing.is_empty() {
            warnings.push(AnswerWarning::dropped(format!(
                "skillCategories[{i}]: missing {}",
                missing.join(", ")
            )));
        }
    }

    warnings
}

fn missing_fields<'a>(record: &Value, keys: &[&'a str]) -> Vec<&'a str> {
    keys.iter()
        .copied()
        .filter(|key| field(record, key).is_none())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn messages(value: Value) -> Vec<String> {
        let answers = WizardAnswers::from_value(value).unwrap();
        diagnose(&answers).into_iter().map(|w| w.message).collect()
    }

    #[test]
    fn clean_answers_have_no_warnings() {
        assert!(messages(json!({
            "name": "Ada",
            "aboutEnabled": false,
            "socialLinks": [{"name": "GitHub", "url": "u", "icon": "github"}],
            "experience": [{"company": "Acme", "role": "Dev"}],
            "projects": [{"name": "Engine"}],
            "skillCategories": [{"name": "Langs", "items": "Rust"}],
        }))
        .is_empty());
    }

    #[test]
    fn reports_dropped_records() {
        let msgs = messages(json!({
            "socialLinks": [{"name": "LinkedIn", "url": ""}],
            "experience": [{"company": "Acme"}],
            "projects": [{"name": "  "}],
            "skillCategories": [{"name": "Empty", "items": []}],
        }));
        assert_eq!(
            msgs,
            vec![
                "socialLinks[0]: missing url, icon",
                "experience[0]: missing role",
                "projects[0]: missing name",
                "skillCategories[0]: missing items",
            ]
        );
    }

    #[test]
    fn flags_non_boolean_toggles() {
        let answers = WizardAnswers::from_value(json!({"skillsEnabled": "false"})).unwrap();
        let warnings = diagnose(&answers);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarnLevel::Dropped);
        assert!(warnings[0].message.starts_with("skillsEnabled"));
    }

    #[test]
    fn flags_unknown_icon_but_keeps_it() {
        let answers = WizardAnswers::from_value(json!({
            "socialLinks": [{"name": "Space", "url": "u", "icon": "myspace"}]
        }))
        .unwrap();
        let warnings = diagnose(&answers);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarnLevel::Warning);
    }

    #[test]
    fn flags_non_list_values() {
        let msgs = messages(json!({"projects": "Engine"}));
        assert_eq!(msgs, vec!["projects: expected a list, ignored"]);
    }
}
