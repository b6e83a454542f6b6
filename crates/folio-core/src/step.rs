use crate::error::FolioError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    BasicInfo,
    SocialLinks,
    About,
    Experience,
    Projects,
    Skills,
    Settings,
}

impl Step {
    pub fn all() -> &'static [Step] {
        &[
            Step::BasicInfo,
            Step::SocialLinks,
            Step::About,
            Step::Experience,
            Step::Projects,
            Step::Skills,
            Step::Settings,
        ]
    }

    pub fn first() -> Step {
        Step::BasicInfo
    }

    pub fn last() -> Step {
        Step::Settings
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Step> {
        Step::all().get(self.index() + 1).copied()
    }

    pub fn prev(self) -> Option<Step> {
        self.index()
            .checked_sub(1)
            .and_then(|i| Step::all().get(i).copied())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Step::BasicInfo => "basic_info",
            Step::SocialLinks => "social_links",
            Step::About => "about",
            Step::Experience => "experience",
            Step::Projects => "projects",
            Step::Skills => "skills",
            Step::Settings => "settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::BasicInfo => "Basic information",
            Step::SocialLinks => "Social links",
            Step::About => "About you",
            Step::Experience => "Work experience",
            Step::Projects => "Featured projects",
            Step::Skills => "Skills",
            Step::Settings => "Sections and footer",
        }
    }

    /// Answer keys collected by this step.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Step::BasicInfo => &[
                "name",
                "tagline",
                "githubUsername",
                "description",
                "websiteUrl",
                "keywords",
            ],
            Step::SocialLinks => &["socialLinks"],
            Step::About => &["aboutParagraph1", "aboutParagraph2", "aboutParagraph3"],
            Step::Experience => &["experienceTitle", "experience"],
            Step::Projects => &["projectsTitle", "projects"],
            Step::Skills => &["skillsTitle", "skillCategories"],
            Step::Settings => &[
                "aboutEnabled",
                "experienceEnabled",
                "projectsEnabled",
                "skillsEnabled",
                "githubProjectsEnabled",
                "githubProjectsTitle",
                "footerSocialLinks",
                "footerTagline",
            ],
        }
    }

    /// The step that collects `key`, if any.
    pub fn owning(key: &str) -> Option<Step> {
        Step::all().iter().copied().find(|s| s.fields().iter().any(|f| *f == key))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Step {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Step::all()
            .iter()
            .copied()
            .find(|step| step.as_str() == normalized)
            .ok_or_else(|| FolioError::UnknownStep(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// SocialIcon
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Youtube,
    Website,
    Email,
    Medium,
    Discord,
    Behance,
    Dribbble,
    Stackoverflow,
}

impl SocialIcon {
    pub fn all() -> &'static [SocialIcon] {
        &[
            SocialIcon::Github,
            SocialIcon::Linkedin,
            SocialIcon::Twitter,
            SocialIcon::Instagram,
            SocialIcon::Youtube,
            SocialIcon::Website,
            SocialIcon::Email,
            SocialIcon::Medium,
            SocialIcon::Discord,
            SocialIcon::Behance,
            SocialIcon::Dribbble,
            SocialIcon::Stackoverflow,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SocialIcon::Github => "github",
            SocialIcon::Linkedin => "linkedin",
            SocialIcon::Twitter => "twitter",
            SocialIcon::Instagram => "instagram",
            SocialIcon::Youtube => "youtube",
            SocialIcon::Website => "website",
            SocialIcon::Email => "email",
            SocialIcon::Medium => "medium",
            SocialIcon::Discord => "discord",
            SocialIcon::Behance => "behance",
            SocialIcon::Dribbble => "dribbble",
            SocialIcon::Stackoverflow => "stackoverflow",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SocialIcon::Github => "GitHub",
            SocialIcon::Linkedin => "LinkedIn",
            SocialIcon::Twitter => "Twitter",
            SocialIcon::Instagram => "Instagram",
            SocialIcon::Youtube => "YouTube",
            SocialIcon::Website => "Website",
            SocialIcon::Email => "Email",
            SocialIcon::Medium => "Medium",
            SocialIcon::Discord => "Discord",
            SocialIcon::Behance => "Behance",
            SocialIcon::Dribbble => "Dribbble",
            SocialIcon::Stackoverflow => "Stack Overflow",
        }
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SocialIcon {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SocialIcon::all()
            .iter()
            .copied()
            .find(|icon| icon.as_str() == s)
            .ok_or_else(|| FolioError::UnknownIcon(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_steps_in_order() {
        let all = Step::all();
        assert_eq!(all.len(), 7);
        assert_eq!(all[0], Step::first());
        assert_eq!(all[6], Step::last());
        for (i, step) in all.iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }

    #[test]
    fn next_and_prev_stop_at_edges() {
        assert_eq!(Step::BasicInfo.next(), Some(Step::SocialLinks));
        assert_eq!(Step::Settings.next(), None);
        assert_eq!(Step::SocialLinks.prev(), Some(Step::BasicInfo));
        assert_eq!(Step::BasicInfo.prev(), None);
    }

    #[test]
    fn parse_accepts_kebab_and_snake() {
        assert_eq!("basic-info".parse::<Step>().unwrap(), Step::BasicInfo);
        assert_eq!("social_links".parse::<Step>().unwrap(), Step::SocialLinks);
        assert_eq!("Skills".parse::<Step>().unwrap(), Step::Skills);
        assert!(matches!(
            "review".parse::<Step>(),
            Err(FolioError::UnknownStep(_))
        ));
    }

    #[test]
    fn every_field_has_one_owner() {
        let mut seen = std::collections::HashSet::new();
        for step in Step::all() {
            for key in step.fields() {
                assert!(seen.insert(*key), "duplicate field {key}");
                assert_eq!(Step::owning(key), Some(*step));
            }
        }
        assert_eq!(Step::owning("unknownKey"), None);
    }

    #[test]
    fn icon_vocabulary_roundtrips() {
        assert_eq!(SocialIcon::all().len(), 12);
        for icon in SocialIcon::all() {
            assert_eq!(icon.as_str().parse::<SocialIcon>().unwrap(), *icon);
            let json = serde_json::to_string(icon).unwrap();
            assert_eq!(json, format!("\"{}\"", icon.as_str()));
        }
        assert!(matches!(
            "myspace".parse::<SocialIcon>(),
            Err(FolioError::UnknownIcon(_))
        ));
    }
}
