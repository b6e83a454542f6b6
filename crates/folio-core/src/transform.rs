//! Wizard answers → `config.json`.
//!
//! [`generate`] is total: every key is optional and every wrong-typed value
//! is read as absent, so any answer set yields a complete document.

use crate::accessors::{field, is_explicit_false, non_blank, records, text, text_list, text_or};
use crate::answers::WizardAnswers;
use crate::defaults;
use crate::document::{
    About, ConfigDocument, Experience, Features, Footer, GithubProjects, Header, Job, Project,
    ProjectLink, Projects, Seo, Site, SkillCategory, Skills, SocialLink,
};
use crate::paths;
use crate::step::SocialIcon;
use serde_json::Value;

/// Build the configuration document from the accumulated answers.
pub fn generate(answers: &WizardAnswers) -> ConfigDocument {
    let doc = ConfigDocument {
        features: features(answers),
        site: site(answers),
        header: header(answers),
        social_links: social_links(answers),
        github_username: text_or(answers, "githubUsername", ""),
        about: about(answers),
        projects: projects(answers),
        experience: experience(answers),
        skills: skills(answers),
        github_projects: github_projects(answers),
        footer: footer(answers),
    };
    cleanup(doc)
}

/// Post-assembly guarantees. Applying it twice changes nothing.
pub fn cleanup(mut doc: ConfigDocument) -> ConfigDocument {
    if doc.about.paragraphs.is_empty() {
        doc.about.paragraphs = vec![defaults::ABOUT.fallback_paragraph.to_string()];
    }
    doc
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

fn features(answers: &WizardAnswers) -> Features {
    let enabled = |key: &str| !is_explicit_false(answers.get(key));
    Features {
        about: enabled("aboutEnabled"),
        projects: enabled("projectsEnabled"),
        experience: enabled("experienceEnabled"),
        skills: enabled("skillsEnabled"),
        github_projects: enabled("githubProjectsEnabled"),
    }
}

fn site(answers: &WizardAnswers) -> Site {
    let site = &defaults::SITE;
    let name = text(answers.get("name"));
    let description = text(answers.get("description"));
    let github = text_or(answers, "githubUsername", "");
    let display_name = name.unwrap_or(site.display_name);

    let base_url = match text(answers.get("websiteUrl")) {
        Some(url) => url.to_string(),
        None => format!("https://{github}.github.io"),
    };

    Site {
        title: name.unwrap_or(site.title).to_string(),
        description: description.unwrap_or(site.description).to_string(),
        seo: Seo {
            title: format!("{display_name} - Portfolio"),
            description: match description {
                Some(d) => d.to_string(),
                None => format!("Portfolio of {display_name}"),
            },
            keywords: text_or(answers, "keywords", site.keywords),
            author: name.unwrap_or_default().to_string(),
            og_image: format!("{}{github}", site.avatar_base),
            twitter_card: site.twitter_card.to_string(),
            base_url,
        },
    }
}

fn header(answers: &WizardAnswers) -> Header {
    Header {
        greeting: text_or(answers, "name", ""),
        tagline: text_or(answers, "tagline", ""),
    }
}

fn social_links(answers: &WizardAnswers) -> Vec<SocialLink> {
    records(answers.get("socialLinks"))
        .iter()
        .enumerate()
        .filter_map(|(i, record)| {
            let link = social_link(record);
            if link.is_none() {
                tracing::debug!(index = i, "dropping incomplete social link");
            }
            link
        })
        .collect()
}

fn social_link(record: &Value) -> Option<SocialLink> {
    let name = field(record, "name")?;
    let url = field(record, "url")?;
    let icon = field(record, "icon")?;
    Some(SocialLink {
        name: name.to_string(),
        url: url.to_string(),
        icon: icon.to_string(),
        required: (icon == SocialIcon::Github.as_str()).then_some(true),
    })
}

fn about(answers: &WizardAnswers) -> About {
    let paragraphs = ["aboutParagraph1", "aboutParagraph2", "aboutParagraph3"]
        .iter()
        .filter_map(|key| non_blank(answers.get(key)))
        .map(|p| p.trim().to_string())
        .collect();
    About { paragraphs }
}

fn projects(answers: &WizardAnswers) -> Projects {
    let items = records(answers.get("projects"))
        .iter()
        .filter_map(project)
        .collect();
    Projects {
        title: text_or(answers, "projectsTitle", defaults::PROJECTS.title),
        items,
    }
}

fn project(record: &Value) -> Option<Project> {
    let name = non_blank(record.get("name"))?;
    Some(Project {
        name: name.to_string(),
        description: text_list(record.get("description")),
        date: non_blank(record.get("date")).map(str::to_string),
        picture: non_blank(record.get("picture")).map(str::to_string),
        link: non_blank(record.get("link")).map(|url| ProjectLink {
            url: url.to_string(),
            title: defaults::PROJECTS.link_title.to_string(),
        }),
    })
}

fn experience(answers: &WizardAnswers) -> Experience {
    let jobs = records(answers.get("experience"))
        .iter()
        .filter_map(job)
        .collect();
    Experience {
        title: text_or(answers, "experienceTitle", defaults::EXPERIENCE.title),
        jobs,
    }
}

fn job(record: &Value) -> Option<Job> {
    let company = field(record, "company")?;
    let role = field(record, "role")?;
    Some(Job {
        company: company.to_string(),
        role: role.to_string(),
        responsibilities: text_list(record.get("responsibilities")),
        date: non_blank(record.get("date")).map(str::to_string),
        logo: paths::logo_path(company),
        logo_dark: paths::logo_dark_path(company),
    })
}

fn skills(answers: &WizardAnswers) -> Skills {
    let categories = records(answers.get("skillCategories"))
        .iter()
        .filter_map(skill_category)
        .collect();
    Skills {
        title: text_or(answers, "skillsTitle", defaults::SKILLS.title),
        categories,
    }
}

fn skill_category(record: &Value) -> Option<SkillCategory> {
    let name = field(record, "name")?;
    let items = text_list(record.get("items"));
    if items.is_empty() {
        return None;
    }
    Some(SkillCategory {
        name: name.to_string(),
        items,
    })
}

fn github_projects(answers: &WizardAnswers) -> GithubProjects {
    GithubProjects {
        title: text_or(answers, "githubProjectsTitle", defaults::GITHUB_PROJECTS.title),
    }
}

fn footer(answers: &WizardAnswers) -> Footer {
    let footer = &defaults::FOOTER;
    Footer {
        show_social_links: !is_explicit_false(answers.get("footerSocialLinks")),
        show_built_with: true,
        built_with_text: footer.built_with_text.to_string(),
        tagline: text_or(answers, "footerTagline", footer.tagline),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
