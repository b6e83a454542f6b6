//! Default literals for every section of `config.json`.
//!
//! The static-site renderer depends on these strings verbatim.

pub struct SiteDefaults {
    pub title: &'static str,
    pub description: &'static str,
    pub display_name: &'static str,
    pub keywords: &'static str,
    pub twitter_card: &'static str,
    pub avatar_base: &'static str,
}

pub const SITE: SiteDefaults = SiteDefaults {
    title: "Developer Portfolio",
    description: "Developer Portfolio",
    display_name: "Developer",
    keywords: "developer, portfolio, programming",
    twitter_card: "summary_large_image",
    avatar_base: "https://avatars.githubusercontent.com/",
};

pub struct AboutDefaults {
    pub fallback_paragraph: &'static str,
}

pub const ABOUT: AboutDefaults = AboutDefaults {
    fallback_paragraph: "Welcome to my portfolio!",
};

pub struct ProjectsDefaults {
    pub title: &'static str,
    pub link_title: &'static str,
}

pub const PROJECTS: ProjectsDefaults = ProjectsDefaults {
    title: "Latest Projects",
    link_title: "View Project",
};

pub struct ExperienceDefaults {
    pub title: &'static str,
}

pub const EXPERIENCE: ExperienceDefaults = ExperienceDefaults {
    title: "Professional Experience",
};

pub struct SkillsDefaults {
    pub title: &'static str,
}

pub const SKILLS: SkillsDefaults = SkillsDefaults {
    title: "Skills & Technologies",
};

pub struct GithubProjectsDefaults {
    pub title: &'static str,
}

pub const GITHUB_PROJECTS: GithubProjectsDefaults = GithubProjectsDefaults {
    title: "Projects on GitHub",
};

pub struct FooterDefaults {
    pub built_with_text: &'static str,
    pub tagline: &'static str,
}

pub const FOOTER: FooterDefaults = FooterDefaults {
    built_with_text: "Built with ❤️ using vanilla JavaScript",
    tagline: "Let's connect and build something amazing together!",
};
