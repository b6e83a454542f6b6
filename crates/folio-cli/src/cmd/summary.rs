use crate::output::{print_json, print_table};
use anyhow::Context;
use folio_core::{summarize, ConfigDocument};
use std::path::Path;

pub fn run(root: &Path, config: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let settings = super::load_settings(root)?;
    let path = super::output_path(root, &settings, config);
    let doc = ConfigDocument::load(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    let summary = summarize(&doc);

    if json {
        return print_json(&summary);
    }

    let rows = vec![
        vec!["sections enabled".to_string(), summary.sections_enabled.to_string()],
        vec!["social links".to_string(), summary.social_links.to_string()],
        vec!["projects".to_string(), summary.projects.to_string()],
        vec!["experience".to_string(), summary.experience.to_string()],
        vec!["skill categories".to_string(), summary.skill_categories.to_string()],
        vec!["about paragraphs".to_string(), summary.about_paragraphs.to_string()],
    ];
    print_table(&["SECTION", "COUNT"], rows);
    Ok(())
}
