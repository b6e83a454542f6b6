pub mod check;
pub mod draft;
pub mod generate;
pub mod steps;
pub mod summary;

use crate::output::print_json;
use anyhow::Context;
use folio_core::settings::Settings;
use folio_core::{summarize, ConfigDocument, Summary};
use std::path::{Path, PathBuf};

/// Where the document goes: an explicit path (relative to the root), else the
/// settings' output name under the root.
pub fn output_path(root: &Path, settings: &Settings, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(p) => root.join(p),
        None => root.join(settings.output_name()),
    }
}

pub fn load_settings(root: &Path) -> anyhow::Result<Settings> {
    let settings = Settings::load(root).context("failed to load .folio/settings.yaml")?;
    for w in settings.validate() {
        tracing::warn!("{}", w.message);
    }
    Ok(settings)
}

/// Write `doc` (or print it when `to_stdout`) and report what was produced.
pub fn emit_document(
    doc: &ConfigDocument,
    path: &Path,
    to_stdout: bool,
    json: bool,
) -> anyhow::Result<()> {
    if to_stdout {
        print!("{}", doc.to_pretty_json()?);
        return Ok(());
    }

    doc.save(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    let summary = summarize(doc);

    if json {
        let value = serde_json::json!({
            "path": path.display().to_string(),
            "summary": summary,
        });
        print_json(&value)?;
    } else {
        println!("Wrote {}", path.display());
        println!("{}", describe(&summary));
    }
    Ok(())
}

pub fn describe(summary: &Summary) -> String {
    format!(
        "Configuration has {} sections enabled, {} projects, and {} work experiences.",
        summary.sections_enabled, summary.projects, summary.experience
    )
}
