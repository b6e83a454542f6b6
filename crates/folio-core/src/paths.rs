use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const FOLIO_DIR: &str = ".folio";
pub const DRAFT_FILE: &str = ".folio/draft.json";
pub const SETTINGS_FILE: &str = ".folio/settings.yaml";

pub const DEFAULT_OUTPUT: &str = "config.json";

pub const LOGOS_DIR: &str = "assets/logos";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn folio_dir(root: &Path) -> PathBuf {
    root.join(FOLIO_DIR)
}

pub fn draft_path(root: &Path) -> PathBuf {
    root.join(DRAFT_FILE)
}

pub fn settings_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_FILE)
}

// ---------------------------------------------------------------------------
// Company logo paths
// ---------------------------------------------------------------------------

static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();

fn whitespace_re() -> &'static Regex {
    WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Company name as used in logo file names: each whitespace run becomes `_`.
pub fn logo_stem(company: &str) -> String {
    whitespace_re().replace_all(company, "_").into_owned()
}

pub fn logo_path(company: &str) -> String {
    format!("{LOGOS_DIR}/{}_Logo.png", logo_stem(company))
}

pub fn logo_dark_path(company: &str) -> String {
    format!("{LOGOS_DIR}/{}_Logo_White.png", logo_stem(company))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
