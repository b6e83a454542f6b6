use crate::answers::WizardAnswers;
use crate::error::{FolioError, Result};
use crate::paths;
use crate::step::Step;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// WizardSession
// ---------------------------------------------------------------------------

/// One in-progress run of the wizard: the accumulated answers, the step the
/// user is on, and when the draft was last saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardSession {
    pub answers: WizardAnswers,
    pub step: Step,
    #[serde(default)]
    pub recorded: Vec<Step>,
    pub saved_at: DateTime<Utc>,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    pub fn new() -> Self {
        Self {
            answers: WizardAnswers::new(),
            step: Step::first(),
            recorded: Vec::new(),
            saved_at: Utc::now(),
        }
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// Merge one step's answers and move the cursor past it. On the last
    /// step the cursor stays put.
    pub fn record(&mut self, step: Step, answers: WizardAnswers) {
        tracing::debug!(step = %step, keys = answers.len(), "recording step");
        self.answers.merge(answers);
        if !self.recorded.contains(&step) {
            self.recorded.push(step);
        }
        self.step = step.next().unwrap_or(step);
    }

    /// Step back one screen. Answers are kept.
    pub fn back(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.step == Step::last() && self.recorded.contains(&Step::last())
    }

    // -----------------------------------------------------------------------
    // Expiry
    // -----------------------------------------------------------------------

    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.saved_at)
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl_hours: u32) -> bool {
        self.age(now) >= Duration::hours(i64::from(ttl_hours))
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Stamp `saved_at` and write the draft atomically.
    pub fn save(&mut self, root: &Path) -> Result<()> {
        self.saved_at = Utc::now();
        let path = paths::draft_path(root);
        let data = serde_json::to_string_pretty(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::draft_path(root);
        if !path.exists() {
            return Err(FolioError::DraftNotFound);
        }
        let data = std::fs::read_to_string(&path)?;
        let session: WizardSession = serde_json::from_str(&data)?;
        Ok(session)
    }

    /// Load the draft, discarding it if it is older than `ttl_hours`.
    pub fn resume(root: &Path, now: DateTime<Utc>, ttl_hours: u32) -> Result<Self> {
        let session = Self::load(root)?;
        if session.is_expired(now, ttl_hours) {
            let age_hours = session.age(now).num_hours();
            tracing::warn!(age_hours, "discarding expired draft");
            Self::clear(root)?;
            return Err(FolioError::DraftExpired { age_hours });
        }
        Ok(session)
    }

    /// Load the draft if one exists and is fresh, otherwise start a new one.
    pub fn resume_or_new(root: &Path, now: DateTime<Utc>, ttl_hours: u32) -> Result<Self> {
        match Self::resume(root, now, ttl_hours) {
            Ok(session) => Ok(session),
            Err(FolioError::DraftNotFound | FolioError::DraftExpired { .. }) => Ok(Self::new()),
            Err(e) => Err(e),
        }
    }

    /// Remove the saved draft. Returns false if there was none.
    pub fn clear(root: &Path) -> Result<bool> {
        crate::io::remove_if_exists(&paths::draft_path(root))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn answers(value: serde_json::Value) -> WizardAnswers {
        WizardAnswers::from_value(value).unwrap()
    }

    #[test]
    fn record_merges_and_advances() {
        let mut session = WizardSession::new();
        session.record(Step::BasicInfo, answers(json!({"name": "Ada"})));
        assert_eq!(session.step, Step::SocialLinks);
        session.record(Step::BasicInfo, answers(json!({"name": "Ada L.", "tagline": "Eng"})));
        assert_eq!(session.answers.get("name"), Some(&json!("Ada L.")));
        assert_eq!(session.answers.len(), 2);
        assert_eq!(session.recorded, vec![Step::BasicInfo]);
    }

    #[test]
    fn last_step_completes_session() {
        let mut session = WizardSession::new();
        for step in Step::all() {
            assert!(!session.is_complete());
            session.record(*step, WizardAnswers::new());
        }
        assert_eq!(session.step, Step::Settings);
        assert!(session.is_complete());
    }

    #[test]
    fn back_stops_at_first_step() {
        let mut session = WizardSession::new();
        session.record(Step::BasicInfo, WizardAnswers::new());
        session.back();
        assert_eq!(session.step, Step::BasicInfo);
        session.back();
        assert_eq!(session.step, Step::BasicInfo);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut session = WizardSession::new();
        session.record(Step::BasicInfo, answers(json!({"githubUsername": "ada"})));
        session.save(dir.path()).unwrap();

        let loaded = WizardSession::load(dir.path()).unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn load_missing_draft() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            WizardSession::load(dir.path()),
            Err(FolioError::DraftNotFound)
        ));
    }

    #[test]
    fn resume_discards_expired_draft() {
        let dir = TempDir::new().unwrap();
        let mut session = WizardSession::new();
        session.save(dir.path()).unwrap();

        let later = session.saved_at + Duration::hours(25);
        let err = WizardSession::resume(dir.path(), later, 24).unwrap_err();
        assert!(matches!(err, FolioError::DraftExpired { age_hours: 25 }));
        assert!(!paths::draft_path(dir.path()).exists());
    }

    #[test]
    fn resume_keeps_fresh_draft() {
        let dir = TempDir::new().unwrap();
        let mut session = WizardSession::new();
        session.record(Step::BasicInfo, answers(json!({"name": "Ada"})));
        session.save(dir.path()).unwrap();

        let soon = session.saved_at + Duration::hours(1);
        let resumed = WizardSession::resume(dir.path(), soon, 24).unwrap();
        assert_eq!(resumed.answers.get("name"), Some(&json!("Ada")));
    }

    #[test]
    fn resume_or_new_starts_fresh_without_draft() {
        let dir = TempDir::new().unwrap();
        let session = WizardSession::resume_or_new(dir.path(), Utc::now(), 24).unwrap();
        assert!(session.answers.is_empty());
        assert_eq!(session.step, Step::BasicInfo);
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = TempDir::new().unwrap();
        WizardSession::new().save(dir.path()).unwrap();
        assert!(WizardSession::clear(dir.path()).unwrap());
        assert!(!WizardSession::clear(dir.path()).unwrap());
    }
}
