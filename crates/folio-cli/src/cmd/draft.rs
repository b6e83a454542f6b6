use crate::input::read_answers;
use crate::output::print_json;
use anyhow::Context;
use chrono::Utc;
use clap::Subcommand;
use folio_core::completion::completion;
use folio_core::session::WizardSession;
use folio_core::step::Step;
use folio_core::{generate, FolioError};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Subcommand types
// ---------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum DraftSubcommand {
    /// Merge one step's answers into the draft and move to the next step
    Record {
        /// Step name (basic-info, social-links, about, experience, projects, skills, settings)
        step: String,
        /// Answers JSON file, or '-' for stdin
        #[arg(long, short = 'a')]
        answers: PathBuf,
    },

    /// Go back one step (answers are kept)
    Back,

    /// Show the current step, completion and draft age
    Show,

    /// Generate config.json from the draft and discard the draft
    Finish {
        /// Destination file (default: settings output, config.json)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
        /// Print the document to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
        /// Finish even if the last step has not been recorded
        #[arg(long)]
        force: bool,
    },

    /// Discard the saved draft
    Clear,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(root: &Path, subcmd: DraftSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        DraftSubcommand::Record { step, answers } => record(root, &step, &answers, json),
        DraftSubcommand::Back => back(root, json),
        DraftSubcommand::Show => show(root, json),
        DraftSubcommand::Finish {
            output,
            stdout,
            force,
        } => finish(root, output.as_deref(), stdout, force, json),
        DraftSubcommand::Clear => clear(root, json),
    }
}

fn resume(root: &Path) -> anyhow::Result<WizardSession> {
    let settings = super::load_settings(root)?;
    let session = WizardSession::resume(root, Utc::now(), settings.draft_ttl_hours)
        .context("failed to resume draft")?;
    Ok(session)
}

// ---------------------------------------------------------------------------
// record
// ---------------------------------------------------------------------------

fn record(root: &Path, step: &str, answers: &Path, json: bool) -> anyhow::Result<()> {
    let step: Step = step.parse()?;
    let settings = super::load_settings(root)?;
    let mut session = WizardSession::resume_or_new(root, Utc::now(), settings.draft_ttl_hours)
        .context("failed to load draft")?;
    let answers = read_answers(answers)?;

    for key in answers.keys() {
        if Step::owning(key) != Some(step) {
            tracing::warn!(key, step = %step, "answer key is not collected by this step");
        }
    }

    session.record(step, answers);
    session.save(root).context("failed to save draft")?;

    if json {
        return print_json(&status(&session));
    }

    println!("Recorded {step}.");
    if session.is_complete() {
        println!("All steps recorded. Run 'folio draft finish' to generate config.json.");
    } else {
        println!(
            "Next: {} ({}/{})",
            session.step,
            session.step.index() + 1,
            Step::all().len()
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// back
// ---------------------------------------------------------------------------

fn back(root: &Path, json: bool) -> anyhow::Result<()> {
    let mut session = resume(root)?;
    session.back();
    session.save(root).context("failed to save draft")?;

    if json {
        return print_json(&status(&session));
    }
    println!(
        "Now on {} ({}/{})",
        session.step,
        session.step.index() + 1,
        Step::all().len()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let session = match resume(root) {
        Ok(session) => session,
        Err(e) => match e.downcast_ref::<FolioError>() {
            Some(FolioError::DraftNotFound) | Some(FolioError::DraftExpired { .. }) => {
                if json {
                    return print_json(&serde_json::json!({ "draft": null }));
                }
                println!("No saved draft. {e:#}");
                return Ok(());
            }
            _ => return Err(e),
        },
    };

    if json {
        return print_json(&status(&session));
    }

    let age = session.age(Utc::now());
    println!(
        "Step:       {} - {} ({}/{})",
        session.step,
        session.step.title(),
        session.step.index() + 1,
        Step::all().len()
    );
    println!("Completion: {}%", completion(&session.answers));
    println!("Answers:    {} keys", session.answers.len());
    println!(
        "Saved:      {} ({}m ago)",
        session.saved_at.format("%Y-%m-%d %H:%M:%S UTC"),
        age.num_minutes()
    );
    if session.is_complete() {
        println!("Ready:      run 'folio draft finish'");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// finish
// ---------------------------------------------------------------------------

fn finish(
    root: &Path,
    output: Option<&Path>,
    to_stdout: bool,
    force: bool,
    json: bool,
) -> anyhow::Result<()> {
    let settings = super::load_settings(root)?;
    let session = resume(root)?;

    if !session.is_complete() && !force {
        anyhow::bail!(
            "draft is on step {} ({}/{}); record the remaining steps or pass --force",
            session.step,
            session.step.index() + 1,
            Step::all().len()
        );
    }

    let doc = generate(&session.answers);
    let path = super::output_path(root, &settings, output);
    super::emit_document(&doc, &path, to_stdout, json)?;

    WizardSession::clear(root).context("failed to remove draft")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

fn clear(root: &Path, json: bool) -> anyhow::Result<()> {
    let removed = WizardSession::clear(root).context("failed to remove draft")?;
    if json {
        return print_json(&serde_json::json!({ "removed": removed }));
    }
    if removed {
        println!("Draft discarded.");
    } else {
        println!("No saved draft.");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// helpers
// ---------------------------------------------------------------------------

fn status(session: &WizardSession) -> serde_json::Value {
    serde_json::json!({
        "step": session.step,
        "position": session.step.index() + 1,
        "total": Step::all().len(),
        "recorded": session.recorded,
        "complete": session.is_complete(),
        "completion": completion(&session.answers),
        "saved_at": session.saved_at,
    })
}
