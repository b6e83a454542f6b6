use crate::input::read_answers;
use crate::output::print_json;
use folio_core::completion::completion;
use folio_core::diagnostics::{diagnose, WarnLevel};
use std::path::Path;

pub fn run(answers: &Path, json: bool) -> anyhow::Result<()> {
    let answers = read_answers(answers)?;
    let warnings = diagnose(&answers);
    let percent = completion(&answers);

    if json {
        let value = serde_json::json!({
            "completion": percent,
            "warnings": warnings,
        });
        return print_json(&value);
    }

    println!("Completion: {percent}%");
    if warnings.is_empty() {
        println!("No problems found.");
        return Ok(());
    }
    for w in &warnings {
        let prefix = match w.level {
            WarnLevel::Dropped => "dropped",
            WarnLevel::Warning => "warning",
        };
        println!("[{prefix}] {}", w.message);
    }
    Ok(())
}
