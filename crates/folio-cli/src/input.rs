use anyhow::Context;
use folio_core::WizardAnswers;
use std::io::Read;
use std::path::Path;

/// Read an answer set from a file, or from stdin when `source` is `-`.
pub fn read_answers(source: &Path) -> anyhow::Result<WizardAnswers> {
    let data = if source == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read answers from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("failed to read {}", source.display()))?
    };

    let answers = WizardAnswers::from_json_str(&data)
        .with_context(|| format!("failed to parse answers from {}", source.display()))?;
    tracing::debug!(keys = answers.len(), "read answers");
    Ok(answers)
}
