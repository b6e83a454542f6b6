use crate::input::read_answers;
use folio_core::generate;
use std::path::Path;

pub fn run(
    root: &Path,
    answers: &Path,
    output: Option<&Path>,
    to_stdout: bool,
    json: bool,
) -> anyhow::Result<()> {
    let settings = super::load_settings(root)?;
    let answers = read_answers(answers)?;
    let doc = generate(&answers);
    let path = super::output_path(root, &settings, output);
    super::emit_document(&doc, &path, to_stdout, json)
}
