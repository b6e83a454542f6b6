use crate::output::{print_json, print_table};
use folio_core::step::{SocialIcon, Step};

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        let steps: Vec<serde_json::Value> = Step::all()
            .iter()
            .map(|s| {
                serde_json::json!({
                    "index": s.index() + 1,
                    "step": s,
                    "title": s.title(),
                    "fields": s.fields(),
                })
            })
            .collect();
        let icons: Vec<&str> = SocialIcon::all().iter().map(|i| i.as_str()).collect();
        return print_json(&serde_json::json!({ "steps": steps, "icons": icons }));
    }

    let rows = Step::all()
        .iter()
        .map(|s| {
            vec![
                (s.index() + 1).to_string(),
                s.as_str().to_string(),
                s.title().to_string(),
                s.fields().join(", "),
            ]
        })
        .collect();
    print_table(&["#", "STEP", "TITLE", "FIELDS"], rows);

    let icons: Vec<&str> = SocialIcon::all().iter().map(|i| i.as_str()).collect();
    println!();
    println!("Social icons: {}", icons.join(", "));
    Ok(())
}
