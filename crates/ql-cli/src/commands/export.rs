use std::path::Path;

use ql_core::{Library, Step};

pub fn run(format: &str, output: Option<&Path>) -> Result<(), String> {
    let library = super::load_library();

    let content = match format {
        "json" => export_json(&library)?,
        "markdown" | "md" => export_markdown(&library),
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: json, markdown"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}

fn export_json(library: &Library) -> Result<String, String> {
    let steps: Vec<_> = Step::ALL
        .iter()
        .map(|step| {
            serde_json::json!({
                "number": step.number(),
                "name": step.to_string(),
                "action": step.action_label(),
            })
        })
        .collect();

    let export = serde_json::json!({
        "library": {
            "name": library.meta.name,
            "tagline": library.meta.tagline,
        },
        "quests": library.quests(),
        "steps": steps,
    });

    serde_json::to_string_pretty(&export).map_err(|e| format!("JSON serialization error: {e}"))
}

fn export_markdown(library: &Library) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", library.meta.name));
    out.push_str(&format!("{}\n\n", library.meta.tagline));
    out.push_str("---\n\n");

    for quest in library.quests() {
        out.push_str(&format!("## {}\n\n", quest.title));
        out.push_str(&format!("- **subject:** {}\n", quest.subject));
        out.push_str(&format!("- **duration:** {}\n\n", quest.duration));

        for step in Step::ALL {
            out.push_str(&format!("### {}\n\n", step.label()));
            out.push_str(&format!("{}\n\n", step.prompt(quest)));
        }
    }

    out
}
