use comfy_table::{ContentArrangement, Table};
use ql_core::Subject;

pub fn run(subject: Option<&str>) -> Result<(), String> {
    let library = super::load_library();

    let mut query = library.query();

    if let Some(subject_str) = subject {
        query = query.subject(Subject::parse(subject_str));
    }

    let results = query.execute();

    if results.is_empty() {
        println!("  No quests found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Subject", "Title", "Duration"]);

    for quest in &results {
        let subject = quest.subject.to_string();
        table.add_row(vec![
            quest.id.as_str(),
            subject.as_str(),
            quest.title.as_str(),
            quest.duration.as_str(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} quests", results.len());

    Ok(())
}
