use colored::Colorize;
use ql_core::Step;

pub fn run(quest: &str) -> Result<(), String> {
    let library = super::load_library();

    let quest = library.resolve(quest).map_err(|e| e.to_string())?;

    // Header
    println!(
        "  {} [{}]",
        quest.title.bold(),
        quest.subject.to_string().dimmed()
    );
    println!();

    println!("  id:       {}", quest.id);
    println!("  duration: {}", quest.duration);

    // The three steps every quest walks
    println!();
    println!("  {}", "Steps:".dimmed());
    for step in Step::ALL {
        println!("    {}", step.label().bold());
        println!("      {}", step.prompt(quest));
    }

    Ok(())
}
