//! CLI frontend for the QuestLab guided-experiment library.

mod commands;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ql",
    about = "QuestLab — guided science experiment quests in your terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the quests in the library
    List {
        /// Filter by subject (e.g. chemistry, physics, biology)
        subject: Option<String>,
    },

    /// Show a quest and its three steps
    Show {
        /// Quest id or title (case-insensitive)
        quest: String,
    },

    /// Export the library to a different format
    Export {
        /// Output format: json, markdown
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Launch the interactive quest library
    Tui {
        /// Start directly inside this quest (id or title)
        #[arg(short, long)]
        quest: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { subject } => commands::list::run(subject.as_deref()),
        Commands::Show { quest } => commands::show::run(&quest),
        Commands::Export { format, output } => commands::export::run(&format, output.as_deref()),
        Commands::Tui { quest } => tui::run(quest.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
