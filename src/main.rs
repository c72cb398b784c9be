mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "memoir")]
#[command(about = "Record and browse the events in your memory journal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new event
    Add {
        title: Option<String>,

        /// Date of the memory (e.g. "2024-05-01" or "last saturday")
        #[arg(short, long)]
        date: Option<String>,

        /// Optional description
        #[arg(long)]
        description: Option<String>,

        /// Photo to attach (repeat up to 3 times)
        #[arg(short, long = "photo")]
        photos: Vec<PathBuf>,
    },
    /// List all events, most recent first
    List,
    /// Show a single event in detail
    Show {
        id: String,
    },
    /// Delete an event
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Open an event's photos in the system image viewer
    View {
        id: String,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mut store = memoir_core::journal::open_default_store()?;
    tracing::debug!("journal opened with {} events", store.len());

    match cli.command {
        Commands::Add {
            title,
            date,
            description,
            photos,
        } => commands::add::run(&mut store, title, date, description, photos),
        Commands::List => commands::list::run(&store),
        Commands::Show { id } => commands::show::run(&store, &id),
        Commands::Delete { id, yes } => commands::delete::run(&mut store, &id, yes),
        Commands::View { id } => commands::view::run(&store, &id),
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
