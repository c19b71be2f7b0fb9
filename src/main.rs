use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show metadata tags of an audio file
    Show {
        /// Path to the audio file
        file_path: String,
    },
    /// Rename an audio file after its metadata tags
    Rename {
        /// Path to the audio file
        file_path: String,
        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Show { file_path } => commands::show::show_metadata(&file_path),
        Commands::Rename {
            file_path,
            dry_run,
        } => commands::rename::rename_from_metadata(&file_path, dry_run),
    }
}
