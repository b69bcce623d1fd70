use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod block;
mod cli;
mod config;
mod naming;
mod notebook;
mod report;
mod structure;

#[derive(Parser)]
#[command(name = "nbreview", version)]
#[command(about = "Review exported notebook files against the task template", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Review a notebook: prompt structure and function naming
    Review {
        /// Path to the .ipynb file
        path: String,

        /// Print the report as JSON instead of human-readable text
        #[arg(long)]
        json: bool,

        /// Path to config file (defaults to ./nbreview.toml or ~/.config/nbreview/config.toml)
        #[arg(long)]
        config: Option<String>,

        /// Skip the snake_case naming pass
        #[arg(long)]
        no_naming: bool,
    },

    /// Print the classified block type of every cell
    Blocks {
        /// Path to the .ipynb file
        path: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Review {
            path,
            json,
            config,
            no_naming,
        } => {
            cli::review::run(&path, json, config, no_naming)?;
        }
        Commands::Blocks { path } => {
            cli::blocks::run(&path)?;
        }
    }

    Ok(())
}
