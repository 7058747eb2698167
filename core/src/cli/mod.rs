pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "specsketch")]
#[command(author, version, about = "Generate a technical spec from a product idea", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a spec for a product description
    Generate {
        /// Product description, e.g. "task tracker app"
        prompt: String,

        /// Model to use (defaults to SPECSKETCH_MODEL or gpt-4o)
        #[arg(short, long)]
        model: Option<String>,
    },

    /// Print the composed prompt without calling the API
    Preview {
        /// Product description
        prompt: String,
    },
}

/// Parse arguments and dispatch to the matching command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { prompt, model } => {
            commands::generate::run(&prompt, model.as_deref(), cli.format).await
        }
        Commands::Preview { prompt } => {
            commands::preview::run(&prompt);
            Ok(())
        }
    }
}
