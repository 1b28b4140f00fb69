mod commands;
mod terminal;
mod values;

use anyhow::Result;
use clap::{Parser, Subcommand};
use contact_form::ContactFormConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contact-form")]
#[command(version, about = "Contact form validation and submission", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a file of field values and print every error
    Check {
        /// TOML or JSON file mapping field ids to values
        file: PathBuf,
    },

    /// Apply a live input filter to text
    Filter {
        /// Filter to apply
        #[arg(short, long, default_value = "alpha")]
        mode: FilterArg,

        /// Text to filter
        text: String,
    },

    /// Look up the dial code for a country
    #[command(name = "dial-code")]
    DialCode {
        /// Two-letter country code, e.g. IN
        country: String,
    },

    /// Print a fresh arithmetic challenge
    Challenge {
        /// Seed for a reproducible question
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Validate a file of field values and submit it to the endpoint
    Submit {
        /// TOML or JSON file mapping field ids to values
        file: PathBuf,

        /// Print the payload instead of sending it
        #[arg(long)]
        dry_run: bool,

        /// Config file (defaults to ./contact-form.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum FilterArg {
    /// Letters and spaces only
    Alpha,
    /// Digits with at most one hyphen, capped at 15 digits
    Phone,
}

fn load_config(path: Option<&PathBuf>) -> Result<ContactFormConfig> {
    let config = match path {
        Some(path) => ContactFormConfig::load(path)?,
        None => ContactFormConfig::load_default()?,
    };
    Ok(config.with_env_overrides())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file } => {
            let errors = commands::check::execute(&file)?;
            if errors > 0 {
                std::process::exit(1);
            }
        }
        Commands::Filter { mode, text } => {
            commands::filter::execute(mode, &text);
        }
        Commands::DialCode { country } => {
            commands::dial_code::execute(&country)?;
        }
        Commands::Challenge { seed } => {
            commands::challenge::execute(seed);
        }
        Commands::Submit {
            file,
            dry_run,
            config,
        } => {
            let config = load_config(config.as_ref())?;
            commands::submit::execute(&file, &config, dry_run).await?;
        }
    }

    Ok(())
}
