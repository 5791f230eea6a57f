//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::config::FetchOptions;
use crate::error::Result;
use crate::fetch::{FetchStatus, Record};
use crate::retrieval::Source;
use crate::types::{Bill, LegislativeTerm, Senator};

/// Congresso Senado - Fetch Brazilian Senate open-data records.
#[derive(Parser)]
#[command(name = "congresso-senado")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a senator's history by parliamentarian code.
    Senador {
        /// Parliamentarian code (e.g., 4981)
        code: u32,

        #[command(flatten)]
        fetch: FetchArgs,
    },
    /// Fetch a bill (matéria) by code.
    Materia {
        /// Bill code
        code: u32,

        #[command(flatten)]
        fetch: FetchArgs,
    },
    /// Fetch the senators of a legislature.
    Legislatura {
        /// Legislature number, starting at 1 (1826-1829)
        number: u32,

        #[command(flatten)]
        fetch: FetchArgs,
    },
}

/// Options shared by every fetch command.
#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Where to read the document from
    #[arg(short, long, value_enum, default_value_t = Source::Either)]
    pub source: Source,

    /// Cache directory for this record kind (default: data/<kind>)
    #[arg(long)]
    pub base_local: Option<PathBuf>,

    /// Save remotely fetched documents to the cache (never overwrites)
    #[arg(short, long)]
    pub write: bool,

    /// Root URL of the open-data service
    #[arg(long)]
    pub api_url: Option<String>,
}

impl FetchArgs {
    /// Fetch options from the flags, on top of the environment defaults.
    #[must_use]
    pub fn options(&self) -> FetchOptions {
        let mut options = FetchOptions::from_env().with_write(self.write);
        if let Some(base_local) = &self.base_local {
            options = options.with_base_local(base_local);
        }
        if let Some(api_url) = &self.api_url {
            options = options.with_base_url(api_url);
        }
        options
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Senador { code, fetch } => {
            let mut senator = Senator::with_options(code, fetch.options());
            fetch_command(&mut senator, fetch.source)
        }
        Commands::Materia { code, fetch } => {
            let mut bill = Bill::with_options(code, fetch.options());
            fetch_command(&mut bill, fetch.source)
        }
        Commands::Legislatura { number, fetch } => {
            let mut term = LegislativeTerm::with_options(number, fetch.options())?;
            fetch_command(&mut term, fetch.source)
        }
    }
}

/// Fetch one record and print it as YAML on stdout.
fn fetch_command<R: Record + Serialize>(record: &mut R, source: Source) -> Result<()> {
    eprintln!(
        "{} {} {}",
        style("Fetching").bold(),
        R::KIND,
        style(record.key()).cyan()
    );

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Retrieving {}", record.endpoint()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let status = record.get_info(source);
    pb.finish_and_clear();

    match status? {
        FetchStatus::Fetched => {}
        FetchStatus::NotSaved { path, reason } => eprintln!(
            "{} {} ({reason})",
            style("Not saved:").yellow().bold(),
            path.display()
        ),
    }

    let yaml = serde_yaml_ng::to_string(&*record)?;
    println!("---\n{}", yaml.trim_end());
    Ok(())
}
