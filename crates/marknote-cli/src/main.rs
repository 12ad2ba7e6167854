//! marknote CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod console;

#[derive(Parser)]
#[command(name = "marknote", version, about = "Test result message generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tests in the catalog
    Catalog {
        /// Path to the catalog dataset (.json or .toml)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Only show tests whose title or topic contains this text
        #[arg(long)]
        search: Option<String>,

        /// Only show tests in this topic
        #[arg(long)]
        topic: Option<String>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a catalog dataset for problems
    Validate {
        /// Path to the catalog dataset (.json or .toml)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Select tests, enter marks, and print the message
    Compose {
        /// Path to the catalog dataset (.json or .toml)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Obtained marks as "Title=8" (repeatable, selection order)
        #[arg(long = "mark", value_name = "TITLE=MARKS")]
        marks: Vec<String>,

        /// Total marks for tests missing from the catalog, as "Title=20"
        #[arg(long = "total", value_name = "TITLE=TOTAL")]
        totals: Vec<String>,

        /// Output format: text, lines, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Also copy the message into this file
        #[arg(long)]
        copy_to: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Interactive session reading commands from stdin
    Session {
        /// Path to the catalog dataset (.json or .toml)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example catalog
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marknote_core=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Catalog {
            catalog,
            search,
            topic,
            format,
            config,
        } => commands::catalog::execute(catalog, search, topic, format, config),
        Commands::Validate { catalog, config } => commands::validate::execute(catalog, config),
        Commands::Compose {
            catalog,
            marks,
            totals,
            format,
            copy_to,
            config,
        } => commands::compose::execute(catalog, marks, totals, format, copy_to, config),
        Commands::Session { catalog, config } => commands::session::execute(catalog, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
