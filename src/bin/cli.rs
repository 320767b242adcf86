//! cellset CLI
//!
//! Build character sets from text files and query them.

use std::path::PathBuf;
use std::process::ExitCode;

use cellset::search::Lookup;
use cellset::{batch, snapshot, CellError, CharSet, Config};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

/// cellset CLI
#[derive(Parser, Debug)]
#[command(name = "cellset-cli")]
#[command(about = "Blank-insensitive membership queries over character sets")]
#[command(version)]
struct Args {
    /// Worker threads for large query batches
    #[arg(short, long, default_value = "4")]
    workers: usize,

    #[command(subcommand)]
    command: Commands,
}

/// Where to load the set from
#[derive(ClapArgs, Debug)]
struct SetSource {
    /// Text file, one element per line ('#' starts a comment, '\#' a literal '#')
    #[arg(short, long, conflicts_with = "snapshot")]
    text: Option<PathBuf>,

    /// Snapshot written by `validate`
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Element stride for text sources [default: 80]
    #[arg(long)]
    stride: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report whether each item is an element of the set
    Contains {
        #[command(flatten)]
        source: SetSource,

        /// Items to test
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Print the index of each item, or "-" when absent
    Locate {
        #[command(flatten)]
        source: SetSource,

        /// Items to locate
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Sort and deduplicate a text file into a snapshot
    Validate {
        /// Text file, one element per line ('#' starts a comment, '\#' a literal '#')
        input: PathBuf,

        /// Snapshot output path
        output: PathBuf,

        /// Element stride [default: 80]
        #[arg(long)]
        stride: Option<usize>,
    },

    /// Print the elements of a set in order
    List {
        #[command(flatten)]
        source: SetSource,
    },
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cellset=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::builder().workers(args.workers).build();

    match run(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: &Config) -> cellset::Result<()> {
    match command {
        Commands::Contains { source, items } => {
            let set = load(&source, config)?;
            let found = batch::contains_all(&set, &items, config)?;
            for (item, found) in items.iter().zip(found) {
                println!("{}\t{}", item, found);
            }
        }
        Commands::Locate { source, items } => {
            let set = load(&source, config)?;
            let lookups = batch::locate_all(&set, &items, config)?;
            for (item, lookup) in items.iter().zip(lookups) {
                match lookup {
                    Lookup::Found(index) => println!("{}\t{}", item, index),
                    Lookup::NotFound => println!("{}\t-", item),
                }
            }
        }
        Commands::Validate {
            input,
            output,
            stride,
        } => {
            let set = snapshot::load_text(&input, stride, config)?;
            snapshot::write(&output, &set)?;
            tracing::info!(
                "Wrote {} elements to {}",
                set.card(),
                output.display()
            );
        }
        Commands::List { source } => {
            let set = load(&source, config)?;
            for element in set.iter() {
                println!("{}", String::from_utf8_lossy(element));
            }
        }
    }
    Ok(())
}

fn load(source: &SetSource, config: &Config) -> cellset::Result<CharSet> {
    match (&source.text, &source.snapshot) {
        (Some(path), _) => snapshot::load_text(path, source.stride, config),
        (None, Some(path)) => snapshot::read_with(path, config),
        (None, None) => Err(CellError::Config(
            "either --text or --snapshot is required".to_string(),
        )),
    }
}
