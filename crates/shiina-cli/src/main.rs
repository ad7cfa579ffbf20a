//! `shiina` CLI — parse, render and query shiina documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Render a document in the minimal text form (stdin → stdout)
//! echo '{"hoge": 3.141592}' | shiina render
//!
//! # Convert a file to pretty-printed JSON, writing to a file
//! shiina json -i data.txt -o data.json
//!
//! # Print the value at a key path
//! shiina get -i data.txt items name
//!
//! # Show debug logs on stderr (RUST_LOG is honoured too)
//! shiina -v render -i data.txt
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shiina_core::Value;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shiina", version, about = "Parse and render shiina documents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log parser activity to stderr at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and print its minimal text rendering
    Render {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Parse a document and print it as JSON
    Json {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Print the value found by following object keys
    Get {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Keys to follow, outermost first
        #[arg(required = true)]
        keys: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render { input, output } => {
            let value = read_value(input.as_deref())?;
            write_output(output.as_deref(), &format!("{value}\n"))?;
        }
        Commands::Json {
            input,
            output,
            compact,
        } => {
            let value = read_value(input.as_deref())?;
            let json = if compact {
                serde_json::to_string(&value)?
            } else {
                serde_json::to_string_pretty(&value)?
            };
            write_output(output.as_deref(), &format!("{json}\n"))?;
        }
        Commands::Get { input, keys } => {
            let value = read_value(input.as_deref())?;
            let found = value
                .pointer(keys.as_slice())
                .with_context(|| format!("Failed to look up path: {}", keys.join(".")))?;
            println!("{found}");
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose` when set.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parse the document from a file, or from stdin when no path is given.
fn read_value(path: Option<&str>) -> Result<Value> {
    match path {
        Some(path) => {
            shiina_core::load(path).with_context(|| format!("Failed to load file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            shiina_core::parse(&buf).context("Failed to parse input")
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
