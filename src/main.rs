//! # Reinterpret CLI
//!
//! Command-line front end for the code page decoders.
//!
//! ## Usage
//!
//! ```bash
//! # List available code pages
//! reinterpret list
//!
//! # Show a DOS file as it looked in IBM437
//! reinterpret decode --as ibm437 MENU.TXT
//!
//! # Read EBCDIC from stdin, write UTF-8 to a file
//! reinterpret decode --as cp280 -o out.txt < dump.bin
//!
//! # Convert UTF-8 text to IBM865 bytes
//! reinterpret encode --to ibm865 notes.txt -o NOTES.TXT
//!
//! # Print the 16x16 table of a code page
//! reinterpret table ibm857
//! ```

use clap::{Parser, Subcommand};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use reinterpret::{
    Registry, ReinterpretError,
    actions::{InterpretAction, MemoryBuffer},
    codepage::format_grid,
    config::{Config, parse_log_level},
    encode,
};

/// Reinterpret - decode bytes under legacy code pages
#[derive(Parser, Debug)]
#[command(name = "reinterpret")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available code pages
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Decode raw bytes to UTF-8 text
    Decode {
        /// Code page to interpret the bytes as (defaults to config)
        #[arg(long = "as", value_name = "PAGE")]
        code_page: Option<String>,

        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Encode UTF-8 text into a single-byte code page
    Encode {
        /// Target code page (defaults to config)
        #[arg(long = "to", value_name = "PAGE")]
        code_page: Option<String>,

        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print a code page as a 16x16 grid
    Table {
        /// Code page name
        code_page: String,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ReinterpretError> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let level = parse_log_level(cli.log_level.as_deref().unwrap_or(&config.log_level))?;
    env_logger::Builder::new().filter_level(level).init();

    let registry = Registry::new();

    match cli.command {
        Commands::List { json } => {
            let info = registry.info();
            if json {
                let text = serde_json::to_string_pretty(&info)
                    .map_err(|e| ReinterpretError::Io(e.into()))?;
                println!("{}", text);
            } else {
                println!("Available code pages:");
                for page in info {
                    let kind = if page.contextual { ", contextual" } else { "" };
                    println!(
                        "  {:<8} {:<20} ({} bytes defined{})",
                        page.name, page.description, page.defined, kind
                    );
                }
            }
        }

        Commands::Decode {
            code_page,
            input,
            output,
        } => {
            let name = code_page.as_deref().unwrap_or(&config.default_code_page);
            let action = InterpretAction::new(registry.get(name)?);
            decode_file(&action, input.as_deref(), output.as_deref())?;
        }

        Commands::Encode {
            code_page,
            input,
            output,
        } => {
            let name = code_page.as_deref().unwrap_or(&config.default_code_page);
            let table = registry.table(name)?;
            let raw = read_input(input.as_deref())?;
            let encoded = encode::encode_utf8(table, &raw)?;
            if !encoded.is_lossless() {
                eprintln!(
                    "{} character(s) not representable in {}, replaced with '?'",
                    encoded.unmapped.len(),
                    table.name()
                );
            }
            write_output(output.as_deref(), &encoded.bytes)?;
        }

        Commands::Table { code_page } => {
            print!("{}", format_grid(registry.get(&code_page)?));
        }
    }

    Ok(())
}

/// Run an "Interpret As" action over a file (or stdin) and write the text.
fn decode_file(
    action: &InterpretAction<'_>,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), ReinterpretError> {
    let mut buffer = MemoryBuffer::new(read_input(input)?);
    action.run(&mut buffer);
    let text = buffer.into_text().unwrap_or_default();
    write_output(output, text.as_bytes())
}

/// Read all bytes from a file, or stdin when no path is given
fn read_input(path: Option<&Path>) -> Result<Vec<u8>, ReinterpretError> {
    match path {
        Some(path) => Ok(std::fs::read(path)?),
        None => {
            let mut data = Vec::new();
            std::io::stdin().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

/// Write bytes to a file, or stdout when no path is given
fn write_output(path: Option<&Path>, data: &[u8]) -> Result<(), ReinterpretError> {
    match path {
        Some(path) => std::fs::write(path, data)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
