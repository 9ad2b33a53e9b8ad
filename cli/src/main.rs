//! RecordCodec CLI — decode fixed-length mainframe dumps from the command line.
//!
//! # Commands
//! ```text
//! recordcodec decode          --layout <file> --input <file> [--format csv|tsv|xml|json]
//! recordcodec layout validate --dir <dir>
//! recordcodec layout show     --file <file>
//! recordcodec info
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use recordcodec_observability::{init_tracing, LogConfig};
use std::path::PathBuf;

mod cmd_decode;
mod cmd_layout;

#[derive(Parser)]
#[command(
    name = "recordcodec",
    about = "Fixed-length mainframe record decoder — RecordCodec CLI",
    long_about = "
RecordCodec CLI: decode EBCDIC (CP037) record dumps into CSV, TSV, XML or JSON
using a YAML or JSON layout description.

ENVIRONMENT VARIABLES:
  RUST_LOG    Overrides the log filter (e.g. recordcodec_batch=debug)
",
    version
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a binary dump with a layout and print the records
    Decode {
        /// Layout description file (.yaml, .yml or .json)
        #[arg(short, long)]
        layout: PathBuf,
        /// Layout to use when the file describes several
        #[arg(long)]
        name: Option<String>,
        /// Binary input file
        #[arg(short, long)]
        input: PathBuf,
        /// Output format: csv, tsv, xml or json
        #[arg(short, long, default_value = "csv")]
        format: String,
        /// Omit the header line of field names (csv/tsv)
        #[arg(long)]
        no_header: bool,
        /// Do not wrap values in double quotes (csv/tsv)
        #[arg(long)]
        no_quotes: bool,
        /// Attach each field's source bytes as hex (xml)
        #[arg(long)]
        src_hex: bool,
        /// Decode records across all CPU cores
        #[arg(long)]
        parallel: bool,
        /// Records per chunk between progress reports
        #[arg(long, default_value_t = recordcodec_batch::DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Layout description management
    Layout {
        #[command(subcommand)]
        action: LayoutAction,
    },

    /// Show RecordCodec build and capability info
    Info,
}

#[derive(Subcommand)]
enum LayoutAction {
    /// Validate all layout files in a directory
    Validate {
        #[arg(long, default_value = "./layouts")]
        dir: PathBuf,
    },
    /// Parse a layout file and print its fields
    Show {
        #[arg(short, long)]
        file: PathBuf,
        /// Print the normalized YAML instead of a field table
        #[arg(long)]
        yaml: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log = LogConfig {
        level: if cli.verbose { "debug" } else { "warn" }.to_string(),
        json: cli.log_json,
        ..LogConfig::default()
    };
    init_tracing(&log).context("initialising logging")?;

    match cli.command {
        Commands::Decode {
            layout,
            name,
            input,
            format,
            no_header,
            no_quotes,
            src_hex,
            parallel,
            chunk_size,
            output,
        } => cmd_decode::run(&cmd_decode::DecodeArgs {
            layout,
            name,
            input,
            format,
            header: !no_header,
            quote: !no_quotes,
            src_hex,
            parallel,
            chunk_size,
            output,
        }),

        Commands::Layout { action } => match action {
            LayoutAction::Validate { dir } => cmd_layout::validate(&dir),
            LayoutAction::Show { file, yaml } => cmd_layout::show(&file, yaml),
        },

        Commands::Info => cmd_info(),
    }
}

fn cmd_info() -> Result<()> {
    println!("RecordCodec v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Capabilities:");
    println!("  ✓ EBCDIC text              (CP037, trimmed)");
    println!("  ✓ Overpunch numerics       ({{ A-I positive, }} J-R negative)");
    println!("  ✓ COMP-3 packed decimal    (96-bit, up to 6 implied decimals)");
    println!("  ✓ Binary integers          (1, 2, 4 bytes, big-endian)");
    println!("  ✓ Dates                    (YYMMDD, CYYMMDD, YYYYMMDD, MMDDYY, packed)");
    println!("  ✓ Raw byte renderings      (base 16, 10, 2)");
    println!("  ✓ Double-byte text         (SO/SI shift codes, pluggable mapper)");
    println!("  ✓ Layout descriptions      (YAML, multi-doc, JSON)");
    println!("  ✓ Parallel batch decode    (Rayon)");
    println!();
    println!("Field types:");
    for ty in recordcodec_core::FieldType::ALL {
        println!("  {}", ty.layout_name());
    }
    println!("Output formats:              csv, tsv, xml, json");
    Ok(())
}
