use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "odczyt")]
#[command(about = "Map OCR text from Polish/English documents onto POA and OBY form fields", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding poa.json and oby.json field definitions
    #[arg(long, global = true)]
    pub schema_dir: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Map document text onto a form and print the JSON response
    Map {
        /// Target form (POA or OBY)
        #[arg(short, long)]
        target: String,

        /// Text file to read; stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Drop results scoring below this confidence
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        min_confidence: Option<u8>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List the field definitions of a form
    Fields {
        /// Target form (POA or OBY)
        #[arg(short, long)]
        target: String,
    },
}
