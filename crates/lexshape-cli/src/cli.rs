use std::path::PathBuf;

use clap::Parser;
use lexshape_types::OutputMode;

/// Reshape a JSON array of dictionary entries into a word -> definition
/// mapping or a list of {word, definition} records
#[derive(Debug, Parser)]
#[command(name = "lexshape", version)]
pub struct Args {
    /// JSON file holding an array of entries
    pub infile: PathBuf,

    /// File to write; existing content is replaced
    pub outfile: PathBuf,

    /// Output shape: `mapping` or `list` [default: $LEXSHAPE_MODE or mapping]
    #[arg(short, long)]
    pub mode: Option<OutputMode>,
}
