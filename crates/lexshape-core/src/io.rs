use std::fs;
use std::io::Write;
use std::path::Path;

use lexshape_types::OutputMode;

use crate::entry::{Entry, parse_entries};
use crate::error::{Result, TransformError};
use crate::transform::{Reshaped, Transformer};

/// Outcome of a file-to-file run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformSummary {
    pub mode: OutputMode,
    pub entries_read: usize,
    pub records_written: usize,
}

/// Read and parse every entry from `path`
pub fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    tracing::info!("Loading dictionary entries from file: {}", path.display());
    let json = fs::read_to_string(path).map_err(|source| TransformError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_entries(&json)?;
    tracing::info!("Loaded {} dictionary entries", entries.len());
    Ok(entries)
}

/// Overwrite `path` with the pretty-printed output
pub fn write_output(path: &Path, reshaped: &Reshaped) -> Result<()> {
    let bytes = reshaped.to_pretty_json()?;
    let write_err = |source| TransformError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    {
        let mut file = fs::File::create(path).map_err(write_err)?;
        file.write_all(&bytes).map_err(write_err)?;
        file.flush().map_err(write_err)?;
    }

    tracing::info!(
        "Wrote {} {} records to {}",
        reshaped.len(),
        reshaped.mode(),
        path.display()
    );
    Ok(())
}

/// Reshape the dictionary at `input` into `output`
pub fn transform(input: &Path, output: &Path, mode: OutputMode) -> Result<TransformSummary> {
    let transformer = Transformer::new(mode);
    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        mode = %transformer.mode(),
        "Starting transform"
    );

    let entries = load_entries(input)?;
    let reshaped = transformer.transform_entries(&entries);
    write_output(output, &reshaped)?;

    Ok(TransformSummary {
        mode,
        entries_read: entries.len(),
        records_written: reshaped.len(),
    })
}
