//! Reading a data file from disk.

use anyhow::Context;
use std::path::Path;
use usdem_db::Dataset;

/// Source format, inferred from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Csv,
}

impl SourceFormat {
    /// `.csv` (any case) is CSV; everything else is treated as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

/// Parse `contents` in the given format.
pub fn parse_dataset(contents: &str, format: SourceFormat) -> anyhow::Result<Dataset> {
    let dataset = match format {
        SourceFormat::Json => Dataset::from_json(contents)?,
        SourceFormat::Csv => Dataset::from_csv(contents)?,
    };
    Ok(dataset)
}

/// Read and load the data file at `path`.
pub fn load_dataset(path: &str) -> anyhow::Result<Dataset> {
    let path = Path::new(path);
    let format = SourceFormat::from_path(path);
    log::info!("Loading {} as {:?}", path.display(), format);
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file {}", path.display()))?;
    parse_dataset(&contents, format)
        .with_context(|| format!("Failed to load data file {}", path.display()))
}
