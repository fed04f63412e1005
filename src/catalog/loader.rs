//! Startup loader: scans the data directory and builds the catalog.
//!
//! Loading is all-or-nothing. The first unreadable or malformed file aborts
//! the load, so the process never starts serving a partial table.

use super::{Catalog, Record};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the record table.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid data file pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to list data files: {0}")]
    Walk(#[from] glob::GlobError),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: record {index} field {field:?} must be a string or null", path.display())]
    InvalidField {
        path: PathBuf,
        index: usize,
        field: String,
    },

    #[error("no data files matched {pattern:?}")]
    NoDataFiles { pattern: String },
}

/// Read every file matching `data_pattern` under `data_dir` and concatenate
/// the parsed records into a single [`Catalog`], preserving file read order.
/// Glob expansion yields paths in lexicographic order, so the table layout
/// is deterministic for a given directory.
pub fn load_catalog(data_dir: &Path, data_pattern: &str) -> Result<Catalog, CatalogError> {
    let pattern = data_dir.join(data_pattern).to_string_lossy().into_owned();
    let paths = glob::glob(&pattern).map_err(|source| CatalogError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut records = Vec::new();
    let mut files = 0usize;
    for entry in paths {
        let path = entry?;
        tracing::info!("Reading {}", path.display());
        records.extend(read_file(&path)?);
        files += 1;
    }

    if files == 0 {
        return Err(CatalogError::NoDataFiles { pattern });
    }

    tracing::info!("Loaded {} records from {} files", records.len(), files);
    Ok(Catalog::new(records))
}

/// Parse one data file: a JSON array of flat objects whose values are all
/// strings or null.
fn read_file(path: &Path) -> Result<Vec<Record>, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let rows: Vec<Map<String, Value>> =
        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    rows.into_iter()
        .enumerate()
        .map(|(index, fields)| {
            let invalid = fields
                .iter()
                .find(|(_, value)| !matches!(value, Value::Null | Value::String(_)));
            if let Some((field, _)) = invalid {
                return Err(CatalogError::InvalidField {
                    path: path.to_path_buf(),
                    index,
                    field: field.clone(),
                });
            }
            Ok(Record::from_fields(fields))
        })
        .collect()
}
