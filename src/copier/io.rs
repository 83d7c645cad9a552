// src/copier/io.rs

use super::grid::ButtonGrid;
use bevy::log::{debug, error, info};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// File name offered by the save dialog.
pub const DEFAULT_DICT_FILE_NAME: &str = "oneclick-copier.json";
/// Extensions accepted by the load dialog.
pub const DICT_FILE_EXTENSIONS: &[&str] = &["json"];

const INDENT: &[u8] = b"    ";

#[derive(Error, Debug)]
pub enum DictError {
    #[error("Invalid dictionary file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid dictionary file: declared {rows}x{columns} but data does not match")]
    Shape { rows: usize, columns: usize },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Parses dictionary text into a replacement grid.
/// Nothing is mutated here; callers swap the grid in only on `Ok`.
pub fn import_from(text: &str) -> Result<ButtonGrid, DictError> {
    let grid: ButtonGrid = serde_json::from_str(text)?;
    if !grid.is_consistent() {
        return Err(DictError::Shape {
            rows: grid.rows,
            columns: grid.columns,
        });
    }
    debug!(
        "Copier: Parsed dictionary {}x{} with {} button(s)",
        grid.rows,
        grid.columns,
        grid.non_empty_count()
    );
    Ok(grid)
}

/// Serializes the grid with stable key order and 4-space indentation.
pub fn export_to(grid: &ButtonGrid) -> Result<String, DictError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    grid.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8.
    String::from_utf8(buf).map_err(|e| DictError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Writes the exported grid to `path`.
pub fn save_dict_to_file(grid: &ButtonGrid, path: &Path) -> Result<(), DictError> {
    let text = export_to(grid)?;
    fs::write(path, text).map_err(|e| {
        error!("Copier: Failed to write dictionary to {:?}: {}", path, e);
        DictError::Io(e)
    })?;
    info!(
        "Copier: Saved {}x{} dictionary to {:?}",
        grid.rows, grid.columns, path
    );
    Ok(())
}

/// Reads and parses a dictionary file. Used off the main thread.
pub async fn read_dict_file(path: &Path) -> Result<ButtonGrid, DictError> {
    let text = tokio::fs::read_to_string(path).await?;
    import_from(&text)
}
