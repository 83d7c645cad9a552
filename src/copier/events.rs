// src/copier/events.rs

use bevy::prelude::*;
use std::path::PathBuf;

use super::grid::ButtonGrid;
use super::io::DictError;

/// Pointer input coming from the button table, in the order it happened.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridPointerEvent {
    /// Left click on a cell.
    Primary { row: usize, col: usize },
    /// Right click on a cell.
    Secondary { row: usize, col: usize },
    /// Any left click in the window. `target` is the cell under the pointer.
    PageClick { target: Option<(usize, usize)> },
}

/// Toolbar: append a row.
#[derive(Event, Debug)]
pub struct RequestAddRow;

/// Toolbar: append a column.
#[derive(Event, Debug)]
pub struct RequestAddColumn;

/// Toolbar: pick a dictionary file and load it.
#[derive(Event, Debug)]
pub struct RequestLoadDict;

/// Toolbar: save the dictionary to a file.
#[derive(Event, Debug)]
pub struct RequestSaveDict;

/// A dictionary file was picked (or given on the command line) and should be read.
#[derive(Event, Debug, Clone)]
pub struct ReadDictFile {
    pub path: PathBuf,
}

/// Result of reading a dictionary file off the main thread.
#[derive(Event, Debug)]
pub struct DictFileRead {
    pub path: PathBuf,
    pub result: Result<ButtonGrid, DictError>,
}

/// The grid changed; the view must be rebuilt.
#[derive(Event, Debug, Default)]
pub struct GridModified;

/// Text to put on the system clipboard.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct CopyToClipboard(pub String);

/// Status line message. Errors also raise the blocking alert.
#[derive(Event, Debug, Clone)]
pub struct CopierFeedback {
    pub message: String,
    pub is_error: bool,
}

impl CopierFeedback {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}
