// src/copier/grid.rs

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Label given to freshly seeded cells so a new row/column is discoverable.
pub const PLACEHOLDER_LABEL: &str = "right-click to edit";

/// A single button slot. A cell without a label is "empty".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonCell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ButtonCell {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: Some(value.into()),
        }
    }

    /// Cell holding the placeholder label and an empty value.
    pub fn placeholder() -> Self {
        Self::new(PLACEHOLDER_LABEL, "")
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none()
    }

    pub fn clear(&mut self) {
        self.label = None;
        self.value = None;
    }

    /// Text copied to the clipboard when the button is activated.
    pub fn copy_value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// The button table. Owned by the app as a single resource.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonGrid {
    pub rows: usize,
    pub columns: usize,
    pub data: Vec<Vec<ButtonCell>>,
}

impl Default for ButtonGrid {
    fn default() -> Self {
        Self {
            rows: 1,
            columns: 1,
            data: vec![vec![ButtonCell::placeholder()]],
        }
    }
}

impl ButtonGrid {
    /// Grid with no rows or columns at all.
    pub fn empty() -> Self {
        Self {
            rows: 0,
            columns: 0,
            data: Vec::new(),
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&ButtonCell> {
        self.data.get(row).and_then(|r| r.get(col))
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut ButtonCell> {
        self.data.get_mut(row).and_then(|r| r.get_mut(col))
    }

    pub fn non_empty_count(&self) -> usize {
        self.data
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// True when `rows`/`columns` agree with the shape of `data`.
    pub fn is_consistent(&self) -> bool {
        self.data.len() == self.rows && self.data.iter().all(|r| r.len() == self.columns)
    }

    /// Drops fully empty rows, then fully empty columns.
    /// Returns `(rows_removed, columns_removed)`.
    pub fn trim(&mut self) -> (usize, usize) {
        let rows_to_drop: Vec<usize> = self
            .data
            .iter()
            .enumerate()
            .filter(|(_, row)| row.iter().all(ButtonCell::is_empty))
            .map(|(i, _)| i)
            .collect();
        for &i in rows_to_drop.iter().rev() {
            self.data.remove(i);
            self.rows -= 1;
        }

        let columns_to_drop: Vec<usize> = (0..self.columns)
            .filter(|&col| {
                self.data
                    .iter()
                    .all(|row| row.get(col).map_or(true, ButtonCell::is_empty))
            })
            .collect();
        for &col in columns_to_drop.iter().rev() {
            for row in self.data.iter_mut() {
                if col < row.len() {
                    row.remove(col);
                }
            }
            self.columns -= 1;
        }

        if !rows_to_drop.is_empty() || !columns_to_drop.is_empty() {
            debug!(
                "Copier: Trimmed {} row(s) and {} column(s), grid is now {}x{}",
                rows_to_drop.len(),
                columns_to_drop.len(),
                self.rows,
                self.columns
            );
        }
        (rows_to_drop.len(), columns_to_drop.len())
    }

    /// Appends a row of empty cells and seeds its first cell with the placeholder.
    pub fn add_row(&mut self) {
        if self.columns == 0 {
            // A seeded row needs at least one column to hold the seed.
            for row in self.data.iter_mut() {
                row.push(ButtonCell::default());
            }
            self.columns = 1;
        }
        let mut new_row = vec![ButtonCell::default(); self.columns];
        new_row[0] = ButtonCell::placeholder();
        self.data.push(new_row);
        self.rows += 1;
    }

    /// Appends an empty cell to every row and seeds the top row's new cell.
    pub fn add_column(&mut self) {
        if self.rows == 0 {
            self.data.push(vec![ButtonCell::default(); self.columns]);
            self.rows = 1;
        }
        for row in self.data.iter_mut() {
            row.push(ButtonCell::default());
        }
        self.columns += 1;
        let last = self.columns - 1;
        self.data[0][last] = ButtonCell::placeholder();
    }
}
