// src/copier/edit.rs

use bevy::prelude::*;

use super::grid::ButtonGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing { row: usize, col: usize },
}

/// What a primary click on a cell resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryOutcome {
    /// Non-empty cell: copy this text and pulse the cell.
    Copy(String),
    /// Empty cell: edit mode was entered and the cell pulses.
    EnteredEdit,
    /// Empty cell, but another cell is already editing. The cell still pulses.
    EditRejected,
    /// The click landed on the editing cell itself.
    Ignored,
}

/// Outcome of committing the editing cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Cleared { row: usize, col: usize },
    Updated { row: usize, col: usize },
}

/// Single-cell edit mode plus the text held by its two inputs.
#[derive(Resource, Debug, Default)]
pub struct EditController {
    state: EditState,
    pub label_input: String,
    pub value_input: String,
}

impl EditController {
    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn editing_cell(&self) -> Option<(usize, usize)> {
        match self.state {
            EditState::Editing { row, col } => Some((row, col)),
            EditState::Idle => None,
        }
    }

    pub fn is_editing(&self, row: usize, col: usize) -> bool {
        self.editing_cell() == Some((row, col))
    }

    /// Enters edit mode for `(row, col)`. Returns `false` when the request is
    /// dropped because a cell is already editing or the cell does not exist.
    pub fn request_edit(&mut self, grid: &ButtonGrid, row: usize, col: usize) -> bool {
        if let EditState::Editing { row: r, col: c } = self.state {
            debug!(
                "Copier: Edit request for r{}c{} dropped, r{}c{} is already editing",
                row, col, r, c
            );
            return false;
        }
        let Some(cell) = grid.cell(row, col) else {
            warn!("Copier: Edit request for missing cell r{}c{}", row, col);
            return false;
        };
        self.label_input = cell.label.clone().unwrap_or_default();
        self.value_input = cell.value.clone().unwrap_or_default();
        self.state = EditState::Editing { row, col };
        info!("Copier: Editing r{}c{}", row, col);
        true
    }

    /// Primary activation on a cell: copy a filled cell, or edit an empty one.
    pub fn primary_activate(&mut self, grid: &ButtonGrid, row: usize, col: usize) -> PrimaryOutcome {
        if self.is_editing(row, col) {
            return PrimaryOutcome::Ignored;
        }
        match grid.cell(row, col) {
            Some(cell) if !cell.is_empty() => PrimaryOutcome::Copy(cell.copy_value().to_string()),
            Some(_) => {
                if self.request_edit(grid, row, col) {
                    PrimaryOutcome::EnteredEdit
                } else {
                    PrimaryOutcome::EditRejected
                }
            }
            None => PrimaryOutcome::Ignored,
        }
    }

    /// Page-wide click. `target` is the cell under the pointer, if any.
    /// Commits when a cell is editing and the click is outside it.
    pub fn page_click(
        &mut self,
        grid: &mut ButtonGrid,
        target: Option<(usize, usize)>,
    ) -> Option<CommitOutcome> {
        let editing = self.editing_cell()?;
        if target == Some(editing) {
            return None;
        }
        self.commit(grid)
    }

    /// Writes the inputs back into the editing cell and returns to `Idle`.
    pub fn commit(&mut self, grid: &mut ButtonGrid) -> Option<CommitOutcome> {
        let (row, col) = self.editing_cell()?;
        self.state = EditState::Idle;
        let label = std::mem::take(&mut self.label_input);
        let value = std::mem::take(&mut self.value_input);

        let Some(cell) = grid.cell_mut(row, col) else {
            warn!("Copier: Editing cell r{}c{} vanished before commit", row, col);
            return None;
        };
        if label.trim().is_empty() && value.trim().is_empty() {
            cell.clear();
            info!("Copier: Cleared r{}c{}", row, col);
            return Some(CommitOutcome::Cleared { row, col });
        }
        cell.label = Some(label);
        cell.value = Some(value);
        info!("Copier: Committed r{}c{}", row, col);
        Some(CommitOutcome::Updated { row, col })
    }

    /// Drops edit mode without touching the grid, e.g. when the grid is replaced.
    pub fn reset(&mut self) {
        self.state = EditState::Idle;
        self.label_input.clear();
        self.value_input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copier::grid::ButtonCell;

    fn two_by_two() -> ButtonGrid {
        ButtonGrid {
            rows: 2,
            columns: 2,
            data: vec![
                vec![ButtonCell::new("Mail", "me@example.com"), ButtonCell::default()],
                vec![ButtonCell::new("Phone", "555-0100"), ButtonCell::new("Zip", "12345")],
            ],
        }
    }

    #[test]
    fn starts_idle() {
        let ctl = EditController::default();
        assert_eq!(ctl.state(), EditState::Idle);
        assert_eq!(ctl.editing_cell(), None);
    }

    #[test]
    fn request_edit_seeds_inputs_from_cell() {
        let grid = two_by_two();
        let mut ctl = EditController::default();
        assert!(ctl.request_edit(&grid, 1, 0));
        assert_eq!(ctl.state(), EditState::Editing { row: 1, col: 0 });
        assert_eq!(ctl.label_input, "Phone");
        assert_eq!(ctl.value_input, "555-0100");
    }

    #[test]
    fn second_edit_request_is_rejected() {
        let grid = two_by_two();
        let mut ctl = EditController::default();
        assert!(ctl.request_edit(&grid, 0, 0));
        assert!(!ctl.request_edit(&grid, 1, 1));
        assert_eq!(ctl.editing_cell(), Some((0, 0)));
        assert_eq!(ctl.label_input, "Mail");
    }

    #[test]
    fn primary_on_filled_cell_copies_without_state_change() {
        let grid = two_by_two();
        let mut ctl = EditController::default();
        assert_eq!(
            ctl.primary_activate(&grid, 1, 1),
            PrimaryOutcome::Copy("12345".to_string())
        );
        assert_eq!(ctl.state(), EditState::Idle);
    }

    #[test]
    fn primary_on_empty_cell_enters_edit() {
        let grid = two_by_two();
        let mut ctl = EditController::default();
        assert_eq!(ctl.primary_activate(&grid, 0, 1), PrimaryOutcome::EnteredEdit);
        assert_eq!(ctl.editing_cell(), Some((0, 1)));
        assert!(ctl.label_input.is_empty());
    }

    #[test]
    fn primary_on_editing_cell_is_ignored() {
        let grid = two_by_two();
        let mut ctl = EditController::default();
        ctl.request_edit(&grid, 0, 0);
        assert_eq!(ctl.primary_activate(&grid, 0, 0), PrimaryOutcome::Ignored);
    }

    #[test]
    fn primary_on_empty_cell_while_editing_elsewhere_is_rejected() {
        let grid = two_by_two();
        let mut ctl = EditController::default();
        ctl.request_edit(&grid, 1, 1);
        assert_eq!(ctl.primary_activate(&grid, 0, 1), PrimaryOutcome::EditRejected);
        assert_eq!(ctl.editing_cell(), Some((1, 1)));
    }

    #[test]
    fn click_inside_editing_cell_does_not_commit() {
        let mut grid = two_by_two();
        let mut ctl = EditController::default();
        ctl.request_edit(&grid, 0, 0);
        ctl.label_input = "Changed".into();
        assert_eq!(ctl.page_click(&mut grid, Some((0, 0))), None);
        assert_eq!(grid.data[0][0].label.as_deref(), Some("Mail"));
        assert!(ctl.is_editing(0, 0));
    }

    #[test]
    fn click_elsewhere_commits_untrimmed_inputs() {
        let mut grid = two_by_two();
        let mut ctl = EditController::default();
        ctl.request_edit(&grid, 0, 1);
        ctl.label_input = " Greeting ".into();
        ctl.value_input = "Hello,\n  world ".into();
        assert_eq!(
            ctl.page_click(&mut grid, None),
            Some(CommitOutcome::Updated { row: 0, col: 1 })
        );
        assert_eq!(grid.data[0][1], ButtonCell::new(" Greeting ", "Hello,\n  world "));
        assert_eq!(ctl.state(), EditState::Idle);
    }

    #[test]
    fn whitespace_only_inputs_clear_the_cell() {
        let mut grid = two_by_two();
        let mut ctl = EditController::default();
        ctl.request_edit(&grid, 1, 0);
        ctl.label_input = String::new();
        ctl.value_input = "  ".into();
        assert_eq!(
            ctl.page_click(&mut grid, Some((1, 1))),
            Some(CommitOutcome::Cleared { row: 1, col: 0 })
        );
        assert_eq!(grid.data[1][0], ButtonCell::default());
        assert!(grid.data[1][0].label.is_none() && grid.data[1][0].value.is_none());
    }

    #[test]
    fn value_only_edit_keeps_empty_label() {
        let mut grid = two_by_two();
        let mut ctl = EditController::default();
        ctl.request_edit(&grid, 0, 1);
        ctl.value_input = "secret".into();
        ctl.commit(&mut grid);
        assert_eq!(grid.data[0][1].label.as_deref(), Some(""));
        assert!(!grid.data[0][1].is_empty());
    }

    #[test]
    fn page_click_while_idle_does_nothing() {
        let mut grid = two_by_two();
        let before = grid.clone();
        let mut ctl = EditController::default();
        assert_eq!(ctl.page_click(&mut grid, None), None);
        assert_eq!(grid, before);
    }
}
