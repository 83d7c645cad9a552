// src/copier/view.rs

use bevy::prelude::*;
use std::time::Duration;

use super::edit::EditController;
use super::grid::ButtonGrid;

/// Glyph shown on empty cells.
pub const EMPTY_CELL_GLYPH: &str = "+";
/// Horizontal space reserved around each cell.
pub const CELL_MARGIN: f32 = 16.0;
/// How long a clicked cell keeps its `clicked` look.
pub const CLICK_PULSE: Duration = Duration::from_millis(500);

pub const LABEL_INPUT_HINT: &str = "Button label";
pub const VALUE_INPUT_HINT: &str = "Text to copy";

/// Everything the painter needs to draw one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub row: usize,
    pub col: usize,
    pub id: String,
    pub label_text: String,
    pub is_empty: bool,
    pub is_editing: bool,
}

impl CellView {
    /// Inputs are only shown while the cell is editing.
    pub fn shows_inputs(&self) -> bool {
        self.is_editing
    }
}

/// Materialized grid. Replaced wholesale on every rebuild.
#[derive(Resource, Debug, Default, Clone)]
pub struct GridView {
    pub columns: usize,
    pub cells: Vec<Vec<CellView>>,
    pub generation: u64,
}

impl GridView {
    /// Even share of `available` width per column.
    pub fn cell_width(&self, available: f32) -> f32 {
        if self.columns == 0 {
            return 0.0;
        }
        (available / self.columns as f32 - CELL_MARGIN).max(0.0)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&CellView> {
        self.cells.get(row).and_then(|r| r.get(col))
    }
}

/// Trims the grid and rebuilds the view from scratch.
pub fn rebuild_view(grid: &mut ButtonGrid, controller: &EditController, previous: &GridView) -> GridView {
    grid.trim();
    if let Some((row, col)) = controller.editing_cell() {
        if grid.cell(row, col).is_none() {
            warn!("Copier: Editing cell r{}c{} is outside the rebuilt grid", row, col);
        }
    }

    let cells = grid
        .data
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| CellView {
                    row,
                    col,
                    id: format!("r{row}c{col}"),
                    label_text: cell
                        .label
                        .clone()
                        .unwrap_or_else(|| EMPTY_CELL_GLYPH.to_string()),
                    is_empty: cell.is_empty(),
                    is_editing: controller.is_editing(row, col),
                })
                .collect()
        })
        .collect();

    GridView {
        columns: grid.columns,
        cells,
        generation: previous.generation.wrapping_add(1),
    }
}

#[derive(Debug)]
struct ClickPulse {
    row: usize,
    col: usize,
    timer: Timer,
}

/// Cells currently showing the transient `clicked` state.
#[derive(Resource, Debug, Default)]
pub struct ClickPulses {
    pulses: Vec<ClickPulse>,
}

impl ClickPulses {
    /// Starts (or restarts) the pulse on a cell.
    pub fn start(&mut self, row: usize, col: usize) {
        self.pulses.retain(|p| (p.row, p.col) != (row, col));
        self.pulses.push(ClickPulse {
            row,
            col,
            timer: Timer::new(CLICK_PULSE, TimerMode::Once),
        });
    }

    pub fn is_clicked(&self, row: usize, col: usize) -> bool {
        self.pulses.iter().any(|p| (p.row, p.col) == (row, col))
    }

    /// Advances every pulse and drops the expired ones.
    pub fn tick(&mut self, delta: Duration) {
        for pulse in self.pulses.iter_mut() {
            pulse.timer.tick(delta);
        }
        self.pulses.retain(|p| !p.timer.finished());
    }

    pub fn clear(&mut self) {
        self.pulses.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copier::grid::ButtonCell;

    #[test]
    fn rebuild_materializes_every_cell() {
        let mut grid = ButtonGrid::default();
        grid.add_row();
        grid.add_column();
        let view = rebuild_view(&mut grid, &EditController::default(), &GridView::default());
        assert_eq!(view.cells.len(), 2);
        assert!(view.cells.iter().all(|r| r.len() == 2));
        assert_eq!(view.generation, 1);

        let empty = view.cell(1, 1).unwrap();
        assert!(empty.is_empty);
        assert_eq!(empty.label_text, EMPTY_CELL_GLYPH);
        assert_eq!(empty.id, "r1c1");

        let seeded = view.cell(0, 1).unwrap();
        assert!(!seeded.is_empty);
        assert_eq!(seeded.label_text, crate::copier::grid::PLACEHOLDER_LABEL);
    }

    #[test]
    fn rebuild_trims_before_materializing() {
        let mut grid = ButtonGrid {
            rows: 2,
            columns: 2,
            data: vec![
                vec![ButtonCell::new("a", "1"), ButtonCell::default()],
                vec![ButtonCell::default(), ButtonCell::default()],
            ],
        };
        let view = rebuild_view(&mut grid, &EditController::default(), &GridView::default());
        assert_eq!((grid.rows, grid.columns), (1, 1));
        assert_eq!(view.columns, 1);
        assert_eq!(view.cells.len(), 1);
    }

    #[test]
    fn rebuild_replaces_the_previous_view() {
        let mut grid = ButtonGrid::default();
        let ctl = EditController::default();
        let first = rebuild_view(&mut grid, &ctl, &GridView::default());
        grid.data[0][0] = ButtonCell::new("Renamed", "x");
        let second = rebuild_view(&mut grid, &ctl, &first);
        assert_eq!(second.cell(0, 0).unwrap().label_text, "Renamed");
        assert_eq!(second.generation, first.generation + 1);
    }

    #[test]
    fn only_the_editing_cell_shows_inputs() {
        let mut grid = ButtonGrid::default();
        grid.add_column();
        let mut ctl = EditController::default();
        ctl.request_edit(&grid, 0, 1);
        let view = rebuild_view(&mut grid, &ctl, &GridView::default());
        assert!(view.cell(0, 1).unwrap().shows_inputs());
        assert!(!view.cell(0, 0).unwrap().shows_inputs());
    }

    #[test]
    fn cell_width_is_an_even_share() {
        let view = GridView {
            columns: 4,
            ..default()
        };
        assert_eq!(view.cell_width(800.0), 200.0 - CELL_MARGIN);
        assert_eq!(view.cell_width(10.0), 0.0);
        assert_eq!(GridView::default().cell_width(800.0), 0.0);
    }

    #[test]
    fn pulse_expires_after_half_a_second() {
        let mut pulses = ClickPulses::default();
        pulses.start(0, 0);
        assert!(pulses.is_clicked(0, 0));
        pulses.tick(Duration::from_millis(300));
        assert!(pulses.is_clicked(0, 0));
        pulses.tick(Duration::from_millis(250));
        assert!(!pulses.is_clicked(0, 0));
        assert!(pulses.is_empty());
        // Expiring again is harmless.
        pulses.tick(Duration::from_millis(500));
        assert!(pulses.is_empty());
    }

    #[test]
    fn restarting_a_pulse_resets_its_timer() {
        let mut pulses = ClickPulses::default();
        pulses.start(1, 2);
        pulses.tick(Duration::from_millis(400));
        pulses.start(1, 2);
        pulses.tick(Duration::from_millis(400));
        assert!(pulses.is_clicked(1, 2));
    }
}
