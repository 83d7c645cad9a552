// src/ui/elements/button_grid.rs
use bevy_egui::egui::{self, Color32, RichText, Stroke};
use egui_extras::{Column, TableBuilder};

use crate::copier::edit::EditController;
use crate::copier::events::GridPointerEvent;
use crate::copier::view::{
    CellView, ClickPulses, GridView, CELL_MARGIN, LABEL_INPUT_HINT, VALUE_INPUT_HINT,
};

const BUTTON_ROW_HEIGHT: f32 = 48.0;
const EDIT_ROW_HEIGHT: f32 = 120.0;

const CLICKED_FILL: Color32 = Color32::from_rgb(70, 130, 220);
const EDITING_STROKE: Color32 = Color32::from_rgb(230, 180, 40);

/// Paints the view and returns the pointer events of this frame:
/// cell activations first, then the page-wide click if there was one.
pub(super) fn show_button_grid(
    ui: &mut egui::Ui,
    view: &GridView,
    controller: &mut EditController,
    pulses: &ClickPulses,
) -> Vec<GridPointerEvent> {
    let mut events = Vec::new();
    let mut cell_rects: Vec<((usize, usize), egui::Rect)> = Vec::new();

    if view.columns > 0 && !view.cells.is_empty() {
        let cell_width = view.cell_width(ui.available_width());
        let heights: Vec<f32> = view
            .cells
            .iter()
            .map(|row| {
                if row.iter().any(|c| c.shows_inputs()) {
                    EDIT_ROW_HEIGHT
                } else {
                    BUTTON_ROW_HEIGHT
                }
            })
            .collect();

        egui::ScrollArea::vertical()
            .id_salt("button_grid_scroll_area")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                TableBuilder::new(ui)
                    .id_salt(("button_grid", view.generation))
                    .striped(false)
                    .resizable(false)
                    .cell_layout(egui::Layout::top_down(egui::Align::Center))
                    .columns(Column::exact(cell_width), view.columns)
                    .body(|body| {
                        body.heterogeneous_rows(heights.into_iter(), |mut row| {
                            let row_index = row.index();
                            let Some(cells) = view.cells.get(row_index) else {
                                return;
                            };
                            for cell in cells {
                                row.col(|ui| {
                                    let rect = show_cell(ui, cell, controller, pulses, &mut events);
                                    cell_rects.push(((cell.row, cell.col), rect));
                                });
                            }
                        });
                    });
            });
    } else {
        ui.weak("No buttons. Use ➕ Add Row or ➕ Add Column.");
    }

    let page_click = ui.ctx().input(|i| {
        if i.pointer.primary_clicked() {
            Some(i.pointer.interact_pos())
        } else {
            None
        }
    });
    if let Some(pos) = page_click {
        let target = pos.and_then(|p| hit_test(&cell_rects, p));
        events.push(GridPointerEvent::PageClick { target });
    }
    events
}

/// One cell: a label surface, or the two inputs while editing.
fn show_cell(
    ui: &mut egui::Ui,
    cell: &CellView,
    controller: &mut EditController,
    pulses: &ClickPulses,
    events: &mut Vec<GridPointerEvent>,
) -> egui::Rect {
    let visuals = ui.visuals().clone();
    let fill = if pulses.is_clicked(cell.row, cell.col) {
        CLICKED_FILL
    } else if cell.is_empty {
        visuals.faint_bg_color
    } else {
        visuals.widgets.inactive.bg_fill
    };
    let stroke = if cell.is_editing {
        Stroke::new(2.0, EDITING_STROKE)
    } else if cell.is_empty {
        Stroke::new(1.0, visuals.weak_text_color())
    } else {
        visuals.widgets.inactive.bg_stroke
    };

    let frame = egui::Frame::group(ui.style())
        .fill(fill)
        .stroke(stroke)
        .inner_margin(egui::Margin::same((CELL_MARGIN / 4.0) as i8));

    let inner = frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        if cell.shows_inputs() {
            ui.add(
                egui::TextEdit::singleline(&mut controller.label_input)
                    .hint_text(LABEL_INPUT_HINT)
                    .desired_width(f32::INFINITY),
            );
            ui.add(
                egui::TextEdit::multiline(&mut controller.value_input)
                    .hint_text(VALUE_INPUT_HINT)
                    .desired_rows(2)
                    .desired_width(f32::INFINITY),
            );
        } else {
            ui.centered_and_justified(|ui| {
                let text = RichText::new(&cell.label_text);
                if cell.is_empty {
                    ui.label(text.weak().size(20.0));
                } else {
                    ui.label(text.strong());
                }
            });
        }
    });

    let rect = inner.response.rect;
    if !cell.is_editing {
        let response = ui
            .interact(rect, ui.id().with(&cell.id), egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.clicked() {
            events.push(GridPointerEvent::Primary { row: cell.row, col: cell.col });
        }
        if response.secondary_clicked() {
            events.push(GridPointerEvent::Secondary { row: cell.row, col: cell.col });
        }
    }
    rect
}

/// Cell whose rect contains `pos`.
fn hit_test(cell_rects: &[((usize, usize), egui::Rect)], pos: egui::Pos2) -> Option<(usize, usize)> {
    cell_rects
        .iter()
        .find(|(_, rect)| rect.contains(pos))
        .map(|(cell, _)| *cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_finds_the_cell_under_the_pointer() {
        let rects = vec![
            ((0, 0), egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 40.0))),
            ((0, 1), egui::Rect::from_min_size(egui::pos2(110.0, 0.0), egui::vec2(100.0, 40.0))),
        ];
        assert_eq!(hit_test(&rects, egui::pos2(150.0, 20.0)), Some((0, 1)));
        assert_eq!(hit_test(&rects, egui::pos2(105.0, 20.0)), None);
        assert_eq!(hit_test(&[], egui::pos2(0.0, 0.0)), None);
    }
}
