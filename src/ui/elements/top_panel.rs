// src/ui/elements/top_panel.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::copier::events::{RequestAddColumn, RequestAddRow, RequestLoadDict, RequestSaveDict};
use crate::ui::UiFeedbackState;

pub(super) struct ToolbarEventWriters<'a, 'w1, 'w2, 'w3, 'w4> {
    pub load_writer: &'a mut EventWriter<'w1, RequestLoadDict>,
    pub save_writer: &'a mut EventWriter<'w2, RequestSaveDict>,
    pub add_row_writer: &'a mut EventWriter<'w3, RequestAddRow>,
    pub add_column_writer: &'a mut EventWriter<'w4, RequestAddColumn>,
}

/// Load / Save / Add Row / Add Column, plus the status line.
pub(super) fn show_top_panel(
    ui: &mut egui::Ui,
    feedback: &UiFeedbackState,
    writers: ToolbarEventWriters<'_, '_, '_, '_, '_>,
) {
    ui.horizontal(|ui| {
        if ui.button("📂 Load").on_hover_text("Load a button dictionary (.json)").clicked() {
            writers.load_writer.write(RequestLoadDict);
        }
        if ui.button("💾 Save").on_hover_text("Save the buttons to a .json file").clicked() {
            writers.save_writer.write(RequestSaveDict);
        }
        ui.separator();
        if ui.button("➕ Add Row").clicked() {
            writers.add_row_writer.write(RequestAddRow);
        }
        if ui.button("➕ Add Column").clicked() {
            writers.add_column_writer.write(RequestAddColumn);
        }

        if !feedback.last_message.is_empty() {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let color = if feedback.is_error {
                    egui::Color32::LIGHT_RED
                } else {
                    ui.visuals().weak_text_color()
                };
                ui.colored_label(color, &feedback.last_message);
            });
        }
    });
}
