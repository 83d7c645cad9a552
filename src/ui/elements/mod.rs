// src/ui/elements/mod.rs
pub mod button_grid;
pub mod popups;
pub mod top_panel;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::copier::edit::EditController;
use crate::copier::events::{
    CopyToClipboard, GridPointerEvent, RequestAddColumn, RequestAddRow, RequestLoadDict,
    RequestSaveDict,
};
use crate::copier::view::{ClickPulses, GridView};
use crate::ui::{AlertState, UiFeedbackState};

use button_grid::show_button_grid;
use popups::alert_popup::show_alert_popup;
use top_panel::{show_top_panel, ToolbarEventWriters};

/// The whole window: toolbar, button table, alert.
#[allow(clippy::too_many_arguments)]
pub fn copier_window_ui(
    mut contexts: EguiContexts,
    view: Res<GridView>,
    mut controller: ResMut<EditController>,
    pulses: Res<ClickPulses>,
    feedback: Res<UiFeedbackState>,
    mut alert: ResMut<AlertState>,
    mut clipboard_events: EventReader<CopyToClipboard>,
    mut pointer_writer: EventWriter<GridPointerEvent>,
    mut load_writer: EventWriter<RequestLoadDict>,
    mut save_writer: EventWriter<RequestSaveDict>,
    mut add_row_writer: EventWriter<RequestAddRow>,
    mut add_column_writer: EventWriter<RequestAddColumn>,
) {
    let ctx = contexts.ctx_mut();

    for CopyToClipboard(text) in clipboard_events.read() {
        ctx.copy_text(text.clone());
    }

    let input_enabled = !alert.is_open();
    let mut pointer_events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_enabled_ui(input_enabled, |ui| {
            show_top_panel(
                ui,
                &feedback,
                ToolbarEventWriters {
                    load_writer: &mut load_writer,
                    save_writer: &mut save_writer,
                    add_row_writer: &mut add_row_writer,
                    add_column_writer: &mut add_column_writer,
                },
            );
            ui.separator();
            pointer_events = show_button_grid(ui, &view, &mut controller, &pulses);
        });
    });

    show_alert_popup(ctx, &mut alert);

    if input_enabled {
        for event in pointer_events {
            pointer_writer.write(event);
        }
    }
}
