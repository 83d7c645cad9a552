// src/copier/handler.rs

use bevy::prelude::*;
use chrono::Local;
use rfd::FileDialog;

use super::edit::{CommitOutcome, EditController, PrimaryOutcome};
use super::events::*;
use super::grid::ButtonGrid;
use super::io::{save_dict_to_file, DEFAULT_DICT_FILE_NAME, DICT_FILE_EXTENSIONS};
use super::view::{rebuild_view, ClickPulses, GridView};
use crate::settings::{AppSettings, SettingsChanged};

/// Runs pointer input through the edit controller in arrival order.
pub(crate) fn handle_grid_pointer_events_system(
    mut events: EventReader<GridPointerEvent>,
    mut grid: ResMut<ButtonGrid>,
    mut controller: ResMut<EditController>,
    mut pulses: ResMut<ClickPulses>,
    mut clipboard_writer: EventWriter<CopyToClipboard>,
    mut modified_writer: EventWriter<GridModified>,
    mut feedback_writer: EventWriter<CopierFeedback>,
) {
    let mut needs_rebuild = false;
    for event in events.read() {
        match *event {
            GridPointerEvent::Primary { row, col } => {
                match controller.primary_activate(&grid, row, col) {
                    PrimaryOutcome::Copy(text) => {
                        pulses.start(row, col);
                        let label = grid
                            .cell(row, col)
                            .and_then(|c| c.label.clone())
                            .unwrap_or_default();
                        info!("Copier: Copying value of r{}c{} to clipboard", row, col);
                        clipboard_writer.write(CopyToClipboard(text));
                        feedback_writer.write(CopierFeedback::info(format!("Copied '{}'", label)));
                    }
                    PrimaryOutcome::EnteredEdit => {
                        pulses.start(row, col);
                        needs_rebuild = true;
                    }
                    PrimaryOutcome::EditRejected => pulses.start(row, col),
                    PrimaryOutcome::Ignored => {}
                }
            }
            GridPointerEvent::Secondary { row, col } => {
                if controller.request_edit(&grid, row, col) {
                    needs_rebuild = true;
                }
            }
            GridPointerEvent::PageClick { target } => {
                match controller.page_click(&mut grid, target) {
                    Some(CommitOutcome::Cleared { row, col }) => {
                        feedback_writer.write(CopierFeedback::info(format!("Cleared button r{}c{}", row, col)));
                        needs_rebuild = true;
                    }
                    Some(CommitOutcome::Updated { .. }) => needs_rebuild = true,
                    None => {}
                }
            }
        }
    }
    if needs_rebuild {
        modified_writer.write(GridModified);
    }
}

/// Handles `RequestAddRow`.
pub(crate) fn handle_add_row_system(
    mut events: EventReader<RequestAddRow>,
    mut grid: ResMut<ButtonGrid>,
    mut modified_writer: EventWriter<GridModified>,
) {
    let count = events.read().count();
    if count == 0 {
        return;
    }
    for _ in 0..count {
        grid.add_row();
    }
    info!("Copier: Added {} row(s), grid is {}x{}", count, grid.rows, grid.columns);
    modified_writer.write(GridModified);
}

/// Handles `RequestAddColumn`.
pub(crate) fn handle_add_column_system(
    mut events: EventReader<RequestAddColumn>,
    mut grid: ResMut<ButtonGrid>,
    mut modified_writer: EventWriter<GridModified>,
) {
    let count = events.read().count();
    if count == 0 {
        return;
    }
    for _ in 0..count {
        grid.add_column();
    }
    info!("Copier: Added {} column(s), grid is {}x{}", count, grid.rows, grid.columns);
    modified_writer.write(GridModified);
}

/// Shows the open dialog for `RequestLoadDict` and forwards the picked path.
pub(crate) fn handle_load_dict_request_system(
    mut events: EventReader<RequestLoadDict>,
    settings: Res<AppSettings>,
    mut read_writer: EventWriter<ReadDictFile>,
    mut feedback_writer: EventWriter<CopierFeedback>,
) {
    if events.read().next().is_none() {
        return;
    }
    events.clear();

    let mut dialog = FileDialog::new()
        .add_filter("Dictionary (JSON)", DICT_FILE_EXTENSIONS)
        .set_title("Load button dictionary");
    if let Some(dir) = &settings.last_directory {
        dialog = dialog.set_directory(dir);
    }

    match dialog.pick_file() {
        Some(path) => {
            info!("Copier: Dictionary picked: {:?}", path);
            read_writer.write(ReadDictFile { path });
        }
        None => {
            info!("Copier: Load cancelled.");
            feedback_writer.write(CopierFeedback::info("Load cancelled."));
        }
    }
}

/// Shows the save dialog for `RequestSaveDict` and writes the exported grid.
pub(crate) fn handle_save_dict_request_system(
    mut events: EventReader<RequestSaveDict>,
    grid: Res<ButtonGrid>,
    mut settings: ResMut<AppSettings>,
    mut feedback_writer: EventWriter<CopierFeedback>,
    mut settings_changed_writer: EventWriter<SettingsChanged>,
) {
    if events.read().next().is_none() {
        return;
    }
    events.clear();

    let mut dialog = FileDialog::new()
        .add_filter("Dictionary (JSON)", DICT_FILE_EXTENSIONS)
        .set_title("Save button dictionary")
        .set_file_name(DEFAULT_DICT_FILE_NAME);
    if let Some(dir) = &settings.last_directory {
        dialog = dialog.set_directory(dir);
    }

    let Some(path) = dialog.save_file() else {
        info!("Copier: Save cancelled.");
        feedback_writer.write(CopierFeedback::info("Save cancelled."));
        return;
    };

    match save_dict_to_file(&grid, &path) {
        Ok(()) => {
            let name = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
            feedback_writer.write(CopierFeedback::info(format!(
                "Saved {} at {}",
                name,
                Local::now().format("%H:%M:%S")
            )));
            if settings.remember_directory_of(&path) {
                settings_changed_writer.write(SettingsChanged);
            }
        }
        Err(e) => {
            error!("Copier: Save failed: {}", e);
            feedback_writer.write(CopierFeedback::error(e.to_string()));
        }
    }
}

/// Swaps in a freshly read grid, or reports why it could not be read.
pub(crate) fn apply_dict_file_read_system(
    mut events: EventReader<DictFileRead>,
    mut grid: ResMut<ButtonGrid>,
    mut controller: ResMut<EditController>,
    mut pulses: ResMut<ClickPulses>,
    mut settings: ResMut<AppSettings>,
    mut modified_writer: EventWriter<GridModified>,
    mut feedback_writer: EventWriter<CopierFeedback>,
    mut settings_changed_writer: EventWriter<SettingsChanged>,
) {
    for event in events.read() {
        match &event.result {
            Ok(loaded) => {
                *grid = loaded.clone();
                controller.reset();
                pulses.clear();
                info!(
                    "Copier: Loaded {}x{} dictionary from {:?}",
                    grid.rows, grid.columns, event.path
                );
                feedback_writer.write(CopierFeedback::info(format!(
                    "Loaded {} button(s)",
                    grid.non_empty_count()
                )));
                modified_writer.write(GridModified);
                if settings.remember_directory_of(&event.path) {
                    settings_changed_writer.write(SettingsChanged);
                }
            }
            Err(e) => {
                error!("Copier: Failed to load {:?}: {}", event.path, e);
                feedback_writer.write(CopierFeedback::error(e.to_string()));
            }
        }
    }
}

/// Rebuilds the whole view once per frame when the grid changed.
pub(crate) fn rebuild_grid_view_system(
    mut events: EventReader<GridModified>,
    mut grid: ResMut<ButtonGrid>,
    controller: Res<EditController>,
    mut view: ResMut<GridView>,
) {
    if events.read().count() == 0 {
        return;
    }
    let rebuilt = rebuild_view(&mut grid, &controller, &view);
    *view = rebuilt;
    debug!(
        "Copier: Rebuilt view #{} ({}x{})",
        view.generation, grid.rows, grid.columns
    );
}

/// Expires `clicked` pulses.
pub(crate) fn tick_click_pulses_system(time: Res<Time>, mut pulses: ResMut<ClickPulses>) {
    if !pulses.is_empty() {
        pulses.tick(time.delta());
    }
}
