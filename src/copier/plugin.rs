// src/copier/plugin.rs

use bevy::prelude::*;
use std::path::PathBuf;

use super::edit::EditController;
use super::events::*;
use super::grid::ButtonGrid;
use super::handler::{
    apply_dict_file_read_system,
    handle_add_column_system,
    handle_add_row_system,
    handle_grid_pointer_events_system,
    handle_load_dict_request_system,
    handle_save_dict_request_system,
    rebuild_grid_view_system,
    tick_click_pulses_system,
};
use super::processes::process_dict_file_reads_system;
use super::view::{ClickPulses, GridView};

/// Dictionary file named on the command line, loaded once at startup.
#[derive(Resource, Debug, Default, Clone)]
pub struct StartupDict(pub Option<PathBuf>);

pub struct CopierPlugin;

impl Plugin for CopierPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ButtonGrid>()
            .init_resource::<EditController>()
            .init_resource::<GridView>()
            .init_resource::<ClickPulses>()
            .init_resource::<StartupDict>();

        app.add_event::<GridPointerEvent>()
            .add_event::<RequestAddRow>()
            .add_event::<RequestAddColumn>()
            .add_event::<RequestLoadDict>()
            .add_event::<RequestSaveDict>()
            .add_event::<ReadDictFile>()
            .add_event::<DictFileRead>()
            .add_event::<GridModified>()
            .add_event::<CopyToClipboard>()
            .add_event::<CopierFeedback>();

        app.add_systems(Startup, initial_build_system);

        app.add_systems(
            Update,
            (
                // Commit any open edit before structural changes land.
                handle_grid_pointer_events_system,
                handle_add_row_system,
                handle_add_column_system,
                // File dialogs and async reads
                handle_load_dict_request_system,
                handle_save_dict_request_system,
                process_dict_file_reads_system,
                apply_dict_file_read_system,
                // Full rebuild after everything above
                rebuild_grid_view_system,
                tick_click_pulses_system,
            )
                .chain(),
        );

        info!("CopierPlugin initialized.");
    }
}

/// Builds the first view and queues the command-line dictionary, if any.
fn initial_build_system(
    startup_dict: Res<StartupDict>,
    mut modified_writer: EventWriter<GridModified>,
    mut read_writer: EventWriter<ReadDictFile>,
) {
    modified_writer.write(GridModified);
    if let Some(path) = &startup_dict.0 {
        info!("Copier: Loading dictionary from command line: {:?}", path);
        read_writer.write(ReadDictFile { path: path.clone() });
    }
}
