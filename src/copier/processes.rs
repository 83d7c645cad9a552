// src/copier/processes.rs

use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;

use super::events::{DictFileRead, ReadDictFile};
use super::io::read_dict_file;

/// Reads picked dictionary files on the tokio runtime and reports back as `DictFileRead`.
/// Reads are not cancelled; whichever finishes last wins.
pub(crate) fn process_dict_file_reads_system(
    mut events: EventReader<ReadDictFile>,
    runtime: Res<TokioTasksRuntime>,
) {
    for event in events.read() {
        let path = event.path.clone();
        info!("Copier: Spawning async read for {:?}", path);

        runtime.spawn_background_task(move |mut ctx| async move {
            let result = read_dict_file(&path).await;

            ctx.run_on_main_thread(move |ctx| {
                ctx.world.send_event(DictFileRead { path, result });
            })
            .await;
        });
    }
}
