// src/settings/mod.rs
pub mod io;

use bevy::prelude::*;
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use io::{load_settings_from_file, save_settings_to_file};

#[derive(Resource, Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct AppSettings {
    /// Directory the open/save dialogs start in.
    #[serde(default)]
    pub last_directory: Option<PathBuf>,
}

impl AppSettings {
    /// Records the parent directory of `path`. Returns `true` if it changed.
    pub fn remember_directory_of(&mut self, path: &Path) -> bool {
        let Some(dir) = path.parent() else {
            return false;
        };
        if dir.as_os_str().is_empty() || self.last_directory.as_deref() == Some(dir) {
            return false;
        }
        self.last_directory = Some(dir.to_path_buf());
        true
    }
}

/// Settings were modified and should be written out.
#[derive(Event, Debug)]
pub struct SettingsChanged;

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SettingsChanged>()
            .add_systems(PreStartup, load_settings_on_startup)
            .add_systems(Update, save_settings_on_change_system);
    }
}

fn load_settings_on_startup(mut commands: Commands) {
    let settings = match load_settings_from_file::<AppSettings>() {
        Ok(settings) => settings,
        Err(e) => {
            error!("AppSettings: Failed to load settings: {}. Using defaults.", e);
            AppSettings::default()
        }
    };
    commands.insert_resource(settings);
}

fn save_settings_on_change_system(
    mut events: EventReader<SettingsChanged>,
    settings: Res<AppSettings>,
) {
    if events.read().count() == 0 {
        return;
    }
    if let Err(e) = save_settings_to_file(&*settings) {
        warn!("AppSettings: Could not save settings: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remembers_parent_directory_once() {
        let mut settings = AppSettings::default();
        let file = Path::new("/tmp/dicts/work.json");
        assert!(settings.remember_directory_of(file));
        assert_eq!(settings.last_directory.as_deref(), Some(Path::new("/tmp/dicts")));
        assert!(!settings.remember_directory_of(Path::new("/tmp/dicts/other.json")));
    }

    #[test]
    fn bare_file_name_has_no_directory() {
        let mut settings = AppSettings::default();
        assert!(!settings.remember_directory_of(Path::new("dict.json")));
        assert!(settings.last_directory.is_none());
    }
}
