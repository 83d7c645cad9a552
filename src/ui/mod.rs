// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod elements;
pub mod systems;

use elements::copier_window_ui;
use systems::handle_ui_feedback;

#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Blocking error dialog. While open, the button table takes no input.
#[derive(Resource, Default, Debug, Clone)]
pub struct AlertState {
    pub message: Option<String>,
}

impl AlertState {
    pub fn open(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn close(&mut self) {
        self.message = None;
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }
}

/// Plugin for the copier window UI.
pub struct CopierUiPlugin;

impl Plugin for CopierUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<AlertState>()
            .add_systems(Update, handle_ui_feedback)
            .add_systems(EguiContextPass, copier_window_ui);

        info!("CopierUiPlugin initialized.");
    }
}
