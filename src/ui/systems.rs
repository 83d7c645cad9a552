// src/ui/systems.rs
use crate::copier::events::CopierFeedback;
use crate::ui::{AlertState, UiFeedbackState};
use bevy::prelude::*;

/// Mirrors feedback into the status line. Errors also raise the alert.
pub fn handle_ui_feedback(
    mut feedback_events: EventReader<CopierFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
    mut alert: ResMut<AlertState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        if event.is_error {
            alert.open(event.message.clone());
        }
        last_message = Some((event.message.clone(), event.is_error));
    }
    if let Some((msg, is_error)) = last_message {
        ui_feedback_state.last_message = msg;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut app = App::new();
        app.add_event::<CopierFeedback>()
            .init_resource::<UiFeedbackState>()
            .init_resource::<AlertState>()
            .add_systems(Update, handle_ui_feedback);
        app
    }

    #[test]
    fn info_updates_status_without_alert() {
        let mut app = app();
        app.world_mut().send_event(CopierFeedback::info("Copied 'Mail'"));
        app.update();
        let state = app.world().resource::<UiFeedbackState>();
        assert_eq!(state.last_message, "Copied 'Mail'");
        assert!(!state.is_error);
        assert!(!app.world().resource::<AlertState>().is_open());
    }

    #[test]
    fn error_raises_alert() {
        let mut app = app();
        app.world_mut().send_event(CopierFeedback::error("Invalid dictionary file"));
        app.update();
        let alert = app.world().resource::<AlertState>();
        assert_eq!(alert.message.as_deref(), Some("Invalid dictionary file"));
        assert!(app.world().resource::<UiFeedbackState>().is_error);
    }
}
