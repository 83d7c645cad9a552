// src/ui/elements/popups/alert_popup.rs
use bevy_egui::egui;

use crate::ui::AlertState;

pub fn show_alert_popup(ctx: &egui::Context, alert: &mut AlertState) {
    let Some(message) = alert.message.clone() else {
        return;
    };

    let mut ok_clicked = false;
    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.colored_label(egui::Color32::LIGHT_RED, &message);
            ui.separator();
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    ok_clicked = true;
                }
            });
        });

    if ok_clicked || ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
        alert.close();
    }
}
