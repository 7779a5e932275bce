//! egui-based UI shell: header, playback controls, and the planet info panel.
//!
//! The UI layer only supplies user intent (play/pause, speed, reset,
//! list selection) and displays state; all scene mutation goes through the
//! shared resources.

mod controls;
mod info_panel;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: false,
        })
        .add_systems(
            Update,
            (
                header_system,
                controls::speed_controls_panel,
                info_panel::info_panel,
            ),
        );
    }
}

/// Shared translucent dark frame for the panels.
pub(crate) fn panel_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 220))
        .inner_margin(egui::Margin::symmetric(16, 10))
}

/// Title header in the top-left corner.
fn header_system(mut contexts: EguiContexts) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("header"))
        .fixed_pos(egui::pos2(16.0, 12.0))
        .show(ctx, |ui| {
            ui.heading(egui::RichText::new("Space Atlas").size(24.0).strong());
            ui.label(
                egui::RichText::new("Interactive visualization of our solar system")
                    .color(egui::Color32::GRAY),
            );
        });
}
