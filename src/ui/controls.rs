//! Playback controls panel at the bottom of the screen.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::sim::ResetViewEvent;
use crate::types::{SimClock, MAX_SPEED, MIN_SPEED};

/// System that renders the play/pause, speed, and reset controls.
pub fn speed_controls_panel(
    mut contexts: EguiContexts,
    mut clock: ResMut<SimClock>,
    mut reset_events: EventWriter<ResetViewEvent>,
) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::bottom("playback_controls")
        .frame(super::panel_frame())
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                // Play/Pause button
                let icon = if clock.playing { "\u{23F8}" } else { "\u{25B6}" };
                if ui
                    .button(icon)
                    .on_hover_text(if clock.playing {
                        "Pause (Space)"
                    } else {
                        "Play (Space)"
                    })
                    .clicked()
                {
                    clock.toggle_play_pause();
                }

                ui.separator();

                // Speed slider with one-decimal badge
                ui.label("Speed:");
                let mut speed = clock.speed;
                if ui
                    .add(
                        egui::Slider::new(&mut speed, MIN_SPEED..=MAX_SPEED)
                            .step_by(0.1)
                            .show_value(false),
                    )
                    .changed()
                {
                    clock.set_speed(speed);
                }
                ui.label(egui::RichText::new(format!("{:.1}x", clock.speed)).monospace());

                ui.separator();

                // Reset button
                if ui
                    .button("\u{21BA}")
                    .on_hover_text("Reset view (R)")
                    .clicked()
                {
                    reset_events.write(ResetViewEvent);
                }
            });
        });
}
