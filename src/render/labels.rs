//! Planet name labels using the egui painter.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::render::MainCamera;
use crate::types::{FrameSet, Planet, ViewState, LABEL_OFFSET};

/// Plugin providing body label rendering.
pub struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_body_labels.in_set(FrameSet::Overlay));
    }
}

/// Draw each planet's name centred horizontally under the body, offset by
/// its scaled radius plus a fixed margin.
fn draw_body_labels(
    mut egui_ctx: EguiContexts,
    planets: Query<(&Planet, &Transform)>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    view: Res<ViewState>,
) {
    let Some(ctx) = egui_ctx.try_ctx_mut() else {
        return;
    };

    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };

    egui::Area::new(egui::Id::new("body_labels"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Background)
        .show(ctx, |ui| {
            let painter = ui.painter();
            let font = egui::FontId::proportional(12.0);

            for (planet, transform) in planets.iter() {
                let Ok(screen_pos) = camera.world_to_viewport(camera_transform, transform.translation)
                else {
                    continue;
                };

                let data = planet.id.data();
                let label_pos = egui::pos2(
                    screen_pos.x,
                    screen_pos.y + data.radius * view.zoom + LABEL_OFFSET,
                );

                // Shadow for readability over the starfield.
                painter.text(
                    label_pos + egui::vec2(1.0, 1.0),
                    egui::Align2::CENTER_CENTER,
                    data.name,
                    font.clone(),
                    egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
                );
                painter.text(
                    label_pos,
                    egui::Align2::CENTER_CENTER,
                    data.name,
                    font.clone(),
                    egui::Color32::WHITE,
                );
            }
        });
}
