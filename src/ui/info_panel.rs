//! Info panel showing the selected planet's attributes and the body list.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::{PlanetId, all_planets};
use crate::types::SelectedPlanet;

fn to_color32(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    egui::Color32::from_rgb(
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
    )
}

/// System that renders the info panel.
pub fn info_panel(mut contexts: EguiContexts, mut selected: ResMut<SelectedPlanet>) {
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };

    egui::SidePanel::right("info_panel")
        .resizable(false)
        .default_width(220.0)
        .frame(super::panel_frame())
        .show(ctx, |ui| {
            // Body list: an alternative to clicking the canvas.
            ui.label("Planets:");
            for data in all_planets() {
                let is_selected = selected.0 == data.id;
                if ui
                    .selectable_label(is_selected, data.name)
                    .clicked()
                {
                    selected.0 = data.id;
                }
            }

            ui.separator();

            render_planet_info(ui, selected.0);

            ui.separator();

            // Interaction hints.
            ui.label(egui::RichText::new("Drag: rotate view").small());
            ui.label(egui::RichText::new("Scroll: zoom in/out").small());
            ui.label(egui::RichText::new("Click planet: view details").small());
        });
}

/// The selected planet's attribute rows, verbatim in catalog order.
fn render_planet_info(ui: &mut egui::Ui, id: PlanetId) {
    let data = id.data();

    ui.horizontal(|ui| {
        // Color swatch matching the rendered body.
        let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 7.0, to_color32(data.color));
        ui.heading(data.name);
    });
    ui.add_space(4.0);

    for (label, value) in data.attributes {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(format!("{label}:")).color(egui::Color32::GRAY));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                ui.label(*value);
            });
        });
    }
}
