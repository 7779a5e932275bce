//! Selection highlight ring.

use bevy::prelude::*;

use crate::types::{FrameSet, Planet, SelectedPlanet, ViewState};

/// Plugin drawing the selection glow around the selected planet.
pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_selection_ring.in_set(FrameSet::Overlay));
    }
}

/// Draw a glow ring at radius + 2 around the selected planet, in its own color.
fn draw_selection_ring(
    mut gizmos: Gizmos,
    selected: Res<SelectedPlanet>,
    view: Res<ViewState>,
    planets: Query<&Planet>,
) {
    let Some(planet) = planets.iter().find(|p| p.id == selected.0) else {
        return;
    };

    // Nothing to highlight before the first projected frame.
    let Some(pos) = planet.screen_pos else {
        return;
    };

    let data = planet.id.data();
    let ring_radius = data.radius * view.zoom + 2.0;
    let glow = data.color.to_srgba();

    gizmos.circle_2d(pos, ring_radius, Color::srgba(glow.red, glow.green, glow.blue, 0.9));
    // Soft outer halo to suggest a glow rather than a hard outline.
    gizmos.circle_2d(
        pos,
        ring_radius + 3.0,
        Color::srgba(glow.red, glow.green, glow.blue, 0.35),
    );
}
