//! Space Atlas - Interactive Solar System
//!
//! A desktop application rendering an animated 2D model of the solar system
//! with playback, zoom, and planet inspection.

use bevy::prelude::*;

use space_atlas::catalog::BACKGROUND_COLOR;
use space_atlas::input::InputPlugin;
use space_atlas::render::RenderPlugin;
use space_atlas::sim::SimPlugin;
use space_atlas::types::{SelectedPlanet, SimClock, ViewState};
use space_atlas::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Space Atlas".to_string(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        // Shared state, inserted before the plugins that mutate it
        .init_resource::<ViewState>()
        .init_resource::<SimClock>()
        .init_resource::<SelectedPlanet>()
        // Simulation, rendering, interaction, UI
        .add_plugins((SimPlugin, RenderPlugin, InputPlugin, UiPlugin))
        .run();
}
