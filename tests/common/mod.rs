//! Common test utilities for integration tests.

use bevy::prelude::*;
use rand::Rng;
use std::f64::consts::TAU;

use space_atlas::catalog::{all_planets, PlanetId};
use space_atlas::sim::{advance_orbits, handle_reset, ResetViewEvent};
use space_atlas::types::{Planet, SelectedPlanet, SimClock, ViewState};

/// Build a headless app with the simulation systems and a full set of
/// working-copy planets, no rendering.
pub fn create_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_event::<ResetViewEvent>()
        .init_resource::<ViewState>()
        .init_resource::<SimClock>()
        .init_resource::<SelectedPlanet>()
        .add_systems(Update, (advance_orbits, handle_reset));

    let mut rng = rand::thread_rng();
    for data in all_planets() {
        app.world_mut()
            .spawn(Planet::new(data.id, rng.gen_range(0.0..TAU)));
    }

    app
}

/// Snapshot of every planet's current phase, keyed by id.
pub fn snapshot_angles(app: &mut App) -> Vec<(PlanetId, f64)> {
    let mut query = app.world_mut().query::<&Planet>();
    query
        .iter(app.world())
        .map(|p| (p.id, p.angle))
        .collect()
}

/// Current phase of a single planet.
pub fn angle_of(app: &mut App, id: PlanetId) -> f64 {
    snapshot_angles(app)
        .into_iter()
        .find(|(pid, _)| *pid == id)
        .map(|(_, a)| a)
        .expect("planet not spawned")
}
