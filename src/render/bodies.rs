//! Planet spawning and per-frame projection.
//!
//! `project_planets` is the only producer of `Planet::screen_pos`: it recomputes
//! every body's position from its current phase on every frame, paused or not,
//! so click hit-testing always agrees with the latest drawn frame.

use bevy::prelude::*;

use crate::catalog::all_planets;
use crate::render::z_layers;
use crate::sim::random_phase;
use crate::types::{FrameSet, Planet, ViewState};

/// Plugin providing planet entities and their projection.
pub struct BodyPlugin;

impl Plugin for BodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_planets)
            .add_systems(Update, project_planets.in_set(FrameSet::Project));
    }
}

/// Spawn a working copy of every catalog entry, each with an independent
/// random starting phase, together with its visual.
fn spawn_planets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let mut rng = rand::thread_rng();

    for data in all_planets() {
        commands.spawn((
            Planet::new(data.id, random_phase(&mut rng)),
            Mesh2d(meshes.add(Circle::new(data.radius))),
            MeshMaterial2d(materials.add(ColorMaterial::from(data.color))),
            Transform::from_xyz(0.0, 0.0, z_layers::BODIES),
        ));
    }

    info!("Spawned {} planets", all_planets().len());
}

/// Project each planet's orbital phase to world pixels and record the result
/// on the working copy for hit-testing.
fn project_planets(view: Res<ViewState>, mut planets: Query<(&mut Planet, &mut Transform)>) {
    for (mut planet, mut transform) in planets.iter_mut() {
        let data = planet.id.data();
        let pos = Vec2::new(
            planet.angle.cos() as f32,
            planet.angle.sin() as f32,
        ) * data.distance
            * view.zoom;

        transform.translation = pos.extend(z_layers::BODIES);
        transform.scale = Vec3::new(view.zoom, view.zoom, 1.0);

        planet.screen_pos = Some(pos);
    }
}
