//! Orbit path rings.
//!
//! Faint full circles at each orbit distance, drawn as annulus meshes under
//! the bodies so a planet occludes its own path.

use bevy::prelude::*;

use crate::catalog::all_planets;
use crate::render::z_layers;
use crate::types::{FrameSet, ViewState};

/// Half-thickness of an orbit ring in pixels at zoom 1.
const RING_HALF_WIDTH: f32 = 0.5;

/// Orbit path alpha.
const RING_ALPHA: f32 = 0.1;

/// Marker for orbit ring entities.
#[derive(Component)]
struct OrbitRing;

/// Plugin providing orbit path rings.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_orbit_rings)
            .add_systems(Update, sync_ring_scale.in_set(FrameSet::Project));
    }
}

fn spawn_orbit_rings(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let material = materials.add(ColorMaterial::from(Color::srgba(1.0, 1.0, 1.0, RING_ALPHA)));

    for data in all_planets() {
        commands.spawn((
            OrbitRing,
            Mesh2d(meshes.add(Annulus::new(
                data.distance - RING_HALF_WIDTH,
                data.distance + RING_HALF_WIDTH,
            ))),
            MeshMaterial2d(material.clone()),
            Transform::from_xyz(0.0, 0.0, z_layers::ORBITS),
        ));
    }
}

/// Scale the rings with the current zoom so they track the orbit radii.
fn sync_ring_scale(view: Res<ViewState>, mut rings: Query<&mut Transform, With<OrbitRing>>) {
    for mut transform in rings.iter_mut() {
        transform.scale = Vec3::new(view.zoom, view.zoom, 1.0);
    }
}
