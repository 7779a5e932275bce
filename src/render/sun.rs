//! The central star: a solid core over a soft radial glow.
//!
//! `ColorMaterial` has no radial gradient, so the glow is approximated with
//! concentric translucent discs fading out toward twice the core radius.

use bevy::prelude::*;

use crate::catalog::{SUN_CORE_COLOR, SUN_GLOW_COLOR, SUN_RADIUS};
use crate::render::z_layers;
use crate::types::ViewState;

/// Number of discs used to fake the glow falloff.
const GLOW_LAYERS: usize = 8;

/// Marker for the sun root entity; children carry the core and glow discs.
#[derive(Component)]
struct Sun;

/// Plugin providing the central star.
pub struct SunPlugin;

impl Plugin for SunPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_sun)
            .add_systems(Update, sync_sun_scale);
    }
}

fn spawn_sun(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands
        .spawn((Sun, Transform::default(), Visibility::default()))
        .with_children(|parent| {
            // Glow: discs from the core radius out to 2x, alpha fading to zero.
            for i in 0..GLOW_LAYERS {
                let t = i as f32 / GLOW_LAYERS as f32; // 0 at core edge, ->1 outward
                let radius = SUN_RADIUS * (1.0 + t);
                let alpha = 0.35 * (1.0 - t);

                let glow = SUN_GLOW_COLOR.to_srgba();
                parent.spawn((
                    Mesh2d(meshes.add(Circle::new(radius))),
                    MeshMaterial2d(materials.add(ColorMaterial::from(Color::srgba(
                        glow.red, glow.green, glow.blue, alpha,
                    )))),
                    // Inner discs stack above outer ones.
                    Transform::from_xyz(0.0, 0.0, z_layers::SUN_GLOW - t * 0.1),
                ));
            }

            // Solid core.
            parent.spawn((
                Mesh2d(meshes.add(Circle::new(SUN_RADIUS))),
                MeshMaterial2d(materials.add(ColorMaterial::from(SUN_CORE_COLOR))),
                Transform::from_xyz(0.0, 0.0, z_layers::SUN_CORE),
            ));
        });
}

/// Keep the sun scaled to the current zoom factor.
fn sync_sun_scale(view: Res<ViewState>, mut query: Query<&mut Transform, With<Sun>>) {
    let Ok(mut transform) = query.single_mut() else {
        return;
    };
    transform.scale = Vec3::new(view.zoom, view.zoom, 1.0);
}
