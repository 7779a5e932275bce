//! Starfield background.
//!
//! Stars are generated for the current viewport and regenerated wholesale on
//! resize; they sit behind everything else and ignore zoom and drag.

use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use rand::Rng;

use crate::render::z_layers;

/// Number of stars generated per viewport.
pub const STAR_COUNT: usize = 300;

/// A decorative background star, immutable once generated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// Position in viewport coordinates (origin top-left, pixels).
    pub x: f32,
    pub y: f32,
    /// Radius in [0.5, 2.0).
    pub size: f32,
    /// Opacity in [0.2, 1.0).
    pub opacity: f32,
}

/// Marker component for spawned star entities.
#[derive(Component)]
struct StarSprite;

/// Plugin providing the starfield.
pub struct StarfieldPlugin;

impl Plugin for StarfieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_starfield)
            .add_systems(Update, regenerate_on_resize);
    }
}

/// Generate `count` stars with independent uniform draws for position, size,
/// and opacity. Zero or negative viewport extents degenerate to coordinate 0
/// rather than failing; this happens before the first layout pass.
pub fn generate_stars(width: f32, height: f32, count: usize) -> Vec<Star> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| Star {
            x: if width > 0.0 { rng.gen_range(0.0..width) } else { 0.0 },
            y: if height > 0.0 { rng.gen_range(0.0..height) } else { 0.0 },
            size: 0.5 + rng.gen::<f32>() * 1.5,
            opacity: 0.2 + rng.gen::<f32>() * 0.8,
        })
        .collect()
}

/// Spawn star meshes for the current window size.
fn spawn_stars(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    width: f32,
    height: f32,
) {
    for star in generate_stars(width, height, STAR_COUNT) {
        // Viewport coordinates are top-left based; world space is centred.
        let world_x = star.x - width / 2.0;
        let world_y = height / 2.0 - star.y;

        commands.spawn((
            Mesh2d(meshes.add(Circle::new(star.size))),
            MeshMaterial2d(materials.add(ColorMaterial::from(Color::srgba(
                1.0,
                1.0,
                1.0,
                star.opacity,
            )))),
            Transform::from_xyz(world_x, world_y, z_layers::STARFIELD),
            StarSprite,
        ));
    }
}

fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = window_query.single() else {
        return;
    };

    spawn_stars(
        &mut commands,
        &mut meshes,
        &mut materials,
        window.width(),
        window.height(),
    );
    info!("Spawned {STAR_COUNT} background stars");
}

/// Discard and regenerate the starfield whenever the window is resized.
fn regenerate_on_resize(
    mut resize_events: EventReader<WindowResized>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    stars: Query<Entity, With<StarSprite>>,
) {
    let Some(event) = resize_events.read().last() else {
        return;
    };

    for entity in stars.iter() {
        commands.entity(entity).despawn();
    }

    spawn_stars(
        &mut commands,
        &mut meshes,
        &mut materials,
        event.width,
        event.height,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_exact_count() {
        assert_eq!(generate_stars(800.0, 600.0, 300).len(), 300);
        assert_eq!(generate_stars(800.0, 600.0, 0).len(), 0);
    }

    #[test]
    fn test_stars_within_bounds() {
        for star in generate_stars(800.0, 600.0, 300) {
            assert!((0.0..800.0).contains(&star.x));
            assert!((0.0..600.0).contains(&star.y));
            assert!((0.5..2.0).contains(&star.size));
            assert!((0.2..1.0).contains(&star.opacity));
        }
    }

    #[test]
    fn test_zero_viewport_degenerates_to_origin() {
        for star in generate_stars(0.0, 0.0, 10) {
            assert_eq!(star.x, 0.0);
            assert_eq!(star.y, 0.0);
        }
    }
}
