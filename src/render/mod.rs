//! Rendering systems for the solar system view.
//!
//! The camera is a fixed `Camera2d` at the origin, so world units are device
//! pixels and the viewport centre is (0, 0). Zoom is applied per element from
//! `ViewState` rather than through the camera projection, matching how the
//! orbit geometry is defined.

pub mod bodies;
mod highlight;
mod labels;
mod orbits;
pub mod starfield;
mod sun;

use bevy::prelude::*;

use self::bodies::BodyPlugin;
use self::highlight::HighlightPlugin;
use self::labels::LabelPlugin;
use self::orbits::OrbitPathPlugin;
use self::starfield::StarfieldPlugin;
use self::sun::SunPlugin;

pub use self::starfield::{generate_stars, Star};

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera).add_plugins((
            StarfieldPlugin,
            SunPlugin,
            OrbitPathPlugin,
            BodyPlugin,
            HighlightPlugin,
            LabelPlugin,
        ));
    }
}

/// Spawn the fixed 2D camera.
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

/// Z-layer constants for draw order: stars under the sun glow, orbit rings
/// over the glow, bodies over their own rings.
pub mod z_layers {
    /// Starfield points.
    pub const STARFIELD: f32 = 0.0;
    /// Sun glow discs (layered just below the core).
    pub const SUN_GLOW: f32 = 0.5;
    /// Sun core.
    pub const SUN_CORE: f32 = 1.0;
    /// Orbit path rings.
    pub const ORBITS: f32 = 1.5;
    /// Planet bodies.
    pub const BODIES: f32 = 2.0;
}
