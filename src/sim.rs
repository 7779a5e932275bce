//! Orbital motion simulation.
//!
//! Advances each working copy's orbital phase once per rendered frame while
//! the clock is playing, and services view-reset requests.

use bevy::prelude::*;
use rand::Rng;
use std::f64::consts::TAU;

use crate::types::{FrameSet, Planet, SimClock, ViewState};

/// Event requesting a view reset: zoom back to 1, drag intent cleared, orbital
/// phases re-randomized. Play state and selection are left alone.
#[derive(Event, Default)]
pub struct ResetViewEvent;

/// Plugin providing orbital simulation.
pub struct SimPlugin;

impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ResetViewEvent>()
            .configure_sets(
                Update,
                (FrameSet::Simulate, FrameSet::Project, FrameSet::Overlay).chain(),
            )
            .add_systems(
                Update,
                (advance_orbits, handle_reset).in_set(FrameSet::Simulate),
            );
    }
}

/// A fresh uniform orbital phase in [0, 2π).
pub fn random_phase(rng: &mut impl Rng) -> f64 {
    rng.gen_range(0.0..TAU)
}

/// Advance one planet's phase by one frame.
///
/// The step is a pure function of the angular speed and the global speed
/// multiplier; wrap-around is left to the trig functions downstream.
pub fn step_angle(angle: f64, angular_speed: f64, speed: f64) -> f64 {
    angle + angular_speed * speed
}

/// Advance every planet's orbital phase, once per frame, while playing.
pub fn advance_orbits(clock: Res<SimClock>, mut planets: Query<&mut Planet>) {
    if !clock.playing {
        return;
    }

    for mut planet in planets.iter_mut() {
        planet.angle = step_angle(planet.angle, planet.id.data().angular_speed, clock.speed);
    }
}

/// Apply a requested view reset.
pub fn handle_reset(
    mut events: EventReader<ResetViewEvent>,
    mut view: ResMut<ViewState>,
    mut planets: Query<&mut Planet>,
) {
    if events.read().next().is_none() {
        return;
    }

    view.zoom = 1.0;
    view.rotation_offset = Vec2::ZERO;

    let mut rng = rand::thread_rng();
    for mut planet in planets.iter_mut() {
        planet.angle = random_phase(&mut rng);
    }

    info!("View reset");
}
