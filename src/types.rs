//! Core state types for the atlas: view transform, simulation clock, selection.

use bevy::prelude::*;

use crate::catalog::PlanetId;

/// System sets ordering the per-frame pipeline: advance phases, project them
/// to screen positions, then draw overlays that read the projected positions.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Orbital phase advancement (runs first).
    Simulate,
    /// Projection to world pixels, recording hit-test positions.
    Project,
    /// Overlays (selection ring, labels) reading projected positions.
    Overlay,
}

/// Minimum zoom factor (furthest zoom out).
pub const MIN_ZOOM: f32 = 0.3;

/// Maximum zoom factor (closest zoom in).
pub const MAX_ZOOM: f32 = 2.0;

/// Zoom factor applied per zoom-in wheel event, before clamping.
pub const ZOOM_IN_STEP: f32 = 1.1;

/// Zoom factor applied per zoom-out wheel event, before clamping.
pub const ZOOM_OUT_STEP: f32 = 0.9;

/// Minimum speed multiplier.
pub const MIN_SPEED: f64 = 0.1;

/// Maximum speed multiplier.
pub const MAX_SPEED: f64 = 3.0;

/// Pointer delta to rotation-offset scaling while dragging.
pub const DRAG_SENSITIVITY: f32 = 0.01;

/// Extra pixels of tolerance around a body when hit-testing clicks.
pub const HIT_SLOP: f32 = 5.0;

/// Vertical label offset below a body, in pixels past its radius.
pub const LABEL_OFFSET: f32 = 15.0;

/// View transform state, mutated by interaction events and control actions.
#[derive(Resource, Clone, Debug)]
pub struct ViewState {
    /// Zoom factor applied to orbit distances and body radii, within
    /// [`MIN_ZOOM`, `MAX_ZOOM`].
    pub zoom: f32,
    /// Accumulated drag intent. Recorded but not applied to the 2D projection.
    pub rotation_offset: Vec2,
    /// Whether a pointer drag is in progress.
    pub dragging: bool,
    /// Drag anchor: cursor position at the last drag update.
    pub last_cursor: Vec2,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            rotation_offset: Vec2::ZERO,
            dragging: false,
            last_cursor: Vec2::ZERO,
        }
    }
}

impl ViewState {
    /// Apply a single zoom step and clamp. `zoom_in` selects between the
    /// fixed ×1.1 and ×0.9 wheel factors.
    pub fn apply_zoom_step(&mut self, zoom_in: bool) {
        let factor = if zoom_in { ZOOM_IN_STEP } else { ZOOM_OUT_STEP };
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Accumulate a pointer drag delta into the rotation offset and move the
    /// drag anchor to the new cursor position.
    pub fn apply_drag(&mut self, cursor: Vec2) {
        let delta = cursor - self.last_cursor;
        self.rotation_offset += delta * DRAG_SENSITIVITY;
        self.last_cursor = cursor;
    }
}

/// Simulation clock: play/pause flag and speed multiplier.
#[derive(Resource, Clone, Debug)]
pub struct SimClock {
    /// Whether orbital motion advances each frame.
    pub playing: bool,
    /// Speed multiplier within [`MIN_SPEED`, `MAX_SPEED`].
    pub speed: f64,
}

impl Default for SimClock {
    fn default() -> Self {
        Self {
            playing: true,
            speed: 1.0,
        }
    }
}

impl SimClock {
    /// Flip the play/pause flag.
    pub fn toggle_play_pause(&mut self) {
        self.playing = !self.playing;
    }

    /// Set the speed multiplier, clamped to the slider range.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }
}

/// The currently selected planet. Exactly one body is selected at all times;
/// Earth is selected on startup.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectedPlanet(pub PlanetId);

impl Default for SelectedPlanet {
    fn default() -> Self {
        Self(PlanetId::Earth)
    }
}

/// Per-session working copy of a catalog planet.
///
/// The catalog entry itself is never mutated; this component carries the
/// mutable simulation fields so a reset can restore pristine parameters.
#[derive(Component, Clone, Debug)]
pub struct Planet {
    pub id: PlanetId,
    /// Current orbital phase in radians. Wraps implicitly via the trig
    /// functions used for projection.
    pub angle: f64,
    /// Position at the last rendered frame, in world pixels. `None` until the
    /// first render. Written by the renderer, read by click hit-testing.
    pub screen_pos: Option<Vec2>,
}

impl Planet {
    pub fn new(id: PlanetId, angle: f64) -> Self {
        Self {
            id,
            angle,
            screen_pos: None,
        }
    }
}
