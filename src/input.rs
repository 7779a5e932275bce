//! Pointer, wheel, and keyboard input handling.
//!
//! Translates pointer events into `ViewState` mutations (drag-to-rotate intent,
//! wheel zoom) and performs click hit-testing against the positions recorded by
//! the renderer on the previous frame.

use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::render::MainCamera;
use crate::sim::ResetViewEvent;
use crate::types::{Planet, SelectedPlanet, SimClock, ViewState, HIT_SLOP};

/// Plugin providing input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (handle_wheel_zoom, handle_pointer, keyboard_shortcuts));
    }
}

/// Hit-test a click against body positions recorded at the last render.
///
/// Candidates are `(id, last screen position, base radius)` in catalog order; a
/// body is hit when the click falls within `radius * zoom + HIT_SLOP` of its
/// centre. When several overlap, the last match in catalog order wins (the
/// scan does not exit early).
pub fn hit_test(
    candidates: impl IntoIterator<Item = (crate::catalog::PlanetId, Vec2, f32)>,
    click: Vec2,
    zoom: f32,
) -> Option<crate::catalog::PlanetId> {
    let mut hit = None;
    for (id, pos, radius) in candidates {
        if click.distance(pos) <= radius * zoom + HIT_SLOP {
            hit = Some(id);
        }
    }
    hit
}

/// Apply wheel events to the zoom factor, one exact ×1.1 / ×0.9 step per event.
fn handle_wheel_zoom(
    mut wheel_events: EventReader<MouseWheel>,
    mut view: ResMut<ViewState>,
    mut contexts: EguiContexts,
) {
    // Scrolling over a panel belongs to the panel, not the viewport.
    if let Some(ctx) = contexts.try_ctx_mut() {
        if ctx.wants_pointer_input() {
            wheel_events.clear();
            return;
        }
    }

    for event in wheel_events.read() {
        if event.y == 0.0 {
            continue;
        }
        view.apply_zoom_step(event.y > 0.0);
    }
}

/// Drag state machine and click selection.
///
/// Press starts a drag anchored at the cursor; motion while pressed accumulates
/// rotation intent; release (or the cursor leaving the window) returns to idle.
/// Release also hit-tests the click against the last rendered body positions,
/// independently of the drag.
fn handle_pointer(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    planets: Query<&Planet>,
    mut view: ResMut<ViewState>,
    mut selected: ResMut<SelectedPlanet>,
    mut contexts: EguiContexts,
) {
    // Only honor the egui claim when idle; an in-flight drag must still see
    // motion and the release even if the cursor crosses a panel.
    if !view.dragging {
        if let Some(ctx) = contexts.try_ctx_mut() {
            if ctx.wants_pointer_input() {
                return;
            }
        }
    }

    let Ok(window) = window_query.single() else {
        return;
    };

    let Some(cursor) = window.cursor_position() else {
        // Pointer left the window: end any drag.
        view.dragging = false;
        return;
    };

    if mouse.just_pressed(MouseButton::Left) {
        view.dragging = true;
        view.last_cursor = cursor;
    }

    if view.dragging && mouse.pressed(MouseButton::Left) {
        view.apply_drag(cursor);
    }

    if mouse.just_released(MouseButton::Left) {
        view.dragging = false;

        // Hit-test in world pixels, the space the renderer records positions in.
        let Ok((camera, camera_transform)) = camera_query.single() else {
            return;
        };
        let Ok(world_pos) = camera.viewport_to_world_2d(camera_transform, cursor) else {
            return;
        };

        let candidates = planets
            .iter()
            .filter_map(|p| p.screen_pos.map(|pos| (p.id, pos, p.id.data().radius)));
        if let Some(id) = hit_test(candidates, world_pos, view.zoom) {
            selected.0 = id;
            info!("Selected {}", id.name());
        }
    }
}

/// Keyboard shortcuts for simulation control.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<SimClock>,
    mut view: ResMut<ViewState>,
    mut reset_events: EventWriter<ResetViewEvent>,
) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        clock.toggle_play_pause();
        info!("Simulation {}", if clock.playing { "running" } else { "paused" });
    }

    // Plus/Equal: zoom in
    if keys.just_pressed(KeyCode::Equal) || keys.just_pressed(KeyCode::NumpadAdd) {
        view.apply_zoom_step(true);
    }

    // Minus: zoom out
    if keys.just_pressed(KeyCode::Minus) || keys.just_pressed(KeyCode::NumpadSubtract) {
        view.apply_zoom_step(false);
    }

    // R: reset view
    if keys.just_pressed(KeyCode::KeyR) {
        reset_events.write(ResetViewEvent);
    }
}
