//! Per-tick player intent sampled from the raw input state.
//!
//! The simulation never touches key codes directly; it consumes one
//! [`PlayerIntent`] snapshot per tick. The key map is fixed:
//! `W/A/S/D` move, `Space` jump, `F` interact, `C` collect.

use glam::Vec2;
use winit::keyboard::KeyCode;

use crate::state::InputState;

/// Snapshot of everything the simulation wants to know about input this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerIntent {
    /// Movement axes: `x` is strafe (+right), `y` is forward (+ahead).
    /// Each component is -1, 0, or 1; opposing keys cancel.
    pub move_axes: Vec2,
    /// Jump key held this tick.
    pub jump: bool,
    /// Interact trigger edge (pressed this frame).
    pub interact: bool,
    /// Collect trigger edge (pressed this frame).
    pub collect: bool,
    /// Pointer look delta accumulated this frame (pixels).
    pub look: Vec2,
}

impl PlayerIntent {
    /// An intent with no movement, no triggers, and no look delta.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            move_axes: Vec2::ZERO,
            jump: false,
            interact: false,
            collect: false,
            look: Vec2::ZERO,
        }
    }
}

/// Builds the tick's [`PlayerIntent`] from the current input state.
#[must_use]
pub fn sample_intent(input: &InputState) -> PlayerIntent {
    let mut axes = Vec2::ZERO;
    if input.is_held(KeyCode::KeyW) {
        axes.y += 1.0;
    }
    if input.is_held(KeyCode::KeyS) {
        axes.y -= 1.0;
    }
    if input.is_held(KeyCode::KeyD) {
        axes.x += 1.0;
    }
    if input.is_held(KeyCode::KeyA) {
        axes.x -= 1.0;
    }

    PlayerIntent {
        move_axes: axes,
        jump: input.is_held(KeyCode::Space),
        interact: input.just_pressed(KeyCode::KeyF),
        collect: input.just_pressed(KeyCode::KeyC),
        look: input.look_delta(),
    }
}
