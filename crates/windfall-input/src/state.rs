//! Frame-coherent input state tracker.
//!
//! [`InputState`] accumulates winit keyboard and raw mouse-motion events
//! during a frame and answers, for any physical key: is it held, and was it
//! just pressed this frame. Look deltas are only accumulated while the
//! pointer is captured, so cursor travel in menus never turns the camera.
//!
//! Physical key codes are used throughout so that WASD movement works
//! identically regardless of the user's keyboard layout.

use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Minimal description of a key transition for processing.
///
/// Platform-independent twin of a winit [`KeyEvent`], constructible in tests
/// and scripted demos where no window exists.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    /// The physical key involved.
    pub key: PhysicalKey,
    /// Whether the key was pressed or released.
    pub state: ElementState,
    /// Whether this is an OS auto-repeat event.
    pub repeat: bool,
}

/// Tracks keyboard and pointer state across one frame.
///
/// # Usage
///
/// 1. Forward every [`KeyEvent`] to [`process_key_event`](Self::process_key_event)
///    and every raw mouse motion to [`on_raw_motion`](Self::on_raw_motion).
/// 2. Sample a [`crate::PlayerIntent`] once per tick.
/// 3. Call [`clear_transients`](Self::clear_transients) at the end of each frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<PhysicalKey>,
    just_pressed: HashSet<PhysicalKey>,
    look_delta: Vec2,
    captured: bool,
}

impl InputState {
    /// Creates an `InputState` with no keys held and the pointer released.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a winit [`KeyEvent`], updating held and just-pressed sets.
    pub fn process_key_event(&mut self, event: &KeyEvent) {
        self.process_raw(RawKeyEvent {
            key: event.physical_key,
            state: event.state,
            repeat: event.repeat,
        });
    }

    /// Processes a [`RawKeyEvent`]. Auto-repeat events are ignored so a held
    /// key registers exactly one just-pressed edge.
    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                self.held.insert(event.key);
                self.just_pressed.insert(event.key);
            }
            ElementState::Released => {
                self.held.remove(&event.key);
            }
        }
    }

    /// Accumulates a raw pointer motion delta. Ignored unless captured.
    pub fn on_raw_motion(&mut self, dx: f64, dy: f64) {
        if self.captured {
            self.look_delta += Vec2::new(dx as f32, dy as f32);
        }
    }

    /// Sets the pointer-capture flag. The host is responsible for actually
    /// grabbing/hiding the cursor; this only gates look-delta accumulation.
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
    }

    /// Returns `true` while the key is held down.
    #[must_use]
    pub fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains(&PhysicalKey::Code(code))
    }

    /// Returns `true` only during the frame the key transitioned to pressed.
    #[must_use]
    pub fn just_pressed(&self, code: KeyCode) -> bool {
        self.just_pressed.contains(&PhysicalKey::Code(code))
    }

    /// Pointer motion accumulated this frame (pixels; zero while uncaptured).
    #[must_use]
    pub fn look_delta(&self) -> Vec2 {
        self.look_delta
    }

    /// Whether the pointer is currently captured for mouse-look.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Clears the just-pressed set and the look delta. Call at end of frame.
    pub fn clear_transients(&mut self) {
        self.just_pressed.clear();
        self.look_delta = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to build a [`RawKeyEvent`] for testing.
    fn raw(code: KeyCode, state: ElementState, repeat: bool) -> RawKeyEvent {
        RawKeyEvent {
            key: PhysicalKey::Code(code),
            state,
            repeat,
        }
    }

    #[test]
    fn test_initial_state_nothing_held() {
        let input = InputState::new();
        for code in [KeyCode::KeyW, KeyCode::Space, KeyCode::KeyF, KeyCode::KeyC] {
            assert!(!input.is_held(code));
            assert!(!input.just_pressed(code));
        }
        assert_eq!(input.look_delta(), Vec2::ZERO);
        assert!(!input.is_captured());
    }

    #[test]
    fn test_press_sets_held_and_edge() {
        let mut input = InputState::new();
        input.process_raw(raw(KeyCode::KeyW, ElementState::Pressed, false));
        assert!(input.is_held(KeyCode::KeyW));
        assert!(input.just_pressed(KeyCode::KeyW));
    }

    #[test]
    fn test_edge_lasts_one_frame_only() {
        let mut input = InputState::new();
        input.process_raw(raw(KeyCode::KeyF, ElementState::Pressed, false));
        assert!(input.just_pressed(KeyCode::KeyF));
        input.clear_transients();
        assert!(!input.just_pressed(KeyCode::KeyF));
        assert!(input.is_held(KeyCode::KeyF), "held must survive the clear");
    }

    #[test]
    fn test_release_clears_held() {
        let mut input = InputState::new();
        input.process_raw(raw(KeyCode::KeyA, ElementState::Pressed, false));
        input.process_raw(raw(KeyCode::KeyA, ElementState::Released, false));
        assert!(!input.is_held(KeyCode::KeyA));
    }

    #[test]
    fn test_repeat_events_ignored() {
        let mut input = InputState::new();
        input.process_raw(raw(KeyCode::KeyC, ElementState::Pressed, false));
        input.clear_transients();
        input.process_raw(raw(KeyCode::KeyC, ElementState::Pressed, true));
        assert!(
            !input.just_pressed(KeyCode::KeyC),
            "auto-repeat must not produce a second edge"
        );
    }

    #[test]
    fn test_look_delta_requires_capture() {
        let mut input = InputState::new();
        input.on_raw_motion(10.0, -5.0);
        assert_eq!(input.look_delta(), Vec2::ZERO);

        input.set_captured(true);
        input.on_raw_motion(10.0, -5.0);
        input.on_raw_motion(2.0, 1.0);
        assert_eq!(input.look_delta(), Vec2::new(12.0, -4.0));
    }

    #[test]
    fn test_look_delta_resets_each_frame() {
        let mut input = InputState::new();
        input.set_captured(true);
        input.on_raw_motion(3.0, 4.0);
        input.clear_transients();
        assert_eq!(input.look_delta(), Vec2::ZERO);
    }
}
