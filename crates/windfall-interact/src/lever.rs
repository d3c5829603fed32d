//! The money lever: a debounced single-shot pull with a two-phase timed
//! rotation (forward ease-out, return ease-in).
//!
//! The machine cycles `Idle -> PullingForward -> ReturningBack -> Idle` and
//! is advanced by [`Lever::update`] from per-tick elapsed time. The reward is
//! granted at trigger time; the animation is purely cosmetic feedback.

use std::f32::consts::FRAC_PI_4;

use glam::Quat;
use tracing::debug;

use crate::tween::{Easing, Tween};

/// Currency credited per successful pull.
pub const LEVER_REWARD: f64 = 50.0;

/// Duration of each animation phase in seconds.
pub const PULL_SECS: f32 = 0.2;

/// Pitch travel of a pull, relative to the rest rotation.
pub const PULL_ANGLE: f32 = FRAC_PI_4;

/// Animation phase. The tween lives inside the phase so an idle lever
/// carries no animation state at all.
#[derive(Debug, Clone)]
enum LeverPhase {
    Idle,
    PullingForward(Tween),
    ReturningBack(Tween),
}

/// An interactive lever with rotation state and the pull state machine.
#[derive(Debug, Clone)]
pub struct Lever {
    pitch: f32,
    rest_pitch: f32,
    phase: LeverPhase,
}

impl Lever {
    /// Creates an idle lever at the given pitch.
    #[must_use]
    pub fn new(pitch: f32) -> Self {
        Self {
            pitch,
            rest_pitch: pitch,
            phase: LeverPhase::Idle,
        }
    }

    /// Attempts to start a pull. Succeeds only while the target is
    /// highlighted and the lever is idle; any other trigger is a silent
    /// no-op (rapid re-triggering is expected input, not an error).
    ///
    /// On success the reward is due immediately — before the animation has
    /// run — and the current rotation is captured as the return target.
    pub fn trigger(&mut self, highlighted: bool) -> Option<f64> {
        if !highlighted || !matches!(self.phase, LeverPhase::Idle) {
            return None;
        }
        self.rest_pitch = self.pitch;
        self.phase = LeverPhase::PullingForward(Tween::new(
            self.pitch,
            self.pitch + PULL_ANGLE,
            PULL_SECS,
            Easing::QuadOut,
        ));
        debug!("lever pulled");
        Some(LEVER_REWARD)
    }

    /// Advances the running animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        match &mut self.phase {
            LeverPhase::Idle => {}
            LeverPhase::PullingForward(tween) => {
                let finished = tween.advance(dt);
                self.pitch = tween.value();
                if finished {
                    self.phase = LeverPhase::ReturningBack(Tween::new(
                        self.pitch,
                        self.rest_pitch,
                        PULL_SECS,
                        Easing::QuadIn,
                    ));
                }
            }
            LeverPhase::ReturningBack(tween) => {
                let finished = tween.advance(dt);
                self.pitch = tween.value();
                if finished {
                    self.pitch = self.rest_pitch;
                    self.phase = LeverPhase::Idle;
                }
            }
        }
    }

    /// Whether a pull animation is in flight. Guards re-entry.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !matches!(self.phase, LeverPhase::Idle)
    }

    /// Current pitch of the lever arm.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Renderable rotation of the lever model.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch)
    }
}
