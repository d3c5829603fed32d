//! Per-frame simulation orchestration.
//!
//! One [`Simulation::tick`] per rendered frame: sample input intent, run the
//! sub-stepped movement integration, recover from fall-through, refresh the
//! lever highlight, fire and advance the pull animation, and process a
//! collect trigger. Everything happens synchronously on the caller's thread.

use glam::Quat;
use tracing::{debug, info};
use windfall_config::Config;
use windfall_input::PlayerIntent;
use windfall_interact::ProxyVolume;
use windfall_physics::{LevelIndex, LevelIndexError, MoveCommand};

use crate::level::{self, LevelGeometry};
use crate::state::SimulationState;
use crate::ui::UiDisplay;
use crate::view::ViewPose;

/// Upper bound on a single tick's dt. Long hitches integrate as slow motion
/// instead of letting the capsule tunnel through geometry.
pub const MAX_TICK_DT: f32 = 0.05;

/// The game simulation: static level index plus the session state.
pub struct Simulation {
    level: LevelIndex,
    state: SimulationState,
}

impl Simulation {
    /// Builds the demo level and a fresh session.
    ///
    /// # Errors
    /// Fails fast if the level geometry is rejected; the loop must not start
    /// without a collision index.
    pub fn new(config: &Config) -> Result<Self, LevelIndexError> {
        Self::with_level(level::demo_level(), level::lever_proxy(), config)
    }

    /// Builds a session over caller-supplied geometry and lever proxy.
    pub fn with_level(
        geometry: LevelGeometry,
        lever_proxy: ProxyVolume,
        config: &Config,
    ) -> Result<Self, LevelIndexError> {
        let state = SimulationState::new(config, lever_proxy);
        let level = LevelIndex::new(geometry.vertices, geometry.indices)?;
        info!(triangles = level.triangle_count(), "level index built");
        Ok(Self { level, state })
    }

    /// Advances the simulation by one frame.
    pub fn tick(&mut self, intent: &PlayerIntent, frame_dt: f32, ui: &mut dyn UiDisplay) {
        let dt = frame_dt.clamp(0.0, MAX_TICK_DT);
        let state = &mut self.state;

        // Look, then move in the new facing.
        state.view.apply_look_delta(intent.look);
        let (forward, right) = state.view.horizontal_basis();
        let command = MoveCommand {
            accel_dir: forward * intent.move_axes.y + right * intent.move_axes.x,
            jump: intent.jump,
        };
        state.player.integrate(&self.level, &command, dt);

        if state.player.recover_if_out_of_bounds() {
            state.view.reset();
        }

        // Lever highlight follows the view ray; prompt updates on edges only.
        let highlighted = state
            .detector
            .update(state.player.eye_position(), state.view.forward());
        if highlighted != state.prompt_shown {
            if highlighted {
                ui.show_prompt();
            } else {
                ui.hide_prompt();
            }
            state.prompt_shown = highlighted;
        }

        if intent.interact
            && let Some(reward) = state.lever.trigger(highlighted)
        {
            state.ledger.credit(reward);
            ui.set_uncollected(state.ledger.uncollected());
        }
        state.lever.update(dt);

        if intent.collect
            && let Some(transferred) = state.ledger.collect()
        {
            debug!(transferred, "earnings collected");
            ui.set_uncollected(state.ledger.uncollected());
            ui.set_collected(state.ledger.collected());
        }
    }

    /// The viewpoint pose for the renderer.
    #[must_use]
    pub fn view_pose(&self) -> ViewPose {
        ViewPose {
            position: self.state.player.eye_position(),
            rotation: self.state.view.rotation(),
        }
    }

    /// The lever model's current rotation for the renderer.
    #[must_use]
    pub fn lever_rotation(&self) -> Quat {
        self.state.lever.rotation()
    }

    /// Read access to the session state.
    #[must_use]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Mutable access to the session state (host integrations and tests).
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }
}
