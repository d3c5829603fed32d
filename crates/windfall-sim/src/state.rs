//! All mutable simulation state, gathered in one owned struct.
//!
//! Nothing here is global: the [`SimulationState`] is owned by the
//! [`crate::Simulation`] controller and passed by reference to component
//! calls.

use windfall_config::Config;
use windfall_economy::Ledger;
use windfall_interact::{InteractionDetector, Lever, ProxyVolume};
use windfall_physics::{MovementTuning, PlayerController};

use crate::view::ViewOrientation;

/// The complete mutable state of one game session.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Player capsule, velocity, and floor flag.
    pub player: PlayerController,
    /// First-person view orientation.
    pub view: ViewOrientation,
    /// Lever highlight detector.
    pub detector: InteractionDetector,
    /// The money lever and its pull animation.
    pub lever: Lever,
    /// Currency ledger.
    pub ledger: Ledger,
    /// Whether the interaction prompt is currently shown, for edge detection.
    pub prompt_shown: bool,
}

impl SimulationState {
    /// Creates fresh session state from config and the lever proxy.
    #[must_use]
    pub fn new(config: &Config, lever_proxy: ProxyVolume) -> Self {
        let tuning = MovementTuning {
            gravity: config.movement.gravity,
            jump_speed: config.movement.jump_speed,
            floor_accel: config.movement.floor_accel,
            air_accel: config.movement.air_accel,
            fall_reset_y: config.movement.fall_reset_y,
        };
        Self {
            player: PlayerController::new(tuning),
            view: ViewOrientation::new(config.input.mouse_sensitivity, config.input.invert_y),
            detector: InteractionDetector::new(lever_proxy),
            lever: Lever::new(0.0),
            ledger: Ledger::new(),
            prompt_shown: false,
        }
    }
}
