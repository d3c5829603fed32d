//! Interaction layer: view-ray target detection and the lever pull
//! state machine with its two-phase timed rotation.

pub mod detector;
pub mod lever;
pub mod tween;

pub use detector::{INTERACT_DISTANCE, InteractionDetector, ProxyVolume};
pub use lever::{LEVER_REWARD, Lever, PULL_ANGLE, PULL_SECS};
pub use tween::{Easing, Tween};
