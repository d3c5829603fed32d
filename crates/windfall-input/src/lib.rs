//! Input abstraction: frame-coherent keyboard/mouse tracking and the per-tick
//! movement/interaction intent the simulation consumes.

pub mod intent;
pub mod state;

pub use intent::{PlayerIntent, sample_intent};
pub use state::{InputState, RawKeyEvent};
