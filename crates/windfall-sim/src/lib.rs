//! The simulation: owns all mutable game state and advances it one frame at
//! a time. Single-threaded and frame-driven; the renderer and UI observe the
//! state after each tick, they never mutate it.

pub mod level;
pub mod sim;
pub mod state;
pub mod ui;
pub mod view;

pub use level::{LEVER_POSITION, LevelGeometry, demo_level, lever_proxy};
pub use sim::{MAX_TICK_DT, Simulation};
pub use state::SimulationState;
pub use ui::{NullDisplay, UiDisplay};
pub use view::{ViewOrientation, ViewPose};
