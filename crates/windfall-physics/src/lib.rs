//! Player movement physics: capsule body, static level collision queries,
//! and the sub-stepped first-person controller.
//!
//! The level is a triangle mesh wrapped behind [`LevelIndex`], which exposes
//! the one query the controller needs: capsule-vs-geometry contact with a
//! surface normal and penetration depth. Shape queries are delegated to
//! Rapier's Parry module rather than hand-rolled.

pub mod capsule;
pub mod controller;
pub mod level_index;

pub use capsule::CapsuleBody;
pub use controller::{MoveCommand, MovementTuning, PlayerController, STEPS_PER_FRAME};
pub use level_index::{LevelIndex, LevelIndexError, SurfaceContact};
