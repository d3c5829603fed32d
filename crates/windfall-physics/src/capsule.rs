//! Player collision volume: a capsule (swept sphere) defined by a segment
//! plus radius.

use glam::Vec3;

/// The player's collision capsule.
///
/// `start` is the lower segment endpoint, `end` the upper one. Outside an
/// explicit [`reset_to`](Self::reset_to), the radius and segment length are
/// constant: normal motion translates both endpoints by the same vector.
#[derive(Debug, Clone, PartialEq)]
pub struct CapsuleBody {
    /// Lower endpoint of the capsule segment.
    pub start: Vec3,
    /// Upper endpoint of the capsule segment.
    pub end: Vec3,
    /// Capsule radius. Non-negative.
    pub radius: f32,
}

impl CapsuleBody {
    /// Creates a capsule from its segment endpoints and radius.
    #[must_use]
    pub fn new(start: Vec3, end: Vec3, radius: f32) -> Self {
        debug_assert!(radius >= 0.0, "capsule radius must be non-negative");
        Self { start, end, radius }
    }

    /// Translates both endpoints by `delta`, preserving segment length.
    pub fn translate(&mut self, delta: Vec3) {
        self.start += delta;
        self.end += delta;
    }

    /// Hard-resets the capsule to another pose. Used only by out-of-bounds
    /// recovery; this is the one place radius and length may change.
    pub fn reset_to(&mut self, pose: &CapsuleBody) {
        self.start = pose.start;
        self.end = pose.end;
        self.radius = pose.radius;
    }

    /// Length of the capsule's inner segment.
    #[must_use]
    pub fn segment_length(&self) -> f32 {
        (self.end - self.start).length()
    }
}
