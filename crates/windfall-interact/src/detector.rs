//! View-ray interaction detection.
//!
//! Casts a ray from the viewpoint along its forward direction against an
//! interactive object's proxy volume, and exposes the resulting highlight
//! state. Stateless per frame aside from the boolean; no hysteresis.

use glam::Vec3;
use rapier3d::parry::math::{Pose3, Vector};
use rapier3d::parry::query::{Ray, RayCast};
use rapier3d::parry::shape::Cuboid;

/// Maximum viewpoint-to-target distance at which interaction is offered.
pub const INTERACT_DISTANCE: f32 = 3.0;

/// Axis-aligned box standing in for an interactive model's collision shape.
#[derive(Debug, Clone)]
pub struct ProxyVolume {
    shape: Cuboid,
    center: Vec3,
}

impl ProxyVolume {
    /// Creates a proxy box from its world-space center and half extents.
    #[must_use]
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            shape: Cuboid::new(Vector::new(half_extents.x, half_extents.y, half_extents.z)),
            center,
        }
    }

    /// World-space center of the proxy.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Distance along a ray to the proxy surface, if it is hit within
    /// `max_distance`. `dir` must be normalized for the distance to be in
    /// world units.
    #[must_use]
    pub fn hit_distance(&self, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<f32> {
        let placement = Pose3::from_translation(Vector::new(
            self.center.x,
            self.center.y,
            self.center.z,
        ));
        let ray = Ray::new(
            Vector::new(origin.x, origin.y, origin.z),
            Vector::new(dir.x, dir.y, dir.z),
        );
        self.shape.cast_ray(&placement, &ray, max_distance, true)
    }
}

/// Per-frame highlight state for one interactive target.
#[derive(Debug, Clone)]
pub struct InteractionDetector {
    proxy: ProxyVolume,
    highlighted: bool,
}

impl InteractionDetector {
    /// Creates a detector for the given proxy volume.
    #[must_use]
    pub fn new(proxy: ProxyVolume) -> Self {
        Self {
            proxy,
            highlighted: false,
        }
    }

    /// Recomputes the highlight state from the current view ray.
    /// Returns the new state.
    pub fn update(&mut self, eye: Vec3, forward: Vec3) -> bool {
        self.highlighted = self
            .proxy
            .hit_distance(eye, forward, INTERACT_DISTANCE)
            .is_some();
        self.highlighted
    }

    /// Whether the target was highlighted by the most recent update.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}
