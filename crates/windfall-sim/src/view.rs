//! First-person view orientation: yaw/pitch mouse look.

use glam::{Quat, Vec2, Vec3};

/// Base look sensitivity in radians per pixel, scaled by the user multiplier.
const BASE_SENSITIVITY: f32 = 0.003;

/// Yaw/pitch view orientation with pitch clamping.
///
/// Positive yaw rotates left (counter-clockwise from above); positive pitch
/// looks up. The pitch limit stops just short of straight up/down to avoid
/// gimbal flip.
#[derive(Debug, Clone)]
pub struct ViewOrientation {
    /// Horizontal rotation in radians.
    pub yaw: f32,
    /// Vertical rotation in radians.
    pub pitch: f32,
    sensitivity: f32,
    invert_y: bool,
    pitch_limit: f32,
}

impl ViewOrientation {
    /// Creates a forward-facing view with the given sensitivity multiplier.
    #[must_use]
    pub fn new(sensitivity_multiplier: f32, invert_y: bool) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: BASE_SENSITIVITY * sensitivity_multiplier,
            invert_y,
            pitch_limit: 89.0_f32.to_radians(),
        }
    }

    /// Applies a pointer delta to yaw and pitch, clamping pitch.
    pub fn apply_look_delta(&mut self, delta: Vec2) {
        let dy = if self.invert_y { -delta.y } else { delta.y };
        self.yaw -= delta.x * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Resets to the identity orientation (spawn facing).
    pub fn reset(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }

    /// The view rotation quaternion: yaw about Y, then pitch about X.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(-self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    /// World-space forward direction of the view.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Horizontal (Y = 0) forward and right unit vectors, so movement stays
    /// level regardless of pitch.
    #[must_use]
    pub fn horizontal_basis(&self) -> (Vec3, Vec3) {
        let rotation = self.rotation();
        let forward = rotation * Vec3::NEG_Z;
        let right = rotation * Vec3::X;
        (
            Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero(),
            Vec3::new(right.x, 0.0, right.z).normalize_or_zero(),
        )
    }
}

/// Per-frame viewpoint pose handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPose {
    /// Viewpoint position in world space.
    pub position: Vec3,
    /// Viewpoint orientation.
    pub rotation: Quat,
}
