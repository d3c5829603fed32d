//! First-person player controller: sub-stepped motion integration,
//! collision resolution, and out-of-bounds recovery.
//!
//! Each frame is integrated in [`STEPS_PER_FRAME`] equal sub-steps. A
//! sub-step applies exponential damping, gravity (airborne only), input
//! acceleration, translates the capsule, and resolves collisions against the
//! level before the next sub-step begins.

use glam::Vec3;
use tracing::debug;

use crate::capsule::CapsuleBody;
use crate::level_index::LevelIndex;

/// Number of integration sub-steps per frame.
pub const STEPS_PER_FRAME: u32 = 2;

/// Vertical offset from the capsule's upper endpoint to the viewpoint.
pub const EYE_OFFSET: f32 = 0.6;

/// Ignore push-out below this depth; it is numerical noise.
const MIN_PUSH_DEPTH: f32 = 1e-10;

/// Spawn pose of the player capsule. Eye height works out to 1.6.
const SPAWN_START: Vec3 = Vec3::new(0.0, 0.35, 0.0);
const SPAWN_END: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const SPAWN_RADIUS: f32 = 0.35;

/// Movement tuning parameters.
///
/// Defaults match the shipped game feel; tests rely on them.
#[derive(Debug, Clone)]
pub struct MovementTuning {
    /// Downward acceleration in units/s² while airborne.
    pub gravity: f32,
    /// Instant upward velocity set by a jump.
    pub jump_speed: f32,
    /// Input acceleration scale while on the floor.
    pub floor_accel: f32,
    /// Input acceleration scale while airborne.
    pub air_accel: f32,
    /// Viewpoint height at or below which the player is teleported to spawn.
    pub fall_reset_y: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            gravity: 30.0,
            jump_speed: 10.0,
            floor_accel: 25.0,
            air_accel: 8.0,
            fall_reset_y: -25.0,
        }
    }
}

/// One frame's movement command, already resolved into world space.
#[derive(Debug, Clone, Copy)]
pub struct MoveCommand {
    /// Horizontal acceleration direction (sum of the held move keys' basis
    /// vectors; not normalized, so diagonals accelerate faster on purpose).
    pub accel_dir: Vec3,
    /// Whether the jump key is held.
    pub jump: bool,
}

impl MoveCommand {
    /// A command with no movement input.
    #[must_use]
    pub fn coast() -> Self {
        Self {
            accel_dir: Vec3::ZERO,
            jump: false,
        }
    }
}

/// Player movement state: capsule, velocity, and floor contact flag.
#[derive(Debug, Clone)]
pub struct PlayerController {
    /// The player's collision capsule.
    pub capsule: CapsuleBody,
    /// World-space velocity in units/second. Persists across frames.
    pub velocity: Vec3,
    /// Whether the most recent sub-step ended with an upward contact normal.
    pub on_floor: bool,
    tuning: MovementTuning,
}

impl PlayerController {
    /// Creates a controller at the spawn pose with the given tuning.
    #[must_use]
    pub fn new(tuning: MovementTuning) -> Self {
        Self {
            capsule: Self::spawn_pose(),
            velocity: Vec3::ZERO,
            on_floor: false,
            tuning,
        }
    }

    /// The fixed spawn capsule pose.
    #[must_use]
    pub fn spawn_pose() -> CapsuleBody {
        CapsuleBody::new(SPAWN_START, SPAWN_END, SPAWN_RADIUS)
    }

    /// Viewpoint position: capsule top plus the fixed eye offset.
    #[must_use]
    pub fn eye_position(&self) -> Vec3 {
        self.capsule.end + Vec3::Y * EYE_OFFSET
    }

    /// Advances velocity and position across [`STEPS_PER_FRAME`] sub-steps,
    /// resolving collisions after each one.
    pub fn integrate(&mut self, level: &LevelIndex, cmd: &MoveCommand, frame_dt: f32) {
        let sub_dt = frame_dt / STEPS_PER_FRAME as f32;

        for _ in 0..STEPS_PER_FRAME {
            let mut damping = (-4.0 * sub_dt).exp() - 1.0;
            if !self.on_floor {
                self.velocity.y -= self.tuning.gravity * sub_dt;
                // Weak damping in the air keeps horizontal air control
                // responsive while gravity dominates vertical motion.
                damping *= 0.1;
            }
            self.velocity += self.velocity * damping;

            // Input speed scales with the FULL frame dt, not the sub-step dt.
            // The ratio is part of the movement feel; do not normalize it.
            let accel = if self.on_floor {
                self.tuning.floor_accel
            } else {
                self.tuning.air_accel
            };
            self.velocity += cmd.accel_dir * (frame_dt * accel);
            if cmd.jump && self.on_floor {
                self.velocity.y = self.tuning.jump_speed;
            }

            self.capsule.translate(self.velocity * sub_dt);
            self.resolve_collisions(level);
        }
    }

    /// Queries the level and reacts to the reported contact: reclassifies
    /// floor state, cancels the penetrating velocity component on non-floor
    /// surfaces, and pushes the capsule out by the reported depth.
    ///
    /// Single pass per sub-step; overlapping surfaces beyond the deepest
    /// contact are corrected on the next sub-step.
    fn resolve_collisions(&mut self, level: &LevelIndex) {
        self.on_floor = false;
        let Some(contact) = level.capsule_contact(&self.capsule) else {
            return;
        };

        self.on_floor = contact.normal.y > 0.0;
        if !self.on_floor {
            // Cancel the component into the surface; sliding is preserved.
            self.velocity -= contact.normal * contact.normal.dot(self.velocity);
        }
        if contact.depth >= MIN_PUSH_DEPTH {
            self.capsule.translate(contact.normal * contact.depth);
        }
    }

    /// Teleports the player back to spawn once the viewpoint has fallen past
    /// the reset threshold. Returns `true` if a reset happened so the caller
    /// can also reset the view orientation. Velocity is left untouched.
    pub fn recover_if_out_of_bounds(&mut self) -> bool {
        if self.eye_position().y > self.tuning.fall_reset_y {
            return false;
        }
        debug!(eye_y = self.eye_position().y, "player fell out of bounds, respawning");
        self.capsule.reset_to(&Self::spawn_pose());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level_index::LevelIndex;

    const DT: f32 = 1.0 / 60.0;

    /// A 50x50 floor quad at y = 0, face normal up.
    fn flat_floor() -> LevelIndex {
        let vertices = vec![
            Vec3::new(-25.0, 0.0, -25.0),
            Vec3::new(25.0, 0.0, 25.0),
            Vec3::new(25.0, 0.0, -25.0),
            Vec3::new(-25.0, 0.0, 25.0),
        ];
        LevelIndex::new(vertices, vec![[0, 1, 2], [0, 3, 1]]).expect("floor mesh must build")
    }

    /// Floor plus a wall at z = -2 facing the spawn point (+Z normal).
    fn floor_and_wall() -> LevelIndex {
        let vertices = vec![
            Vec3::new(-25.0, 0.0, -25.0),
            Vec3::new(25.0, 0.0, 25.0),
            Vec3::new(25.0, 0.0, -25.0),
            Vec3::new(-25.0, 0.0, 25.0),
            Vec3::new(-5.0, 0.0, -2.0),
            Vec3::new(5.0, 0.0, -2.0),
            Vec3::new(5.0, 3.0, -2.0),
            Vec3::new(-5.0, 3.0, -2.0),
        ];
        let indices = vec![[0, 1, 2], [0, 3, 1], [4, 5, 6], [4, 6, 7]];
        LevelIndex::new(vertices, indices).expect("wall mesh must build")
    }

    fn settled_controller(level: &LevelIndex) -> PlayerController {
        let mut player = PlayerController::new(MovementTuning::default());
        for _ in 0..30 {
            player.integrate(level, &MoveCommand::coast(), DT);
        }
        assert!(player.on_floor, "player should settle onto the floor");
        player
    }

    #[test]
    fn test_damping_factor_stays_in_range() {
        for dt in [1e-6, 1e-3, DT, 0.05, 0.25, 1.0, 10.0] {
            let damping = (-4.0_f32 * dt).exp() - 1.0;
            assert!(damping > -1.0, "damping {damping} out of range for dt {dt}");
            assert!(damping <= 0.0, "damping {damping} out of range for dt {dt}");
        }
    }

    #[test]
    fn test_damping_never_increases_grounded_speed() {
        let level = flat_floor();
        let mut player = settled_controller(&level);
        player.velocity = Vec3::new(5.0, 0.0, 0.0);

        let mut previous = player.velocity.length();
        for _ in 0..60 {
            player.integrate(&level, &MoveCommand::coast(), DT);
            let speed = player.velocity.length();
            assert!(
                speed <= previous + 1e-5,
                "coasting speed must not grow: {previous} -> {speed}"
            );
            previous = speed;
        }
        assert!(previous < 5.0, "speed should have decayed from 5.0, got {previous}");
    }

    #[test]
    fn test_gravity_skipped_while_on_floor() {
        let level = flat_floor();
        let mut player = settled_controller(&level);
        let rest_y = player.capsule.start.y;

        for _ in 0..120 {
            player.integrate(&level, &MoveCommand::coast(), DT);
            assert!(player.on_floor);
        }
        // No gravity accumulation: the capsule stays put on the floor.
        assert!(
            (player.capsule.start.y - rest_y).abs() < 1e-2,
            "grounded capsule drifted: {rest_y} -> {}",
            player.capsule.start.y
        );
        assert!(player.velocity.y.abs() < 0.5);
    }

    #[test]
    fn test_gravity_applies_in_air() {
        let level = flat_floor();
        let mut player = PlayerController::new(MovementTuning::default());
        player.capsule.translate(Vec3::Y * 10.0);

        player.integrate(&level, &MoveCommand::coast(), DT);
        assert!(!player.on_floor);
        assert!(
            player.velocity.y < -0.4,
            "airborne player should accelerate downward, vy = {}",
            player.velocity.y
        );
    }

    #[test]
    fn test_jump_only_fires_on_floor() {
        let level = flat_floor();
        let mut player = PlayerController::new(MovementTuning::default());
        player.capsule.translate(Vec3::Y * 10.0);

        let cmd = MoveCommand {
            accel_dir: Vec3::ZERO,
            jump: true,
        };
        player.integrate(&level, &cmd, DT);
        assert!(
            player.velocity.y < 0.0,
            "airborne jump must be ignored, vy = {}",
            player.velocity.y
        );
    }

    #[test]
    fn test_jump_sets_upward_velocity() {
        let level = flat_floor();
        let mut player = settled_controller(&level);

        let cmd = MoveCommand {
            accel_dir: Vec3::ZERO,
            jump: true,
        };
        player.integrate(&level, &cmd, DT);
        assert!(
            player.velocity.y > 9.0,
            "jump should set vy near 10, got {}",
            player.velocity.y
        );

        // Rises over the next few frames.
        let before = player.capsule.end.y;
        for _ in 0..10 {
            player.integrate(&level, &MoveCommand::coast(), DT);
        }
        assert!(player.capsule.end.y > before + 0.5);
    }

    #[test]
    fn test_forward_walk_displacement_monotonic() {
        let level = flat_floor();
        let mut player = settled_controller(&level);

        let cmd = MoveCommand {
            accel_dir: Vec3::NEG_Z,
            jump: false,
        };
        let mut previous_z = player.capsule.end.z;
        for tick in 0..60 {
            player.integrate(&level, &cmd, DT);
            assert!(player.on_floor, "walking on a flat floor must stay grounded");
            let z = player.capsule.end.z;
            assert!(z < previous_z, "displacement must grow every tick (tick {tick})");
            previous_z = z;
        }
        assert!(previous_z < -1.0, "one second of walking should cover ground");
    }

    #[test]
    fn test_push_out_leaves_capsule_clear_of_floor() {
        let level = flat_floor();
        let mut player = PlayerController::new(MovementTuning::default());
        // Sink the capsule 0.2 into the floor.
        player.capsule.translate(Vec3::new(0.0, -0.2, 0.0));
        let contact = level
            .capsule_contact(&player.capsule)
            .expect("sunken capsule must contact");
        assert!(contact.depth > 0.1);

        player.resolve_collisions(&level);
        let after = level
            .capsule_contact(&player.capsule)
            .expect("resting contact expected after push-out");
        assert!(
            after.depth < 1e-3,
            "post-resolution penetration should be ~0, got {}",
            after.depth
        );
    }

    #[test]
    fn test_wall_contact_cancels_normal_velocity_only() {
        let level = floor_and_wall();
        let mut player = PlayerController::new(MovementTuning::default());
        // Place the capsule overlapping the wall at z = -2, well above the floor.
        player.capsule = CapsuleBody::new(
            Vec3::new(0.0, 1.0, -1.75),
            Vec3::new(0.0, 1.65, -1.75),
            0.35,
        );
        player.velocity = Vec3::new(1.0, 0.0, -5.0);

        player.resolve_collisions(&level);
        assert!(!player.on_floor, "a vertical wall is not a floor");
        assert!(
            player.velocity.z.abs() < 1e-3,
            "into-wall component should be cancelled, vz = {}",
            player.velocity.z
        );
        assert!(
            (player.velocity.x - 1.0).abs() < 1e-3,
            "tangential component should be preserved, vx = {}",
            player.velocity.x
        );
        assert!(player.capsule.start.z > -1.75, "capsule should be pushed out of the wall");
    }

    #[test]
    fn test_fall_recovery_restores_spawn_pose() {
        let mut player = PlayerController::new(MovementTuning::default());
        player.capsule.translate(Vec3::new(7.0, -40.0, -3.0));
        player.velocity = Vec3::new(4.0, -30.0, 1.0);

        assert!(player.recover_if_out_of_bounds());
        assert_eq!(player.capsule, PlayerController::spawn_pose());
        assert_eq!(player.eye_position(), Vec3::new(0.0, 1.6, 0.0));

        // Back in bounds: the check is now a no-op.
        assert!(!player.recover_if_out_of_bounds());
    }

    #[test]
    fn test_recovery_threshold_is_exclusive_above() {
        let mut player = PlayerController::new(MovementTuning::default());
        // Eye sits at capsule.end.y + 0.6; put it just above the threshold.
        player.capsule.translate(Vec3::Y * (-25.0 - 1.55));
        assert!(!player.recover_if_out_of_bounds(), "eye above -25 must not reset");

        player.capsule.translate(Vec3::Y * -0.1);
        assert!(player.recover_if_out_of_bounds(), "eye below -25 must reset");
    }
}
