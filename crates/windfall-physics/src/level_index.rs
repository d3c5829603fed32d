//! Static level collision index.
//!
//! [`LevelIndex`] owns the level's triangle mesh inside Parry's BVH-backed
//! `TriMesh` and answers capsule contact queries against it. Public types
//! speak glam; nalgebra conversion happens at this boundary only.

use glam::Vec3;
use rapier3d::parry::math::{Pose3, Vector};
use rapier3d::parry::query;
use rapier3d::parry::shape::{Capsule, TriMesh};

use crate::capsule::CapsuleBody;

/// Contact margin for capsule queries. A capsule resting exactly on a surface
/// keeps reporting a zero-depth contact instead of flickering in and out of
/// floor state across sub-steps.
const CONTACT_MARGIN: f32 = 1e-3;

/// A single capsule-vs-level contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceContact {
    /// Surface normal at the contact, pointing away from the level geometry.
    pub normal: Vec3,
    /// Penetration depth along the normal. Zero for grazing/resting contact.
    pub depth: f32,
}

/// Errors raised while building the level index. These are startup
/// preconditions: the simulation refuses to run without valid geometry.
#[derive(Debug, thiserror::Error)]
pub enum LevelIndexError {
    /// The level mesh has no triangles.
    #[error("level mesh has no triangles")]
    EmptyMesh,

    /// Parry rejected the triangle soup (degenerate or out-of-range indices).
    #[error("level mesh rejected: {0}")]
    InvalidMesh(String),
}

/// Precomputed spatial index over static level geometry.
pub struct LevelIndex {
    mesh: TriMesh,
}

impl LevelIndex {
    /// Builds the index from a triangle soup.
    ///
    /// # Errors
    /// Returns [`LevelIndexError`] if the soup is empty or malformed.
    pub fn new(vertices: Vec<Vec3>, indices: Vec<[u32; 3]>) -> Result<Self, LevelIndexError> {
        if indices.is_empty() {
            return Err(LevelIndexError::EmptyMesh);
        }
        let points: Vec<Vector> = vertices
            .iter()
            .map(|v| Vector::new(v.x, v.y, v.z))
            .collect();
        let mesh = TriMesh::new(points, indices)
            .map_err(|e| LevelIndexError::InvalidMesh(format!("{e:?}")))?;
        Ok(Self { mesh })
    }

    /// Number of triangles in the index.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.mesh.indices().len()
    }

    /// Queries the deepest capsule-vs-level contact, if any.
    ///
    /// Returns `None` when the capsule is clear of all geometry. A resting
    /// capsule (distance within [`CONTACT_MARGIN`]) yields a contact with
    /// `depth == 0`.
    #[must_use]
    pub fn capsule_contact(&self, capsule: &CapsuleBody) -> Option<SurfaceContact> {
        let shape = Capsule::new(
            Vector::new(capsule.start.x, capsule.start.y, capsule.start.z),
            Vector::new(capsule.end.x, capsule.end.y, capsule.end.z),
            capsule.radius,
        );
        let identity = Pose3::IDENTITY;
        let contact =
            query::contact(&identity, &self.mesh, &identity, &shape, CONTACT_MARGIN).ok()??;

        // `normal1` is the level-side normal, pointing toward the capsule;
        // `dist` is negative when penetrating.
        let normal = Vec3::new(contact.normal1.x, contact.normal1.y, contact.normal1.z);
        let depth = (-contact.dist).max(0.0);
        Some(SurfaceContact { normal, depth })
    }
}
