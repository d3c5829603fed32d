//! The built-in demo level, produced as plain triangle-soup data.
//!
//! Stands in for an asset pipeline: a floor slab, perimeter walls, and the
//! table the money lever sits on. The lever itself is not part of the
//! collision mesh; it is reached through its interaction proxy.

use glam::Vec3;
use windfall_interact::ProxyVolume;

/// World-space center of the lever model, on top of the table.
pub const LEVER_POSITION: Vec3 = Vec3::new(0.0, 1.2, -2.4);

/// Half extents of the lever's interaction proxy.
const LEVER_HALF_EXTENTS: Vec3 = Vec3::new(0.15, 0.45, 0.15);

/// Unit-cube corner signs, indexed by the face table below.
const CORNERS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
];

/// Two triangles per box face, wound so face normals point outward.
const FACE_TRIANGLES: [[u32; 3]; 12] = [
    [0, 3, 2],
    [0, 2, 1],
    [4, 5, 6],
    [4, 6, 7],
    [0, 4, 7],
    [0, 7, 3],
    [1, 2, 6],
    [1, 6, 5],
    [0, 1, 5],
    [0, 5, 4],
    [3, 7, 6],
    [3, 6, 2],
];

/// Triangle-soup collision geometry for a level.
#[derive(Debug, Clone, Default)]
pub struct LevelGeometry {
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Triangle vertex indices.
    pub indices: Vec<[u32; 3]>,
}

impl LevelGeometry {
    /// An empty geometry buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an axis-aligned box (12 triangles, outward winding).
    pub fn push_box(&mut self, center: Vec3, half_extents: Vec3) {
        let base = self.vertices.len() as u32;
        for corner in CORNERS {
            self.vertices.push(center + corner * half_extents);
        }
        for tri in FACE_TRIANGLES {
            self.indices
                .push([base + tri[0], base + tri[1], base + tri[2]]);
        }
    }
}

/// Builds the demo room: 50x50 floor (top face at y = 0), perimeter walls,
/// and the lever table 2.4 units ahead of spawn.
#[must_use]
pub fn demo_level() -> LevelGeometry {
    let mut geometry = LevelGeometry::new();

    // Floor slab.
    geometry.push_box(Vec3::new(0.0, -0.5, 0.0), Vec3::new(25.0, 0.5, 25.0));

    // Perimeter walls.
    geometry.push_box(Vec3::new(-25.5, 2.5, 0.0), Vec3::new(0.5, 3.0, 26.0));
    geometry.push_box(Vec3::new(25.5, 2.5, 0.0), Vec3::new(0.5, 3.0, 26.0));
    geometry.push_box(Vec3::new(0.0, 2.5, -25.5), Vec3::new(26.0, 3.0, 0.5));
    geometry.push_box(Vec3::new(0.0, 2.5, 25.5), Vec3::new(26.0, 3.0, 0.5));

    // Lever table.
    geometry.push_box(Vec3::new(0.0, 0.4, LEVER_POSITION.z), Vec3::new(0.6, 0.4, 0.6));

    geometry
}

/// The lever's interaction proxy volume.
#[must_use]
pub fn lever_proxy() -> ProxyVolume {
    ProxyVolume::new(LEVER_POSITION, LEVER_HALF_EXTENTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_adds_eight_vertices_twelve_triangles() {
        let mut geometry = LevelGeometry::new();
        geometry.push_box(Vec3::ZERO, Vec3::ONE);
        assert_eq!(geometry.vertices.len(), 8);
        assert_eq!(geometry.indices.len(), 12);
    }

    #[test]
    fn test_box_indices_offset_per_box() {
        let mut geometry = LevelGeometry::new();
        geometry.push_box(Vec3::ZERO, Vec3::ONE);
        geometry.push_box(Vec3::new(5.0, 0.0, 0.0), Vec3::ONE);
        let max_index = geometry.indices.iter().flatten().copied().max().unwrap();
        assert_eq!(max_index, 15);
        // Second box's triangles all reference the second vertex block.
        assert!(geometry.indices[12..].iter().flatten().all(|&i| i >= 8));
    }

    #[test]
    fn test_box_faces_wind_outward() {
        let mut geometry = LevelGeometry::new();
        geometry.push_box(Vec3::ZERO, Vec3::ONE);
        for tri in &geometry.indices {
            let [a, b, c] = tri.map(|i| geometry.vertices[i as usize]);
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(
                normal.dot(centroid) > 0.0,
                "face normal {normal:?} should point away from the box center"
            );
        }
    }

    #[test]
    fn test_demo_level_has_six_boxes() {
        let geometry = demo_level();
        assert_eq!(geometry.vertices.len(), 48);
        assert_eq!(geometry.indices.len(), 72);
    }

    #[test]
    fn test_lever_sits_above_table() {
        let proxy = lever_proxy();
        // Table top is at y = 0.8; the proxy must straddle it from above.
        assert!(proxy.center().y - LEVER_HALF_EXTENTS.y < 0.81);
        assert!(proxy.center().y + LEVER_HALF_EXTENTS.y > 1.5);
    }
}
