//! Triangle-mesh geometry layer for the shape catalog.
//!
//! Every catalog primitive is generated parametrically as an indexed
//! [`TriMesh`]. Factories are pure: each call allocates a fresh mesh.

use glam::Vec3;
use shape_core::{ShapeDescriptor, ShapeKind};
use std::collections::HashSet;

mod primitives;

/// Indexed triangle mesh with per-vertex normals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl TriMesh {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Radius of the smallest origin-centered sphere containing the mesh.
    pub fn bounds_radius(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| Vec3::from_array(*p).length())
            .fold(0.0, f32::max)
    }
}

/// Builds a fresh mesh for a primitive kind.
pub fn build_shape(kind: &ShapeKind) -> TriMesh {
    match *kind {
        ShapeKind::Sphere {
            radius,
            segments,
            rings,
        } => primitives::sphere(radius, segments, rings),
        ShapeKind::Box {
            width,
            height,
            depth,
        } => primitives::cuboid(width, height, depth),
        ShapeKind::Cylinder {
            radius,
            height,
            segments,
        } => primitives::cylinder(radius, height, segments),
        ShapeKind::Cone {
            radius,
            height,
            segments,
        } => primitives::cone(radius, height, segments),
        ShapeKind::Torus {
            major_radius,
            tube_radius,
            major_segments,
            tube_segments,
        } => primitives::torus(major_radius, tube_radius, major_segments, tube_segments),
        ShapeKind::TorusKnot {
            p,
            q,
            radius,
            tube_radius,
            path_segments,
            tube_segments,
        } => primitives::torus_knot(p, q, radius, tube_radius, path_segments, tube_segments),
        ShapeKind::Tetrahedron { radius } => primitives::tetrahedron(radius),
        ShapeKind::Octahedron { radius } => primitives::octahedron(radius),
        ShapeKind::Icosahedron { radius } => primitives::icosahedron(radius),
    }
}

/// The catalog entry's geometry factory.
pub fn shape_geometry(shape: &ShapeDescriptor) -> TriMesh {
    build_shape(&shape.kind)
}

/// Flattened line-list indices for the unique undirected edges of a
/// triangulation, in first-seen order. Used by the wireframe pipeline.
pub fn edge_indices(indices: &[u32]) -> Vec<u32> {
    let mut seen = HashSet::new();
    let mut edges = Vec::with_capacity(indices.len() * 2);
    for tri in indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            if seen.insert((a.min(b), a.max(b))) {
                edges.push(a);
                edges.push(b);
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use shape_core::CATALOG;

    fn assert_well_formed(mesh: &TriMesh, name: &str) {
        assert!(!mesh.is_empty(), "{name}: empty mesh");
        assert_eq!(
            mesh.positions.len(),
            mesh.normals.len(),
            "{name}: position/normal mismatch"
        );
        assert_eq!(mesh.indices.len() % 3, 0, "{name}: ragged index buffer");
        let vertex_count = mesh.positions.len() as u32;
        assert!(
            mesh.indices.iter().all(|&i| i < vertex_count),
            "{name}: index out of bounds"
        );
        for n in &mesh.normals {
            let len = Vec3::from_array(*n).length();
            assert!(
                (len - 1.0).abs() < 1.0e-3,
                "{name}: normal length {len} not unit"
            );
        }
    }

    #[test]
    fn every_catalog_factory_produces_a_well_formed_mesh() {
        for shape in CATALOG {
            let mesh = shape_geometry(shape);
            assert_well_formed(&mesh, shape.name);
        }
    }

    #[test]
    fn factories_are_pure() {
        for shape in CATALOG {
            let first = shape_geometry(shape);
            let second = shape_geometry(shape);
            assert_eq!(first, second, "{}: factory is not deterministic", shape.name);
        }
    }

    #[test]
    fn sphere_positions_lie_on_the_radius() {
        let mesh = build_shape(&ShapeKind::Sphere {
            radius: 2.0,
            segments: 16,
            rings: 8,
        });
        for p in &mesh.positions {
            let r = Vec3::from_array(*p).length();
            assert!((r - 2.0).abs() < 1.0e-4);
        }
    }

    #[test]
    fn cuboid_has_six_quad_faces() {
        let mesh = build_shape(&ShapeKind::Box {
            width: 1.0,
            height: 2.0,
            depth: 3.0,
        });
        assert_eq!(mesh.positions.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        let radius = (0.5f32.powi(2) + 1.0 + 1.5f32.powi(2)).sqrt();
        assert!((mesh.bounds_radius() - radius).abs() < 1.0e-4);
    }

    #[test]
    fn torus_stays_within_its_outer_radius() {
        let mesh = build_shape(&ShapeKind::Torus {
            major_radius: 1.0,
            tube_radius: 0.4,
            major_segments: 24,
            tube_segments: 12,
        });
        assert!(mesh.bounds_radius() <= 1.4 + 1.0e-4);
        assert!(mesh.bounds_radius() > 1.3);
    }

    #[test]
    fn platonic_solids_have_expected_face_counts() {
        let tetra = build_shape(&ShapeKind::Tetrahedron { radius: 1.0 });
        assert_eq!(tetra.triangle_count(), 4);
        let octa = build_shape(&ShapeKind::Octahedron { radius: 1.0 });
        assert_eq!(octa.triangle_count(), 8);
        let icosa = build_shape(&ShapeKind::Icosahedron { radius: 1.0 });
        assert_eq!(icosa.triangle_count(), 20);
        for mesh in [&tetra, &octa, &icosa] {
            for p in &mesh.positions {
                assert!((Vec3::from_array(*p).length() - 1.0).abs() < 1.0e-4);
            }
        }
    }

    #[test]
    fn edge_extraction_dedupes_shared_edges() {
        // Two triangles sharing the edge (1, 2).
        let edges = edge_indices(&[0, 1, 2, 2, 1, 3]);
        assert_eq!(edges.len(), 10);
        let unique: HashSet<(u32, u32)> = edges
            .chunks_exact(2)
            .map(|e| (e[0].min(e[1]), e[0].max(e[1])))
            .collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn tetrahedron_wireframe_keeps_three_edges_per_face() {
        // Flat shading duplicates vertices, so no edges are shared between
        // faces at the index level.
        let mesh = build_shape(&ShapeKind::Tetrahedron { radius: 1.0 });
        let edges = edge_indices(&mesh.indices);
        assert_eq!(edges.len(), 4 * 3 * 2);
    }
}
