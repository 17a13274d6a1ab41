//! Parametric generators for the catalog primitives.

use crate::TriMesh;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

fn push_vertex(mesh: &mut TriMesh, position: Vec3, normal: Vec3) -> u32 {
    let index = mesh.positions.len() as u32;
    mesh.positions.push(position.to_array());
    mesh.normals.push(normal.to_array());
    index
}

/// Two triangles for the grid cell (a b / c d), a above c, b above d.
fn push_grid_quad(mesh: &mut TriMesh, a: u32, b: u32, c: u32, d: u32) {
    mesh.indices.extend_from_slice(&[a, c, d]);
    mesh.indices.extend_from_slice(&[a, d, b]);
}

pub fn sphere(radius: f32, segments: u32, rings: u32) -> TriMesh {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut mesh = TriMesh::default();

    for iy in 0..=rings {
        let theta = iy as f32 / rings as f32 * PI;
        for ix in 0..=segments {
            let phi = ix as f32 / segments as f32 * TAU;
            let normal = Vec3::new(
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin(),
            );
            push_vertex(&mut mesh, normal * radius, normal.normalize_or_zero());
        }
    }

    let stride = segments + 1;
    for iy in 0..rings {
        for ix in 0..segments {
            let a = iy * stride + ix;
            let b = a + 1;
            let c = a + stride;
            let d = c + 1;
            // Skip the degenerate triangle touching each pole.
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, c, b]);
            }
            if iy != rings - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

pub fn cuboid(width: f32, height: f32, depth: f32) -> TriMesh {
    let (hx, hy, hz) = (width / 2.0, height / 2.0, depth / 2.0);
    let mut mesh = TriMesh::default();

    let mut face = |corners: [Vec3; 4], normal: Vec3| {
        let base = mesh.positions.len() as u32;
        for corner in corners {
            push_vertex(&mut mesh, corner, normal);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    };

    face(
        [
            Vec3::new(hx, -hy, -hz),
            Vec3::new(hx, hy, -hz),
            Vec3::new(hx, hy, hz),
            Vec3::new(hx, -hy, hz),
        ],
        Vec3::X,
    );
    face(
        [
            Vec3::new(-hx, -hy, hz),
            Vec3::new(-hx, hy, hz),
            Vec3::new(-hx, hy, -hz),
            Vec3::new(-hx, -hy, -hz),
        ],
        Vec3::NEG_X,
    );
    face(
        [
            Vec3::new(-hx, hy, -hz),
            Vec3::new(-hx, hy, hz),
            Vec3::new(hx, hy, hz),
            Vec3::new(hx, hy, -hz),
        ],
        Vec3::Y,
    );
    face(
        [
            Vec3::new(-hx, -hy, hz),
            Vec3::new(-hx, -hy, -hz),
            Vec3::new(hx, -hy, -hz),
            Vec3::new(hx, -hy, hz),
        ],
        Vec3::NEG_Y,
    );
    face(
        [
            Vec3::new(-hx, -hy, hz),
            Vec3::new(hx, -hy, hz),
            Vec3::new(hx, hy, hz),
            Vec3::new(-hx, hy, hz),
        ],
        Vec3::Z,
    );
    face(
        [
            Vec3::new(hx, -hy, -hz),
            Vec3::new(-hx, -hy, -hz),
            Vec3::new(-hx, hy, -hz),
            Vec3::new(hx, hy, -hz),
        ],
        Vec3::NEG_Z,
    );
    mesh
}

pub fn cylinder(radius: f32, height: f32, segments: u32) -> TriMesh {
    let segments = segments.max(3);
    let hy = height / 2.0;
    let mut mesh = TriMesh::default();

    // Side wall, seam column duplicated for a clean normal wrap.
    for iy in 0..2 {
        let y = if iy == 0 { hy } else { -hy };
        for ix in 0..=segments {
            let phi = ix as f32 / segments as f32 * TAU;
            let normal = Vec3::new(phi.cos(), 0.0, phi.sin());
            push_vertex(&mut mesh, Vec3::new(0.0, y, 0.0) + normal * radius, normal);
        }
    }
    let stride = segments + 1;
    for ix in 0..segments {
        push_grid_quad(&mut mesh, ix, ix + 1, ix + stride, ix + stride + 1);
    }

    cap(&mut mesh, radius, hy, segments, Vec3::Y);
    cap(&mut mesh, radius, -hy, segments, Vec3::NEG_Y);
    mesh
}

fn cap(mesh: &mut TriMesh, radius: f32, y: f32, segments: u32, normal: Vec3) {
    let center = push_vertex(mesh, Vec3::new(0.0, y, 0.0), normal);
    for ix in 0..=segments {
        let phi = ix as f32 / segments as f32 * TAU;
        push_vertex(
            mesh,
            Vec3::new(phi.cos() * radius, y, phi.sin() * radius),
            normal,
        );
    }
    for ix in 0..segments {
        let a = center + 1 + ix;
        if normal.y > 0.0 {
            mesh.indices.extend_from_slice(&[center, a + 1, a]);
        } else {
            mesh.indices.extend_from_slice(&[center, a, a + 1]);
        }
    }
}

pub fn cone(radius: f32, height: f32, segments: u32) -> TriMesh {
    let segments = segments.max(3);
    let hy = height / 2.0;
    let slant = (height * height + radius * radius).sqrt();
    let (ny, nr) = (radius / slant, height / slant);
    let mut mesh = TriMesh::default();

    // One apex vertex per segment, normal taken at the segment midpoint.
    for ix in 0..segments {
        let phi = (ix as f32 + 0.5) / segments as f32 * TAU;
        let normal = Vec3::new(phi.cos() * nr, ny, phi.sin() * nr);
        push_vertex(&mut mesh, Vec3::new(0.0, hy, 0.0), normal);
    }
    let base = mesh.positions.len() as u32;
    for ix in 0..=segments {
        let phi = ix as f32 / segments as f32 * TAU;
        let normal = Vec3::new(phi.cos() * nr, ny, phi.sin() * nr);
        push_vertex(
            &mut mesh,
            Vec3::new(phi.cos() * radius, -hy, phi.sin() * radius),
            normal,
        );
    }
    for ix in 0..segments {
        mesh.indices
            .extend_from_slice(&[ix, base + ix, base + ix + 1]);
    }

    cap(&mut mesh, radius, -hy, segments, Vec3::NEG_Y);
    mesh
}

pub fn torus(
    major_radius: f32,
    tube_radius: f32,
    major_segments: u32,
    tube_segments: u32,
) -> TriMesh {
    let major_segments = major_segments.max(3);
    let tube_segments = tube_segments.max(3);
    let mut mesh = TriMesh::default();

    for iu in 0..=major_segments {
        let u = iu as f32 / major_segments as f32 * TAU;
        let ring_center = Vec3::new(u.cos(), 0.0, u.sin()) * major_radius;
        for iv in 0..=tube_segments {
            let v = iv as f32 / tube_segments as f32 * TAU;
            let normal = Vec3::new(v.cos() * u.cos(), v.sin(), v.cos() * u.sin());
            push_vertex(&mut mesh, ring_center + normal * tube_radius, normal);
        }
    }

    let stride = tube_segments + 1;
    for iu in 0..major_segments {
        for iv in 0..tube_segments {
            let a = iu * stride + iv;
            push_grid_quad(&mut mesh, a, a + 1, a + stride, a + stride + 1);
        }
    }
    mesh
}

/// Point on the (p, q) torus-knot curve at parameter `u` (radians over
/// `p` full turns).
fn knot_point(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let qu = q / p * u;
    let r = radius * (2.0 + qu.cos()) * 0.5;
    Vec3::new(r * u.cos(), r * u.sin(), radius * qu.sin() * 0.5)
}

pub fn torus_knot(
    p: u32,
    q: u32,
    radius: f32,
    tube_radius: f32,
    path_segments: u32,
    tube_segments: u32,
) -> TriMesh {
    let path_segments = path_segments.max(3);
    let tube_segments = tube_segments.max(3);
    let (pf, qf) = (p.max(1) as f32, q.max(1) as f32);
    let mut mesh = TriMesh::default();

    for i in 0..=path_segments {
        let u = i as f32 / path_segments as f32 * pf * TAU;
        let center = knot_point(u, pf, qf, radius);
        let ahead = knot_point(u + 0.01, pf, qf, radius);

        // Approximate Frenet frame from the forward difference.
        let tangent = ahead - center;
        let mut bitangent = tangent.cross(ahead + center);
        let normal = bitangent.cross(tangent).normalize_or_zero();
        bitangent = bitangent.normalize_or_zero();

        for j in 0..=tube_segments {
            let v = j as f32 / tube_segments as f32 * TAU;
            let offset = normal * (-v.cos()) + bitangent * v.sin();
            push_vertex(&mut mesh, center + offset * tube_radius, offset.normalize_or_zero());
        }
    }

    let stride = tube_segments + 1;
    for i in 0..path_segments {
        for j in 0..tube_segments {
            let a = i * stride + j;
            push_grid_quad(&mut mesh, a, a + 1, a + stride, a + stride + 1);
        }
    }
    mesh
}

/// Flat-shaded polyhedron: every face gets its own vertices and normal,
/// positions normalized onto the circumsphere.
fn flat_polyhedron(vertices: &[[f32; 3]], faces: &[[usize; 3]], radius: f32) -> TriMesh {
    let mut mesh = TriMesh::default();
    for face in faces {
        let [a, b, c] = face.map(|i| Vec3::from_array(vertices[i]).normalize() * radius);
        let normal = (b - a).cross(c - a).normalize_or_zero();
        let base = mesh.positions.len() as u32;
        for p in [a, b, c] {
            push_vertex(&mut mesh, p, normal);
        }
        mesh.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
    mesh
}

pub fn tetrahedron(radius: f32) -> TriMesh {
    let vertices = [
        [1.0, 1.0, 1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ];
    let faces = [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]];
    flat_polyhedron(&vertices, &faces, radius)
}

pub fn octahedron(radius: f32) -> TriMesh {
    let vertices = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    let faces = [
        [0, 2, 4],
        [0, 4, 3],
        [0, 3, 5],
        [0, 5, 2],
        [1, 2, 5],
        [1, 5, 3],
        [1, 3, 4],
        [1, 4, 2],
    ];
    flat_polyhedron(&vertices, &faces, radius)
}

pub fn icosahedron(radius: f32) -> TriMesh {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let vertices = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    let faces = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];
    flat_polyhedron(&vertices, &faces, radius)
}
