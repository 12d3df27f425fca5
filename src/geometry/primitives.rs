use super::vertex::{v, Vertex};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

pub type Geometry = (Vec<Vertex>, Vec<u32>);

pub fn sphere_mesh(radius: f32, segments: u32, rings: u32) -> Geometry {
    let segments = segments.max(3);
    let rings = rings.max(2);
    let mut vertices = Vec::with_capacity(((segments + 1) * (rings + 1)) as usize);
    let mut indices = Vec::with_capacity((segments * rings * 6) as usize);

    for ring in 0..=rings {
        let phi = PI * ring as f32 / rings as f32;
        let y = phi.cos();
        let ring_radius = phi.sin();

        for segment in 0..=segments {
            let theta = TAU * segment as f32 / segments as f32;
            let normal = [ring_radius * theta.cos(), y, ring_radius * theta.sin()];
            let pos = [normal[0] * radius, normal[1] * radius, normal[2] * radius];
            let uv = [
                segment as f32 / segments as f32,
                ring as f32 / rings as f32,
            ];
            vertices.push(v(pos, normal, uv));
        }
    }

    grid_indices(&mut indices, rings, segments);
    (vertices, indices)
}

/// Axis-aligned cube with edge length `size`, four vertices per face.
pub fn cuboid_mesh(size: f32) -> Geometry {
    let h = size * 0.5;
    // (normal, u axis, v axis) per face
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, 0.0, 1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];

    let mut vertices = Vec::with_capacity(24);
    for (normal, u_axis, v_axis) in faces {
        let n = Vec3::from(normal);
        let u = Vec3::from(u_axis);
        let w = Vec3::from(v_axis);
        for (su, sv, uv) in [
            (-1.0, -1.0, [0.0, 1.0]),
            (-1.0, 1.0, [0.0, 0.0]),
            (1.0, 1.0, [1.0, 0.0]),
            (1.0, -1.0, [1.0, 1.0]),
        ] {
            let p = (n + u * su + w * sv) * h;
            vertices.push(v(p.to_array(), normal, uv));
        }
    }

    let indices = (0..6u32)
        .flat_map(|f| {
            let o = f * 4;
            [o, o + 1, o + 2, o, o + 2, o + 3]
        })
        .collect();

    (vertices, indices)
}

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
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

/// Flat-shaded icosahedron (no subdivision) with circumradius `radius`.
pub fn icosahedron_mesh(radius: f32) -> Geometry {
    let t = (1.0 + 5f32.sqrt()) * 0.5;
    let corners = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
    .map(|c| c.normalize() * radius);

    let mut vertices = Vec::with_capacity(60);
    for [a, b, c] in ICOSAHEDRON_FACES {
        let (pa, mut pb, mut pc) = (corners[a], corners[b], corners[c]);
        let mut normal = (pb - pa).cross(pc - pa).normalize();
        if normal.dot(pa + pb + pc) < 0.0 {
            std::mem::swap(&mut pb, &mut pc);
            normal = -normal;
        }
        let n = normal.to_array();
        vertices.push(v(pa.to_array(), n, [0.0, 0.0]));
        vertices.push(v(pb.to_array(), n, [1.0, 0.0]));
        vertices.push(v(pc.to_array(), n, [0.5, 1.0]));
    }

    let indices = (0..vertices.len() as u32).collect();
    (vertices, indices)
}

/// Torus lying in the XY plane.
pub fn torus_mesh(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> Geometry {
    let radial = radial_segments.max(3);
    let tubular = tubular_segments.max(3);
    let mut vertices = Vec::with_capacity(((radial + 1) * (tubular + 1)) as usize);

    for j in 0..=radial {
        let around = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let along = i as f32 / tubular as f32 * TAU;
            let ring = radius + tube * around.cos();
            let pos = Vec3::new(ring * along.cos(), ring * along.sin(), tube * around.sin());
            let center = Vec3::new(radius * along.cos(), radius * along.sin(), 0.0);
            let normal = (pos - center).normalize_or_zero();
            let uv = [i as f32 / tubular as f32, j as f32 / radial as f32];
            vertices.push(v(pos.to_array(), normal.to_array(), uv));
        }
    }

    let mut indices = Vec::with_capacity((radial * tubular * 6) as usize);
    grid_indices(&mut indices, radial, tubular);
    (vertices, indices)
}

fn torus_knot_point(u: f32, p: u32, q: u32, radius: f32) -> Vec3 {
    let q_over_p = q as f32 / p as f32 * u;
    let cs = q_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * q_over_p.sin() * 0.5,
    )
}

/// (p, q) torus knot swept with a circular tube.
pub fn torus_knot_mesh(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> Geometry {
    let tubular = tubular_segments.max(3);
    let radial = radial_segments.max(3);
    let p = p.max(1);
    let mut vertices = Vec::with_capacity(((tubular + 1) * (radial + 1)) as usize);

    for i in 0..=tubular {
        let u = i as f32 / tubular as f32 * p as f32 * TAU;
        let p1 = torus_knot_point(u, p, q, radius);
        let p2 = torus_knot_point(u + 0.01, p, q, radius);

        let tangent = p2 - p1;
        let binormal = tangent.cross(p2 + p1).normalize_or_zero();
        let normal = binormal.cross(tangent).normalize_or_zero();

        for j in 0..=radial {
            let around = j as f32 / radial as f32 * TAU;
            let offset = normal * (-tube * around.cos()) + binormal * (tube * around.sin());
            let pos = p1 + offset;
            let uv = [i as f32 / tubular as f32, j as f32 / radial as f32];
            vertices.push(v(
                pos.to_array(),
                offset.normalize_or_zero().to_array(),
                uv,
            ));
        }
    }

    let mut indices = Vec::with_capacity((tubular * radial * 6) as usize);
    grid_indices(&mut indices, tubular, radial);
    (vertices, indices)
}

/// Unindexed point list; normals point away from the origin.
pub fn point_cloud(points: &[Vec3]) -> Geometry {
    let vertices = points
        .iter()
        .map(|p| v(p.to_array(), p.normalize_or_zero().to_array(), [0.0, 0.0]))
        .collect();
    (vertices, Vec::new())
}

fn grid_indices(indices: &mut Vec<u32>, rows: u32, columns: u32) {
    for row in 0..rows {
        for column in 0..columns {
            let current = row * (columns + 1) + column;
            let next = current + columns + 1;

            indices.extend_from_slice(&[current, next, current + 1]);
            indices.extend_from_slice(&[current + 1, next, next + 1]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_extent(vertices: &[Vertex]) -> f32 {
        vertices
            .iter()
            .map(|vert| Vec3::from(vert.pos).length())
            .fold(0.0, f32::max)
    }

    #[test]
    fn cuboid_counts_and_extent() {
        let (v, i) = cuboid_mesh(2.0);
        assert_eq!(v.len(), 24);
        assert_eq!(i.len(), 36);
        for vert in &v {
            assert!(Vec3::from(vert.pos).abs().abs_diff_eq(Vec3::ONE, 1e-6));
        }
    }

    #[test]
    fn cuboid_faces_wind_outward() {
        let (v, i) = cuboid_mesh(1.0);
        for tri in i.chunks(3) {
            let a = Vec3::from(v[tri[0] as usize].pos);
            let b = Vec3::from(v[tri[1] as usize].pos);
            let c = Vec3::from(v[tri[2] as usize].pos);
            let n = Vec3::from(v[tri[0] as usize].normal);
            let face = (b - a).cross(c - a);
            assert!(face.dot(n) > 0.0, "triangle {tri:?} winds inward");
        }
    }

    #[test]
    fn sphere_vertices_sit_on_radius() {
        let (v, i) = sphere_mesh(1.5, 16, 8);
        assert_eq!(v.len(), 17 * 9);
        assert_eq!(i.len(), 16 * 8 * 6);
        for vert in &v {
            assert!((Vec3::from(vert.pos).length() - 1.5).abs() < 1e-5);
        }
    }

    #[test]
    fn icosahedron_is_twenty_outward_faces() {
        let (v, i) = icosahedron_mesh(0.3);
        assert_eq!(v.len(), 60);
        assert_eq!(i.len(), 60);
        for tri in v.chunks(3) {
            let centroid = tri
                .iter()
                .map(|vert| Vec3::from(vert.pos))
                .fold(Vec3::ZERO, |acc, p| acc + p);
            assert!(Vec3::from(tri[0].normal).dot(centroid) > 0.0);
        }
        assert!((max_extent(&v) - 0.3).abs() < 1e-5);
    }

    #[test]
    fn torus_extent_is_radius_plus_tube() {
        let (v, i) = torus_mesh(3.0, 0.02, 16, 100);
        assert_eq!(v.len(), 17 * 101);
        assert_eq!(i.len(), 16 * 100 * 6);
        assert!((max_extent(&v) - 3.02).abs() < 1e-3);
    }

    #[test]
    fn torus_knot_indices_are_in_range() {
        let (v, i) = torus_knot_mesh(2.5, 0.4, 128, 16, 2, 3);
        assert_eq!(v.len(), 129 * 17);
        assert!(i.iter().all(|&idx| (idx as usize) < v.len()));
    }

    #[test]
    fn point_cloud_is_unindexed() {
        let (v, i) = point_cloud(&[Vec3::X, Vec3::Y]);
        assert_eq!(v.len(), 2);
        assert!(i.is_empty());
    }
}
