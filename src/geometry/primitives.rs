//! # Primitive Shape Generation
//!
//! Generators for the built-in shape library. All shapes are centered at
//! the origin with outward normals and texture coordinates, at a nominal
//! unit size; side lengths are baked in afterwards with
//! [`GeometryData::scaled`](super::GeometryData::scaled).

use super::GeometryData;
use std::f32::consts::PI;

/// Generate a unit cube centered at the origin
///
/// Returns a cube with positions from -0.5 to 0.5 on all axes. Each face
/// carries its own four vertices so normals stay flat per face.
pub fn generate_cube() -> GeometryData {
    let mut data = GeometryData::new();

    // (normal, u axis, v axis) per face; u x v = normal
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ];

    for (normal, u, v) in faces {
        let base = data.positions.len() as u32;

        // Counter-clockwise corners viewed from outside the face
        let corner_signs = [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)];
        for (su, sv) in corner_signs {
            data.positions.push([
                normal[0] * 0.5 + u[0] * su + v[0] * sv,
                normal[1] * 0.5 + u[1] * su + v[1] * sv,
                normal[2] * 0.5 + u[2] * su + v[2] * sv,
            ]);
            data.normals.push(normal);
            data.tex_coords.push([su + 0.5, sv + 0.5]);
        }

        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a unit block with rounded edges and corners
///
/// # Arguments
/// * `bevel` - Edge/corner radius, clamped to keep a flat face remnant
/// * `segments` - Grid resolution per face
///
/// Positions span -0.5 to 0.5 on all axes like [`generate_cube`]. Each
/// face is a subdivided grid projected onto the Minkowski sum of an inner
/// box and a sphere of the bevel radius, which rounds the edges while the
/// face centers stay flat. The projection direction doubles as the
/// normal.
pub fn generate_rounded_cube(bevel: f32, segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let segs = segments.max(1);
    let radius = bevel.clamp(0.01, 0.49);
    let inner = 0.5 - radius;

    // Same face frames as generate_cube: (normal, u axis, v axis)
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ];

    for (normal, u, v) in faces {
        let base = data.positions.len() as u32;

        for y in 0..=segs {
            let sv = y as f32 / segs as f32 - 0.5;
            for x in 0..=segs {
                let su = x as f32 / segs as f32 - 0.5;

                // Point on the sharp cube surface
                let p = [
                    normal[0] * 0.5 + u[0] * su + v[0] * sv,
                    normal[1] * 0.5 + u[1] * su + v[1] * sv,
                    normal[2] * 0.5 + u[2] * su + v[2] * sv,
                ];

                // Nearest point on the inner box, and the offset past it
                let q = [
                    p[0].clamp(-inner, inner),
                    p[1].clamp(-inner, inner),
                    p[2].clamp(-inner, inner),
                ];
                let d = [p[0] - q[0], p[1] - q[1], p[2] - q[2]];
                // On the cube surface at least one component reaches the
                // bevel radius, so the offset never degenerates
                let len = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
                let n = [d[0] / len, d[1] / len, d[2] / len];

                data.positions.push([
                    q[0] + radius * n[0],
                    q[1] + radius * n[1],
                    q[2] + radius * n[2],
                ]);
                data.normals.push(n);
                data.tex_coords
                    .push([x as f32 / segs as f32, y as f32 / segs as f32]);
            }
        }

        for y in 0..segs {
            for x in 0..segs {
                let i = base + y * (segs + 1) + x;
                let next = i + segs + 1;

                data.indices
                    .extend_from_slice(&[i, i + 1, next, i + 1, next + 1, next]);
            }
        }
    }

    data
}

/// Generate a UV sphere with specified resolution
///
/// # Arguments
/// * `longitude_segments` - Number of vertical segments (longitude lines)
/// * `latitude_segments` - Number of horizontal segments (latitude lines)
///
/// Returns a sphere of radius 1.0 centered at the origin.
pub fn generate_sphere(longitude_segments: u32, latitude_segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let long_segs = longitude_segments.max(3);
    let lat_segs = latitude_segments.max(2);

    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32; // 0 to PI
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for long in 0..=long_segs {
            let phi = long as f32 * 2.0 * PI / long_segs as f32; // 0 to 2*PI

            // Spherical to Cartesian coordinates
            let x = sin_theta * phi.cos();
            let y = cos_theta;
            let z = sin_theta * phi.sin();

            data.positions.push([x, y, z]);
            data.normals.push([x, y, z]); // Normal equals position on a unit sphere
            data.tex_coords.push([
                long as f32 / long_segs as f32,
                lat as f32 / lat_segs as f32,
            ]);
        }
    }

    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * (long_segs + 1) + long;
            let second = first + long_segs + 1;

            data.indices
                .extend_from_slice(&[first, second, first + 1, second, second + 1, first + 1]);
        }
    }

    data
}

/// Generate a cylinder with specified parameters
///
/// # Arguments
/// * `radius` - Radius of the cylinder
/// * `height` - Height of the cylinder (along Z-axis)
/// * `segments` - Number of circular segments
///
/// Returns a cylinder centered at the origin extending from -height/2 to
/// height/2 in Z.
pub fn generate_cylinder(radius: f32, height: f32, segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let segs = segments.max(3);
    let half_height = height * 0.5;

    // Side vertices, bottom/top pairs
    for i in 0..=segs {
        let angle = i as f32 * 2.0 * PI / segs as f32;
        let cos_a = angle.cos();
        let sin_a = angle.sin();

        data.positions
            .push([radius * cos_a, radius * sin_a, -half_height]);
        data.normals.push([cos_a, sin_a, 0.0]);
        data.tex_coords.push([i as f32 / segs as f32, 0.0]);

        data.positions
            .push([radius * cos_a, radius * sin_a, half_height]);
        data.normals.push([cos_a, sin_a, 0.0]);
        data.tex_coords.push([i as f32 / segs as f32, 1.0]);
    }

    for i in 0..segs {
        let bottom = i * 2;
        let top = bottom + 1;
        let bottom_next = bottom + 2;
        let top_next = bottom + 3;

        data.indices
            .extend_from_slice(&[bottom, top, bottom_next, top, top_next, bottom_next]);
    }

    push_cap(&mut data, radius, -half_height, segs, false);
    push_cap(&mut data, radius, half_height, segs, true);

    data
}

/// Generate a cone with specified parameters
///
/// # Arguments
/// * `radius` - Radius of the base circle
/// * `height` - Height of the cone (along Z-axis)
/// * `segments` - Number of circular segments
///
/// Returns a cone centered at the origin with the apex at +height/2 and the
/// base at -height/2. The apex vertex is duplicated per segment so the slant
/// normals stay smooth around the rim.
pub fn generate_cone(radius: f32, height: f32, segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let segs = segments.max(3);
    let half_height = height * 0.5;
    let slant = (radius * radius + height * height).sqrt();

    // Base-rim and apex vertex per segment
    for i in 0..=segs {
        let angle = i as f32 * 2.0 * PI / segs as f32;
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        let normal = [cos_a * height / slant, sin_a * height / slant, radius / slant];

        data.positions
            .push([radius * cos_a, radius * sin_a, -half_height]);
        data.normals.push(normal);
        data.tex_coords.push([i as f32 / segs as f32, 0.0]);

        data.positions.push([0.0, 0.0, half_height]);
        data.normals.push(normal);
        data.tex_coords.push([i as f32 / segs as f32, 1.0]);
    }

    for i in 0..segs {
        let base = i * 2;
        let apex = base + 1;
        let base_next = base + 2;

        data.indices.extend_from_slice(&[base, base_next, apex]);
    }

    push_cap(&mut data, radius, -half_height, segs, false);

    data
}

/// Generate a torus lying in the XY plane
///
/// # Arguments
/// * `ring_radius` - Distance from the torus center to the tube center
/// * `tube_radius` - Radius of the tube itself
/// * `ring_segments` - Number of segments around the ring
/// * `tube_segments` - Number of segments around the tube
pub fn generate_torus(
    ring_radius: f32,
    tube_radius: f32,
    ring_segments: u32,
    tube_segments: u32,
) -> GeometryData {
    let mut data = GeometryData::new();

    let ring_segs = ring_segments.max(3);
    let tube_segs = tube_segments.max(3);

    for i in 0..=ring_segs {
        let theta = i as f32 * 2.0 * PI / ring_segs as f32;
        let cos_t = theta.cos();
        let sin_t = theta.sin();

        for j in 0..=tube_segs {
            let phi = j as f32 * 2.0 * PI / tube_segs as f32;
            let cos_p = phi.cos();
            let sin_p = phi.sin();

            data.positions.push([
                (ring_radius + tube_radius * cos_p) * cos_t,
                (ring_radius + tube_radius * cos_p) * sin_t,
                tube_radius * sin_p,
            ]);
            data.normals.push([cos_p * cos_t, cos_p * sin_t, sin_p]);
            data.tex_coords.push([
                i as f32 / ring_segs as f32,
                j as f32 / tube_segs as f32,
            ]);
        }
    }

    for i in 0..ring_segs {
        for j in 0..tube_segs {
            let first = i * (tube_segs + 1) + j;
            let second = first + tube_segs + 1;

            data.indices
                .extend_from_slice(&[first, second, first + 1, second, second + 1, first + 1]);
        }
    }

    data
}

/// Append a flat circular cap at the given Z height.
///
/// `facing_up` selects the winding and normal direction.
fn push_cap(data: &mut GeometryData, radius: f32, z: f32, segments: u32, facing_up: bool) {
    let normal = if facing_up {
        [0.0, 0.0, 1.0]
    } else {
        [0.0, 0.0, -1.0]
    };

    let center = data.positions.len() as u32;
    data.positions.push([0.0, 0.0, z]);
    data.normals.push(normal);
    data.tex_coords.push([0.5, 0.5]);

    let rim_start = data.positions.len() as u32;
    for i in 0..=segments {
        let angle = i as f32 * 2.0 * PI / segments as f32;
        data.positions
            .push([radius * angle.cos(), radius * angle.sin(), z]);
        data.normals.push(normal);
        data.tex_coords
            .push([0.5 + angle.cos() * 0.5, 0.5 + angle.sin() * 0.5]);
    }

    for i in 0..segments {
        let current = rim_start + i;
        let next = rim_start + i + 1;
        if facing_up {
            data.indices.extend_from_slice(&[center, current, next]);
        } else {
            data.indices.extend_from_slice(&[center, next, current]);
        }
    }
}
