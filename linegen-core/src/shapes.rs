/// Procedural wireframe generators
///
/// Each generator works in local space around `center` and returns its edges
/// in emission order. Callers are expected to pass a validated, non-zero
/// segment count.
use std::f32::consts::PI;

use nalgebra::{Point3, Vector3};

use crate::geometry::{Edge, Shape};

/// Dispatch to the generator for `shape`
pub fn edges(shape: &Shape, center: Point3<f32>, segments: u32) -> Vec<Edge> {
    match *shape {
        Shape::Cube { size } => cube(center, size, segments),
        Shape::Pyramid { size } => pyramid(center, size, segments),
        Shape::Cylinder { radius, height } => cylinder(center, radius, height, segments),
        Shape::RectColumn {
            width,
            height,
            depth,
        } => rect_column(center, width, height, depth, segments),
        Shape::Sphere { radius } => sphere(center, radius, segments),
    }
}

/// Cube lattice: every grid line of every axis pair, not just the silhouette
pub fn cube(center: Point3<f32>, size: f32, segments: u32) -> Vec<Edge> {
    rect_column(center, size, size, size, segments)
}

/// Box lattice with independent steps along each axis.
///
/// For every `(i, j)` grid position three lines are emitted, in order:
/// one along Z, one along Y and one along X.
pub fn rect_column(
    center: Point3<f32>,
    width: f32,
    height: f32,
    depth: f32,
    segments: u32,
) -> Vec<Edge> {
    let n = segments as f32;
    let (step_x, step_y, step_z) = (width / n, height / n, depth / n);
    let (half_w, half_h, half_d) = (width * 0.5, height * 0.5, depth * 0.5);

    let lines = 3 * (segments as usize + 1).pow(2);
    let mut edges = Vec::with_capacity(lines);
    let at = |x: f32, y: f32, z: f32| center + Vector3::new(x, y, z);

    for i in 0..=segments {
        for j in 0..=segments {
            let (i, j) = (i as f32, j as f32);

            let x = -half_w + i * step_x;
            let y = -half_h + j * step_y;
            edges.push(Edge::new(at(x, y, -half_d), at(x, y, half_d)));

            let z = -half_d + j * step_z;
            edges.push(Edge::new(at(x, -half_h, z), at(x, half_h, z)));

            // Y offsets always use the height step so each axis scales on its own
            let y = -half_h + i * step_y;
            edges.push(Edge::new(at(-half_w, y, z), at(half_w, y, z)));
        }
    }

    edges
}

/// Point on a horizontal circle around `center`
fn ring_point(center: Point3<f32>, radius: f32, angle: f32) -> Point3<f32> {
    center + Vector3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// Pyramid with a regular `segments`-gon base of radius `size`.
///
/// Each base edge is followed by the edge from the apex to that edge's
/// first vertex.
pub fn pyramid(center: Point3<f32>, size: f32, segments: u32) -> Vec<Edge> {
    let apex = center + Vector3::y() * size;
    let n = segments as f32;

    (0..segments)
        .flat_map(|i| {
            let a0 = 2.0 * PI * i as f32 / n;
            let a1 = 2.0 * PI * (i + 1) as f32 / n;
            let p0 = ring_point(center, size, a0);
            let p1 = ring_point(center, size, a1);

            [Edge::new(p0, p1), Edge::new(apex, p0)]
        })
        .collect()
}

/// Cylinder standing on `center`: bottom ring, top ring and one vertical per
/// ring index.
pub fn cylinder(center: Point3<f32>, radius: f32, height: f32, segments: u32) -> Vec<Edge> {
    let count = segments as usize;
    let n = segments as f32;
    let lift = Vector3::y() * height;

    let bottom: Vec<Point3<f32>> = (0..segments)
        .map(|i| ring_point(center, radius, i as f32 * 2.0 * PI / n))
        .collect();
    let top: Vec<Point3<f32>> = bottom.iter().map(|p| p + lift).collect();

    let mut edges = Vec::with_capacity(3 * count);
    for i in 0..count {
        let next = (i + 1) % count;
        edges.push(Edge::new(bottom[i], bottom[next]));
        edges.push(Edge::new(top[i], top[next]));
        edges.push(Edge::new(bottom[i], top[i]));
    }

    edges
}

/// Latitude/longitude sphere.
///
/// Each grid cell emits its longitude arc then its latitude arc from the
/// cell's first corner; the edges leading into the opposite corner are left
/// to neighbouring cells, so the last ring and seam stay open.
pub fn sphere(center: Point3<f32>, radius: f32, segments: u32) -> Vec<Edge> {
    let n = segments as f32;
    let at = |lat: f32, lon: f32| {
        center
            + Vector3::new(
                radius * lat.sin() * lon.cos(),
                radius * lat.cos(),
                radius * lat.sin() * lon.sin(),
            )
    };

    let mut edges = Vec::with_capacity(2 * (segments as usize).pow(2));
    for lat in 0..segments {
        let a0 = PI * lat as f32 / n;
        let a1 = PI * (lat + 1) as f32 / n;
        for lon in 0..segments {
            let b0 = 2.0 * PI * lon as f32 / n;
            let b1 = 2.0 * PI * (lon + 1) as f32 / n;

            let p00 = at(a0, b0);
            let p01 = at(a0, b1);
            let p10 = at(a1, b0);

            edges.push(Edge::new(p00, p01));
            edges.push(Edge::new(p00, p10));
        }
    }

    edges
}
