/// Geometry primitives for wireframe generation
use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};

/// A 3D line between two points in local shape space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point3<f32>,
    pub end: Point3<f32>,
}

impl Edge {
    pub fn new(start: Point3<f32>, end: Point3<f32>) -> Self {
        Self { start, end }
    }
}

/// A projected 2D line, the unit handed to the render sink
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Point2<f32>,
    pub end: Point2<f32>,
}

impl LineSegment {
    pub fn new(start: Point2<f32>, end: Point2<f32>) -> Self {
        Self { start, end }
    }
}

/// Shape tag without size information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Cube,
    Pyramid,
    Cylinder,
    RectColumn,
    Sphere,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Cube,
        ShapeKind::Pyramid,
        ShapeKind::Cylinder,
        ShapeKind::RectColumn,
        ShapeKind::Sphere,
    ];

    /// Derive concrete dimensions from a single uniform size.
    ///
    /// Cylinders and columns are twice as tall as they are wide.
    pub fn from_uniform_size(self, size: f32) -> Shape {
        match self {
            ShapeKind::Cube => Shape::Cube { size },
            ShapeKind::Pyramid => Shape::Pyramid { size },
            ShapeKind::Cylinder => Shape::Cylinder {
                radius: size,
                height: size * 2.0,
            },
            ShapeKind::RectColumn => Shape::RectColumn {
                width: size,
                height: size * 2.0,
                depth: size,
            },
            ShapeKind::Sphere => Shape::Sphere { radius: size },
        }
    }
}

/// A shape together with its size parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Cube { size: f32 },
    Pyramid { size: f32 },
    Cylinder { radius: f32, height: f32 },
    RectColumn { width: f32, height: f32, depth: f32 },
    Sphere { radius: f32 },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Cube { .. } => ShapeKind::Cube,
            Shape::Pyramid { .. } => ShapeKind::Pyramid,
            Shape::Cylinder { .. } => ShapeKind::Cylinder,
            Shape::RectColumn { .. } => ShapeKind::RectColumn,
            Shape::Sphere { .. } => ShapeKind::Sphere,
        }
    }

    fn dimensions(&self) -> Vec<(&'static str, f32)> {
        match *self {
            Shape::Cube { size } | Shape::Pyramid { size } => vec![("size", size)],
            Shape::Cylinder { radius, height } => vec![("radius", radius), ("height", height)],
            Shape::RectColumn {
                width,
                height,
                depth,
            } => vec![("width", width), ("height", height), ("depth", depth)],
            Shape::Sphere { radius } => vec![("radius", radius)],
        }
    }
}

/// Upper bound on `segments`. Lattice shapes emit `3 * (segments + 1)^2`
/// lines, so larger counts would exhaust memory.
pub const MAX_SEGMENTS: i32 = 1024;

/// Everything a generator needs for one pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParameters {
    pub shape: Shape,
    pub center: Point3<f32>,
    /// Subdivisions per axis or per ring
    pub segments: i32,
}

impl ShapeParameters {
    pub fn new(shape: Shape, center: Point3<f32>, segments: i32) -> Self {
        Self {
            shape,
            center,
            segments,
        }
    }

    /// Check the parameters and return the segment count as an unsigned value.
    ///
    /// Zero or negative segment counts would divide by zero in the step
    /// computations, counts above [`MAX_SEGMENTS`] would not fit in memory,
    /// and non-finite sizes would leak NaN into the line list.
    pub fn validate(&self) -> Result<u32> {
        if !(1..=MAX_SEGMENTS).contains(&self.segments) {
            return Err(GeometryError::InvalidSegments {
                segments: self.segments,
            });
        }

        let center = [
            ("center.x", self.center.x),
            ("center.y", self.center.y),
            ("center.z", self.center.z),
        ];
        for (name, value) in self.shape.dimensions().into_iter().chain(center) {
            if !value.is_finite() {
                return Err(GeometryError::NonFiniteParameter { name, value });
            }
        }

        Ok(self.segments as u32)
    }

    /// Number of lines a valid pass produces. Depends only on the shape kind
    /// and the segment count.
    pub fn expected_line_count(&self) -> Result<usize> {
        let s = self.validate()? as usize;
        Ok(match self.shape.kind() {
            ShapeKind::Cube | ShapeKind::RectColumn => 3 * (s + 1) * (s + 1),
            ShapeKind::Pyramid => 2 * s,
            ShapeKind::Cylinder => 3 * s,
            ShapeKind::Sphere => 2 * s * s,
        })
    }
}
