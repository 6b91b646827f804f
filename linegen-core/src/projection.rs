/// Depth-scaled projection utilities
use nalgebra::{Point2, Point3};

/// Maps a point's depth to a 2D scale factor.
///
/// Implementations own the camera model; the projector trusts the returned
/// value as-is, including non-finite results.
pub trait DepthToScale {
    fn scale_for_depth(&self, z: f32) -> f32;
}

impl<F> DepthToScale for F
where
    F: Fn(f32) -> f32,
{
    fn scale_for_depth(&self, z: f32) -> f32 {
        self(z)
    }
}

/// Projection mode for a [`DepthCamera`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectionMode {
    Orthographic,
    Perspective,
}

/// Simple camera looking down the Z axis from `distance` units away
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthCamera {
    pub focal_length: f32,
    pub distance: f32,
    /// Constant scale used in orthographic mode
    pub zoom: f32,
    pub mode: ProjectionMode,
}

impl DepthCamera {
    pub fn new(focal_length: f32, distance: f32) -> Self {
        Self {
            focal_length,
            distance,
            zoom: 1.0,
            mode: ProjectionMode::Perspective,
        }
    }

    pub fn orthographic(zoom: f32) -> Self {
        Self {
            zoom,
            mode: ProjectionMode::Orthographic,
            ..Self::default()
        }
    }
}

impl Default for DepthCamera {
    fn default() -> Self {
        Self::new(5.0, 5.0)
    }
}

impl DepthToScale for DepthCamera {
    fn scale_for_depth(&self, z: f32) -> f32 {
        match self.mode {
            // No guard: a point at the camera plane yields an infinite scale.
            ProjectionMode::Perspective => self.focal_length / (self.distance + z),
            ProjectionMode::Orthographic => self.zoom,
        }
    }
}

/// Scaled-orthographic projector: x and y are multiplied by a depth-only factor
pub struct Projector<D> {
    depth: D,
}

impl<D: DepthToScale> Projector<D> {
    pub fn new(depth: D) -> Self {
        Self { depth }
    }

    pub fn project(&self, point: &Point3<f32>) -> Point2<f32> {
        let scale = self.depth.scale_for_depth(point.z);
        Point2::new(point.x * scale, point.y * scale)
    }

    pub fn depth(&self) -> &D {
        &self.depth
    }
}
