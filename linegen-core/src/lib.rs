/// Linegen Core Library - Procedural wireframe generation
///
/// This library turns a shape description into an ordered list of 2D line
/// segments: generate 3D edges, rotate them by accumulated angles, and
/// project them through a depth-to-scale camera.

pub mod config;
pub mod emitter;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod shapes;
pub mod transform;

// Re-export commonly used types
pub use config::LineGenConfig;
pub use emitter::{LineSink, WireframeEmitter};
pub use error::{GeometryError, Result};
pub use geometry::{Edge, LineSegment, Shape, ShapeKind, ShapeParameters, MAX_SEGMENTS};
pub use projection::{DepthCamera, DepthToScale, ProjectionMode, Projector};
pub use transform::{RotationState, Transform};
