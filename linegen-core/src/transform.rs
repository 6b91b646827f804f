/// Rotation state and the fixed-order rotation transform
use nalgebra::{Point3, Rotation3, Vector3};
use tracing::trace;

/// Accumulated rotation angles and their angular speeds.
///
/// Angles are in degrees and are never wrapped; speeds are degrees per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub angles: Vector3<f32>,
    pub speeds: Vector3<f32>,
}

impl RotationState {
    pub fn new(angles: Vector3<f32>, speeds: Vector3<f32>) -> Self {
        Self { angles, speeds }
    }

    pub fn zero() -> Self {
        Self {
            angles: Vector3::zeros(),
            speeds: Vector3::zeros(),
        }
    }

    /// Advance every angle by `speed * dt` (seconds)
    pub fn advance(&mut self, dt: f32) {
        self.angles += self.speeds * dt;
        trace!(dt, x = self.angles.x, y = self.angles.y, z = self.angles.z, "rotation advanced");
    }

    /// Offset the angles by fixed amounts (in degrees)
    pub fn nudge(&mut self, dx: f32, dy: f32, dz: f32) {
        self.angles += Vector3::new(dx, dy, dz);
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Rotation builder for the wireframe pipeline
pub struct Transform;

impl Transform {
    /// Compose the rotation for a state snapshot.
    ///
    /// Points are rotated about Z first, then X, then Y.
    pub fn rotation(state: &RotationState) -> Rotation3<f32> {
        Self::rotation_from_degrees(state.angles.x, state.angles.y, state.angles.z)
    }

    pub fn rotation_from_degrees(angle_x: f32, angle_y: f32, angle_z: f32) -> Rotation3<f32> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), angle_x.to_radians());
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), angle_y.to_radians());
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), angle_z.to_radians());

        ry * rx * rz
    }

    /// Rotate a single point by explicit angles in degrees
    pub fn rotate(point: &Point3<f32>, angle_x: f32, angle_y: f32, angle_z: f32) -> Point3<f32> {
        Self::rotation_from_degrees(angle_x, angle_y, angle_z) * point
    }

    pub fn rotate_point(rotation: &Rotation3<f32>, point: &Point3<f32>) -> Point3<f32> {
        rotation * point
    }
}
