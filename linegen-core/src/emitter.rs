/// One generation pass: generate, rotate, project
use tracing::{debug, warn};

use crate::error::Result;
use crate::geometry::{LineSegment, ShapeParameters};
use crate::projection::{DepthToScale, Projector};
use crate::shapes;
use crate::transform::{RotationState, Transform};

/// Consumer of the projected line list (the backend that draws it)
pub trait LineSink {
    fn draw_lines(&mut self, lines: &[LineSegment]);
}

impl LineSink for Vec<LineSegment> {
    fn draw_lines(&mut self, lines: &[LineSegment]) {
        self.extend_from_slice(lines);
    }
}

/// Turns shape parameters and a rotation snapshot into a 2D line list.
///
/// The camera collaborator is optional; without one every pass is skipped.
pub struct WireframeEmitter<D> {
    projector: Option<Projector<D>>,
}

impl<D: DepthToScale> WireframeEmitter<D> {
    pub fn new(camera: D) -> Self {
        Self {
            projector: Some(Projector::new(camera)),
        }
    }

    pub fn without_camera() -> Self {
        Self { projector: None }
    }

    pub fn camera(&self) -> Option<&D> {
        self.projector.as_ref().map(Projector::depth)
    }

    pub fn set_camera(&mut self, camera: Option<D>) {
        self.projector = camera.map(Projector::new);
    }

    /// Generate the projected line list, in generator emission order.
    ///
    /// The rotation is read once, so every endpoint of the pass sees the same
    /// angles. Returns an empty list when no camera is attached.
    pub fn generate(
        &self,
        params: &ShapeParameters,
        rotation: &RotationState,
    ) -> Result<Vec<LineSegment>> {
        let segments = params.validate()?;

        let Some(projector) = &self.projector else {
            warn!("no camera attached, skipping wireframe pass");
            return Ok(Vec::new());
        };

        let rotation = Transform::rotation(rotation);
        let lines: Vec<LineSegment> = shapes::edges(&params.shape, params.center, segments)
            .iter()
            .map(|edge| {
                LineSegment::new(
                    projector.project(&Transform::rotate_point(&rotation, &edge.start)),
                    projector.project(&Transform::rotate_point(&rotation, &edge.end)),
                )
            })
            .collect();

        debug!(
            shape = ?params.shape.kind(),
            segments,
            lines = lines.len(),
            "generated wireframe"
        );
        Ok(lines)
    }

    /// Generate a pass and hand it to `sink`, returning the number of lines
    /// drawn. Parameters are validated first, as in [`Self::generate`];
    /// without a sink or camera nothing is generated.
    pub fn emit<S: LineSink + ?Sized>(
        &self,
        params: &ShapeParameters,
        rotation: &RotationState,
        sink: Option<&mut S>,
    ) -> Result<usize> {
        params.validate()?;

        let Some(sink) = sink else {
            warn!("no render sink attached, skipping wireframe pass");
            return Ok(0);
        };
        if self.projector.is_none() {
            warn!("no camera attached, skipping wireframe pass");
            return Ok(0);
        }

        let lines = self.generate(params, rotation)?;
        sink.draw_lines(&lines);
        Ok(lines.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;
    use crate::geometry::{Shape, ShapeKind};
    use crate::projection::DepthCamera;
    use nalgebra::{Point2, Point3, Vector3};

    type UnitScale = fn(f32) -> f32;

    fn unit_scale(_: f32) -> f32 {
        1.0
    }

    fn unit_emitter() -> WireframeEmitter<UnitScale> {
        WireframeEmitter::new(unit_scale as UnitScale)
    }

    fn close(a: &Point2<f32>, b: &Point2<f32>) -> bool {
        (a - b).norm() < 1e-5
    }

    #[test]
    fn test_line_counts_per_shape() {
        let emitter = unit_emitter();
        let rotation = RotationState::new(Vector3::new(10.0, 20.0, 30.0), Vector3::zeros());

        for s in [1, 2, 5, 12] {
            let n = s as usize;
            for kind in ShapeKind::ALL {
                for size in [0.5, 3.0] {
                    let params = ShapeParameters::new(
                        kind.from_uniform_size(size),
                        Point3::new(1.0, 2.0, 0.0),
                        s,
                    );
                    let expected = match kind {
                        ShapeKind::Cylinder => 3 * n,
                        ShapeKind::Pyramid => 2 * n,
                        ShapeKind::Sphere => 2 * n * n,
                        ShapeKind::Cube | ShapeKind::RectColumn => 3 * (n + 1) * (n + 1),
                    };
                    let lines = emitter.generate(&params, &rotation).unwrap();
                    assert_eq!(lines.len(), expected, "{kind:?} with {s} segments");
                    assert_eq!(params.expected_line_count().unwrap(), expected);
                }
            }
        }
    }

    #[test]
    fn test_cylinder_scenario() {
        let emitter = unit_emitter();
        let params = ShapeParameters::new(
            Shape::Cylinder {
                radius: 1.0,
                height: 2.0,
            },
            Point3::origin(),
            4,
        );
        let lines = emitter.generate(&params, &RotationState::zero()).unwrap();
        assert_eq!(lines.len(), 12);

        // Projection keeps x/y only: bottom ring at y = 0, top ring at y = 2
        let ring_x = [1.0, 0.0, -1.0, 0.0];
        for (i, triple) in lines.chunks(3).enumerate() {
            let next = (i + 1) % 4;
            assert!(close(&triple[0].start, &Point2::new(ring_x[i], 0.0)));
            assert!(close(&triple[0].end, &Point2::new(ring_x[next], 0.0)));
            assert!(close(&triple[1].start, &Point2::new(ring_x[i], 2.0)));
            assert!(close(&triple[1].end, &Point2::new(ring_x[next], 2.0)));
            assert!(close(&triple[2].start, &Point2::new(ring_x[i], 0.0)));
            assert!(close(&triple[2].end, &Point2::new(ring_x[i], 2.0)));
        }
    }

    #[test]
    fn test_generate_is_repeatable() {
        let emitter = WireframeEmitter::new(DepthCamera::default());
        let rotation = RotationState::new(Vector3::new(45.0, 30.0, 15.0), Vector3::zeros());
        let params = ShapeParameters::new(Shape::Sphere { radius: 1.0 }, Point3::origin(), 8);

        let first = emitter.generate(&params, &rotation).unwrap();
        let second = emitter.generate(&params, &rotation).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rotation_and_scale_are_applied_per_endpoint() {
        let emitter = WireframeEmitter::new(|z: f32| 1.0 + z);
        let params = ShapeParameters::new(Shape::Pyramid { size: 1.0 }, Point3::origin(), 4);
        // Z by 90 takes the first base vertex (1, 0, 0) to (0, 1, 0)
        let rotation = RotationState::new(Vector3::new(0.0, 0.0, 90.0), Vector3::zeros());

        let lines = emitter.generate(&params, &rotation).unwrap();
        assert!(close(&lines[0].start, &Point2::new(0.0, 1.0)));

        // Apex (0, 1, 0) goes to (-1, 0, 0)
        assert!(close(&lines[1].start, &Point2::new(-1.0, 0.0)));

        // X by 90 lifts the apex into +Z where the scale doubles
        let rotation = RotationState::new(Vector3::new(90.0, 0.0, 0.0), Vector3::zeros());
        let lines = emitter.generate(&params, &rotation).unwrap();
        assert!(close(&lines[1].start, &Point2::new(0.0, 0.0)));
        // Base vertex (0, 0, 1) rotates to (0, -1, 0) with scale 1
        assert!(close(&lines[2].start, &Point2::new(0.0, -1.0)));
    }

    #[test]
    fn test_invalid_segments_are_rejected() {
        let emitter = unit_emitter();
        for segments in [0, -1] {
            let params = ShapeParameters::new(Shape::Cube { size: 1.0 }, Point3::origin(), segments);
            assert!(matches!(
                emitter.generate(&params, &RotationState::zero()),
                Err(GeometryError::InvalidSegments { .. })
            ));
        }
    }

    #[test]
    fn test_missing_collaborators_skip_the_pass() {
        let params = ShapeParameters::new(Shape::Cube { size: 1.0 }, Point3::origin(), 2);
        let rotation = RotationState::zero();

        let no_camera: WireframeEmitter<UnitScale> = WireframeEmitter::without_camera();
        assert!(no_camera.generate(&params, &rotation).unwrap().is_empty());

        let mut sink: Vec<LineSegment> = Vec::new();
        assert_eq!(no_camera.emit(&params, &rotation, Some(&mut sink)).unwrap(), 0);
        assert!(sink.is_empty());

        let emitter = unit_emitter();
        assert_eq!(
            emitter
                .emit::<Vec<LineSegment>>(&params, &rotation, None)
                .unwrap(),
            0
        );
    }

    #[test]
    fn test_invalid_segments_fail_even_without_collaborators() {
        let params = ShapeParameters::new(Shape::Cube { size: 1.0 }, Point3::origin(), 0);
        let rotation = RotationState::zero();
        let no_camera: WireframeEmitter<UnitScale> = WireframeEmitter::without_camera();

        assert!(matches!(
            no_camera.generate(&params, &rotation),
            Err(GeometryError::InvalidSegments { segments: 0 })
        ));

        let mut sink: Vec<LineSegment> = Vec::new();
        assert!(matches!(
            no_camera.emit(&params, &rotation, Some(&mut sink)),
            Err(GeometryError::InvalidSegments { segments: 0 })
        ));
        assert!(matches!(
            unit_emitter().emit::<Vec<LineSegment>>(&params, &rotation, None),
            Err(GeometryError::InvalidSegments { segments: 0 })
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_emit_feeds_sink_in_order() {
        let emitter = unit_emitter();
        let params = ShapeParameters::new(Shape::Pyramid { size: 2.0 }, Point3::origin(), 3);
        let rotation = RotationState::new(Vector3::new(5.0, 6.0, 7.0), Vector3::zeros());

        let mut sink: Vec<LineSegment> = Vec::new();
        let drawn = emitter.emit(&params, &rotation, Some(&mut sink)).unwrap();
        assert_eq!(drawn, 6);
        assert_eq!(sink, emitter.generate(&params, &rotation).unwrap());
    }

    #[test]
    fn test_camera_can_be_swapped() {
        let mut emitter = WireframeEmitter::new(DepthCamera::orthographic(2.0));
        assert!(emitter.camera().is_some());
        emitter.set_camera(None);
        assert!(emitter.camera().is_none());
    }
}
