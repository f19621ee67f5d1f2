use crate::math::{Matrix4, UnitQuaternion, Vector2, Vector3};

const MIN_DISTANCE: f32 = 0.5;
// Browsers report wheel deltas of about 100 per notch; winit reports lines.
const WHEEL_SCALE: f32 = 100.0;

#[derive(Debug, Clone, Copy)]
pub struct ArcballOptions {
    pub distance: f32,
    pub rotation_sensitivity: f32,
    pub zoom_sensitivity: f32,
}

impl Default for ArcballOptions {
    fn default() -> Self {
        Self {
            distance: 5.0,
            rotation_sensitivity: 2.0,
            zoom_sensitivity: 0.0005,
        }
    }
}

/// Virtual trackball turning 2D drags into an accumulated 3D rotation.
///
/// Drag offsets are given in normalized screen units, where the shorter half
/// extent of the viewport is 1 and +y points up.
#[derive(Debug, Clone)]
pub struct Arcball {
    options: ArcballOptions,
    rotation: UnitQuaternion,
    distance: f32,
}

impl Arcball {
    pub fn new(options: ArcballOptions) -> Self {
        Self {
            options,
            rotation: UnitQuaternion::identity(),
            distance: options.distance.max(MIN_DISTANCE),
        }
    }

    /// Sensitivities take effect on the next drag or zoom; the initial
    /// distance only on the next reset.
    pub fn set_options(&mut self, options: ArcballOptions) {
        self.options = options;
    }

    #[inline]
    pub fn rotation(&self) -> UnitQuaternion {
        self.rotation
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn drag(&mut self, offset: Vector2) {
        if offset.norm_squared() == 0.0 {
            return;
        }
        let from = Vector3::z();
        let to = project_to_sphere(offset);
        if let Some(step) = UnitQuaternion::rotation_between(&from, &to) {
            let step = step.powf(self.options.rotation_sensitivity);
            self.rotation = step * self.rotation;
        }
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance -= delta * self.options.zoom_sensitivity * WHEEL_SCALE;
        self.distance = self.distance.max(MIN_DISTANCE);
    }

    pub fn reset(&mut self) {
        self.rotation = UnitQuaternion::identity();
        self.distance = self.options.distance.max(MIN_DISTANCE);
    }

    pub fn view_matrix(&self) -> Matrix4 {
        self.view_cam_distance_matrix() * self.model_rot_matrix()
    }

    pub fn model_rot_matrix(&self) -> Matrix4 {
        self.rotation.to_homogeneous()
    }

    pub fn view_cam_distance_matrix(&self) -> Matrix4 {
        Matrix4::new_translation(&Vector3::new(0.0, 0.0, -self.distance))
    }
}

impl Default for Arcball {
    fn default() -> Self {
        Self::new(ArcballOptions::default())
    }
}

/// Maps a screen point onto the unit sphere, or onto the hyperbolic sheet
/// outside it so points far from the centre still rotate smoothly.
fn project_to_sphere(point: Vector2) -> Vector3 {
    let d2 = point.norm_squared();
    if d2 <= 0.5 {
        Vector3::new(point.x, point.y, (1.0 - d2).sqrt())
    } else {
        Vector3::new(point.x, point.y, 0.5 / d2.sqrt())
    }
}
