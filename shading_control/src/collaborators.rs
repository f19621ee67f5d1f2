//! Interfaces the controller drives. The viewer backs them with GPU objects;
//! tests back them with recording doubles.

use scene::math::{Matrix4, Vector2, Vector3};
use scene::Arcball;

use crate::overlay::OverlayLine;

/// A mesh that can swap which normal set feeds the rasterizer.
pub trait ShadedMesh {
    fn copy_vertex_normals_to_normals(&mut self);
    fn copy_face_normals_to_normals(&mut self);
    /// Pushes the currently selected normals to the GPU-resident buffer.
    fn update_normals(&mut self);
}

pub trait Trackball {
    fn view_matrix(&self) -> Matrix4;
    fn model_rot_matrix(&self) -> Matrix4;
    fn view_cam_distance_matrix(&self) -> Matrix4;
    fn reset(&mut self);
    fn drag(&mut self, offset: Vector2);
    fn zoom(&mut self, delta: f32);
}

/// Uniform upload into a linked shader program.
pub trait ShaderProgram {
    fn use_program(&mut self);
    fn set_mat4(&mut self, name: &str, value: &Matrix4);
    fn set_vec3(&mut self, name: &str, value: &Vector3);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_int(&mut self, name: &str, value: i32);
}

pub trait TextOverlay {
    fn update_text(&mut self, line: OverlayLine, text: String);
}

/// Everything a transition may touch, borrowed for the duration of one event.
pub struct Collaborators<'a> {
    pub mesh: &'a mut dyn ShadedMesh,
    pub arcball: &'a mut dyn Trackball,
    pub shader: &'a mut dyn ShaderProgram,
    pub overlay: &'a mut dyn TextOverlay,
}

impl Trackball for Arcball {
    #[inline]
    fn view_matrix(&self) -> Matrix4 {
        Arcball::view_matrix(self)
    }

    #[inline]
    fn model_rot_matrix(&self) -> Matrix4 {
        Arcball::model_rot_matrix(self)
    }

    #[inline]
    fn view_cam_distance_matrix(&self) -> Matrix4 {
        Arcball::view_cam_distance_matrix(self)
    }

    #[inline]
    fn reset(&mut self) {
        Arcball::reset(self)
    }

    #[inline]
    fn drag(&mut self, offset: Vector2) {
        Arcball::drag(self, offset)
    }

    #[inline]
    fn zoom(&mut self, delta: f32) {
        Arcball::zoom(self, delta)
    }
}
