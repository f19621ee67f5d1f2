use scene::math::{Matrix4, Point3, Vector3};
use tracing::debug;

use crate::collaborators::{Collaborators, ShaderProgram, Trackball};
use crate::key::ModeKey;
use crate::lighting::SHADING_FLAG_UNIFORM;
use crate::mode::{RotationMode, ShadingMethod, ShadingMode};
use crate::overlay::{rotation_status, shading_status, OverlayLine};

/// All state written by input handling and read by the render procedure.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeState {
    pub rotation: RotationMode,
    pub shading_mode: ShadingMode,
    pub shading_method: ShadingMethod,
    /// Accumulated model transform. Follows the arcball while in model mode
    /// and keeps its last value in camera mode.
    pub model_matrix: Matrix4,
}

impl Default for ModeState {
    fn default() -> Self {
        Self {
            rotation: RotationMode::default(),
            shading_mode: ShadingMode::default(),
            shading_method: ShadingMethod::default(),
            model_matrix: Matrix4::identity(),
        }
    }
}

/// Whether an event needs a render pass right away, ahead of the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    NextFrame,
    Immediate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub model: Matrix4,
    pub view: Matrix4,
}

impl FrameMatrices {
    /// World-space camera position.
    pub fn eye_position(&self) -> Vector3 {
        self.view
            .try_inverse()
            .map(|inverse| inverse.transform_point(&Point3::origin()).coords)
            .unwrap_or_else(Vector3::zeros)
    }
}

#[derive(Debug, Default)]
pub struct ShadingController {
    state: ModeState,
}

impl ShadingController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> &ModeState {
        &self.state
    }

    /// Brings the collaborators in line with the current state. Run once
    /// after they are created.
    pub fn initialize(&self, c: &mut Collaborators) {
        match self.state.shading_mode {
            ShadingMode::Smooth => c.mesh.copy_vertex_normals_to_normals(),
            ShadingMode::Flat => c.mesh.copy_face_normals_to_normals(),
        }
        c.mesh.update_normals();
        c.shader.use_program();
        c.shader
            .set_int(SHADING_FLAG_UNIFORM, self.state.shading_method.shader_flag());
        self.show_rotation(c);
        self.show_shading(c);
    }

    pub fn handle_key(&mut self, key: ModeKey, c: &mut Collaborators) -> Redraw {
        debug!(key = %key.as_char(), "mode key");
        match key {
            ModeKey::ToggleRotation => {
                self.state.rotation = self.state.rotation.toggled();
                self.show_rotation(c);
                Redraw::NextFrame
            }
            ModeKey::Reset => {
                c.arcball.reset();
                self.state.model_matrix = Matrix4::identity();
                self.state.rotation = RotationMode::Camera;
                self.show_rotation(c);
                Redraw::NextFrame
            }
            ModeKey::Smooth => {
                self.state.shading_mode = ShadingMode::Smooth;
                self.show_shading(c);
                c.mesh.copy_vertex_normals_to_normals();
                c.mesh.update_normals();
                Redraw::Immediate
            }
            ModeKey::Flat => {
                self.state.shading_mode = ShadingMode::Flat;
                self.show_shading(c);
                c.mesh.copy_face_normals_to_normals();
                c.mesh.update_normals();
                Redraw::Immediate
            }
            ModeKey::Gouraud => {
                // Gouraud always lights with vertex normals, even after 'f'.
                self.state.shading_method = ShadingMethod::Gouraud;
                self.show_shading(c);
                c.mesh.copy_vertex_normals_to_normals();
                c.mesh.update_normals();
                c.shader.use_program();
                c.shader
                    .set_int(SHADING_FLAG_UNIFORM, ShadingMethod::Gouraud.shader_flag());
                Redraw::Immediate
            }
            ModeKey::Phong => {
                self.state.shading_method = ShadingMethod::Phong;
                self.show_shading(c);
                c.shader.use_program();
                c.shader
                    .set_int(SHADING_FLAG_UNIFORM, ShadingMethod::Phong.shader_flag());
                Redraw::Immediate
            }
        }
    }

    /// Resolves this frame's matrices from the rotation mode and uploads them
    /// to the cone program.
    pub fn prepare_frame(
        &mut self,
        arcball: &dyn Trackball,
        shader: &mut dyn ShaderProgram,
    ) -> FrameMatrices {
        let view = match self.state.rotation {
            RotationMode::Camera => arcball.view_matrix(),
            RotationMode::Model => {
                self.state.model_matrix = arcball.model_rot_matrix();
                arcball.view_cam_distance_matrix()
            }
        };
        let matrices = FrameMatrices {
            model: self.state.model_matrix,
            view,
        };
        shader.use_program();
        shader.set_mat4("u_model", &matrices.model);
        shader.set_mat4("u_view", &matrices.view);
        shader.set_vec3("u_viewPos", &matrices.eye_position());
        matrices
    }

    fn show_rotation(&self, c: &mut Collaborators) {
        c.overlay
            .update_text(OverlayLine::Rotation, rotation_status(self.state.rotation));
    }

    fn show_shading(&self, c: &mut Collaborators) {
        c.overlay.update_text(
            OverlayLine::Shading,
            shading_status(self.state.shading_mode, self.state.shading_method),
        );
    }
}
