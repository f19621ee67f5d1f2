use scene::math::{Matrix4, Vector3};
use scene::Cone;
use shading_control::{ShadedMesh, ShaderProgram};
use three_d::{Context, Program, RenderStates, VertexBuffer, Viewport};
use tracing::debug;

use crate::common::{to_mat4, to_vec3, to_vec3s};
use crate::error::ViewerError;

/// A linked GLSL program driven through `ShaderProgram`.
pub struct GpuProgram {
    program: Program,
}

impl GpuProgram {
    pub fn new(
        context: &Context,
        name: &'static str,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self, ViewerError> {
        let program = Program::from_source(context, vertex_source, fragment_source)
            .map_err(|source| ViewerError::Shader { name, source })?;
        debug!(name, "linked shader program");
        Ok(Self { program })
    }

    #[inline]
    pub fn program(&self) -> &Program {
        &self.program
    }
}

impl ShaderProgram for GpuProgram {
    // three-d binds the program on every uniform upload and draw call.
    fn use_program(&mut self) {}

    fn set_mat4(&mut self, name: &str, value: &Matrix4) {
        self.program.use_uniform_if_required(name, to_mat4(value));
    }

    fn set_vec3(&mut self, name: &str, value: &Vector3) {
        self.program.use_uniform_if_required(name, to_vec3(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.program.use_uniform_if_required(name, value);
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.program.use_uniform_if_required(name, value);
    }
}

/// The shaded cone: CPU mesh plus the GPU buffers drawn from it.
pub struct ConeRender {
    cone: Cone,
    positions: VertexBuffer,
    normals: VertexBuffer,
}

impl ConeRender {
    pub fn new(context: &Context, cone: Cone) -> Self {
        let positions = VertexBuffer::new_with_data(context, &to_vec3s(cone.positions()));
        let normals = VertexBuffer::new_with_data(context, &to_vec3s(cone.normals()));
        Self {
            cone,
            positions,
            normals,
        }
    }

    pub fn draw(&self, program: &GpuProgram, viewport: Viewport) {
        let program = program.program();
        program.use_vertex_attribute("a_position", &self.positions);
        program.use_vertex_attribute("a_normal", &self.normals);
        program.draw_arrays(
            RenderStates::default(),
            viewport,
            self.cone.vertex_count() as u32,
        );
    }
}

impl ShadedMesh for ConeRender {
    fn copy_vertex_normals_to_normals(&mut self) {
        self.cone.copy_vertex_normals_to_normals();
    }

    fn copy_face_normals_to_normals(&mut self) {
        self.cone.copy_face_normals_to_normals();
    }

    fn update_normals(&mut self) {
        self.normals.fill(&to_vec3s(self.cone.normals()));
        debug!(count = self.cone.vertex_count(), "uploaded normals");
    }
}

/// Unlit marker drawn at the light position.
pub struct LampRender {
    positions: VertexBuffer,
    vertex_count: u32,
    program: GpuProgram,
}

impl LampRender {
    pub fn new(context: &Context, cone: &Cone) -> Result<Self, ViewerError> {
        let program = GpuProgram::new(
            context,
            "lamp",
            include_str!("shaders/lamp.vert"),
            include_str!("shaders/lamp.frag"),
        )?;
        Ok(Self {
            positions: VertexBuffer::new_with_data(context, &to_vec3s(cone.positions())),
            vertex_count: cone.vertex_count() as u32,
            program,
        })
    }

    #[inline]
    pub fn program_mut(&mut self) -> &mut GpuProgram {
        &mut self.program
    }

    pub fn draw(&mut self, view: &Matrix4, viewport: Viewport) {
        self.program.use_program();
        self.program.set_mat4("u_view", view);
        let program = self.program.program();
        program.use_vertex_attribute("a_position", &self.positions);
        program.draw_arrays(RenderStates::default(), viewport, self.vertex_count);
    }
}
