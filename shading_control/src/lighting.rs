use scene::math::{Matrix4, Vector3};

use crate::collaborators::ShaderProgram;

pub const SHADING_FLAG_UNIFORM: &str = "u_shadingMode";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse: Vector3,
    pub specular: Vector3,
    pub shininess: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vector3,
    pub ambient: Vector3,
    pub diffuse: Vector3,
    pub specular: Vector3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingOptions {
    pub material: Material,
    pub light: Light,
    /// Edge length of the lamp marker drawn at the light position.
    pub lamp_size: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            material: Material {
                diffuse: Vector3::new(1.0, 0.5, 0.31),
                specular: Vector3::new(0.5, 0.5, 0.5),
                shininess: 16.0,
            },
            light: Light {
                position: Vector3::new(1.0, 0.7, 1.0),
                ambient: Vector3::repeat(0.2),
                diffuse: Vector3::repeat(0.7),
                specular: Vector3::repeat(1.0),
            },
            lamp_size: 0.1,
        }
    }
}

impl LightingOptions {
    /// Uploads material and light parameters to the cone program.
    pub fn apply(&self, shader: &mut dyn ShaderProgram) {
        shader.use_program();
        shader.set_vec3("material.diffuse", &self.material.diffuse);
        shader.set_vec3("material.specular", &self.material.specular);
        shader.set_float("material.shininess", self.material.shininess);
        shader.set_vec3("light.position", &self.light.position);
        shader.set_vec3("light.ambient", &self.light.ambient);
        shader.set_vec3("light.diffuse", &self.light.diffuse);
        shader.set_vec3("light.specular", &self.light.specular);
    }

    pub fn lamp_model_matrix(&self) -> Matrix4 {
        Matrix4::new_translation(&self.light.position)
            * Matrix4::new_nonuniform_scaling(&Vector3::repeat(self.lamp_size))
    }
}
