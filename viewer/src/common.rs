use scene::math::{Matrix4, Vector3};
use scene::ArcballOptions;
use shading_control::LightingOptions;
use three_d::{vec3, vec4, Mat4, Vec3};

#[derive(Debug, Clone)]
pub struct ViewerOptions {
    pub title: String,
    pub max_size: (u32, u32),
    pub clear_color: [f32; 3],
    pub field_of_view_deg: f32,
    pub near: f32,
    pub far: f32,
    pub cone_segments: usize,
    pub arcball: ArcballOptions,
    pub lighting: LightingOptions,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            title: "Smooth Shading".to_string(),
            max_size: (700, 700),
            clear_color: [0.1, 0.1, 0.1],
            field_of_view_deg: 60.0,
            near: 0.1,
            far: 100.0,
            cone_segments: 32,
            arcball: ArcballOptions::default(),
            lighting: LightingOptions::default(),
        }
    }
}

impl ViewerOptions {
    pub fn projection(&self, aspect: f32) -> Matrix4 {
        Matrix4::new_perspective(
            aspect,
            self.field_of_view_deg.to_radians(),
            self.near,
            self.far,
        )
    }
}

pub fn to_mat4(m: &Matrix4) -> Mat4 {
    let column = |j: usize| vec4(m[(0, j)], m[(1, j)], m[(2, j)], m[(3, j)]);
    Mat4::from_cols(column(0), column(1), column(2), column(3))
}

#[inline]
pub fn to_vec3(v: &Vector3) -> Vec3 {
    vec3(v.x, v.y, v.z)
}

pub fn to_vec3s(vectors: &[Vector3]) -> Vec<Vec3> {
    vectors.iter().map(to_vec3).collect()
}
