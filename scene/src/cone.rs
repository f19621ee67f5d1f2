use std::f32::consts::TAU;

use crate::math::{Isometry3, Point3, Vector3};
use crate::SceneError;

/// A cone stored as a flat triangle list, carrying both of its normal sets.
///
/// `normals` is the set handed to the rasterizer. It starts out as a copy of
/// the vertex normals and is replaced wholesale by the `copy_*` methods.
#[derive(Debug, Clone)]
pub struct Cone {
    positions: Vec<Vector3>,
    face_normals: Vec<Vector3>,
    vertex_normals: Vec<Vector3>,
    normals: Vec<Vector3>,
}

impl Cone {
    #[inline]
    pub fn positions(&self) -> &[Vector3] {
        &self.positions
    }

    #[inline]
    pub fn normals(&self) -> &[Vector3] {
        &self.normals
    }

    #[inline]
    pub fn face_normals(&self) -> &[Vector3] {
        &self.face_normals
    }

    #[inline]
    pub fn vertex_normals(&self) -> &[Vector3] {
        &self.vertex_normals
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn copy_vertex_normals_to_normals(&mut self) {
        self.normals.copy_from_slice(&self.vertex_normals);
    }

    pub fn copy_face_normals_to_normals(&mut self) {
        self.normals.copy_from_slice(&self.face_normals);
    }
}

pub struct ConeBuilder {
    pub radius: f32,
    pub height: f32,
    pub segments: usize,
    pub transform: Isometry3,
}

impl Default for ConeBuilder {
    /// Unit cone: base radius 0.5 at y = -0.5, apex at y = +0.5.
    fn default() -> Self {
        Self::new(0.5, 1.0, 32)
    }
}

impl ConeBuilder {
    pub fn new(radius: f32, height: f32, segments: usize) -> Self {
        Self {
            radius,
            height,
            segments,
            transform: Isometry3::identity(),
        }
    }

    #[inline]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    #[inline]
    pub fn with_transform(mut self, transform: Isometry3) -> Self {
        self.transform = transform;
        self
    }
}

impl ConeBuilder {
    pub fn build(self) -> Result<Cone, SceneError> {
        if self.segments < 3 {
            return Err(SceneError::TooFewSegments(self.segments));
        }
        if !(self.radius > 0.0 && self.height > 0.0) {
            return Err(SceneError::InvalidDimensions {
                radius: self.radius,
                height: self.height,
            });
        }

        let half_height = self.height / 2.0;
        let d_theta = TAU / self.segments as f32;
        let apex = Point3::new(0.0, half_height, 0.0);
        let base_center = Point3::new(0.0, -half_height, 0.0);
        let rim = |i: usize| {
            let theta = i as f32 * d_theta;
            Point3::new(
                self.radius * theta.cos(),
                -half_height,
                self.radius * theta.sin(),
            )
        };
        // Normal of the lateral surface at angle theta.
        let side_normal = |theta: f32| {
            Vector3::new(
                self.height * theta.cos(),
                self.radius,
                self.height * theta.sin(),
            )
            .normalize()
        };

        let num_vertices = self.segments * 6;
        let mut positions = Vec::with_capacity(num_vertices);
        let mut vertex_normals = Vec::with_capacity(num_vertices);

        for i in 0..self.segments {
            let theta0 = i as f32 * d_theta;
            let theta1 = theta0 + d_theta;
            let b0 = rim(i);
            let b1 = rim(i + 1);

            // side, counter-clockwise seen from outside
            positions.extend([apex, b1, b0]);
            vertex_normals.extend([
                side_normal(theta0 + d_theta / 2.0),
                side_normal(theta1),
                side_normal(theta0),
            ]);

            // base, facing -y
            positions.extend([base_center, b0, b1]);
            vertex_normals.extend([-Vector3::y(); 3]);
        }

        let positions: Vec<Vector3> = positions
            .into_iter()
            .map(|p| (self.transform * p).coords)
            .collect();
        let vertex_normals: Vec<Vector3> = vertex_normals
            .into_iter()
            .map(|n| self.transform.rotation * n)
            .collect();

        let mut face_normals = Vec::with_capacity(num_vertices);
        for triangle in positions.chunks_exact(3) {
            let normal = (triangle[1] - triangle[0])
                .cross(&(triangle[2] - triangle[0]))
                .normalize();
            face_normals.extend([normal; 3]);
        }

        tracing::debug!(
            segments = self.segments,
            vertices = positions.len(),
            "built cone mesh"
        );

        Ok(Cone {
            normals: vertex_normals.clone(),
            positions,
            face_normals,
            vertex_normals,
        })
    }
}
