use std::fmt;

/// What a drag rotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    #[default]
    Camera,
    Model,
}

impl RotationMode {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Self::Camera => Self::Model,
            Self::Model => Self::Camera,
        }
    }
}

/// Which normal set the mesh exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMode {
    Flat,
    #[default]
    Smooth,
}

/// Where lighting is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShadingMethod {
    #[default]
    Gouraud,
    Phong,
}

impl ShadingMethod {
    /// Value of the integer flag the cone program branches on.
    #[inline]
    pub fn shader_flag(self) -> i32 {
        match self {
            Self::Gouraud => 0,
            Self::Phong => 1,
        }
    }
}

impl fmt::Display for RotationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Camera => "CAMERA",
            Self::Model => "MODEL",
        })
    }
}

impl fmt::Display for ShadingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flat => "FLAT",
            Self::Smooth => "SMOOTH",
        })
    }
}

impl fmt::Display for ShadingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gouraud => "GOURAUD",
            Self::Phong => "PHONG",
        })
    }
}
