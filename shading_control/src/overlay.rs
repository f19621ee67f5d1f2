use crate::collaborators::TextOverlay;
use crate::key::ModeKey;
use crate::mode::{RotationMode, ShadingMethod, ShadingMode};

/// The two overlay lines that change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayLine {
    Rotation,
    Shading,
}

pub fn rotation_status(mode: RotationMode) -> String {
    format!("arcball mode: {mode}")
}

pub fn shading_status(mode: ShadingMode, method: ShadingMethod) -> String {
    format!("shading mode: {mode} ({method})")
}

/// Text shown over the viewport: two status lines followed by key help.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusOverlay {
    rotation: String,
    shading: String,
}

impl StatusOverlay {
    pub fn new(rotation: RotationMode, mode: ShadingMode, method: ShadingMethod) -> Self {
        Self {
            rotation: rotation_status(rotation),
            shading: shading_status(mode, method),
        }
    }

    #[inline]
    pub fn text(&self, line: OverlayLine) -> &str {
        match line {
            OverlayLine::Rotation => &self.rotation,
            OverlayLine::Shading => &self.shading,
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        [self.rotation.as_str(), self.shading.as_str()]
            .into_iter()
            .chain(ModeKey::ALL.into_iter().map(|key| key.help()))
    }
}

impl Default for StatusOverlay {
    fn default() -> Self {
        Self::new(
            RotationMode::default(),
            ShadingMode::default(),
            ShadingMethod::default(),
        )
    }
}

impl TextOverlay for StatusOverlay {
    fn update_text(&mut self, line: OverlayLine, text: String) {
        match line {
            OverlayLine::Rotation => self.rotation = text,
            OverlayLine::Shading => self.shading = text,
        }
    }
}
