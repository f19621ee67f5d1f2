/// The keys the viewer reacts to. Anything else never becomes a `ModeKey`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKey {
    ToggleRotation,
    Reset,
    Smooth,
    Flat,
    Gouraud,
    Phong,
}

impl ModeKey {
    pub const ALL: [ModeKey; 6] = [
        ModeKey::ToggleRotation,
        ModeKey::Reset,
        ModeKey::Smooth,
        ModeKey::Flat,
        ModeKey::Gouraud,
        ModeKey::Phong,
    ];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a' => Some(Self::ToggleRotation),
            'r' => Some(Self::Reset),
            's' => Some(Self::Smooth),
            'f' => Some(Self::Flat),
            'g' => Some(Self::Gouraud),
            'p' => Some(Self::Phong),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::ToggleRotation => 'a',
            Self::Reset => 'r',
            Self::Smooth => 's',
            Self::Flat => 'f',
            Self::Gouraud => 'g',
            Self::Phong => 'p',
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Self::ToggleRotation => "press 'a' to change arcball mode",
            Self::Reset => "press 'r' to reset arcball",
            Self::Smooth => "press 's' to switch to smooth shading",
            Self::Flat => "press 'f' to switch to flat shading",
            Self::Gouraud => "press 'g' to switch to Gouraud shading",
            Self::Phong => "press 'p' to switch to Phong shading",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_round_trip() {
        for key in ModeKey::ALL {
            assert_eq!(ModeKey::from_char(key.as_char()), Some(key));
        }
    }

    #[test]
    fn other_keys_are_not_recognized() {
        for c in ['A', 'R', 'x', 'q', ' ', '1', '\n'] {
            assert_eq!(ModeKey::from_char(c), None);
        }
    }
}
