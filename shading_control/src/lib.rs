pub mod collaborators;
mod controller;
mod event;
mod key;
mod lighting;
mod mode;
mod overlay;
pub use collaborators::{Collaborators, ShadedMesh, ShaderProgram, TextOverlay, Trackball};
pub use controller::*;
pub use event::*;
pub use key::ModeKey;
pub use lighting::*;
pub use mode::*;
pub use overlay::*;
