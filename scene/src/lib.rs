mod arcball;
mod cone;
mod error;
pub mod math;
pub use arcball::*;
pub use cone::*;
pub use error::SceneError;
