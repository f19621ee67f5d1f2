use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("failed to open the window")]
    Window(#[from] three_d::WindowError),
    #[error("failed to build the {name} shader program")]
    Shader {
        name: &'static str,
        #[source]
        source: three_d::CoreError,
    },
    #[error("invalid mesh parameters")]
    Scene(#[from] scene::SceneError),
}
