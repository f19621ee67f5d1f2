use anyhow::Context as _;
use common::ViewerOptions;
use entry::ConeViewer;
use three_d::*;
use tracing_subscriber::EnvFilter;

mod common;
mod entry;
mod error;
mod gui;
mod render;

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = ViewerOptions::default();

    // Create a window (a canvas on web)
    let window = Window::new(WindowSettings {
        title: options.title.clone(),
        #[cfg(not(target_arch = "wasm32"))]
        max_size: Some(options.max_size),
        ..Default::default()
    })
    .map_err(error::ViewerError::from)
    .context("failed to initialize program")?;

    let context: Context = window.gl();
    let mut viewer =
        ConeViewer::new(&context, options).context("failed to initialize program")?;

    window.render_loop(move |mut frame_input| {
        viewer.render_loop(&mut frame_input);
        FrameOutput::default()
    });
    Ok(())
}
