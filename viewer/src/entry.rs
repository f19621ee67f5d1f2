use scene::math::Vector2;
use scene::{Arcball, ConeBuilder};
use shading_control::{
    AppEvent, Collaborators, LightingOptions, Session, ShaderProgram, ShadingController,
    StatusOverlay,
};
use three_d::{ClearState, Event, FrameInput, Key, Modifiers, MouseButton, Viewport};
use tracing::{debug, info};

use crate::common::ViewerOptions;
use crate::error::ViewerError;
use crate::gui::{show_status_overlay, ArcballOptionsGUI, LightingOptionsGUI};
use crate::render::{ConeRender, GpuProgram, LampRender};

/// Owns all viewer state. Input is queued into the session and drained once
/// per display frame, right before rendering.
pub struct ConeViewer {
    gui: three_d::GUI,
    options: ViewerOptions,
    session: Session,
    cone: ConeRender,
    cone_program: GpuProgram,
    lamp: LampRender,
    arcball: Arcball,
    overlay: StatusOverlay,
    viewport_size: Option<(u32, u32)>,
    lighting_dirty: bool,
}

impl ConeViewer {
    pub fn new(context: &three_d::Context, options: ViewerOptions) -> Result<Self, ViewerError> {
        let cone = ConeBuilder::default()
            .with_segments(options.cone_segments)
            .build()?;
        let lamp_cone = ConeBuilder::default()
            .with_segments(options.cone_segments)
            .build()?;

        let mut slf = Self {
            gui: three_d::GUI::new(context),
            cone: ConeRender::new(context, cone),
            cone_program: GpuProgram::new(
                context,
                "cone",
                include_str!("shaders/cone.vert"),
                include_str!("shaders/cone.frag"),
            )?,
            lamp: LampRender::new(context, &lamp_cone)?,
            arcball: Arcball::new(options.arcball),
            session: Session::new(ShadingController::new()),
            overlay: StatusOverlay::default(),
            viewport_size: None,
            lighting_dirty: true,
            options,
        };
        slf.session.controller().initialize(&mut Collaborators {
            mesh: &mut slf.cone,
            arcball: &mut slf.arcball,
            shader: &mut slf.cone_program,
            overlay: &mut slf.overlay,
        });
        info!(segments = slf.options.cone_segments, "viewer ready");
        Ok(slf)
    }

    pub fn render_loop(&mut self, frame_input: &mut FrameInput) {
        self.update_gui(frame_input);
        self.queue_input(frame_input);
        self.session.push(AppEvent::Frame);

        let dispatch = self.session.drain(&mut Collaborators {
            mesh: &mut self.cone,
            arcball: &mut self.arcball,
            shader: &mut self.cone_program,
            overlay: &mut self.overlay,
        });
        if dispatch.immediate_redraws > 0 {
            debug!(count = dispatch.immediate_redraws, "redraw requested by input");
        }

        self.sync_uniforms(frame_input.viewport);
        if dispatch.should_render() {
            self.render(frame_input);
        }
    }

    fn update_gui(&mut self, frame_input: &mut FrameInput) {
        let mut lighting_changed = false;
        let mut arcball_changed = false;
        self.gui.update(
            &mut frame_input.events,
            frame_input.accumulated_time,
            frame_input.viewport,
            frame_input.device_pixel_ratio,
            |gui_context| {
                use three_d::egui::*;
                SidePanel::left("panel").show(gui_context, |ui| {
                    lighting_changed =
                        LightingOptionsGUI::new(&mut self.options.lighting).show_ui(ui);
                    arcball_changed =
                        ArcballOptionsGUI::new(&mut self.options.arcball).show_ui(ui);
                });
                show_status_overlay(gui_context, &self.overlay);
            },
        );
        if lighting_changed {
            self.lighting_dirty = true;
        }
        if arcball_changed {
            self.arcball.set_options(self.options.arcball);
        }
    }

    fn queue_input(&mut self, frame_input: &FrameInput) {
        let viewport = frame_input.viewport;
        let half_extent = (viewport.width.min(viewport.height) as f32 / 2.0).max(1.0);
        for event in &frame_input.events {
            match event {
                Event::KeyPress {
                    kind,
                    modifiers,
                    handled: false,
                    ..
                } => {
                    if let Some(ch) = key_char(kind, modifiers) {
                        self.session.push(AppEvent::Key(ch));
                    }
                }
                Event::MouseMotion {
                    button: Some(MouseButton::Left),
                    delta,
                    handled: false,
                    ..
                } => {
                    let offset = Vector2::new(delta.0 / half_extent, -delta.1 / half_extent);
                    self.session.push(AppEvent::Drag(offset));
                }
                Event::MouseWheel {
                    delta,
                    handled: false,
                    ..
                } => {
                    self.session.push(AppEvent::Zoom(delta.1));
                }
                _ => {}
            }
        }
    }

    /// Re-uploads projection and lighting when the viewport or options change.
    fn sync_uniforms(&mut self, viewport: Viewport) {
        let size = (viewport.width, viewport.height);
        if self.viewport_size != Some(size) {
            let projection = self.options.projection(viewport.aspect());
            self.cone_program.use_program();
            self.cone_program.set_mat4("u_projection", &projection);
            let lamp = self.lamp.program_mut();
            lamp.use_program();
            lamp.set_mat4("u_projection", &projection);
            self.viewport_size = Some(size);
        }
        if self.lighting_dirty {
            apply_lighting(&self.options.lighting, &mut self.cone_program, &mut self.lamp);
            self.lighting_dirty = false;
        }
    }

    fn render(&mut self, frame_input: &FrameInput) {
        let matrices = self
            .session
            .controller_mut()
            .prepare_frame(&self.arcball, &mut self.cone_program);
        let [r, g, b] = self.options.clear_color;
        let viewport = frame_input.viewport;
        frame_input
            .screen()
            .clear(ClearState::color_and_depth(r, g, b, 1.0, 1.0))
            .write(|| {
                self.cone.draw(&self.cone_program, viewport);
                self.lamp.draw(&matrices.view, viewport);
                self.gui.render();
            });
    }
}

fn apply_lighting(lighting: &LightingOptions, cone: &mut GpuProgram, lamp: &mut LampRender) {
    lighting.apply(cone);
    let lamp = lamp.program_mut();
    lamp.use_program();
    lamp.set_mat4("u_model", &lighting.lamp_model_matrix());
}

/// Only bare lower-case letters count; chords such as Shift+A or Ctrl+R are
/// not mode keys.
fn key_char(key: &Key, modifiers: &Modifiers) -> Option<char> {
    if modifiers.shift || modifiers.ctrl || modifiers.alt || modifiers.command {
        return None;
    }
    match key {
        Key::A => Some('a'),
        Key::R => Some('r'),
        Key::S => Some('s'),
        Key::F => Some('f'),
        Key::G => Some('g'),
        Key::P => Some('p'),
        _ => None,
    }
}
