use scene::ArcballOptions;
use shading_control::{LightingOptions, StatusOverlay};

pub struct LightingOptionsGUI<'a> {
    options: &'a mut LightingOptions,
}

impl<'a> LightingOptionsGUI<'a> {
    pub fn new(options: &'a mut LightingOptions) -> Self {
        Self { options }
    }

    /// Returns true when any value changed this frame.
    pub fn show_ui(&mut self, ui: &mut three_d::egui::Ui) -> bool {
        use three_d::egui::*;
        let mut changed = false;
        CollapsingHeader::new("Lighting").show(ui, |ui| {
            let position = &mut *self.options.light.position;
            for (value, label) in [
                (&mut position.x, "Light X"),
                (&mut position.y, "Light Y"),
                (&mut position.z, "Light Z"),
            ] {
                changed |= Slider::new(value, -3.0..=3.0)
                    .text(label)
                    .clamp_to_range(true)
                    .ui(ui)
                    .changed();
            }
            changed |= Slider::new(&mut self.options.material.shininess, 1.0..=128.0)
                .text("Shininess")
                .logarithmic(true)
                .clamp_to_range(true)
                .ui(ui)
                .changed();
        });
        changed
    }
}

pub struct ArcballOptionsGUI<'a> {
    options: &'a mut ArcballOptions,
}

impl<'a> ArcballOptionsGUI<'a> {
    pub fn new(options: &'a mut ArcballOptions) -> Self {
        Self { options }
    }

    pub fn show_ui(&mut self, ui: &mut three_d::egui::Ui) -> bool {
        use three_d::egui::*;
        let mut changed = false;
        CollapsingHeader::new("Arcball").show(ui, |ui| {
            changed |= Slider::new(&mut self.options.rotation_sensitivity, 0.1..=5.0)
                .text("Rotation")
                .clamp_to_range(true)
                .ui(ui)
                .changed();
            changed |= Slider::new(&mut self.options.zoom_sensitivity, 0.0001..=0.005)
                .text("Zoom")
                .logarithmic(true)
                .clamp_to_range(true)
                .ui(ui)
                .changed();
        });
        changed
    }
}

pub fn show_status_overlay(gui_context: &three_d::egui::Context, overlay: &StatusOverlay) {
    use three_d::egui::*;
    Area::new("status_overlay")
        .anchor(Align2::RIGHT_TOP, vec2(-10.0, 10.0))
        .show(gui_context, |ui| {
            ui.vertical(|ui| {
                for line in overlay.lines() {
                    ui.colored_label(Rgba::WHITE, line);
                }
            });
        });
}
