use std::collections::HashMap;

use scene::math::{Matrix4, Vector2, Vector3};
use scene::{Arcball, Cone, ConeBuilder};
use shading_control::{
    AppEvent, Collaborators, Dispatch, ModeKey, ModeState, OverlayLine, RotationMode, Session,
    ShadedMesh, ShaderProgram, ShadingController, ShadingMethod, ShadingMode, StatusOverlay,
    SHADING_FLAG_UNIFORM,
};

/// CPU cone that remembers what was last pushed to the "GPU".
struct RecordingMesh {
    cone: Cone,
    uploaded: Vec<Vector3>,
    uploads: usize,
}

impl ShadedMesh for RecordingMesh {
    fn copy_vertex_normals_to_normals(&mut self) {
        self.cone.copy_vertex_normals_to_normals();
    }

    fn copy_face_normals_to_normals(&mut self) {
        self.cone.copy_face_normals_to_normals();
    }

    fn update_normals(&mut self) {
        self.uploaded = self.cone.normals().to_vec();
        self.uploads += 1;
    }
}

#[derive(Default)]
struct RecordingShader {
    uses: usize,
    mat4s: HashMap<String, Matrix4>,
    vec3s: HashMap<String, Vector3>,
    ints: HashMap<String, i32>,
}

impl ShaderProgram for RecordingShader {
    fn use_program(&mut self) {
        self.uses += 1;
    }

    fn set_mat4(&mut self, name: &str, value: &Matrix4) {
        self.mat4s.insert(name.to_string(), *value);
    }

    fn set_vec3(&mut self, name: &str, value: &Vector3) {
        self.vec3s.insert(name.to_string(), *value);
    }

    fn set_float(&mut self, _: &str, _: f32) {}

    fn set_int(&mut self, name: &str, value: i32) {
        self.ints.insert(name.to_string(), value);
    }
}

struct Rig {
    session: Session,
    mesh: RecordingMesh,
    arcball: Arcball,
    shader: RecordingShader,
    overlay: StatusOverlay,
}

impl Rig {
    fn new() -> Self {
        let cone = ConeBuilder::default().with_segments(12).build().unwrap();
        let mut rig = Self {
            session: Session::new(ShadingController::new()),
            mesh: RecordingMesh {
                cone,
                uploaded: vec![],
                uploads: 0,
            },
            arcball: Arcball::default(),
            shader: RecordingShader::default(),
            overlay: StatusOverlay::default(),
        };
        let controller = rig.session.controller();
        controller.initialize(&mut Collaborators {
            mesh: &mut rig.mesh,
            arcball: &mut rig.arcball,
            shader: &mut rig.shader,
            overlay: &mut rig.overlay,
        });
        rig
    }

    fn send(&mut self, events: &[AppEvent]) -> Dispatch {
        for event in events {
            self.session.push(*event);
        }
        self.session.drain(&mut Collaborators {
            mesh: &mut self.mesh,
            arcball: &mut self.arcball,
            shader: &mut self.shader,
            overlay: &mut self.overlay,
        })
    }

    fn press(&mut self, keys: &str) -> Dispatch {
        let events: Vec<AppEvent> = keys.chars().map(AppEvent::Key).collect();
        self.send(&events)
    }

    fn frame(&mut self) {
        self.send(&[AppEvent::Frame]);
        self.session
            .controller_mut()
            .prepare_frame(&self.arcball, &mut self.shader);
    }

    fn state(&self) -> &ModeState {
        self.session.controller().state()
    }

    fn shading_flag(&self) -> i32 {
        self.shader.ints[SHADING_FLAG_UNIFORM]
    }

    fn normals_are_vertex_normals(&self) -> bool {
        self.mesh.uploaded == self.mesh.cone.vertex_normals()
    }

    fn normals_are_face_normals(&self) -> bool {
        self.mesh.uploaded == self.mesh.cone.face_normals()
    }

    /// Everything a viewer could notice, for idempotence checks.
    fn observable(&self) -> (ModeState, StatusOverlay, Vec<Vector3>, i32) {
        (
            self.state().clone(),
            self.overlay.clone(),
            self.mesh.uploaded.clone(),
            self.shading_flag(),
        )
    }
}

#[test]
fn starts_in_camera_smooth_gouraud() {
    let rig = Rig::new();
    assert_eq!(rig.state(), &ModeState::default());
    assert_eq!(rig.overlay.text(OverlayLine::Rotation), "arcball mode: CAMERA");
    assert_eq!(
        rig.overlay.text(OverlayLine::Shading),
        "shading mode: SMOOTH (GOURAUD)"
    );
    assert!(rig.normals_are_vertex_normals());
    assert_eq!(rig.shading_flag(), 0);
}

#[test]
fn flat_key_selects_face_normals() {
    let mut rig = Rig::new();
    let dispatch = rig.press("f");
    assert_eq!(rig.state().rotation, RotationMode::Camera);
    assert_eq!(rig.state().shading_mode, ShadingMode::Flat);
    assert_eq!(rig.state().shading_method, ShadingMethod::Gouraud);
    assert_eq!(
        rig.overlay.text(OverlayLine::Shading),
        "shading mode: FLAT (GOURAUD)"
    );
    assert!(rig.normals_are_face_normals());
    assert_eq!(dispatch.immediate_redraws, 1);
}

#[test]
fn gouraud_after_flat_forces_vertex_normals() {
    let mut rig = Rig::new();
    rig.press("f");
    rig.press("g");
    assert_eq!(rig.state().shading_method, ShadingMethod::Gouraud);
    // the mode line still says FLAT; only the normals follow the last key
    assert_eq!(rig.state().shading_mode, ShadingMode::Flat);
    assert_eq!(
        rig.overlay.text(OverlayLine::Shading),
        "shading mode: FLAT (GOURAUD)"
    );
    assert!(rig.normals_are_vertex_normals());
}

#[test]
fn toggle_then_reset_ends_in_camera_with_identity_model() {
    let mut rig = Rig::new();
    rig.press("a");
    assert_eq!(rig.state().rotation, RotationMode::Model);
    assert_eq!(rig.overlay.text(OverlayLine::Rotation), "arcball mode: MODEL");
    rig.send(&[AppEvent::Drag(Vector2::new(0.3, 0.1))]);
    rig.frame();
    assert!(rig.state().model_matrix != Matrix4::identity());

    rig.press("r");
    assert_eq!(rig.state().rotation, RotationMode::Camera);
    assert_eq!(rig.state().model_matrix, Matrix4::identity());
    assert_eq!(rig.arcball.model_rot_matrix(), Matrix4::identity());
    assert_eq!(rig.overlay.text(OverlayLine::Rotation), "arcball mode: CAMERA");
}

#[test]
fn phong_sets_the_fragment_flag_and_gouraud_clears_it() {
    let mut rig = Rig::new();
    let uploads = rig.mesh.uploads;
    rig.press("p");
    assert_eq!(rig.shading_flag(), 1);
    assert_eq!(rig.state().shading_method, ShadingMethod::Phong);
    assert_eq!(rig.mesh.uploads, uploads);
    assert_eq!(
        rig.overlay.text(OverlayLine::Shading),
        "shading mode: SMOOTH (PHONG)"
    );
    rig.press("g");
    assert_eq!(rig.shading_flag(), 0);
}

#[test]
fn shading_mode_keys_keep_the_method() {
    let mut rig = Rig::new();
    rig.press("p");
    rig.press("f");
    assert_eq!(rig.state().shading_method, ShadingMethod::Phong);
    rig.press("s");
    assert_eq!(rig.state().shading_method, ShadingMethod::Phong);
    assert_eq!(
        rig.overlay.text(OverlayLine::Shading),
        "shading mode: SMOOTH (PHONG)"
    );
}

#[test]
fn repeating_a_key_changes_nothing_further() {
    for key in ModeKey::ALL.into_iter().filter(|k| *k != ModeKey::ToggleRotation) {
        let key = key.as_char().to_string();
        let mut once = Rig::new();
        once.press("f");
        once.press(&key);
        let mut twice = Rig::new();
        twice.press("f");
        twice.press(&key);
        twice.press(&key);
        assert_eq!(once.observable(), twice.observable(), "key {key}");
    }
}

#[test]
fn unrecognized_keys_are_ignored() {
    let mut rig = Rig::new();
    rig.press("f");
    let before = rig.observable();
    let dispatch = rig.press("xyzAF 1");
    assert_eq!(dispatch, Dispatch::default());
    assert_eq!(rig.observable(), before);
}

#[test]
fn only_shading_keys_request_an_immediate_redraw() {
    let mut rig = Rig::new();
    assert_eq!(rig.press("ar").immediate_redraws, 0);
    assert_eq!(rig.press("sfgp").immediate_redraws, 4);
    let dispatch = rig.send(&[AppEvent::Key('s'), AppEvent::Frame]);
    assert!(dispatch.frame_due);
    assert!(dispatch.should_render());
}

#[test]
fn every_short_sequence_keeps_the_invariants() {
    let keys = ['a', 'r', 's', 'f', 'g', 'p'];
    for first in keys {
        for second in keys {
            for third in keys {
                let mut rig = Rig::new();
                let mut expected_rotation = RotationMode::Camera;
                let mut last_normals = 'g';
                for key in [first, second, third] {
                    let method_before = rig.state().shading_method;
                    rig.press(&key.to_string());
                    match key {
                        'a' => expected_rotation = expected_rotation.toggled(),
                        'r' => expected_rotation = RotationMode::Camera,
                        's' | 'f' => {
                            assert_eq!(rig.state().shading_method, method_before);
                            last_normals = key;
                        }
                        'g' => last_normals = key,
                        _ => {}
                    }
                    let state = rig.state();
                    assert_eq!(state.rotation, expected_rotation);
                    if key == 'r' {
                        assert_eq!(state.model_matrix, Matrix4::identity());
                    }
                    let expected_text = format!(
                        "shading mode: {} ({})",
                        state.shading_mode, state.shading_method
                    );
                    assert_eq!(rig.overlay.text(OverlayLine::Shading), expected_text);
                    assert_eq!(
                        rig.shading_flag(),
                        state.shading_method.shader_flag()
                    );
                    if last_normals == 'f' {
                        assert!(rig.normals_are_face_normals());
                    } else {
                        assert!(rig.normals_are_vertex_normals());
                    }
                }
            }
        }
    }
}

#[test]
fn camera_mode_frames_use_the_orbit_view() {
    let mut rig = Rig::new();
    rig.send(&[AppEvent::Drag(Vector2::new(0.2, 0.2)), AppEvent::Zoom(5.0)]);
    rig.frame();
    assert_eq!(rig.shader.mat4s["u_view"], rig.arcball.view_matrix());
    assert_eq!(rig.shader.mat4s["u_model"], Matrix4::identity());
    let eye = rig.shader.vec3s["u_viewPos"];
    assert!((eye.norm() - rig.arcball.distance()).abs() < 1e-4);
}

#[test]
fn model_mode_frames_rotate_the_model_and_keep_it_afterwards() {
    let mut rig = Rig::new();
    rig.press("a");
    rig.send(&[AppEvent::Drag(Vector2::new(-0.3, 0.2))]);
    rig.frame();
    let rotated = rig.arcball.model_rot_matrix();
    assert_eq!(rig.shader.mat4s["u_model"], rotated);
    assert_eq!(
        rig.shader.mat4s["u_view"],
        rig.arcball.view_cam_distance_matrix()
    );

    // back in camera mode the model keeps its last rotation
    rig.press("a");
    rig.frame();
    assert_eq!(rig.state().model_matrix, rotated);
    assert_eq!(rig.shader.mat4s["u_view"], rig.arcball.view_matrix());
}
