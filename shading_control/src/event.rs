use std::collections::VecDeque;

use scene::math::Vector2;
use tracing::trace;

use crate::collaborators::Collaborators;
use crate::controller::{Redraw, ShadingController};
use crate::key::ModeKey;

/// Input and timer messages delivered to the owning render loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// A key press, already reduced to its character.
    Key(char),
    /// Rotation drag in normalized screen units, +y up.
    Drag(Vector2),
    Zoom(f32),
    /// Display refresh tick.
    Frame,
}

/// What the loop has to do after draining its queue. Immediate redraws are
/// served by the render pass of the frame that drained them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatch {
    pub immediate_redraws: usize,
    pub frame_due: bool,
}

impl Dispatch {
    #[inline]
    pub fn should_render(&self) -> bool {
        self.frame_due || self.immediate_redraws > 0
    }
}

/// Single-owner event queue in front of the controller. Events are applied
/// strictly in arrival order, so the render pass always sees the state left by
/// the last event before it.
#[derive(Debug, Default)]
pub struct Session {
    controller: ShadingController,
    pending: VecDeque<AppEvent>,
}

impl Session {
    pub fn new(controller: ShadingController) -> Self {
        Self {
            controller,
            pending: VecDeque::new(),
        }
    }

    #[inline]
    pub fn controller(&self) -> &ShadingController {
        &self.controller
    }

    #[inline]
    pub fn controller_mut(&mut self) -> &mut ShadingController {
        &mut self.controller
    }

    pub fn push(&mut self, event: AppEvent) {
        self.pending.push_back(event);
    }

    pub fn drain(&mut self, c: &mut Collaborators) -> Dispatch {
        let mut dispatch = Dispatch::default();
        while let Some(event) = self.pending.pop_front() {
            trace!(?event, "dispatch");
            match event {
                AppEvent::Key(ch) => {
                    let Some(key) = ModeKey::from_char(ch) else {
                        continue;
                    };
                    if self.controller.handle_key(key, c) == Redraw::Immediate {
                        dispatch.immediate_redraws += 1;
                    }
                }
                AppEvent::Drag(offset) => c.arcball.drag(offset),
                AppEvent::Zoom(delta) => c.arcball.zoom(delta),
                AppEvent::Frame => dispatch.frame_due = true,
            }
        }
        dispatch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediate_redraw_alone_renders() {
        let dispatch = Dispatch {
            immediate_redraws: 1,
            frame_due: false,
        };
        assert!(dispatch.should_render());
        assert!(!Dispatch::default().should_render());
    }
}
