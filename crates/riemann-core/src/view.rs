// File: crates/riemann-core/src/view.rs
// Summary: Pan/zoom view state and the pointer-driven controller that mutates it.

use crate::config::PlotterConfig;
use crate::geometry::{Axis, Vec2};
use crate::transform::Transform;

/// Mutable part of the transform: pixels-per-unit and the real point at canvas centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub scale: Vec2,
    pub anchor: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interaction {
    Idle,
    Dragging { last: Vec2 },
}

/// Pointer input in canvas pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up,
    Leave,
    /// `delta` follows the browser `wheelDelta` convention: +120 per notch away from the user.
    Wheel { at: Vec2, delta: f64 },
}

#[derive(Clone, Debug)]
pub struct ViewController {
    size: Vec2,
    min_scale: f64,
    zoom_factor: f64,
    state: ViewState,
    mode: Interaction,
}

impl ViewController {
    pub fn new(cfg: &PlotterConfig) -> Self {
        Self {
            size: cfg.size,
            min_scale: cfg.min_scale,
            zoom_factor: cfg.zoom_factor,
            state: ViewState { scale: cfg.scale, anchor: Vec2::default() },
            mode: Interaction::Idle,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn mode(&self) -> Interaction {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, Interaction::Dragging { .. })
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn transform(&self) -> Transform {
        Transform::new(self.size, self.state.scale, self.state.anchor)
    }

    pub fn set_anchor(&mut self, anchor: Vec2) {
        self.state.anchor = anchor;
    }

    /// Resize the canvas; the anchor stays at the centre.
    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
    }

    /// Dispatch one event. Returns `true` when the view changed and needs a redraw.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down(at) => {
                self.pointer_down(at);
                false
            }
            PointerEvent::Move(at) => self.pointer_move(at),
            PointerEvent::Up | PointerEvent::Leave => {
                self.release();
                false
            }
            PointerEvent::Wheel { at, delta } => {
                self.zoom_at(at, delta);
                true
            }
        }
    }

    pub fn pointer_down(&mut self, at: Vec2) {
        self.mode = Interaction::Dragging { last: at };
    }

    /// Pan by the pixel distance since the last recorded point, if dragging.
    pub fn pointer_move(&mut self, at: Vec2) -> bool {
        let Interaction::Dragging { last } = self.mode else {
            return false;
        };
        self.pan_by_pixels(last.x - at.x, last.y - at.y);
        self.mode = Interaction::Dragging { last: at };
        true
    }

    /// Pointer up and pointer leave both end a drag; leave may arrive without an up.
    pub fn release(&mut self) {
        self.mode = Interaction::Idle;
    }

    /// Move the anchor by a pixel offset (positive = content moves left/up).
    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64) {
        self.state.anchor.x += dx / self.state.scale.x;
        self.state.anchor.y += dy / self.state.scale.y;
    }

    /// Zoom symmetrically around the pointer so the real point under it stays put.
    pub fn zoom_at(&mut self, at: Vec2, wheel_delta: f64) {
        let old = self.state.scale;
        let d = self.zoom_factor * wheel_delta;
        let mut scale = Vec2::new(old.x + d, old.y - d);
        if scale.x <= self.min_scale {
            scale.x = self.min_scale;
        }
        // y scale stays negative
        if -scale.y <= self.min_scale {
            scale.y = -self.min_scale;
        }
        self.state.scale = scale;
        for axis in [Axis::X, Axis::Y] {
            let offset = at.get(axis) - 0.5 * self.size.get(axis);
            let inv_change = 1.0 / scale.get(axis) - 1.0 / old.get(axis);
            *self.state.anchor.get_mut(axis) -= offset * inv_change;
        }
        log::trace!(
            "zoom delta={} scale=({}, {}) anchor=({}, {})",
            wheel_delta,
            scale.x,
            scale.y,
            self.state.anchor.x,
            self.state.anchor.y
        );
    }
}
