//! Pointer snapshot - polled once per frame, never pushed mid-step
//!
//! The host buffers its pointer events into this state between frames; the
//! step driver reads one consistent snapshot per step. The brushed segment
//! always lags the live cursor by one frame: `take_segment` hands out
//! (previous, current) and only then shifts previous forward.

use crate::domain::tool::Tool;

/// Off-canvas sentinel used before the first pointer event arrives.
const OFF_CANVAS: (f32, f32) = (-2.0, -2.0);

/// The capsule segment brushed during one frame.
#[derive(Clone, Copy, Debug)]
pub struct Stroke {
    pub from: (f32, f32),
    pub to: (f32, f32),
}

pub struct PointerState {
    position: (f32, f32),
    previous_position: (f32, f32),
    down: bool,
    tool: Tool,
}

impl PointerState {
    pub fn new(tool: Tool) -> PointerState {
        PointerState {
            position: OFF_CANVAS,
            previous_position: OFF_CANVAS,
            down: false,
            tool,
        }
    }

    pub fn moved(&mut self, x: f32, y: f32) {
        self.position = (x, y);
    }

    /// Press resets the previous position to the press point, so the first
    /// brushed segment degenerates to a point dab instead of sweeping in
    /// from wherever the pointer last was.
    pub fn pressed(&mut self, x: f32, y: f32) {
        self.down = true;
        self.position = (x, y);
        self.previous_position = (x, y);
    }

    pub fn released(&mut self) {
        self.down = false;
    }

    #[inline]
    pub fn is_down(&self) -> bool {
        self.down
    }

    #[inline]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    #[inline]
    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    /// The segment to brush this frame, shifting the one-frame lag forward.
    /// Called exactly once per step, whether or not the pointer is down.
    pub fn take_segment(&mut self) -> Stroke {
        let stroke = Stroke {
            from: self.previous_position,
            to: self.position,
        };
        self.previous_position = self.position;
        stroke
    }
}
