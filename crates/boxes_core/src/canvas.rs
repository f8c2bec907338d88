//! Drawing seam between the simulation and a renderer

use crate::entity::{Color, Rect};

/// Immediate-mode drawing target for one frame.
pub trait Canvas {
    /// Fill the whole drawing area with `color`.
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// Canvas that records draw calls, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingCanvas {
    pub clears: Vec<Color>,
    pub rects: Vec<(Rect, Color)>,
}

#[cfg(test)]
impl RecordingCanvas {
    pub fn reset(&mut self) {
        self.clears.clear();
        self.rects.clear();
    }
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.clears.push(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.rects.push((rect, color));
    }
}
