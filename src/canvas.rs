// Persistent stroke layer and the compositor that lays it over the camera.
//
// The canvas starts all black and only ever changes through [`Canvas::apply`].
// Compositing masks the camera with an inverted threshold of the canvas
// intensity, so strokes stay fully opaque on any background and untouched
// (or erased) pixels let the camera through unchanged.

use crate::draw::draw_thick_line;
use crate::error::Error;
use crate::stroke::Segment;
use crate::tool::Tool;
use crate::types::FrameBuffer;
use crate::vision::{intensity, merge_masked, paste_top, threshold_inv};

#[derive(Clone, Debug)]
pub struct Canvas {
    layer: FrameBuffer,
    threshold: u8,
}

impl Canvas {
    /// `threshold`: canvas intensity at or below which the camera shows through.
    pub fn new(width: usize, height: usize, threshold: u8) -> Self {
        Self { layer: FrameBuffer::black(width, height), threshold }
    }

    /// Raw stroke layer.
    pub fn layer(&self) -> &FrameBuffer {
        &self.layer
    }

    /// Draw a segment into the canvas for good. Erasing writes true
    /// background (zero) pixels.
    pub fn apply(&mut self, seg: &Segment) {
        let color = match seg.tool {
            Tool::Paint(c) => c.to_u32(),
            Tool::Erase => 0,
        };
        draw_thick_line(&mut self.layer, seg.from, seg.to, seg.thickness, color);
    }

    /// Merge the canvas into `frame`: `(frame AND mask) OR canvas`.
    pub fn composite_onto(&self, frame: &mut FrameBuffer) -> Result<(), Error> {
        let mask = threshold_inv(&self.layer, self.threshold);
        merge_masked(frame, &mask, &self.layer)
    }

    /// Full display pipeline: canvas merge, then the header strip on top.
    pub fn compose(&self, frame: &mut FrameBuffer, header: &FrameBuffer) -> Result<(), Error> {
        self.composite_onto(frame)?;
        paste_top(frame, header)
    }

    /// True when the canvas lets the camera through at (x,y).
    pub fn is_pass_through(&self, x: i32, y: i32) -> bool {
        self.layer
            .get(x, y)
            .map(|px| intensity(px) <= self.threshold)
            .unwrap_or(true)
    }
}

/// Draw a segment on the throwaway display copy. The eraser shows as black
/// for the frame in which it moves.
pub fn preview_segment(frame: &mut FrameBuffer, seg: &Segment) {
    let color = seg.tool.display_color();
    draw_thick_line(frame, seg.from, seg.to, seg.thickness, color.to_u32());
}
