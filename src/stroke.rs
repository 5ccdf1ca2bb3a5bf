// Turns a stream of fingertip positions into line segments.
// A stroke only ever connects two observed points: the first Draw frame after
// any pause just remembers where the finger is.

use crate::gesture::Mode;
use crate::tool::Tool;
use crate::types::Point;

/// Line thickness per tool kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thickness {
    pub brush: u32,
    pub eraser: u32,
}

impl Thickness {
    pub fn for_tool(&self, tool: Tool) -> u32 {
        match tool {
            Tool::Erase => self.eraser,
            Tool::Paint(_) => self.brush,
        }
    }
}

/// One piece of a stroke, ready to rasterise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub tool: Tool,
    pub thickness: u32,
}

#[derive(Debug)]
pub struct StrokeTracker {
    prev: Option<Point>,
    thickness: Thickness,
}

impl StrokeTracker {
    pub fn new(thickness: Thickness) -> Self {
        Self { prev: None, thickness }
    }

    /// Feed one frame. Returns the segment to draw, if any.
    pub fn advance(&mut self, mode: Mode, at: Point, tool: Tool) -> Option<Segment> {
        if mode != Mode::Draw {
            self.prev = None;
            return None;
        }

        let from = self.prev.replace(at)?;
        Some(Segment {
            from,
            to: at,
            tool,
            thickness: self.thickness.for_tool(tool),
        })
    }

    /// End the current stroke (hand left the frame).
    pub fn lift(&mut self) {
        self.prev = None;
    }

    pub fn previous(&self) -> Option<Point> {
        self.prev
    }
}
