// One painting session: the state that survives between frames and the
// per-frame step that turns a hand observation into an annotated frame.

use crate::canvas::{Canvas, preview_segment};
use crate::config::PainterConfig;
use crate::draw::{draw_line, fill_circle, fill_rect};
use crate::error::Result;
use crate::gesture::{Mode, classify};
use crate::header::HeaderSet;
use crate::landmarks::{HAND_CONNECTIONS, HandObservation, LandmarkSet};
use crate::stroke::{Segment, StrokeTracker, Thickness};
use crate::tool::{ActiveTool, select_by_x};
use crate::types::{FrameBuffer, Point};

const SKELETON_COLOR: u32 = 0x00FF_FFFF;
const JOINT_COLOR: u32 = 0x00FF_0000;

/// What happened during one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameReport {
    pub mode: Mode,
    pub segment: Option<Segment>,
}

pub struct Painter {
    width: usize,
    header_height: usize,
    cursor_radius: u32,
    show_landmarks: bool,
    headers: HeaderSet,
    active: ActiveTool,
    canvas: Canvas,
    stroke: StrokeTracker,
}

impl Painter {
    pub fn new(config: &PainterConfig, headers: HeaderSet) -> Self {
        Self {
            width: config.width,
            header_height: config.header_height,
            cursor_radius: config.cursor_radius,
            show_landmarks: config.show_landmarks,
            headers,
            active: ActiveTool::default(),
            canvas: Canvas::new(config.width, config.height, config.mask_threshold),
            stroke: StrokeTracker::new(Thickness {
                brush: config.brush_thickness,
                eraser: config.eraser_thickness,
            }),
        }
    }

    pub fn active_tool(&self) -> ActiveTool {
        self.active
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Run one frame. `frame` is the mirrored camera image on entry and the
    /// composed display image on return.
    pub fn step(&mut self, frame: &mut FrameBuffer, hand: &HandObservation) -> Result<FrameReport> {
        let mut report = FrameReport { mode: Mode::Idle, segment: None };

        if let Some((index, middle)) = fingertips(&hand.landmarks) {
            if self.show_landmarks {
                draw_skeleton(frame, &hand.landmarks);
            }
            report.mode = classify(&hand.fingers);
            self.interact(frame, &mut report, index, middle);
        } else {
            // No hand: nothing to select or draw, and the stroke is over.
            self.stroke.lift();
        }

        self.canvas.compose(frame, self.headers.get(self.active.zone))?;
        Ok(report)
    }

    fn interact(&mut self, frame: &mut FrameBuffer, report: &mut FrameReport, index: Point, middle: Point) {
        match report.mode {
            Mode::Select => {
                if index.y < self.header_height as i32 {
                    let picked = select_by_x(index.x, self.width);
                    if picked != self.active {
                        log::info!("Tool changed to {} (zone {})", picked.tool, picked.zone);
                        self.active = picked;
                    }
                }
                let color = self.active.tool.display_color().to_u32();
                fill_rect(
                    frame,
                    Point::new(index.x - 20, index.y - 25),
                    Point::new(middle.x + 20, middle.y + 25),
                    color,
                );
            }
            Mode::Draw => {
                let color = self.active.tool.display_color().to_u32();
                fill_circle(frame, index, self.cursor_radius, color);
            }
            Mode::Idle => {}
        }

        report.segment = self.stroke.advance(report.mode, index, self.active.tool);
        if let Some(seg) = &report.segment {
            preview_segment(frame, seg);
            self.canvas.apply(seg);
        }
    }
}

/// Index and middle fingertips, or None when no (complete) hand was seen.
fn fingertips(set: &LandmarkSet) -> Option<(Point, Point)> {
    Some((set.index_tip()?, set.middle_tip()?))
}

fn draw_skeleton(frame: &mut FrameBuffer, set: &LandmarkSet) {
    for &(a, b) in HAND_CONNECTIONS.iter() {
        if let (Some(pa), Some(pb)) = (set.get(a), set.get(b)) {
            draw_line(frame, pa, pb, SKELETON_COLOR);
        }
    }
    for lm in set.iter() {
        fill_circle(frame, lm.point(), 3, JOINT_COLOR);
    }
}
