//! Frame-by-frame tests of a painter session driven by a scripted hand.

use std::collections::VecDeque;

use virtual_painter::config::PainterConfig;
use virtual_painter::gesture::Mode;
use virtual_painter::header::HeaderSet;
use virtual_painter::landmarks::{FingersUp, HAND_LANDMARKS, LandmarkProvider, LandmarkSet, observe};
use virtual_painter::painter::Painter;
use virtual_painter::tool::Tool;
use virtual_painter::types::{FrameBuffer, Rgb};

const CAMERA: u32 = 0x0040_6080;

/// What the hand does in one frame.
#[derive(Clone, Copy)]
enum Pose {
    Gone,
    Fist(i32, i32),
    Draw(i32, i32),
    Select(i32, i32),
}

/// Provider that replays a fixed list of poses.
struct ScriptedHand {
    script: VecDeque<Pose>,
    fingers: FingersUp,
}

impl ScriptedHand {
    fn new(script: impl IntoIterator<Item = Pose>) -> Self {
        Self { script: script.into_iter().collect(), fingers: FingersUp::default() }
    }
}

impl LandmarkProvider for ScriptedHand {
    fn detect(&mut self, _frame: &FrameBuffer) -> LandmarkSet {
        let pose = self.script.pop_front().unwrap_or(Pose::Gone);
        let (x, y, flags) = match pose {
            Pose::Gone => {
                self.fingers = FingersUp::default();
                return LandmarkSet::empty();
            }
            Pose::Fist(x, y) => (x, y, [false; 5]),
            Pose::Draw(x, y) => (x, y, [false, true, false, false, false]),
            Pose::Select(x, y) => (x, y, [false, true, true, false, false]),
        };
        self.fingers = FingersUp(flags);

        let mut pts = [(x, y + 100); HAND_LANDMARKS];
        pts[8] = (x, y);
        pts[12] = (x + 40, y);
        LandmarkSet::from_points(pts)
    }

    fn fingers_up(&self) -> FingersUp {
        self.fingers
    }
}

fn config() -> PainterConfig {
    PainterConfig {
        width: 400,
        height: 300,
        header_height: 50,
        brush_thickness: 10,
        eraser_thickness: 30,
        show_landmarks: false,
        ..PainterConfig::default()
    }
}

fn header_set(cfg: &PainterConfig) -> HeaderSet {
    HeaderSet::from_images(std::array::from_fn(|zone| {
        FrameBuffer::filled(cfg.width, cfg.header_height, 0x0010_1010 * (zone as u32 + 1))
    }))
}

/// Run the script and return the reports plus the last composed frame.
fn run(painter: &mut Painter, hand: &mut ScriptedHand, frames: usize) -> (Vec<Mode>, Vec<usize>, FrameBuffer) {
    let cfg = config();
    let mut modes = Vec::new();
    let mut segment_frames = Vec::new();
    let mut last = FrameBuffer::black(cfg.width, cfg.height);
    for i in 0..frames {
        let mut frame = FrameBuffer::filled(cfg.width, cfg.height, CAMERA);
        let obs = observe(hand, &frame);
        let report = painter.step(&mut frame, &obs).unwrap();
        modes.push(report.mode);
        if report.segment.is_some() {
            segment_frames.push(i);
        }
        last = frame;
    }
    (modes, segment_frames, last)
}

#[test]
fn no_hand_is_idle_and_shows_camera_under_header() {
    let cfg = config();
    let mut painter = Painter::new(&cfg, header_set(&cfg));
    let mut hand = ScriptedHand::new([Pose::Gone]);

    let (modes, segments, frame) = run(&mut painter, &mut hand, 1);

    assert_eq!(modes, vec![Mode::Idle]);
    assert!(segments.is_empty());
    let header_px = cfg.width * cfg.header_height;
    assert!(frame.pixels[..header_px].iter().all(|&p| p == 0x0010_1010));
    assert!(frame.pixels[header_px..].iter().all(|&p| p == CAMERA));
}

#[test]
fn drawing_persists_across_frames() {
    let cfg = config();
    let mut painter = Painter::new(&cfg, header_set(&cfg));
    let mut hand = ScriptedHand::new([
        Pose::Draw(100, 150),
        Pose::Draw(140, 150),
        Pose::Draw(180, 150),
        Pose::Gone,
        Pose::Gone,
    ]);

    let (modes, segments, frame) = run(&mut painter, &mut hand, 5);

    assert_eq!(&modes[..3], &[Mode::Draw; 3]);
    assert_eq!(segments, vec![1, 2]);
    let pink = Rgb::MAGENTA.to_u32();
    assert_eq!(frame.get(120, 150), Some(pink));
    assert_eq!(frame.get(160, 152), Some(pink));
    assert_eq!(frame.get(160, 200), Some(CAMERA));
}

#[test]
fn pause_restarts_stroke_without_a_jump_line() {
    let cfg = config();
    let mut painter = Painter::new(&cfg, header_set(&cfg));
    let mut hand = ScriptedHand::new([
        Pose::Draw(60, 100),
        Pose::Draw(80, 100),
        Pose::Fist(200, 200),
        Pose::Draw(300, 250),
        Pose::Draw(320, 250),
    ]);

    let (_, segments, frame) = run(&mut painter, &mut hand, 5);

    assert_eq!(segments, vec![1, 4]);
    // nothing drawn between the two strokes
    assert_eq!(frame.get(190, 175), Some(CAMERA));
}

#[test]
fn losing_the_hand_ends_the_stroke() {
    let cfg = config();
    let mut painter = Painter::new(&cfg, header_set(&cfg));
    let mut hand = ScriptedHand::new([Pose::Draw(60, 100), Pose::Gone, Pose::Draw(300, 250)]);

    let (_, segments, _) = run(&mut painter, &mut hand, 3);
    assert!(segments.is_empty());
}

#[test]
fn selecting_in_header_switches_tool_and_header() {
    let cfg = config();
    let mut painter = Painter::new(&cfg, header_set(&cfg));
    // zone width is 100: x=250 is zone 2 (green)
    let mut hand = ScriptedHand::new([Pose::Select(250, 20)]);

    let (modes, _, frame) = run(&mut painter, &mut hand, 1);

    assert_eq!(modes, vec![Mode::Select]);
    assert_eq!(painter.active_tool().zone, 2);
    assert_eq!(painter.active_tool().tool, Tool::Paint(Rgb::GREEN));
    assert_eq!(frame.get(5, 5), Some(0x0030_3030));
}

#[test]
fn selecting_below_header_keeps_tool() {
    let cfg = config();
    let mut painter = Painter::new(&cfg, header_set(&cfg));
    let mut hand = ScriptedHand::new([Pose::Select(350, 20), Pose::Select(50, 200)]);

    run(&mut painter, &mut hand, 2);
    assert_eq!(painter.active_tool().tool, Tool::Erase);
}

#[test]
fn erasing_a_stroke_restores_the_camera() {
    let cfg = config();
    let mut painter = Painter::new(&cfg, header_set(&cfg));
    let mut hand = ScriptedHand::new([
        Pose::Draw(100, 150),
        Pose::Draw(200, 150),
        Pose::Select(390, 10), // eraser
        Pose::Draw(100, 150),
        Pose::Draw(200, 150),
        Pose::Gone,
    ]);

    let (_, segments, frame) = run(&mut painter, &mut hand, 6);

    assert_eq!(segments, vec![1, 4]);
    assert!(painter.canvas().layer().pixels.iter().all(|&p| p == 0));
    assert_eq!(frame.get(150, 150), Some(CAMERA));
}

#[test]
fn draw_cursor_and_select_box_are_drawn_on_the_live_frame() {
    let cfg = config();
    let mut painter = Painter::new(&cfg, header_set(&cfg));
    let mut hand = ScriptedHand::new([Pose::Draw(200, 200)]);
    let (_, _, frame) = run(&mut painter, &mut hand, 1);
    // cursor disc, not yet on the canvas
    assert_eq!(frame.get(210, 200), Some(Rgb::MAGENTA.to_u32()));
    assert!(painter.canvas().is_pass_through(210, 200));

    let mut hand = ScriptedHand::new([Pose::Select(100, 200)]);
    let (_, _, frame) = run(&mut painter, &mut hand, 1);
    // box spans index (100) to middle (140) fingertip, padded by 20
    assert_eq!(frame.get(150, 220), Some(Rgb::MAGENTA.to_u32()));
    assert_eq!(frame.get(170, 220), Some(CAMERA));
}

#[test]
fn origin_fingertip_draws_like_any_other_point() {
    let cfg = config();
    let mut painter = Painter::new(&cfg, header_set(&cfg));
    let mut hand = ScriptedHand::new([Pose::Draw(0, 0), Pose::Draw(0, 0), Pose::Draw(30, 0)]);
    let (_, segments, _) = run(&mut painter, &mut hand, 3);
    assert_eq!(segments, vec![1, 2]);
    assert!(!painter.canvas().is_pass_through(15, 0));
}

#[test]
fn strokes_in_the_header_band_stay_hidden() {
    let cfg = config();
    let mut painter = Painter::new(&cfg, header_set(&cfg));
    let mut hand = ScriptedHand::new([Pose::Draw(100, 20), Pose::Draw(200, 20), Pose::Gone]);

    let (_, segments, frame) = run(&mut painter, &mut hand, 3);

    assert_eq!(segments, vec![1]);
    assert!(!painter.canvas().is_pass_through(150, 20));
    let header_px = cfg.width * cfg.header_height;
    assert!(frame.pixels[..header_px].iter().all(|&p| p == 0x0010_1010));
}

#[test]
fn oversized_brush_covers_the_frame_without_panicking() {
    let cfg = PainterConfig { brush_thickness: u32::MAX, ..config() };
    assert!(cfg.validate().is_err());

    let mut painter = Painter::new(&cfg, header_set(&cfg));
    let mut hand = ScriptedHand::new([Pose::Draw(300, 300), Pose::Draw(300, 300)]);
    let (_, segments, frame) = run(&mut painter, &mut hand, 2);

    assert_eq!(segments, vec![1]);
    assert!(painter.canvas().layer().pixels.iter().all(|&p| p == Rgb::MAGENTA.to_u32()));
    assert_eq!(frame.get(10, 299), Some(Rgb::MAGENTA.to_u32()));
}
