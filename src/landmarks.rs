// Hand landmarks and the detector seam.
//
// A [`LandmarkProvider`] turns a frame into at most one hand of 21 keypoints
// (the usual hand-model numbering: 0 wrist, 4 thumb tip, 8 index tip,
// 12 middle tip, 16 ring tip, 20 pinky tip) and reports which fingers are
// extended. The painter never looks inside a provider, so any back-end can be
// plugged in. [`PointerHand`] is the built-in one: it fakes a hand from the
// window pointer.

use crate::types::{FrameBuffer, Point};

/// Number of keypoints in a detected hand.
pub const HAND_LANDMARKS: usize = 21;

/// Landmark ids of the five fingertips, thumb through pinky.
pub const TIP_IDS: [usize; 5] = [4, 8, 12, 16, 20];

pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;

/// Bone pairs used to draw the hand skeleton.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (0, 1), (1, 2), (2, 3), (3, 4),
    (0, 5), (5, 6), (6, 7), (7, 8),
    (5, 9), (9, 10), (10, 11), (11, 12),
    (9, 13), (13, 14), (14, 15), (15, 16),
    (13, 17), (17, 18), (18, 19), (19, 20),
    (0, 17),
];

/// One detected keypoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Landmark {
    pub id: usize,
    pub x: i32,
    pub y: i32,
}

impl Landmark {
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// The keypoints of the detected hand, or nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LandmarkSet {
    points: Vec<Landmark>,
}

impl LandmarkSet {
    /// No hand in view.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from 21 `(x, y)` positions; ids follow the slice order.
    pub fn from_points(points: [(i32, i32); HAND_LANDMARKS]) -> Self {
        Self {
            points: points
                .iter()
                .enumerate()
                .map(|(id, &(x, y))| Landmark { id, x, y })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<Point> {
        self.points.get(id).map(Landmark::point)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.points.iter()
    }

    pub fn index_tip(&self) -> Option<Point> {
        self.get(INDEX_TIP)
    }

    pub fn middle_tip(&self) -> Option<Point> {
        self.get(MIDDLE_TIP)
    }
}

/// Which digits are extended, thumb through pinky.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingersUp(pub [bool; 5]);

impl FingersUp {
    pub fn index(&self) -> bool {
        self.0[1]
    }

    pub fn middle(&self) -> bool {
        self.0[2]
    }

    /// Derive the flags from keypoint geometry.
    ///
    /// Thumb counts as extended when its tip lies right of the joint below it
    /// (mirrored right hand); every other finger when its tip is above its
    /// middle joint. An empty set yields all fingers down.
    pub fn from_landmarks(set: &LandmarkSet) -> Self {
        let mut flags = [false; 5];
        if set.is_empty() {
            return Self(flags);
        }

        if let (Some(tip), Some(joint)) = (set.get(TIP_IDS[0]), set.get(TIP_IDS[0] - 1)) {
            flags[0] = tip.x > joint.x;
        }
        for (finger, &tip_id) in TIP_IDS.iter().enumerate().skip(1) {
            if let (Some(tip), Some(pip)) = (set.get(tip_id), set.get(tip_id - 2)) {
                flags[finger] = tip.y < pip.y;
            }
        }
        Self(flags)
    }
}

/// A hand detection back-end.
///
/// `detect` is called once per frame, then `fingers_up`, which must describe
/// the hand returned by the latest `detect` (all down if there was none).
pub trait LandmarkProvider {
    fn detect(&mut self, frame: &FrameBuffer) -> LandmarkSet;
    fn fingers_up(&self) -> FingersUp;
}

/// Everything the painter needs to know about the hand for one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HandObservation {
    pub landmarks: LandmarkSet,
    pub fingers: FingersUp,
}

/// Run a provider over one frame, in contract order.
pub fn observe<P: LandmarkProvider + ?Sized>(provider: &mut P, frame: &FrameBuffer) -> HandObservation {
    let landmarks = provider.detect(frame);
    let fingers = provider.fingers_up();
    HandObservation { landmarks, fingers }
}

/// Pointer state sampled from the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerSample {
    pub x: i32,
    pub y: i32,
    pub left: bool,  // held: index finger up (draw)
    pub right: bool, // held: index and middle up (select)
}

/// Landmark provider driven by the mouse instead of a hand model.
///
/// Left button draws, right button selects, no button hovers. Outside the
/// window there is no hand.
#[derive(Debug, Default)]
pub struct PointerHand {
    pointer: Option<PointerSample>,
    last: LandmarkSet,
}

impl PointerHand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the pointer state for the next `detect`.
    pub fn feed(&mut self, pointer: Option<PointerSample>) {
        self.pointer = pointer;
    }

    /// Lay out a plausible hand whose index tip sits on the pointer.
    fn synthesize(p: PointerSample) -> LandmarkSet {
        let (index_up, middle_up) = match (p.left, p.right) {
            (_, true) => (true, true),
            (true, false) => (true, false),
            (false, false) => (false, false),
        };

        let palm = (p.x + 30, p.y + 160);
        let mut pts = [palm; HAND_LANDMARKS];

        // Thumb tucked: tip left of the joint below it.
        pts[2] = (p.x - 30, p.y + 120);
        pts[3] = (p.x - 40, p.y + 110);
        pts[4] = (p.x - 55, p.y + 105);

        // Index, middle, ring, pinky columns.
        for (i, up) in [index_up, middle_up, false, false].into_iter().enumerate() {
            let base = 5 + 4 * i;
            let x = p.x + 30 * i as i32;
            pts[base] = (x, p.y + 100);
            pts[base + 1] = (x, p.y + 60);
            // Extended: tip above the middle joint; curled: folded back below it.
            pts[base + 2] = if up { (x, p.y + 30) } else { (x, p.y + 75) };
            pts[base + 3] = if up { (x, p.y) } else { (x, p.y + 90) };
        }
        LandmarkSet::from_points(pts)
    }
}

impl LandmarkProvider for PointerHand {
    fn detect(&mut self, _frame: &FrameBuffer) -> LandmarkSet {
        self.last = self.pointer.map(Self::synthesize).unwrap_or_default();
        self.last.clone()
    }

    fn fingers_up(&self) -> FingersUp {
        FingersUp::from_landmarks(&self.last)
    }
}
