// Finger flags -> interaction mode. Stateless; only the index and middle
// fingers matter.

use crate::landmarks::FingersUp;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Idle,
    Select,
    Draw,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Idle => "IDLE",
            Mode::Select => "SELECT",
            Mode::Draw => "DRAW",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Index + middle up selects, index alone draws, anything else idles.
pub fn classify(fingers: &FingersUp) -> Mode {
    match (fingers.index(), fingers.middle()) {
        (true, true) => Mode::Select,
        (true, false) => Mode::Draw,
        _ => Mode::Idle,
    }
}
