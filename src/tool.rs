// Tool palette: the header strip is split into four zones, one per tool.

use crate::types::Rgb;
use std::fmt;

/// Number of zones (and header images) in the palette.
pub const TOOL_COUNT: usize = 4;

/// What a stroke does to the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Paint(Rgb),
    Erase,
}

impl Tool {
    /// Colour used for on-screen feedback; the eraser shows as black.
    pub fn display_color(&self) -> Rgb {
        match self {
            Tool::Paint(c) => *c,
            Tool::Erase => Rgb::BLACK,
        }
    }

    pub fn is_eraser(&self) -> bool {
        matches!(self, Tool::Erase)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Paint(c) if *c == Rgb::MAGENTA => f.write_str("MAGENTA"),
            Tool::Paint(c) if *c == Rgb::BLUE => f.write_str("BLUE"),
            Tool::Paint(c) if *c == Rgb::GREEN => f.write_str("GREEN"),
            Tool::Paint(c) => write!(f, "RGB {} {} {}", c.r, c.g, c.b),
            Tool::Erase => f.write_str("ERASER"),
        }
    }
}

/// Tool for each zone, left to right.
pub const PALETTE: [Tool; TOOL_COUNT] = [
    Tool::Paint(Rgb::MAGENTA),
    Tool::Paint(Rgb::BLUE),
    Tool::Paint(Rgb::GREEN),
    Tool::Erase,
];

/// The selected tool and which header image shows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveTool {
    pub zone: usize,
    pub tool: Tool,
}

impl Default for ActiveTool {
    fn default() -> Self {
        Self::for_zone(0)
    }
}

impl ActiveTool {
    pub fn for_zone(zone: usize) -> Self {
        let zone = zone.min(TOOL_COUNT - 1);
        Self { zone, tool: PALETTE[zone] }
    }
}

/// Zone under `x` for a header `width` pixels wide.
///
/// Zones are `width / 4` wide; the last one also takes the remainder.
/// Coordinates off either edge snap to the nearest zone.
pub fn zone_for_x(x: i32, width: usize) -> usize {
    let zone_width = (width / TOOL_COUNT).max(1);
    let x = x.max(0) as usize;
    (x / zone_width).min(TOOL_COUNT - 1)
}

/// Tool picked by pointing at `x` in the header.
pub fn select_by_x(x: i32, width: usize) -> ActiveTool {
    ActiveTool::for_zone(zone_for_x(x, width))
}
