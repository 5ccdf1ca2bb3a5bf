// Window + software drawing utilities.
// Provided here:
// 1) A window that shows the composed painter frame and reports pointer/keys.
// 2) Raster primitives: thick round-capped lines, discs, boxes, thin lines.
// 3) A tiny 5x7 bitmap font for the status line.

use crate::error::Error;
use crate::landmarks::PointerSample;
use crate::types::{FrameBuffer, Point};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the painter frame.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen. Also pumps window events.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down; the session ends on it.
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Pointer position and buttons, or None when the pointer is off the window.
    pub fn pointer(&self) -> Option<PointerSample> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| PointerSample {
                x: x as i32,
                y: y as i32,
                left: self.window.get_mouse_down(MouseButton::Left),
                right: self.window.get_mouse_down(MouseButton::Right),
            })
    }
}

/* ---------- Software drawing ---------- */

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Draw a thin line between a and b using Bresenham.
pub fn draw_line(fb: &mut FrameBuffer, a: Point, b: Point, color: u32) {
    let (mut x0, mut y0, x1, y1) = (a.x, a.y, b.x, b.y);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Squared distance from (px,py) to the segment a-b.
#[inline]
fn dist2_to_segment(px: f32, py: f32, a: Point, b: Point) -> f32 {
    let (ax, ay) = (a.x as f32, a.y as f32);
    let (vx, vy) = (b.x as f32 - ax, b.y as f32 - ay);
    let (wx, wy) = (px - ax, py - ay);
    let len2 = vx * vx + vy * vy;
    let t = if len2 > 0.0 { ((wx * vx + wy * vy) / len2).clamp(0.0, 1.0) } else { 0.0 };
    let (dx, dy) = (wx - t * vx, wy - t * vy);
    dx * dx + dy * dy
}

/// Cover every pixel within `radius` of the segment a-b (a capsule).
fn fill_capsule(fb: &mut FrameBuffer, a: Point, b: Point, radius: f32, color: u32) {
    if fb.width == 0 || fb.height == 0 || radius <= 0.0 {
        return;
    }
    // Nothing past the frame extent can be covered anyway.
    let pad = (radius.ceil() as i32).min(fb.width.max(fb.height) as i32);
    let x_min = a.x.min(b.x).saturating_sub(pad).max(0);
    let y_min = a.y.min(b.y).saturating_sub(pad).max(0);
    let x_max = a.x.max(b.x).saturating_add(pad).min(fb.width as i32 - 1);
    let y_max = a.y.max(b.y).saturating_add(pad).min(fb.height as i32 - 1);
    let r2 = radius * radius;

    for y in y_min..=y_max {
        let row = y as usize * fb.width;
        for x in x_min..=x_max {
            if dist2_to_segment(x as f32, y as f32, a, b) <= r2 {
                fb.pixels[row + x as usize] = color;
            }
        }
    }
}

/// Draw a line `thickness` pixels wide with round ends.
pub fn draw_thick_line(fb: &mut FrameBuffer, a: Point, b: Point, thickness: u32, color: u32) {
    fill_capsule(fb, a, b, thickness as f32 / 2.0, color);
}

/// Filled disc centred at c.
pub fn fill_circle(fb: &mut FrameBuffer, c: Point, radius: u32, color: u32) {
    fill_capsule(fb, c, c, radius as f32, color);
}

/// Filled axis-aligned box with corners a and b (inclusive, any order).
pub fn fill_rect(fb: &mut FrameBuffer, a: Point, b: Point, color: u32) {
    if fb.width == 0 || fb.height == 0 {
        return;
    }
    let x_min = a.x.min(b.x).max(0);
    let y_min = a.y.min(b.y).max(0);
    let x_max = a.x.max(b.x).min(fb.width as i32 - 1);
    let y_max = a.y.max(b.y).min(fb.height as i32 - 1);
    for y in y_min..=y_max {
        let row = y as usize * fb.width;
        for x in x_min..=x_max {
            fb.pixels[row + x as usize] = color;
        }
    }
}

/* ---------- 5x7 bitmap font (digits, A-Z, a little punctuation) ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y) with a 1-pixel black shadow.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (shadow, c) in [(1, 0x00000000), (0, color)] {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if (rowbits & (1 << (4 - rx))) != 0 {
                        put_pixel(fb, x + rx as i32 + shadow, y + ry as i32 + shadow, c);
                    }
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs; unknown characters leave a gap.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: u32 = 0x00FF_0000;

    fn count(fb: &FrameBuffer, color: u32) -> usize {
        fb.pixels.iter().filter(|&&p| p == color).count()
    }

    #[test]
    fn thick_line_covers_its_width_and_round_ends() {
        let mut fb = FrameBuffer::black(40, 40);
        draw_thick_line(&mut fb, Point::new(10, 20), Point::new(30, 20), 6, RED);

        assert_eq!(fb.get(20, 17), Some(RED));
        assert_eq!(fb.get(20, 23), Some(RED));
        assert_eq!(fb.get(20, 24), Some(0));
        // cap reaches past the end point along the axis
        assert_eq!(fb.get(33, 20), Some(RED));
        assert_eq!(fb.get(34, 20), Some(0));
        // but not into the corner of the bounding box
        assert_eq!(fb.get(33, 23), Some(0));
    }

    #[test]
    fn shapes_clip_at_frame_edges() {
        let mut fb = FrameBuffer::black(10, 10);
        fill_circle(&mut fb, Point::new(-3, -3), 5, RED);
        fill_rect(&mut fb, Point::new(8, 8), Point::new(20, 20), RED);
        draw_thick_line(&mut fb, Point::new(-50, 5), Point::new(50, 5), 1, RED);
        assert_eq!(fb.get(0, 0), Some(RED));
        assert_eq!(fb.get(9, 9), Some(RED));
        assert_eq!(fb.get(4, 5), Some(RED));
    }

    #[test]
    fn degenerate_segment_is_a_disc() {
        let mut a = FrameBuffer::black(30, 30);
        let mut b = FrameBuffer::black(30, 30);
        draw_thick_line(&mut a, Point::new(15, 15), Point::new(15, 15), 10, RED);
        fill_circle(&mut b, Point::new(15, 15), 5, RED);
        assert_eq!(a, b);
        assert!(count(&a, RED) > 70);
    }

    #[test]
    fn huge_thickness_fills_the_frame_without_overflow() {
        let mut fb = FrameBuffer::black(20, 10);
        draw_thick_line(&mut fb, Point::new(5, 5), Point::new(6, 5), u32::MAX, RED);
        assert_eq!(count(&fb, RED), 20 * 10);

        let mut fb = FrameBuffer::black(20, 10);
        draw_thick_line(&mut fb, Point::new(i32::MAX, 0), Point::new(i32::MIN, 9), 4, RED);
        fill_circle(&mut fb, Point::new(i32::MIN, i32::MAX), u32::MAX, RED);
    }

    #[test]
    fn fill_rect_accepts_corners_in_any_order() {
        let mut fb = FrameBuffer::black(10, 10);
        fill_rect(&mut fb, Point::new(5, 6), Point::new(2, 3), RED);
        assert_eq!(count(&fb, RED), 4 * 4);
    }

    #[test]
    fn text_renders_known_glyphs_only() {
        let mut fb = FrameBuffer::black(60, 10);
        draw_text_5x7(&mut fb, 0, 0, "DRAW", 0x00FF_FFFF);
        assert!(count(&fb, 0x00FF_FFFF) > 0);

        let mut blank = FrameBuffer::black(60, 10);
        draw_text_5x7(&mut blank, 0, 0, "~~", 0x00FF_FFFF);
        assert_eq!(count(&blank, 0x00FF_FFFF), 0);
    }
}
