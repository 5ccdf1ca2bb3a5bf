// Core types shared by the camera, the painter session and the window.

use image::RgbImage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A frame filled with one packed colour.
    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    /// An all-zero (black) frame.
    pub fn black(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0)
    }

    /// Pack an `image` RGB buffer into 0x00RRGGBB pixels.
    pub fn from_rgb_image(img: &RgbImage) -> Self {
        let (w, h) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| Rgb::new(p[0], p[1], p[2]).to_u32())
            .collect();
        Self { width: w as usize, height: h as usize, pixels }
    }

    #[inline]
    pub fn same_size(&self, other: &FrameBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Packed pixel at (x,y), or None outside the frame.
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width + x as usize])
    }
}

/// 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub const fn from_u32(px: u32) -> Self {
        Self {
            r: ((px >> 16) & 0xFF) as u8,
            g: ((px >> 8) & 0xFF) as u8,
            b: (px & 0xFF) as u8,
        }
    }
}

/// Pixel coordinate in frame space. May lie outside the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Single-channel compositing mask: 255 = show the camera, 0 = show the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    pub width: usize,
    pub height: usize,
    pub values: Vec<u8>,   // length = width * height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_packs_as_minifb_pixel() {
        let c = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(c.to_u32(), 0x0012_3456);
        assert_eq!(Rgb::from_u32(0x0012_3456), c);
    }

    #[test]
    fn from_rgb_image_keeps_row_major_order() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(1, 0, image::Rgb([255, 0, 0]));
        img.put_pixel(0, 1, image::Rgb([0, 0, 255]));
        let fb = FrameBuffer::from_rgb_image(&img);
        assert_eq!((fb.width, fb.height), (2, 2));
        assert_eq!(fb.pixels, vec![0, 0x00FF_0000, 0x0000_00FF, 0]);
    }

    #[test]
    fn get_is_none_outside_frame() {
        let fb = FrameBuffer::filled(3, 2, 7);
        assert_eq!(fb.get(2, 1), Some(7));
        assert_eq!(fb.get(3, 0), None);
        assert_eq!(fb.get(-1, 0), None);
    }
}
