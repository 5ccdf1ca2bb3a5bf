// Per-pixel image operations used by the compositor.
// The mask pipeline is: colour canvas -> intensity -> inverted threshold ->
// (camera AND mask) OR canvas.
use crate::error::Error;
use crate::types::{FrameBuffer, Mask, Rgb};

/// Luma of a packed pixel, 0.299 R + 0.587 G + 0.114 B, rounded.
/// Fixed-point with 14 fractional bits.
#[inline]
pub fn intensity(px: u32) -> u8 {
    const R: u32 = 4899; // 0.299 * 2^14
    const G: u32 = 9617; // 0.587 * 2^14
    const B: u32 = 1868; // 0.114 * 2^14
    let c = Rgb::from_u32(px);
    ((c.r as u32 * R + c.g as u32 * G + c.b as u32 * B + (1 << 13)) >> 14) as u8
}

/// Inverted binary threshold over the frame's intensity:
/// `<= threshold` becomes 255 (pass-through), `> threshold` becomes 0.
pub fn threshold_inv(src: &FrameBuffer, threshold: u8) -> Mask {
    let values = src
        .pixels
        .iter()
        .map(|&px| if intensity(px) > threshold { 0 } else { 255 })
        .collect();
    Mask { width: src.width, height: src.height, values }
}

/// `dst = (dst AND mask) OR overlay`, with the single-channel mask applied
/// to all three channels.
pub fn merge_masked(dst: &mut FrameBuffer, mask: &Mask, overlay: &FrameBuffer) -> Result<(), Error> {
    if !dst.same_size(overlay) {
        return Err(Error::SizeMismatch(format!(
            "merge: frame {}x{} vs overlay {}x{}",
            dst.width, dst.height, overlay.width, overlay.height
        )));
    }
    if mask.width != dst.width || mask.height != dst.height {
        return Err(Error::SizeMismatch("merge: mask dimension mismatch".into()));
    }

    for ((px, &m), &over) in dst.pixels.iter_mut().zip(&mask.values).zip(&overlay.pixels) {
        let m = m as u32;
        let wide = (m << 16) | (m << 8) | m; // expand to 3 channels
        *px = (*px & wide) | over;
    }
    Ok(())
}

/// Copy `src` over the top rows of `dst`. Both must have the same width and
/// `src` must not be taller than `dst`.
pub fn paste_top(dst: &mut FrameBuffer, src: &FrameBuffer) -> Result<(), Error> {
    if src.width != dst.width || src.height > dst.height {
        return Err(Error::SizeMismatch(format!(
            "paste: {}x{} strip does not fit {}x{} frame",
            src.width, src.height, dst.width, dst.height
        )));
    }
    dst.pixels[..src.pixels.len()].copy_from_slice(&src.pixels);
    Ok(())
}
