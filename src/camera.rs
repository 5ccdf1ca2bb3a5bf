// Opens the camera and turns each frame into a mirrored, fixed-size buffer.
// When the painter loop calls `next_frame()` it gets a Vec<u32> of 0x00RRGGBB
// pixels, already flipped so the user sees themselves as in a mirror.

use crate::error::Error;
use crate::types::FrameBuffer;

use nokhwa::{
    Camera,
    pixel_format::RgbFormat,
    utils::{
        CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType, Resolution,
    },
};

use image::{RgbImage, imageops};

// A small wrapper around nokhwa::Camera so the frame loop stays clean.
pub struct CameraCapture {
    cam: Camera,
    width: u32,   // size every frame is normalised to
    height: u32,
}

impl CameraCapture {
    /// Open camera `index` asking for the closest format to `width`x`height`.
    /// Frames are resized to exactly that size even if the device picks another.
    pub fn new(index: u32, width: u32, height: u32) -> Result<Self, Error> {
        let idx = CameraIndex::Index(index);

        let fmt = CameraFormat::new(
            Resolution::new(width, height),
            FrameFormat::YUYV, // uncompressed; cheap to convert to RGB
            30,                // target FPS
        );

        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        let mut cam = Camera::new(idx, req)
            .map_err(|e| Error::CameraInit(format!("Create camera: {e}")))?;

        cam.open_stream()
            .map_err(|e| Error::CameraInit(format!("Open stream: {e}")))?;

        let actual = cam.resolution();
        log::info!(
            "Camera {index} streaming at {}x{}, frames scaled to {width}x{height}",
            actual.width(),
            actual.height()
        );

        Ok(Self { cam, width, height })
    }

    /// Grab one frame (blocking), mirror it and scale it to the painter size.
    /// Any failure here is an acquisition failure and ends the session.
    pub fn next_frame(&mut self) -> Result<FrameBuffer, Error> {
        let frame = self
            .cam
            .frame()
            .map_err(|e| Error::CameraFrame(format!("Fetch frame: {e}")))?;

        let rgb_img = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| Error::CameraFrame(format!("Decode RGB: {e}")))?;

        Ok(prepare_frame(rgb_img, self.width, self.height))
    }
}

/// Mirror horizontally, resize if needed, and pack for the window.
pub fn prepare_frame(mut img: RgbImage, width: u32, height: u32) -> FrameBuffer {
    imageops::flip_horizontal_in_place(&mut img);
    if img.dimensions() != (width, height) {
        img = imageops::resize(&img, width, height, imageops::FilterType::Triangle);
    }
    FrameBuffer::from_rgb_image(&img)
}
