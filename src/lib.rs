//! Virtual painter: draw on a live webcam image with your index finger.
//!
//! Every frame a [`landmarks::LandmarkProvider`] reports the hand, the
//! [`gesture`] classifier picks a mode, and the [`painter::Painter`] session
//! either switches tools from the header strip (index + middle finger up) or
//! extends the current stroke (index finger up). Strokes live on a persistent
//! [`canvas::Canvas`] that is composited over every camera frame.
//!
//! ```no_run
//! use virtual_painter::{
//!     config::PainterConfig, header::HeaderSet, landmarks::{observe, PointerHand},
//!     painter::Painter, types::FrameBuffer,
//! };
//!
//! # fn main() -> virtual_painter::Result<()> {
//! let config = PainterConfig::default();
//! let headers = HeaderSet::load(&config.header_dir, config.width, config.header_height);
//! let mut painter = Painter::new(&config, headers);
//! let mut hand = PointerHand::new();
//!
//! let mut frame = FrameBuffer::black(config.width, config.height);
//! let observation = observe(&mut hand, &frame);
//! let report = painter.step(&mut frame, &observation)?;
//! println!("mode: {}", report.mode);
//! # Ok(())
//! # }
//! ```

pub mod camera;
pub mod canvas;
pub mod config;
pub mod draw;
pub mod error;
pub mod gesture;
pub mod header;
pub mod landmarks;
pub mod painter;
pub mod stroke;
pub mod tool;
pub mod types;
pub mod vision;

pub use error::{Error, Result};
