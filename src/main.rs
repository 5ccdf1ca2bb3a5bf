// What you SEE:
// • Live (mirrored) camera with the tool header across the top.
// • Index finger up (left mouse with the pointer hand): draw with the active tool.
// • Index + middle up (right mouse): select; touch a header zone to switch tools.
// • ESC quits.

use anyhow::Result;
use clap::Parser;
use log::{debug, error, info};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use virtual_painter::camera::CameraCapture;
use virtual_painter::config::PainterConfig;
use virtual_painter::draw::{Drawer, draw_text_5x7};
use virtual_painter::header::HeaderSet;
use virtual_painter::landmarks::{PointerHand, observe};
use virtual_painter::painter::Painter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Camera index to use
    #[arg(long)]
    cam: Option<u32>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Folder holding the header images
    #[arg(long)]
    headers: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_level));

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            match PainterConfig::from_file(path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    log::warn!("Failed to load config file: {e}. Using defaults.");
                    PainterConfig::default()
                }
            }
        }
        None => PainterConfig::default(),
    };
    if let Some(cam) = args.cam {
        config.camera_index = cam;
    }
    if let Some(dir) = args.headers {
        config.header_dir = dir;
    }
    config.validate()?;

    /* --- Assets, camera, window --- */
    let headers = HeaderSet::load(&config.header_dir, config.width, config.header_height);
    let mut cam = CameraCapture::new(config.camera_index, config.width as u32, config.height as u32)?;
    let mut drawer = Drawer::new(&config.window_title, config.width, config.height)?;

    /* --- Session state: canvas, active tool, stroke --- */
    let mut painter = Painter::new(&config, headers);
    let mut hand = PointerHand::new();

    /* --- Status line / FPS --- */
    let status_y = config.header_height as i32 + 8;
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut fps_text = String::from("FPS: 0.0");

    info!("Press ESC to exit.");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        // 1) Acquire; a failed read ends the session.
        let mut frame = match cam.next_frame() {
            Ok(frame) => frame,
            Err(e) => {
                error!("Failed to read from camera: {e}");
                break;
            }
        };

        // 2) Detect the hand.
        hand.feed(drawer.pointer());
        let observation = observe(&mut hand, &frame);

        // 3) Classify, select/draw, composite.
        let report = painter.step(&mut frame, &observation)?;

        // 4) Status line under the header, then present.
        let status = format!("{} | {} | {}", report.mode, painter.active_tool().tool, fps_text);
        draw_text_5x7(&mut frame, 8, status_y, &status, 0x00_FF_FF_FF);
        drawer.present(&frame)?;

        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            debug!("FPS: {fps:.1}");
            fps_text = format!("FPS: {fps:.1}");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!("Session ended");
    Ok(())
}
