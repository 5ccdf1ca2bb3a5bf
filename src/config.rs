// Configuration for the painter session, loadable from YAML.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Painter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PainterConfig {
    /// Frame width in pixels (camera frames are resized to this)
    pub width: usize,

    /// Frame height in pixels
    pub height: usize,

    /// Height of the tool header strip at the top of the frame
    pub header_height: usize,

    /// Line thickness for colour strokes
    pub brush_thickness: u32,

    /// Line thickness for eraser strokes
    pub eraser_thickness: u32,

    /// Canvas intensity at or below which the camera shows through
    pub mask_threshold: u8,

    /// Radius of the fingertip marker drawn in Draw mode
    pub cursor_radius: u32,

    /// Folder holding the four header images
    pub header_dir: PathBuf,

    /// Camera device index
    pub camera_index: u32,

    /// Window title
    pub window_title: String,

    /// Draw the detected hand skeleton on the live frame
    pub show_landmarks: bool,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            header_height: 125,
            brush_thickness: 25,
            eraser_thickness: 100,
            mask_threshold: 50,
            cursor_radius: 15,
            header_dir: PathBuf::from("Header"),
            camera_index: 0,
            window_title: "Virtual Painter".to_string(),
            show_landmarks: true,
        }
    }
}

impl PainterConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        // The tool selector splits the width into four zones
        if self.width < 4 {
            return Err(Error::Config("Width must be at least 4 pixels".to_string()));
        }
        if self.height == 0 {
            return Err(Error::Config("Height must be greater than 0".to_string()));
        }
        if self.header_height == 0 || self.header_height >= self.height {
            return Err(Error::Config(format!(
                "Header height must be between 1 and {} (frame height)",
                self.height - 1
            )));
        }
        if self.brush_thickness == 0 {
            return Err(Error::Config("Brush thickness must be greater than 0".to_string()));
        }
        if self.eraser_thickness == 0 {
            return Err(Error::Config("Eraser thickness must be greater than 0".to_string()));
        }
        // Anything wider than twice the frame already covers all of it
        let max_extent = 2 * self.width.max(self.height) as u64;
        for (name, value) in [
            ("Brush thickness", self.brush_thickness),
            ("Eraser thickness", self.eraser_thickness),
            ("Cursor radius", self.cursor_radius),
        ] {
            if u64::from(value) > max_extent {
                return Err(Error::Config(format!("{name} must be at most {max_extent} pixels")));
            }
        }
        if self.eraser_thickness < self.brush_thickness {
            log::warn!(
                "Eraser ({}px) is thinner than the brush ({}px); erasing a stroke will leave its edges",
                self.eraser_thickness,
                self.brush_thickness
            );
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Virtual Painter Configuration

# Frame geometry
width: 1280
height: 720
header_height: 125

# Strokes
brush_thickness: 25
eraser_thickness: 100
mask_threshold: 50
cursor_radius: 15

# Assets and devices
header_dir: "Header"
camera_index: 0
window_title: "Virtual Painter"
show_landmarks: true
"#;
