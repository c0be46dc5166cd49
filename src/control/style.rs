use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::core::Rgba8;
use crate::foundation::error::{StreamBorderError, StreamBorderResult};

/// Colors and stroke widths used when painting a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StreamBorderStyle {
    /// Static rounded-rectangle outline.
    pub border_color: Rgba8,
    /// Stroke width of the static outline; zero hides it.
    pub border_stroke_thickness: f64,
    /// Outer body of the trail.
    pub outer_color: Rgba8,
    /// Glow between the body and the core.
    pub inner_color: Rgba8,
    /// Bright core along the centerline.
    pub center_color: Rgba8,
    /// Canvas clear color.
    pub background: Rgba8,
}

impl Default for StreamBorderStyle {
    fn default() -> Self {
        Self {
            border_color: Rgba8::rgb(0x17, 0xB2, 0xE6),
            border_stroke_thickness: 0.8,
            outer_color: Rgba8::rgb(0x00, 0xD8, 0xFF),
            inner_color: Rgba8::rgb(0x40, 0xF0, 0xFF),
            center_color: Rgba8::rgb(0x80, 0xFA, 0xFF),
            background: Rgba8::rgb(0x12, 0x14, 0x1C),
        }
    }
}

impl StreamBorderStyle {
    /// Read and validate a JSON style file.
    pub fn from_path(path: impl AsRef<Path>) -> StreamBorderResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StreamBorderError::validation(format!("open style JSON '{}': {e}", path.display()))
        })?;
        let style: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            StreamBorderError::serde(format!("parse style JSON '{}': {e}", path.display()))
        })?;
        style.validate()?;
        Ok(style)
    }

    /// Reject negative or non-finite stroke widths.
    pub fn validate(&self) -> StreamBorderResult<()> {
        if !(self.border_stroke_thickness.is_finite() && self.border_stroke_thickness >= 0.0) {
            return Err(StreamBorderError::validation(
                "border_stroke_thickness must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/control/style.rs"]
mod tests;
