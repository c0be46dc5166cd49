use std::{fs::File, io::BufReader, path::Path};

use crate::animation::snake::SpeedPolicy;
use crate::foundation::error::{StreamBorderError, StreamBorderResult};
use crate::geometry::flatten::{DEFAULT_FLATTEN_TOLERANCE, MIN_FLATTEN_TOLERANCE};
use crate::geometry::resample::DEFAULT_RESAMPLE_STEP;
use crate::geometry::strip::ThicknessProfile;

/// Numeric tuning of the trail animation.
///
/// Every field has a default, so partial JSON documents are accepted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StreamBorderConfig {
    /// Fraction of the loop that is lit, in `(0, 1]`.
    pub snake_fraction: f64,
    /// Seconds for the head to travel one full loop.
    pub period_seconds: f64,
    /// Stroke thickness at the tail and head.
    pub min_thickness: f64,
    /// Stroke thickness at the middle of the trail.
    pub max_thickness: f64,
    /// Spacing of resampled path points.
    pub resample_step: f64,
    /// Maximum chord deviation when flattening corners.
    pub flatten_tolerance: f64,
    /// Requested corner radius; clamped to the boundary on rebuild.
    pub corner_radius: f64,
    /// How the head advances along the loop.
    pub speed_policy: SpeedPolicy,
    /// Thickness shape along the trail.
    pub profile: ThicknessProfile,
    /// Fade cycle length; `None` keeps the trail fully opaque.
    pub fade_cycle_seconds: Option<f64>,
}

impl Default for StreamBorderConfig {
    fn default() -> Self {
        Self {
            snake_fraction: 0.32,
            period_seconds: 7.0,
            min_thickness: 4.0,
            max_thickness: 6.0,
            resample_step: DEFAULT_RESAMPLE_STEP,
            flatten_tolerance: DEFAULT_FLATTEN_TOLERANCE,
            corner_radius: 22.0,
            speed_policy: SpeedPolicy::ConstantSpeed,
            profile: ThicknessProfile::Tent,
            fade_cycle_seconds: None,
        }
    }
}

impl StreamBorderConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json_str(s: &str) -> StreamBorderResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| StreamBorderError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> StreamBorderResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StreamBorderError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            StreamBorderError::serde(format!("parse config JSON '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check ranges of every field.
    pub fn validate(&self) -> StreamBorderResult<()> {
        if !(self.snake_fraction > 0.0 && self.snake_fraction <= 1.0) {
            return Err(StreamBorderError::validation(
                "snake_fraction must be in (0, 1]",
            ));
        }
        positive("period_seconds", self.period_seconds)?;
        positive("resample_step", self.resample_step)?;
        positive("flatten_tolerance", self.flatten_tolerance)?;
        if self.flatten_tolerance < MIN_FLATTEN_TOLERANCE {
            return Err(StreamBorderError::validation(format!(
                "flatten_tolerance must be >= {MIN_FLATTEN_TOLERANCE}"
            )));
        }
        if !(self.min_thickness.is_finite() && self.min_thickness >= 0.0) {
            return Err(StreamBorderError::validation(
                "min_thickness must be finite and >= 0",
            ));
        }
        if !(self.max_thickness.is_finite() && self.max_thickness >= self.min_thickness) {
            return Err(StreamBorderError::validation(
                "max_thickness must be finite and >= min_thickness",
            ));
        }
        if !(self.corner_radius.is_finite() && self.corner_radius >= 0.0) {
            return Err(StreamBorderError::validation(
                "corner_radius must be finite and >= 0",
            ));
        }
        if let Some(c) = self.fade_cycle_seconds {
            positive("fade_cycle_seconds", c)?;
        }
        Ok(())
    }
}

fn positive(name: &str, v: f64) -> StreamBorderResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(StreamBorderError::validation(format!(
            "{name} must be finite and > 0"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/control/config.rs"]
mod tests;
