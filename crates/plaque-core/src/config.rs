//! Effect configuration.
//!
//! Defaults come from `constants.rs`. The web front-end overrides individual
//! keys from `data-*` attributes on the canvas element.

use crate::constants::*;
use crate::tween::Easing;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("`{key}` expects a number, got `{value}`")]
    InvalidNumber { key: String, value: String },
    #[error("`{key}` must be {expected}, got {value}")]
    OutOfRange {
        key: String,
        expected: &'static str,
        value: f64,
    },
    #[error("unknown easing `{0}`")]
    UnknownEasing(String),
    #[error("`{key}` expects true or false, got `{value}`")]
    InvalidBool { key: String, value: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectConfig {
    pub camera_distance: f32,
    pub near: f32,
    pub far: f32,
    pub hover_duration: f32,
    pub easing: Easing,
    pub max_pixel_ratio: f64,
    pub image_selector: String,
    pub canvas_id: String,
    pub smooth_scroll: bool,
    pub scroll_lerp: f32,
    pub msaa_samples: u32,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            camera_distance: CAMERA_DISTANCE,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            hover_duration: HOVER_DURATION_SEC,
            easing: Easing::Power2Out,
            max_pixel_ratio: MAX_PIXEL_RATIO,
            image_selector: DEFAULT_IMAGE_SELECTOR.to_string(),
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            smooth_scroll: true,
            scroll_lerp: SCROLL_LERP_RATE,
            msaa_samples: MSAA_SAMPLES,
        }
    }
}

/// Attribute names understood by [`EffectConfig::apply_attribute`], without
/// the `data-` prefix.
pub const CONFIG_KEYS: &[&str] = &[
    "camera-distance",
    "hover-duration",
    "easing",
    "max-pixel-ratio",
    "image-selector",
    "smooth-scroll",
    "scroll-lerp",
    "msaa",
];

fn parse_positive(key: &str, value: &str) -> Result<f64, ConfigError> {
    let v: f64 = value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })?;
    if !v.is_finite() || v <= 0.0 {
        return Err(ConfigError::OutOfRange {
            key: key.to_string(),
            expected: "a positive number",
            value: v,
        });
    }
    Ok(v)
}

impl EffectConfig {
    /// Override one key. `key` may carry a `data-` prefix.
    pub fn apply_attribute(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let key = key.strip_prefix("data-").unwrap_or(key);
        match key {
            "camera-distance" => self.camera_distance = parse_positive(key, value)? as f32,
            "hover-duration" => self.hover_duration = parse_positive(key, value)? as f32,
            "max-pixel-ratio" => self.max_pixel_ratio = parse_positive(key, value)?,
            "scroll-lerp" => self.scroll_lerp = parse_positive(key, value)? as f32,
            "easing" => {
                self.easing = Easing::from_name(value.trim())
                    .ok_or_else(|| ConfigError::UnknownEasing(value.to_string()))?
            }
            "msaa" => {
                self.msaa_samples = match parse_positive(key, value)? {
                    v if v == 1.0 => 1,
                    v if v == 4.0 => 4,
                    v => {
                        return Err(ConfigError::OutOfRange {
                            key: key.to_string(),
                            expected: "1 or 4",
                            value: v,
                        })
                    }
                }
            }
            "image-selector" => self.image_selector = value.trim().to_string(),
            "smooth-scroll" => {
                self.smooth_scroll = match value.trim() {
                    "true" | "1" | "" => true,
                    "false" | "0" => false,
                    _ => {
                        return Err(ConfigError::InvalidBool {
                            key: key.to_string(),
                            value: value.to_string(),
                        })
                    }
                }
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Apply every `(key, value)` pair, logging and skipping bad ones.
    pub fn apply_attributes<'a>(&mut self, attrs: impl IntoIterator<Item = (&'a str, String)>) {
        for (key, value) in attrs {
            if let Err(e) = self.apply_attribute(key, &value) {
                log::warn!("[config] ignoring {}", e);
            }
        }
    }
}
