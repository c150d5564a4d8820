//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::LineCap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output surface settings used by `uxstream render`.
///
/// Stream files and command-line flags override these per render.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_width")]
    pub width: i32,

    /// Surface height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_height")]
    pub height: i32,

    /// Background painted before replay; unset leaves the surface transparent
    #[serde(default)]
    pub background: Option<ColorSpec>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: None,
        }
    }
}

/// Default brush for stroke and fill ops that leave fields unset.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StrokeConfig {
    /// Default brush color - a named color or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_stroke_color")]
    pub default_color: ColorSpec,

    /// Default pen width in user-space units (valid range: 0.1 - 100.0)
    #[serde(default = "default_stroke_width")]
    pub default_width: f64,

    /// Default end cap (butt, round, square)
    #[serde(default)]
    pub default_cap: LineCap,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            default_color: default_stroke_color(),
            default_width: default_stroke_width(),
            default_cap: LineCap::default(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> i32 {
    512
}

fn default_canvas_height() -> i32 {
    512
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_stroke_width() -> f64 {
    2.0 // matches Cairo's initial line width
}
