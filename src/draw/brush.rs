//! Brush/pen state and line style enums.

use super::color::{BLACK, Color};
use super::context::DrawContext;
use crate::error::EmitError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How two stroked segments are joined.
///
/// The numeric codes match Cairo's `cairo_line_join_t` numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    /// Engine code for this join style.
    pub fn code(self) -> i32 {
        match self {
            LineJoin::Miter => 0,
            LineJoin::Round => 1,
            LineJoin::Bevel => 2,
        }
    }

    /// Parses a join name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "miter" => Some(LineJoin::Miter),
            "round" => Some(LineJoin::Round),
            "bevel" => Some(LineJoin::Bevel),
            _ => None,
        }
    }
}

impl TryFrom<i32> for LineJoin {
    type Error = EmitError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(LineJoin::Miter),
            1 => Ok(LineJoin::Round),
            2 => Ok(LineJoin::Bevel),
            other => Err(EmitError::invalid(format!(
                "line join code {other} is out of range (expected 0-2)"
            ))),
        }
    }
}

impl From<LineJoin> for cairo::LineJoin {
    fn from(join: LineJoin) -> Self {
        match join {
            LineJoin::Miter => cairo::LineJoin::Miter,
            LineJoin::Round => cairo::LineJoin::Round,
            LineJoin::Bevel => cairo::LineJoin::Bevel,
        }
    }
}

/// Shape drawn at the ends of open stroked segments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl From<LineCap> for cairo::LineCap {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        }
    }
}

/// Color and pen state applied to a context before a fill or stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Brush {
    /// Source color
    pub color: Color,
    /// Pen width in user-space units (strokes only)
    pub width: f64,
    /// End cap style (strokes only)
    pub cap: LineCap,
}

impl Default for Brush {
    fn default() -> Self {
        Self::solid(BLACK)
    }
}

impl Brush {
    /// A brush of the given color with Cairo's default pen (width 2.0, butt caps).
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            width: 2.0,
            cap: LineCap::Butt,
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Sets the context's source color.
    pub fn apply_source(&self, ctx: &mut dyn DrawContext) {
        ctx.set_source_rgba(self.color);
    }

    /// Sets source color, line width and line cap.
    pub fn apply_pen(&self, ctx: &mut dyn DrawContext) {
        self.apply_source(ctx);
        ctx.set_line_width(self.width);
        ctx.set_line_cap(self.cap);
    }
}
