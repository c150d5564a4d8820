//! Declarative stream files.
//!
//! A stream file is TOML with an optional `[canvas]` table and an ordered
//! `[[op]]` array. Each op names its `kind` and carries that kind's
//! parameters:
//!
//! ```toml
//! [canvas]
//! width = 200
//! height = 120
//! background = "white"
//!
//! [[op]]
//! kind = "rectangle"
//! x = 10.0
//! y = 10.0
//! width = 80.0
//! height = 40.0
//!
//! [[op]]
//! kind = "fill"
//! color = [0, 128, 255]
//!
//! [[op]]
//! kind = "line-join"
//! join = "round"
//! ```
//!
//! Path ops (`move-to`, `line-to`, `rectangle`, `arc`, `close-path`) and
//! `source` compile to coordinate visitors; the rest compile to their
//! emitters.

use super::Stream;
use crate::config::ColorSpec;
use crate::draw::{Brush, Color, LineCap, LineJoin};
use crate::emit::{
    Coordinate, CoordinateVisitor, FillEmitter, LineDashEmitter, LineJoinEmitter, Op,
    PaintEmitter, StrokeEmitter,
};
use crate::error::EmitError;
use log::{debug, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root of a stream file.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct StreamFile {
    /// Output surface settings; anything unset falls back to the user config
    #[serde(default)]
    pub canvas: CanvasSpec,

    /// Operations in replay order
    #[serde(default, rename = "op")]
    pub ops: Vec<OpSpec>,
}

/// Output surface settings carried by a stream file.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CanvasSpec {
    /// Surface width in pixels
    pub width: Option<i32>,
    /// Surface height in pixels
    pub height: Option<i32>,
    /// Color painted before the stream is replayed
    pub background: Option<ColorSpec>,
}

/// Line-join style as a name (`miter`, `round`, `bevel`) or a raw engine code (0-2).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum JoinSpec {
    Name(String),
    Code(i32),
}

impl JoinSpec {
    pub fn resolve(&self) -> Result<LineJoin, EmitError> {
        match self {
            JoinSpec::Name(name) => LineJoin::from_name(name)
                .ok_or_else(|| EmitError::invalid(format!("unknown line join '{name}'"))),
            JoinSpec::Code(code) => LineJoin::try_from(*code),
        }
    }
}

/// One operation of a stream file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum OpSpec {
    /// Paint the current source over the clip, at `opacity` (default 1.0)
    Paint {
        #[serde(default = "default_opacity")]
        opacity: f64,
    },
    /// Stroke the current path; unset fields use the configured default pen
    Stroke {
        color: Option<ColorSpec>,
        width: Option<f64>,
        cap: Option<LineCap>,
    },
    /// Fill the current path; unset color uses the configured default
    Fill { color: Option<ColorSpec> },
    LineJoin { join: JoinSpec },
    /// Dash lengths and offset; an empty list turns dashing off
    LineDash {
        #[serde(default)]
        dashes: Vec<f64>,
        #[serde(default)]
        offset: f64,
    },
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Circular arc; angles in degrees, a full circle by default
    Arc {
        x: f64,
        y: f64,
        radius: f64,
        #[serde(default)]
        start: f64,
        #[serde(default = "default_arc_end")]
        end: f64,
    },
    ClosePath,
    /// Set the source color without drawing (used before `paint`)
    Source { color: ColorSpec },
}

fn default_opacity() -> f64 {
    1.0
}

fn default_arc_end() -> f64 {
    360.0
}

impl OpSpec {
    /// The `kind` tag as written in the file.
    pub fn name(&self) -> &'static str {
        match self {
            OpSpec::Paint { .. } => "paint",
            OpSpec::Stroke { .. } => "stroke",
            OpSpec::Fill { .. } => "fill",
            OpSpec::LineJoin { .. } => "line-join",
            OpSpec::LineDash { .. } => "line-dash",
            OpSpec::MoveTo { .. } => "move-to",
            OpSpec::LineTo { .. } => "line-to",
            OpSpec::Rectangle { .. } => "rectangle",
            OpSpec::Arc { .. } => "arc",
            OpSpec::ClosePath => "close-path",
            OpSpec::Source { .. } => "source",
        }
    }

    /// Builds the operation, filling unset brush fields from `defaults`.
    pub fn compile(&self, defaults: &Brush) -> Result<Op, EmitError> {
        let op = match self {
            OpSpec::Paint { opacity } => {
                if !(0.0..=1.0).contains(opacity) {
                    warn!("Paint opacity {:.3} is outside 0.0-1.0", opacity);
                }
                PaintEmitter::new(*opacity).into()
            }
            OpSpec::Stroke { color, width, cap } => {
                let width = width.unwrap_or(defaults.width);
                if !width.is_finite() || width < 0.0 {
                    return Err(EmitError::invalid(format!(
                        "stroke width {width} must be finite and non-negative"
                    )));
                }
                let brush = Brush {
                    color: resolve_color(color.as_ref(), defaults.color)?,
                    width,
                    cap: cap.unwrap_or(defaults.cap),
                };
                StrokeEmitter::new(brush).into()
            }
            OpSpec::Fill { color } => {
                let color = resolve_color(color.as_ref(), defaults.color)?;
                FillEmitter::new(Brush { color, ..*defaults }).into()
            }
            OpSpec::LineJoin { join } => LineJoinEmitter::new(join.resolve()?).into(),
            OpSpec::LineDash { dashes, offset } => {
                LineDashEmitter::new(dashes.clone(), *offset)?.into()
            }
            OpSpec::MoveTo { x, y } => {
                let at = finite_coordinate(*x, *y)?;
                Op::visit_at(CoordinateVisitor::move_to(), at)
            }
            OpSpec::LineTo { x, y } => {
                let at = finite_coordinate(*x, *y)?;
                Op::visit_at(CoordinateVisitor::line_to(), at)
            }
            OpSpec::Rectangle {
                x,
                y,
                width,
                height,
            } => {
                let at = finite_coordinate(*x, *y)?;
                let width = finite("rectangle width", *width)?;
                let height = finite("rectangle height", *height)?;
                Op::visit_at(CoordinateVisitor::rectangle(width, height), at)
            }
            OpSpec::Arc {
                x,
                y,
                radius,
                start,
                end,
            } => {
                let at = finite_coordinate(*x, *y)?;
                if !radius.is_finite() || *radius < 0.0 {
                    return Err(EmitError::invalid(format!(
                        "arc radius {radius} must be finite and non-negative"
                    )));
                }
                let start = finite("arc start", *start)?;
                let end = finite("arc end", *end)?;
                Op::visit_at(
                    CoordinateVisitor::arc(*radius, start.to_radians(), end.to_radians()),
                    at,
                )
            }
            OpSpec::ClosePath => Op::visit(CoordinateVisitor::close_path()),
            OpSpec::Source { color } => {
                Op::visit(CoordinateVisitor::source(resolve_color(Some(color), defaults.color)?))
            }
        };
        Ok(op)
    }
}

// NaN and infinities trip assertions inside Cairo's path code
fn finite(name: &str, value: f64) -> Result<f64, EmitError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EmitError::invalid(format!("{name} {value} must be finite")))
    }
}

fn finite_coordinate(x: f64, y: f64) -> Result<Coordinate, EmitError> {
    Ok(Coordinate::new(finite("x", x)?, finite("y", y)?))
}

fn resolve_color(spec: Option<&ColorSpec>, fallback: Color) -> Result<Color, EmitError> {
    match spec {
        None => Ok(fallback),
        Some(spec) => spec
            .try_to_color()
            .ok_or_else(|| EmitError::invalid(format!("unknown color {spec:?}"))),
    }
}

impl StreamFile {
    /// Parses a stream file from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, EmitError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a stream file.
    pub fn load(path: &Path) -> Result<Self, EmitError> {
        let text = fs::read_to_string(path)?;
        let file = Self::from_toml_str(&text)?;
        debug!("Loaded {} ops from {}", file.ops.len(), path.display());
        Ok(file)
    }

    /// Compiles every op into a [`Stream`].
    ///
    /// Configuration errors are prefixed with the failing op's index and kind.
    pub fn compile(&self, defaults: &Brush) -> Result<Stream, EmitError> {
        self.ops
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                spec.compile(defaults).map_err(|err| match err {
                    EmitError::InvalidConfiguration(message) => EmitError::InvalidConfiguration(
                        format!("op {} ({}): {}", index, spec.name(), message),
                    ),
                    other => other,
                })
            })
            .collect()
    }

    /// JSON schema describing the stream file format.
    pub fn schema() -> schemars::Schema {
        schemars::schema_for!(StreamFile)
    }
}
