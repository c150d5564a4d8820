//! Replaying streams onto Cairo image surfaces.

use crate::config::{Config, MAX_CANVAS_EDGE};
use crate::draw::color::BLACK;
use crate::draw::{Color, DrawContext};
use crate::error::EmitError;
use crate::stream::{CanvasSpec, Stream};
use log::debug;

/// Size and background of the surface a stream is rendered onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderTarget {
    pub width: i32,
    pub height: i32,
    /// Painted before replay; `None` keeps the surface transparent
    pub background: Option<Color>,
}

impl RenderTarget {
    /// Resolves the target from a stream file's canvas table, falling back to
    /// the user config for anything the file leaves unset.
    pub fn resolve(canvas: &CanvasSpec, config: &Config) -> Result<Self, EmitError> {
        let background = match &canvas.background {
            Some(spec) => Some(spec.try_to_color().ok_or_else(|| {
                EmitError::invalid(format!("unknown canvas background {spec:?}"))
            })?),
            None => config.background(),
        };
        let target = Self {
            width: canvas.width.unwrap_or(config.canvas.width),
            height: canvas.height.unwrap_or(config.canvas.height),
            background,
        };
        target.validate()?;
        Ok(target)
    }

    /// Checks the surface size against the accepted range.
    pub fn validate(&self) -> Result<(), EmitError> {
        for (name, edge) in [("width", self.width), ("height", self.height)] {
            if !(1..=MAX_CANVAS_EDGE).contains(&edge) {
                return Err(EmitError::invalid(format!(
                    "canvas {name} {edge} is outside 1-{MAX_CANVAS_EDGE}"
                )));
            }
        }
        Ok(())
    }
}

/// Renders `stream` onto a new ARGB32 surface.
///
/// The background (if any) is painted first, then the stream replays between
/// a save and a restore.
pub fn render_stream(
    stream: &Stream,
    target: &RenderTarget,
) -> Result<cairo::ImageSurface, EmitError> {
    target.validate()?;
    let surface =
        cairo::ImageSurface::create(cairo::Format::ARgb32, target.width, target.height)?;
    let mut ctx = cairo::Context::new(&surface)?;

    if let Some(background) = target.background {
        DrawContext::set_source_rgba(&mut ctx, background);
        DrawContext::paint(&mut ctx)?;
        // Stream ops start from Cairo's default black source
        DrawContext::set_source_rgba(&mut ctx, BLACK);
    }

    debug!(
        "Rendering {} ops onto {}x{} surface",
        stream.len(),
        target.width,
        target.height
    );
    stream.emit_isolated(&mut ctx)?;
    drop(ctx);

    surface.flush();
    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorSpec;
    use crate::draw::color::{BLUE, WHITE};

    #[test]
    fn file_canvas_overrides_config() {
        let mut config = Config::default();
        config.canvas.background = Some(ColorSpec::Name("blue".into()));
        let canvas = CanvasSpec {
            width: Some(40),
            height: None,
            background: None,
        };

        let target = RenderTarget::resolve(&canvas, &config).unwrap();
        assert_eq!(target.width, 40);
        assert_eq!(target.height, config.canvas.height);
        assert_eq!(target.background, Some(BLUE));

        let canvas = CanvasSpec {
            background: Some(ColorSpec::Name("white".into())),
            ..CanvasSpec::default()
        };
        let target = RenderTarget::resolve(&canvas, &config).unwrap();
        assert_eq!(target.background, Some(WHITE));
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        let canvas = CanvasSpec {
            width: Some(MAX_CANVAS_EDGE + 1),
            ..CanvasSpec::default()
        };
        assert!(matches!(
            RenderTarget::resolve(&canvas, &Config::default()),
            Err(EmitError::InvalidConfiguration(_))
        ));
    }
}
