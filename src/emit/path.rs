//! Stroke and fill of the context's current path.
//!
//! Both emitters apply their brush first and then consume the path. The path
//! itself is whatever earlier operations left in the context; stroking or
//! filling an empty path is a no-op in Cairo.

use super::Emit;
use crate::draw::{Brush, DrawContext};
use crate::error::EmitError;

/// Applies a brush as pen (color, width, cap) and strokes the current path.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StrokeEmitter {
    brush: Brush,
}

impl StrokeEmitter {
    pub fn new(brush: Brush) -> Self {
        Self { brush }
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }
}

impl Emit for StrokeEmitter {
    fn emit(&self, ctx: &mut dyn DrawContext) -> Result<(), EmitError> {
        self.brush.apply_pen(ctx);
        ctx.stroke()?;
        Ok(())
    }
}

/// Applies a brush color and fills the current path.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FillEmitter {
    brush: Brush,
}

impl FillEmitter {
    pub fn new(brush: Brush) -> Self {
        Self { brush }
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }
}

impl Emit for FillEmitter {
    fn emit(&self, ctx: &mut dyn DrawContext) -> Result<(), EmitError> {
        self.brush.apply_source(ctx);
        ctx.fill()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};
    use crate::draw::{Call, LineCap, RecordingContext};

    #[test]
    fn stroke_applies_pen_before_stroking() {
        let mut ctx = RecordingContext::new();
        let brush = Brush::solid(RED).with_width(4.0).with_cap(LineCap::Round);
        StrokeEmitter::new(brush).emit(&mut ctx).unwrap();

        assert_eq!(
            ctx.calls(),
            &[
                Call::SetSource(RED),
                Call::SetLineWidth(4.0),
                Call::SetLineCap(LineCap::Round),
                Call::Stroke,
            ]
        );
    }

    #[test]
    fn fill_applies_source_before_filling() {
        let mut ctx = RecordingContext::new();
        FillEmitter::new(Brush::solid(BLUE)).emit(&mut ctx).unwrap();

        let source = ctx.position(|c| *c == Call::SetSource(BLUE)).unwrap();
        let fill = ctx.position(|c| *c == Call::Fill).unwrap();
        assert!(source < fill);
        assert_eq!(ctx.count(&Call::Stroke), 0);
    }

    #[test]
    fn stroke_error_is_reported_after_brush_was_applied() {
        let mut ctx = RecordingContext::new();
        ctx.fail_drawing_with(cairo::Error::NoCurrentPoint);
        let err = StrokeEmitter::new(Brush::solid(RED))
            .emit(&mut ctx)
            .unwrap_err();

        assert!(matches!(err, EmitError::Cairo(cairo::Error::NoCurrentPoint)));
        assert_eq!(ctx.state().source, RED);
    }
}
