//! Opacity paint.

use super::Emit;
use crate::draw::DrawContext;
use crate::error::EmitError;

/// Paints the current source over the whole clip region at a stored opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintEmitter {
    opacity: f64,
}

impl PaintEmitter {
    /// Stores `opacity` as given. Values outside 0.0-1.0 are passed to the
    /// engine unchanged.
    pub fn new(opacity: f64) -> Self {
        Self { opacity }
    }

    pub fn opaque() -> Self {
        Self::new(1.0)
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }
}

impl Default for PaintEmitter {
    fn default() -> Self {
        Self::opaque()
    }
}

impl Emit for PaintEmitter {
    fn emit(&self, ctx: &mut dyn DrawContext) -> Result<(), EmitError> {
        if self.opacity == 1.0 {
            ctx.paint()?;
        } else {
            ctx.paint_with_alpha(self.opacity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Call, RecordingContext};

    #[test]
    fn full_opacity_uses_plain_paint() {
        let mut ctx = RecordingContext::new();
        let paint = PaintEmitter::opaque();
        assert_eq!(paint.opacity(), 1.0);
        paint.emit(&mut ctx).unwrap();
        assert_eq!(ctx.calls(), &[Call::Paint]);
    }

    #[test]
    fn half_opacity_paints_with_exact_alpha() {
        let mut ctx = RecordingContext::new();
        let paint = PaintEmitter::new(0.5);
        assert_eq!(paint.opacity(), 0.5);
        paint.emit(&mut ctx).unwrap();
        assert_eq!(ctx.count(&Call::PaintWithAlpha(0.5)), 1);
        assert_eq!(ctx.count(&Call::Paint), 0);
        assert_eq!(ctx.calls().len(), 1);
    }

    #[test]
    fn fractional_opacities_never_use_plain_paint() {
        for alpha in [0.0, 0.25, 0.999_999] {
            let mut ctx = RecordingContext::new();
            PaintEmitter::new(alpha).emit(&mut ctx).unwrap();
            assert_eq!(ctx.calls(), &[Call::PaintWithAlpha(alpha)]);
        }
    }

    #[test]
    fn out_of_range_opacity_is_forwarded() {
        let mut ctx = RecordingContext::new();
        PaintEmitter::new(1.5).emit(&mut ctx).unwrap();
        assert_eq!(ctx.calls(), &[Call::PaintWithAlpha(1.5)]);
    }

    #[test]
    fn engine_errors_propagate() {
        let mut ctx = RecordingContext::new();
        ctx.fail_drawing_with(cairo::Error::NoMemory);
        let err = PaintEmitter::opaque().emit(&mut ctx).unwrap_err();
        assert!(matches!(err, EmitError::Cairo(cairo::Error::NoMemory)));
    }
}
