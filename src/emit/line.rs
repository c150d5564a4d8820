//! Line style emitters: join mode and dash pattern.

use super::Emit;
use crate::draw::{DrawContext, LineJoin};
use crate::error::EmitError;

/// Sets the context's line-join style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineJoinEmitter {
    join: LineJoin,
}

impl LineJoinEmitter {
    pub fn new(join: LineJoin) -> Self {
        Self { join }
    }

    /// Builds the emitter from a raw engine code, rejecting codes outside
    /// the join enum instead of forwarding them.
    pub fn from_code(code: i32) -> Result<Self, EmitError> {
        LineJoin::try_from(code).map(Self::new)
    }

    pub fn join(&self) -> LineJoin {
        self.join
    }
}

impl Emit for LineJoinEmitter {
    fn emit(&self, ctx: &mut dyn DrawContext) -> Result<(), EmitError> {
        ctx.set_line_join(self.join);
        Ok(())
    }
}

/// Sets the context's dash pattern.
///
/// An empty pattern turns dashing off.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineDashEmitter {
    dashes: Vec<f64>,
    offset: f64,
}

impl LineDashEmitter {
    /// Validates the pattern the way Cairo would: every length must be finite
    /// and non-negative, and a non-empty pattern needs at least one
    /// non-zero length.
    pub fn new(dashes: Vec<f64>, offset: f64) -> Result<Self, EmitError> {
        if let Some(bad) = dashes.iter().find(|d| !d.is_finite() || **d < 0.0) {
            return Err(EmitError::invalid(format!(
                "dash length {bad} must be finite and non-negative"
            )));
        }
        if !dashes.is_empty() && dashes.iter().all(|d| *d == 0.0) {
            return Err(EmitError::invalid("dash pattern cannot be all zeros"));
        }
        if !offset.is_finite() {
            return Err(EmitError::invalid(format!("dash offset {offset} must be finite")));
        }
        Ok(Self { dashes, offset })
    }

    /// Solid lines.
    pub fn solid() -> Self {
        Self::default()
    }

    pub fn dashes(&self) -> &[f64] {
        &self.dashes
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl Emit for LineDashEmitter {
    fn emit(&self, ctx: &mut dyn DrawContext) -> Result<(), EmitError> {
        ctx.set_dash(&self.dashes, self.offset);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Call, RecordingContext};

    #[test]
    fn round_join_sets_context_state() {
        let mut ctx = RecordingContext::new();
        LineJoinEmitter::new(LineJoin::Round).emit(&mut ctx).unwrap();
        assert_eq!(ctx.state().line_join, LineJoin::Round);
    }

    #[test]
    fn join_emission_is_idempotent() {
        for join in [LineJoin::Miter, LineJoin::Round, LineJoin::Bevel] {
            let emitter = LineJoinEmitter::new(join);

            let mut once = RecordingContext::new();
            emitter.emit(&mut once).unwrap();

            let mut twice = RecordingContext::new();
            emitter.emit(&mut twice).unwrap();
            emitter.emit(&mut twice).unwrap();

            assert_eq!(once.state(), twice.state());
        }
    }

    #[test]
    fn join_codes_are_range_checked() {
        assert_eq!(
            LineJoinEmitter::from_code(2).unwrap().join(),
            LineJoin::Bevel
        );
        assert!(matches!(
            LineJoinEmitter::from_code(7),
            Err(EmitError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn dash_pattern_is_forwarded_with_offset() {
        let mut ctx = RecordingContext::new();
        let dash = LineDashEmitter::new(vec![6.0, 3.0], 1.5).unwrap();
        assert_eq!(dash.dashes(), &[6.0, 3.0]);
        assert_eq!(dash.offset(), 1.5);
        dash.emit(&mut ctx).unwrap();
        assert_eq!(
            ctx.calls(),
            &[Call::SetDash {
                dashes: vec![6.0, 3.0],
                offset: 1.5
            }]
        );
    }

    #[test]
    fn empty_pattern_disables_dashing() {
        let mut ctx = RecordingContext::new();
        LineDashEmitter::new(vec![4.0], 0.0)
            .unwrap()
            .emit(&mut ctx)
            .unwrap();
        let solid = LineDashEmitter::solid();
        assert!(solid.dashes().is_empty());
        solid.emit(&mut ctx).unwrap();
        assert!(ctx.state().dashes.is_empty());
    }

    #[test]
    fn invalid_dash_patterns_are_rejected() {
        assert!(LineDashEmitter::new(vec![4.0, -1.0], 0.0).is_err());
        assert!(LineDashEmitter::new(vec![0.0, 0.0], 0.0).is_err());
        assert!(LineDashEmitter::new(vec![f64::NAN], 0.0).is_err());
        assert!(LineDashEmitter::new(vec![2.0], f64::INFINITY).is_err());
        assert!(LineDashEmitter::new(vec![0.0, 2.0], 0.0).is_ok());
    }
}
