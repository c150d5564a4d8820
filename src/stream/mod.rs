//! Ordered drawing streams.
//!
//! A [`Stream`] is the sequencer for emitters: operations are appended in
//! draw order and replayed front to back against a single context. Stream
//! files ([`StreamFile`]) describe the same thing declaratively in TOML.

pub mod file;

pub use file::{CanvasSpec, JoinSpec, OpSpec, StreamFile};

use crate::draw::DrawContext;
use crate::emit::{Emit, Op};
use crate::error::EmitError;
use log::{debug, trace, warn};

/// Container for drawing operations in replay order.
#[derive(Debug, Default)]
pub struct Stream {
    /// Operations in emit order (first = applied first)
    ops: Vec<Op>,
}

impl Stream {
    /// Creates an empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an operation (replayed after everything already present).
    pub fn push(&mut self, op: impl Into<Op>) {
        self.ops.push(op.into());
    }

    /// Builder-style [`Stream::push`].
    pub fn with(mut self, op: impl Into<Op>) -> Self {
        self.push(op);
        self
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Removes all operations.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Replays every operation in order, stopping at the first failure.
    ///
    /// Context state changed by the stream (source, pen, dashes, path) is
    /// left in place; see [`Stream::emit_isolated`].
    pub fn emit(&self, ctx: &mut dyn DrawContext) -> Result<(), EmitError> {
        debug!("Replaying stream of {} ops", self.ops.len());
        for (index, op) in self.ops.iter().enumerate() {
            trace!("op {}: {}", index, op.kind());
            if let Err(err) = op.emit(ctx) {
                warn!("Stream replay stopped at op {} ({}): {}", index, op.kind(), err);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Replays the stream between a `save` and a `restore`.
    ///
    /// The restore runs even when replay fails; the replay error takes
    /// precedence over a restore error.
    pub fn emit_isolated(&self, ctx: &mut dyn DrawContext) -> Result<(), EmitError> {
        ctx.save()?;
        let replayed = self.emit(ctx);
        let restored = ctx.restore();
        replayed?;
        restored?;
        Ok(())
    }
}

impl Extend<Op> for Stream {
    fn extend<T: IntoIterator<Item = Op>>(&mut self, iter: T) {
        self.ops.extend(iter);
    }
}

impl FromIterator<Op> for Stream {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl Emit for Stream {
    fn emit(&self, ctx: &mut dyn DrawContext) -> Result<(), EmitError> {
        Stream::emit(self, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};
    use crate::draw::{Brush, Call, LineJoin, RecordingContext};
    use crate::emit::{
        Coordinate, CoordinateVisitor, FillEmitter, LineJoinEmitter, PaintEmitter, StrokeEmitter,
    };

    fn triangle() -> Stream {
        Stream::new()
            .with(Op::visit_at(CoordinateVisitor::move_to(), (0.0, 0.0)))
            .with(Op::visit_at(CoordinateVisitor::line_to(), (10.0, 0.0)))
            .with(Op::visit_at(CoordinateVisitor::line_to(), (5.0, 8.0)))
            .with(Op::visit(CoordinateVisitor::close_path()))
    }

    #[test]
    fn ops_replay_in_insertion_order() {
        let mut stream = triangle();
        stream.push(LineJoinEmitter::new(LineJoin::Round));
        stream.push(StrokeEmitter::new(Brush::solid(RED)));

        let mut ctx = RecordingContext::new();
        stream.emit(&mut ctx).unwrap();

        assert_eq!(stream.len(), 6);
        assert_eq!(ctx.calls().first(), Some(&Call::MoveTo(0.0, 0.0)));
        assert_eq!(ctx.calls().last(), Some(&Call::Stroke));
        let join = ctx.position(|c| *c == Call::SetLineJoin(LineJoin::Round)).unwrap();
        let close = ctx.position(|c| *c == Call::ClosePath).unwrap();
        assert!(close < join);
    }

    #[test]
    fn replay_stops_at_first_error() {
        let stream = Stream::new()
            .with(FillEmitter::new(Brush::solid(BLUE)))
            .with(PaintEmitter::new(0.5));

        let mut ctx = RecordingContext::new();
        ctx.fail_drawing_with(cairo::Error::NoMemory);
        let err = stream.emit(&mut ctx).unwrap_err();

        assert!(matches!(err, EmitError::Cairo(cairo::Error::NoMemory)));
        assert_eq!(ctx.count(&Call::PaintWithAlpha(0.5)), 0);
    }

    #[test]
    fn isolated_replay_restores_state() {
        let stream = Stream::new().with(LineJoinEmitter::new(LineJoin::Bevel));
        let mut ctx = RecordingContext::new();
        stream.emit_isolated(&mut ctx).unwrap();

        assert_eq!(ctx.state().line_join, LineJoin::Miter);
        assert_eq!(ctx.calls().first(), Some(&Call::Save));
        assert_eq!(ctx.calls().last(), Some(&Call::Restore));
    }

    #[test]
    fn isolated_replay_restores_after_failure() {
        let stream = Stream::new()
            .with(LineJoinEmitter::new(LineJoin::Round))
            .with(PaintEmitter::opaque());
        let mut ctx = RecordingContext::new();
        ctx.fail_drawing_with(cairo::Error::InvalidStatus);

        assert!(stream.emit_isolated(&mut ctx).is_err());
        assert_eq!(ctx.calls().last(), Some(&Call::Restore));
        assert_eq!(ctx.state().line_join, LineJoin::Miter);
    }

    #[test]
    fn isolated_replay_reports_restore_failure() {
        // the op pops the save emit_isolated pushed, so the closing restore underflows
        let stream = Stream::new()
            .with(Op::visit(
                CoordinateVisitor::new().on_context(|ctx| ctx.restore().map_err(Into::into)),
            ))
            .with(LineJoinEmitter::new(LineJoin::Round));
        let mut ctx = RecordingContext::new();

        let err = stream.emit_isolated(&mut ctx).unwrap_err();
        assert!(matches!(err, EmitError::Cairo(cairo::Error::InvalidRestore)));
        assert_eq!(ctx.count(&Call::Restore), 2);
    }

    #[test]
    fn cleared_stream_replays_nothing() {
        let mut stream = triangle();
        stream.clear();
        assert!(stream.is_empty());

        let mut ctx = RecordingContext::new();
        stream.emit(&mut ctx).unwrap();
        assert!(ctx.calls().is_empty());
    }

    #[test]
    fn collects_from_ops() {
        let stream: Stream = (0..3)
            .map(|i| Op::visit_at(CoordinateVisitor::line_to(), Coordinate::new(i as f64, 0.0)))
            .collect();
        assert_eq!(stream.len(), 3);
        assert!(!stream.is_empty());
    }
}
