//! Drawing-operation emitters.
//!
//! Each emitter stores exactly one drawing parameter and applies it to a
//! [`DrawContext`] when emitted:
//! - [`PaintEmitter`]: opacity paint of the whole clip region
//! - [`StrokeEmitter`] / [`FillEmitter`]: brush application, then stroke/fill
//! - [`LineJoinEmitter`] / [`LineDashEmitter`]: line style state
//! - [`CoordinateVisitor`]: optional callbacks for context-only and
//!   context-plus-coordinate visits
//!
//! [`Op`] is the closed set of these kinds as stored by a
//! [`Stream`](crate::stream::Stream).

pub mod line;
pub mod paint;
pub mod path;
pub mod visitor;

pub use line::{LineDashEmitter, LineJoinEmitter};
pub use paint::PaintEmitter;
pub use path::{FillEmitter, StrokeEmitter};
pub use visitor::{ContextFn, Coordinate, CoordinateFn, CoordinateVisitor, Visit};

use crate::draw::DrawContext;
use crate::error::EmitError;
use std::fmt;

/// Applies stored drawing state to a context.
pub trait Emit {
    fn emit(&self, ctx: &mut dyn DrawContext) -> Result<(), EmitError>;
}

/// One drawing operation in a stream.
#[derive(Debug)]
pub enum Op {
    Paint(PaintEmitter),
    Stroke(StrokeEmitter),
    Fill(FillEmitter),
    LineJoin(LineJoinEmitter),
    LineDash(LineDashEmitter),
    /// Visited with `at` when present, otherwise through the context-only callback.
    Visit {
        visitor: CoordinateVisitor,
        at: Option<Coordinate>,
    },
}

/// Discriminant of an [`Op`], used for logging and summaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    Paint,
    Stroke,
    Fill,
    LineJoin,
    LineDash,
    Visit,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpKind::Paint => "paint",
            OpKind::Stroke => "stroke",
            OpKind::Fill => "fill",
            OpKind::LineJoin => "line-join",
            OpKind::LineDash => "line-dash",
            OpKind::Visit => "visit",
        };
        f.write_str(name)
    }
}

impl Op {
    /// A visit through the coordinate callback at `at`.
    pub fn visit_at(visitor: CoordinateVisitor, at: impl Into<Coordinate>) -> Self {
        Op::Visit {
            visitor,
            at: Some(at.into()),
        }
    }

    /// A visit through the context-only callback.
    pub fn visit(visitor: CoordinateVisitor) -> Self {
        Op::Visit { visitor, at: None }
    }

    pub fn kind(&self) -> OpKind {
        match self {
            Op::Paint(_) => OpKind::Paint,
            Op::Stroke(_) => OpKind::Stroke,
            Op::Fill(_) => OpKind::Fill,
            Op::LineJoin(_) => OpKind::LineJoin,
            Op::LineDash(_) => OpKind::LineDash,
            Op::Visit { .. } => OpKind::Visit,
        }
    }
}

impl Emit for Op {
    fn emit(&self, ctx: &mut dyn DrawContext) -> Result<(), EmitError> {
        match self {
            Op::Paint(paint) => paint.emit(ctx),
            Op::Stroke(stroke) => stroke.emit(ctx),
            Op::Fill(fill) => fill.emit(ctx),
            Op::LineJoin(join) => join.emit(ctx),
            Op::LineDash(dash) => dash.emit(ctx),
            Op::Visit {
                visitor,
                at: Some(at),
            } => visitor.emit_at(ctx, *at),
            Op::Visit { visitor, at: None } => visitor.emit(ctx),
        }
    }
}

impl From<PaintEmitter> for Op {
    fn from(emitter: PaintEmitter) -> Self {
        Op::Paint(emitter)
    }
}

impl From<StrokeEmitter> for Op {
    fn from(emitter: StrokeEmitter) -> Self {
        Op::Stroke(emitter)
    }
}

impl From<FillEmitter> for Op {
    fn from(emitter: FillEmitter) -> Self {
        Op::Fill(emitter)
    }
}

impl From<LineJoinEmitter> for Op {
    fn from(emitter: LineJoinEmitter) -> Self {
        Op::LineJoin(emitter)
    }
}

impl From<LineDashEmitter> for Op {
    fn from(emitter: LineDashEmitter) -> Self {
        Op::LineDash(emitter)
    }
}
