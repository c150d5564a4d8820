//! Callback-holding coordinate visitor.

use super::Emit;
use crate::draw::{Color, DrawContext};
use crate::error::EmitError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in user-space units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Callback receiving only the context.
pub type ContextFn = Box<dyn Fn(&mut dyn DrawContext) -> Result<(), EmitError>>;

/// Callback receiving the context and a coordinate.
pub type CoordinateFn = Box<dyn Fn(&mut dyn DrawContext, Coordinate) -> Result<(), EmitError>>;

/// Holds up to two optional callbacks and dispatches to whichever applies.
///
/// A missing callback is a valid state: the corresponding entry point does
/// nothing and succeeds.
#[derive(Default)]
pub struct CoordinateVisitor {
    fn_v1: Option<ContextFn>,
    fn_v2: Option<CoordinateFn>,
}

impl fmt::Debug for CoordinateVisitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoordinateVisitor")
            .field("fn_v1", &self.fn_v1.is_some())
            .field("fn_v2", &self.fn_v2.is_some())
            .finish()
    }
}

impl CoordinateVisitor {
    /// A visitor with neither callback set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the context-only callback.
    pub fn on_context<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut dyn DrawContext) -> Result<(), EmitError> + 'static,
    {
        self.fn_v1 = Some(Box::new(f));
        self
    }

    /// Sets the context-and-coordinate callback.
    pub fn on_coordinate<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut dyn DrawContext, Coordinate) -> Result<(), EmitError> + 'static,
    {
        self.fn_v2 = Some(Box::new(f));
        self
    }

    pub fn has_context_fn(&self) -> bool {
        self.fn_v1.is_some()
    }

    pub fn has_coordinate_fn(&self) -> bool {
        self.fn_v2.is_some()
    }

    /// Invokes the coordinate callback, if set.
    pub fn emit_at(
        &self,
        ctx: &mut dyn DrawContext,
        coordinate: Coordinate,
    ) -> Result<(), EmitError> {
        match &self.fn_v2 {
            Some(f) => f(ctx, coordinate),
            None => Ok(()),
        }
    }

    /// Binds a context and coordinate for a later [`Visit::accept`].
    pub fn bind<'v, 'c>(
        &'v self,
        ctx: &'c mut dyn DrawContext,
        coordinate: Coordinate,
    ) -> Visit<'v, 'c> {
        Visit {
            visitor: self,
            ctx,
            coordinate,
        }
    }

    // ------------------------------------------------------------------------
    // Path and source visitors
    // ------------------------------------------------------------------------

    /// Begins a new sub-path at the visited coordinate.
    pub fn move_to() -> Self {
        Self::new().on_coordinate(|ctx, at| {
            ctx.move_to(at.x, at.y);
            Ok(())
        })
    }

    /// Adds a line segment to the visited coordinate.
    pub fn line_to() -> Self {
        Self::new().on_coordinate(|ctx, at| {
            ctx.line_to(at.x, at.y);
            Ok(())
        })
    }

    /// Adds a rectangle whose top-left corner is the visited coordinate.
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::new().on_coordinate(move |ctx, at| {
            ctx.rectangle(at.x, at.y, width, height);
            Ok(())
        })
    }

    /// Adds an arc centered on the visited coordinate; angles in radians.
    pub fn arc(radius: f64, angle1: f64, angle2: f64) -> Self {
        Self::new().on_coordinate(move |ctx, at| {
            ctx.arc(at.x, at.y, radius, angle1, angle2);
            Ok(())
        })
    }

    pub fn close_path() -> Self {
        Self::new().on_context(|ctx| {
            ctx.close_path();
            Ok(())
        })
    }

    /// Sets the source color without drawing.
    pub fn source(color: Color) -> Self {
        Self::new().on_context(move |ctx| {
            ctx.set_source_rgba(color);
            Ok(())
        })
    }
}

impl Emit for CoordinateVisitor {
    /// Invokes the context-only callback, if set.
    fn emit(&self, ctx: &mut dyn DrawContext) -> Result<(), EmitError> {
        match &self.fn_v1 {
            Some(f) => f(ctx),
            None => Ok(()),
        }
    }
}

/// A visitor bound to a context and coordinate.
pub struct Visit<'v, 'c> {
    visitor: &'v CoordinateVisitor,
    ctx: &'c mut dyn DrawContext,
    coordinate: Coordinate,
}

impl Visit<'_, '_> {
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Invokes the coordinate callback with the bound context and coordinate.
    pub fn accept(&mut self) -> Result<(), EmitError> {
        self.visitor.emit_at(&mut *self.ctx, self.coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Call, RecordingContext};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_visitor(log: &Rc<RefCell<Vec<String>>>) -> CoordinateVisitor {
        let v1_log = Rc::clone(log);
        let v2_log = Rc::clone(log);
        CoordinateVisitor::new()
            .on_context(move |_| {
                v1_log.borrow_mut().push("v1".to_string());
                Ok(())
            })
            .on_coordinate(move |ctx, at| {
                ctx.move_to(at.x, at.y);
                v2_log.borrow_mut().push(format!("v2 {} {}", at.x, at.y));
                Ok(())
            })
    }

    #[test]
    fn empty_visitor_does_nothing() {
        let visitor = CoordinateVisitor::new();
        assert!(!visitor.has_context_fn());
        assert!(!visitor.has_coordinate_fn());
        let mut ctx = RecordingContext::new();

        visitor.emit(&mut ctx).unwrap();
        visitor.emit_at(&mut ctx, Coordinate::new(1.0, 2.0)).unwrap();
        visitor.bind(&mut ctx, Coordinate::new(1.0, 2.0)).accept().unwrap();

        assert!(ctx.calls().is_empty());
    }

    #[test]
    fn accept_is_noop_without_coordinate_fn() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let v1_log = Rc::clone(&log);
        let visitor = CoordinateVisitor::new().on_context(move |_| {
            v1_log.borrow_mut().push("v1".to_string());
            Ok(())
        });
        let mut ctx = RecordingContext::new();

        visitor.bind(&mut ctx, Coordinate::new(3.0, 4.0)).accept().unwrap();
        assert!(log.borrow().is_empty());

        visitor.emit(&mut ctx).unwrap();
        assert_eq!(*log.borrow(), vec!["v1".to_string()]);
    }

    #[test]
    fn emit_is_noop_without_context_fn() {
        let visitor = CoordinateVisitor::move_to();
        let mut ctx = RecordingContext::new();
        visitor.emit(&mut ctx).unwrap();
        assert!(ctx.calls().is_empty());
    }

    #[test]
    fn accept_and_emit_at_pass_identical_arguments() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let visitor = recording_visitor(&log);
        let at = Coordinate::new(10.0, 20.0);

        assert!(visitor.has_context_fn() && visitor.has_coordinate_fn());

        let mut accepted = RecordingContext::new();
        let mut visit = visitor.bind(&mut accepted, at);
        assert_eq!(visit.coordinate(), at);
        visit.accept().unwrap();

        let mut emitted = RecordingContext::new();
        visitor.emit_at(&mut emitted, at).unwrap();

        assert_eq!(accepted.calls(), emitted.calls());
        assert_eq!(
            *log.borrow(),
            vec!["v2 10 20".to_string(), "v2 10 20".to_string()]
        );
    }

    #[test]
    fn callback_errors_propagate() {
        let visitor = CoordinateVisitor::new()
            .on_context(|_| Err(EmitError::invalid("boom")));
        let mut ctx = RecordingContext::new();
        assert!(matches!(
            visitor.emit(&mut ctx),
            Err(EmitError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn path_visitors_delegate_segments() {
        let mut ctx = RecordingContext::new();
        CoordinateVisitor::move_to()
            .emit_at(&mut ctx, Coordinate::new(0.0, 0.0))
            .unwrap();
        CoordinateVisitor::line_to()
            .emit_at(&mut ctx, Coordinate::new(5.0, 0.0))
            .unwrap();
        CoordinateVisitor::rectangle(2.0, 3.0)
            .emit_at(&mut ctx, Coordinate::new(1.0, 1.0))
            .unwrap();
        CoordinateVisitor::close_path().emit(&mut ctx).unwrap();

        assert_eq!(
            ctx.calls(),
            &[
                Call::MoveTo(0.0, 0.0),
                Call::LineTo(5.0, 0.0),
                Call::Rectangle(1.0, 1.0, 2.0, 3.0),
                Call::ClosePath,
            ]
        );
    }
}
