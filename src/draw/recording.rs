//! A drawing context that records calls instead of rasterizing.
//!
//! Used to inspect what a stream would do (`uxstream check --calls`) and to
//! verify call ordering in tests.

use super::brush::{LineCap, LineJoin};
use super::color::Color;
use super::context::DrawContext;

/// One delegated context call, in the order it was made.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    SetSource(Color),
    SetLineWidth(f64),
    SetLineCap(LineCap),
    SetLineJoin(LineJoin),
    SetDash { dashes: Vec<f64>, offset: f64 },
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Rectangle(f64, f64, f64, f64),
    Arc(f64, f64, f64, f64, f64),
    ClosePath,
    Paint,
    PaintWithAlpha(f64),
    Fill,
    Stroke,
    Save,
    Restore,
}

/// Current style state, tracked the way Cairo tracks it.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedState {
    pub source: Color,
    pub line_width: f64,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub dashes: Vec<f64>,
    pub dash_offset: f64,
}

impl Default for RecordedState {
    // Cairo's initial gstate
    fn default() -> Self {
        Self {
            source: super::color::BLACK,
            line_width: 2.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            dashes: Vec::new(),
            dash_offset: 0.0,
        }
    }
}

/// Records every call made against it and tracks style state.
///
/// `save`/`restore` maintain a state stack; an unbalanced `restore` fails
/// with [`cairo::Error::InvalidRestore`] as Cairo does. Drawing operations
/// can be made to fail with [`RecordingContext::fail_drawing_with`].
#[derive(Debug, Default)]
pub struct RecordingContext {
    calls: Vec<Call>,
    state: RecordedState,
    saved: Vec<RecordedState>,
    drawing_error: Option<cairo::Error>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent paint, fill and stroke return `error` (after recording).
    pub fn fail_drawing_with(&mut self, error: cairo::Error) {
        self.drawing_error = Some(error);
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn state(&self) -> &RecordedState {
        &self.state
    }

    /// Number of recorded calls equal to `call`.
    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    /// Index of the first recorded call matching `pred`.
    pub fn position(&self, pred: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls.iter().position(pred)
    }

    /// Forgets recorded calls and returns to Cairo's initial state.
    ///
    /// An error set by [`fail_drawing_with`](Self::fail_drawing_with) stays armed.
    pub fn clear(&mut self) {
        self.calls.clear();
        self.state = RecordedState::default();
        self.saved.clear();
    }

    fn draw(&mut self, call: Call) -> Result<(), cairo::Error> {
        self.calls.push(call);
        match self.drawing_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl DrawContext for RecordingContext {
    fn set_source_rgba(&mut self, color: Color) {
        self.state.source = color;
        self.calls.push(Call::SetSource(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
        self.calls.push(Call::SetLineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.state.line_cap = cap;
        self.calls.push(Call::SetLineCap(cap));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.state.line_join = join;
        self.calls.push(Call::SetLineJoin(join));
    }

    fn set_dash(&mut self, dashes: &[f64], offset: f64) {
        self.state.dashes = dashes.to_vec();
        self.state.dash_offset = offset;
        self.calls.push(Call::SetDash {
            dashes: dashes.to_vec(),
            offset,
        });
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::LineTo(x, y));
    }

    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(Call::Rectangle(x, y, width, height));
    }

    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        self.calls.push(Call::Arc(xc, yc, radius, angle1, angle2));
    }

    fn close_path(&mut self) {
        self.calls.push(Call::ClosePath);
    }

    fn paint(&mut self) -> Result<(), cairo::Error> {
        self.draw(Call::Paint)
    }

    fn paint_with_alpha(&mut self, alpha: f64) -> Result<(), cairo::Error> {
        self.draw(Call::PaintWithAlpha(alpha))
    }

    fn fill(&mut self) -> Result<(), cairo::Error> {
        self.draw(Call::Fill)
    }

    fn stroke(&mut self) -> Result<(), cairo::Error> {
        self.draw(Call::Stroke)
    }

    fn save(&mut self) -> Result<(), cairo::Error> {
        self.saved.push(self.state.clone());
        self.calls.push(Call::Save);
        Ok(())
    }

    fn restore(&mut self) -> Result<(), cairo::Error> {
        self.calls.push(Call::Restore);
        match self.saved.pop() {
            Some(state) => {
                self.state = state;
                Ok(())
            }
            None => Err(cairo::Error::InvalidRestore),
        }
    }
}
