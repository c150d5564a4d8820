//! The drawing-context seam emitters delegate to.

use super::brush::{LineCap, LineJoin};
use super::color::Color;

/// The subset of Cairo's context API that emitters call into.
///
/// Path and style setters are infallible; operations that Cairo reports
/// through its status (`paint`, `fill`, `stroke`, `save`, `restore`) return
/// the engine's error unchanged.
pub trait DrawContext {
    fn set_source_rgba(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_line_join(&mut self, join: LineJoin);
    fn set_dash(&mut self, dashes: &[f64], offset: f64);

    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Adds a circular arc; angles are in radians.
    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64);
    fn close_path(&mut self);

    /// Paints the current source everywhere within the current clip.
    fn paint(&mut self) -> Result<(), cairo::Error>;
    fn paint_with_alpha(&mut self, alpha: f64) -> Result<(), cairo::Error>;
    fn fill(&mut self) -> Result<(), cairo::Error>;
    fn stroke(&mut self) -> Result<(), cairo::Error>;

    fn save(&mut self) -> Result<(), cairo::Error>;
    fn restore(&mut self) -> Result<(), cairo::Error>;
}

// Inherent methods are called fully qualified; `self.paint()` would resolve
// back to the trait method through the `&mut self` receiver.
impl DrawContext for cairo::Context {
    fn set_source_rgba(&mut self, color: Color) {
        cairo::Context::set_source_rgba(self, color.r, color.g, color.b, color.a);
    }

    fn set_line_width(&mut self, width: f64) {
        cairo::Context::set_line_width(self, width);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        cairo::Context::set_line_cap(self, cap.into());
    }

    fn set_line_join(&mut self, join: LineJoin) {
        cairo::Context::set_line_join(self, join.into());
    }

    fn set_dash(&mut self, dashes: &[f64], offset: f64) {
        cairo::Context::set_dash(self, dashes, offset);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        cairo::Context::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        cairo::Context::line_to(self, x, y);
    }

    fn rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) {
        cairo::Context::rectangle(self, x, y, width, height);
    }

    fn arc(&mut self, xc: f64, yc: f64, radius: f64, angle1: f64, angle2: f64) {
        cairo::Context::arc(self, xc, yc, radius, angle1, angle2);
    }

    fn close_path(&mut self) {
        cairo::Context::close_path(self);
    }

    fn paint(&mut self) -> Result<(), cairo::Error> {
        cairo::Context::paint(self)
    }

    fn paint_with_alpha(&mut self, alpha: f64) -> Result<(), cairo::Error> {
        cairo::Context::paint_with_alpha(self, alpha)
    }

    fn fill(&mut self) -> Result<(), cairo::Error> {
        cairo::Context::fill(self)
    }

    fn stroke(&mut self) -> Result<(), cairo::Error> {
        cairo::Context::stroke(self)
    }

    fn save(&mut self) -> Result<(), cairo::Error> {
        cairo::Context::save(self)
    }

    fn restore(&mut self) -> Result<(), cairo::Error> {
        cairo::Context::restore(self)
    }
}
