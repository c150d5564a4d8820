//! Drawing primitives and the Cairo context seam.
//!
//! This module defines the value types emitters store and the context they
//! replay against:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Brush`]: color plus pen state applied before fills and strokes
//! - [`LineJoin`] / [`LineCap`]: line style enums mapped onto Cairo's
//! - [`DrawContext`]: the calls emitters delegate to, implemented for
//!   `cairo::Context` and for the call-recording [`RecordingContext`]

pub mod brush;
pub mod color;
pub mod context;
pub mod recording;

pub use brush::{Brush, LineCap, LineJoin};
pub use color::Color;
pub use context::DrawContext;
pub use recording::{Call, RecordedState, RecordingContext};
