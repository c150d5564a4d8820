//! Library exports for composing and replaying Cairo drawing streams.
//!
//! Drawing state (brushes, dash patterns, join styles, opacity, coordinate
//! callbacks) is held by small emitter values that each know how to apply
//! themselves to a drawing context. Emitters are collected into a [`Stream`]
//! and replayed against a `cairo::Context` or any other [`DrawContext`].

pub mod config;
pub mod draw;
pub mod emit;
pub mod error;
pub mod render;
pub mod stream;

pub use config::Config;
pub use draw::{DrawContext, RecordingContext};
pub use emit::{Emit, Op};
pub use error::EmitError;
pub use render::{RenderTarget, render_stream};
pub use stream::{Stream, StreamFile};
