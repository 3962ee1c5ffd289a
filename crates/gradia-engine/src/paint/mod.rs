//! Paint model shared between layers and backends.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, two-stop linear gradients in pixel space)

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient};

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}
