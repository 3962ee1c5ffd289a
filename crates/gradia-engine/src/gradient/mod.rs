//! Gradient descriptors and the two attach contracts.
//!
//! - [`resolve`] turns a [`Direction`] into a unit-square point.
//! - [`apply_gradient`] sizes a new layer to a host and inserts it beneath the
//!   host's content, once.
//! - [`gradient_layer`] hands back an unsized layer the caller sizes, inserts and
//!   re-sizes on every layout pass.

mod attach;
mod colors;
mod direction;
mod spec;

pub use attach::{apply_gradient, gradient_layer};
pub use colors::GradientColors;
pub use direction::{resolve, Direction};
pub use spec::GradientSpec;
