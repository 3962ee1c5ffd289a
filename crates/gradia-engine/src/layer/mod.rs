//! Layer stack entries.
//!
//! A host surface owns an ordered stack of [`Sublayer`]s; index 0 is drawn
//! first (bottom). Gradients are one kind of sublayer, existing child content
//! is represented by [`SolidLayer`].

mod gradient;
mod sublayer;

pub use gradient::GradientLayer;
pub use sublayer::{SolidLayer, Sublayer};
