//! Gradia engine crate.
//!
//! Attaches two-color directional gradients to host surfaces. The core is
//! direction resolution (`gradient::Direction`) and gradient layer lifecycle
//! (`gradient::apply_gradient`, `gradient::gradient_layer`); the remaining
//! modules supply geometry, paint, a reference host surface and backend
//! adapters that turn gradient layers into draw data.

pub mod backend;
pub mod coords;
pub mod gradient;
pub mod layer;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod surface;
