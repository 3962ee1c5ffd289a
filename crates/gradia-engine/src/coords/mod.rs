//! Coordinate and geometry types shared by layers, surfaces and backends.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Gradient endpoints live in unit space (`UnitPoint`) and are mapped into
//! pixel space against a layer frame only when a backend draws them.

mod corner_radii;
mod rect;
mod unit_point;
mod vec2;

pub use corner_radii::CornerRadii;
pub use rect::Rect;
pub use unit_point::UnitPoint;
pub use vec2::Vec2;
