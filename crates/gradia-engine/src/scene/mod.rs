//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands produced by backend adapters
//! - provide deterministic ordering (z-index + insertion order)

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use shapes::{RectCmd, RoundedRectCmd};
pub use z_index::ZIndex;
