pub(crate) mod rect;
pub(crate) mod rounded_rect;

pub use rect::RectCmd;
pub use rounded_rect::RoundedRectCmd;
