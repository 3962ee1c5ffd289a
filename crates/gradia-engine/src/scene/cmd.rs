use crate::paint::Paint;

use super::shapes::{RectCmd, RoundedRectCmd};

/// Renderer-agnostic draw command.
///
/// Layers translate to one of these: plain frames become `Rect`, frames with a
/// positive corner radius become `RoundedRect`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
}

impl DrawCmd {
    #[inline]
    pub fn paint(&self) -> &Paint {
        match self {
            DrawCmd::Rect(cmd) => &cmd.paint,
            DrawCmd::RoundedRect(cmd) => &cmd.paint,
        }
    }
}
