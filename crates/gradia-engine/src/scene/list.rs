use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// `push()` is O(1); paint-order iteration sorts lazily and reuses its index buffer.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem { key: SortKey::new(z, order), cmd });
        self.sorted_dirty = true;
    }

    /// Iterates items back-to-front without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        let items = &self.items;
        self.sorted_indices.sort_by(|&a, &b| items[a].key.cmp(&items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::Color;

    fn solid(alpha: f32) -> Color {
        Color::from_premul(0.0, 0.0, 0.0, alpha)
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 1.0, 1.0);
        list.push_solid_rect(ZIndex(1), rect, solid(0.1));
        list.push_solid_rect(ZIndex(0), rect, solid(0.2));
        list.push_solid_rect(ZIndex(0), rect, solid(0.3));

        let alphas: Vec<f32> = list
            .iter_in_paint_order()
            .map(|item| match item.cmd.paint() {
                crate::paint::Paint::Solid(c) => c.a,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(alphas, vec![0.2, 0.3, 0.1]);
    }

    #[test]
    fn clear_resets_order() {
        let mut list = DrawList::new();
        list.push_solid_rect(ZIndex(0), Rect::default(), solid(1.0));
        list.clear();
        assert!(list.is_empty());
        list.push_solid_rect(ZIndex(0), Rect::default(), solid(1.0));
        assert_eq!(list.items()[0].key.order, 0);
    }
}
