use crate::paint::Color;

/// The color list of a gradient: either a complete `[start, end]` pair or nothing.
///
/// A single-color state is not representable. Building from two optional colors
/// yields `Empty` unless both are present, and an empty gradient draws nothing.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum GradientColors {
    #[default]
    Empty,
    Pair([Color; 2]),
}

impl GradientColors {
    #[inline]
    pub const fn pair(start: Color, end: Color) -> Self {
        GradientColors::Pair([start, end])
    }

    pub fn from_options(start: Option<Color>, end: Option<Color>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => GradientColors::pair(start, end),
            _ => GradientColors::Empty,
        }
    }

    /// Colors in gradient order; empty when incomplete.
    #[inline]
    pub fn as_slice(&self) -> &[Color] {
        match self {
            GradientColors::Empty => &[],
            GradientColors::Pair(colors) => colors,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, GradientColors::Empty)
    }

    #[inline]
    pub fn start(&self) -> Option<Color> {
        self.as_slice().first().copied()
    }

    #[inline]
    pub fn end(&self) -> Option<Color> {
        self.as_slice().last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color { Color::from_premul(1.0, 0.0, 0.0, 1.0) }
    fn blue() -> Color { Color::from_premul(0.0, 0.0, 1.0, 1.0) }

    #[test]
    fn both_colors_make_an_ordered_pair() {
        let colors = GradientColors::from_options(Some(red()), Some(blue()));
        assert_eq!(colors.as_slice(), &[red(), blue()]);
        assert_eq!(colors.start(), Some(red()));
        assert_eq!(colors.end(), Some(blue()));
    }

    #[test]
    fn any_missing_color_is_empty() {
        assert!(GradientColors::from_options(Some(red()), None).is_empty());
        assert!(GradientColors::from_options(None, Some(blue())).is_empty());
        assert!(GradientColors::from_options(None, None).as_slice().is_empty());
    }
}
