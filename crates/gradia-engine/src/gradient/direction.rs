use crate::coords::UnitPoint;

/// Compass-style position on the unit square.
///
/// `Leading` is the left edge and `Trailing` the right edge; directions are not
/// mirrored for right-to-left layouts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    TopLeading,
    Leading,
    BottomLeading,
    Top,
    Center,
    Bottom,
    TopTrailing,
    Trailing,
    BottomTrailing,
}

impl Direction {
    /// Every direction, leading column first, top to bottom within a column.
    pub const ALL: [Direction; 9] = [
        Direction::TopLeading,
        Direction::Leading,
        Direction::BottomLeading,
        Direction::Top,
        Direction::Center,
        Direction::Bottom,
        Direction::TopTrailing,
        Direction::Trailing,
        Direction::BottomTrailing,
    ];

    /// The unit-square point this direction denotes.
    #[inline]
    pub const fn point(self) -> UnitPoint {
        match self {
            Direction::TopLeading => UnitPoint::new(0.0, 0.0),
            Direction::Leading => UnitPoint::new(0.0, 0.5),
            Direction::BottomLeading => UnitPoint::new(0.0, 1.0),
            Direction::Top => UnitPoint::new(0.5, 0.0),
            Direction::Center => UnitPoint::new(0.5, 0.5),
            Direction::Bottom => UnitPoint::new(0.5, 1.0),
            Direction::TopTrailing => UnitPoint::new(1.0, 0.0),
            Direction::Trailing => UnitPoint::new(1.0, 0.5),
            Direction::BottomTrailing => UnitPoint::new(1.0, 1.0),
        }
    }
}

/// Resolves `direction` to its normalized point. Pure and total.
#[inline]
pub const fn resolve(direction: Direction) -> UnitPoint {
    direction.point()
}
