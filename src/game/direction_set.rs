use crate::game::{Direction, ALL_DIRECTIONS};
use std::fmt;

/// A set of directions packed into the low four bits of a byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionSet {
    bits: u8,
}

impl DirectionSet {
    pub const fn new() -> DirectionSet {
        DirectionSet { bits: 0 }
    }

    pub fn insert(&mut self, direction: Direction) {
        self.bits |= direction.bit();
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.bits & direction.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterates in UP, RIGHT, DOWN, LEFT order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> {
        let set = *self;
        ALL_DIRECTIONS.into_iter().filter(move |d| set.contains(*d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::new();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

impl<const N: usize> From<[Direction; N]> for DirectionSet {
    fn from(directions: [Direction; N]) -> Self {
        directions.into_iter().collect()
    }
}

impl fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
