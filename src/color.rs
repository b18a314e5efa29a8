//! Face color type and color-set bitmask
//!
//! The six cube colors are identified with the face they sit on in the
//! solved state: U, R, F, D, L, B, numbered 0..5. A [`ColorSet`] is a
//! compact bitmask over these six, used by the constraint engine to record
//! which colors a slot must show.

use std::fmt;

/// Number of distinct face colors.
pub const COLOR_COUNT: usize = 6;

/// One of the six face colors.
///
/// Newtype over the color index 0..5 to keep colors from mixing with the
/// many other small integers in this crate (slots, positions, orientations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u8);

impl Color {
    pub const U: Color = Color(0);
    pub const R: Color = Color(1);
    pub const F: Color = Color(2);
    pub const D: Color = Color(3);
    pub const L: Color = Color(4);
    pub const B: Color = Color(5);

    /// Create a color from its index, returning `None` if out of range.
    pub fn try_new(index: u8) -> Option<Self> {
        if (index as usize) < COLOR_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Underlying color index (0..5).
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Face letter: 'U', 'R', 'F', 'D', 'L' or 'B'.
    pub fn to_char(self) -> char {
        const CHARS: [char; COLOR_COUNT] = ['U', 'R', 'F', 'D', 'L', 'B'];
        CHARS[self.0 as usize]
    }

    /// Parse a face letter back into a color.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'U' => Some(Self::U),
            'R' => Some(Self::R),
            'F' => Some(Self::F),
            'D' => Some(Self::D),
            'L' => Some(Self::L),
            'B' => Some(Self::B),
            _ => None,
        }
    }

    /// Iterator over all six colors in index order.
    pub fn all() -> impl Iterator<Item = Color> {
        (0..COLOR_COUNT as u8).map(Color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A set of face colors represented as a bitmask.
///
/// Bit i (from the LSB) is set when color i is in the set. Six colors fit
/// comfortably in a `u8`, which keeps the constraint-engine state tight for
/// whole-builder snapshotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSet(u8);

impl ColorSet {
    /// The empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The set containing all six colors.
    pub const fn full() -> Self {
        Self((1 << COLOR_COUNT) - 1)
    }

    /// Whether `color` is in the set.
    pub fn contains(self, color: Color) -> bool {
        (self.0 >> color.0) & 1 != 0
    }

    /// Add a color to the set.
    pub fn insert(&mut self, color: Color) {
        self.0 |= 1 << color.0;
    }

    /// Number of colors in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Intersection of two sets.
    pub fn intersection(self, other: ColorSet) -> ColorSet {
        ColorSet(self.0 & other.0)
    }

    /// Union of two sets.
    pub fn union(self, other: ColorSet) -> ColorSet {
        ColorSet(self.0 | other.0)
    }

    /// Symmetric difference, i.e. the colors in exactly one of the sets.
    pub fn symmetric_difference(self, other: ColorSet) -> ColorSet {
        ColorSet(self.0 ^ other.0)
    }

    /// Iterate over the colors in the set in index order.
    pub fn iter(self) -> impl Iterator<Item = Color> {
        Color::all().filter(move |&c| self.contains(c))
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        let mut set = Self::empty();
        for color in iter {
            set.insert(color);
        }
        set
    }
}

impl fmt::Display for ColorSet {
    /// Format as "{URF}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for color in self.iter() {
            write!(f, "{}", color)?;
        }
        write!(f, "}}")
    }
}
