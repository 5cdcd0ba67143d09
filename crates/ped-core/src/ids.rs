//! Strongly typed identifiers and grid coordinates.
//!
//! `PedestrianId` is a zero-cost wrapper over the pedestrian's slot in the
//! grid roster.  `CellPos` is a `(row, col)` pair; the grid owns every cell by
//! value, so positions are the only handle other code ever holds.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Slot of a pedestrian in the grid roster.  Stable for the lifetime of
    /// the grid: moving a pedestrian rewrites its position, never its id.
    pub struct PedestrianId(u32);
}

// ── CellPos ───────────────────────────────────────────────────────────────────

/// A `(row, col)` coordinate on the grid.
///
/// Row-major: `row` grows downward, `col` grows to the right.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Euclidean distance between cell centres.
    #[inline]
    pub fn distance(self, other: CellPos) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Squared Euclidean distance; exact for any grid that fits in memory.
    #[inline]
    pub fn distance_sq(self, other: CellPos) -> f64 {
        let dr = self.row.abs_diff(other.row) as f64;
        let dc = self.col.abs_diff(other.col) as f64;
        dr * dr + dc * dc
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for CellPos {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
