use core::fmt;

/// A position on the grid. Signed so that positions just off the edge (for
/// example the buffer ring of a vessel on row 0) can be expressed and then
/// rejected by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

/// Offsets of the eight neighbours of a cell.
pub(crate) const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate shifted by (`dr`, `dc`).
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The eight surrounding coordinates, whether or not they lie on a grid.
    pub fn neighbours(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOURS.into_iter().map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// Chebyshev (king-move) distance between two coordinates.
    pub fn chebyshev(self, other: Coordinate) -> u32 {
        self.row
            .abs_diff(other.row)
            .max(self.col.abs_diff(other.col))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Displays 1-indexed, the way players type coordinates.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", i64::from(self.row) + 1, i64::from(self.col) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_surround_the_cell() {
        let c = Coordinate::new(2, 2);
        let around: alloc::vec::Vec<_> = c.neighbours().collect();
        assert_eq!(around.len(), 8);
        assert!(!around.contains(&c));
        assert!(around.iter().all(|n| n.chebyshev(c) == 1));
    }

    #[test]
    fn display_is_one_indexed() {
        assert_eq!(alloc::format!("{}", Coordinate::new(0, 4)), "1 5");
    }
}
