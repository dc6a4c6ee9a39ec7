//! Fixed 64×64 letter grid.

use std::fmt;

use crate::word::fold_lower;

/// Number of rows in every grid.
pub const GRID_ROWS: usize = 64;

/// Number of columns in every grid.
pub const GRID_COLS: usize = 64;

/// A fixed 64×64 grid of lowercase single-character cells.
///
/// Cells are stored row-major in one flat buffer (`row * GRID_COLS + col`).
/// Construction consumes the first [`GRID_ROWS`] input rows and the first
/// [`GRID_COLS`] characters of each; everything beyond stays unset. The
/// grid is immutable after construction.
///
/// [`cell`](LetterGrid::cell) is the single gate for both bounds and
/// unset-cell checks: it returns `None` in either case, so a match walk
/// needs no separate bounds arithmetic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterGrid {
    cells: Box<[Option<char>]>,
}

impl LetterGrid {
    /// Build a grid from an ordered sequence of row strings.
    ///
    /// Characters are lowercased as they are stored. Input shorter than
    /// 64 rows or 64 characters per row leaves the remainder unset; excess
    /// rows and characters are silently ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use grille_core::LetterGrid;
    ///
    /// let grid = LetterGrid::from_rows(["CHill", "ensoe"]);
    /// assert_eq!(grid.cell(0, 0), Some('c'));
    /// assert_eq!(grid.cell(1, 4), Some('e'));
    /// assert_eq!(grid.cell(2, 0), None); // never set
    /// assert_eq!(grid.cell(0, 64), None); // out of bounds
    /// ```
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = vec![None; GRID_ROWS * GRID_COLS].into_boxed_slice();
        for (row, line) in rows.into_iter().take(GRID_ROWS).enumerate() {
            for (col, ch) in line.as_ref().chars().take(GRID_COLS).enumerate() {
                cells[row * GRID_COLS + col] = Some(fold_lower(ch));
            }
        }
        Self { cells }
    }

    /// A grid with every cell unset.
    pub fn blank() -> Self {
        Self::from_rows(std::iter::empty::<&str>())
    }

    /// The cell at `(row, col)`.
    ///
    /// Returns `None` for out-of-bounds coordinates and for in-bounds
    /// cells that were never set. Both are designed "no match" outcomes
    /// for the matcher, never errors.
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return None;
        }
        self.cells[row * GRID_COLS + col]
    }

    /// `true` if no cell is set.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Number of set cells.
    pub fn set_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

/// Diagnostic rendering: one line per grid row, cells separated by a
/// space, unset cells shown as `·`.
impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.cells[row * GRID_COLS + col] {
                    Some(ch) => write!(f, "{ch}")?,
                    None => write!(f, "·")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
