//! `grid` — Module to load and validate the rectangular letter grid
//!
//! A [`Grid`] is an immutable rectangle of single characters. Rectangularity
//! is enforced at construction time: the first input line fixes the width,
//! and any later line of a different length fails the whole load with
//! [`LoadError::MalformedGrid`] before a partial puzzle can leak out. The
//! solver can therefore index cells without re-checking row lengths.
//!
//! Grids with holes or ragged rows are not supported, and letters are taken
//! as-is (no Unicode normalization).

use crate::errors::LoadError;

/// A validated rectangular grid of characters.
///
/// Invariant: every row has the same length. An empty grid (no rows) is
/// representable — it parses from empty input — but the solver refuses it.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Parse a grid from an in-memory string, one row per line.
    ///
    /// Stops at end of input or at the first blank line. The first line
    /// determines the expected width.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MalformedGrid`] as soon as a row's length
    /// disagrees with the first row's; no partial grid is retained. The
    /// reported row number is 1-based.
    pub fn parse_from_str(contents: &str) -> Result<Grid, LoadError> {
        let mut rows: Vec<Vec<char>> = Vec::new();
        let mut width = 0;

        for (i, raw_line) in contents.lines().enumerate() {
            let line = raw_line.trim_end_matches('\r');

            // Blank line terminates the grid section.
            if line.is_empty() {
                break;
            }

            let cells: Vec<char> = line.chars().collect();
            if rows.is_empty() {
                width = cells.len();
            } else if cells.len() != width {
                return Err(LoadError::MalformedGrid {
                    row: i + 1,
                    expected: width,
                    actual: cells.len(),
                });
            }
            rows.push(cells);
        }

        Ok(Grid { rows })
    }

    /// Convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or an
    /// `InvalidInput`-kinded error if the rows are not all the same length.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Grid> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read puzzle from '{}': {}", path_ref.display(), e),
            )
        })?;

        Ok(Self::parse_from_str(&data)?)
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (0 for an empty grid).
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Character at `(row, col)`, rows counted from the top.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> char {
        self.rows[row][col]
    }

    /// Stringify the grid row by row, rows separated by `\n`, with no
    /// trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let grid = Grid::parse_from_str("CA\nTS").unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.get(0, 0), 'C');
        assert_eq!(grid.get(0, 1), 'A');
        assert_eq!(grid.get(1, 0), 'T');
        assert_eq!(grid.get(1, 1), 'S');
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = Grid::parse_from_str("AB\nCDE").unwrap_err();
        assert!(matches!(
            err,
            LoadError::MalformedGrid { row: 2, expected: 2, actual: 3 }
        ));
    }

    #[test]
    fn test_parse_rejects_ragged_rows_shorter() {
        let err = Grid::parse_from_str("ABC\nDE\nFGH").unwrap_err();
        assert!(matches!(
            err,
            LoadError::MalformedGrid { row: 2, expected: 3, actual: 2 }
        ));
    }

    #[test]
    fn test_parse_empty_input_gives_empty_grid() {
        let grid = Grid::parse_from_str("").unwrap();
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.width(), 0);
    }

    #[test]
    fn test_parse_stops_at_blank_line() {
        let grid = Grid::parse_from_str("AB\nCD\n\nEF").unwrap();
        assert_eq!(grid.height(), 2);
    }

    #[test]
    fn test_single_row_grid() {
        let grid = Grid::parse_from_str("ABBA").unwrap();
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.width(), 4);
    }

    #[test]
    fn test_render_has_no_trailing_newline() {
        let grid = Grid::parse_from_str("CA\nTS\n").unwrap();
        assert_eq!(grid.render(), "CA\nTS");
    }

    #[test]
    fn test_render_single_row() {
        let grid = Grid::parse_from_str("WORD").unwrap();
        assert_eq!(grid.render(), "WORD");
    }
}
