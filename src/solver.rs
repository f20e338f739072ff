//! The backtracking search that finds every dictionary word in the grid.
//!
//! From every cell, a depth-first walk visits chains of 8-directionally
//! adjacent cells, never revisiting a cell within one path. At each step the
//! accumulated string is checked against the dictionary: an exact hit emits a
//! candidate record, and descent continues only while some dictionary word
//! still has the accumulated string as a prefix. Without that prune the walk
//! is exponential in the grid size, so the prefix check always runs *before*
//! neighbor expansion.
//!
//! Candidates are deduplicated per word (case-insensitively): when the same
//! word occurs at several places in the grid, the occurrence whose *start*
//! cell has the smaller `x` wins, ties broken by the smaller `y`. The final
//! list is sorted ascending by word, case-insensitively.
//!
//! # Coordinates
//!
//! Internally cells are `(row, col)` counted from the top-left. Reported
//! coordinates are bottom-left-origin and 1-indexed: `x = col + 1`,
//! `y = height - row`, both taken from the cell where the word started.
//!
//! # Example
//!
//! ```
//! use boggle::{dictionary::Dictionary, grid::Grid, solver};
//!
//! let grid = Grid::parse_from_str("CA\nTS")?;
//! let dictionary = Dictionary::parse_from_str("CAT\nCATS\nAT")?;
//!
//! for record in solver::solve(&grid, &dictionary)? {
//!     println!("{record}");
//! }
//! // AT	2	2	W
//! // CAT	1	2	RW
//! // CATS	1	2	RWR
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use log::{debug, info};

use crate::dictionary::Dictionary;
use crate::direction;
use crate::grid::Grid;

/// Error type for the solve entry point.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    /// `solve` was called before a usable grid was established (the grid has
    /// no cells). Raised before any search work happens.
    #[error("no puzzle to solve (grid has no cells)")]
    UnreadyInput,
}

impl SolveError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolveError::UnreadyInput => "S001",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolveError::UnreadyInput => Some("Load a non-empty rectangular puzzle before solving"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// One retained occurrence of a dictionary word in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    /// The word as spelled by the grid cells (grid case, not dictionary case).
    pub word: String,
    /// 1-indexed column of the start cell, counted left to right.
    pub x: usize,
    /// 1-indexed row of the start cell, counted from the bottom.
    pub y: usize,
    /// One direction label per step; its length is `word` length − 1.
    pub path: String,
}

impl fmt::Display for FoundWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{}", self.word, self.x, self.y, self.path)
    }
}

/// Per-word deduplication with the positional tie-break.
///
/// Keyed by the case-folded word, at most one record per key. Each incoming
/// candidate is compared only on its start coordinate, so the retained
/// record is the minimum by `(x, y)` over all occurrences regardless of
/// discovery order.
#[derive(Debug, Default)]
struct ResultSet {
    found: HashMap<String, FoundWord>,
}

impl ResultSet {
    fn insert(&mut self, candidate: FoundWord) {
        match self.found.entry(candidate.word.to_ascii_lowercase()) {
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get();
                if candidate.x < existing.x
                    || (candidate.x == existing.x && candidate.y < existing.y)
                {
                    debug!(
                        "replacing {} at ({},{}) with occurrence at ({},{})",
                        existing.word, existing.x, existing.y, candidate.x, candidate.y
                    );
                    slot.insert(candidate);
                }
            }
        }
    }

    fn into_sorted_vec(self) -> Vec<FoundWord> {
        let mut out: Vec<FoundWord> = self.found.into_values().collect();
        out.sort_by(|a, b| a.word.to_ascii_lowercase().cmp(&b.word.to_ascii_lowercase()));
        out
    }
}

/// State owned by one solve run: the inputs plus the visited mask, the
/// in-progress word and path strings, and the accumulated results.
struct Search<'a> {
    grid: &'a Grid,
    dictionary: &'a Dictionary,
    visited: Vec<Vec<bool>>,
    word: String,
    path: String,
    results: ResultSet,
}

/// Find every dictionary word in the grid.
///
/// Returns the retained records sorted ascending by word (case-insensitive).
///
/// # Errors
///
/// Returns [`SolveError::UnreadyInput`] if the grid has no cells.
pub fn solve(grid: &Grid, dictionary: &Dictionary) -> Result<Vec<FoundWord>, SolveError> {
    if grid.height() == 0 || grid.width() == 0 {
        return Err(SolveError::UnreadyInput);
    }

    info!(
        "searching {}x{} grid against {} dictionary words",
        grid.height(),
        grid.width(),
        dictionary.words.len()
    );

    let mut search = Search {
        grid,
        dictionary,
        visited: vec![vec![false; grid.width()]; grid.height()],
        word: String::new(),
        path: String::new(),
        results: ResultSet::default(),
    };

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            search.explore(row, col, (row, col));
        }
    }

    let found = search.results.into_sorted_vec();
    info!("found {} distinct words", found.len());
    Ok(found)
}

impl Search<'_> {
    /// Visit `(row, col)` as the next cell of the current path.
    ///
    /// `start` is the cell where this path began; it is threaded through the
    /// recursion by value so it stays correct however the call tree unwinds.
    /// On entry the cell is marked visited and its character appended to the
    /// word; both are restored before returning, so the mask and the word
    /// and path strings always mirror the active path exactly.
    fn explore(&mut self, row: usize, col: usize, start: (usize, usize)) {
        self.visited[row][col] = true;
        self.word.push(self.grid.get(row, col));

        if self.dictionary.is_word(&self.word) {
            let (start_row, start_col) = start;
            let record = FoundWord {
                word: self.word.clone(),
                x: start_col + 1,
                y: self.grid.height() - start_row,
                path: self.path.clone(),
            };
            debug!("hit {record}");
            self.results.insert(record);
        }

        // Prune before fanning out: descend only while some dictionary word
        // can still be completed from the accumulated string.
        if self.dictionary.has_prefix(&self.word) {
            let row_hi = (row + 1).min(self.grid.height() - 1);
            let col_hi = (col + 1).min(self.grid.width() - 1);
            for i in row.saturating_sub(1)..=row_hi {
                for j in col.saturating_sub(1)..=col_hi {
                    // covers (row, col) itself as well
                    if self.visited[i][j] {
                        continue;
                    }
                    self.path.push(direction::encode(i, j, row, col));
                    self.explore(i, j, start);
                    self.path.pop();
                }
            }
        }

        self.word.pop();
        self.visited[row][col] = false;
    }
}
