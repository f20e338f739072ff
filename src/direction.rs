//! `direction` — Fixed labels for single steps between adjacent grid cells
//!
//! Each step of a word's path is labeled by looking up the (row, column)
//! delta in a 3×3 table. The labels are opaque historical tokens, not true
//! compass directions (note `N` for up-left, `E` for up-right); they must be
//! preserved exactly because downstream consumers parse them.

/// Step labels indexed by `[Δrow + 1][Δcol + 1]`.
///
/// The center entry (`X`, zero delta) is never produced by the search —
/// adjacent cells always differ in at least one axis — but stays defined so
/// the table covers every delta.
pub const DIRECTIONS: [[char; 3]; 3] = [
    ['N', 'U', 'E'],
    ['L', 'X', 'R'],
    ['W', 'D', 'S'],
];

/// Label for the step from `(old_row, old_col)` to the adjacent cell
/// `(new_row, new_col)`. Each axis may differ by at most one.
#[must_use]
pub fn encode(new_row: usize, new_col: usize, old_row: usize, old_col: usize) -> char {
    DIRECTIONS[new_row + 1 - old_row][new_col + 1 - old_col]
}
