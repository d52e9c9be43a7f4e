//! Single-line slide and merge
//!
//! Every move reduces to this: a line of four cells is collapsed toward index 0.
//! Rows and columns are fed in already oriented by `board`.

use crate::consts::{BOARD_SIZE, TARGET_TILE};

/// One line of the board, ordered in the direction tiles slide toward.
pub type Line = [u32; BOARD_SIZE];

/// Result of collapsing one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMerge {
    /// Collapsed line, zeros padded at the end
    pub line: Line,
    /// Sum of the values created by merges
    pub score_gain: u32,
    /// A merge produced the target tile
    pub reached_target: bool,
}

/// Slide all tiles toward index 0 and merge equal neighbours once.
///
/// A merged tile is never merged again in the same pass, so `[2, 2, 4, 0]`
/// becomes `[4, 4, 0, 0]` rather than `[8, 0, 0, 0]`.
pub fn merge_line(line: Line) -> LineMerge {
    let mut out = [0; BOARD_SIZE];
    let mut len = 0;
    let mut pending: Option<u32> = None;
    let mut score_gain: u32 = 0;
    let mut reached_target = false;

    for value in line.into_iter().filter(|&v| v != 0) {
        // A pair whose sum does not fit a tile stays unmerged
        let merged = pending
            .filter(|&prev| prev == value)
            .and_then(|prev| prev.checked_mul(2));
        match (pending, merged) {
            (_, Some(merged)) => {
                out[len] = merged;
                len += 1;
                score_gain = score_gain.saturating_add(merged);
                reached_target |= merged == TARGET_TILE;
                pending = None;
            }
            (Some(prev), None) => {
                out[len] = prev;
                len += 1;
                pending = Some(value);
            }
            (None, None) => pending = Some(value),
        }
    }

    if let Some(prev) = pending {
        out[len] = prev;
    }

    LineMerge {
        line: out,
        score_gain,
        reached_target,
    }
}
