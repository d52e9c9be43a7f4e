//! Random tile placement

use rand::Rng;

use super::board::Board;
use crate::consts::SPAWN_FOUR_PROBABILITY;
use crate::error::NoEmptyCellError;

/// Value of a freshly spawned tile: 2 (90%) or 4 (10%)
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.random_bool(SPAWN_FOUR_PROBABILITY) {
        4
    } else {
        2
    }
}

/// Return a copy of `board` with one new tile in a uniformly chosen empty cell.
///
/// A full board is left untouched and yields [`NoEmptyCellError`].
pub fn spawn_random_tile<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<Board, NoEmptyCellError> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return Err(NoEmptyCellError);
    }

    let (row, col) = empty[rng.random_range(0..empty.len())];
    let mut next = *board;
    next.set(row, col, random_tile_value(rng));
    Ok(next)
}
