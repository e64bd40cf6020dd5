use core::ops::RangeInclusive;

/// Position of a card on the board, counted row by row from the top-left corner.
pub type CardIndex = u8;

/// Two-dimensional grid position `(row, column)`.
pub type Coord2 = (u8, u8);

/// Rows and columns of the board.
pub const GRID_SIZE: Coord2 = (4, 4);

/// Number of cards on a board.
pub const CARD_COUNT: CardIndex = GRID_SIZE.0 * GRID_SIZE.1;

/// Cards picked per answer: operand, operator, operand.
pub const SELECTION_LEN: usize = 3;

/// Operands of generated problems, and the numbers printed on cards.
pub const OPERAND_RANGE: RangeInclusive<i32> = 1..=12;

pub const DEFAULT_PROBLEM_COUNT: u8 = 5;
pub const DEFAULT_COUNTDOWN_SECS: u32 = 10;
pub const DEFAULT_TICK_MS: u32 = 1000;
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 1000;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn coords_of(index: CardIndex) -> Coord2 {
    (index / GRID_SIZE.1, index % GRID_SIZE.1)
}

pub const fn index_of((row, col): Coord2) -> CardIndex {
    row * GRID_SIZE.1 + col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_coords_agree_row_major() {
        assert_eq!(coords_of(0), (0, 0));
        assert_eq!(coords_of(5), (1, 1));
        assert_eq!(coords_of(CARD_COUNT - 1), (3, 3));

        for index in 0..CARD_COUNT {
            assert_eq!(index_of(coords_of(index)), index);
        }
    }
}
