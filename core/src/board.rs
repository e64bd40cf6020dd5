use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Number or operator printed on the front of a card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    Number(u8),
    Operator(Operator),
}

impl Face {
    /// Every face a board can hold; a board uses each of them exactly once.
    pub const POOL: [Face; CARD_COUNT as usize] = [
        Face::Number(1),
        Face::Number(2),
        Face::Number(3),
        Face::Number(4),
        Face::Number(5),
        Face::Number(6),
        Face::Number(7),
        Face::Number(8),
        Face::Number(9),
        Face::Number(10),
        Face::Number(11),
        Face::Number(12),
        Face::Operator(Operator::Add),
        Face::Operator(Operator::Sub),
        Face::Operator(Operator::Mul),
        Face::Operator(Operator::Div),
    ];

    pub const fn as_number(self) -> Option<i32> {
        match self {
            Self::Number(number) => Some(number as i32),
            Self::Operator(_) => None,
        }
    }

    pub const fn as_operator(self) -> Option<Operator> {
        match self {
            Self::Number(_) => None,
            Self::Operator(op) => Some(op),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

impl FromStr for Face {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(op) = s.parse::<Operator>() {
            return Ok(Self::Operator(op));
        }
        match s.parse::<i32>() {
            Ok(number) if OPERAND_RANGE.contains(&number) => Ok(Self::Number(number as u8)),
            _ => Err(GameError::InvalidFace),
        }
    }
}

/// A face paired with the letter on its back.
///
/// `revealed` means the letter side is up, which is how cards sit while the player recalls them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    face: Face,
    letter: char,
    revealed: bool,
}

impl Card {
    pub const fn new(face: Face, letter: char) -> Self {
        Self {
            face,
            letter,
            revealed: false,
        }
    }

    pub const fn face(&self) -> Face {
        self.face
    }

    pub const fn letter(&self) -> char {
        self.letter
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Text currently facing the player.
    pub fn display_face(&self) -> String {
        if self.revealed {
            self.letter.to_string()
        } else {
            self.face.to_string()
        }
    }
}

/// The 4x4 grid of cards. Positions never change for the lifetime of a board; only the side shown does.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cards: Array2<Card>,
}

impl Board {
    /// Builds a board from cards listed row by row, checking size and uniqueness of faces and letters.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        if cards.len() != usize::from(CARD_COUNT) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut faces = BTreeSet::new();
        let mut letters = BTreeSet::new();
        for card in &cards {
            if !faces.insert(card.face) {
                return Err(GameError::DuplicateFace);
            }
            if !letters.insert(card.letter) {
                return Err(GameError::DuplicateLetter);
            }
        }

        let (rows, cols) = GRID_SIZE;
        let cards = Array2::from_shape_vec((usize::from(rows), usize::from(cols)), cards)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self { cards })
    }

    pub(crate) fn from_grid(cards: Array2<Card>) -> Self {
        Self { cards }
    }

    pub fn validate_index(&self, index: CardIndex) -> Result<CardIndex> {
        if index < CARD_COUNT {
            Ok(index)
        } else {
            Err(GameError::InvalidCardIndex)
        }
    }

    pub fn size(&self) -> Coord2 {
        GRID_SIZE
    }

    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.validate_index(index)
            .ok()
            .map(|index| &self.cards[coords_of(index).to_nd_index()])
    }

    /// Cards in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn position_of(&self, face: Face) -> Option<CardIndex> {
        self.cards
            .iter()
            .position(|card| card.face == face)
            .and_then(|pos| pos.try_into().ok())
    }

    pub fn all_revealed(&self) -> bool {
        self.cards.iter().all(Card::is_revealed)
    }

    pub(crate) fn set_revealed(&mut self, index: CardIndex, revealed: bool) {
        if let Some(card) = self.cards.get_mut(coords_of(index).to_nd_index()) {
            card.revealed = revealed;
        }
    }

    pub(crate) fn set_all_revealed(&mut self, revealed: bool) {
        for card in self.cards.iter_mut() {
            card.revealed = revealed;
        }
    }
}

impl Index<CardIndex> for Board {
    type Output = Card;

    fn index(&self, index: CardIndex) -> &Self::Output {
        &self.cards[coords_of(index).to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_cards() -> Vec<Card> {
        Face::POOL
            .into_iter()
            .zip('A'..='P')
            .map(|(face, letter)| Card::new(face, letter))
            .collect()
    }

    #[test]
    fn face_strings_round_trip() {
        for face in Face::POOL {
            assert_eq!(face.to_string().parse::<Face>(), Ok(face));
        }
        assert_eq!("0".parse::<Face>(), Err(GameError::InvalidFace));
        assert_eq!("13".parse::<Face>(), Err(GameError::InvalidFace));
        assert_eq!("A".parse::<Face>(), Err(GameError::InvalidFace));
    }

    #[test]
    fn from_cards_keeps_row_major_order() {
        let board = Board::from_cards(pool_cards()).unwrap();

        assert_eq!(board[0].face(), Face::Number(1));
        assert_eq!(board[5].letter(), 'F');
        assert_eq!(board[15].face(), Face::Operator(Operator::Div));
        assert_eq!(board.position_of(Face::Operator(Operator::Add)), Some(12));
        assert!(board.card(CARD_COUNT).is_none());
    }

    #[test]
    fn from_cards_rejects_wrong_size() {
        let mut cards = pool_cards();
        cards.pop();

        assert_eq!(Board::from_cards(cards), Err(GameError::InvalidBoardShape));
    }

    #[test]
    fn from_cards_rejects_duplicates() {
        let mut cards = pool_cards();
        cards[1] = Card::new(Face::Number(1), 'B');
        assert_eq!(Board::from_cards(cards), Err(GameError::DuplicateFace));

        let mut cards = pool_cards();
        cards[1] = Card::new(Face::Number(2), 'A');
        assert_eq!(Board::from_cards(cards), Err(GameError::DuplicateLetter));
    }

    #[test]
    fn display_face_follows_revealed_side() {
        let mut board = Board::from_cards(pool_cards()).unwrap();

        assert_eq!(board[14].display_face(), "*");
        board.set_revealed(14, true);
        assert_eq!(board[14].display_face(), "O");

        board.set_all_revealed(true);
        assert!(board.all_revealed());
    }
}
