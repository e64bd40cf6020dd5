use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub face: String,
    pub letter_side: bool,
}

/// Everything a presentation layer needs to draw the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub cards: Vec<CardView>,
    pub phase: RoundPhase,
    /// Only shown while memorizing.
    pub seconds_remaining: Option<u32>,
    pub target: Option<i32>,
    /// 1-based, stays at the last problem once the game is over.
    pub problem_number: usize,
    pub problem_count: usize,
    pub game_over: bool,
}

impl RoundView {
    pub fn from_engine(engine: &RoundEngine) -> Self {
        let cards = engine
            .board()
            .iter()
            .map(|card| CardView {
                face: card.display_face(),
                letter_side: card.is_revealed(),
            })
            .collect();
        let problem_count = engine.problems().len();

        Self {
            cards,
            phase: engine.phase(),
            seconds_remaining: engine
                .phase()
                .is_memorizing()
                .then(|| engine.seconds_remaining()),
            target: engine.target(),
            problem_number: (engine.current_problem_index() + 1).min(problem_count),
            problem_count,
            game_over: engine.is_finished(),
        }
    }
}

impl From<&RoundEngine> for RoundView {
    fn from(engine: &RoundEngine) -> Self {
        Self::from_engine(engine)
    }
}
