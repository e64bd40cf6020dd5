#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use controller::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use problem::*;
pub use schedule::*;
pub use types::*;
pub use validator::*;
pub use view::*;

mod board;
mod controller;
mod engine;
mod error;
mod generator;
mod problem;
mod schedule;
mod types;
mod validator;
mod view;

/// Tunables for a game. Board size and operand range are fixed by the card pool and are not part of this.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Problems to solve before the round is over.
    pub problem_count: u8,
    /// Length of the memorizing countdown.
    pub countdown_secs: u32,
    /// Period of the countdown tick.
    pub tick_ms: u32,
    /// Delay before a completed selection flips back to letters.
    pub reveal_delay_ms: u32,
}

impl GameConfig {
    pub const MAX_COUNTDOWN_SECS: u32 = 600;
    pub const MAX_DELAY_MS: u32 = 60_000;

    pub const fn new_unchecked(
        problem_count: u8,
        countdown_secs: u32,
        tick_ms: u32,
        reveal_delay_ms: u32,
    ) -> Self {
        Self {
            problem_count,
            countdown_secs,
            tick_ms,
            reveal_delay_ms,
        }
    }

    pub fn new(problem_count: u8, countdown_secs: u32, tick_ms: u32, reveal_delay_ms: u32) -> Self {
        Self::new_unchecked(
            problem_count.max(1),
            countdown_secs.clamp(1, Self::MAX_COUNTDOWN_SECS),
            tick_ms.clamp(1, Self::MAX_DELAY_MS),
            reveal_delay_ms.min(Self::MAX_DELAY_MS),
        )
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            DEFAULT_PROBLEM_COUNT,
            DEFAULT_COUNTDOWN_SECS,
            DEFAULT_TICK_MS,
            DEFAULT_REVEAL_DELAY_MS,
        )
    }
}
