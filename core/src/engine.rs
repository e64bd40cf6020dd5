use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Valid transitions:
/// - Memorizing -> Recalling (countdown ran out, or manual toggle)
/// - Recalling -> Memorizing (manual toggle)
/// - Recalling -> GameOver (last problem answered)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Faces are up and the countdown runs
    Memorizing,
    /// Letters are up and the player picks cards
    Recalling,
    /// Every problem was answered
    GameOver,
}

impl RoundPhase {
    pub const fn is_memorizing(self) -> bool {
        matches!(self, Self::Memorizing)
    }

    pub const fn is_recalling(self) -> bool {
        matches!(self, Self::Recalling)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

impl Default for RoundPhase {
    fn default() -> Self {
        Self::Memorizing
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    NoChange,
    Counted,
    /// Countdown reached zero and the letters were turned up
    Expired,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Counted => true,
            Self::Expired => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    /// Card turned face up, selection still incomplete
    Picked,
    Incorrect,
    Correct,
    /// Correct answer to the last problem
    Finished,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            NoChange => false,
            Picked => true,
            Incorrect => true,
            Correct => true,
            Finished => true,
        }
    }

    /// Whether the selection was evaluated and now waits for its deferred reveal.
    pub const fn completes_selection(self) -> bool {
        matches!(self, Self::Incorrect | Self::Correct | Self::Finished)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Restored,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Restored => true,
        }
    }
}

/// Rules of a single round: one board, one problem set, the player's progress through it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundEngine {
    board: Board,
    problems: ProblemSet,
    current: usize,
    selection: SmallVec<[CardIndex; SELECTION_LEN]>,
    phase: RoundPhase,
    seconds_remaining: u32,
    countdown_secs: u32,
}

impl RoundEngine {
    pub fn new(mut board: Board, problems: ProblemSet, countdown_secs: u32) -> Self {
        let countdown_secs = countdown_secs.max(1);
        board.set_all_revealed(false);
        Self {
            board,
            problems,
            current: 0,
            selection: SmallVec::new(),
            phase: Default::default(),
            seconds_remaining: countdown_secs,
            countdown_secs,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// Board-wide flip state: letters are up.
    pub fn is_revealed(&self) -> bool {
        self.phase.is_recalling()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn problems(&self) -> &ProblemSet {
        &self.problems
    }

    pub fn current_problem_index(&self) -> usize {
        self.current
    }

    pub fn current_problem(&self) -> Option<&Problem> {
        if self.phase.is_finished() {
            None
        } else {
            self.problems.get(self.current)
        }
    }

    /// Result the player has to build, `None` once the game is over.
    pub fn target(&self) -> Option<i32> {
        self.current_problem().map(Problem::result)
    }

    pub fn selection(&self) -> &[CardIndex] {
        &self.selection
    }

    /// A full selection stays locked until its deferred reveal runs or the board is flipped back to faces.
    pub fn is_selection_locked(&self) -> bool {
        self.selection.len() >= SELECTION_LEN
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn countdown_secs(&self) -> u32 {
        self.countdown_secs
    }

    pub fn tick(&mut self) -> Result<TickOutcome> {
        self.check_not_finished()?;

        if !self.phase.is_memorizing() {
            return Ok(TickOutcome::NoChange);
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.show_letters();
            Ok(TickOutcome::Expired)
        } else {
            Ok(TickOutcome::Counted)
        }
    }

    /// Flips the whole board to the other side, returning the phase it ends up in.
    pub fn toggle_reveal(&mut self) -> Result<RoundPhase> {
        match self.phase {
            RoundPhase::Memorizing => self.show_letters(),
            RoundPhase::Recalling => self.show_faces(),
            RoundPhase::GameOver => return Err(GameError::AlreadyEnded),
        }
        Ok(self.phase)
    }

    pub fn select(&mut self, index: CardIndex) -> Result<SelectOutcome> {
        let index = self.board.validate_index(index)?;
        self.check_not_finished()?;

        if !self.phase.is_recalling()
            || self.is_selection_locked()
            || self.selection.contains(&index)
        {
            return Ok(SelectOutcome::NoChange);
        }

        self.board.set_revealed(index, false);
        self.selection.push(index);

        if self.selection.len() < SELECTION_LEN {
            Ok(SelectOutcome::Picked)
        } else {
            Ok(self.evaluate_selection())
        }
    }

    /// Turns the evaluated selection back to its letters and empties it.
    pub fn apply_deferred_reveal(&mut self) -> RevealOutcome {
        if !self.is_selection_locked() {
            return RevealOutcome::NoChange;
        }

        for &index in &self.selection {
            self.board.set_revealed(index, true);
        }
        self.selection.clear();
        RevealOutcome::Restored
    }

    fn evaluate_selection(&mut self) -> SelectOutcome {
        let Some(target) = self.target() else {
            self.phase = RoundPhase::GameOver;
            return SelectOutcome::Finished;
        };

        let faces: SmallVec<[Face; SELECTION_LEN]> = self
            .selection
            .iter()
            .map(|&index| self.board[index].face())
            .collect();

        if !is_correct_selection(&faces, target) {
            return SelectOutcome::Incorrect;
        }

        self.current += 1;
        if self.current >= self.problems.len() {
            self.phase = RoundPhase::GameOver;
            SelectOutcome::Finished
        } else {
            SelectOutcome::Correct
        }
    }

    fn show_letters(&mut self) {
        self.board.set_all_revealed(true);
        self.phase = RoundPhase::Recalling;
    }

    /// Drops any selection in progress along with the letters.
    fn show_faces(&mut self) {
        self.board.set_all_revealed(false);
        self.selection.clear();
        self.phase = RoundPhase::Memorizing;
        self.seconds_remaining = self.countdown_secs;
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.phase.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
