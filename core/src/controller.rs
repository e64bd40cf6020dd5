use rand::prelude::*;

use crate::*;

#[derive(Debug)]
struct Armed<H> {
    ticket: Ticket,
    _handle: H,
}

/// Single owner of a game: applies player commands and timer events to the current round, and keeps the countdown
/// and deferred reveal timers in step with it.
///
/// Every command returns whether anything visible changed. Commands that don't apply in the current state are
/// ignored.
pub struct RoundController<S: Scheduler> {
    config: GameConfig,
    rng: SmallRng,
    scheduler: S,
    engine: RoundEngine,
    round: u32,
    next_ticket: Ticket,
    countdown: Option<Armed<S::Handle>>,
    deferred_reveal: Option<Armed<S::Handle>>,
}

impl<S: Scheduler> RoundController<S> {
    pub fn new(config: GameConfig, seed: u64, scheduler: S) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let engine = deal(&config, &mut rng);
        let mut controller = Self {
            config,
            rng,
            scheduler,
            engine,
            round: 0,
            next_ticket: 0,
            countdown: None,
            deferred_reveal: None,
        };
        controller.arm_countdown();
        log::info!("Round {} started", controller.round);
        controller
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    /// Number of resets so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn view(&self) -> RoundView {
        RoundView::from_engine(&self.engine)
    }

    pub fn is_countdown_armed(&self) -> bool {
        self.countdown.is_some()
    }

    pub fn is_reveal_pending(&self) -> bool {
        self.deferred_reveal.is_some()
    }

    /// Deals a fresh board and problem set, dropping every timer of the previous round.
    pub fn on_reset_requested(&mut self) {
        self.countdown = None;
        self.deferred_reveal = None;
        self.round = self.round.wrapping_add(1);
        self.engine = deal(&self.config, &mut self.rng);
        self.arm_countdown();
        log::info!("Round {} started", self.round);
    }

    pub fn on_toggle_reveal_requested(&mut self) -> bool {
        match self.engine.toggle_reveal() {
            Ok(RoundPhase::Memorizing) => {
                self.deferred_reveal = None;
                self.arm_countdown();
                true
            }
            Ok(_) => {
                self.countdown = None;
                true
            }
            Err(err) => {
                log::debug!("Toggle ignored: {}", err);
                false
            }
        }
    }

    pub fn on_card_clicked(&mut self, index: CardIndex) -> bool {
        match self.engine.select(index) {
            Ok(outcome) => {
                log::debug!("Card {} clicked: {:?}", index, outcome);
                if outcome.completes_selection() {
                    self.arm_deferred_reveal();
                }
                if outcome == SelectOutcome::Finished {
                    self.countdown = None;
                    log::info!("Round {} solved", self.round);
                }
                outcome.has_update()
            }
            Err(err) => {
                log::debug!("Card {} click ignored: {}", index, err);
                false
            }
        }
    }

    pub fn on_timer(&mut self, event: TimerEvent) -> bool {
        match event {
            TimerEvent::CountdownTick(ticket) if is_current(&self.countdown, ticket) => {
                match self.engine.tick() {
                    Ok(TickOutcome::Expired) => {
                        self.countdown = None;
                        true
                    }
                    Ok(outcome) => outcome.has_update(),
                    Err(err) => {
                        log::debug!("Countdown stopped: {}", err);
                        self.countdown = None;
                        false
                    }
                }
            }
            TimerEvent::DeferredReveal(ticket) if is_current(&self.deferred_reveal, ticket) => {
                self.deferred_reveal = None;
                self.engine.apply_deferred_reveal().has_update()
            }
            _ => {
                log::trace!("Dropped stale timer event {:?}", event);
                false
            }
        }
    }

    fn arm_countdown(&mut self) {
        let ticket = self.take_ticket();
        // replacing the handle stops the previous interval
        self.countdown = Some(Armed {
            ticket,
            _handle: self
                .scheduler
                .every(self.config.tick_ms, TimerEvent::CountdownTick(ticket)),
        });
    }

    fn arm_deferred_reveal(&mut self) {
        let ticket = self.take_ticket();
        self.deferred_reveal = Some(Armed {
            ticket,
            _handle: self
                .scheduler
                .after(self.config.reveal_delay_ms, TimerEvent::DeferredReveal(ticket)),
        });
    }

    fn take_ticket(&mut self) -> Ticket {
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        ticket
    }
}

fn is_current<H>(armed: &Option<Armed<H>>, ticket: Ticket) -> bool {
    armed.as_ref().is_some_and(|armed| armed.ticket == ticket)
}

fn deal(config: &GameConfig, rng: &mut SmallRng) -> RoundEngine {
    let board = RandomBoardGenerator::new(rng.random()).generate();
    let problems = RandomProblemGenerator::new(rng.random()).generate(config);
    RoundEngine::new(board, problems, config.countdown_secs)
}
