use alloc::collections::BTreeMap;
use alloc::rc::{Rc, Weak};
use core::cell::RefCell;
use serde::{Deserialize, Serialize};

/// Identifies one arming of a timer, so events from a timer that was since replaced can be told apart.
pub type Ticket = u32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    CountdownTick(Ticket),
    DeferredReveal(Ticket),
}

impl TimerEvent {
    pub const fn ticket(self) -> Ticket {
        match self {
            Self::CountdownTick(ticket) => ticket,
            Self::DeferredReveal(ticket) => ticket,
        }
    }
}

/// Source of delayed events for the round controller.
///
/// Dropping a returned handle cancels its timer.
pub trait Scheduler {
    type Handle;

    /// Delivers `event` every `period_ms`, first after one full period.
    fn every(&mut self, period_ms: u32, event: TimerEvent) -> Self::Handle;

    /// Delivers `event` once after `delay_ms`.
    fn after(&mut self, delay_ms: u32, event: TimerEvent) -> Self::Handle;
}

#[derive(Debug)]
struct PendingTimer {
    due_ms: u64,
    seq: u64,
    period_ms: Option<u32>,
    event: TimerEvent,
}

#[derive(Debug, Default)]
struct Timeline {
    now_ms: u64,
    next_id: u64,
    next_seq: u64,
    timers: BTreeMap<u64, PendingTimer>,
}

impl Timeline {
    fn arm(&mut self, delay_ms: u32, period_ms: Option<u32>, event: TimerEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let seq = self.take_seq();
        self.timers.insert(
            id,
            PendingTimer {
                due_ms: self.now_ms + u64::from(delay_ms),
                seq,
                period_ms,
                event,
            },
        );
        id
    }

    fn take_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn pop_due(&mut self, until_ms: u64) -> Option<TimerEvent> {
        let id = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.due_ms <= until_ms)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.seq))
            .map(|(&id, _)| id)?;

        let seq = self.take_seq();
        let timer = self.timers.get_mut(&id)?;
        let (event, due_ms) = (timer.event, timer.due_ms);
        match timer.period_ms {
            // zero period would fire forever at the same instant
            Some(period_ms) if period_ms > 0 => {
                timer.due_ms += u64::from(period_ms);
                timer.seq = seq;
            }
            _ => {
                self.timers.remove(&id);
            }
        }
        self.now_ms = self.now_ms.max(due_ms);
        Some(event)
    }
}

/// Scheduler driven by hand instead of a wall clock, for tests and headless hosts.
///
/// Clones share the same timeline. Timers due at the same instant fire in the order they were armed.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    timeline: Rc<RefCell<Timeline>>,
}

#[derive(Debug)]
pub struct ManualHandle {
    id: u64,
    timeline: Weak<RefCell<Timeline>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(timeline) = self.timeline.upgrade() {
            timeline.borrow_mut().timers.remove(&self.id);
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.timeline.borrow().now_ms
    }

    /// Number of timers still armed.
    pub fn pending(&self) -> usize {
        self.timeline.borrow().timers.len()
    }

    /// Moves the clock forward by `ms`, handing every event that falls due to `deliver` in firing order.
    ///
    /// `deliver` may arm or cancel timers; newly armed timers that fall inside the window fire too.
    pub fn advance(&self, ms: u64, mut deliver: impl FnMut(TimerEvent)) {
        let until_ms = self.now_ms() + ms;
        loop {
            // the borrow has to end before `deliver` runs
            let next = self.timeline.borrow_mut().pop_due(until_ms);
            match next {
                Some(event) => deliver(event),
                None => break,
            }
        }
        self.timeline.borrow_mut().now_ms = until_ms;
    }

    fn arm(&self, delay_ms: u32, period_ms: Option<u32>, event: TimerEvent) -> ManualHandle {
        let id = self.timeline.borrow_mut().arm(delay_ms, period_ms, event);
        log::trace!("Armed timer {} for {:?} in {} ms", id, event, delay_ms);
        ManualHandle {
            id,
            timeline: Rc::downgrade(&self.timeline),
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn every(&mut self, period_ms: u32, event: TimerEvent) -> Self::Handle {
        self.arm(period_ms, Some(period_ms), event)
    }

    fn after(&mut self, delay_ms: u32, event: TimerEvent) -> Self::Handle {
        self.arm(delay_ms, None, event)
    }
}
