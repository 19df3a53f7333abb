use std::collections::VecDeque;
use std::time::Duration;

use crate::{Effect, QueueView, Ticket, TicketIssuer};

/// Emissions per counting run.
pub const RUN_LENGTH: u32 = 10;
/// Spacing between emissions of a counting run; the first one lands one period in.
pub const COUNT_PERIOD: Duration = Duration::from_millis(300);

/// Index carried by an emission that has no value.
const NO_VALUE: u32 = 0;

/// What the queue widget displays: the run's step and its latest index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub step: u32,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveRun {
    ticket: Ticket,
    step: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct QueueState {
    step: u32,
    /// Steps whose runs wait for the active one to finish, oldest first.
    waiting: VecDeque<u32>,
    active: Option<ActiveRun>,
    counter: Option<Counter>,
}

impl QueueState {
    pub(crate) fn tick_clicked(&mut self, tickets: &mut TicketIssuer) -> Vec<Effect> {
        self.step += 1;
        self.waiting.push_back(self.step);
        self.start_next_run(tickets).into_iter().collect()
    }

    pub(crate) fn count_emitted(
        &mut self,
        ticket: Ticket,
        index: u32,
        tickets: &mut TicketIssuer,
    ) -> Vec<Effect> {
        let Some(active) = self.active else {
            return Vec::new();
        };
        if active.ticket != ticket || index == NO_VALUE {
            return Vec::new();
        }

        self.counter = Some(Counter {
            step: active.step,
            count: index,
        });

        if index < RUN_LENGTH {
            return Vec::new();
        }
        self.active = None;
        self.start_next_run(tickets).into_iter().collect()
    }

    /// Back to a fresh generation: no step, no runs, nothing displayed.
    pub(crate) fn stop_clicked(&mut self) -> Vec<Effect> {
        *self = QueueState::default();
        vec![Effect::CancelCountingRun]
    }

    fn start_next_run(&mut self, tickets: &mut TicketIssuer) -> Option<Effect> {
        if self.active.is_some() {
            return None;
        }
        let step = self.waiting.pop_front()?;
        let ticket = tickets.issue();
        self.active = Some(ActiveRun { ticket, step });
        Some(Effect::StartCountingRun {
            ticket,
            emissions: RUN_LENGTH,
            period: COUNT_PERIOD,
        })
    }

    pub(crate) fn view(&self) -> QueueView {
        QueueView {
            counter: self.counter,
            queued_runs: self.waiting.len(),
        }
    }
}
