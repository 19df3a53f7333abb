use std::time::Duration;

use crate::Ticket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fire `Msg::DebounceElapsed` after `delay`, replacing any pending debounce.
    ScheduleDebounce { ticket: Ticket, delay: Duration },
    /// Look up suggestions for `query`, superseding any lookup in flight.
    StartLookup { ticket: Ticket, query: String },
    /// Abandon the lookup in flight, if any.
    CancelLookup,
    /// Emit `Msg::CountEmitted` with indexes `1..=emissions`, one per `period`.
    StartCountingRun {
        ticket: Ticket,
        emissions: u32,
        period: Duration,
    },
    /// Abandon the counting run in progress, if any.
    CancelCountingRun,
    /// The mounted widget was torn down; drop everything pending.
    CancelAll,
}
