/// Identifies one scheduled timer, lookup or counting run.
pub type Ticket = u64;

/// Hands out strictly increasing tickets for the lifetime of an [`crate::AppState`].
///
/// Tickets are never reused, not even across widget mounts, so a result
/// that outlives the widget which asked for it can never be mistaken for
/// a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TicketIssuer {
    last: Ticket,
}

impl TicketIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.last += 1;
        self.last
    }

    pub fn last_issued(&self) -> Option<Ticket> {
        (self.last > 0).then_some(self.last)
    }
}
