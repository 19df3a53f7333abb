use std::time::Duration;

use crate::{Effect, SearchView, Ticket, TicketIssuer};

/// Quiet period the input must hold before a query is accepted.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Vec<String>),
    /// Transport or decoding failure. Shown as an empty result set.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct SearchState {
    input: String,
    /// Debounce window currently running for `input`.
    pending: Option<Ticket>,
    /// Last query that made it through the debounce window.
    accepted: Option<String>,
    in_flight: Option<Ticket>,
    results: Vec<String>,
}

impl SearchState {
    pub(crate) fn input_changed(&mut self, text: String, tickets: &mut TicketIssuer) -> Vec<Effect> {
        let ticket = tickets.issue();
        self.input = text;
        self.pending = Some(ticket);
        vec![Effect::ScheduleDebounce {
            ticket,
            delay: DEBOUNCE_WINDOW,
        }]
    }

    pub(crate) fn debounce_elapsed(
        &mut self,
        ticket: Ticket,
        tickets: &mut TicketIssuer,
    ) -> Vec<Effect> {
        if self.pending != Some(ticket) {
            return Vec::new();
        }
        self.pending = None;

        // Same as the previous accepted query: keep results and any lookup in flight.
        if self.accepted.as_deref() == Some(self.input.as_str()) {
            return Vec::new();
        }

        let query = self.input.clone();
        self.accepted = Some(query.clone());

        if query.is_empty() {
            self.in_flight = None;
            self.results.clear();
            return vec![Effect::CancelLookup];
        }

        let ticket = tickets.issue();
        self.in_flight = Some(ticket);
        vec![Effect::StartLookup { ticket, query }]
    }

    pub(crate) fn lookup_completed(&mut self, ticket: Ticket, outcome: LookupOutcome) {
        if self.in_flight != Some(ticket) {
            return;
        }
        self.in_flight = None;
        self.results = match outcome {
            LookupOutcome::Found(words) => words,
            LookupOutcome::Failed => Vec::new(),
        };
    }

    pub(crate) fn view(&self) -> SearchView {
        SearchView {
            query: self.input.clone(),
            results: self.results.clone(),
            loading: self.in_flight.is_some(),
        }
    }
}
