use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval_at, sleep, Instant};
use tokio_util::sync::CancellationToken;
use widget_logging::{widget_debug, widget_trace};

use crate::{EngineCommand, EngineEvent, Lookup, Slot, Ticket};

#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Artificial delay before each lookup is dispatched.
    pub lookup_latency: Duration,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            lookup_latency: Duration::from_millis(1000),
        }
    }
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

/// Runs engine commands as tasks on the current tokio runtime.
///
/// Every slot owns a cancellation token. Once a token is cancelled the task
/// behind it emits nothing more, even if its timer was already due.
pub struct Scheduler {
    settings: EngineSettings,
    lookup: Arc<dyn Lookup>,
    sink: Arc<dyn EventSink>,
    slots: HashMap<Slot, CancellationToken>,
}

impl Scheduler {
    pub fn new(settings: EngineSettings, lookup: Arc<dyn Lookup>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            settings,
            lookup,
            sink,
            slots: HashMap::new(),
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn execute(&mut self, command: EngineCommand) {
        match command {
            EngineCommand::Debounce { ticket, delay } => {
                let token = self.occupy(Slot::Debounce);
                tokio::spawn(run_debounce(token, self.sink.clone(), ticket, delay));
            }
            EngineCommand::Lookup { ticket, query } => {
                let token = self.occupy(Slot::Lookup);
                tokio::spawn(run_lookup(
                    token,
                    self.sink.clone(),
                    self.lookup.clone(),
                    self.settings.lookup_latency,
                    ticket,
                    query,
                ));
            }
            EngineCommand::CountingRun {
                ticket,
                emissions,
                period,
            } => {
                let token = self.occupy(Slot::CountingRun);
                tokio::spawn(run_counting(
                    token,
                    self.sink.clone(),
                    ticket,
                    emissions,
                    period,
                ));
            }
            EngineCommand::Cancel(slot) => self.release(slot),
            EngineCommand::CancelAll => {
                for slot in Slot::ALL {
                    self.release(slot);
                }
            }
        }
    }

    fn occupy(&mut self, slot: Slot) -> CancellationToken {
        let token = CancellationToken::new();
        if let Some(previous) = self.slots.insert(slot, token.clone()) {
            previous.cancel();
        }
        token
    }

    fn release(&mut self, slot: Slot) {
        if let Some(token) = self.slots.remove(&slot) {
            token.cancel();
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        for token in self.slots.values() {
            token.cancel();
        }
    }
}

async fn run_debounce(
    token: CancellationToken,
    sink: Arc<dyn EventSink>,
    ticket: Ticket,
    delay: Duration,
) {
    tokio::select! {
        biased;
        () = token.cancelled() => widget_trace!("debounce {} replaced", ticket),
        () = sleep(delay) => sink.emit(EngineEvent::DebounceElapsed { ticket }),
    }
}

async fn run_lookup(
    token: CancellationToken,
    sink: Arc<dyn EventSink>,
    lookup: Arc<dyn Lookup>,
    latency: Duration,
    ticket: Ticket,
    query: String,
) {
    let work = async {
        sleep(latency).await;
        lookup.suggest(&query).await
    };
    tokio::select! {
        biased;
        () = token.cancelled() => {
            widget_debug!("lookup {} for {:?} abandoned", ticket, query);
        }
        result = work => sink.emit(EngineEvent::LookupCompleted { ticket, result }),
    }
}

async fn run_counting(
    token: CancellationToken,
    sink: Arc<dyn EventSink>,
    ticket: Ticket,
    emissions: u32,
    period: Duration,
) {
    let mut interval = interval_at(Instant::now() + period, period);
    for index in 1..=emissions {
        tokio::select! {
            biased;
            () = token.cancelled() => {
                widget_trace!("counting run {} stopped before {}", ticket, index);
                return;
            }
            _ = interval.tick() => sink.emit(EngineEvent::CountEmitted { ticket, index }),
        }
    }
}
