use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tokio::sync::mpsc;
use widget_logging::{widget_info, widget_warn};

use crate::{EngineCommand, EngineError, EngineSettings, EventSink, Lookup, Scheduler, Slot, Ticket};

/// Owns a background thread running the [`Scheduler`] on its own runtime.
///
/// Dropping the handle closes the command channel; the thread then shuts the
/// runtime down, which cancels everything still pending.
pub struct EngineHandle {
    cmd_tx: mpsc::UnboundedSender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        settings: EngineSettings,
        lookup: Arc<dyn Lookup>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("widgets-engine-worker")
            .enable_all()
            .build()?;
        let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel();

        thread::Builder::new()
            .name("widgets-engine".to_string())
            .spawn(move || {
                runtime.block_on(async move {
                    let mut scheduler = Scheduler::new(settings, lookup, sink);
                    while let Some(command) = cmd_rx.recv().await {
                        scheduler.execute(command);
                    }
                });
                widget_info!("engine command channel closed; shutting down");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            widget_warn!("engine is no longer running; command dropped");
        }
    }

    pub fn debounce(&self, ticket: Ticket, delay: Duration) {
        self.send(EngineCommand::Debounce { ticket, delay });
    }

    pub fn lookup(&self, ticket: Ticket, query: impl Into<String>) {
        self.send(EngineCommand::Lookup {
            ticket,
            query: query.into(),
        });
    }

    pub fn start_counting(&self, ticket: Ticket, emissions: u32, period: Duration) {
        self.send(EngineCommand::CountingRun {
            ticket,
            emissions,
            period,
        });
    }

    pub fn cancel(&self, slot: Slot) {
        self.send(EngineCommand::Cancel(slot));
    }

    pub fn cancel_all(&self) {
        self.send(EngineCommand::CancelAll);
    }
}
