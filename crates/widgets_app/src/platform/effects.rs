use std::sync::{mpsc, Arc};

use widget_logging::{widget_debug, widget_warn};
use widgets_core::{Effect, LookupOutcome, Msg};
use widgets_engine::{
    EngineError, EngineEvent, EngineHandle, EngineSettings, EventSink, LookupSettings,
    ReqwestLookup, Slot,
};

use super::app::ShellEvent;

pub(crate) struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub(crate) fn new(event_tx: mpsc::Sender<ShellEvent>) -> Result<Self, EngineError> {
        let lookup = ReqwestLookup::new(LookupSettings::default())?;
        let sink = Arc::new(ShellSink { tx: event_tx });
        let engine = EngineHandle::new(EngineSettings::default(), Arc::new(lookup), sink)?;
        Ok(Self { engine })
    }

    pub(crate) fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleDebounce { ticket, delay } => self.engine.debounce(ticket, delay),
                Effect::StartLookup { ticket, query } => {
                    widget_debug!("StartLookup ticket={} query={:?}", ticket, query);
                    self.engine.lookup(ticket, query);
                }
                Effect::CancelLookup => self.engine.cancel(Slot::Lookup),
                Effect::StartCountingRun {
                    ticket,
                    emissions,
                    period,
                } => self.engine.start_counting(ticket, emissions, period),
                Effect::CancelCountingRun => self.engine.cancel(Slot::CountingRun),
                Effect::CancelAll => self.engine.cancel_all(),
            }
        }
    }
}

struct ShellSink {
    tx: mpsc::Sender<ShellEvent>,
}

impl EventSink for ShellSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(ShellEvent::Core(to_msg(event)));
    }
}

fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::DebounceElapsed { ticket } => Msg::DebounceElapsed { ticket },
        EngineEvent::LookupCompleted { ticket, result } => Msg::LookupCompleted {
            ticket,
            outcome: match result {
                Ok(words) => LookupOutcome::Found(words),
                Err(err) => {
                    widget_warn!("Lookup {} failed: {}", ticket, err);
                    LookupOutcome::Failed
                }
            },
        },
        EngineEvent::CountEmitted { ticket, index } => Msg::CountEmitted { ticket, index },
    }
}
