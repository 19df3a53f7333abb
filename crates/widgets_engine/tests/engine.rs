use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use widgets_engine::{
    EngineEvent, EngineHandle, EngineSettings, EventSink, Lookup, LookupError, Slot,
};

struct ChannelSink {
    tx: Mutex<mpsc::Sender<EngineEvent>>,
}

impl EventSink for ChannelSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.lock().unwrap().send(event);
    }
}

struct EchoLookup;

#[async_trait::async_trait]
impl Lookup for EchoLookup {
    async fn suggest(&self, query: &str) -> Result<Vec<String>, LookupError> {
        Ok(vec![query.to_uppercase()])
    }
}

fn start_engine() -> (EngineHandle, mpsc::Receiver<EngineEvent>) {
    let (tx, rx) = mpsc::channel();
    let sink = Arc::new(ChannelSink { tx: Mutex::new(tx) });
    let settings = EngineSettings {
        lookup_latency: Duration::from_millis(10),
    };
    let engine = EngineHandle::new(settings, Arc::new(EchoLookup), sink).expect("engine starts");
    (engine, rx)
}

#[test]
fn handle_runs_commands_on_its_own_runtime() {
    widget_logging::initialize_for_tests();
    let (engine, rx) = start_engine();

    engine.debounce(1, Duration::from_millis(20));
    let event = rx.recv_timeout(Duration::from_secs(5)).expect("debounce event");
    assert_eq!(event, EngineEvent::DebounceElapsed { ticket: 1 });

    engine.lookup(2, "rust");
    let event = rx.recv_timeout(Duration::from_secs(5)).expect("lookup event");
    assert_eq!(
        event,
        EngineEvent::LookupCompleted {
            ticket: 2,
            result: Ok(vec!["RUST".to_string()]),
        }
    );

    engine.start_counting(3, 2, Duration::from_millis(10));
    let indexes: Vec<_> = (0..2)
        .map(|_| rx.recv_timeout(Duration::from_secs(5)).expect("count event"))
        .collect();
    assert_eq!(
        indexes,
        vec![
            EngineEvent::CountEmitted { ticket: 3, index: 1 },
            EngineEvent::CountEmitted { ticket: 3, index: 2 },
        ]
    );
}

#[test]
fn cancelled_work_never_reaches_the_sink() {
    widget_logging::initialize_for_tests();
    let (engine, rx) = start_engine();

    engine.start_counting(1, 10, Duration::from_millis(200));
    engine.cancel(Slot::CountingRun);
    engine.debounce(2, Duration::from_millis(200));
    engine.cancel_all();

    assert!(rx.recv_timeout(Duration::from_millis(600)).is_err());
}
