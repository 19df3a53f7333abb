//! Widgets engine: timers, cancellation and the outbound suggestion lookup.
mod engine;
mod lookup;
mod scheduler;
mod types;

pub use engine::EngineHandle;
pub use lookup::{parse_suggestions, Lookup, LookupSettings, ReqwestLookup};
pub use scheduler::{EngineSettings, EventSink, Scheduler};
pub use types::{
    EngineCommand, EngineError, EngineEvent, FailureKind, LookupError, Slot, Ticket,
};
