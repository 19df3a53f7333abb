use std::fmt;
use std::time::Duration;

pub type Ticket = u64;

/// Each slot holds at most one pending job; starting another one cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Debounce,
    Lookup,
    CountingRun,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Debounce, Slot::Lookup, Slot::CountingRun];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Debounce {
        ticket: Ticket,
        delay: Duration,
    },
    Lookup {
        ticket: Ticket,
        query: String,
    },
    CountingRun {
        ticket: Ticket,
        emissions: u32,
        period: Duration,
    },
    Cancel(Slot),
    CancelAll,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    DebounceElapsed {
        ticket: Ticket,
    },
    LookupCompleted {
        ticket: Ticket,
        result: Result<Vec<String>, LookupError>,
    },
    CountEmitted {
        ticket: Ticket,
        index: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct LookupError {
    pub kind: FailureKind,
    pub message: String,
}

impl LookupError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedResponse,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine: {0}")]
    Startup(#[from] std::io::Error),
    #[error("failed to build lookup client: {0}")]
    Lookup(#[from] LookupError),
}
