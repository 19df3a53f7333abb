//! Widgets core: pure state machines for the search, queue and chat widgets.
//!
//! Nothing in here touches a clock, a socket or a thread. Timers and lookups
//! are requested as [`Effect`]s and their outcomes come back as [`Msg`]s.
mod chat;
mod effect;
mod msg;
mod queue;
mod route;
mod search;
mod state;
mod ticket;
mod update;
mod view_model;

pub use chat::{Channel, Message, MessageId};
pub use effect::Effect;
pub use msg::Msg;
pub use queue::{Counter, COUNT_PERIOD, RUN_LENGTH};
pub use route::Route;
pub use search::{LookupOutcome, DEBOUNCE_WINDOW};
pub use state::AppState;
pub use ticket::{Ticket, TicketIssuer};
pub use update::update;
pub use view_model::{AppViewModel, ChatView, QueueView, SearchView, WidgetView};
