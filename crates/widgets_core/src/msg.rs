use crate::{LookupOutcome, Ticket};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User followed a route path.
    Navigate(String),
    /// Search input box changed (full current value, possibly empty).
    SearchInputChanged(String),
    /// A scheduled debounce window ran out.
    DebounceElapsed { ticket: Ticket },
    /// The outbound suggestion lookup finished.
    LookupCompleted {
        ticket: Ticket,
        outcome: LookupOutcome,
    },
    /// User clicked Tick on the queue widget.
    TickClicked,
    /// User clicked Stop on the queue widget.
    StopClicked,
    /// A counting run produced its `index`-th emission.
    CountEmitted { ticket: Ticket, index: u32 },
    /// User picked a chat channel.
    ChannelSelected(String),
    /// Chat composing text changed.
    ChatInputChanged(String),
    /// User clicked Send on the chat widget.
    SendClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
