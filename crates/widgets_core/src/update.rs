use crate::chat::ChatState;
use crate::queue::QueueState;
use crate::search::SearchState;
use crate::state::Widget;
use crate::{AppState, Effect, Msg, Route, TicketIssuer};

/// Pure update function: applies a message to state and returns any effects.
///
/// Messages addressed to a widget that is not mounted are dropped; that
/// covers late timer and lookup results from a widget already torn down.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let before = state.view();

    let effects = match msg {
        Msg::Navigate(path) => state.navigate(Route::resolve(&path)),
        Msg::SearchInputChanged(text) => {
            with_search(&mut state, |search, tickets| search.input_changed(text, tickets))
        }
        Msg::DebounceElapsed { ticket } => {
            with_search(&mut state, |search, tickets| search.debounce_elapsed(ticket, tickets))
        }
        Msg::LookupCompleted { ticket, outcome } => with_search(&mut state, |search, _| {
            search.lookup_completed(ticket, outcome);
            Vec::new()
        }),
        Msg::TickClicked => with_queue(&mut state, QueueState::tick_clicked),
        Msg::StopClicked => with_queue(&mut state, |queue, _| queue.stop_clicked()),
        Msg::CountEmitted { ticket, index } => with_queue(&mut state, |queue, tickets| {
            queue.count_emitted(ticket, index, tickets)
        }),
        Msg::ChannelSelected(name) => with_chat(&mut state, |chat| chat.channel_selected(name)),
        Msg::ChatInputChanged(text) => with_chat(&mut state, |chat| chat.input_changed(text)),
        Msg::SendClicked => with_chat(&mut state, ChatState::send_clicked),
        Msg::NoOp => Vec::new(),
    };

    if state.view() != before {
        state.mark_dirty();
    }
    (state, effects)
}

fn with_search(
    state: &mut AppState,
    apply: impl FnOnce(&mut SearchState, &mut TicketIssuer) -> Vec<Effect>,
) -> Vec<Effect> {
    match &mut state.widget {
        Widget::Search(search) => apply(search, &mut state.tickets),
        _ => Vec::new(),
    }
}

fn with_queue(
    state: &mut AppState,
    apply: impl FnOnce(&mut QueueState, &mut TicketIssuer) -> Vec<Effect>,
) -> Vec<Effect> {
    match &mut state.widget {
        Widget::Queue(queue) => apply(queue, &mut state.tickets),
        _ => Vec::new(),
    }
}

/// The chat widget never asks for effects.
fn with_chat(state: &mut AppState, apply: impl FnOnce(&mut ChatState)) -> Vec<Effect> {
    if let Widget::Chat(chat) = &mut state.widget {
        apply(chat);
    }
    Vec::new()
}
