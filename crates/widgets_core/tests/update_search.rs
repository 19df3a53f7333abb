use std::sync::Once;

use pretty_assertions::assert_eq;
use widgets_core::{
    update, AppState, Effect, LookupOutcome, Msg, SearchView, Ticket, WidgetView, DEBOUNCE_WINDOW,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(widget_logging::initialize_for_tests);
}

fn search_view(state: &AppState) -> SearchView {
    match state.view().widget {
        WidgetView::Search(view) => view,
        other => panic!("search widget not mounted: {other:?}"),
    }
}

fn debounce_ticket(effects: &[Effect]) -> Ticket {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ScheduleDebounce { ticket, .. } => Some(*ticket),
            _ => None,
        })
        .expect("debounce effect")
}

fn lookup_ticket(effects: &[Effect]) -> Option<Ticket> {
    effects.iter().find_map(|effect| match effect {
        Effect::StartLookup { ticket, .. } => Some(*ticket),
        _ => None,
    })
}

fn type_text(state: AppState, text: &str) -> (AppState, Ticket) {
    let (state, effects) = update(state, Msg::SearchInputChanged(text.to_string()));
    (state, debounce_ticket(&effects))
}

/// Types `text` and lets its debounce window run out.
fn settle(state: AppState, text: &str) -> (AppState, Vec<Effect>) {
    let (state, ticket) = type_text(state, text);
    update(state, Msg::DebounceElapsed { ticket })
}

fn found(words: &[&str]) -> LookupOutcome {
    LookupOutcome::Found(words.iter().map(|word| word.to_string()).collect())
}

#[test]
fn keystroke_only_schedules_debounce() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::SearchInputChanged("r".to_string()));

    assert_eq!(
        effects,
        vec![Effect::ScheduleDebounce {
            ticket: 1,
            delay: DEBOUNCE_WINDOW,
        }]
    );
    assert_eq!(search_view(&state).query, "r");
    assert!(state.consume_dirty());
}

#[test]
fn only_the_latest_keystroke_in_a_window_starts_a_lookup() {
    init_logging();
    let (state, first) = type_text(AppState::new(), "r");
    let (state, _) = type_text(state, "ru");
    let (state, last) = type_text(state, "rust");

    let (state, effects) = update(state, Msg::DebounceElapsed { ticket: first });
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::DebounceElapsed { ticket: last });
    let ticket = lookup_ticket(&effects).expect("lookup started");
    assert_eq!(
        effects,
        vec![Effect::StartLookup {
            ticket,
            query: "rust".to_string(),
        }]
    );
    assert!(search_view(&state).loading);
}

#[test]
fn repeating_the_accepted_query_does_not_look_up_again() {
    init_logging();
    let (state, effects) = settle(AppState::new(), "rust");
    let ticket = lookup_ticket(&effects).expect("lookup started");
    let (state, _) = update(
        state,
        Msg::LookupCompleted {
            ticket,
            outcome: found(&["Rust", "Rust (programming language)"]),
        },
    );

    let (state, effects) = settle(state, "rust");

    assert!(effects.is_empty());
    assert_eq!(
        search_view(&state).results,
        vec!["Rust".to_string(), "Rust (programming language)".to_string()]
    );
}

#[test]
fn empty_query_clears_results_without_lookup() {
    init_logging();
    let (state, effects) = settle(AppState::new(), "");
    assert_eq!(effects, vec![Effect::CancelLookup]);
    assert!(search_view(&state).results.is_empty());

    let (state, effects) = settle(state, "rust");
    let ticket = lookup_ticket(&effects).expect("lookup started");
    let (state, _) = update(
        state,
        Msg::LookupCompleted {
            ticket,
            outcome: found(&["Rust"]),
        },
    );
    assert_eq!(search_view(&state).results, vec!["Rust".to_string()]);

    let (state, effects) = settle(state, "");
    assert_eq!(effects, vec![Effect::CancelLookup]);
    assert_eq!(search_view(&state), SearchView::default());
}

#[test]
fn failed_lookup_shows_nothing_and_pipeline_keeps_going() {
    init_logging();
    let (state, effects) = settle(AppState::new(), "x");
    let ticket = lookup_ticket(&effects).expect("lookup started");
    let (state, _) = update(
        state,
        Msg::LookupCompleted {
            ticket,
            outcome: LookupOutcome::Failed,
        },
    );
    let view = search_view(&state);
    assert!(view.results.is_empty());
    assert!(!view.loading);

    let (state, effects) = settle(state, "xy");
    let ticket = lookup_ticket(&effects).expect("pipeline still accepts queries");
    let (state, _) = update(
        state,
        Msg::LookupCompleted {
            ticket,
            outcome: found(&["XY"]),
        },
    );
    assert_eq!(search_view(&state).results, vec!["XY".to_string()]);
}

#[test]
fn superseded_lookup_result_is_discarded() {
    init_logging();
    let (state, effects) = settle(AppState::new(), "a");
    let stale = lookup_ticket(&effects).expect("first lookup");
    let (state, effects) = settle(state, "ab");
    let current = lookup_ticket(&effects).expect("second lookup");
    assert_ne!(stale, current);

    let (mut state, effects) = update(
        state,
        Msg::LookupCompleted {
            ticket: stale,
            outcome: found(&["stale"]),
        },
    );
    assert!(effects.is_empty());
    state.consume_dirty();
    let (mut state, _) = update(
        state,
        Msg::LookupCompleted {
            ticket: stale,
            outcome: found(&["stale again"]),
        },
    );
    assert!(!state.consume_dirty());
    assert!(search_view(&state).results.is_empty());
    assert!(search_view(&state).loading);

    let (state, _) = update(
        state,
        Msg::LookupCompleted {
            ticket: current,
            outcome: found(&["abacus"]),
        },
    );
    assert_eq!(search_view(&state).results, vec!["abacus".to_string()]);
}

#[test]
fn typing_does_not_abandon_lookup_in_flight() {
    init_logging();
    let (state, effects) = settle(AppState::new(), "a");
    let ticket = lookup_ticket(&effects).expect("lookup started");

    let (state, effects) = update(state, Msg::SearchInputChanged("ab".to_string()));
    assert!(matches!(effects.as_slice(), [Effect::ScheduleDebounce { .. }]));

    let (state, _) = update(
        state,
        Msg::LookupCompleted {
            ticket,
            outcome: found(&["apple"]),
        },
    );
    assert_eq!(search_view(&state).results, vec!["apple".to_string()]);
}

#[test]
fn returning_to_the_accepted_query_keeps_its_lookup() {
    init_logging();
    let (state, effects) = settle(AppState::new(), "a");
    let ticket = lookup_ticket(&effects).expect("lookup started");

    let (state, _) = type_text(state, "ab");
    let (state, effects) = settle(state, "a");
    assert!(effects.is_empty());
    assert!(search_view(&state).loading);

    let (state, _) = update(
        state,
        Msg::LookupCompleted {
            ticket,
            outcome: found(&["apple"]),
        },
    );
    assert_eq!(search_view(&state).results, vec!["apple".to_string()]);
}
