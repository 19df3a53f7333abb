use std::sync::Once;

use widgets_core::{update, AppState, Effect, LookupOutcome, Msg, Route, WidgetView};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(widget_logging::initialize_for_tests);
}

fn navigate(state: AppState, path: &str) -> (AppState, Vec<Effect>) {
    update(state, Msg::Navigate(path.to_string()))
}

#[test]
fn starts_with_search_mounted() {
    init_logging();
    let state = AppState::new();
    assert_eq!(state.route(), Route::Search);
    assert!(matches!(state.view().widget, WidgetView::Search(_)));
}

#[test]
fn paths_resolve_with_redirects() {
    assert_eq!(Route::resolve("search"), Route::Search);
    assert_eq!(Route::resolve("/queue"), Route::Queue);
    assert_eq!(Route::resolve(" /chat/ "), Route::Chat);
    assert_eq!(Route::resolve(""), Route::Search);
    assert_eq!(Route::resolve("/"), Route::Search);
    assert_eq!(Route::resolve("nowhere"), Route::Search);
    assert_eq!(Route::resolve("Chat"), Route::Search);
    for route in Route::ALL {
        assert_eq!(Route::resolve(route.path()), route);
    }
}

#[test]
fn navigating_tears_down_the_mounted_widget() {
    init_logging();
    let (state, effects) = navigate(AppState::new(), "chat");
    assert_eq!(effects, vec![Effect::CancelAll]);
    let (state, _) = update(state, Msg::ChatInputChanged("hello".to_string()));
    let (state, _) = update(state, Msg::SendClicked);

    let (state, effects) = navigate(state, "/queue");
    assert_eq!(effects, vec![Effect::CancelAll]);
    assert_eq!(state.route(), Route::Queue);

    let (state, _) = navigate(state, "chat");
    match state.view().widget {
        WidgetView::Chat(view) => assert!(view.messages.is_empty()),
        other => panic!("chat widget not mounted: {other:?}"),
    }
}

#[test]
fn navigating_to_the_mounted_route_is_a_noop() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SearchInputChanged("kept".to_string()));
    let (mut state, _) = navigate(state, "queue");
    state.consume_dirty();
    let before = state.clone();

    let (mut state, effects) = navigate(state, "/queue/");
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state, before);
}

#[test]
fn unknown_path_redirects_to_search() {
    init_logging();
    let (state, _) = navigate(AppState::with_route(Route::Chat), "does-not-exist");
    assert_eq!(state.route(), Route::Search);
}

#[test]
fn results_from_a_torn_down_widget_are_ignored() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SearchInputChanged("a".to_string()));
    let debounce = match effects.as_slice() {
        [Effect::ScheduleDebounce { ticket, .. }] => *ticket,
        other => panic!("unexpected effects {other:?}"),
    };
    let (state, effects) = update(state, Msg::DebounceElapsed { ticket: debounce });
    let lookup = match effects.as_slice() {
        [Effect::StartLookup { ticket, .. }] => *ticket,
        other => panic!("unexpected effects {other:?}"),
    };

    let (state, _) = navigate(state, "queue");
    let (state, _) = navigate(state, "search");
    let (state, _) = update(state, Msg::DebounceElapsed { ticket: debounce });
    let (state, effects) = update(
        state,
        Msg::LookupCompleted {
            ticket: lookup,
            outcome: LookupOutcome::Found(vec!["late".to_string()]),
        },
    );

    assert!(effects.is_empty());
    match state.view().widget {
        WidgetView::Search(view) => {
            assert!(view.results.is_empty());
            assert!(view.query.is_empty());
        }
        other => panic!("search widget not mounted: {other:?}"),
    }

    // Tickets keep climbing across mounts.
    let (_, effects) = update(state, Msg::SearchInputChanged("b".to_string()));
    match effects.as_slice() {
        [Effect::ScheduleDebounce { ticket, .. }] => assert!(*ticket > lookup),
        other => panic!("unexpected effects {other:?}"),
    }
}
