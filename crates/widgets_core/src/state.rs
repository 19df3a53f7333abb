use crate::chat::ChatState;
use crate::queue::QueueState;
use crate::search::SearchState;
use crate::view_model::{AppViewModel, WidgetView};
use crate::{Effect, Route, TicketIssuer};

/// The single widget currently mounted by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Widget {
    Search(SearchState),
    Queue(QueueState),
    Chat(ChatState),
}

impl Widget {
    fn mount(route: Route) -> Self {
        match route {
            Route::Search => Widget::Search(SearchState::default()),
            Route::Queue => Widget::Queue(QueueState::default()),
            Route::Chat => Widget::Chat(ChatState::default()),
        }
    }

    fn route(&self) -> Route {
        match self {
            Widget::Search(_) => Route::Search,
            Widget::Queue(_) => Route::Queue,
            Widget::Chat(_) => Route::Chat,
        }
    }

    fn view(&self) -> WidgetView {
        match self {
            Widget::Search(search) => WidgetView::Search(search.view()),
            Widget::Queue(queue) => WidgetView::Queue(queue.view()),
            Widget::Chat(chat) => WidgetView::Chat(chat.view()),
        }
    }
}

impl Default for Widget {
    fn default() -> Self {
        Widget::mount(Route::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) widget: Widget,
    pub(crate) tickets: TicketIssuer,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `route` mounted instead of the default search widget.
    pub fn with_route(route: Route) -> Self {
        Self {
            widget: Widget::mount(route),
            ..Self::default()
        }
    }

    pub fn route(&self) -> Route {
        self.widget.route()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            route: self.route(),
            widget: self.widget.view(),
        }
    }

    /// Returns whether the view changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Tears down the mounted widget and mounts a fresh one for `route`.
    pub(crate) fn navigate(&mut self, route: Route) -> Vec<Effect> {
        if route == self.route() {
            return Vec::new();
        }
        self.widget = Widget::mount(route);
        vec![Effect::CancelAll]
    }
}
