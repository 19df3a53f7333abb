use crate::{Channel, Counter, Message, Route};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub route: Route,
    pub widget: WidgetView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetView {
    Search(SearchView),
    Queue(QueueView),
    Chat(ChatView),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchView {
    pub query: String,
    pub results: Vec<String>,
    /// A lookup for the last accepted query has not answered yet.
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueueView {
    /// `None` until the first emission after a reset.
    pub counter: Option<Counter>,
    pub queued_runs: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatView {
    pub channel: Channel,
    pub text: String,
    pub messages: Vec<Message>,
}
