use std::fmt;

/// The widget mounted by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Search,
    Queue,
    Chat,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Search, Route::Queue, Route::Chat];

    /// Maps a path to a route. The empty path and unknown paths redirect to search.
    pub fn resolve(path: &str) -> Route {
        match path.trim().trim_matches('/') {
            "queue" => Route::Queue,
            "chat" => Route::Chat,
            _ => Route::Search,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Search => "search",
            Route::Queue => "queue",
            Route::Chat => "chat",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}
