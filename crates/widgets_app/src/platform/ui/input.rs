use widgets_core::{Msg, Route};

/// What one line of terminal input asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    Dispatch(Vec<Msg>),
    Help,
    Quit,
    Unknown(String),
}

/// Lines starting with `:` are shell commands; anything else is widget input.
pub(crate) fn parse_line(route: Route, line: &str) -> ShellCommand {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(rest) = line.strip_prefix(':') {
        let (command, arg) = match rest.split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (rest, ""),
        };
        return match (command, route) {
            ("quit" | "q", _) => ShellCommand::Quit,
            ("help" | "h", _) => ShellCommand::Help,
            ("go", _) => ShellCommand::Dispatch(vec![Msg::Navigate(arg.to_string())]),
            ("channel", Route::Chat) if !arg.is_empty() => {
                ShellCommand::Dispatch(vec![Msg::ChannelSelected(arg.to_string())])
            }
            ("send", Route::Chat) => ShellCommand::Dispatch(vec![Msg::SendClicked]),
            _ => ShellCommand::Unknown(line.to_string()),
        };
    }

    match route {
        // Each line is the whole content of the search box.
        Route::Search => ShellCommand::Dispatch(vec![Msg::SearchInputChanged(line.to_string())]),
        Route::Queue => match line.trim() {
            "tick" => ShellCommand::Dispatch(vec![Msg::TickClicked]),
            "stop" => ShellCommand::Dispatch(vec![Msg::StopClicked]),
            _ => ShellCommand::Unknown(line.to_string()),
        },
        Route::Chat => ShellCommand::Dispatch(vec![
            Msg::ChatInputChanged(line.to_string()),
            Msg::SendClicked,
        ]),
    }
}

pub(crate) fn help(route: Route) -> &'static str {
    match route {
        Route::Search => {
            "search: type a query per line (empty line clears) | :go queue|chat | :quit"
        }
        Route::Queue => "queue: tick | stop | :go search|chat | :quit",
        Route::Chat => {
            "chat: type a message per line | :channel <name> | :send | :go search|queue | :quit"
        }
    }
}
