use std::io::{self, Write};

use widgets_core::{AppViewModel, ChatView, QueueView, SearchView, WidgetView};

pub(crate) fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![format!("── {} ──", view.route)];
    match &view.widget {
        WidgetView::Search(search) => render_search(search, &mut lines),
        WidgetView::Queue(queue) => render_queue(queue, &mut lines),
        WidgetView::Chat(chat) => render_chat(chat, &mut lines),
    }
    lines
}

pub(crate) fn write_view(out: &mut impl Write, view: &AppViewModel) -> io::Result<()> {
    for line in render(view) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn render_search(view: &SearchView, lines: &mut Vec<String>) {
    let status = if view.loading { " (searching...)" } else { "" };
    lines.push(format!("Search: {}{}", view.query, status));
    lines.extend(view.results.iter().map(|word| format!("  {word}")));
}

fn render_queue(view: &QueueView, lines: &mut Vec<String>) {
    if let Some(counter) = view.counter {
        lines.push(format!("Step {}: Count {}", counter.step, counter.count));
    }
    if view.queued_runs > 0 {
        lines.push(format!("({} queued)", view.queued_runs));
    }
}

fn render_chat(view: &ChatView, lines: &mut Vec<String>) {
    lines.push(format!("Current Channel: {}", view.channel));
    lines.extend(
        view.messages
            .iter()
            .map(|message| format!("  {}: {}", message.id, message.text)),
    );
}
