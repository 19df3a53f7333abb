use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use log::LevelFilter;
use widget_logging::{widget_info, widget_warn, LogDestination};
use widgets_core::{update, AppState, Msg, Route};

use super::effects::EffectRunner;
use super::ui::{self, input::ShellCommand};

/// Everything the main loop reacts to, in arrival order.
pub(crate) enum ShellEvent {
    Line(String),
    Core(Msg),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    widget_logging::initialize(LogDestination::default(), LevelFilter::Info);

    let route = std::env::args()
        .nth(1)
        .map(|path| Route::resolve(&path))
        .unwrap_or_default();
    widget_info!("starting on {}", route);

    let (event_tx, event_rx) = mpsc::channel::<ShellEvent>();
    let effects = EffectRunner::new(event_tx.clone()).context("starting engine")?;
    spawn_stdin_reader(event_tx);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut state = AppState::with_route(route);
    writeln!(out, "{}", ui::input::help(state.route()))?;
    ui::render::write_view(&mut out, &state.view())?;

    while let Ok(event) = event_rx.recv() {
        let msgs = match event {
            ShellEvent::Line(line) => match ui::input::parse_line(state.route(), &line) {
                ShellCommand::Dispatch(msgs) => msgs,
                ShellCommand::Help => {
                    writeln!(out, "{}", ui::input::help(state.route()))?;
                    continue;
                }
                ShellCommand::Unknown(text) => {
                    widget_warn!("unrecognized input on {}: {:?}", state.route(), text);
                    writeln!(out, "? {text}  (:help for commands)")?;
                    continue;
                }
                ShellCommand::Quit => break,
            },
            ShellEvent::Core(msg) => vec![msg],
            ShellEvent::InputClosed => break,
        };

        for msg in msgs {
            state = dispatch(state, msg, &effects, &mut out)?;
        }
    }

    widget_info!("shell exiting");
    Ok(())
}

fn dispatch(
    state: AppState,
    msg: Msg,
    effects: &EffectRunner,
    out: &mut impl Write,
) -> io::Result<AppState> {
    let (mut state, pending) = update(state, msg);
    effects.run(pending);
    if state.consume_dirty() {
        ui::render::write_view(out, &state.view())?;
    }
    Ok(state)
}

fn spawn_stdin_reader(tx: mpsc::Sender<ShellEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(ShellEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    widget_warn!("stdin read failed: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(ShellEvent::InputClosed);
    });
}
