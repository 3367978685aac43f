//! Runtime: event loop and input routing for the TUI.
//!
//! - Own the terminal lifecycle (raw mode, alternate screen, mouse capture).
//! - A blocking input task forwards crossterm events over a Tokio channel.
//! - Keys and mouse events go to `MainView`; the effects they return are
//!   applied in order on the loop task, so every menu mutation runs to
//!   completion before the next event is read.
//! - Render after every handled event; an idle tick catches missed resizes.
use std::collections::VecDeque;
use std::io::Stdout;
use std::time::Duration;

use anyhow::Result;
use carte_types::{Effect, Msg};
use carte_util::AppConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, prelude::CrosstermBackend};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;
use crate::ui::theme;

/// Reads terminal input on a blocking thread and hands each event to the
/// event loop.
///
/// `poll()` and `read()` stay on the same OS thread; some terminals lose
/// events otherwise.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);

    tokio::task::spawn_blocking(move || {
        let poll_interval = Duration::from_millis(50);
        loop {
            match event::poll(poll_interval) {
                Ok(false) => {
                    if sender.is_closed() {
                        break;
                    }
                }
                Ok(true) => match event::read() {
                    Ok(Event::Mouse(mouse)) if mouse.kind == MouseEventKind::Moved => {}
                    Ok(event) => {
                        if let Err(e) = sender.blocking_send(event) {
                            debug!("input receiver closed: {}", e);
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read event: {}", e);
                        break;
                    }
                },
                Err(e) => {
                    warn!("Failed to poll events: {}", e);
                    break;
                }
            }
        }
    });
    receiver
}

/// Raw mode, alternate screen and mouse capture.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Undoes [`setup_terminal`].
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

pub(crate) fn render<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, main_view: &mut MainView) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    terminal.draw(|frame| {
        let area = frame.area();
        main_view.render(frame, area, app);
    })?;
    Ok(())
}

/// Route a raw crossterm event to the view tree.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        // Only presses; Windows also reports releases.
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        _ => Vec::new(),
    }
}

/// Apply effects in order, including any follow-up effects they produce.
pub(crate) fn process_effects(app: &mut App, main_view: &mut MainView, effects: Vec<Effect>) {
    let mut queue: VecDeque<Effect> = effects.into();
    while let Some(effect) = queue.pop_front() {
        debug!(?effect, "applying effect");
        let follow_up = match effect {
            Effect::SubmitDraft => app.submit_draft(),
            Effect::DeleteEntry(id) => {
                app.delete_entry(id);
                Vec::new()
            }
            Effect::SwitchTo(mode) => {
                main_view.set_view_mode(app, mode);
                Vec::new()
            }
            Effect::ShowModal(modal) => {
                main_view.set_open_modal_kind(app, Some(modal));
                Vec::new()
            }
            Effect::CloseModal => {
                main_view.set_open_modal_kind(app, None);
                Vec::new()
            }
            Effect::SendMsg(msg) => main_view.handle_message(app, msg),
            Effect::Quit => {
                app.should_quit = true;
                Vec::new()
            }
        };
        queue.extend(follow_up);
    }
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the input
/// task, runs the event loop, and restores the terminal on exit.
pub async fn run_app(config: AppConfig) -> Result<()> {
    let loaded_theme = theme::load(config.theme.as_deref());
    let mut app = App::new(config, loaded_theme);
    let mut main_view = MainView::new(&app);

    let mut input_receiver = spawn_input_thread();
    let mut terminal = setup_terminal()?;
    info!(theme = app.ctx.theme_id, ansi = app.ctx.ansi_palette, "menu editor started");

    let mut ticker = time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // Some terminals never report resizes; the ticker compares sizes instead.
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    let outcome = loop {
        if let Err(error) = render(&mut terminal, &mut app, &mut main_view) {
            break Err(error);
        }

        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break Ok(());
                };
                if let Event::Key(key_event) = event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break Ok(());
                }
                let effects = handle_input_event(&mut app, &mut main_view, event);
                process_effects(&mut app, &mut main_view, effects);
            }

            _ = ticker.tick() => {
                let effects = main_view.handle_message(&mut app, Msg::Tick);
                process_effects(&mut app, &mut main_view, effects);
                if let Ok((w, h)) = crossterm::terminal::size()
                    && last_size != Some((w, h))
                {
                    last_size = Some((w, h));
                    let effects = main_view.handle_message(&mut app, Msg::Resize(w, h));
                    process_effects(&mut app, &mut main_view, effects);
                }
            }

            _ = signal::ctrl_c() => { break Ok(()); }
        }

        if app.should_quit {
            break Ok(());
        }
    };

    info!(entries = app.menu.entry_count(), "menu editor stopped");
    drop(input_receiver);
    cleanup_terminal(&mut terminal)?;
    outcome
}
