use std::io::{stdout, Stdout};

use chrono::Local;
use crossterm::event::{Event, EventStream, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use fern::Dispatch;
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::time::{interval, Duration};

use flimmer_challenge::settings::{init_settings, Settings};
use flimmer_challenge::ui::key_handler::handle_key_event;
use flimmer_challenge::ui::{ui_draw, AppState};
use flimmer_challenge::util::channel as timer_channel;

/// Initialize logger function
fn setup_logger(level: &str, file: &str) -> Result<(), fern::InitError> {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info, // Default to Info for invalid values
    };
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                message
            ))
        })
        .level(log_level)
        // The terminal belongs to the TUI, so logs go to a file only
        .chain(fern::log_file(file)?)
        .apply()?;
    Ok(())
}

/// Event loop: keyboard input, fired deferred tasks and the redraw tick,
/// all handled on this one task.
async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    settings: &Settings,
) -> Result<(), anyhow::Error> {
    let (mut scheduler, mut timer_rx) = timer_channel();
    let mut app = AppState::new(settings.timing);
    let mut events = EventStream::new();
    let mut refresh_interval = interval(Duration::from_millis(settings.tick_rate_ms.max(1)));

    loop {
        terminal.draw(|f| ui_draw(f, &mut app))?;

        tokio::select! {
            Some(fired) = timer_rx.recv() => {
                app.handle_timer(fired, &mut scheduler);
            }
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        if let Some(false) = handle_key_event(key_event, &mut app, &mut scheduler) {
                            break;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        log::error!("Failed to read terminal event: {}", e);
                    }
                    None => break,
                }
            }
            _ = refresh_interval.tick() => {
                // Redraw even without input so animations advance
            }
        }
    }

    log::info!("Leaving on {}", app.flow);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let settings = init_settings()?;
    setup_logger(&settings.log_level, &settings.log_file)?;
    log::info!("flimmer-challenge started");

    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, settings).await;

    // Restore terminal to its original state, also when the loop failed.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
