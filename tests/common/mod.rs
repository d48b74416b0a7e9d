// Shared test utilities for flimmer-challenge tests
#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use flimmer_challenge::settings::TimingSettings;
use flimmer_challenge::ui::{ui_draw, AppState};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

/// Real delays, but no entrance animation so cards render at full size.
pub fn test_timing() -> TimingSettings {
    TimingSettings {
        entrance_ms: 0,
        ..TimingSettings::default()
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Renders one frame of `app` and returns the screen as text, one line per row.
pub fn render(app: &mut AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui_draw(f, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
