use crossterm::event::KeyCode;

use crate::ui::{AppState, UiMode};

/// Keys while the quit popup is open. Returns false to quit.
pub fn handle_exit_confirm_key(code: KeyCode, selected_button: bool, app: &mut AppState) -> bool {
    match code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            app.mode = UiMode::ConfirmExit(!selected_button);
            true
        }
        KeyCode::Enter => {
            if selected_button {
                log::info!("Leaving after {} decline(s)", app.flow.declines());
                false
            } else {
                app.mode = UiMode::Normal;
                true
            }
        }
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => false,
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            app.mode = UiMode::Normal;
            true
        }
        _ => true,
    }
}
