use crossterm::event::KeyCode;

use crate::models::{FlowEvent, Privacy};
use crate::ui::AppState;
use crate::util::Scheduler;

/// Hook screen: accept or decline the challenge, scroll the video page.
pub fn handle_hook_key(
    code: KeyCode,
    app: &mut AppState,
    scheduler: &mut Scheduler,
) -> Option<bool> {
    match code {
        KeyCode::Enter | KeyCode::Char('t') | KeyCode::Char('T') => {
            app.dispatch(FlowEvent::AcceptChallenge, scheduler);
            Some(true)
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('n') | KeyCode::Char('N') => {
            app.dispatch(FlowEvent::DeclineChallenge, scheduler);
            Some(true)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.hook.scroll_down();
            Some(true)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.hook.scroll_up();
            Some(true)
        }
        _ => None,
    }
}

/// Camera screen: shutter and back.
pub fn handle_camera_key(
    code: KeyCode,
    app: &mut AppState,
    scheduler: &mut Scheduler,
) -> Option<bool> {
    match code {
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.press_shutter(scheduler);
            Some(true)
        }
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => {
            app.dispatch(FlowEvent::GoBack, scheduler);
            Some(true)
        }
        _ => None,
    }
}

/// Confirmation screen: privacy choice, share and back.
pub fn handle_confirmation_key(
    code: KeyCode,
    app: &mut AppState,
    scheduler: &mut Scheduler,
) -> Option<bool> {
    match code {
        KeyCode::Left => {
            app.confirmation.select_privacy(Privacy::Everyone);
            Some(true)
        }
        KeyCode::Right => {
            app.confirmation.select_privacy(Privacy::Private);
            Some(true)
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char(' ') => {
            app.confirmation.toggle_privacy();
            Some(true)
        }
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => {
            app.dispatch(FlowEvent::SharePhoto, scheduler);
            Some(true)
        }
        KeyCode::Esc | KeyCode::Backspace => {
            app.dispatch(FlowEvent::GoBack, scheduler);
            Some(true)
        }
        _ => None,
    }
}
