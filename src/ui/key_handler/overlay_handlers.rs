use crossterm::event::KeyCode;

use crate::models::FlowEvent;
use crate::ui::AppState;
use crate::util::Scheduler;

/// Success card: pick between going back to the videos and trying again.
pub fn handle_success_key(
    code: KeyCode,
    app: &mut AppState,
    scheduler: &mut Scheduler,
) -> Option<bool> {
    let success = app.success.as_mut()?;
    match code {
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
            success.selected = success.selected.toggle();
            Some(true)
        }
        KeyCode::Enter => {
            let event = success.selected.event();
            app.dispatch(event, scheduler);
            Some(true)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.dispatch(FlowEvent::ChooseRetry, scheduler);
            Some(true)
        }
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Esc => {
            app.dispatch(FlowEvent::ChooseExit, scheduler);
            Some(true)
        }
        _ => None,
    }
}
