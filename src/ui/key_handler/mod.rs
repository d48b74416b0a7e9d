mod exit_handlers;
mod overlay_handlers;
mod screen_handlers;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::{FlowState, ModalState};
use crate::ui::{AppState, UiMode};
use crate::util::Scheduler;

// Re-export public functions
pub use exit_handlers::handle_exit_confirm_key;
pub use overlay_handlers::handle_success_key;
pub use screen_handlers::{handle_camera_key, handle_confirmation_key, handle_hook_key};

/// Main key event handler - dispatches to the handler of whatever is on top.
///
/// Returns Some(true) to continue, Some(false) to quit, None if the key
/// means nothing here.
pub fn handle_key_event(
    key_event: KeyEvent,
    app: &mut AppState,
    scheduler: &mut Scheduler,
) -> Option<bool> {
    let code = key_event.code;

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Some(false);
    }

    // The quit popup sits above the overlay and takes every key
    if let UiMode::ConfirmExit(selected_button) = app.mode {
        return Some(handle_exit_confirm_key(code, selected_button, app));
    }

    if matches!(code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        app.mode = UiMode::ConfirmExit(true);
        return Some(true);
    }

    match app.flow.modal_state() {
        // Nothing to press while the upload runs
        ModalState::Uploading => None,
        ModalState::Success => handle_success_key(code, app, scheduler),
        ModalState::Hidden => match app.flow.current_state() {
            FlowState::Hook => handle_hook_key(code, app, scheduler),
            FlowState::Camera => handle_camera_key(code, app, scheduler),
            FlowState::Confirmation => handle_confirmation_key(code, app, scheduler),
        },
    }
}
