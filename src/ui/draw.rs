use ratatui::layout::{Constraint, Layout};

use crate::models::{FlowState, ModalState};
use crate::ui::*;

/// Main UI draw function: exactly one screen, the overlay above it when
/// visible, and the quit popup above everything.
pub fn ui_draw(f: &mut ratatui::Frame, app: &mut AppState) {
    let full_area = f.area();
    let [content_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(full_area);

    match app.flow.current_state() {
        FlowState::Hook => hook_screen::render_hook_screen(f, content_area, &mut app.hook),
        FlowState::Camera => camera_screen::render_camera_screen(f, content_area, &app.camera),
        FlowState::Confirmation => {
            confirmation_screen::render_confirmation_screen(f, content_area, &app.confirmation)
        }
    }

    status::render_status_bar(f, status_area, app);

    match app.flow.modal_state() {
        ModalState::Hidden => {}
        ModalState::Uploading => {
            helpers::render_backdrop(f, full_area);
            if let Some(upload) = &app.upload {
                upload_overlay::render_upload_overlay(f, content_area, upload);
            }
        }
        ModalState::Success => {
            helpers::render_backdrop(f, full_area);
            if let Some(success) = &app.success {
                success_overlay::render_success_overlay(f, content_area, success);
            }
        }
    }

    if let UiMode::ConfirmExit(selected_button) = app.mode {
        exit_confirm::render_exit_confirm(f, selected_button);
    }
}
