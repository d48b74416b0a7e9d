use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::constants::{
    HINT_CAMERA, HINT_CAMERA_CAPTURING, HINT_CONFIRMATION, HINT_HOOK, HINT_QUIT, HINT_SUCCESS,
    HINT_UPLOADING,
};
use super::{AppState, BORDER_COLOR, PRIMARY_COLOR, SURFACE_COLOR, TEXT_SECONDARY_COLOR};
use crate::models::{FlowState, ModalState};

/// Key hints for whatever currently receives input.
pub fn hint_for(app: &AppState) -> &'static str {
    match app.flow.modal_state() {
        ModalState::Uploading => HINT_UPLOADING,
        ModalState::Success => HINT_SUCCESS,
        ModalState::Hidden => match app.flow.current_state() {
            FlowState::Hook => HINT_HOOK,
            FlowState::Camera if app.camera.is_capturing() => HINT_CAMERA_CAPTURING,
            FlowState::Camera => HINT_CAMERA,
            FlowState::Confirmation => HINT_CONFIRMATION,
        },
    }
}

pub fn render_status_bar(f: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let spans = vec![
        Span::styled(
            format!(" {} ", app.flow.current_state()),
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{}  ·  {}", hint_for(app), HINT_QUIT),
            Style::default().fg(TEXT_SECONDARY_COLOR),
        ),
    ];

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(BORDER_COLOR))
            .style(Style::default().bg(SURFACE_COLOR)),
    );
    f.render_widget(bar, area);
}
