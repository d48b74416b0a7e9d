use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use super::helpers::{create_centered_popup, render_button, render_help_text};
use super::{PRIMARY_COLOR, SURFACE_COLOR, TEXT_COLOR};

/// Renders the quit confirmation popup above everything else.
/// `selected_button`: true = Yes, false = No.
pub fn render_exit_confirm(f: &mut ratatui::Frame, selected_button: bool) {
    let popup = create_centered_popup(f.area(), 50, 11);
    // Clear the popup area so nothing from the screen below bleeds through
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Quit ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(SURFACE_COLOR).fg(PRIMARY_COLOR));
    let inner_area = block.inner(popup);
    f.render_widget(block, popup);

    let [_, message, _, buttons, help, esc_help] = Layout::vertical([
        Constraint::Length(1), // spacer
        Constraint::Length(1), // message
        Constraint::Length(1), // spacer
        Constraint::Length(3), // buttons
        Constraint::Length(1), // help text
        Constraint::Length(1), // help text for esc key
    ])
    .areas(inner_area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Leave the handstand challenge?",
            Style::default().fg(TEXT_COLOR),
        )))
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: true }),
        message,
    );

    let [_, yes, _, no, _] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(15),
        Constraint::Length(1),
        Constraint::Length(15),
        Constraint::Min(0),
    ])
    .areas(buttons);
    render_button(f, yes, "✓ YES", Color::Green, Color::Black, selected_button);
    render_button(f, no, "✗ NO", Color::Red, Color::Black, !selected_button);

    render_help_text(f, help, "Use ", "Left/Right", " to select, Enter to confirm");
    render_help_text(f, esc_help, "Press ", "Esc", " to cancel");
}
