use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use super::constants::{
    PHOTO_LABEL, PRIVACY_NOTICE, PRIVACY_QUESTION, SHARE_BUTTON, SHARE_TITLE, VIDEO_EMOJI,
};
use super::helpers::{create_centered_popup, render_button};
use super::{
    PRIMARY_DARK_COLOR, SHARE_BOTTOM_COLOR, SHARE_TOP_COLOR, TEXT_COLOR, YELLOW_BRIGHT_COLOR,
};
use crate::models::Privacy;
use crate::settings::TimingSettings;
use crate::util::{slide_offset, Timeline};

/// Local state of the share screen. The privacy choice never reaches the
/// flow controller; it is only read when the photo is shared.
#[derive(Debug)]
pub struct ConfirmationState {
    pub privacy: Privacy,
    pub entrance: Timeline,
}

impl ConfirmationState {
    pub fn new(timing: &TimingSettings) -> Self {
        Self {
            privacy: Privacy::default(),
            entrance: Timeline::start(timing.entrance()),
        }
    }

    pub fn toggle_privacy(&mut self) {
        self.privacy = self.privacy.toggle();
    }

    pub fn select_privacy(&mut self, privacy: Privacy) {
        self.privacy = privacy;
    }
}

/// Linear blend between two RGB colors, used for the purple gradient.
fn blend(from: Color, to: Color, t: f64) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix =
                |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => to,
    }
}

fn render_gradient(f: &mut ratatui::Frame, area: Rect) {
    let rows = area.height.max(1);
    for row in 0..area.height {
        let t = f64::from(row) / f64::from(rows.saturating_sub(1).max(1));
        let line = Rect {
            y: area.y + row,
            height: 1,
            ..area
        };
        f.buffer_mut().set_style(
            line,
            Style::default()
                .bg(blend(SHARE_TOP_COLOR, SHARE_BOTTOM_COLOR, t))
                .fg(TEXT_COLOR),
        );
    }
}

pub fn render_confirmation_screen(f: &mut ratatui::Frame, area: Rect, state: &ConfirmationState) {
    render_gradient(f, area);

    let [header, body] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    let [back, title, _] = Layout::horizontal([
        Constraint::Length(5),
        Constraint::Min(0),
        Constraint::Length(5),
    ])
    .areas(Rect {
        y: header.y + 1,
        height: 1,
        ..header
    });
    f.render_widget(Paragraph::new("←"), back);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            SHARE_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(ratatui::layout::Alignment::Center),
        title,
    );

    let slide = slide_offset(2, state.entrance.progress());
    let body = Rect {
        y: body.y + slide,
        height: body.height.saturating_sub(slide),
        ..body
    };
    let column = create_centered_popup(body, 60, body.height);

    let [photo, _, question, _, options, _, notice, _, share] = Layout::vertical([
        Constraint::Min(5),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(3),
    ])
    .areas(column);

    let photo_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(TEXT_COLOR));
    let photo_inner = photo_block.inner(photo);
    f.render_widget(photo_block, photo);
    let [_, emoji, label, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(photo_inner);
    f.render_widget(
        Paragraph::new(VIDEO_EMOJI).alignment(ratatui::layout::Alignment::Center),
        emoji,
    );
    f.render_widget(
        Paragraph::new(PHOTO_LABEL).alignment(ratatui::layout::Alignment::Center),
        label,
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            PRIVACY_QUESTION,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(ratatui::layout::Alignment::Center),
        question,
    );

    let [everyone, _, private] = Layout::horizontal([
        Constraint::Ratio(1, 2),
        Constraint::Length(1),
        Constraint::Ratio(1, 2),
    ])
    .areas(options);
    for (privacy, rect) in [(Privacy::Everyone, everyone), (Privacy::Private, private)] {
        render_button(
            f,
            rect,
            privacy.label(),
            TEXT_COLOR,
            PRIMARY_DARK_COLOR,
            state.privacy == privacy,
        );
    }

    f.render_widget(
        Paragraph::new(PRIVACY_NOTICE)
            .style(Style::default().add_modifier(Modifier::ITALIC))
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true }),
        notice,
    );

    render_button(f, share, SHARE_BUTTON, YELLOW_BRIGHT_COLOR, Color::Black, true);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_blend_hits_both_ends() {
        assert_eq!(blend(SHARE_TOP_COLOR, SHARE_BOTTOM_COLOR, 0.0), SHARE_TOP_COLOR);
        assert_eq!(blend(SHARE_TOP_COLOR, SHARE_BOTTOM_COLOR, 1.0), SHARE_BOTTOM_COLOR);
    }
}
