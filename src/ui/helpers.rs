use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::{BACKGROUND_COLOR, PRIMARY_COLOR};

/// Creates a centered popup area within the given area
pub fn create_centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let (popup_width, popup_height) = (width.min(area.width), height.min(area.height));
    let [popup] = Layout::horizontal([Constraint::Length(popup_width)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(popup_height)])
        .flex(Flex::Center)
        .areas(popup);
    popup
}

/// Shrinks `rect` around its center by `scale` (0.0..=1.0), never below 1x1.
pub fn scale_rect(rect: Rect, scale: f64) -> Rect {
    let scale = scale.clamp(0.0, 1.0);
    let width = ((f64::from(rect.width) * scale).round() as u16).clamp(1, rect.width.max(1));
    let height = ((f64::from(rect.height) * scale).round() as u16).clamp(1, rect.height.max(1));
    create_centered_popup(rect, width, height)
}

/// Darkens everything already drawn so an overlay stands out above it.
pub fn render_backdrop(f: &mut ratatui::Frame, area: Rect) {
    f.buffer_mut().set_style(
        area,
        Style::default()
            .bg(BACKGROUND_COLOR)
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
    );
}

/// Renders help text with a styled key binding
pub fn render_help_text(f: &mut ratatui::Frame, area: Rect, prefix: &str, key: &str, suffix: &str) {
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(prefix, Style::default()),
            Span::styled(
                key,
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(suffix, Style::default()),
        ]))
        .alignment(ratatui::layout::Alignment::Center),
        area,
    );
}

/// Rounded button; `focused` swaps to the filled style.
pub fn button<'a>(label: &'a str, color: Color, text_color: Color, focused: bool) -> Paragraph<'a> {
    let style = if focused {
        Style::default()
            .bg(color)
            .fg(text_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    };
    Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(style),
        )
}

pub fn render_button(
    f: &mut ratatui::Frame,
    area: Rect,
    label: &str,
    color: Color,
    text_color: Color,
    focused: bool,
) {
    f.render_widget(button(label, color, text_color, focused), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_popup_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = create_centered_popup(area, 40, 10);
        assert_eq!(popup, Rect::new(20, 7, 40, 10));

        let clipped = create_centered_popup(Rect::new(0, 0, 20, 5), 40, 10);
        assert_eq!(clipped.width, 20);
        assert_eq!(clipped.height, 5);
    }

    #[test]
    fn scale_rect_keeps_center() {
        let rect = Rect::new(10, 10, 40, 12);
        assert_eq!(scale_rect(rect, 1.0), rect);
        let half = scale_rect(rect, 0.5);
        assert_eq!(half, Rect::new(20, 13, 20, 6));
        assert_eq!(scale_rect(rect, 0.0).width, 1);
    }
}
