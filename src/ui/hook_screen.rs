use std::time::Duration;

use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use super::constants::{
    ATTEMPTS, CHALLENGE_BUTTON, CHALLENGE_SUBTITLE, CHALLENGE_TITLE, CHANNEL_EMOJI, LOGO_TEXT,
    VIDEO_CREATOR, VIDEO_EMOJI, VIDEO_TITLE,
};
use super::helpers::button;
use super::{
    DARK_TEXT_COLOR, LIGHT_GRAY_COLOR, PRIMARY_COLOR, SURFACE_COLOR, SURFACE_LIGHT_COLOR,
    TEXT_COLOR, TEXT_SECONDARY_COLOR, YELLOW_COLOR,
};
use crate::util::{slide_offset, Timeline};

const HEADER_HEIGHT: u16 = 3;
const INFO_HEIGHT: u16 = 3;
const CHALLENGE_HEIGHT: u16 = 14;
/// Rows the challenge section slides up while entering.
const CHALLENGE_SLIDE_ROWS: u16 = 2;

/// Local state of the hook screen: scroll position and entrance animation.
#[derive(Debug)]
pub struct HookState {
    pub scroll: ScrollViewState,
    pub entrance: Timeline,
}

impl HookState {
    pub fn new(entrance: Duration) -> Self {
        Self {
            scroll: ScrollViewState::default(),
            entrance: Timeline::start(entrance),
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll.scroll_down();
    }

    pub fn scroll_up(&mut self) {
        self.scroll.scroll_up();
    }
}

/// Video box height for a given width. Terminal cells are about twice as
/// tall as wide, so 16:9 becomes roughly width / 3.5.
pub fn video_height(width: u16) -> u16 {
    (width * 2 / 7).clamp(5, 14)
}

pub fn render_hook_screen(f: &mut ratatui::Frame, area: Rect, state: &mut HookState) {
    f.render_widget(
        Block::default().style(Style::default().bg(LIGHT_GRAY_COLOR).fg(DARK_TEXT_COLOR)),
        area,
    );

    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);
    render_header(f, header);
    if body.is_empty() {
        return;
    }

    // Leave one column for the scrollbar
    let width = body.width.saturating_sub(1).max(1);
    let video = video_height(width);
    let slide = slide_offset(CHALLENGE_SLIDE_ROWS, state.entrance.progress());
    let content_height = video + INFO_HEIGHT + CHALLENGE_SLIDE_ROWS + CHALLENGE_HEIGHT;

    let mut scroll_view = ScrollView::new(Size::new(width, content_height))
        .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
    let content = Rect::new(0, 0, width, content_height);
    scroll_view.render_widget(
        Block::default().style(Style::default().bg(LIGHT_GRAY_COLOR).fg(DARK_TEXT_COLOR)),
        content,
    );

    let [video_area, info_area, _, challenge_area] = Layout::vertical([
        Constraint::Length(video),
        Constraint::Length(INFO_HEIGHT),
        Constraint::Length(slide),
        Constraint::Min(CHALLENGE_HEIGHT),
    ])
    .areas(content);

    render_video(&mut scroll_view, video_area);
    render_video_info(&mut scroll_view, info_area);
    render_challenge(&mut scroll_view, challenge_area);

    f.render_stateful_widget(scroll_view, body, &mut state.scroll);
}

fn render_header(f: &mut ratatui::Frame, area: Rect) {
    let [back, logo, bag] = Layout::horizontal([
        Constraint::Length(5),
        Constraint::Min(0),
        Constraint::Length(5),
    ])
    .areas(area);
    let style = Style::default().bg(LIGHT_GRAY_COLOR).fg(DARK_TEXT_COLOR);

    f.render_widget(Block::default().borders(Borders::BOTTOM).style(style), area);
    f.render_widget(
        Paragraph::new("←").alignment(ratatui::layout::Alignment::Center),
        Rect { y: back.y + 1, height: 1, ..back },
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            LOGO_TEXT,
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(ratatui::layout::Alignment::Center),
        Rect { y: logo.y + 1, height: 1, ..logo },
    );
    f.render_widget(
        Paragraph::new("🛍").alignment(ratatui::layout::Alignment::Center),
        Rect { y: bag.y + 1, height: 1, ..bag },
    );
}

fn render_video(view: &mut ScrollView, area: Rect) {
    let style = Style::default().bg(SURFACE_COLOR).fg(TEXT_COLOR);
    view.render_widget(Block::default().style(style), area);

    let [_, emoji, _, bar] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);
    view.render_widget(
        Paragraph::new(VIDEO_EMOJI)
            .style(style)
            .alignment(ratatui::layout::Alignment::Center),
        emoji,
    );

    // Mock video has already played to the end
    view.render_widget(
        Paragraph::new("━".repeat(usize::from(bar.width)))
            .style(Style::default().bg(SURFACE_LIGHT_COLOR).fg(PRIMARY_COLOR)),
        bar,
    );
}

fn render_video_info(view: &mut ScrollView, area: Rect) {
    let [left, actions] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(12)]).areas(area);
    let text = vec![
        Line::from(vec![
            Span::raw(format!(" {} ", CHANNEL_EMOJI)),
            Span::styled(
                VIDEO_TITLE,
                Style::default()
                    .fg(DARK_TEXT_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("    {}", VIDEO_CREATOR),
            Style::default().fg(TEXT_SECONDARY_COLOR),
        )),
    ];
    view.render_widget(
        Paragraph::new(text),
        Rect {
            y: left.y + 1,
            height: 2,
            ..left
        },
    );
    view.render_widget(
        Paragraph::new("⤴  🔖  ⎚ ").alignment(ratatui::layout::Alignment::Right),
        Rect {
            y: actions.y + 1,
            height: 1,
            ..actions
        },
    );
}

fn render_challenge(view: &mut ScrollView, area: Rect) {
    let section = Style::default().bg(YELLOW_COLOR).fg(DARK_TEXT_COLOR);
    view.render_widget(Block::default().style(section), area);

    let [_, thumbs, _, title, subtitle, _, button_row, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    let badge = Style::default().bg(LIGHT_GRAY_COLOR).fg(DARK_TEXT_COLOR);
    let mut spans = Vec::with_capacity(ATTEMPTS.len() * 2);
    for (emoji, name) in ATTEMPTS {
        spans.push(Span::styled(format!(" {} {} ", emoji, name), badge));
        spans.push(Span::styled(" ", section));
    }
    view.render_widget(
        Paragraph::new(Line::from(spans))
            .style(section)
            .wrap(Wrap { trim: false }),
        Rect {
            x: thumbs.x + 1,
            width: thumbs.width.saturating_sub(2),
            ..thumbs
        },
    );

    view.render_widget(
        Paragraph::new(Line::from(Span::styled(
            CHALLENGE_TITLE,
            section.add_modifier(Modifier::BOLD),
        )))
        .alignment(ratatui::layout::Alignment::Center),
        title,
    );
    view.render_widget(
        Paragraph::new(CHALLENGE_SUBTITLE)
            .style(section)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true }),
        subtitle,
    );

    let [_, button_area, _] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(24),
        Constraint::Min(0),
    ])
    .areas(button_row);
    view.render_widget(
        button(CHALLENGE_BUTTON, PRIMARY_COLOR, TEXT_COLOR, true),
        button_area,
    );
}
