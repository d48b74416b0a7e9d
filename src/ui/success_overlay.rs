use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use super::constants::{
    SUCCESS_AGAIN_BUTTON, SUCCESS_BACK_BUTTON, SUCCESS_EMOJI, SUCCESS_REWARD, SUCCESS_TITLE,
};
use super::helpers::{create_centered_popup, render_button, render_help_text, scale_rect};
use super::{PRIMARY_COLOR, SUCCESS_COLOR, SURFACE_COLOR, TEXT_COLOR, TEXT_SECONDARY_COLOR};
use crate::models::FlowEvent;
use crate::settings::TimingSettings;
use crate::util::{spring, Timeline};

const CARD_WIDTH: u16 = 50;
const CARD_HEIGHT: u16 = 17;

/// The two ways out of the success card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SuccessChoice {
    #[default]
    BackToVideos,
    DoAgain,
}

impl SuccessChoice {
    pub fn toggle(self) -> Self {
        match self {
            SuccessChoice::BackToVideos => SuccessChoice::DoAgain,
            SuccessChoice::DoAgain => SuccessChoice::BackToVideos,
        }
    }

    pub fn event(self) -> FlowEvent {
        match self {
            SuccessChoice::BackToVideos => FlowEvent::ChooseExit,
            SuccessChoice::DoAgain => FlowEvent::ChooseRetry,
        }
    }
}

#[derive(Debug)]
pub struct SuccessState {
    pub selected: SuccessChoice,
    pub pop_in: Timeline,
}

impl SuccessState {
    pub fn new(timing: &TimingSettings) -> Self {
        Self {
            selected: SuccessChoice::default(),
            pop_in: Timeline::start(timing.entrance()),
        }
    }
}

pub fn render_success_overlay(f: &mut ratatui::Frame, area: Rect, state: &SuccessState) {
    let card = create_centered_popup(area, CARD_WIDTH, CARD_HEIGHT);
    let card = scale_rect(card, 0.5 + 0.5 * spring(state.pop_in.progress()));
    f.render_widget(Clear, card);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(SURFACE_COLOR).fg(TEXT_COLOR));
    let inner = block.inner(card);
    f.render_widget(block, card);

    let [_, emoji, _, title, reward, _, back, again, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(SUCCESS_EMOJI).alignment(ratatui::layout::Alignment::Center),
        emoji,
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            SUCCESS_TITLE,
            Style::default().fg(SUCCESS_COLOR).add_modifier(Modifier::BOLD),
        )))
        .alignment(ratatui::layout::Alignment::Center),
        title,
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            SUCCESS_REWARD,
            Style::default().fg(TEXT_SECONDARY_COLOR),
        )))
        .alignment(ratatui::layout::Alignment::Center),
        reward,
    );

    let button_area = |rect: Rect| Rect {
        x: rect.x + 4,
        width: rect.width.saturating_sub(8),
        ..rect
    };
    render_button(
        f,
        button_area(back),
        SUCCESS_BACK_BUTTON,
        PRIMARY_COLOR,
        TEXT_COLOR,
        state.selected == SuccessChoice::BackToVideos,
    );
    render_button(
        f,
        button_area(again),
        SUCCESS_AGAIN_BUTTON,
        PRIMARY_COLOR,
        TEXT_COLOR,
        state.selected == SuccessChoice::DoAgain,
    );

    render_help_text(f, help, "Press ", "Enter", " to confirm");
}
