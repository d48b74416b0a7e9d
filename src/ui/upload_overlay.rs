use std::time::Instant;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph};

use super::constants::{UPLOAD_SUBTITLE, UPLOAD_TITLE};
use super::helpers::{create_centered_popup, scale_rect};
use super::{PRIMARY_COLOR, SURFACE_COLOR, SURFACE_LIGHT_COLOR, TEXT_COLOR, TEXT_SECONDARY_COLOR};
use crate::settings::TimingSettings;
use crate::util::{spring, Scheduler, TaskSlot, TimerFired, TimerId, TimerKind, Timeline};

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 9;

/// Fake upload shown in the overlay. Owns the timer that ends it.
#[derive(Debug)]
pub struct UploadState {
    progress: Timeline,
    pop_in: Timeline,
    pending: TaskSlot,
}

impl UploadState {
    /// Starts the progress bar and schedules `UploadComplete`.
    pub fn start(scheduler: &mut Scheduler, timing: &TimingSettings) -> Self {
        let mut pending = TaskSlot::new();
        pending.arm(scheduler.schedule_once(timing.upload_delay(), TimerKind::UploadProgress));
        Self {
            progress: Timeline::start(timing.upload()),
            pop_in: Timeline::start(timing.entrance()),
            pending,
        }
    }

    pub fn ratio_at(&self, now: Instant) -> f64 {
        self.progress.progress_at(now)
    }

    pub fn percent_at(&self, now: Instant) -> u16 {
        (self.ratio_at(now) * 100.0).round() as u16
    }

    /// True when `fired` ends this upload.
    pub fn on_timer(&mut self, fired: &TimerFired) -> bool {
        self.pending.take_if_fired(fired)
    }

    pub fn pending_upload(&self) -> Option<TimerId> {
        self.pending.pending_id()
    }
}

pub fn render_upload_overlay(f: &mut ratatui::Frame, area: Rect, state: &UploadState) {
    let now = Instant::now();
    let card = create_centered_popup(area, CARD_WIDTH, CARD_HEIGHT);
    let card = scale_rect(card, 0.5 + 0.5 * spring(state.pop_in.progress_at(now)));
    f.render_widget(Clear, card);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(SURFACE_COLOR).fg(TEXT_COLOR));
    let inner = block.inner(card);
    f.render_widget(block, card);

    let [_, title, _, subtitle, _, gauge] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            UPLOAD_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .alignment(ratatui::layout::Alignment::Center),
        title,
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            UPLOAD_SUBTITLE,
            Style::default().fg(TEXT_SECONDARY_COLOR),
        )))
        .alignment(ratatui::layout::Alignment::Center),
        subtitle,
    );

    let gauge_area = Rect {
        x: gauge.x + 2,
        width: gauge.width.saturating_sub(4),
        ..gauge
    };
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(PRIMARY_COLOR).bg(SURFACE_LIGHT_COLOR))
            .ratio(state.ratio_at(now))
            .label(format!("{}%", state.percent_at(now))),
        gauge_area,
    );
}
