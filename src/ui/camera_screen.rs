use std::time::Instant;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::constants::{CAMERA_EMOJI, CAMERA_TITLE};
use super::helpers::create_centered_popup;
use super::{BACKGROUND_COLOR, SURFACE_COLOR, TEXT_COLOR, TEXT_SECONDARY_COLOR};
use crate::settings::TimingSettings;
use crate::util::{
    flash_intensity, slide_offset, Scheduler, TaskSlot, TimerFired, TimerId, TimerKind, Timeline,
};

/// Local state of the mock camera.
///
/// `is_capturing` guards the shutter: only the first press starts the
/// flash, later presses are ignored until the screen is left.
#[derive(Debug)]
pub struct CameraState {
    is_capturing: bool,
    flash: Option<Timeline>,
    pending: TaskSlot,
    pub entrance: Timeline,
}

impl CameraState {
    pub fn new(timing: &TimingSettings) -> Self {
        Self {
            is_capturing: false,
            flash: None,
            pending: TaskSlot::new(),
            entrance: Timeline::start(timing.entrance()),
        }
    }

    pub fn is_capturing(&self) -> bool {
        self.is_capturing
    }

    /// Starts the flash and schedules the capture. Returns false when a
    /// capture is already running.
    pub fn press_shutter(&mut self, scheduler: &mut Scheduler, timing: &TimingSettings) -> bool {
        if self.is_capturing {
            log::debug!("Shutter pressed while capturing, ignoring");
            return false;
        }
        self.is_capturing = true;
        self.flash = Some(Timeline::start(timing.flash()));
        self.pending
            .arm(scheduler.schedule_once(timing.capture_delay(), TimerKind::CaptureFlash));
        true
    }

    /// True when `fired` is this screen's pending capture.
    pub fn on_timer(&mut self, fired: &TimerFired) -> bool {
        self.pending.take_if_fired(fired)
    }

    pub fn pending_capture(&self) -> Option<TimerId> {
        self.pending.pending_id()
    }

    pub fn flash_intensity_at(&self, now: Instant) -> f64 {
        self.flash
            .map(|flash| flash_intensity(flash.progress_at(now)))
            .unwrap_or(0.0)
    }
}

pub fn render_camera_screen(f: &mut ratatui::Frame, area: Rect, state: &CameraState) {
    let base = Style::default().bg(BACKGROUND_COLOR).fg(TEXT_COLOR);
    f.render_widget(Block::default().style(base), area);

    let slide = slide_offset(2, state.entrance.progress());
    let area = Rect {
        y: area.y + slide,
        height: area.height.saturating_sub(slide),
        ..area
    };

    let [top_bar, viewfinder, controls] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(5),
    ])
    .areas(area);

    let [back, title, _] = Layout::horizontal([
        Constraint::Length(5),
        Constraint::Min(0),
        Constraint::Length(5),
    ])
    .areas(Rect {
        y: top_bar.y + 1,
        height: 1,
        ..top_bar
    });
    f.render_widget(Paragraph::new("←").style(base), back);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            CAMERA_TITLE,
            base.add_modifier(Modifier::BOLD),
        )))
        .alignment(ratatui::layout::Alignment::Center),
        title,
    );

    render_viewfinder(f, viewfinder);
    render_controls(f, controls, state.is_capturing());

    let intensity = state.flash_intensity_at(Instant::now());
    if intensity > 0.0 {
        let level = (255.0 * intensity).round() as u8;
        f.buffer_mut()
            .set_style(area, Style::default().bg(Color::Rgb(level, level, level)));
    }
}

fn render_viewfinder(f: &mut ratatui::Frame, area: Rect) {
    // Square-ish: cells are twice as tall as wide
    let height = area.height.saturating_sub(2);
    let frame = create_centered_popup(area, height.saturating_mul(2), height);
    let style = Style::default().bg(SURFACE_COLOR).fg(TEXT_SECONDARY_COLOR);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(style);
    let inner = block.inner(frame);
    f.render_widget(block, frame);

    let [_, emoji, _, cross_top, cross_mid, cross_bottom, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    let centered = |text: &'static str| {
        Paragraph::new(text)
            .style(style)
            .alignment(ratatui::layout::Alignment::Center)
    };
    f.render_widget(centered(CAMERA_EMOJI), emoji);
    f.render_widget(centered("│"), cross_top);
    f.render_widget(centered("──◯──"), cross_mid);
    f.render_widget(centered("│"), cross_bottom);
}

fn render_controls(f: &mut ratatui::Frame, area: Rect, capturing: bool) {
    let [flip, shutter, gallery] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(area);
    let style = Style::default().bg(BACKGROUND_COLOR).fg(TEXT_COLOR);

    let icon_row = |rect: Rect| Rect {
        y: rect.y + 2,
        height: 1,
        ..rect
    };
    f.render_widget(
        Paragraph::new("⟲").style(style).alignment(ratatui::layout::Alignment::Center),
        icon_row(flip),
    );
    f.render_widget(
        Paragraph::new("▦").style(style).alignment(ratatui::layout::Alignment::Center),
        icon_row(gallery),
    );

    let button = create_centered_popup(shutter, 9, 5);
    let shutter_style = if capturing {
        Style::default().fg(TEXT_SECONDARY_COLOR)
    } else {
        Style::default().fg(TEXT_COLOR).add_modifier(Modifier::BOLD)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(shutter_style)
        .style(style);
    let inner = block.inner(button);
    f.render_widget(block, button);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled("●", shutter_style)))
            .alignment(ratatui::layout::Alignment::Center),
        Rect {
            y: inner.y + inner.height / 2,
            height: 1,
            ..inner
        },
    );
}
