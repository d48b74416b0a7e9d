use std::time::{Duration, Instant};

/// A fixed-length animation that started at a known instant.
#[derive(Clone, Copy, Debug)]
pub struct Timeline {
    started: Instant,
    duration: Duration,
}

impl Timeline {
    pub fn start(duration: Duration) -> Self {
        Self::starting_at(Instant::now(), duration)
    }

    pub fn starting_at(started: Instant, duration: Duration) -> Self {
        Self { started, duration }
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress in `0.0..=1.0`.
    pub fn progress_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn progress(&self) -> f64 {
        self.progress_at(Instant::now())
    }

    pub fn is_complete_at(&self, now: Instant) -> bool {
        self.progress_at(now) >= 1.0
    }
}

/// Cubic ease-out.
pub fn ease_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Damped spring that overshoots once and settles on 1.0.
pub fn spring(t: f64) -> f64 {
    if t >= 1.0 {
        return 1.0;
    }
    let t = t.max(0.0);
    1.0 - (-6.0 * t).exp() * (12.0 * t).cos()
}

/// Rows still to slide in: `max_rows` at the start, 0 when done.
pub fn slide_offset(max_rows: u16, progress: f64) -> u16 {
    ((1.0 - ease_out(progress)) * f64::from(max_rows)).round() as u16
}

/// Flash brightness: ramps up over the first half, back down over the second.
pub fn flash_intensity(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    if p < 0.5 {
        p * 2.0
    } else {
        (1.0 - p) * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_and_monotonic() {
        let start = Instant::now();
        let timeline = Timeline::starting_at(start, Duration::from_millis(2000));

        let mut last = 0.0;
        for ms in (0..=3000).step_by(250) {
            let p = timeline.progress_at(start + Duration::from_millis(ms));
            assert!(p >= last);
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
        assert_eq!(timeline.progress_at(start + Duration::from_millis(1000)), 0.5);
        assert!(timeline.is_complete_at(start + Duration::from_millis(2000)));
    }

    #[test]
    fn zero_length_timeline_is_complete() {
        let timeline = Timeline::start(Duration::ZERO);
        assert_eq!(timeline.progress(), 1.0);
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert_eq!(spring(0.0), 0.0);
        assert_eq!(spring(1.0), 1.0);
        assert_eq!(slide_offset(4, 0.0), 4);
        assert_eq!(slide_offset(4, 1.0), 0);
    }

    #[test]
    fn flash_peaks_halfway() {
        assert_eq!(flash_intensity(0.0), 0.0);
        assert_eq!(flash_intensity(0.5), 1.0);
        assert_eq!(flash_intensity(1.0), 0.0);
    }
}
