//! Count-up animation for headline statistics.
//!
//! Each statistic owns one `CountUp` that starts when its section first
//! scrolls into view and sweeps linearly from zero to the target. A
//! triggered counter never restarts; creating a new instance is the
//! only way to run the sweep again.

use web_time::{Duration, Instant};

/// Linear zero-to-target interpolator driven by wall-clock time.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: f64,
    duration: Duration,
    started_at: Option<Instant>,
}

impl CountUp {
    /// Counter sweeping to `target` over `duration_secs` seconds.
    ///
    /// Non-positive durations jump straight to the target on trigger.
    pub fn new(target: f64, duration_secs: f32) -> Self {
        Self {
            target,
            duration: Duration::from_secs_f32(duration_secs.max(0.0)),
            started_at: None,
        }
    }

    /// Counter with the standard two-second sweep.
    pub fn with_default_duration(target: f64) -> Self {
        Self::new(target, 2.0)
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Starts the sweep. Later triggers are ignored so re-entering the
    /// viewport does not restart a finished animation.
    pub fn trigger(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Sweep progress in [0, 1]. Zero before the trigger.
    pub fn progress(&self, now: Instant) -> f64 {
        let Some(started) = self.started_at else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.duration_since(started).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).min(1.0)
    }

    /// Current interpolated value.
    pub fn value_at(&self, now: Instant) -> f64 {
        self.target * self.progress(now)
    }

    /// True while the sweep is running; drives repaint requests.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at.is_some() && self.progress(now) < 1.0
    }

    /// Current value formatted for display.
    pub fn display_at(&self, now: Instant) -> String {
        format_value(self.target, self.value_at(now))
    }
}

/// Formats an intermediate value the way the target will be shown:
/// whole-number targets render as grouped integers, fractional targets
/// keep one decimal place throughout the sweep.
fn format_value(target: f64, value: f64) -> String {
    if target.fract() == 0.0 {
        group_thousands(value.floor() as i64)
    } else {
        format!("{:.1}", value)
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
