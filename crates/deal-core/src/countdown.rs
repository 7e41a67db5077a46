//! Countdown arithmetic.
//!
//! The banner asks for the time left once per second. Everything here is a
//! pure function of `now` so the ticking itself stays in the UI layer.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use deal_observability::UI_TARGET;
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Time left until a target, split into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub days: u64,
    /// Always below 24.
    pub hours: u8,
    /// Always below 60.
    pub minutes: u8,
    /// Always below 60.
    pub seconds: u8,
}

impl TimeRemaining {
    /// Nothing left.
    pub const ZERO: TimeRemaining = TimeRemaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Split a millisecond difference (target minus now).
    ///
    /// Sub-second remainders are dropped. Zero or negative differences clamp
    /// to [`TimeRemaining::ZERO`].
    pub fn from_millis(diff_ms: i64) -> Self {
        if diff_ms <= 0 {
            return Self::ZERO;
        }
        Self::from_seconds(diff_ms as u64 / 1_000)
    }

    /// Split a whole number of seconds.
    pub fn from_seconds(total: u64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: ((total % SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u8,
            minutes: ((total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8,
            seconds: (total % SECONDS_PER_MINUTE) as u8,
        }
    }

    /// Time left from `now` until `target`.
    pub fn between(now: DateTime<Utc>, target: DateTime<Utc>) -> Self {
        Self::from_millis(target.signed_duration_since(now).num_milliseconds())
    }

    /// Whether the target has been reached.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Recombine into whole seconds.
    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + u64::from(self.hours) * SECONDS_PER_HOUR
            + u64::from(self.minutes) * SECONDS_PER_MINUTE
            + u64::from(self.seconds)
    }

    /// Value/label pairs for the banner boxes.
    pub fn units(&self) -> [(u64, &'static str); 4] {
        [
            (self.days, "Days"),
            (u64::from(self.hours), "Hours"),
            (u64::from(self.minutes), "Minutes"),
            (u64::from(self.seconds), "Seconds"),
        ]
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Last millisecond of `now`'s calendar day, in `now`'s time zone.
pub fn end_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let fallback = now.with_timezone(&Utc);
    let Some(end) = now.date_naive().and_hms_milli_opt(23, 59, 59, 999) else {
        return fallback;
    };
    // Ambiguous local times (DST fall-back) resolve to the later instant.
    now.timezone()
        .from_local_datetime(&end)
        .latest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(fallback)
}

/// What a countdown counts towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CountdownTarget {
    /// End of the current calendar day, recomputed from `now` each time so
    /// the target rolls over at midnight.
    #[default]
    EndOfDay,
    /// A fixed instant.
    Fixed { at: DateTime<Utc> },
}

impl CountdownTarget {
    /// The instant counted towards as of `now`.
    pub fn resolve<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DateTime<Utc> {
        match self {
            CountdownTarget::EndOfDay => end_of_day(now),
            CountdownTarget::Fixed { at } => *at,
        }
    }

    /// Time left as of `now`.
    pub fn remaining<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> TimeRemaining {
        TimeRemaining::between(now.with_timezone(&Utc), self.resolve(now))
    }
}

/// A countdown that remembers its last reading.
#[derive(Debug, Clone)]
pub struct Countdown {
    target: CountdownTarget,
    last: Option<TimeRemaining>,
}

impl Countdown {
    pub fn new(target: CountdownTarget) -> Self {
        Self { target, last: None }
    }

    pub fn target(&self) -> CountdownTarget {
        self.target
    }

    /// Recompute the time left as of `now`.
    ///
    /// Logs once when the reading first reaches zero.
    pub fn tick<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> TimeRemaining {
        let remaining = self.target.remaining(now);
        let was_running = self.last.map_or(true, |last| !last.is_zero());
        if remaining.is_zero() && was_running {
            tracing::info!(target: UI_TARGET, target_kind = ?self.target, "countdown reached zero");
        }
        self.last = Some(remaining);
        remaining
    }

    /// Whether the last reading was zero.
    pub fn has_ended(&self) -> bool {
        self.last.is_some_and(|last| last.is_zero())
    }
}
