//! Event timing: upcoming/past split and the countdown widget's arithmetic.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use crate::data::Event;

const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Where an event sits relative to `now`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventPhase {
    Upcoming,
    Live,
    Ended,
}

impl EventPhase {
    pub fn of(event: &Event, now_ms: i64) -> Self {
        if now_ms < event.starts_at {
            Self::Upcoming
        } else if now_ms < event.ends_at {
            Self::Live
        } else {
            Self::Ended
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Live => "Happening now",
            Self::Ended => "Ended",
        }
    }
}

/// Time remaining until a target, broken into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Remaining time from `now_ms` to `target_ms`, saturating at zero.
    pub fn until(now_ms: i64, target_ms: i64) -> Self {
        let remaining = target_ms.saturating_sub(now_ms).max(0);
        Self {
            days: remaining / DAY_MS,
            hours: (remaining % DAY_MS) / HOUR_MS,
            minutes: (remaining % HOUR_MS) / MINUTE_MS,
            seconds: (remaining % MINUTE_MS) / SECOND_MS,
        }
    }

    pub fn is_elapsed(&self) -> bool {
        *self == Self::default()
    }

    /// `"12d 04h 09m 30s"`, or `"Started"` once elapsed.
    pub fn label(&self) -> String {
        if self.is_elapsed() {
            return "Started".to_owned();
        }
        format!("{}d {:02}h {:02}m {:02}s", self.days, self.hours, self.minutes, self.seconds)
    }
}

/// Events not yet started, soonest first.
pub fn upcoming<'a>(events: &'a [Event], now_ms: i64) -> Vec<&'a Event> {
    let mut found: Vec<&Event> = events.iter().filter(|e| now_ms < e.starts_at).collect();
    found.sort_by_key(|e| e.starts_at);
    found
}

/// Events already started (live or ended), most recent first.
pub fn past<'a>(events: &'a [Event], now_ms: i64) -> Vec<&'a Event> {
    let mut found: Vec<&Event> = events.iter().filter(|e| now_ms >= e.starts_at).collect();
    found.sort_by_key(|e| std::cmp::Reverse(e.starts_at));
    found
}

/// The soonest upcoming event, for the home page hero.
pub fn next_event(events: &[Event], now_ms: i64) -> Option<&Event> {
    events.iter().filter(|e| now_ms < e.starts_at).min_by_key(|e| e.starts_at)
}
