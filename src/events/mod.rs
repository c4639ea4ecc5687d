//! Classification of sunset events relative to the current instant.
//!
//! Every candidate event is reduced to a signed [`EventDelta`] in minutes,
//! folded onto a 24-hour window centred on now so an event 23 hours ahead
//! reads as one hour ago. Deltas are then sorted into one of three display
//! buckets:
//!
//! - **Occurring**: within the last half hour, or exactly now
//! - **Upcoming**: within the next two hours (at most three shown, soonest first)
//! - **Recently passed**: 30 to 90 minutes ago (at most three shown), only
//!   when nothing is occurring or upcoming
//!
//! Nothing here holds state between calls; callers re-run the classifier
//! whenever they want fresh numbers.

pub mod cities;

use chrono::{DateTime, TimeZone, Timelike};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::constants::{
    HALF_DAY_MINUTES, MAX_RECENT_EVENTS, MAX_UPCOMING_EVENTS, MINUTES_PER_DAY,
    OCCURRING_WINDOW_MINUTES, RECENT_WINDOW_MINUTES, UPCOMING_WINDOW_MINUTES,
};
use crate::solar::{SolarEstimate, estimate_sunset_utc};

pub use cities::{City, REFERENCE_CITIES};

/// Signed minutes from now to an event, always in `(-720, 720]`.
///
/// Positive values lie in the future, negative values in the past.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct EventDelta(f64);

impl EventDelta {
    /// Shortest signed distance from `now_minutes` to `event_minutes`.
    ///
    /// Both arguments are minutes of the same UTC day, in `[0, 1440)`. A gap of
    /// exactly half a day resolves to the positive side.
    pub fn between(event_minutes: f64, now_minutes: f64) -> Self {
        let mut delta = event_minutes - now_minutes;
        if delta <= -HALF_DAY_MINUTES {
            delta += MINUTES_PER_DAY;
        } else if delta > HALF_DAY_MINUTES {
            delta -= MINUTES_PER_DAY;
        }
        Self(delta)
    }

    pub fn minutes(self) -> f64 {
        self.0
    }

    pub fn category(self) -> EventCategory {
        EventCategory::for_delta(self.0)
    }
}

/// Display bucket for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Occurring,
    Upcoming,
    RecentlyPassed,
    Irrelevant,
}

impl EventCategory {
    /// Bucket for a delta in minutes. Exactly one bucket applies to any value.
    pub fn for_delta(delta: f64) -> Self {
        if (-OCCURRING_WINDOW_MINUTES..=0.0).contains(&delta) {
            EventCategory::Occurring
        } else if delta > 0.0 && delta <= UPCOMING_WINDOW_MINUTES {
            EventCategory::Upcoming
        } else if delta >= -RECENT_WINDOW_MINUTES && delta < -OCCURRING_WINDOW_MINUTES {
            EventCategory::RecentlyPassed
        } else {
            EventCategory::Irrelevant
        }
    }

    /// Section heading used on the iftar board.
    pub fn heading(self) -> &'static str {
        match self {
            EventCategory::Occurring => "Right now",
            EventCategory::Upcoming => "Up next",
            EventCategory::RecentlyPassed => "Just broke their fast",
            EventCategory::Irrelevant => "Elsewhere",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

/// A location awaiting classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub label: String,
    pub estimate: SolarEstimate,
}

/// A classified event, fresh on every pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEvent {
    pub label: String,
    pub delta: EventDelta,
    pub category: EventCategory,
}

impl RankedEvent {
    /// Short relative label: `"12m"` ahead, `"5m ago"` behind.
    ///
    /// Upcoming events round up so a countdown never shows `0m` early.
    pub fn eta_label(&self) -> String {
        let minutes = self.delta.minutes();
        if minutes > 0.0 {
            format!("{}m", minutes.ceil() as i64)
        } else {
            format!("{}m ago", minutes.round().abs() as i64)
        }
    }
}

/// Minutes past UTC midnight for `now`, with seconds discarded.
pub fn utc_minutes_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> u32 {
    let utc = now.naive_utc();
    utc.hour() * 60 + utc.minute()
}

/// Estimate today's sunset for every city.
pub fn estimate_cities<Tz: TimeZone>(cities: &[City], now: &DateTime<Tz>) -> Vec<Candidate> {
    cities
        .iter()
        .map(|city| Candidate {
            label: city.name.to_string(),
            estimate: estimate_sunset_utc(city.point(), now),
        })
        .collect()
}

fn latest_first(a: &RankedEvent, b: &RankedEvent) -> Ordering {
    b.delta.minutes().total_cmp(&a.delta.minutes())
}

fn soonest_first(a: &RankedEvent, b: &RankedEvent) -> Ordering {
    a.delta.minutes().total_cmp(&b.delta.minutes())
}

/// Classify and rank candidates against `now`.
///
/// The result lists occurring events first (closest to now first), then up
/// to three upcoming events (soonest first). Only when both of those are
/// empty does it fall back to up to three recently passed events (most
/// recent first). Candidates without a sunset and irrelevant events never
/// appear. Ties keep their input order.
pub fn classify_events<Tz: TimeZone>(
    candidates: &[Candidate],
    now: &DateTime<Tz>,
) -> Vec<RankedEvent> {
    let now_minutes = f64::from(utc_minutes_of_day(now));

    let mut occurring = Vec::new();
    let mut upcoming = Vec::new();
    let mut recent = Vec::new();

    for candidate in candidates {
        let Some(event_minutes) = candidate.estimate.utc_minutes() else {
            continue;
        };

        let delta = EventDelta::between(event_minutes, now_minutes);
        let category = delta.category();
        let event = RankedEvent {
            label: candidate.label.clone(),
            delta,
            category,
        };

        match category {
            EventCategory::Occurring => occurring.push(event),
            EventCategory::Upcoming => upcoming.push(event),
            EventCategory::RecentlyPassed => recent.push(event),
            EventCategory::Irrelevant => {}
        }
    }

    occurring.sort_by(latest_first);
    upcoming.sort_by(soonest_first);
    upcoming.truncate(MAX_UPCOMING_EVENTS);

    if occurring.is_empty() && upcoming.is_empty() {
        recent.sort_by(latest_first);
        recent.truncate(MAX_RECENT_EVENTS);
        return recent;
    }

    occurring.append(&mut upcoming);
    occurring
}

/// Estimate and classify a whole city table in one pass.
pub fn breaking_now<Tz: TimeZone>(cities: &[City], now: &DateTime<Tz>) -> Vec<RankedEvent> {
    classify_events(&estimate_cities(cities, now), now)
}
