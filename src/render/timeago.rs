//! Human relative time ("3 hours ago").

use chrono::{DateTime, Utc};

pub fn from_now(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then).num_seconds();
    let phrase = humanize(delta.unsigned_abs());
    if delta < 0 {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

fn humanize(secs: u64) -> String {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 60.0 * MINUTE;
    const DAY: f64 = 24.0 * HOUR;

    let s = secs as f64;
    let minutes = (s / MINUTE).round() as u64;
    let hours = (s / HOUR).round() as u64;
    let days = (s / DAY).round() as u64;
    let months = (s / (DAY * 30.4375)).round() as u64;
    let years = (s / (DAY * 365.25)).round() as u64;

    if s < 45.0 {
        "a few seconds".to_string()
    } else if s < 90.0 {
        "a minute".to_string()
    } else if s < 45.0 * MINUTE {
        format!("{} minutes", minutes)
    } else if s < 90.0 * MINUTE {
        "an hour".to_string()
    } else if s < 22.0 * HOUR {
        format!("{} hours", hours)
    } else if s < 36.0 * HOUR {
        "a day".to_string()
    } else if s < 26.0 * DAY {
        format!("{} days", days)
    } else if s < 45.0 * DAY {
        "a month".to_string()
    } else if s < 320.0 * DAY {
        if months <= 1 {
            "a month".to_string()
        } else {
            format!("{} months", months)
        }
    } else if s < 548.0 * DAY {
        "a year".to_string()
    } else {
        format!("{} years", years.max(2))
    }
}
