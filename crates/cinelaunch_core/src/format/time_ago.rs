//! Relative "time ago" labels for project creation timestamps.
//!
//! Distance buckets, by rounded minutes between the two instants:
//! - `< 1`: `less than a minute`
//! - `< 2`: `1 minute`
//! - `< 45`: `N minutes`
//! - `< 90`: `about 1 hour`
//! - `< 1 day`: `about N hours`
//! - `< 42 hours`: `1 day`
//! - `< 30 days`: `N days`
//! - `< 60 days`: `about 1 month` / `about 2 months`
//! - `< 12 calendar months`: `N months`
//! - otherwise years, qualified by leftover months: `about` (<3), `over` (<9),
//!   `almost` (next year).

use chrono::{DateTime, Datelike, Timelike, Utc};

const MINUTES_IN_HOUR: i64 = 60;
const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Renders `then` relative to `now`, e.g. `3 months ago` or `in 2 days`.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if then <= now {
        format!("{} ago", format_distance(then, now))
    } else {
        format!("in {}", format_distance(now, then))
    }
}

/// Renders the unsigned distance between `earlier` and `later`.
pub fn format_distance(earlier: DateTime<Utc>, later: DateTime<Utc>) -> String {
    let seconds = (later - earlier).num_seconds();
    let minutes = div_round(seconds, 60);

    if minutes < 1 {
        return "less than a minute".to_string();
    }
    if minutes < 2 {
        return "1 minute".to_string();
    }
    if minutes < 45 {
        return format!("{minutes} minutes");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = div_round(minutes, MINUTES_IN_HOUR);
        return format!("about {}", plural(hours, "hour"));
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = div_round(minutes, MINUTES_IN_DAY);
        return plural(days, "day");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = div_round(minutes, MINUTES_IN_MONTH);
        return format!("about {}", plural(months, "month"));
    }

    let months = calendar_months_between(earlier, later);
    if months < 12 {
        let nearest = div_round(minutes, MINUTES_IN_MONTH);
        return plural(nearest, "month");
    }

    let years = months / 12;
    let leftover = months % 12;
    if leftover < 3 {
        format!("about {}", plural(years, "year"))
    } else if leftover < 9 {
        format!("over {}", plural(years, "year"))
    } else {
        format!("almost {}", plural(years + 1, "year"))
    }
}

/// Whole calendar months from `earlier` to `later`; a partial last month
/// does not count.
fn calendar_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month()) - i64::from(earlier.month());
    let later_in_month = (later.day(), later.num_seconds_from_midnight());
    let earlier_in_month = (earlier.day(), earlier.num_seconds_from_midnight());
    if months > 0 && later_in_month < earlier_in_month {
        months -= 1;
    }
    months.max(0)
}

/// Non-negative integer division rounding half-up.
fn div_round(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
