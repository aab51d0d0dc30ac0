use crate::domain::model::HoursMap;
use chrono::{Datelike, Local, Weekday};

pub const CLOSED: &str = "Closed";
pub const OPEN_24_HOURS: &str = "Open 24 hours";

/// English day name used as the key of an hours map.
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Listed intervals for `weekday`, if the map has a non-empty entry for it.
pub fn hours_for_day(hours: Option<&HoursMap>, weekday: Weekday) -> Option<&[String]> {
    hours?
        .get(day_name(weekday))
        .map(Vec::as_slice)
        .filter(|entries| !entries.is_empty())
}

/// Whether the listing is open today, in the local time zone.
pub fn is_open_now(hours: Option<&HoursMap>) -> bool {
    is_open_on(hours, Local::now().weekday())
}

/// Whether the listing has opening hours on `weekday`.
///
/// Only the first entry is inspected: `"Closed"` means closed, anything else
/// (including `"Open 24 hours"`) means open. Time ranges are not compared
/// against the clock.
pub fn is_open_on(hours: Option<&HoursMap>, weekday: Weekday) -> bool {
    match hours_for_day(hours, weekday).and_then(|entries| entries.first()) {
        None => false,
        Some(first) if first == CLOSED => false,
        Some(first) if first == OPEN_24_HOURS => true,
        Some(_) => true,
    }
}
