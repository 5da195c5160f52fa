use chrono::{NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

use crate::calendar::{self, Event};

/// Renders an agenda list for `days` days starting at `date`. Days
/// without events are skipped. Stored instants are UTC; they are
/// converted to the display timezone for rendering only.
pub fn render(events: &[Event], date: NaiveDate, days: u32, timezone: Tz) -> String {
    let mut out = String::new();

    for day in date.iter_days().take(days as usize) {
        let bucket = calendar::agenda_events_on(events, day);

        if bucket.is_empty() {
            continue;
        }

        out.push_str(&format!("{}\n", day.format("%A, %e %B %Y")));

        for event in &bucket {
            let Some((start, end)) = event.agenda_range() else {
                continue;
            };

            out.push_str(&format!("  {}\n", entry_line(event, start, end, timezone)));
        }

        out.push('\n');
    }

    if out.is_empty() {
        out.push_str("No events in this period.\n");
    }

    out
}

fn entry_line(event: &Event, start: NaiveDateTime, end: NaiveDateTime, timezone: Tz) -> String {
    let range = if event.all_day {
        "all day      ".to_owned()
    } else {
        format!(
            "{}-{}  ",
            in_timezone(start, timezone),
            in_timezone(end, timezone)
        )
    };

    match &event.location {
        Some(location) => format!("{range}{} @ {location}", event.title),
        None => format!("{range}{}", event.title),
    }
}

fn in_timezone(instant: NaiveDateTime, timezone: Tz) -> String {
    instant
        .and_utc()
        .with_timezone(&timezone)
        .format("%H:%M")
        .to_string()
}
