use chrono::{Datelike as _, Days, NaiveDate};

use crate::calendar::{self, Event};

/// Renders the Monday-started week containing `date`. Continuations of
/// multi-day events come first in each day, then the events starting that
/// day. An event never renders twice within its start day.
pub fn render(events: &[Event], date: NaiveDate) -> String {
    let monday = date - Days::new(u64::from(date.weekday().num_days_from_monday()));

    let mut out = format!("Week of {}\n", monday.format("%e %B %Y"));

    for day in monday.iter_days().take(7) {
        out.push('\n');
        out.push_str(&format!("{}\n", day.format("%a %e %b")));

        let spanning = calendar::spanning_events_on(events, day);
        let mut starting = calendar::events_starting_on(events, day);
        starting.sort_by(|a, b| calendar::compare_by_start(a, b));

        if spanning.is_empty() && starting.is_empty() {
            out.push_str("  -\n");
            continue;
        }

        for event in spanning {
            out.push_str(&format!("  ........    {} (cont.)\n", event.title));
        }

        for event in starting {
            out.push_str(&format!("  {}\n", entry_line(event)));
        }
    }

    out
}

fn entry_line(event: &Event) -> String {
    if event.all_day {
        return format!("all day     {}", event.title);
    }

    match (event.resolved_start(), event.display_end()) {
        (Some(start), Some(end)) => format!(
            "{}-{} {}",
            start.format("%H:%M"),
            end.format("%H:%M"),
            event.title
        ),
        (Some(start), None) => format!("{}       {}", start.format("%H:%M"), event.title),
        _ => event.title.clone(),
    }
}
