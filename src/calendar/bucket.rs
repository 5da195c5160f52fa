use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::event::Event;

/// Events whose resolved start falls on `day`. Compact views use this so
/// an event renders exactly once, on the day it begins.
pub fn events_starting_on<'a>(events: &'a [Event], day: NaiveDate) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| event.resolved_start_date() == Some(day))
        .collect()
}

/// Multi-day events continuing through `day`. The start day itself is
/// excluded, that cell belongs to [`events_starting_on`]. Events without
/// both instants never span, no attend-date fallback applies here.
pub fn spanning_events_on<'a>(events: &'a [Event], day: NaiveDate) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| {
            if !event.is_multi_day() {
                return false;
            }

            match (event.start, event.end) {
                (Some(start), Some(end)) => day > start.date() && day <= end.date(),
                _ => false,
            }
        })
        .collect()
}

/// Every event touching `day`: starting on it, ending on it, or running
/// straight through it. Grid views use this to fill a cell in one pass.
pub fn events_touching<'a>(events: &'a [Event], day: NaiveDate) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| match event.start {
            Some(start) => touches(start, event.end, day),
            None => false,
        })
        .collect()
}

/// Like [`events_touching`], but events without a usable start/end pair
/// fall back to the attend date with a synthetic one-hour end, so
/// point-in-time items still show up in list views. Sorted by start.
pub fn agenda_events_on<'a>(events: &'a [Event], day: NaiveDate) -> Vec<&'a Event> {
    let mut bucket: Vec<&Event> = events
        .iter()
        .filter(|event| {
            event
                .agenda_range()
                .is_some_and(|(start, end)| touches(start, Some(end), day))
        })
        .collect();

    bucket.sort_by(|a, b| compare_by_start(a, b));

    bucket
}

/// Global ordering: multi-day events first, then by resolved start.
/// Events with no resolvable start sort last. Use with a stable sort so
/// equal keys keep their input order.
pub fn compare_events(a: &Event, b: &Event) -> Ordering {
    b.is_multi_day()
        .cmp(&a.is_multi_day())
        .then_with(|| sort_start(a).cmp(&sort_start(b)))
}

/// In-bucket ordering: purely by resolved start. Multi-day events get no
/// special treatment, calling code renders those in their own row.
pub fn compare_by_start(a: &Event, b: &Event) -> Ordering {
    sort_start(a).cmp(&sort_start(b))
}

fn sort_start(event: &Event) -> NaiveDateTime {
    event.resolved_start().unwrap_or(NaiveDateTime::MAX)
}

fn touches(start: NaiveDateTime, end: Option<NaiveDateTime>, day: NaiveDate) -> bool {
    if start.date() == day {
        return true;
    }

    let Some(end) = end else {
        return false;
    };

    if end.date() == day {
        return true;
    }

    let instant = day.and_time(NaiveTime::MIN);

    start < instant && instant < end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(text: &str) -> NaiveDate {
        text.parse().expect("valid test date")
    }

    fn event(id: &str, start: Option<&str>, end: Option<&str>) -> Event {
        Event {
            id: id.to_owned(),
            title: id.to_owned(),
            start: start.map(|text| text.parse().expect("valid test datetime")),
            end: end.map(|text| text.parse().expect("valid test datetime")),
            attend_date: None,
            all_day: false,
            color: None,
            location: None,
            description: None,
        }
    }

    fn attend_event(id: &str, attend: &str) -> Event {
        Event {
            attend_date: Some(attend.parse().expect("valid test datetime")),
            ..event(id, None, None)
        }
    }

    fn ids(bucket: &[&Event]) -> Vec<String> {
        bucket.iter().map(|event| event.id.clone()).collect()
    }

    #[test]
    fn strict_filter_matches_start_day_only() {
        let events = vec![event(
            "offsite",
            Some("2024-06-01T09:00:00"),
            Some("2024-06-05T17:00:00"),
        )];

        assert_eq!(ids(&events_starting_on(&events, day("2024-06-01"))), ["offsite"]);
        assert!(events_starting_on(&events, day("2024-06-03")).is_empty());
        assert!(events_starting_on(&events, day("2024-06-05")).is_empty());
    }

    #[test]
    fn strict_filter_falls_back_to_attend_date() {
        let events = vec![attend_event("lunch", "2024-06-10T14:00:00")];

        assert_eq!(ids(&events_starting_on(&events, day("2024-06-10"))), ["lunch"]);
        assert!(events_starting_on(&events, day("2024-06-11")).is_empty());
    }

    #[test]
    fn strict_filter_never_includes_undated_events() {
        let mut broken = event("broken", None, None);
        broken.description = Some("start was unparsable".to_owned());
        let events = vec![broken];

        for offset in 0..30 {
            let probe = day("2024-06-01") + chrono::Days::new(offset);
            assert!(events_starting_on(&events, probe).is_empty());
        }
    }

    #[test]
    fn spanning_filter_excludes_the_start_day() {
        let events = vec![event(
            "offsite",
            Some("2024-06-01T09:00:00"),
            Some("2024-06-05T17:00:00"),
        )];

        assert!(spanning_events_on(&events, day("2024-06-01")).is_empty());
        assert_eq!(ids(&spanning_events_on(&events, day("2024-06-02"))), ["offsite"]);
        assert_eq!(ids(&spanning_events_on(&events, day("2024-06-05"))), ["offsite"]);
        assert!(spanning_events_on(&events, day("2024-06-06")).is_empty());
    }

    #[test]
    fn spanning_filter_has_no_attend_date_fallback() {
        let mut all_day = attend_event("vacation", "2024-06-01T00:00:00");
        all_day.all_day = true;
        let events = vec![all_day];

        // Multi-day by the all_day flag, but without a start/end pair the
        // spanning filter excludes it outright.
        assert!(events[0].is_multi_day());
        assert!(spanning_events_on(&events, day("2024-06-02")).is_empty());
    }

    #[test]
    fn touching_filter_covers_start_end_and_between() {
        let events = vec![event(
            "offsite",
            Some("2024-06-01T09:00:00"),
            Some("2024-06-05T17:00:00"),
        )];

        for text in ["2024-06-01", "2024-06-02", "2024-06-03", "2024-06-04", "2024-06-05"] {
            assert_eq!(ids(&events_touching(&events, day(text))), ["offsite"], "on {text}");
        }
        assert!(events_touching(&events, day("2024-05-31")).is_empty());
        assert!(events_touching(&events, day("2024-06-06")).is_empty());
    }

    #[test]
    fn touching_filter_includes_each_day_exactly_once() {
        let events = vec![event(
            "party",
            Some("2024-06-10T23:00:00"),
            Some("2024-06-11T01:00:00"),
        )];

        let mut included = 0;
        for offset in 0..30 {
            let probe = day("2024-06-01") + chrono::Days::new(offset);
            included += events_touching(&events, probe).len();
        }

        // Two distinct days touched, one inclusion per day.
        assert_eq!(included, 2);
    }

    #[test]
    fn agenda_filter_includes_attend_only_events() {
        let events = vec![attend_event("lunch", "2024-06-10T14:00:00")];

        assert_eq!(ids(&agenda_events_on(&events, day("2024-06-10"))), ["lunch"]);
        assert!(agenda_events_on(&events, day("2024-06-11")).is_empty());
    }

    #[test]
    fn agenda_filter_sorts_by_start() {
        let events = vec![
            event("late", Some("2024-06-10T16:00:00"), Some("2024-06-10T17:00:00")),
            attend_event("lunch", "2024-06-10T14:00:00"),
            event("early", Some("2024-06-10T08:00:00"), Some("2024-06-10T09:00:00")),
        ];

        assert_eq!(
            ids(&agenda_events_on(&events, day("2024-06-10"))),
            ["early", "lunch", "late"]
        );
    }

    #[test]
    fn filters_are_idempotent_and_do_not_mutate_input() {
        let events = vec![
            event("offsite", Some("2024-06-01T09:00:00"), Some("2024-06-05T17:00:00")),
            event("review", Some("2024-06-03T10:00:00"), Some("2024-06-03T11:00:00")),
            attend_event("lunch", "2024-06-03T12:00:00"),
        ];
        let snapshot = events.clone();

        let first = ids(&agenda_events_on(&events, day("2024-06-03")));
        let second = ids(&agenda_events_on(&events, day("2024-06-03")));

        assert_eq!(first, second);
        assert_eq!(events, snapshot);
    }

    #[test]
    fn global_sort_puts_multi_day_first() {
        let mut events = vec![
            event("review", Some("2024-06-03T10:00:00"), Some("2024-06-03T11:00:00")),
            event("offsite", Some("2024-06-01T09:00:00"), Some("2024-06-05T17:00:00")),
        ];

        events.sort_by(|a, b| compare_events(a, b));

        assert_eq!(events[0].id, "offsite");
        assert_eq!(events[1].id, "review");
    }

    #[test]
    fn global_sort_puts_undated_events_last() {
        let mut events = vec![
            event("undated", None, None),
            event("review", Some("2024-06-03T10:00:00"), Some("2024-06-03T11:00:00")),
        ];

        events.sort_by(|a, b| compare_events(a, b));

        assert_eq!(events[0].id, "review");
        assert_eq!(events[1].id, "undated");
    }

    #[test]
    fn equal_starts_keep_their_input_order() {
        let mut events = vec![
            event("first", Some("2024-06-03T10:00:00"), Some("2024-06-03T11:00:00")),
            event("second", Some("2024-06-03T10:00:00"), Some("2024-06-03T12:00:00")),
        ];

        events.sort_by(|a, b| compare_by_start(a, b));
        assert_eq!(events[0].id, "first");

        events.sort_by(|a, b| compare_events(a, b));
        assert_eq!(events[0].id, "first");
    }

    #[test]
    fn inverted_ranges_pass_through_arithmetically() {
        let events = vec![event(
            "inverted",
            Some("2024-06-05T09:00:00"),
            Some("2024-06-01T17:00:00"),
        )];

        // Day components differ, so the classifier still says multi-day,
        // and the start/end day matches still fire. Nothing rejects the
        // range, the comparisons just run as given.
        assert!(events[0].is_multi_day());
        assert_eq!(ids(&events_touching(&events, day("2024-06-05"))), ["inverted"]);
        assert_eq!(ids(&events_touching(&events, day("2024-06-01"))), ["inverted"]);
        assert!(events_touching(&events, day("2024-06-03")).is_empty());
    }
}
