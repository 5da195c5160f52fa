use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

pub const EVENT_DEFAULT_COLOR: &str = "#deb887";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub attend_date: Option<NaiveDateTime>,
    pub all_day: bool,
    pub color: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl Event {
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(EVENT_DEFAULT_COLOR)
    }

    /// An event without a usable start/end pair or attend date cannot be
    /// placed on the calendar and only renders as an untimed item.
    pub const fn is_temporally_valid(&self) -> bool {
        (self.start.is_some() && self.end.is_some()) || self.attend_date.is_some()
    }

    /// The start instant used for day matching and ordering, falling back
    /// to the attend date when no explicit start survived parsing.
    pub const fn resolved_start(&self) -> Option<NaiveDateTime> {
        match self.start {
            Some(start) => Some(start),
            None => self.attend_date,
        }
    }

    pub fn resolved_start_date(&self) -> Option<NaiveDate> {
        self.resolved_start().map(|start| start.date())
    }

    /// Whether the event spans a calendar-day boundary. All-day events
    /// always count as multi-day; otherwise both instants must exist and
    /// their calendar days must differ. An event crossing midnight counts
    /// even when it lasts under 24 hours.
    pub fn is_multi_day(&self) -> bool {
        if self.all_day {
            return true;
        }

        match (self.start, self.end) {
            (Some(start), Some(end)) => start.date() != end.date(),
            _ => false,
        }
    }

    /// The (start, end) pair agenda-style views work with. Events carrying
    /// only an attend date get a synthetic one-hour range so list views
    /// still have something to lay out.
    pub fn agenda_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        if let (Some(start), Some(end)) = (self.start, self.end) {
            return Some((start, end));
        }

        self.attend_date
            .map(|attend| (attend, add_hours(attend, 1)))
    }

    /// End instant for display purposes, synthesized from the attend date
    /// when only a point in time is known.
    pub fn display_end(&self) -> Option<NaiveDateTime> {
        self.end
            .or_else(|| self.attend_date.map(|attend| add_hours(attend, 1)))
    }
}

/// Advances `date` by the given signed hour count, leaving the input
/// untouched. Saturates to the input when the arithmetic leaves the
/// representable range.
pub fn add_hours(date: NaiveDateTime, hours: i64) -> NaiveDateTime {
    date.checked_add_signed(TimeDelta::hours(hours)).unwrap_or(date)
}
