use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use uuid::Uuid;

use super::event::Event;

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

#[derive(Debug, serde::Deserialize)]
struct EventsFile {
    #[serde(default)]
    events: Vec<RawEvent>,
}

/// An event record as it appears in the events file. Date fields may hold
/// a native TOML datetime, a free-form string, or anything else entirely;
/// nothing here is trusted until it passes [`parse_date`].
#[derive(Debug, Default, serde::Deserialize)]
pub struct RawEvent {
    pub id: Option<String>,
    pub title: Option<String>,
    pub start: Option<toml::Value>,
    pub end: Option<toml::Value>,
    pub attend_date: Option<toml::Value>,
    #[serde(default)]
    pub all_day: bool,
    pub color: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl RawEvent {
    /// Narrows the record into a typed [`Event`]. This never fails: fields
    /// that do not resolve become `None` and the event degrades to however
    /// much of the calendar it can still participate in. A missing id is
    /// replaced by a UUIDv5 derived from the title, stable across loads.
    pub fn build(self) -> Event {
        let title = self.title.unwrap_or_else(|| "<untitled>".to_owned());
        let id = self.id.unwrap_or_else(|| {
            Uuid::new_v5(&Uuid::NAMESPACE_OID, title.as_bytes()).to_string()
        });

        Event {
            id,
            title,
            start: self.start.as_ref().and_then(parse_date),
            end: self.end.as_ref().and_then(parse_date),
            attend_date: self.attend_date.as_ref().and_then(parse_date),
            all_day: self.all_day,
            color: self.color,
            location: self.location,
            description: self.description,
        }
    }
}

/// Validated parse for a raw date value. Every timestamp entering the
/// crate funnels through here; a value that does not resolve to a real
/// instant is `None`, never an error.
pub fn parse_date(value: &toml::Value) -> Option<NaiveDateTime> {
    match value {
        toml::Value::Datetime(datetime) => from_toml_datetime(datetime),
        toml::Value::String(text) => from_text(text),
        _ => None,
    }
}

pub fn load_events(path: &Path) -> Result<Vec<Event>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(LoadError::Io)?;

    events_from_str(&text)
}

pub fn events_from_str(text: &str) -> Result<Vec<Event>, LoadError> {
    let file: EventsFile = toml::from_str(text).map_err(LoadError::Parse)?;

    Ok(file
        .events
        .into_iter()
        .map(RawEvent::build)
        .inspect(|event| {
            if !event.is_temporally_valid() {
                log::warn!("Event '{}' has no usable start or attend date", event.title);
            }
        })
        .collect())
}

fn from_toml_datetime(datetime: &toml::value::Datetime) -> Option<NaiveDateTime> {
    let date = datetime.date.as_ref()?;
    let date = NaiveDate::from_ymd_opt(
        i32::from(date.year),
        u32::from(date.month),
        u32::from(date.day),
    )?;

    let time = match &datetime.time {
        Some(time) => NaiveTime::from_hms_nano_opt(
            u32::from(time.hour),
            u32::from(time.minute),
            u32::from(time.second),
            time.nanosecond,
        )?,
        None => NaiveTime::MIN,
    };

    // Offset datetimes are normalized to UTC, which is what the crate
    // stores throughout.
    let offset_minutes = match datetime.offset {
        Some(toml::value::Offset::Custom { minutes }) => i64::from(minutes),
        _ => 0,
    };

    date.and_time(time)
        .checked_sub_signed(TimeDelta::minutes(offset_minutes))
}

fn from_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();

    if let Ok(instant) = chrono::DateTime::parse_from_rfc3339(text) {
        return Some(instant.naive_utc());
    }

    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(instant) = NaiveDateTime::parse_from_str(text, format) {
            return Some(instant);
        }
    }

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}
