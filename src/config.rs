use std::path::{Path, PathBuf};
use std::str::FromStr as _;

use chrono_tz::Tz;

#[derive(Debug, serde::Deserialize)]
pub struct Config {
    pub events: PathBuf,
    #[serde(default)]
    pub display: Display,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Display {
    pub timezone: Option<String>,
    #[serde(default = "default_agenda_days")]
    pub agenda_days: u32,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            timezone: None,
            agenda_days: default_agenda_days(),
        }
    }
}

impl Display {
    pub fn timezone(&self) -> Tz {
        match self.timezone.as_deref() {
            Some(name) => Tz::from_str(name).unwrap_or_else(|_| {
                log::warn!("Unknown timezone '{name}', falling back to UTC");

                Tz::UTC
            }),
            None => Tz::UTC,
        }
    }
}

pub fn init(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let string = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&string)?;

    Ok(config)
}

const fn default_agenda_days() -> u32 {
    7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_defaults_apply() {
        let config: Config = toml::from_str(r#"events = "events.toml""#).expect("minimal config");

        assert_eq!(config.events, PathBuf::from("events.toml"));
        assert_eq!(config.display.agenda_days, 7);
        assert_eq!(config.display.timezone(), Tz::UTC);
    }

    #[test]
    fn timezone_parses_iana_names() {
        let display = Display {
            timezone: Some("Europe/Berlin".to_owned()),
            agenda_days: 7,
        };

        assert_eq!(display.timezone(), Tz::Europe__Berlin);
    }

    #[test]
    fn unknown_timezone_falls_back_to_utc() {
        let display = Display {
            timezone: Some("Mars/Olympus_Mons".to_owned()),
            agenda_days: 7,
        };

        assert_eq!(display.timezone(), Tz::UTC);
    }
}
