//! Workday rules: shift start, lunch break and overtime.

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// Shift boundaries and break policy shared by every unit of a run.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use roomforge_core::workday::Workday;
///
/// let day = Workday::default();
/// assert_eq!(day.finish_time(30.0), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
/// assert!(day.is_overtime(361.0));
/// assert!(!day.is_overtime(360.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Workday {
    /// Time at which every unit starts working.
    #[serde(with = "clock")]
    pub day_start: NaiveTime,

    /// Minutes of work available before a unit is in overtime.
    pub length_minutes: f64,

    /// Work minutes after which the lunch break becomes due.
    pub break_threshold_minutes: f64,

    /// Length of the lunch break.
    pub break_minutes: f64,
}

impl Default for Workday {
    fn default() -> Self {
        Self {
            day_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            length_minutes: 360.0,
            break_threshold_minutes: 105.0,
            break_minutes: 15.0,
        }
    }
}

impl Workday {
    /// Clock time reached after `minutes` of effective work.
    ///
    /// Wraps past midnight rather than failing.
    pub fn finish_time(&self, minutes: f64) -> NaiveTime {
        let millis = (minutes * 60_000.0).round() as i64;
        let (time, _) = self
            .day_start
            .overflowing_add_signed(TimeDelta::milliseconds(millis));
        time
    }

    /// Returns true if the effective time runs past the end of the shift.
    pub fn is_overtime(&self, minutes: f64) -> bool {
        minutes > self.length_minutes
    }
}

/// Serde helpers for `HH:MM` clock values.
pub mod clock {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractional_minutes_truncate_on_display() {
        let day = Workday::default();
        let finish = day.finish_time(22.5);
        assert_eq!(finish.format("%H:%M").to_string(), "09:22");
    }

    #[test]
    fn test_finish_time_wraps() {
        let day = Workday::default();
        let finish = day.finish_time(15.0 * 60.0 + 30.0);
        assert_eq!(finish, NaiveTime::from_hms_opt(0, 30, 0).unwrap());
    }

    #[test]
    fn test_clock_roundtrip_through_json() {
        #[derive(Serialize, Deserialize)]
        struct Probe {
            #[serde(with = "clock")]
            at: NaiveTime,
        }

        let json = serde_json::to_string(&Probe {
            at: NaiveTime::from_hms_opt(14, 5, 0).unwrap(),
        })
        .unwrap();
        assert_eq!(json, r#"{"at":"14:05"}"#);

        let back: Probe = serde_json::from_str(&json).unwrap();
        assert_eq!(back.at, NaiveTime::from_hms_opt(14, 5, 0).unwrap());
    }
}
