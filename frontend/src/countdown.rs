use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Time left until a target, split into display units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// `None` once the target has passed.
    pub fn until(target_ms: i64, now_ms: i64) -> Option<Self> {
        let distance = target_ms - now_ms;
        if distance < 0 {
            return None;
        }
        Some(Self {
            days: distance / MS_PER_DAY,
            hours: (distance % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (distance % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (distance % MS_PER_MINUTE) / MS_PER_SECOND,
        })
    }

    pub fn display(&self) -> CountdownDisplay {
        CountdownDisplay {
            d: pad(self.days),
            h: pad(self.hours),
            m: pad(self.minutes),
            s: pad(self.seconds),
        }
    }
}

/// What the countdown shows: two digits per unit, days may grow past two.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountdownDisplay {
    pub d: String,
    pub h: String,
    pub m: String,
    pub s: String,
}

impl Default for CountdownDisplay {
    fn default() -> Self {
        Self {
            d: "00".to_string(),
            h: "00".to_string(),
            m: "00".to_string(),
            s: "00".to_string(),
        }
    }
}

fn pad(value: i64) -> String {
    format!("{:02}", value)
}

/// Parses a configured local timestamp (`YYYY-MM-DDTHH:MM:SS`) into epoch ms.
pub fn parse_local_target(raw: &str) -> Option<i64> {
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok()?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|at: DateTime<Local>| at.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: i64 = MS_PER_SECOND;
    const MINUTE: i64 = MS_PER_MINUTE;
    const HOUR: i64 = MS_PER_HOUR;
    const DAY: i64 = MS_PER_DAY;

    #[test]
    fn decomposes_and_pads() {
        let now = 1_700_000_000_000;
        let target = now + DAY + 2 * HOUR + 3 * MINUTE + 4 * SECOND;
        let display = Remaining::until(target, now).unwrap().display();
        assert_eq!(
            display,
            CountdownDisplay {
                d: "01".into(),
                h: "02".into(),
                m: "03".into(),
                s: "04".into(),
            }
        );
    }

    #[test]
    fn partial_seconds_round_down() {
        let remaining = Remaining::until(59 * SECOND + 999, 0).unwrap();
        assert_eq!(remaining.seconds, 59);
        assert_eq!(remaining.minutes, 0);
    }

    #[test]
    fn days_are_not_truncated() {
        let display = Remaining::until(123 * DAY, 0).unwrap().display();
        assert_eq!(display.d, "123");
        assert_eq!(display.h, "00");
    }

    #[test]
    fn fields_are_always_two_chars_below_ten_days() {
        let mut offset = 0;
        while offset < 10 * DAY {
            let display = Remaining::until(offset, 0).unwrap().display();
            for field in [&display.d, &display.h, &display.m, &display.s] {
                assert_eq!(field.len(), 2, "offset {offset}");
            }
            offset += 7 * HOUR + 13 * MINUTE + 17 * SECOND;
        }
    }

    #[test]
    fn exact_target_is_all_zero() {
        assert_eq!(
            Remaining::until(5_000, 5_000).unwrap().display(),
            CountdownDisplay::default()
        );
    }

    #[test]
    fn past_target_yields_nothing() {
        assert_eq!(Remaining::until(1_000, 1_001), None);
    }

    #[test]
    fn parses_configured_dates() {
        let opens = parse_local_target(crate::config::REGISTRATION_OPENS).unwrap();
        let finals = parse_local_target(crate::config::TOURNAMENT_DATE).unwrap();
        assert!(finals > opens);
        assert_eq!(parse_local_target("next tuesday"), None);
    }
}
