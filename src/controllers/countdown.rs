use chrono::{DateTime, Local};

/// How long after its start an interview still counts as "In progress".
pub const FINISHED_GRACE_MINUTES: i64 = 30;
/// Remaining minutes at or below which an upcoming interview is flagged.
pub const SOON_THRESHOLD_MINUTES: i64 = 15;

const MINUTE_MS: i64 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStyle {
    Normal,
    Soon,
    Late,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    pub label: String,
    pub style: CountdownStyle,
}

pub fn classify_countdown(now: DateTime<Local>, scheduled: DateTime<Local>) -> Countdown {
    let remaining_ms = scheduled.signed_duration_since(now).num_milliseconds();

    if remaining_ms <= -FINISHED_GRACE_MINUTES * MINUTE_MS {
        return Countdown {
            label: "Finished".to_string(),
            style: CountdownStyle::Late,
        };
    }
    if remaining_ms < 0 {
        return Countdown {
            label: "In progress".to_string(),
            style: CountdownStyle::Soon,
        };
    }

    let minutes = remaining_ms / MINUTE_MS;
    let (hours, rem) = (minutes / 60, minutes % 60);
    let label = if hours > 0 {
        format!("{hours}h {rem}m")
    } else {
        format!("{rem} min")
    };
    let style = if minutes <= SOON_THRESHOLD_MINUTES {
        CountdownStyle::Soon
    } else {
        CountdownStyle::Normal
    };

    Countdown { label, style }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn formats_hours_and_minutes() {
        let now = noon();
        let c = classify_countdown(now, now + TimeDelta::minutes(135));
        assert_eq!(c.label, "2h 15m");
        assert_eq!(c.style, CountdownStyle::Normal);

        let c = classify_countdown(now, now + TimeDelta::minutes(60));
        assert_eq!(c.label, "1h 0m");

        let c = classify_countdown(now, now + TimeDelta::seconds(59 * 60 + 59));
        assert_eq!(c.label, "59 min");
    }

    #[test]
    fn soon_applies_at_exactly_fifteen_minutes() {
        let now = noon();
        let at = classify_countdown(now, now + TimeDelta::minutes(15));
        assert_eq!(at.label, "15 min");
        assert_eq!(at.style, CountdownStyle::Soon);

        let before = classify_countdown(now, now + TimeDelta::minutes(16));
        assert_eq!(before.style, CountdownStyle::Normal);

        let start = classify_countdown(now, now);
        assert_eq!(start.label, "0 min");
        assert_eq!(start.style, CountdownStyle::Soon);
    }

    #[test]
    fn finished_at_exactly_thirty_minutes_past() {
        let now = noon();
        let running = classify_countdown(now, now - TimeDelta::seconds(30 * 60 - 1));
        assert_eq!(running.label, "In progress");
        assert_eq!(running.style, CountdownStyle::Soon);

        let done = classify_countdown(now, now - TimeDelta::minutes(30));
        assert_eq!(done.label, "Finished");
        assert_eq!(done.style, CountdownStyle::Late);

        let just_started = classify_countdown(now, now - TimeDelta::milliseconds(1));
        assert_eq!(just_started.label, "In progress");
    }
}
