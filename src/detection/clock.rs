//! Textual timestamp handling.
//!
//! Load times are entered as `"HH:MM"` or `"DD/MM/YYYY HH:MM"`. The date
//! portion is never parsed; it is only used verbatim as a grouping key.

/// Minutes since midnight parsed from an `"HH:MM"` clock string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(pub u32);

impl ClockTime {
    /// Parses `"HH:MM"` as `hours * 60 + minutes`.
    ///
    /// Both parts must be unsigned integers. Hours and minutes are not
    /// range-checked. Returns `None` for anything else.
    pub fn parse(clock: &str) -> Option<Self> {
        let (hours, minutes) = clock.trim().split_once(':')?;
        let hours: u32 = hours.trim().parse().ok()?;
        let minutes: u32 = minutes.trim().parse().ok()?;
        hours.checked_mul(60)?.checked_add(minutes).map(ClockTime)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u32 {
        self.0
    }
}

/// Splits a load time into `(date_key, clock)`.
///
/// The date key is the text before the first space. Times without a space
/// carry no date and share the empty key; the whole string is then the
/// clock. An empty clock after the space defaults to `"00:00"`.
pub fn split_timestamp(time: &str) -> (&str, &str) {
    match time.split_once(' ') {
        Some((date, clock)) if clock.trim().is_empty() => (date, "00:00"),
        Some((date, clock)) => (date, clock),
        None => ("", time),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock() {
        assert_eq!(ClockTime::parse("10:04"), Some(ClockTime(604)));
        assert_eq!(ClockTime::parse("00:00"), Some(ClockTime(0)));
        assert_eq!(ClockTime::parse("7:5"), Some(ClockTime(425)));
        assert_eq!(ClockTime::parse("not-a-time"), None);
        assert_eq!(ClockTime::parse("10:xx"), None);
        assert_eq!(ClockTime::parse("10"), None);
        assert_eq!(ClockTime::parse("-1:30"), None);
        assert_eq!(ClockTime::parse(""), None);
    }

    #[test]
    fn test_split_timestamp() {
        assert_eq!(split_timestamp("14/10/2026 10:00"), ("14/10/2026", "10:00"));
        assert_eq!(split_timestamp("10:00"), ("", "10:00"));
        assert_eq!(split_timestamp("14/10/2026 "), ("14/10/2026", "00:00"));
        assert_eq!(split_timestamp("not-a-time"), ("", "not-a-time"));
    }
}
