//! Time source for message timestamps

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};

/// Source of the current time
///
/// Messages capture their timestamp once, at construction, from the clock
/// owned by the messenger that builds them.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }

    /// Parse an RFC 3339 string such as `2025-01-08T10:30:45Z`
    pub fn parse(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(rfc3339).map(Self::new)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }
}

/// Render a timestamp as RFC 3339 with whole seconds, `Z` for UTC
///
/// # Examples
///
/// ```
/// use status_messenger::core::clock::{format_timestamp, Clock, FixedClock};
///
/// let clock = FixedClock::parse("2025-01-08T10:30:45.123+02:00").unwrap();
/// assert_eq!(format_timestamp(&clock.now()), "2025-01-08T10:30:45+02:00");
/// ```
pub fn format_timestamp(instant: &DateTime<FixedOffset>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
