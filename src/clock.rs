//! Sources of "now" and the capability of resolving an argument to an instant.

use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::{FluentDate, calendar::truncate_to_millis, prelude::*};

/// Supplies the current instant.
///
/// Every operation that depends on "now" has a `_with` variant taking a
/// clock, so tests can pin time with [`FixedClock`].
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The platform wall clock.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        truncate_to_millis(Utc::now())
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(truncate_to_millis(instant))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        truncate_to_millis(self.0)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Anything that can stand in for "the other date" of a comparison or
/// difference.
///
/// Raw instants are used as-is. A clock resolves to its current reading, so
/// passing [`SystemClock`] compares against now.
pub trait ToInstant {
    fn to_instant(&self) -> DateTime<Utc>;
}

impl ToInstant for FluentDate {
    fn to_instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl ToInstant for DateTime<Utc> {
    fn to_instant(&self) -> DateTime<Utc> {
        truncate_to_millis(*self)
    }
}

impl ToInstant for SystemTime {
    fn to_instant(&self) -> DateTime<Utc> {
        truncate_to_millis(DateTime::<Utc>::from(*self))
    }
}

impl ToInstant for SystemClock {
    fn to_instant(&self) -> DateTime<Utc> {
        self.now()
    }
}

impl ToInstant for FixedClock {
    fn to_instant(&self) -> DateTime<Utc> {
        self.now()
    }
}

impl<T: ToInstant + ?Sized> ToInstant for &T {
    fn to_instant(&self) -> DateTime<Utc> {
        (**self).to_instant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_fixed_clock_is_frozen() {
        let instant = Utc.with_ymd_and_hms(2024, 12, 25, 10, 30, 0).unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_fixed_clock_from_instant() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let clock: FixedClock = instant.into();
        assert_eq!(clock.to_instant(), instant);
    }

    #[test]
    fn test_readings_are_millisecond_precision() {
        let instant = Utc
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        assert_eq!(FixedClock::new(instant).now().nanosecond(), 123_000_000);
        assert_eq!(FixedClock::from(instant).now().nanosecond(), 123_000_000);
        assert_eq!(instant.to_instant().nanosecond(), 123_000_000);
        assert_eq!(SystemClock.now().nanosecond() % 1_000_000, 0);
    }

    #[test]
    fn test_system_clock_tracks_now() {
        let before = Utc::now().timestamp_millis();
        let reading = SystemClock.to_instant().timestamp_millis();
        let after = Utc::now().timestamp_millis();
        assert!(before - 1 <= reading && reading <= after);
    }

    #[test]
    fn test_system_time_resolves() {
        let instant = SystemTime::UNIX_EPOCH.to_instant();
        assert_eq!(instant.timestamp_millis(), 0);
    }

    #[test]
    fn test_reference_forwarding() {
        let instant = Utc.with_ymd_and_hms(2000, 6, 15, 12, 0, 0).unwrap();
        let clock = FixedClock::new(instant);
        let by_ref: &dyn Clock = &clock;
        assert_eq!(by_ref.now(), instant);
        assert_eq!((&&instant).to_instant(), instant);
    }
}
