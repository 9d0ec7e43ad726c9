//! Time source abstraction.

use chrono::{Local, NaiveDateTime};

/// A source of the current wall-clock time.
///
/// Injected into the backup parameter builder so file-name generation is
/// deterministic under test.
pub trait Clock: Send + Sync {
    /// The current local time.
    fn now(&self) -> NaiveDateTime;
}

/// The process-local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_fixed_clock_returns_its_instant() {
        let instant = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(13, 5, 0)
            .unwrap();
        assert_eq!(FixedClock(instant).now(), instant);
    }
}
