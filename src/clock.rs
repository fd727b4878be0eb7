use chrono::{Datelike, Local, NaiveDateTime};

/// Source of "now" for validation and age computation.
///
/// Returns local wall-clock time; the crate does no timezone conversion of
/// its own. Swap in [`FixedClock`] to make results reproducible.
pub trait Clock {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;

    /// Current calendar year, read afresh on every call
    fn current_year(&self) -> i32 {
        self.now().year()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// The host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_fixed_clock_returns_given_instant() {
        let clock = FixedClock(at(2025, 10, 2));
        assert_eq!(clock.now(), at(2025, 10, 2));
        assert_eq!(clock.current_year(), 2025);
    }

    #[test]
    fn test_clock_trait_object_works() {
        let clock: Box<dyn Clock> = Box::new(FixedClock(at(2024, 1, 15)));
        assert_eq!(clock.current_year(), 2024);
    }

    #[test]
    fn test_clock_by_reference() {
        let clock = FixedClock(at(1999, 12, 31));
        let by_ref = &clock;
        assert_eq!(by_ref.now(), clock.now());
    }

    #[test]
    fn test_system_clock_year_is_plausible() {
        assert!(SystemClock.current_year() >= 2024);
    }
}
