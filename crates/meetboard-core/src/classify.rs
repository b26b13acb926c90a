//! Temporal classification of events against a reference instant.

use chrono::{DateTime, Duration, Utc};

use crate::event::Classification;

/// Classifies `[start, end)` against `now`.
///
/// Rules, first match wins:
/// - `start <= now < end` is [`Classification::Ongoing`]
/// - `0 <= start - now < imminence_window` is [`Classification::ImminentUpcoming`]
/// - `now >= end` is [`Classification::Past`]
/// - anything else is [`Classification::Upcoming`]
pub fn classify(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
    imminence_window: Duration,
) -> Classification {
    if start <= now && now < end {
        return Classification::Ongoing;
    }

    let until_start = start - now;
    if until_start >= Duration::zero() && until_start < imminence_window {
        return Classification::ImminentUpcoming;
    }

    if now >= end {
        Classification::Past
    } else {
        Classification::Upcoming
    }
}

/// Classifier bound to a fixed imminence window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindowEvaluator {
    imminence_window: Duration,
}

impl TimeWindowEvaluator {
    /// Creates an evaluator with the given imminence window.
    pub fn new(imminence_window: Duration) -> Self {
        Self { imminence_window }
    }

    /// Returns the imminence window.
    pub fn imminence_window(&self) -> Duration {
        self.imminence_window
    }

    /// Classifies `[start, end)` against `now`. See [`classify`].
    pub fn classify(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Classification {
        classify(start, end, now, self.imminence_window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, h, min, s).unwrap()
    }

    fn evaluator() -> TimeWindowEvaluator {
        TimeWindowEvaluator::new(Duration::minutes(10))
    }

    mod ongoing {
        use super::*;

        #[test]
        fn start_is_inclusive() {
            let c = evaluator().classify(utc(10, 0, 0), utc(11, 0, 0), utc(10, 0, 0));
            assert_eq!(c, Classification::Ongoing);
        }

        #[test]
        fn middle_of_meeting() {
            let c = evaluator().classify(utc(10, 0, 0), utc(11, 0, 0), utc(10, 30, 0));
            assert_eq!(c, Classification::Ongoing);
        }

        #[test]
        fn last_second() {
            let c = evaluator().classify(utc(10, 0, 0), utc(11, 0, 0), utc(10, 59, 59));
            assert_eq!(c, Classification::Ongoing);
        }

        #[test]
        fn end_is_exclusive() {
            let c = evaluator().classify(utc(10, 0, 0), utc(11, 0, 0), utc(11, 0, 0));
            assert_eq!(c, Classification::Past);
        }
    }

    mod imminence {
        use super::*;

        #[test]
        fn just_inside_window() {
            let now = utc(9, 0, 0);
            let start = now + Duration::minutes(9) + Duration::seconds(59);
            let c = evaluator().classify(start, start + Duration::hours(1), now);
            assert_eq!(c, Classification::ImminentUpcoming);
        }

        #[test]
        fn exactly_at_window_edge_is_upcoming() {
            let now = utc(9, 0, 0);
            let start = now + Duration::minutes(10);
            let c = evaluator().classify(start, start + Duration::hours(1), now);
            assert_eq!(c, Classification::Upcoming);
        }

        #[test]
        fn just_outside_window() {
            let now = utc(9, 0, 0);
            let start = now + Duration::minutes(10) + Duration::seconds(1);
            let c = evaluator().classify(start, start + Duration::hours(1), now);
            assert_eq!(c, Classification::Upcoming);
        }

        #[test]
        fn custom_window() {
            let evaluator = TimeWindowEvaluator::new(Duration::minutes(30));
            let now = utc(9, 0, 0);
            let start = now + Duration::minutes(20);
            let c = evaluator.classify(start, start + Duration::hours(1), now);
            assert_eq!(c, Classification::ImminentUpcoming);
        }

        #[test]
        fn zero_window_never_imminent() {
            let evaluator = TimeWindowEvaluator::new(Duration::zero());
            let now = utc(9, 0, 0);
            let start = now + Duration::seconds(1);
            let c = evaluator.classify(start, start + Duration::hours(1), now);
            assert_eq!(c, Classification::Upcoming);
        }
    }

    #[test]
    fn far_future_is_upcoming() {
        let c = evaluator().classify(utc(14, 0, 0), utc(15, 0, 0), utc(9, 0, 0));
        assert_eq!(c, Classification::Upcoming);
    }

    #[test]
    fn finished_is_past() {
        let c = evaluator().classify(utc(8, 0, 0), utc(9, 0, 0), utc(12, 0, 0));
        assert_eq!(c, Classification::Past);
    }

    #[test]
    fn idempotent_for_fixed_now() {
        let now = utc(9, 55, 0);
        let first = evaluator().classify(utc(10, 0, 0), utc(11, 0, 0), now);
        let second = evaluator().classify(utc(10, 0, 0), utc(11, 0, 0), now);
        assert_eq!(first, second);
        assert_eq!(first, Classification::ImminentUpcoming);
    }

    #[test]
    fn result_depends_on_now() {
        let start = utc(10, 0, 0);
        let end = utc(11, 0, 0);
        assert_eq!(
            classify(start, end, utc(9, 0, 0), Duration::minutes(10)),
            Classification::Upcoming
        );
        assert_eq!(
            classify(start, end, utc(9, 55, 0), Duration::minutes(10)),
            Classification::ImminentUpcoming
        );
        assert_eq!(
            classify(start, end, utc(10, 5, 0), Duration::minutes(10)),
            Classification::Ongoing
        );
    }
}
