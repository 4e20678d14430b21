use serde::{Deserialize, Serialize};

use super::TimeOfDay;

/// A shift's start and end on one calendar date.
///
/// No ordering constraint between the endpoints: `end < start` means the
/// shift runs overnight into the next day. `end == start` is classified as
/// same-day (a zero-length shift, not a 24-hour one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInterval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl ShiftInterval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    pub fn is_overnight(self) -> bool {
        self.end < self.start
    }
}

/// Whether two shift intervals on the same date share any time.
///
/// Endpoints are half-open (start inclusive, end exclusive), so back-to-back
/// shifts do not overlap. An overnight interval occupies `[start, 24:00)` on
/// its date plus `[00:00, end)` on the next; a same-day interval overlaps it
/// by intersecting either piece. Two overnight intervals both straddle
/// midnight and are always treated as overlapping.
///
/// This is the single conflict predicate for the whole service; every
/// conflict check must route through it.
pub fn overlaps(a: ShiftInterval, b: ShiftInterval) -> bool {
    match (a.is_overnight(), b.is_overnight()) {
        (true, true) => true,
        (true, false) => b.start < a.end || a.start < b.end,
        (false, true) => a.start < b.end || b.start < a.end,
        (false, false) => a.start < b.end && b.start < a.end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(start: &str, end: &str) -> ShiftInterval {
        ShiftInterval::new(start.parse().unwrap(), end.parse().unwrap())
    }

    #[test]
    fn same_day_overlapping() {
        assert!(overlaps(interval("09:00", "17:00"), interval("16:00", "18:00")));
    }

    #[test]
    fn same_day_disjoint() {
        assert!(!overlaps(interval("09:00", "12:00"), interval("13:00", "17:00")));
    }

    #[test]
    fn back_to_back_never_overlap() {
        assert!(!overlaps(interval("09:00", "17:00"), interval("17:00", "20:00")));
        assert!(!overlaps(interval("17:00", "20:00"), interval("09:00", "17:00")));
    }

    #[test]
    fn contained_interval_overlaps() {
        assert!(overlaps(interval("08:00", "18:00"), interval("10:00", "12:00")));
    }

    #[test]
    fn overnight_vs_same_day_overlapping() {
        // 22:00-06:00 occupies the early morning; 05:00-09:00 intersects it.
        assert!(overlaps(interval("22:00", "06:00"), interval("05:00", "09:00")));
        // And the late evening piece.
        assert!(overlaps(interval("22:00", "06:00"), interval("21:00", "23:00")));
    }

    #[test]
    fn overnight_vs_same_day_disjoint() {
        assert!(!overlaps(interval("22:00", "06:00"), interval("10:00", "18:00")));
        assert!(!overlaps(interval("10:00", "18:00"), interval("22:00", "06:00")));
    }

    #[test]
    fn overnight_back_to_back_does_not_overlap() {
        // Day shift ending exactly where the night shift starts.
        assert!(!overlaps(interval("22:00", "06:00"), interval("06:00", "14:00")));
        assert!(!overlaps(interval("14:00", "22:00"), interval("22:00", "06:00")));
    }

    #[test]
    fn two_overnight_intervals_always_overlap() {
        assert!(overlaps(interval("22:00", "06:00"), interval("23:00", "07:00")));
        // Even when their clock ranges look disjoint, both cover midnight.
        assert!(overlaps(interval("23:00", "01:00"), interval("03:00", "02:00")));
    }

    #[test]
    fn zero_length_interval_is_same_day() {
        let point = interval("12:00", "12:00");
        assert!(!point.is_overnight());
        // Half-open: conflicts only with an interval strictly containing it.
        assert!(overlaps(point, interval("09:00", "17:00")));
        assert!(!overlaps(point, interval("12:00", "14:00")));
        assert!(!overlaps(point, interval("09:00", "12:00")));
    }

    #[test]
    fn symmetric_over_sample_grid() {
        let samples = [
            interval("00:00", "08:00"),
            interval("09:00", "17:00"),
            interval("16:00", "18:00"),
            interval("17:00", "20:00"),
            interval("22:00", "06:00"),
            interval("23:00", "07:00"),
            interval("12:00", "12:00"),
            interval("06:00", "14:00"),
        ];
        for a in samples {
            for b in samples {
                assert_eq!(overlaps(a, b), overlaps(b, a), "asymmetric for {a:?} vs {b:?}");
            }
        }
    }
}
