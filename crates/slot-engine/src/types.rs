//! Value types for single-day scheduling: time ranges, events, and
//! meeting requests.
//!
//! All times are integer minutes since midnight. A day runs from
//! [`START_OF_DAY`] (0) to [`END_OF_DAY`] (1440). Every type here is an
//! immutable value; the engine never mutates or retains its inputs, so the
//! whole crate is trivially `Send + Sync` and safe to call from concurrent
//! request handlers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Last minute boundary of the day. Ranges are end-exclusive except for the
/// synthetic day-ending window emitted by gap extraction, which treats this
/// bound as inclusive. In the `(start, end)` integer representation both
/// conventions produce the same pair, so the asymmetry only matters at the
/// boundary; see `free_windows`.
pub const END_OF_DAY: u32 = 1440;

/// A contiguous span of minutes within a single day.
///
/// Half-open `[start, end)`: the start minute is part of the range, the end
/// minute is not. Two ranges are equal iff their `(start, end)` pairs are
/// equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: u32,
    pub end: u32,
}

impl TimeRange {
    /// The canonical whole-day range, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: END_OF_DAY,
    };

    /// Create a validated range.
    ///
    /// # Errors
    /// Returns [`SlotError::InvalidRange`] unless `0 <= start <= end <= 1440`.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start > end || end > END_OF_DAY {
            return Err(SlotError::InvalidRange { start, end });
        }
        Ok(TimeRange { start, end })
    }

    /// Length of the range in minutes.
    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Whether two half-open ranges intersect.
    ///
    /// Adjacent ranges (where one ends exactly when the other starts) do NOT
    /// overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A calendar event occupying one attendee set for one time range.
///
/// `name` is informational only; the engine never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub when: TimeRange,
    pub attendees: HashSet<String>,
}

impl Event {
    pub fn new<N, A, S>(name: N, when: TimeRange, attendees: A) -> Self
    where
        N: Into<String>,
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Event {
            name: name.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }
}

/// A request to schedule a meeting of `duration` minutes.
///
/// `attendees` must all be free for a window to qualify. `optional_attendees`
/// are accommodated when possible and dropped as a single relaxation step
/// when no window satisfies everyone. The two sets are disjoint in practice
/// but the engine does not require it. `duration` may exceed a day; such a
/// request can never be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub attendees: HashSet<String>,
    pub optional_attendees: HashSet<String>,
    pub duration: u32,
}

impl MeetingRequest {
    /// Request with mandatory attendees only.
    pub fn new<A, S>(attendees: A, duration: u32) -> Self
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MeetingRequest {
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: HashSet::new(),
            duration,
        }
    }

    /// Request with both mandatory and optional attendees.
    pub fn with_optional<A, O, S, T>(attendees: A, optional: O, duration: u32) -> Self
    where
        A: IntoIterator<Item = S>,
        O: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        MeetingRequest {
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: optional.into_iter().map(Into::into).collect(),
            duration,
        }
    }

    /// Mandatory and optional attendees combined.
    pub fn all_attendees(&self) -> HashSet<String> {
        self.attendees
            .union(&self.optional_attendees)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_inverted_range() {
        assert_eq!(
            TimeRange::new(600, 540),
            Err(SlotError::InvalidRange {
                start: 600,
                end: 540
            })
        );
    }

    #[test]
    fn new_rejects_range_past_end_of_day() {
        assert_eq!(
            TimeRange::new(0, 1441),
            Err(SlotError::InvalidRange {
                start: 0,
                end: 1441
            })
        );
    }

    #[test]
    fn new_accepts_empty_and_whole_day_ranges() {
        assert!(TimeRange::new(720, 720).is_ok());
        assert_eq!(TimeRange::new(0, 1440).unwrap(), TimeRange::WHOLE_DAY);
    }

    #[test]
    fn duration_is_end_minus_start() {
        let range = TimeRange::new(540, 600).unwrap();
        assert_eq!(range.duration(), 60);
        assert_eq!(TimeRange::WHOLE_DAY.duration(), 1440);
    }

    #[test]
    fn overlapping_ranges_detected() {
        let a = TimeRange::new(540, 600).unwrap();
        let b = TimeRange::new(570, 630).unwrap();
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn contained_range_overlaps() {
        let outer = TimeRange::new(540, 720).unwrap();
        let inner = TimeRange::new(600, 630).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        let a = TimeRange::new(540, 600).unwrap();
        let b = TimeRange::new(600, 660).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn all_attendees_unions_both_sets() {
        let request = MeetingRequest::with_optional(["a", "b"], ["b", "c"], 30);
        let combined = request.all_attendees();
        assert_eq!(combined.len(), 3);
        assert!(combined.contains("a") && combined.contains("b") && combined.contains("c"));
    }
}
