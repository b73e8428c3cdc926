//! Top-level meeting window query with optional-attendee relaxation.
//!
//! Prefers windows where every mandatory and optional attendee is free;
//! when no such window exists, retries with the mandatory attendees alone.
//! There is no further relaxation; partial optional-attendee subsets are
//! never tried.

use std::collections::HashSet;

use crate::filter::relevant_events;
use crate::freebusy::{free_windows, merged_busy};
use crate::types::{Event, MeetingRequest, TimeRange};

/// One filter → merge → gap pass for a fixed attendee set.
fn windows_for(events: &[Event], attendees: &HashSet<String>, duration: u32) -> Vec<TimeRange> {
    let relevant = relevant_events(events, attendees);
    let busy = merged_busy(&relevant);
    free_windows(&busy, duration)
}

/// Find every window in the day where the requested meeting can be held.
///
/// Returns the windows sorted ascending by start, pairwise non-overlapping,
/// each at least `request.duration` minutes long. A request longer than a
/// whole day short-circuits to an empty result before any filtering.
///
/// Optional attendees are accommodated when possible: the first pass treats
/// them as mandatory, and only when that pass yields nothing is the query
/// rerun against the mandatory attendees alone. That fallback result is
/// returned even when it too is empty.
///
/// The computation is stateless and never mutates `events` or `request`;
/// identical inputs always produce identical output.
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    if request.duration > TimeRange::WHOLE_DAY.duration() {
        return Vec::new();
    }

    if request.optional_attendees.is_empty() {
        return windows_for(events, &request.attendees, request.duration);
    }

    let with_optional = windows_for(events, &request.all_attendees(), request.duration);
    if !with_optional.is_empty() {
        return with_optional;
    }

    windows_for(events, &request.attendees, request.duration)
}

/// Find the earliest window where the requested meeting can be held.
///
/// Delegates to [`query`]; every returned window already satisfies the
/// duration requirement, so the first one is the earliest fit.
pub fn first_window(events: &[Event], request: &MeetingRequest) -> Option<TimeRange> {
    query(events, request).into_iter().next()
}
