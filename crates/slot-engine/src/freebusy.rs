//! Busy-interval merging and free-window extraction.
//!
//! Sorts events by start time, merges overlapping busy ranges into a
//! disjoint busy-set, then computes the gaps between merged ranges across the
//! day that are long enough to hold the requested meeting.

use crate::types::{Event, TimeRange, END_OF_DAY, START_OF_DAY};

/// Merge the busy ranges of `events` into a sorted, pairwise-disjoint list.
///
/// Events are stable-sorted by start time first, so a single left-to-right
/// pass suffices: each range either extends the current merged range or
/// closes it out and starts a new one. Full containment is possible, so the
/// merged end is `max(current.end, next.end)` rather than just `next.end`.
///
/// Adjacent ranges (one ending exactly when the next starts) are kept
/// separate; the zero-width gap between them can never hold a meeting of
/// positive duration.
pub fn merged_busy(events: &[&Event]) -> Vec<TimeRange> {
    let mut ranges: Vec<TimeRange> = events.iter().map(|event| event.when).collect();
    ranges.sort_by_key(|range| range.start);

    let mut merged: Vec<TimeRange> = Vec::new();
    for range in ranges {
        if let Some(current) = merged.last_mut() {
            if current.overlaps(&range) {
                current.end = current.end.max(range.end);
                continue;
            }
        }
        merged.push(range);
    }

    merged
}

/// Compute the free windows of at least `duration` minutes around a merged,
/// sorted busy-set.
///
/// Walks a cursor from the start of the day: each busy range emits the gap
/// before it when the gap is long enough, then pushes the cursor to the busy
/// range's end. The trailing window runs to [`END_OF_DAY`], which is treated
/// as an inclusive bound for this final window only; callers rely on the
/// exact `(start, 1440)` pair it produces.
///
/// An empty busy-set yields the whole day whenever `duration <= 1440`.
pub fn free_windows(busy: &[TimeRange], duration: u32) -> Vec<TimeRange> {
    let mut windows = Vec::new();
    let mut cursor = START_OF_DAY;

    for range in busy {
        if cursor <= range.start && range.start - cursor >= duration {
            windows.push(TimeRange {
                start: cursor,
                end: range.start,
            });
        }
        // Advance past the busy range whether or not a gap was emitted.
        cursor = cursor.max(range.end);
    }

    if END_OF_DAY - cursor >= duration {
        windows.push(TimeRange {
            start: cursor,
            end: END_OF_DAY,
        });
    }

    windows
}
