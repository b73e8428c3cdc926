//! Attendee relevance filtering.
//!
//! An event only constrains the schedule when at least one of its attendees
//! is part of the attendee set being scheduled. Everything else is someone
//! else's calendar and is dropped before any interval work happens.

use std::collections::HashSet;

use crate::types::Event;

/// Select the events whose attendee set intersects `attendees`.
///
/// Intersection-emptiness is the only set operation needed: an event with no
/// shared attendee contributes no busy time to this query. An empty
/// `attendees` set matches nothing. Input order is preserved.
pub fn relevant_events<'a>(events: &'a [Event], attendees: &HashSet<String>) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| !event.attendees.is_disjoint(attendees))
        .collect()
}
