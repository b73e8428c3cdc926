//! # slot-engine
//!
//! Single-day meeting window computation over busy attendee calendars.
//!
//! Given a snapshot of calendar events and a meeting request naming mandatory
//! and optional attendees, the engine returns every contiguous window of the
//! day long enough to hold the meeting with everyone free. When no window
//! works for the full attendee set, it falls back to the mandatory attendees
//! alone. Time is integer minutes since midnight; the engine is a pure
//! function with no I/O, no persistence, and no shared state.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{query, Event, MeetingRequest, TimeRange};
//!
//! // One mandatory attendee busy 09:00-10:00.
//! let events = vec![Event::new(
//!     "standup",
//!     TimeRange::new(540, 600).unwrap(),
//!     ["alice"],
//! )];
//! let request = MeetingRequest::new(["alice"], 30);
//!
//! let windows = query(&events, &request);
//! assert_eq!(windows.len(), 2); // before 09:00 and after 10:00
//! ```
//!
//! ## Modules
//!
//! - [`types`] — `TimeRange`, `Event`, `MeetingRequest` value types
//! - [`filter`] — attendee relevance filtering
//! - [`freebusy`] — busy-interval merging and free-window extraction
//! - [`query`] — top-level query with optional-attendee relaxation
//! - [`error`] — error types

pub mod error;
pub mod filter;
pub mod freebusy;
pub mod query;
pub mod types;

pub use error::SlotError;
pub use filter::relevant_events;
pub use freebusy::{free_windows, merged_busy};
pub use query::{first_window, query};
pub use types::{Event, MeetingRequest, TimeRange, END_OF_DAY, START_OF_DAY};
