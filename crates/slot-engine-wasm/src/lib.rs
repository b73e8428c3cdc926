//! WASM bindings for slot-engine.
//!
//! Exposes the meeting window query to JavaScript via `wasm-bindgen`. All
//! complex types cross the boundary as JSON strings; parsing constructs time
//! ranges through the validating constructor so malformed input fails at the
//! boundary instead of producing a wrong schedule.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::{Deserialize, Serialize};
use slot_engine::{Event, MeetingRequest, TimeRange};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for events passed from JavaScript.
#[derive(Deserialize)]
struct EventInput {
    #[serde(default)]
    name: String,
    start: u32,
    end: u32,
    attendees: Vec<String>,
}

/// Input format for the meeting request passed from JavaScript.
#[derive(Deserialize)]
struct RequestInput {
    attendees: Vec<String>,
    #[serde(default)]
    optional_attendees: Vec<String>,
    duration: u32,
}

#[derive(Serialize)]
struct TimeRangeDto {
    start: u32,
    end: u32,
    duration_minutes: u32,
}

impl From<&TimeRange> for TimeRangeDto {
    fn from(range: &TimeRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
            duration_minutes: range.duration(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers: parse JSON inputs into engine values
// ---------------------------------------------------------------------------

/// Convert a JSON array of `{name?, start, end, attendees}` objects into
/// `Vec<Event>`, validating each time range.
fn parse_events_json(json: &str) -> Result<Vec<Event>, JsValue> {
    let inputs: Vec<EventInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))?;

    inputs
        .into_iter()
        .map(|input| {
            let when = TimeRange::new(input.start, input.end)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(Event::new(input.name, when, input.attendees))
        })
        .collect()
}

/// Convert a `{attendees, optional_attendees?, duration}` JSON object into a
/// `MeetingRequest`.
fn parse_request_json(json: &str) -> Result<MeetingRequest, JsValue> {
    let input: RequestInput = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid request JSON: {}", e)))?;

    Ok(MeetingRequest::with_optional(
        input.attendees,
        input.optional_attendees,
        input.duration,
    ))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every window in the day where the requested meeting can be held.
///
/// `events_json` must be a JSON array of `{name?, start, end, attendees}`
/// objects with times in minutes since midnight; `request_json` must be a
/// `{attendees, optional_attendees?, duration}` object. Returns a JSON string
/// containing an array of `{start, end, duration_minutes}` objects sorted by
/// start time.
#[wasm_bindgen(js_name = "findMeetingWindows")]
pub fn find_meeting_windows(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let request = parse_request_json(request_json)?;

    let windows = slot_engine::query(&events, &request);

    let dtos: Vec<TimeRangeDto> = windows.iter().map(TimeRangeDto::from).collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Find the earliest window where the requested meeting can be held.
///
/// Same input format as [`find_meeting_windows`]. Returns a JSON
/// `{start, end, duration_minutes}` object, or JSON `null` when no window is
/// long enough.
#[wasm_bindgen(js_name = "firstMeetingWindow")]
pub fn first_meeting_window(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let request = parse_request_json(request_json)?;

    let window = slot_engine::first_window(&events, &request);

    let dto = window.as_ref().map(TimeRangeDto::from);

    serde_json::to_string(&dto)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
