use crate::domain::event::{EventType, OperationalEvent, Payload};
use crate::error::{OpsError, Result};
use serde_json::Value;
use std::io::Read;

const REQUIRED_FIELDS: [&str; 4] = ["event_id", "event_type", "payload", "timestamp"];

/// Reads a batch of raw events from a JSON source.
///
/// The source must hold a single JSON array. Records come back untyped and are
/// validated by [`parse_events`], where one bad record rejects the batch.
pub struct EventReader<R: Read> {
    source: R,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Parses the whole source into untyped records.
    pub fn raw_events(self) -> Result<Vec<Value>> {
        match serde_json::from_reader(self.source)? {
            Value::Array(items) => Ok(items),
            other => Err(OpsError::Validation(format!(
                "expected a JSON array of events, found {}",
                kind(&other)
            ))),
        }
    }
}

/// Validates every raw record and converts it into an `OperationalEvent`.
pub fn parse_events(raw_events: &[Value]) -> Result<Vec<OperationalEvent>> {
    raw_events.iter().map(parse_event).collect()
}

/// Validates one raw record and converts it into an `OperationalEvent`.
pub fn parse_event(raw: &Value) -> Result<OperationalEvent> {
    let record = raw.as_object().ok_or_else(|| {
        OpsError::Validation(format!("event must be a JSON object, found {}", kind(raw)))
    })?;

    let mut missing: Vec<&str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !record.contains_key(*field))
        .collect();
    if !missing.is_empty() {
        missing.sort_unstable();
        return Err(OpsError::Validation(format!(
            "Missing required event fields: {missing:?}"
        )));
    }

    let event_type = match &record["event_type"] {
        Value::String(s) => s.parse::<EventType>()?,
        other => return Err(OpsError::UnsupportedEventType(other.to_string())),
    };

    let payload: Payload = match &record["payload"] {
        Value::Null => {
            return Err(OpsError::Validation("payload must not be null".to_string()));
        }
        Value::Object(map) => map.clone(),
        _ => {
            return Err(OpsError::Validation(
                "payload must be a JSON object".to_string(),
            ));
        }
    };

    Ok(OperationalEvent::new(
        coerce_to_string(&record["event_id"]),
        event_type,
        payload,
        coerce_to_string(&record["timestamp"]),
    ))
}

/// Strings pass through; any other value uses its JSON text.
fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
