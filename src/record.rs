use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::FormatError;

/// Raw event payload handed to the formatter, one per observed request
/// or job execution.
///
/// Every field is optional; extractors treat a missing field as absent
/// and the compaction pass prunes it from the output. Unknown keys are
/// ignored when decoding.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    /// Event-kind discriminator, e.g. `process_action.action_controller`
    /// or `perform.active_job`.
    pub event_name: Option<String>,

    // Controller events
    pub method: Option<String>,
    pub path: Option<String>,
    pub format: Option<String>,
    pub controller: Option<String>,
    pub action: Option<String>,
    pub status: Option<u16>,
    /// Request parameters with routing keys already removed upstream.
    pub params: Option<Map<String, Value>>,
    /// Database time in milliseconds.
    pub db: Option<f64>,
    /// View rendering time in milliseconds.
    pub view: Option<f64>,
    pub remote_ip: Option<String>,
    pub ip: Option<String>,
    pub host: Option<String>,
    pub referrer: Option<String>,
    pub original_url: Option<String>,

    // Job events
    pub job_class: Option<String>,
    pub job_id: Option<String>,
    pub adapter_class: Option<String>,
    pub queue_name: Option<String>,
    /// Usually a list of positional and keyword arguments; any other
    /// value is passed through as is.
    pub args: Option<Value>,

    /// Total duration in milliseconds.
    pub duration: Option<f64>,
    /// `[type, message]` descriptor of a raised exception.
    pub exception: Option<Vec<String>>,
    pub exception_object: Option<ExceptionObject>,

    // APM correlation ids
    pub apm_trace_id: Option<String>,
    pub apm_transaction_id: Option<String>,
    pub apm_span_id: Option<String>,

    /// Extra top-level ECS fields supplied by the host application.
    ///
    /// Decoded from either `ecs_custom` or `custom`; a payload carrying
    /// both keys is rejected as a duplicate field.
    #[serde(alias = "custom")]
    pub ecs_custom: Option<Map<String, Value>>,
}

/// The parts of a raised exception the formatter cares about.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExceptionObject {
    pub backtrace: Option<Vec<String>>,
}

impl ExceptionObject {
    pub fn with_backtrace<I, S>(frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExceptionObject {
            backtrace: Some(frames.into_iter().map(Into::into).collect()),
        }
    }
}

impl EventRecord {
    /// Decode a loosely typed JSON payload.
    ///
    /// A field of the wrong shape (for example a string where `params`
    /// should be a mapping) is reported as [`FormatError::InvalidRecord`].
    pub fn from_value(value: Value) -> Result<Self, FormatError> {
        serde_json::from_value(value).map_err(|e| {
            tracing::debug!(error = %e, "failed to decode event record");
            FormatError::InvalidRecord(e)
        })
    }

    /// Decode a record from its JSON text form.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        serde_json::from_str(json).map_err(|e| {
            tracing::debug!(error = %e, "failed to decode event record");
            FormatError::InvalidRecord(e)
        })
    }
}
