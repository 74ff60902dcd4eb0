use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::classifier::Classifier;
use crate::document::EcsDocument;
use crate::error::FormatError;
use crate::record::EventRecord;
use crate::service::ServiceIdentity;

/// Turns one event record into one log line.
///
/// Host integrations (request instrumentation, job hooks, log sinks)
/// hold an `Arc<dyn EventFormatter>` and call it once per observed
/// event, possibly from many threads at once.
pub trait EventFormatter: Send + Sync {
    /// Format a single record.
    ///
    /// **Parameters**
    /// - `record`: the event payload; it is only read.
    ///
    /// **Returns**
    /// - `Ok(line)` with a self-contained JSON document.
    /// - `Err(..)` if the document could not be serialized. Nothing is
    ///   retried; the caller decides whether to drop the event.
    fn format(&self, record: &EventRecord) -> Result<String, FormatError>;
}

/// Formats event records as Elastic Common Schema JSON.
///
/// The formatter owns nothing but the [`ServiceIdentity`] it was built
/// with, so it can be cloned or shared freely and every call is
/// independent of the previous ones.
#[derive(Debug, Clone)]
pub struct EcsFormatter {
    service: ServiceIdentity,
}

impl EcsFormatter {
    pub fn new(service: ServiceIdentity) -> Self {
        EcsFormatter { service }
    }

    pub fn service(&self) -> &ServiceIdentity {
        &self.service
    }

    /// Format `record` stamped with the current time.
    pub fn call(&self, record: &EventRecord) -> Result<String, FormatError> {
        self.call_at(record, Utc::now())
    }

    /// Format `record` with an explicit ingestion timestamp.
    pub fn call_at(
        &self,
        record: &EventRecord,
        timestamp: DateTime<Utc>,
    ) -> Result<String, FormatError> {
        self.document(record)
            .with_metadata(timestamp)
            .to_json()
            .map_err(FormatError::Serialize)
    }

    /// Decode a loosely typed payload, then format it.
    pub fn call_value(&self, value: Value) -> Result<String, FormatError> {
        let record = EventRecord::from_value(value)?;
        self.call(&record)
    }

    /// Decode a JSON payload, then format it.
    pub fn call_json(&self, json: &str) -> Result<String, FormatError> {
        let record = EventRecord::from_json(json)?;
        self.call(&record)
    }

    /// Compacted ECS document for `record`, without `@timestamp` and
    /// `@version`.
    pub fn document(&self, record: &EventRecord) -> EcsDocument {
        let classifier = Classifier::build(record, &self.service);
        tracing::debug!(kind = ?classifier.kind(), "formatting event record");
        classifier.generate_ecs().compact()
    }
}

impl EventFormatter for EcsFormatter {
    fn format(&self, record: &EventRecord) -> Result<String, FormatError> {
        self.call(record)
    }
}
