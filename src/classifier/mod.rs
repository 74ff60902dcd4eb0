//! Per-event-kind extraction of ECS sections.
//!
//! [`Classifier::build`] is the single place that looks at the event-kind
//! discriminator. Both variants share the section builders on
//! `EcsGenerator` and add their own kind-specific sections.

mod active_job;
mod controller;

pub use active_job::{clean_job_args, ActiveJob, RUBY2_KEYWORDS_MARKER};
pub use controller::Controller;

use serde_json::{json, Value};

use crate::document::{EcsDocument, Section};
use crate::record::EventRecord;
use crate::service::ServiceIdentity;

/// Discriminator suffix of background-job events.
pub const ACTIVE_JOB_SUFFIX: &str = ".active_job";

/// Which family of event produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Request handled by a controller; also the fallback.
    Http,
    /// Background job lifecycle event.
    Job,
}

impl EventKind {
    /// Classify a record by its optional `event_name` discriminator.
    pub fn classify(event_name: Option<&str>) -> Self {
        match event_name {
            Some(name) if name.ends_with(ACTIVE_JOB_SUFFIX) => EventKind::Job,
            _ => EventKind::Http,
        }
    }
}

/// Classifier selected for one record.
///
/// Variants can only be obtained through [`Classifier::build`].
#[derive(Debug)]
pub enum Classifier<'a> {
    Controller(Controller<'a>),
    ActiveJob(ActiveJob<'a>),
}

impl<'a> Classifier<'a> {
    pub fn build(record: &'a EventRecord, service: &'a ServiceIdentity) -> Self {
        let kind = EventKind::classify(record.event_name.as_deref());
        tracing::trace!(?kind, event_name = ?record.event_name, "classified event record");

        let base = EcsGenerator { record, service };
        match kind {
            EventKind::Job => Classifier::ActiveJob(ActiveJob::new(base)),
            EventKind::Http => Classifier::Controller(Controller::new(base)),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Classifier::Controller(_) => EventKind::Http,
            Classifier::ActiveJob(_) => EventKind::Job,
        }
    }

    /// Build the uncompacted document, custom payload included.
    pub fn generate_ecs(&self) -> EcsDocument {
        match self {
            Classifier::Controller(c) => c.generate_ecs(),
            Classifier::ActiveJob(j) => j.generate_ecs(),
        }
    }
}

/// Section builders common to every event kind.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EcsGenerator<'a> {
    record: &'a EventRecord,
    service: &'a ServiceIdentity,
}

impl<'a> EcsGenerator<'a> {
    pub(crate) fn record(&self) -> &'a EventRecord {
        self.record
    }

    /// Null when the record has neither a name nor a duration, so an
    /// empty record does not report a bare `event.kind`.
    pub(crate) fn event(&self) -> Section {
        let name = self.record.event_name.as_deref();
        let duration = nanoseconds(self.record.duration);
        if name.is_none() && duration.is_none() {
            return ("event", Value::Null);
        }
        (
            "event",
            json!({
                "kind": "event",
                "name": name,
                "duration": duration,
            }),
        )
    }

    pub(crate) fn service(&self) -> Section {
        (
            "service",
            json!({
                "name": self.service.name(),
                "type": self.service.service_type(),
                "environment": self.service.environment(),
            }),
        )
    }

    pub(crate) fn error(&self) -> Section {
        let exception = self.record.exception.as_deref().unwrap_or_default();
        let stack_trace = self
            .record
            .exception_object
            .as_ref()
            .and_then(|e| e.backtrace.as_ref())
            .filter(|frames| !frames.is_empty())
            .map(|frames| frames.join("\n"));

        (
            "error",
            json!({
                "type": exception.first(),
                "message": exception.last(),
                "stack_trace": stack_trace,
            }),
        )
    }

    /// `trace`, `transaction` and `span` sections from APM correlation ids.
    pub(crate) fn apm(&self) -> [Section; 3] {
        [
            ("trace", json!({ "id": self.record.apm_trace_id })),
            ("transaction", json!({ "id": self.record.apm_transaction_id })),
            ("span", json!({ "id": self.record.apm_span_id })),
        ]
    }

    /// Fold `sections` into a document and overlay the custom payload.
    pub(crate) fn assemble<I>(&self, sections: I) -> EcsDocument
    where
        I: IntoIterator<Item = Section>,
    {
        sections
            .into_iter()
            .collect::<EcsDocument>()
            .merge(self.record.ecs_custom.as_ref())
    }
}

/// Milliseconds to whole nanoseconds, truncating toward zero.
pub fn nanoseconds(ms: Option<f64>) -> Option<i64> {
    ms.filter(|ms| ms.is_finite())
        .map(|ms| (ms * 1_000_000.0) as i64)
}
