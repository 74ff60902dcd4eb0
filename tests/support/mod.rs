#![allow(dead_code)]

use ecs_log_formatter::{EcsFormatter, EventRecord, ServiceIdentity};
use serde_json::{json, Value};

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn service() -> ServiceIdentity {
    ServiceIdentity::new("test-app", "test", "rails")
}

pub fn formatter() -> EcsFormatter {
    init_logging();
    EcsFormatter::new(service())
}

/// Format `record` and parse the line back for assertions.
pub fn format(record: Value) -> Value {
    let line = formatter().call_value(record).expect("format record");
    serde_json::from_str(&line).expect("valid json")
}

pub fn record(value: Value) -> EventRecord {
    EventRecord::from_value(value).expect("decode record")
}

pub fn controller_data() -> Value {
    json!({
        "method": "POST",
        "path": "/users/create",
        "format": "json",
        "controller": "UsersController",
        "action": "create",
        "status": 201,
        "params": {"name": "John", "email": "john@example.com"},
        "db": 45.67,
        "view": 78.90,
        "duration": 234.56,
        "remote_ip": "192.168.1.100",
        "ip": "10.0.0.1",
        "host": "api.example.com",
        "referrer": "https://example.com/signup",
        "original_url": "https://api.example.com/users/create?source=web",
        "event_name": "pippero",
    })
}

pub fn controller_data_with_error() -> Value {
    json!({
        "method": "POST",
        "path": "/users/create",
        "status": 500,
        "duration": 100.0,
        "exception": ["StandardError", "Database connection failed"],
        "exception_object": {
            "backtrace": [
                "/app/models/user.rb:42:in `create'",
                "/app/controllers/users_controller.rb:15:in `create_action'",
            ],
        },
    })
}

pub fn controller_data_with_custom_payload() -> Value {
    json!({
        "method": "GET",
        "path": "/users/profile",
        "status": 200,
        "duration": 50.0,
        "ecs_custom": {
            "user": {"id": 123, "email": "test@example.com"},
            "trace": {"id": "abc-123-def-456"},
        },
    })
}

pub fn activejob_data() -> Value {
    json!({
        "event_name": "perform_start.active_job",
        "job_class": "EmailNotificationJob",
        "job_id": "job-abc-def-123",
        "adapter_class": "ActiveJob::QueueAdapters::SidekiqAdapter",
        "queue_name": "mailers",
        "args": ["positional", {"user_id": 42, "template": "welcome"}],
        "duration": 2500.75,
    })
}

pub fn activejob_data_with_ruby2_keywords() -> Value {
    json!({
        "event_name": "enqueue.active_job",
        "job_class": "ReportGeneratorJob",
        "job_id": "job-xyz-789",
        "args": [{
            "_aj_ruby2_keywords": ["key1", "key2"],
            "report_id": 999,
            "format": "pdf",
        }],
        "duration": 50.0,
    })
}

pub fn activejob_data_with_error() -> Value {
    json!({
        "event_name": "perform.active_job",
        "job_class": "EmailJob",
        "job_id": "job-error-123",
        "duration": 100.0,
        "exception": ["RuntimeError", "Job processing failed"],
        "exception_object": {
            "backtrace": [
                "/app/jobs/email_job.rb:20:in `perform'",
                "/gems/pippero/lib/active_job/execution.rb:48:in `perform'",
            ],
        },
    })
}

pub fn activejob_data_with_custom_payload() -> Value {
    json!({
        "event_name": "perform.active_job",
        "job_class": "DataProcessorJob",
        "job_id": "job-custom-456",
        "duration": 500.0,
        "ecs_custom": {
            "job": {"priority": "high", "retry_count": 2},
        },
    })
}
