mod support;

use std::sync::Arc;
use std::thread;

use ecs_log_formatter::{EventFormatter, EventKind};
use serde_json::{json, Value};
use support::*;

#[test]
fn formats_active_job_event() {
    let got = format(activejob_data());

    assert_eq!(
        got["job"],
        json!({
            "job_class": "EmailNotificationJob",
            "job_id": "job-abc-def-123",
            "adapter_class": "ActiveJob::QueueAdapters::SidekiqAdapter",
            "queue_name": "mailers",
            "args": ["positional", {"user_id": 42, "template": "welcome"}],
        })
    );
    assert_eq!(
        got["event"],
        json!({"kind": "event", "name": "perform_start.active_job", "duration": 2_500_750_000_i64})
    );
    assert_eq!(got["service"]["name"], "test-app");
    for section in ["http", "url", "source", "destination", "rails"] {
        assert!(got.get(section).is_none(), "unexpected {section} section");
    }
}

#[test]
fn removes_ruby2_keywords_marker_from_args() {
    let got = format(activejob_data_with_ruby2_keywords());

    assert_eq!(got["job"]["args"], json!([{"report_id": 999, "format": "pdf"}]));
}

#[test]
fn mapping_args_reach_job_section_unchanged() {
    let got = format(json!({
        "event_name": "perform.active_job",
        "job_class": "X",
        "args": {"user_id": 1},
    }));

    assert_eq!(got["job"], json!({"job_class": "X", "args": {"user_id": 1}}));
}

#[test]
fn caller_record_keeps_marker() {
    let record = record(activejob_data_with_ruby2_keywords());

    let _ = formatter().call(&record).unwrap();

    assert!(record.args.as_ref().unwrap()[0].get("_aj_ruby2_keywords").is_some());
}

#[test]
fn formats_active_job_error() {
    let got = format(activejob_data_with_error());

    assert_eq!(
        got["error"],
        json!({
            "type": "RuntimeError",
            "message": "Job processing failed",
            "stack_trace": "/app/jobs/email_job.rb:20:in `perform'\n/gems/pippero/lib/active_job/execution.rb:48:in `perform'",
        })
    );
}

#[test]
fn custom_payload_overrides_job_section() {
    let got = format(activejob_data_with_custom_payload());

    assert_eq!(got["job"], json!({"priority": "high", "retry_count": 2}));
}

#[test]
fn dispatch_by_event_name() {
    let formatter = formatter();
    let cases = [
        (json!({"event_name": "perform.active_job"}), EventKind::Job),
        (json!({"event_name": "perform_start.active_job"}), EventKind::Job),
        (json!({"event_name": "pippero"}), EventKind::Http),
        (json!({}), EventKind::Http),
    ];

    for (value, expected) in cases {
        let record = record(value);
        let doc = formatter.document(&record);
        let kind = ecs_log_formatter::Classifier::build(&record, formatter.service()).kind();
        assert_eq!(kind, expected);
        // Both kinds always report the service.
        assert!(doc.contains_key("service"));
    }
}

#[test]
fn concurrent_calls_are_independent() {
    let formatter: Arc<dyn EventFormatter> = Arc::new(formatter());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let formatter = Arc::clone(&formatter);
            thread::spawn(move || {
                let value = if i % 2 == 0 {
                    json!({"event_name": "perform.active_job", "job_id": format!("job-{i}")})
                } else {
                    json!({"path": format!("/items/{i}")})
                };
                let line = formatter.format(&record(value)).unwrap();
                (i, serde_json::from_str::<Value>(&line).unwrap())
            })
        })
        .collect();

    for handle in handles {
        let (i, got) = handle.join().unwrap();
        if i % 2 == 0 {
            assert_eq!(got["job"], json!({"job_id": format!("job-{i}")}));
            assert!(got.get("url").is_none());
        } else {
            assert_eq!(got["url"], json!({"path": format!("/items/{i}")}));
            assert!(got.get("job").is_none());
        }
        assert_eq!(got["service"]["environment"], "test");
    }
}
