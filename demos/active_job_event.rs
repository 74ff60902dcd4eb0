use ecs_log_formatter::{EcsFormatter, EventRecord, ExceptionObject, ServiceIdentity};
use serde_json::{json, Map};

fn main() {
    tracing_subscriber::fmt::init();

    // Service identity from ECS_LOG_SERVICE_* with crate-name fallback.
    let formatter = EcsFormatter::new(ServiceIdentity::from_env(env!("CARGO_PKG_NAME")));

    let mut custom = Map::new();
    custom.insert("labels".to_string(), json!({"tenant": "acme"}));

    let record = EventRecord {
        event_name: Some("perform.active_job".to_string()),
        job_class: Some("ReportGeneratorJob".to_string()),
        job_id: Some("job-xyz-789".to_string()),
        queue_name: Some("reports".to_string()),
        args: Some(json!([{
            "_aj_ruby2_keywords": ["report_id"],
            "report_id": 999,
        }])),
        duration: Some(1840.5),
        exception: Some(vec!["RuntimeError".to_string(), "report template missing".to_string()]),
        exception_object: Some(ExceptionObject::with_backtrace([
            "/app/jobs/report_generator_job.rb:12:in `perform'",
        ])),
        ecs_custom: Some(custom),
        ..Default::default()
    };

    match formatter.call(&record) {
        Ok(line) => println!("{line}"),
        Err(e) => eprintln!("failed to format job event: {e}"),
    }
}
