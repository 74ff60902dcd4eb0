use std::sync::Arc;
use std::thread;

use ecs_log_formatter::{EcsFormatter, EventFormatter, EventRecord, ServiceIdentity};

/// One formatter shared by several worker threads, the way a host
/// integration would hold it.
fn main() {
    tracing_subscriber::fmt::init();

    let formatter: Arc<dyn EventFormatter> =
        Arc::new(EcsFormatter::new(ServiceIdentity::new("api", "staging", "rails")));

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let formatter = Arc::clone(&formatter);
            thread::spawn(move || {
                let record = EventRecord {
                    method: Some("GET".to_string()),
                    path: Some(format!("/workers/{worker}")),
                    status: Some(200),
                    duration: Some(1.5 * f64::from(worker + 1)),
                    ..Default::default()
                };
                formatter.format(&record)
            })
        })
        .collect();

    for worker in workers {
        match worker.join() {
            Ok(Ok(line)) => println!("{line}"),
            Ok(Err(e)) => eprintln!("format failed: {e}"),
            Err(_) => eprintln!("worker panicked"),
        }
    }
}
