use ecs_log_formatter::{EcsFormatter, ServiceIdentity};
use serde_json::json;
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let formatter = EcsFormatter::new(ServiceIdentity::new("shop", "production", "rails"));

    let payload = json!({
        "event_name": "process_action.action_controller",
        "method": "POST",
        "path": "/orders",
        "format": "json",
        "controller": "OrdersController",
        "action": "create",
        "status": 201,
        "params": {"sku": "A-42", "quantity": 2},
        "db": 12.4,
        "view": 3.1,
        "duration": 21.87,
        "remote_ip": "203.0.113.7",
        "ip": "10.0.0.12",
        "host": "shop.example.com",
        "original_url": "https://shop.example.com/orders",
        "apm_trace_id": "cd03e525c1c801cc666099d5c2108e4e",
    });

    match formatter.call_value(payload) {
        Ok(line) => println!("{line}"),
        Err(e) => error!(error = %e, "failed to format request event"),
    }

    info!("controller event example finished");
}
