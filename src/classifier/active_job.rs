use serde_json::{json, Value};

use super::EcsGenerator;
use crate::document::{EcsDocument, Section};

/// Bookkeeping key the job framework injects into keyword-argument
/// hashes it forwarded. It carries no information worth logging.
pub const RUBY2_KEYWORDS_MARKER: &str = "_aj_ruby2_keywords";

/// Classifier for background-job events (`*.active_job`).
#[derive(Debug, Clone, Copy)]
pub struct ActiveJob<'a> {
    base: EcsGenerator<'a>,
}

impl<'a> ActiveJob<'a> {
    pub(crate) fn new(base: EcsGenerator<'a>) -> Self {
        ActiveJob { base }
    }

    pub fn generate_ecs(&self) -> EcsDocument {
        let base = &self.base;
        let [trace, transaction, span] = base.apm();
        base.assemble([
            base.event(),
            base.service(),
            self.job(),
            base.error(),
            trace,
            transaction,
            span,
        ])
    }

    fn job(&self) -> Section {
        let data = self.base.record();
        (
            "job",
            json!({
                "job_class": data.job_class,
                "job_id": data.job_id,
                "adapter_class": data.adapter_class,
                "queue_name": data.queue_name,
                "args": data.args.as_ref().map(clean_job_args),
            }),
        )
    }
}

/// Copy of `args` with the [`RUBY2_KEYWORDS_MARKER`] key removed from
/// every mapping argument. Other arguments, and `args` that is not a
/// list at all, are returned unchanged.
pub fn clean_job_args(args: &Value) -> Value {
    let Value::Array(items) = args else {
        return args.clone();
    };
    items
        .iter()
        .map(|arg| match arg {
            Value::Object(map) if map.contains_key(RUBY2_KEYWORDS_MARKER) => {
                let mut map = map.clone();
                map.remove(RUBY2_KEYWORDS_MARKER);
                Value::Object(map)
            }
            other => other.clone(),
        })
        .collect()
}
