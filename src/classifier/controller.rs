use serde_json::json;

use super::EcsGenerator;
use crate::document::{EcsDocument, Section};

/// Classifier for requests completed by a web controller.
#[derive(Debug, Clone, Copy)]
pub struct Controller<'a> {
    base: EcsGenerator<'a>,
}

impl<'a> Controller<'a> {
    pub(crate) fn new(base: EcsGenerator<'a>) -> Self {
        Controller { base }
    }

    pub fn generate_ecs(&self) -> EcsDocument {
        let base = &self.base;
        let [trace, transaction, span] = base.apm();
        base.assemble([
            self.http(),
            self.url(),
            base.event(),
            self.source(),
            self.destination(),
            base.service(),
            self.rails(),
            base.error(),
            trace,
            transaction,
            span,
        ])
    }

    fn http(&self) -> Section {
        let data = self.base.record();
        (
            "http",
            json!({
                "request": {
                    "method": data.method,
                    "referrer": data.referrer,
                },
                "response": {
                    "mime_type": data.format,
                    "status_code": data.status,
                },
            }),
        )
    }

    fn url(&self) -> Section {
        let data = self.base.record();
        (
            "url",
            json!({
                "path": data.path,
                "original": data.original_url,
            }),
        )
    }

    /// Peer address as reported by the proxy chain.
    fn source(&self) -> Section {
        ("source", json!({ "ip": self.base.record().remote_ip }))
    }

    fn destination(&self) -> Section {
        let data = self.base.record();
        (
            "destination",
            json!({
                "ip": data.ip,
                "name": data.host,
            }),
        )
    }

    fn rails(&self) -> Section {
        let data = self.base.record();
        (
            "rails",
            json!({
                "controller": data.controller,
                "action": data.action,
                "params": data.params,
                "view_runtime": data.view,
                "db_runtime": data.db,
            }),
        )
    }
}
