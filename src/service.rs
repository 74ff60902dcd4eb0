/// Identity of the service emitting the logs, bound once when the
/// formatter is constructed and reported verbatim in every document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceIdentity {
    name: String,
    environment: String,
    service_type: String,
}

impl ServiceIdentity {
    pub fn new(
        name: impl Into<String>,
        environment: impl Into<String>,
        service_type: impl Into<String>,
    ) -> Self {
        ServiceIdentity {
            name: name.into(),
            environment: environment.into(),
            service_type: service_type.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn service_type(&self) -> &str {
        &self.service_type
    }
}
