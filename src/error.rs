/// Error type returned when formatting an event record.
#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    /// The loosely typed input did not have the expected shape.
    #[error("invalid event record: {0}")]
    InvalidRecord(#[source] serde_json::Error),

    #[error("failed to serialize ECS document: {0}")]
    Serialize(#[source] serde_json::Error),
}
