pub mod record;
pub mod service;
pub mod env;
pub mod error;
pub mod document;
pub mod classifier;
pub mod formatter;

pub use classifier::{Classifier, EventKind};
pub use document::{deep_compact, EcsDocument};
pub use error::FormatError;
pub use formatter::{EcsFormatter, EventFormatter};
pub use record::{EventRecord, ExceptionObject};
pub use service::ServiceIdentity;
