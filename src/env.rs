//! Environment variable names used by this crate for convenient
//! configuration of the formatter from a host application.
//!
//! These are purely helpers; the formatter itself only ever sees the
//! [`ServiceIdentity`] it was constructed with.

use crate::service::ServiceIdentity;

/// Logical service name reported as `service.name`.
pub const ECS_LOG_SERVICE_NAME_ENV: &str = "ECS_LOG_SERVICE_NAME";

/// Deployment environment reported as `service.environment`.
pub const ECS_LOG_SERVICE_ENV_ENV: &str = "ECS_LOG_SERVICE_ENV";

/// Service kind reported as `service.type`.
pub const ECS_LOG_SERVICE_TYPE_ENV: &str = "ECS_LOG_SERVICE_TYPE";

pub const DEFAULT_SERVICE_ENV: &str = "development";
pub const DEFAULT_SERVICE_TYPE: &str = "rails";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl ServiceIdentity {
    /// Build an identity from `ECS_LOG_SERVICE_*` variables.
    ///
    /// **Parameters**
    /// - `default_name`: used when `ECS_LOG_SERVICE_NAME` is unset,
    ///   typically the host application's crate name.
    ///
    /// Environment and type default to [`DEFAULT_SERVICE_ENV`] and
    /// [`DEFAULT_SERVICE_TYPE`].
    pub fn from_env(default_name: &str) -> Self {
        ServiceIdentity::new(
            env_or(ECS_LOG_SERVICE_NAME_ENV, default_name),
            env_or(ECS_LOG_SERVICE_ENV_ENV, DEFAULT_SERVICE_ENV),
            env_or(ECS_LOG_SERVICE_TYPE_ENV, DEFAULT_SERVICE_TYPE),
        )
    }
}
