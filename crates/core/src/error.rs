use crate::roles::Role;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown role: '{0}'")]
    UnknownRole(String),

    #[error("No endpoint for {api_key} as {role}")]
    UnmappedEndpoint { role: Role, api_key: &'static str },

    #[error("Navigation rejected: {0}")]
    Navigation(String),
}
