//! Error types for scaffold-templates

/// Result type for template operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while registering or rendering templates
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Template '{name}' failed to parse: {message}")]
    Parse { name: String, message: String },

    #[error("Template '{name}' failed to render: {message}")]
    Render { name: String, message: String },

    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },
}
