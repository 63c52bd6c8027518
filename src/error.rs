//! Host startup errors.

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid {var}: {reason}")]
    Config { var: &'static str, reason: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
