//! Error types for selector configuration.

/// Invalid selector configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Algorithm name not recognised.
    #[error("unknown algorithm {name:?}, expected baseline or weighted")]
    UnknownAlgorithm { name: String },

    /// A root split needs at least one thread.
    #[error("threads must be at least 1")]
    ZeroThreads,
}
