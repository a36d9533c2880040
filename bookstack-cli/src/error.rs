use thiserror::Error;

/// Errors that can occur while driving the interactive session.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error on the terminal
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The operator closed the input stream
    #[error("input stream closed")]
    InputClosed,
}
