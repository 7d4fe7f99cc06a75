use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Invalid generation request: {0}")]
    InvalidRequest(String),
    #[error("No generator backend is configured")]
    NoBackend,
    #[error("Failed to run generator command {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to send the prompt to generator command {program:?}: {source}")]
    PromptWrite {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Generator command exited with {status}: {stderr}")]
    CommandFailed { status: ExitStatus, stderr: String },
    #[error("Generator output is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("Generator returned no content")]
    EmptyResponse,
}
