use thiserror::Error;

/// Main error type for the gitshim library
#[derive(Error, Debug)]
pub enum GitshimError {
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Error, Debug)]
pub enum GitError {
    #[error("The `git` executable was not found on PATH")]
    ExecutableNotFound,

    #[error("Git command failed: {command}\nStderr: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Status line too short: {line:?}")]
    StatusLineTooShort { line: String },

    #[error("Unknown status flag `{flag}`")]
    UnknownStatusFlag { flag: char },
}

/// Type alias for Result using `GitshimError`
pub type Result<T> = std::result::Result<T, GitshimError>;
