//! Copilot wrapper error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopilotError {
    #[error("copilot not found. Please install: brew install aws/tap/copilot-cli")]
    CopilotNotFound,

    #[error("empty command string")]
    EmptyCommand,

    #[error("unparseable command string: {0}")]
    UnparseableCommand(String),

    #[error("command failed with exit code {code}: {stderr}")]
    CommandFailed { code: i32, stderr: String },

    #[error("command timed out after {0} seconds")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CopilotError {
    /// Exit code carried by a `CommandFailed`, if that is what this error is.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CopilotError::CommandFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CopilotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_accessor() {
        let failed = CopilotError::CommandFailed {
            code: 2,
            stderr: String::new(),
        };
        assert_eq!(failed.exit_code(), Some(2));
        assert_eq!(CopilotError::Timeout(600).exit_code(), None);
    }
}
