//! Error types for the interactive shell
//!
//! Store operations never fail; only parsing user input does.

use thiserror::Error;

// == Shell Error Enum ==
/// Reasons a shell line could not be turned into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// Verb not recognised
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// Verb recognised but given the wrong number of arguments
    #[error("wrong number of arguments for '{command}' (expected {expected})")]
    WrongArity {
        command: &'static str,
        expected: usize,
    },

    /// Argument that should have been an integer
    #[error("value is not an integer or out of range: '{0}'")]
    InvalidInteger(String),
}

// == Result Type Alias ==
/// Convenience Result type for shell parsing.
pub type Result<T> = std::result::Result<T, ShellError>;
