//! Error handling for the feijoa engine core.
//! Defines the error types and result alias used throughout the crate.

use std::io;
use thiserror::Error;

/// Errors surfaced by the engine core.
///
/// Every component surfaces the first error it encounters upward unchanged
/// and stops further work in that operation; no partial result is ever
/// returned alongside an error.
#[derive(Error, Debug)]
pub enum Error {
    /// A relative template name was given but the parent template carries
    /// no originating path to resolve it against.
    #[error("cannot locate template `{name}`: relative path without originating path")]
    RelativePathError { name: String },

    /// Neither the bare nor the extension-appended candidate exists.
    /// Carries the last-attempted path.
    #[error("cannot locate template `{path}`")]
    TemplateNotFoundError { path: String },

    /// A pipeline processor failed.
    #[error("processor error: {0}")]
    ProcessorError(String),

    /// A token's compile operation failed.
    #[error("token compile error: {0}")]
    TokenCompileError(String),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with feijoa's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;
