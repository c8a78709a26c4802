use alloc::string::String;

use thiserror::Error;

/// Errors raised by watcher construction and callback registration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A host capability the watcher depends on is absent.
    #[error("missing host capability: {0}")]
    MissingCapability(&'static str),

    /// A dynamically typed callback is neither invocable nor an object with a callable
    /// `handleEvent` member.
    #[error("callback must be a function or an object with a callable `handleEvent`")]
    InvalidCallback,

    /// A host call failed.
    #[error("host call failed: {0}")]
    Host(String),
}

pub type Result<T> = core::result::Result<T, Error>;
