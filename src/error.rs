//! The two ways an interaction can go wrong. Both are recovered where they
//! are caught and turned into a fixed message for the user.

use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// The engine failed to produce a reply for an input line.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("no responses to choose from")]
    NoResponses,

    #[error("picker failed: {0}")]
    Picker(String),

    #[error("picked index {index} but only {len} responses exist")]
    OutOfRange { index: usize, len: usize },
}

/// The session loop itself failed while reading, decoding, or writing.
#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),

    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}
