//! Cookie value codec for the task collection.
//!
//! Wire form: `encodeURIComponent`-style percent escaping of a JSON array of
//! `{"text": string, "done": bool}` objects, in collection order.

use crate::model::task::{TaskList, TaskRecord};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::string::FromUtf8Error;

/// Stored value could not be turned into a task collection (or vice versa).
#[derive(Debug)]
pub enum CodecError {
    /// Percent escapes decode to bytes that are not UTF-8.
    Escape(FromUtf8Error),
    Json(serde_json::Error),
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Escape(err) => write!(f, "invalid percent-encoding: {err}"),
            Self::Json(err) => write!(f, "invalid task json: {err}"),
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Escape(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<FromUtf8Error> for CodecError {
    fn from(value: FromUtf8Error) -> Self {
        Self::Escape(value)
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Serializes `tasks` into a cookie-safe string.
pub fn encode_tasks(tasks: &[TaskRecord]) -> Result<String, CodecError> {
    let json = serde_json::to_string(tasks)?;
    Ok(urlencoding::encode(&json).into_owned())
}

/// Parses a value produced by `encode_tasks`.
///
/// # Errors
/// - `CodecError::Escape` for escapes that do not form UTF-8.
/// - `CodecError::Json` when the payload is not an array of task objects.
pub fn decode_tasks(value: &str) -> Result<TaskList, CodecError> {
    let json = urlencoding::decode(value)?;
    Ok(serde_json::from_str(&json)?)
}
