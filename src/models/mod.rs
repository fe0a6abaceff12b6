//! Data models for the board document.
//!
//! The board is the only entity the service knows about. It carries:
//! - `updatedAt` - server-assigned timestamp of the last write
//! - `lists` - ordered lists, kept as raw JSON so client-defined shapes survive
//! - `tasks` - opaque task objects keyed by id
//!
//! Any other top-level field the client sends is preserved as-is.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Titles of the lists a fresh board starts with, in display order.
pub const DEFAULT_LIST_TITLES: [&str; 3] = ["To Do", "Doing", "Done"];

/// A named, ordered bucket of task references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardList {
    /// Unique identifier
    pub id: String,

    /// Display title
    pub title: String,

    /// Task ids in display order (not checked against `tasks`)
    #[serde(default)]
    pub task_ids: Vec<String>,
}

impl BoardList {
    /// Create an empty list with a freshly generated id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: generate_list_id(),
            title: title.into(),
            task_ids: Vec::new(),
        }
    }
}

/// Key holding the server-assigned write timestamp.
pub const UPDATED_AT: &str = "updatedAt";

/// The single persisted document.
///
/// The board is kept as the raw JSON object the client sent, so key order and
/// any unrecognized fields survive a save/load round trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    document: Map<String, Value>,
}

impl Board {
    /// Build the board a new store starts with: three empty lists and no tasks.
    pub fn new_default() -> Result<Self> {
        let lists = DEFAULT_LIST_TITLES
            .iter()
            .map(|title| serde_json::to_value(BoardList::new(*title)))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut document = Map::new();
        document.insert(UPDATED_AT.to_string(), Value::String(timestamp_now()));
        document.insert("lists".to_string(), Value::Array(lists));
        document.insert("tasks".to_string(), Value::Object(Map::new()));
        Ok(Self { document })
    }

    /// Parse a raw request body into a board.
    ///
    /// An empty body counts as `{}` and is therefore rejected for its shape,
    /// not for its syntax.
    pub fn parse_submission(body: &[u8]) -> Result<Self> {
        let value = if body.is_empty() {
            Value::Object(Map::new())
        } else {
            serde_json::from_slice(body).map_err(|_| Error::InvalidJsonBody)?
        };
        Self::from_value(value)
    }

    /// Shape-check a JSON value and convert it into a board.
    ///
    /// Only the two top-level fields are checked: `lists` must be an array
    /// and `tasks` an object. Their contents are never inspected.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(document) = value else {
            return Err(Error::InvalidBoardFormat);
        };
        let lists_ok = document.get("lists").is_some_and(Value::is_array);
        let tasks_ok = document.get("tasks").is_some_and(Value::is_object);
        if !lists_ok || !tasks_ok {
            return Err(Error::InvalidBoardFormat);
        }
        Ok(Self { document })
    }

    /// Stamp the board with the current server time.
    ///
    /// Returns the value that was there before (`None` when the key was
    /// absent, `Some(Value::Null)` for an explicit null), so callers can
    /// acknowledge the write with what the client submitted. An existing key
    /// keeps its position; a missing one is appended.
    pub fn stamp(&mut self) -> Option<Value> {
        self.document.insert(UPDATED_AT.to_string(), Value::String(timestamp_now()))
    }

    /// Timestamp of the last write, or whatever the client submitted.
    pub fn updated_at(&self) -> Option<&Value> {
        self.document.get(UPDATED_AT)
    }

    /// Lists in display order. Empty if the stored document has no list array.
    pub fn lists(&self) -> &[Value] {
        self.document
            .get("lists")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Task objects keyed by task id, if the document has a task map.
    pub fn tasks(&self) -> Option<&Map<String, Value>> {
        self.document.get("tasks").and_then(Value::as_object)
    }

    /// The whole document as submitted.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.document
    }

    /// Number of lists on the board.
    pub fn list_count(&self) -> usize {
        self.lists().len()
    }

    /// Number of tasks on the board.
    pub fn task_count(&self) -> usize {
        self.tasks().map_or(0, Map::len)
    }
}

/// Acknowledgement returned for a successful save.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveAck {
    pub ok: bool,

    /// Echo of the `updatedAt` the client submitted (not the stored one).
    /// Omitted when the client sent none; an explicit null is echoed as null.
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Value>,
}

impl SaveAck {
    pub fn new(updated_at: Option<Value>) -> Self {
        Self {
            ok: true,
            updated_at,
        }
    }
}

/// Current UTC time as ISO-8601 with millisecond precision, e.g.
/// `2026-10-19T08:15:30.123Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Generate an id for a new list.
pub fn generate_list_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
