//! The item record and the inputs used to create and modify it.

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Format used for `created_at` on the wire, e.g. `2024-05-01 13:45:10`.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A stored item.
///
/// `id` and `created_at` are assigned by the repository and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "serialize_created_at")]
    pub created_at: NaiveDateTime,
}

/// Fields supplied by a client when creating an item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
}

/// Partial update: only `Some` fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ItemChanges {
    /// True when applying these changes would leave an item untouched.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

fn serialize_created_at<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(CREATED_AT_FORMAT))
}
