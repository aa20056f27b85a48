use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::client::Cursor;

/// Identifier of a resource.
pub type Id = u64;

pub(crate) type CommaSeparated<T> =
    serde_with::StringWithSeparator<serde_with::formats::CommaSeparator, T>;

/// Pagination parameters shared by every list operation.
///
/// Serialized as `page_after_id` or `page_before_id`, depending on the [`Cursor`]. Nothing is
/// serialized when no cursor is set.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub struct ListParams {
    cursor: Option<Cursor>,
}

impl ListParams {
    /// Create a new instance of `ListParams`, starting at the first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page to start listing from.
    pub fn page<T: Into<Option<Cursor>>>(mut self, cursor: T) -> Self {
        self.cursor = cursor.into();
        self
    }

    /// The page the listing starts from, `None` for the first one.
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }
}

impl Serialize for ListParams {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = s.serialize_map(None)?;
        match self.cursor {
            Some(Cursor::After(id)) => map.serialize_entry("page_after_id", &id)?,
            Some(Cursor::Before(id)) => map.serialize_entry("page_before_id", &id)?,
            None => {}
        }
        map.end()
    }
}
