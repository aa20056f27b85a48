use chrono::{DateTime, Utc};

use serde::Deserialize;

use crate::client::Cursor;
use crate::params::Id;
use crate::utils::query_param;

/// Kind of entity described by a response envelope.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Assignment,
    Collection,
    KanaVocabulary,
    Kanji,
    LevelProgression,
    Radical,
    Report,
    Reset,
    Review,
    ReviewStatistic,
    SpacedRepetitionSystem,
    StudyMaterial,
    User,
    Vocabulary,
    VoiceActor,

    /// An object type this crate doesn't know about yet.
    #[serde(other)]
    Unknown,
}

/// Fields common to every envelope returned by the API.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct Object {
    /// Absent on collections and reports.
    #[serde(default)]
    pub id: Option<Id>,
    pub object: ObjectType,
    pub url: String,
    #[serde(default)]
    pub data_updated_at: Option<DateTime<Utc>>,
}

/// A single resource: the envelope plus its typed payload.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct Resource<T> {
    #[serde(flatten)]
    pub object: Object,
    pub data: T,
}

/// Links to the neighbouring pages of a collection.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct Pages {
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default)]
    pub previous_url: Option<String>,
    pub per_page: u32,
}

/// Fields common to every collection returned by the API.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct PageObject {
    pub object: ObjectType,
    pub url: String,
    pub pages: Pages,
    pub total_count: u64,
    #[serde(default)]
    pub data_updated_at: Option<DateTime<Utc>>,
}

/// One page of resources, in the order returned by the API.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct Page<T> {
    #[serde(flatten)]
    pub page: PageObject,
    pub data: Vec<Resource<T>>,
}

impl<T> Page<T> {
    /// The cursor to pass to the next list call to get the following page, or `None` if this is
    /// the last one.
    pub fn next_cursor(&self) -> Option<Cursor> {
        let url = self.page.pages.next_url.as_deref()?;
        query_param(url, "page_after_id")?
            .parse()
            .ok()
            .map(Cursor::After)
    }

    /// The cursor to pass to the next list call to get the preceding page, or `None` if this is
    /// the first one.
    pub fn previous_cursor(&self) -> Option<Cursor> {
        let url = self.page.pages.previous_url.as_deref()?;
        query_param(url, "page_before_id")?
            .parse()
            .ok()
            .map(Cursor::Before)
    }

    /// Whether this page holds no resources.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of resources on this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = Resource<T>;
    type IntoIter = std::vec::IntoIter<Resource<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
