use chrono::{DateTime, Utc};

use crate::client::{Client, Cursor};
use crate::error::{Error, Result as WkResult};
use crate::object::{Page, Resource};
use crate::params::{CommaSeparated, Id, ListParams};
use crate::request::{encode_body, ApiRequest};
use crate::subject::SubjectType;
use crate::utils::serialize_rfc3339;

use serde::{Deserialize, Serialize};

use serde_with::serde_as;

const PATH: &str = "/v2/study_materials";

/// Key wrapping the fields of create and update bodies.
const BODY_KEY: &str = "study_material";

/// Notes and synonyms a user attached to a subject.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
#[non_exhaustive]
pub struct StudyMaterialData {
    pub created_at: DateTime<Utc>,
    pub hidden: bool,
    #[serde(default)]
    pub meaning_note: Option<String>,
    #[serde(default)]
    pub meaning_synonyms: Vec<String>,
    #[serde(default)]
    pub reading_note: Option<String>,
    pub subject_id: Id,
    pub subject_type: SubjectType,
}

pub type StudyMaterial = Resource<StudyMaterialData>;

pub type StudyMaterialPage = Page<StudyMaterialData>;

/// Parameters for [`Client::study_material_get`].
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct StudyMaterialGetParams {
    id: Option<Id>,
}

impl StudyMaterialGetParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// The study material to fetch. Required.
    pub fn id<T: Into<Option<Id>>>(mut self, id: T) -> Self {
        self.id = id.into();
        self
    }
}

/// Filters for [`Client::study_material_list`].
///
/// ```
/// # use wanikani::study_material::StudyMaterialListParams;
/// # use wanikani::subject::SubjectType;
/// let params = StudyMaterialListParams::new()
///     .hidden(false)
///     .subject_types([SubjectType::Kanji, SubjectType::Radical]);
/// ```
#[serde_as]
#[derive(Default, Debug, PartialEq, Eq, Serialize, Clone)]
pub struct StudyMaterialListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    hidden: Option<bool>,

    #[serde_as(as = "CommaSeparated<Id>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ids: Vec<Id>,

    #[serde_as(as = "CommaSeparated<Id>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    subject_ids: Vec<Id>,

    #[serde_as(as = "CommaSeparated<SubjectType>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    subject_types: Vec<SubjectType>,

    #[serde(
        serialize_with = "serialize_rfc3339",
        skip_serializing_if = "Option::is_none"
    )]
    updated_after: Option<DateTime<Utc>>,

    #[serde(flatten)]
    list: ListParams,
}

impl StudyMaterialListParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only return study materials whose subject is hidden (`true`) or not (`false`).
    pub fn hidden<T: Into<Option<bool>>>(mut self, hidden: T) -> Self {
        self.hidden = hidden.into();
        self
    }

    /// Only return study materials with one of these ids.
    pub fn ids<I: IntoIterator<Item = Id>>(mut self, ids: I) -> Self {
        self.ids = ids.into_iter().collect();
        self
    }

    /// Only return study materials attached to one of these subjects.
    pub fn subject_ids<I: IntoIterator<Item = Id>>(mut self, ids: I) -> Self {
        self.subject_ids = ids.into_iter().collect();
        self
    }

    /// Only return study materials attached to subjects of these types.
    pub fn subject_types<I: IntoIterator<Item = SubjectType>>(mut self, types: I) -> Self {
        self.subject_types = types.into_iter().collect();
        self
    }

    /// Only return study materials updated after this time.
    pub fn updated_after<T: Into<Option<DateTime<Utc>>>>(mut self, time: T) -> Self {
        self.updated_after = time.into();
        self
    }

    /// Set the page to start listing from.
    pub fn page<T: Into<Option<Cursor>>>(mut self, cursor: T) -> Self {
        self.list = self.list.page(cursor);
        self
    }
}

/// Parameters for [`Client::study_material_create`]. Only the fields that are set end up in the
/// request body.
#[derive(Default, Debug, PartialEq, Eq, Serialize, Clone)]
pub struct StudyMaterialCreateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    meaning_note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    meaning_synonyms: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    reading_note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    subject_id: Option<Id>,
}

impl StudyMaterialCreateParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// The subject to attach the study material to. Required.
    pub fn subject_id<T: Into<Option<Id>>>(mut self, id: T) -> Self {
        self.subject_id = id.into();
        self
    }

    pub fn meaning_note<T: Into<Option<S>>, S: Into<String>>(mut self, note: T) -> Self {
        self.meaning_note = note.into().map(Into::into);
        self
    }

    pub fn reading_note<T: Into<Option<S>>, S: Into<String>>(mut self, note: T) -> Self {
        self.reading_note = note.into().map(Into::into);
        self
    }

    pub fn meaning_synonyms<I: IntoIterator<Item = S>, S: Into<String>>(
        mut self,
        synonyms: I,
    ) -> Self {
        self.meaning_synonyms = Some(synonyms.into_iter().map(Into::into).collect());
        self
    }
}

/// Parameters for [`Client::study_material_update`]. Fields left unset keep their current value
/// on the server.
#[derive(Default, Debug, PartialEq, Eq, Serialize, Clone)]
pub struct StudyMaterialUpdateParams {
    #[serde(skip)]
    id: Option<Id>,

    #[serde(skip_serializing_if = "Option::is_none")]
    meaning_note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    meaning_synonyms: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    reading_note: Option<String>,
}

impl StudyMaterialUpdateParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// The study material to update. Required.
    pub fn id<T: Into<Option<Id>>>(mut self, id: T) -> Self {
        self.id = id.into();
        self
    }

    pub fn meaning_note<T: Into<Option<S>>, S: Into<String>>(mut self, note: T) -> Self {
        self.meaning_note = note.into().map(Into::into);
        self
    }

    pub fn reading_note<T: Into<Option<S>>, S: Into<String>>(mut self, note: T) -> Self {
        self.reading_note = note.into().map(Into::into);
        self
    }

    /// Replace the meaning synonyms. Passing an empty list clears them.
    pub fn meaning_synonyms<I: IntoIterator<Item = S>, S: Into<String>>(
        mut self,
        synonyms: I,
    ) -> Self {
        self.meaning_synonyms = Some(synonyms.into_iter().map(Into::into).collect());
        self
    }
}

impl Client {
    /// Returns the study material with the given id.
    pub async fn study_material_get(&self, params: StudyMaterialGetParams) -> WkResult<StudyMaterial> {
        let id = params.id.ok_or(Error::MissingParameter("id"))?;
        self.execute(ApiRequest::get(format!("{}/{}", PATH, id)))
            .await
    }

    /// Returns one page of the study materials matching `params`.
    ///
    /// ```no_run
    /// # use wanikani::client::Client;
    /// # use wanikani::study_material::StudyMaterialListParams;
    /// # #[tokio::main]
    /// # async fn main() -> wanikani::error::Result<()> {
    /// let client = Client::new("my-api-token")?;
    ///
    /// let mut params = StudyMaterialListParams::new().hidden(false);
    /// loop {
    ///     let page = client.study_material_list(params.clone()).await?;
    ///     let next = page.next_cursor();
    ///     for material in page {
    ///         println!("{:?}", material.data.meaning_note);
    ///     }
    ///     match next {
    ///         Some(cursor) => params = params.page(cursor),
    ///         None => break,
    ///     }
    /// }
    /// # Ok(()) }
    /// ```
    pub async fn study_material_list(
        &self,
        params: StudyMaterialListParams,
    ) -> WkResult<StudyMaterialPage> {
        self.execute(ApiRequest::get(PATH).query(&params)?).await
    }

    /// Creates a study material for a subject. `subject_id` is required.
    ///
    /// ```no_run
    /// # use wanikani::client::Client;
    /// # use wanikani::study_material::StudyMaterialCreateParams;
    /// # #[tokio::main]
    /// # async fn main() -> wanikani::error::Result<()> {
    /// let client = Client::new("my-api-token")?;
    /// let created = client
    ///     .study_material_create(
    ///         StudyMaterialCreateParams::new()
    ///             .subject_id(123)
    ///             .meaning_note("hard"),
    ///     )
    ///     .await?;
    ///
    /// assert_eq!(created.data.subject_id, 123);
    /// # Ok(()) }
    /// ```
    pub async fn study_material_create(
        &self,
        params: StudyMaterialCreateParams,
    ) -> WkResult<StudyMaterial> {
        if params.subject_id.is_none() {
            return Err(Error::MissingParameter("subject_id"));
        }
        let body = encode_body(BODY_KEY, &params)?;
        self.execute(ApiRequest::post(PATH, body)).await
    }

    /// Updates the study material with the given id. Only the fields set in `params` are sent.
    pub async fn study_material_update(
        &self,
        params: StudyMaterialUpdateParams,
    ) -> WkResult<StudyMaterial> {
        let id = params.id.ok_or(Error::MissingParameter("id"))?;
        let body = encode_body(BODY_KEY, &params)?;
        self.execute(ApiRequest::put(format!("{}/{}", PATH, id), body))
            .await
    }
}
