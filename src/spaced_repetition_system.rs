use chrono::{DateTime, Utc};

use crate::client::{Client, Cursor};
use crate::error::{Error, Result as WkResult};
use crate::object::{Page, Resource};
use crate::params::{CommaSeparated, Id, ListParams};
use crate::request::ApiRequest;
use crate::utils::serialize_rfc3339;

use serde::{Deserialize, Serialize};

use serde_with::serde_as;

use std::time::Duration;

const PATH: &str = "/v2/spaced_repetition_systems";

/// Unit of a stage's [`interval`][SpacedRepetitionSystemStage::interval].
#[derive(Debug, PartialEq, Eq, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum IntervalUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,

    /// A unit this crate doesn't know about yet.
    #[serde(other)]
    Unknown,
}

/// One stage of a spaced repetition system.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
pub struct SpacedRepetitionSystemStage {
    /// Time to wait before the next review. `None` for the unlocking and burning stages.
    #[serde(default)]
    pub interval: Option<u64>,
    #[serde(default)]
    pub interval_unit: Option<IntervalUnit>,
    pub position: u32,
}

impl SpacedRepetitionSystemStage {
    /// The stage's interval as a [`Duration`], if it has one.
    pub fn duration(&self) -> Option<Duration> {
        let interval = self.interval?;
        let unit_secs = match self.interval_unit? {
            IntervalUnit::Milliseconds => return Some(Duration::from_millis(interval)),
            IntervalUnit::Seconds => 1,
            IntervalUnit::Minutes => 60,
            IntervalUnit::Hours => 60 * 60,
            IntervalUnit::Days => 24 * 60 * 60,
            IntervalUnit::Weeks => 7 * 24 * 60 * 60,
            IntervalUnit::Unknown => return None,
        };
        Some(Duration::from_secs(interval.saturating_mul(unit_secs)))
    }
}

/// A spaced repetition system: the stages an item goes through and the review interval of each.
#[derive(Debug, PartialEq, Eq, Deserialize, Clone)]
#[non_exhaustive]
pub struct SpacedRepetitionSystemData {
    pub burning_stage_position: u32,
    pub created_at: DateTime<Utc>,
    pub description: String,
    pub name: String,
    pub passing_stage_position: u32,
    pub stages: Vec<SpacedRepetitionSystemStage>,
    pub starting_stage_position: u32,
    pub unlocking_stage_position: u32,
}

impl SpacedRepetitionSystemData {
    /// Look up a stage by its position.
    pub fn stage(&self, position: u32) -> Option<&SpacedRepetitionSystemStage> {
        self.stages.iter().find(|s| s.position == position)
    }
}

pub type SpacedRepetitionSystem = Resource<SpacedRepetitionSystemData>;

pub type SpacedRepetitionSystemPage = Page<SpacedRepetitionSystemData>;

/// Parameters for [`Client::spaced_repetition_system_get`].
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct SpacedRepetitionSystemGetParams {
    id: Option<Id>,
}

impl SpacedRepetitionSystemGetParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// The system to fetch. Required.
    pub fn id<T: Into<Option<Id>>>(mut self, id: T) -> Self {
        self.id = id.into();
        self
    }
}

/// Filters for [`Client::spaced_repetition_system_list`].
///
/// ```
/// # use wanikani::spaced_repetition_system::SpacedRepetitionSystemListParams;
/// # use wanikani::client::Cursor;
/// let params = SpacedRepetitionSystemListParams::new()
///     .ids([1, 2])
///     .page(Cursor::After(1));
/// ```
#[serde_as]
#[derive(Default, Debug, PartialEq, Eq, Serialize, Clone)]
pub struct SpacedRepetitionSystemListParams {
    #[serde_as(as = "CommaSeparated<Id>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ids: Vec<Id>,

    #[serde(
        serialize_with = "serialize_rfc3339",
        skip_serializing_if = "Option::is_none"
    )]
    updated_after: Option<DateTime<Utc>>,

    #[serde(flatten)]
    list: ListParams,
}

impl SpacedRepetitionSystemListParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only return systems with one of these ids.
    pub fn ids<I: IntoIterator<Item = Id>>(mut self, ids: I) -> Self {
        self.ids = ids.into_iter().collect();
        self
    }

    /// Only return systems updated after this time.
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

impl Client {
    /// Returns the spaced repetition system with the given id.
    ///
    /// ```no_run
    /// # use wanikani::client::Client;
    /// # use wanikani::spaced_repetition_system::SpacedRepetitionSystemGetParams;
    /// # #[tokio::main]
    /// # async fn main() -> wanikani::error::Result<()> {
    /// let client = Client::new("my-api-token")?;
    /// let srs = client
    ///     .spaced_repetition_system_get(SpacedRepetitionSystemGetParams::new().id(1))
    ///     .await?;
    ///
    /// assert_eq!(srs.object.id, Some(1));
    /// # Ok(()) }
    /// ```
    pub async fn spaced_repetition_system_get(
        &self,
        params: SpacedRepetitionSystemGetParams,
    ) -> WkResult<SpacedRepetitionSystem> {
        let id = params.id.ok_or(Error::MissingParameter("id"))?;
        self.execute(ApiRequest::get(format!("{}/{}", PATH, id)))
            .await
    }

    /// Returns one page of the spaced repetition systems matching `params`.
    pub async fn spaced_repetition_system_list(
        &self,
        params: SpacedRepetitionSystemListParams,
    ) -> WkResult<SpacedRepetitionSystemPage> {
        self.execute(ApiRequest::get(PATH).query(&params)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::request::encode_query;
    use chrono::TimeZone;
    use mockito::Matcher;

    async fn setup() -> (mockito::ServerGuard, Client) {
        let server = mockito::Server::new_async().await;
        let client = Client::with_config(
            ClientConfig::new("wanikani/unit_test").with_base_url(server.url()),
        )
        .unwrap();
        (server, client)
    }

    #[test]
    fn build_list_params() {
        let params = SpacedRepetitionSystemListParams::new()
            .ids([1, 2])
            .updated_after(Utc.with_ymd_and_hms(2020, 6, 9, 3, 36, 51).unwrap())
            .page(Cursor::After(1));

        assert_eq!(
            encode_query(&params).unwrap(),
            "ids=1%2C2&updated_after=2020-06-09T03%3A36%3A51Z&page_after_id=1"
        );
        assert_eq!(
            encode_query(&SpacedRepetitionSystemListParams::new()).unwrap(),
            ""
        );
        assert_eq!(
            encode_query(&SpacedRepetitionSystemListParams::new().ids(Vec::<Id>::new())).unwrap(),
            ""
        );
    }

    #[test]
    fn stage_durations() {
        let srs: SpacedRepetitionSystem =
            serde_json::from_str(include_str!("mocked/spaced_repetition_system_1.json")).unwrap();

        assert_eq!(srs.data.stages.len(), 10);
        assert_eq!(srs.data.stage(0).unwrap().duration(), None);
        assert_eq!(
            srs.data.stage(1).unwrap().duration(),
            Some(Duration::from_secs(4 * 60 * 60))
        );
        assert_eq!(srs.data.stage(9).unwrap().interval_unit, None);
        assert_eq!(srs.data.stage(10), None);

        let weeks = SpacedRepetitionSystemStage {
            interval: Some(4),
            interval_unit: Some(IntervalUnit::Weeks),
            position: 8,
        };
        assert_eq!(weeks.duration(), Some(Duration::from_secs(4 * 7 * 86400)));

        let millis = SpacedRepetitionSystemStage {
            interval: Some(1500),
            interval_unit: Some(IntervalUnit::Milliseconds),
            position: 1,
        };
        assert_eq!(millis.duration(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn unknown_interval_unit() {
        let stage: SpacedRepetitionSystemStage =
            serde_json::from_str(r#"{"interval":2,"interval_unit":"months","position":1}"#)
                .unwrap();

        assert_eq!(stage.interval, Some(2));
        assert_eq!(stage.interval_unit, Some(IntervalUnit::Unknown));
        assert_eq!(stage.duration(), None);
    }

    #[tokio::test]
    async fn get_by_id() {
        let (mut server, client) = setup().await;

        let response = include_str!("mocked/spaced_repetition_system_1.json");
        let expected: SpacedRepetitionSystem = serde_json::from_str(response).unwrap();

        let m = server
            .mock("GET", "/v2/spaced_repetition_systems/1")
            .with_body(response)
            .create_async()
            .await;

        let srs = client
            .spaced_repetition_system_get(SpacedRepetitionSystemGetParams::new().id(1))
            .await
            .unwrap();

        assert_eq!(srs, expected);
        assert_eq!(srs.data.name, "Default system for dictionary words");
        assert_eq!(srs.data.passing_stage_position, 5);
        m.assert_async().await;
    }

    #[tokio::test]
    async fn get_requires_id() {
        let (mut server, client) = setup().await;

        let m = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let err = client
            .spaced_repetition_system_get(SpacedRepetitionSystemGetParams::new())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::MissingParameter("id")));
        m.assert_async().await;
    }

    #[tokio::test]
    async fn get_not_found() {
        let (mut server, client) = setup().await;

        let _m = server
            .mock("GET", "/v2/spaced_repetition_systems/404")
            .with_status(404)
            .with_body(r#"{"error":"Not found","code":404}"#)
            .create_async()
            .await;

        let err = client
            .spaced_repetition_system_get(SpacedRepetitionSystemGetParams::new().id(404))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[tokio::test]
    async fn list_filtered() {
        let (mut server, client) = setup().await;

        let response = include_str!("mocked/spaced_repetition_systems.json");

        let m = server
            .mock("GET", "/v2/spaced_repetition_systems")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("ids".into(), "1,2".into()),
                Matcher::UrlEncoded("updated_after".into(), "2020-01-01T00:00:00Z".into()),
            ]))
            .with_body(response)
            .create_async()
            .await;

        let page = client
            .spaced_repetition_system_list(
                SpacedRepetitionSystemListParams::new()
                    .ids([1, 2])
                    .updated_after(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
            )
            .await
            .unwrap();

        assert_eq!(page.page.total_count, 2);
        assert_eq!(page.next_cursor(), None);
        let names: Vec<_> = page.data.iter().map(|s| s.data.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Default system for dictionary words",
                "Default system for kanji and radicals at levels 1 and 2",
            ]
        );
        assert_eq!(
            page.data[1].data.stage(8).unwrap().interval_unit,
            Some(IntervalUnit::Weeks)
        );
        m.assert_async().await;
    }
}
