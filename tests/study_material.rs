use mockito::{Matcher, Server, ServerGuard};

use wanikani::client::{Client, Cursor};
use wanikani::config::ClientConfig;
use wanikani::error::Error;
use wanikani::study_material::{
    StudyMaterialCreateParams, StudyMaterialGetParams, StudyMaterialListParams,
    StudyMaterialUpdateParams,
};
use wanikani::subject::SubjectType;

const CREATED: &str = include_str!("../src/mocked/study_material_created.json");
const ONE: &str = include_str!("../src/mocked/study_material_65231.json");
const LIST: &str = include_str!("../src/mocked/study_materials.json");

async fn local_client() -> (ServerGuard, Client) {
    let server = Server::new_async().await;
    let client = Client::with_config(ClientConfig::new("test-token").with_base_url(server.url()))
        .unwrap();
    (server, client)
}

#[tokio::test]
async fn study_material_create() {
    let (mut server, client) = local_client().await;

    let m = server
        .mock("POST", "/v2/study_materials")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Exact(
            r#"{"study_material":{"meaning_note":"hard","subject_id":123}}"#.into(),
        ))
        .with_status(201)
        .with_body(CREATED)
        .create_async()
        .await;

    let created = client
        .study_material_create(
            StudyMaterialCreateParams::new()
                .meaning_note("hard")
                .subject_id(123),
        )
        .await
        .unwrap();

    assert_eq!(created.data.subject_id, 123);
    assert_eq!(created.data.meaning_note.as_deref(), Some("hard"));
    m.assert_async().await;
}

#[tokio::test]
async fn study_material_create_requires_subject() {
    let (mut server, client) = local_client().await;

    let m = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = client
        .study_material_create(StudyMaterialCreateParams::new().meaning_note("hard"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MissingParameter("subject_id")));
    m.assert_async().await;
}

#[tokio::test]
async fn study_material_list() {
    let (mut server, client) = local_client().await;

    let m = server
        .mock("GET", "/v2/study_materials")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("hidden".into(), "true".into()),
            Matcher::UrlEncoded("ids".into(), "1,2,3".into()),
        ]))
        .match_body(Matcher::Exact(String::new()))
        .with_body(LIST)
        .create_async()
        .await;

    let page = client
        .study_material_list(StudyMaterialListParams::new().hidden(true).ids([1, 2, 3]))
        .await
        .unwrap();

    assert_eq!(page.page.total_count, 4);
    assert_eq!(page.len(), 3);
    assert!(page.data.iter().all(|m| m.data.hidden));
    assert_eq!(page.next_cursor(), Some(Cursor::After(3)));
    m.assert_async().await;
}

#[tokio::test]
async fn study_material_list_next_page() {
    let (mut server, client) = local_client().await;

    let m = server
        .mock("GET", "/v2/study_materials")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("subject_types".into(), "kanji,radical".into()),
            Matcher::UrlEncoded("page_after_id".into(), "3".into()),
        ]))
        .with_body(LIST)
        .create_async()
        .await;

    client
        .study_material_list(
            StudyMaterialListParams::new()
                .subject_types([SubjectType::Kanji, SubjectType::Radical])
                .page(Cursor::After(3)),
        )
        .await
        .unwrap();

    m.assert_async().await;
}

#[tokio::test]
async fn study_material_get() {
    let (mut server, client) = local_client().await;

    let m = server
        .mock("GET", "/v2/study_materials/123")
        .match_body(Matcher::Exact(String::new()))
        .with_body(ONE)
        .create_async()
        .await;

    let material = client
        .study_material_get(StudyMaterialGetParams::new().id(123))
        .await
        .unwrap();

    assert_eq!(material.data.subject_type, SubjectType::Radical);
    m.assert_async().await;
}

#[tokio::test]
async fn study_material_update() {
    let (mut server, client) = local_client().await;

    let m = server
        .mock("PUT", "/v2/study_materials/123")
        .match_body(Matcher::Exact(
            r#"{"study_material":{"meaning_note":"easy now"}}"#.into(),
        ))
        .with_body(ONE)
        .create_async()
        .await;

    client
        .study_material_update(
            StudyMaterialUpdateParams::new()
                .id(123)
                .meaning_note("easy now"),
        )
        .await
        .unwrap();

    m.assert_async().await;
}

#[tokio::test]
async fn study_material_update_requires_id() {
    let (_server, client) = local_client().await;

    let err = client
        .study_material_update(StudyMaterialUpdateParams::new().meaning_note("easy now"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MissingParameter("id")));
}

#[tokio::test]
async fn study_material_update_rejected() {
    let (mut server, client) = local_client().await;

    let _m = server
        .mock("PUT", "/v2/study_materials/123")
        .with_status(422)
        .with_body(r#"{"error":"Meaning synonyms is too long","code":422}"#)
        .create_async()
        .await;

    let err = client
        .study_material_update(
            StudyMaterialUpdateParams::new()
                .id(123)
                .meaning_synonyms(["a"; 9]),
        )
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(422));
    assert_eq!(
        err.to_string(),
        "HTTP error 422: Meaning synonyms is too long"
    );
}
