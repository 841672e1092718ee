use std::sync::{Arc, Mutex};

use actix_web::{App, http::StatusCode, middleware::from_fn, test, web};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use inkpost_core::PostStore;
use inkpost_core::domain::Post;
use inkpost_core::error::RepoError;
use inkpost_core::ports::{BaseRepository, Clock, PostRepository, SystemClock};
use serde_json::{Value, json};
use uuid::Uuid;

use super::configure_routes;
use crate::observability::request_id;
use crate::state::{AppState, StorageKind};

/// Moves forward one second per reading so update timestamps are strictly later.
struct TickingClock(Mutex<DateTime<Utc>>);

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut now = self.0.lock().unwrap();
        *now += Duration::seconds(1);
        *now
    }
}

fn state() -> AppState {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    AppState::in_memory(Arc::new(TickingClock(Mutex::new(start))))
}

const DB_FAILURE: &str = "relation \"posts\" does not exist";

/// Repository whose every call fails the way a broken database would.
struct BrokenRepo;

#[async_trait]
impl BaseRepository<Post, Uuid> for BrokenRepo {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Post>, RepoError> {
        Err(RepoError::Query(DB_FAILURE.to_string()))
    }

    async fn insert(&self, _entity: Post) -> Result<Post, RepoError> {
        Err(RepoError::Connection(DB_FAILURE.to_string()))
    }

    async fn update(&self, _entity: Post) -> Result<Post, RepoError> {
        Err(RepoError::Query(DB_FAILURE.to_string()))
    }

    async fn delete(&self, _id: Uuid) -> Result<(), RepoError> {
        Err(RepoError::Query(DB_FAILURE.to_string()))
    }
}

#[async_trait]
impl PostRepository for BrokenRepo {
    async fn find_all_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        Err(RepoError::Query(DB_FAILURE.to_string()))
    }
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .wrap(from_fn(request_id))
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await
    };
}

fn sample() -> Value {
    json!({
        "title": "Test Post",
        "content": "This is a test post content",
        "author": "Test Author"
    })
}

macro_rules! create {
    ($app:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/posts")
            .set_json($body)
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        body["post"].clone()
    }};
}

fn parse_time(value: &Value) -> DateTime<Utc> {
    value.as_str().unwrap().parse().unwrap()
}

#[actix_rt::test]
async fn test_create_post() {
    let app = test_app!();
    let post = create!(app, sample());

    assert!(post["_id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(post["title"], "Test Post");
    assert_eq!(post["content"], "This is a test post content");
    assert_eq!(post["author"], "Test Author");
    assert_eq!(post["createdAt"], post["updatedAt"]);
}

#[actix_rt::test]
async fn test_create_missing_fields_is_bad_request() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/posts")
        .set_json(json!({ "title": "Test Post" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "Please provide content, Please provide author");
}

#[actix_rt::test]
async fn test_create_malformed_json_is_bad_request() {
    let app = test_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/posts")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"title\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["msg"].is_string());
}

#[actix_rt::test]
async fn test_list_posts_newest_first() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/v1/posts").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({ "posts": [], "count": 0 }));

    create!(app, sample());
    let mut second = sample();
    second["title"] = json!("Another Test Post");
    create!(app, second);

    let req = test::TestRequest::get().uri("/api/v1/posts").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["count"], 2);
    let posts = body["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["title"], "Another Test Post");
    assert_eq!(posts[1]["title"], "Test Post");
}

#[actix_rt::test]
async fn test_get_post_by_id() {
    let app = test_app!();
    let post = create!(app, sample());
    let id = post["_id"].as_str().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/posts/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["post"], post);
}

#[actix_rt::test]
async fn test_get_unknown_or_malformed_id_is_not_found() {
    let app = test_app!();

    let unknown = uuid::Uuid::new_v4();
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/posts/{unknown}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], format!("No post with id: {unknown}"));

    let req = test::TestRequest::get()
        .uri("/api/v1/posts/not-an-id")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_update_title_only() {
    let app = test_app!();
    let post = create!(app, json!({ "title": "T", "content": "C", "author": "A" }));
    let id = post["_id"].as_str().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/posts/{id}"))
        .set_json(json!({ "title": "T2" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let updated = &body["post"];
    assert_eq!(updated["_id"], post["_id"]);
    assert_eq!(updated["title"], "T2");
    assert_eq!(updated["content"], "C");
    assert_eq!(updated["author"], "A");
    assert_eq!(updated["createdAt"], post["createdAt"]);
    assert!(parse_time(&updated["updatedAt"]) > parse_time(&updated["createdAt"]));
}

#[actix_rt::test]
async fn test_update_invalid_title_is_bad_request() {
    let app = test_app!();
    let post = create!(app, sample());
    let id = post["_id"].as_str().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/posts/{id}"))
        .set_json(json!({ "title": "x".repeat(101) }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "Title cannot be more than 100 characters");
}

#[actix_rt::test]
async fn test_update_null_field_is_bad_request() {
    let app = test_app!();
    let post = create!(app, sample());
    let uri = format!("/api/v1/posts/{}", post["_id"].as_str().unwrap());

    let req = test::TestRequest::patch()
        .uri(&uri)
        .set_json(json!({ "title": null }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "Please provide title");

    let req = test::TestRequest::get().uri(&uri).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["post"]["title"], "Test Post");
}

#[actix_rt::test]
async fn test_update_unknown_id_is_not_found() {
    let app = test_app!();
    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/posts/{}", uuid::Uuid::new_v4()))
        .set_json(json!({ "title": "Updated Title" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_delete_post() {
    let app = test_app!();
    let post = create!(app, sample());
    let uri = format!("/api/v1/posts/{}", post["_id"].as_str().unwrap());

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "Post deleted successfully");

    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_unmatched_route() {
    let app = test_app!();
    let req = test::TestRequest::get().uri("/api/v1/comments").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "msg": "Route does not exist" }));
}

#[actix_rt::test]
async fn test_health_reports_storage() {
    let app = test_app!();
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
}

#[actix_rt::test]
async fn test_request_id_is_echoed() {
    let app = test_app!();
    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header((request_id::REQUEST_ID_HEADER, "abc-123"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        resp.headers().get(request_id::REQUEST_ID_HEADER).unwrap(),
        "abc-123"
    );

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key(request_id::REQUEST_ID_HEADER));
}

#[actix_rt::test]
async fn test_storage_failure_hides_detail() {
    let state = AppState {
        posts: PostStore::new(Arc::new(BrokenRepo), Arc::new(SystemClock)),
        storage: StorageKind::Memory,
        db: None,
    };
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let id = Uuid::new_v4();
    let requests = vec![
        test::TestRequest::get().uri("/api/v1/posts").to_request(),
        test::TestRequest::get()
            .uri(&format!("/api/v1/posts/{id}"))
            .to_request(),
        test::TestRequest::post()
            .uri("/api/v1/posts")
            .set_json(sample())
            .to_request(),
        test::TestRequest::delete()
            .uri(&format!("/api/v1/posts/{id}"))
            .to_request(),
    ];

    for req in requests {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = test::read_body(resp).await;
        let text = std::str::from_utf8(&bytes).unwrap();
        assert!(!text.contains("does not exist"), "leaked: {text}");

        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "msg": "Something went wrong, try again later" }));
    }
}
