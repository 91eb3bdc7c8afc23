use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use repodex_adapter::controller::http::{build_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

const UNKNOWN_ID: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";

fn app() -> Router {
    build_router(AppState::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

async fn create(app: &Router, body: Value) -> Value {
    let (status, created) = send(app, Method::POST, "/repositories", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    created
}

fn id_of(record: &Value) -> String {
    record["id"].as_str().expect("id").to_string()
}

#[tokio::test]
async fn create_defaults_techs_and_likes() {
    let app = app();

    let created = create(&app, json!({ "title": "t", "url": "http://x" })).await;

    assert_eq!(created["title"], "t");
    assert_eq!(created["url"], "http://x");
    assert_eq!(created["techs"], json!([]));
    assert_eq!(created["likes"], 0);
    assert_eq!(id_of(&created).len(), 36);
}

#[tokio::test]
async fn create_rejects_bad_url_regardless_of_other_fields() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/repositories",
        Some(json!({ "title": "t", "url": "git@github.com:x/y.git", "techs": ["Rust"] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid url format" }));

    let (_, listed) = send(&app, Method::GET, "/repositories", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn create_requires_title_or_url() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/repositories", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Fields \"title\" and \"url\" are required!" })
    );

    let (status, _) = send(&app, Method::POST, "/repositories", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // One of the two is enough
    let created = create(&app, json!({ "url": "https://x" })).await;
    assert!(created.get("title").is_none());
}

#[tokio::test]
async fn create_rejects_malformed_json() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/repositories")
        .body(Body::from("{ nope"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_returns_records_in_insertion_order() {
    let app = app();
    let first = create(&app, json!({ "title": "first", "url": "http://a" })).await;
    let second = create(&app, json!({ "title": "second", "url": "http://b" })).await;

    let (status, listed) = send(&app, Method::GET, "/repositories", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([first, second]));
}

#[tokio::test]
async fn list_filters_by_title_and_techs() {
    let app = app();
    let api = create(
        &app,
        json!({ "title": "rest-api", "url": "http://a", "techs": ["Rust", "Axum"] }),
    )
    .await;
    let cli = create(
        &app,
        json!({ "title": "cli", "url": "http://b", "techs": ["Rust"] }),
    )
    .await;
    let web = create(
        &app,
        json!({ "title": "web-api", "url": "http://c", "techs": ["Node.js"] }),
    )
    .await;

    let (_, by_title) = send(&app, Method::GET, "/repositories?title=api", None).await;
    assert_eq!(by_title, json!([api.clone(), web]));

    let (_, by_tech) = send(&app, Method::GET, "/repositories?techs=Rust", None).await;
    assert_eq!(by_tech, json!([api, cli]));

    let (_, case_sensitive) = send(&app, Method::GET, "/repositories?title=API", None).await;
    assert_eq!(case_sensitive, json!([]));

    let (_, empty_values) = send(&app, Method::GET, "/repositories?title=&techs=", None).await;
    assert_eq!(empty_values.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn list_with_title_and_techs_applies_both_filters() {
    let app = app();
    let api = create(
        &app,
        json!({ "title": "rest-api", "url": "http://a", "techs": ["Rust"] }),
    )
    .await;
    create(
        &app,
        json!({ "title": "web-api", "url": "http://b", "techs": ["Node.js"] }),
    )
    .await;
    create(
        &app,
        json!({ "title": "cli", "url": "http://c", "techs": ["Rust"] }),
    )
    .await;

    let (status, listed) = send(&app, Method::GET, "/repositories?title=api&techs=Rust", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([api]));
}

#[tokio::test]
async fn list_with_repeated_param_uses_last_value() {
    let app = app();
    create(&app, json!({ "title": "alpha", "url": "http://a" })).await;
    let beta = create(&app, json!({ "title": "beta", "url": "http://b" })).await;

    let (status, listed) = send(&app, Method::GET, "/repositories?title=alpha&title=beta", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([beta]));
}

#[tokio::test]
async fn update_replaces_record() {
    let app = app();
    let created = create(
        &app,
        json!({ "title": "old", "url": "http://old", "techs": ["Go"] }),
    )
    .await;
    let id = id_of(&created);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/repositories/{}", id),
        Some(json!({ "title": "new", "url": "https://new", "techs": ["Rust"] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({ "id": id, "title": "new", "url": "https://new", "techs": ["Rust"] })
    );

    let (_, listed) = send(&app, Method::GET, "/repositories", None).await;
    assert_eq!(listed, json!([updated]));
}

#[tokio::test]
async fn update_with_non_negative_likes_leaves_record_unchanged() {
    let app = app();
    let created = create(&app, json!({ "title": "t", "url": "http://x" })).await;
    let id = id_of(&created);

    for likes in [json!(0), json!(7)] {
        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/repositories/{}", id),
            Some(json!({ "title": "changed", "url": "http://y", "likes": likes })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "likes": 0 }));
    }

    let (_, listed) = send(&app, Method::GET, "/repositories", None).await;
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn update_stores_negative_likes() {
    let app = app();
    let created = create(&app, json!({ "title": "t", "url": "http://x" })).await;
    let id = id_of(&created);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/repositories/{}", id),
        Some(json!({ "title": "t", "likes": -2 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({ "id": id, "title": "t", "likes": -2 }));
}

#[tokio::test]
async fn update_stores_fractional_negative_likes_as_sent() {
    let app = app();
    let created = create(&app, json!({ "title": "t", "url": "http://x" })).await;
    let id = id_of(&created);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/repositories/{}", id),
        Some(json!({ "title": "t", "likes": -1.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({ "id": id, "title": "t", "likes": -1.5 }));

    let (_, body) = send(&app, Method::POST, &format!("/repositories/{}/like", id), None).await;
    assert_eq!(body, json!({ "likes": -0.5 }));
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/repositories/{}", UNKNOWN_ID),
        Some(json!({ "title": "t" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No repositories found with this id" }));
}

#[tokio::test]
async fn update_rejects_bad_url_before_lookup() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/repositories/{}", UNKNOWN_ID),
        Some(json!({ "url": "example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid url format" }));
}

#[tokio::test]
async fn delete_removes_record() {
    let app = app();
    let keep = create(&app, json!({ "title": "keep", "url": "http://a" })).await;
    let gone = create(&app, json!({ "title": "gone", "url": "http://b" })).await;

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/repositories/{}", id_of(&gone)),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, listed) = send(&app, Method::GET, "/repositories", None).await;
    assert_eq!(listed, json!([keep]));

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/repositories/{}", id_of(&gone)),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No repositories found with this id" }));
}

#[tokio::test]
async fn like_increments_count() {
    let app = app();
    let created = create(&app, json!({ "title": "t", "url": "http://x" })).await;
    let uri = format!("/repositories/{}/like", id_of(&created));

    let (status, body) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "likes": 1 }));

    let (_, body) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(body, json!({ "likes": 2 }));

    let (_, listed) = send(&app, Method::GET, "/repositories", None).await;
    assert_eq!(listed[0]["likes"], 2);
}

#[tokio::test]
async fn like_unknown_id_is_not_found() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/repositories/{}/like", UNKNOWN_ID),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No repositories found with this id" }));
}

#[tokio::test]
async fn malformed_id_is_rejected_before_handlers() {
    let app = app();
    let expected = json!({ "error": "This is an invalid repository id!" });

    let (status, body) = send(
        &app,
        Method::PUT,
        "/repositories/abc",
        Some(json!({ "url": "not-a-url" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, expected);

    let (status, body) = send(&app, Method::DELETE, "/repositories/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, expected);

    let (status, body) = send(&app, Method::POST, "/repositories/abc/like", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn malformed_id_is_rejected_on_paths_without_a_route() {
    let app = app();
    let expected = json!({ "error": "This is an invalid repository id!" });

    let (status, body) = send(&app, Method::GET, "/repositories/abc/other", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, expected);

    let (status, body) = send(&app, Method::GET, "/repositories/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, expected);

    // A well-formed id with no route below it is just an unknown route
    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/repositories/{}/other", UNKNOWN_ID),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Route not found" }));
}

#[tokio::test]
async fn undecodable_id_is_rejected_as_json() {
    let app = app();

    let (status, body) = send(&app, Method::DELETE, "/repositories/%FF", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "This is an invalid repository id!" }));
}

#[tokio::test]
async fn create_like_then_filter_scenario() {
    let app = app();
    let created = create(&app, json!({ "title": "t", "url": "http://x" })).await;
    let id = id_of(&created);

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/repositories/{}/like", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "likes": 1 }));

    let (status, listed) = send(&app, Method::GET, "/repositories?title=t", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        listed,
        json!([{ "id": id, "title": "t", "url": "http://x", "techs": [], "likes": 1 }])
    );
}

#[tokio::test]
async fn responses_allow_any_origin() {
    let app = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/repositories")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let preflight = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri(format!("/repositories/{}", UNKNOWN_ID))
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(preflight.status(), StatusCode::NO_CONTENT);
    assert_eq!(preflight.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/nothing-here", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Route not found" }));

    let (status, body) = send(&app, Method::GET, &format!("/repositories/{}", UNKNOWN_ID), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Route not found" }));
}
