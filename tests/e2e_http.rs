// tests/e2e_http.rs
use axum::http::StatusCode;
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

mod support;

use support::{
    ArticleRequestBuilder, assert_error_response, empty_request, json_request, make_test_router,
    send,
};

/// ユーザー登録と記事作成をまとめて行い、記事 id を返す
async fn seed_article(app: &axum::Router, handle: &str, body: Value) -> i64 {
    let (status, _) = send(
        app,
        json_request("POST", "/api/v1/users", None, &json!({ "handle": handle })),
    )
    .await;
    assert!(
        status == StatusCode::CREATED || status == StatusCode::CONFLICT,
        "unexpected register status {status}"
    );

    let (status, created) = send(
        app,
        json_request("POST", "/api/v1/articles", Some(handle), &body),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {created}");
    created["id"].as_i64().expect("article id")
}

#[tokio::test]
async fn health_returns_ok() {
    let app = make_test_router();
    let (status, body) = send(&app, empty_request("GET", "/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

/// X-User-Id なしの書き込みは 401
#[tokio::test]
async fn create_without_acting_user_returns_401() {
    let app = make_test_router();
    let req = json_request(
        "POST",
        "/api/v1/articles",
        None,
        &ArticleRequestBuilder::new().build(),
    );
    let resp = app.oneshot(req).await.unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn create_for_unregistered_user_returns_404() {
    let app = make_test_router();
    let req = json_request(
        "POST",
        "/api/v1/articles",
        Some("nobody"),
        &ArticleRequestBuilder::new().build(),
    );
    let resp = app.oneshot(req).await.unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn blank_title_returns_400() {
    let app = make_test_router();
    send(
        &app,
        json_request("POST", "/api/v1/users", None, &json!({ "handle": "uno" })),
    )
    .await;

    let req = json_request(
        "POST",
        "/api/v1/articles",
        Some("uno"),
        &ArticleRequestBuilder::new().title(" ").build(),
    );
    let resp = app.oneshot(req).await.unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn duplicate_registration_returns_409() {
    let app = make_test_router();
    let body = json!({ "handle": "uno", "nickname": "Uno" });
    let (status, account) = send(&app, json_request("POST", "/api/v1/users", None, &body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(account["displayName"], "Uno");
    assert_eq!(account["createdBy"], "uno");

    let resp = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/users", None, &body))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;

    let (status, fetched) = send(&app, empty_request("GET", "/api/v1/users/uno", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["handle"], "uno");
}

#[tokio::test]
async fn article_lifecycle_with_comments() {
    let app = make_test_router();
    let id = seed_article(
        &app,
        "uno",
        ArticleRequestBuilder::new()
            .title("Hello board")
            .content("first post")
            .hashtag("#intro")
            .build(),
    )
    .await;

    let comments_uri = format!("/api/v1/articles/{id}/comments");
    let (status, comment) = send(
        &app,
        json_request("POST", &comments_uri, Some("uno"), &json!({ "content": "welcome" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(comment["articleId"], id);

    let (status, detail) = send(
        &app,
        empty_request("GET", &format!("/api/v1/articles/{id}"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["title"], "Hello board");
    assert_eq!(detail["owner"]["handle"], "uno");
    assert_eq!(detail["comments"][0]["content"], "welcome");

    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/v1/articles/{id}"),
            Some("uno"),
            &json!({ "content": "edited post", "hashtag": "" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["content"], "edited post");
    assert_eq!(updated["title"], "Hello board");
    assert!(updated["hashtag"].is_null());

    let (status, _) = send(
        &app,
        empty_request("DELETE", &format!("/api/v1/articles/{id}"), Some("uno")),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let resp = app
        .clone()
        .oneshot(empty_request("GET", &format!("/api/v1/articles/{id}"), None))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;

    let (status, comments) = send(&app, empty_request("GET", &comments_uri, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comments, json!([]));
}

#[tokio::test]
async fn missing_article_writes_are_no_ops() {
    let app = make_test_router();

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/v1/articles/999",
            Some("uno"),
            &json!({ "title": "nope" }),
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;

    let (status, _) = send(
        &app,
        empty_request("DELETE", "/api/v1/articles/999", Some("uno")),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/articles/999/comments",
            Some("uno"),
            &json!({ "content": "hello?" }),
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn search_endpoints_return_summaries() {
    let app = make_test_router();
    let long_content = "x".repeat(150);
    seed_article(
        &app,
        "uno",
        ArticleRequestBuilder::new()
            .title("Rust tips")
            .content(long_content)
            .build(),
    )
    .await;
    seed_article(&app, "uno", ArticleRequestBuilder::new().title("Cooking").build()).await;

    let (status, page) = send(
        &app,
        empty_request(
            "GET",
            "/api/v1/articles?searchType=TITLE&searchValue=rust",
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalItems"], 1);
    let item = &page["items"][0];
    assert_eq!(item["title"], "Rust tips");
    assert_eq!(item["authorHandle"], "uno");
    assert_eq!(item["excerpt"].as_str().unwrap().chars().count(), 103);

    let (status, page) = send(
        &app,
        empty_request(
            "GET",
            "/api/v1/articles/search?createdBy=uno&sort=title,asc&size=1",
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalItems"], 2);
    assert_eq!(page["hasNext"], true);
    assert_eq!(page["items"][0]["title"], "Cooking");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = make_test_router();
    let (status, doc) = send(&app, empty_request("GET", "/openapi.json", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/v1/articles"].is_object());
    assert!(doc["components"]["securitySchemes"]["actingUser"].is_object());
}
