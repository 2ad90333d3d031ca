use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use todo_database::SqliteTodoRepository;
use todo_http::TodoApi;
use tower::ServiceExt;

async fn test_router() -> Router {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let db_name = format!(":memory:http_test_{}", timestamp);
    let repo = SqliteTodoRepository::new(&db_name).await.unwrap();
    repo.migrate().await.unwrap();
    TodoApi::new(Arc::new(repo)).create_router()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_healthz() {
    let app = test_router().await;

    let response = app
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "OK");
}

#[tokio::test]
async fn test_create_todo() {
    let app = test_router().await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/todos",
            json!({"subject": "foo", "description": "this is foo"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["todo"]["subject"], "foo");
    assert_eq!(body["todo"]["description"], "this is foo");
    assert!(body["todo"]["id"].as_i64().unwrap() > 0);
    assert!(body["todo"]["created_at"].is_string());
    assert!(body["todo"]["updated_at"].is_string());
}

#[tokio::test]
async fn test_create_todo_empty_subject_is_bad_request() {
    let app = test_router().await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/todos",
            json!({"subject": "", "description": "no subject"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_todo_malformed_body_is_server_error() {
    let app = test_router().await;

    let response = app
        .oneshot(
            Request::post("/todos")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_read_todos_newest_first() {
    let app = test_router().await;

    for subject in ["first", "second", "third"] {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/todos",
                json!({"subject": subject}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(Request::get("/todos").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let todos = body["todos"].as_array().unwrap();
    assert_eq!(todos.len(), 3);
    assert_eq!(todos[0]["subject"], "third");
    assert_eq!(todos[2]["subject"], "first");
}

#[tokio::test]
async fn test_read_todos_with_cursor_and_size() {
    let app = test_router().await;

    for subject in ["first", "second", "third"] {
        app.clone()
            .oneshot(json_request(
                Method::POST,
                "/todos",
                json!({"subject": subject}),
            ))
            .await
            .unwrap();
    }

    // Rows carry ids 1..3; prev_id=2 with size=3 leaves only id 1
    let response = app
        .oneshot(
            Request::get("/todos?prev_id=2&size=3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let todos = body["todos"].as_array().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["id"], 1);
}

#[tokio::test]
async fn test_read_todos_non_numeric_param_is_server_error() {
    let app = test_router().await;

    let response = app
        .oneshot(
            Request::get("/todos?prev_id=abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_read_todos_negative_param_is_bad_request() {
    let app = test_router().await;

    let response = app
        .oneshot(
            Request::get("/todos?size=-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_todo() {
    let app = test_router().await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/todos",
            json!({"subject": "before"}),
        ))
        .await
        .unwrap();
    let created = response_json(response).await;
    let id = created["todo"]["id"].as_i64().unwrap();

    let response = app
        .oneshot(json_request(
            Method::PUT,
            "/todos",
            json!({"id": id, "subject": "after", "description": "changed"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["todo"]["id"], id);
    assert_eq!(body["todo"]["subject"], "after");
    assert_eq!(body["todo"]["description"], "changed");
}

#[tokio::test]
async fn test_update_todo_missing_id_or_subject_is_bad_request() {
    let app = test_router().await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            "/todos",
            json!({"subject": "no id"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(json_request(
            Method::PUT,
            "/todos",
            json!({"id": 1, "subject": ""}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let app = test_router().await;

    let response = app
        .oneshot(json_request(
            Method::PUT,
            "/todos",
            json!({"id": 9999999, "subject": "ghost"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_todos() {
    let app = test_router().await;

    let mut ids = Vec::new();
    for subject in ["one", "two"] {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/todos",
                json!({"subject": subject}),
            ))
            .await
            .unwrap();
        let body = response_json(response).await;
        ids.push(body["todo"]["id"].as_i64().unwrap());
    }

    let response = app
        .clone()
        .oneshot(json_request(Method::DELETE, "/todos", json!({"ids": ids})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body, json!({}));

    let response = app
        .oneshot(Request::get("/todos").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = response_json(response).await;
    assert!(body["todos"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_empty_ids_is_bad_request() {
    let app = test_router().await;

    let response = app
        .oneshot(json_request(Method::DELETE, "/todos", json!({"ids": []})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let app = test_router().await;

    let response = app
        .oneshot(json_request(
            Method::DELETE,
            "/todos",
            json!({"ids": [424242]}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unsupported_method_is_method_not_allowed() {
    let app = test_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::PATCH)
                .uri("/todos")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
