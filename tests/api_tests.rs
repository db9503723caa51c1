use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use cupcakes_api::app;
use entity::{cupcake, user};
use sea_orm::{ConnectionTrait, Database, Schema};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn setup_app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);
    db.execute(builder.build(&schema.create_table_from_entity(user::Entity)))
        .await
        .unwrap();
    db.execute(builder.build(&schema.create_table_from_entity(cupcake::Entity)))
        .await
        .unwrap();
    app(db)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn read_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn cupcake_lifecycle() {
    let app = setup_app().await;

    // Create
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/cupcakes",
            json!({
                "title": "Eating Clean",
                "author": "Inge Tumiwa-Bachrens",
                "price": 85000
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = read_json(response).await;
    assert_eq!(created["title"], "Eating Clean");
    let id = created["id"].as_i64().unwrap();

    // Read it back
    let response = app
        .clone()
        .oneshot(get_request(&format!("/cupcakes/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = read_json(response).await;
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["title"], "Eating Clean");
    assert_eq!(fetched["author"], "Inge Tumiwa-Bachrens");

    // Delete
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/cupcakes/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({ "message": "Deleted successfully" })
    );

    // Gone from the default scope
    let response = app
        .clone()
        .oneshot(get_request(&format!("/cupcakes/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        read_json(response).await,
        json!({ "message": "Item not found" })
    );
}

#[tokio::test]
async fn list_returns_only_live_cupcakes() {
    let app = setup_app().await;

    for title in ["First", "Second"] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/cupcakes",
                json!({ "title": title, "author": "A" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cupcakes/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get_request("/cupcakes")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cupcakes = read_json(response).await;
    let cupcakes = cupcakes.as_array().unwrap();
    assert_eq!(cupcakes.len(), 1);
    assert_eq!(cupcakes[0]["title"], "Second");
}

#[tokio::test]
async fn create_validation_failures_are_bad_requests() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/cupcakes",
            json!({ "title": "Eating Clean" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({ "message": "The author field is required." })
    );

    let response = app
        .clone()
        .oneshot(json_request("POST", "/cupcakes", json!({ "author": "A" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({ "message": "The title field is required." })
    );
}

#[tokio::test]
async fn duplicate_title_is_a_bad_request() {
    let app = setup_app().await;

    let body = json!({ "title": "Eating Clean", "author": "A" });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/cupcakes", body.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/cupcakes", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        read_json(response).await,
        json!({ "message": "The title has already been taken." })
    );
}

#[tokio::test]
async fn update_reports_success_message() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/cupcakes",
            json!({ "title": "Eating Clean", "author": "A" }),
        ))
        .await
        .unwrap();
    let id = read_json(response).await["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/cupcakes/{id}"),
            json!({ "title": "Eating Clean", "author": "B" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({ "message": "Updated successfully" })
    );

    let response = app
        .clone()
        .oneshot(get_request(&format!("/cupcakes/{id}")))
        .await
        .unwrap();
    assert_eq!(read_json(response).await["author"], "B");
}

#[tokio::test]
async fn update_and_delete_of_unknown_id_are_not_found() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/cupcakes/99",
            json!({ "title": "T", "author": "A" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        read_json(response).await,
        json!({ "message": "Item not found" })
    );

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cupcakes/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
