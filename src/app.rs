//! HTTP router assembly.
//!
//! Every route is registered here against an explicit [`AppState`]; there is
//! no global application object.

use axum::{Router, handler::Handler, middleware as axum_middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::{handlers, middleware, state::AppState};

/// Build the application router.
///
/// # Routes
///
/// - `GET /health`, `GET /` - public probes
/// - `GET|POST /accounts`, `GET|PUT|DELETE /accounts/{id}` - account CRUD
///
/// POST and PUT require a JSON `Content-Type`. Unknown paths fall back to a
/// JSON 404.
pub fn build_router(state: AppState) -> Router {
    let require_json = axum_middleware::from_fn(middleware::content_type::require_json);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/", get(handlers::health::index))
        .route(
            "/accounts",
            get(handlers::accounts::list_accounts)
                .post(handlers::accounts::create_account.layer(require_json.clone())),
        )
        .route(
            "/accounts/{id}",
            get(handlers::accounts::get_account)
                .put(handlers::accounts::update_account.layer(require_json))
                .delete(handlers::accounts::delete_account),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryAccountStore;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
        response::Response,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::new(MemoryAccountStore::new()))
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn ann() -> Value {
        json!({
            "name": "Ann",
            "email": "a@x.com",
            "address": "1 Rd",
            "phone_number": "555"
        })
    }

    #[tokio::test]
    async fn health_and_index() {
        let app = app();

        let response = send(&app, empty_request("GET", "/health")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "ok"}));

        let response = send(&app, empty_request("GET", "/")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn create_read_delete_scenario() {
        let app = app();

        let response = send(&app, json_request("POST", "/accounts", ann())).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/accounts/1");
        let created = body_json(response).await;
        assert_eq!(
            created,
            json!({
                "id": 1,
                "name": "Ann",
                "email": "a@x.com",
                "address": "1 Rd",
                "phone_number": "555"
            })
        );

        let response = send(&app, empty_request("GET", "/accounts/1")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, created);

        let response = send(&app, empty_request("DELETE", "/accounts/1")).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());

        let response = send(&app, empty_request("GET", "/accounts/1")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Account not found"})
        );
    }

    #[tokio::test]
    async fn list_starts_empty_and_grows() {
        let app = app();

        let response = send(&app, empty_request("GET", "/accounts")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));

        send(&app, json_request("POST", "/accounts", ann())).await;
        send(&app, json_request("POST", "/accounts", json!({"name": "Bo"}))).await;

        let response = send(&app, empty_request("GET", "/accounts")).await;
        let body = body_json(response).await;
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Ann", "Bo"]);
    }

    #[tokio::test]
    async fn create_ignores_client_id_and_assigns_unique_ids() {
        let app = app();

        let mut first = ann();
        first["id"] = json!(77);
        let response = send(&app, json_request("POST", "/accounts", first)).await;
        assert_eq!(body_json(response).await["id"], 1);

        send(&app, empty_request("DELETE", "/accounts/1")).await;

        let response = send(&app, json_request("POST", "/accounts", ann())).await;
        assert_eq!(response.headers()[header::LOCATION], "/accounts/2");
        assert_eq!(body_json(response).await["id"], 2);
    }

    #[tokio::test]
    async fn create_with_wrong_content_type_is_415_and_stores_nothing() {
        let app = app();

        let request = Request::builder()
            .method("POST")
            .uri("/accounts")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(ann().to_string()))
            .unwrap();
        let response = send(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let request = Request::builder()
            .method("POST")
            .uri("/accounts")
            .body(Body::from(ann().to_string()))
            .unwrap();
        let response = send(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let response = send(&app, empty_request("GET", "/accounts")).await;
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn create_with_bad_body_is_400_and_stores_nothing() {
        let app = app();

        for body in ["", "{oops", "[1, 2]", r#"{"name": 5}"#] {
            let request = Request::builder()
                .method("POST")
                .uri("/accounts")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap();
            let response = send(&app, request).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body:?}");
            assert_eq!(
                body_json(response).await,
                json!({"error": "Invalid request"})
            );
        }

        let response = send(&app, empty_request("GET", "/accounts")).await;
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn create_without_account_fields_is_400_and_stores_nothing() {
        let app = app();

        for body in [json!({}), json!({"id": 4}), json!({"name": null})] {
            let response = send(&app, json_request("POST", "/accounts", body)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(response).await,
                json!({"error": "Invalid request"})
            );
        }

        let response = send(&app, empty_request("GET", "/accounts")).await;
        assert_eq!(body_json(response).await, json!([]));

        // The rejected bodies did not consume an id
        let response = send(&app, json_request("POST", "/accounts", ann())).await;
        assert_eq!(response.headers()[header::LOCATION], "/accounts/1");
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let app = app();
        send(&app, json_request("POST", "/accounts", ann())).await;

        let response = send(
            &app,
            json_request("PUT", "/accounts/1", json!({"name": "X", "id": 9})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let expected = json!({
            "id": 1,
            "name": "X",
            "email": "a@x.com",
            "address": "1 Rd",
            "phone_number": "555"
        });
        assert_eq!(body_json(response).await, expected);

        let response = send(&app, empty_request("GET", "/accounts/1")).await;
        assert_eq!(body_json(response).await, expected);
    }

    #[tokio::test]
    async fn update_missing_account_is_404() {
        let app = app();
        let response = send(&app, json_request("PUT", "/accounts/3", ann())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_checks_content_type_and_body() {
        let app = app();
        send(&app, json_request("POST", "/accounts", ann())).await;

        let request = Request::builder()
            .method("PUT")
            .uri("/accounts/1")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(r#"{"name": "X"}"#))
            .unwrap();
        assert_eq!(
            send(&app, request).await.status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );

        let response = send(&app, json_request("PUT", "/accounts/1", json!("X"))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        for body in ["", "{oops", r#"{"email": 7}"#] {
            let request = Request::builder()
                .method("PUT")
                .uri("/accounts/1")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap();
            let response = send(&app, request).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body:?}");
            assert_eq!(
                body_json(response).await,
                json!({"error": "Invalid request"})
            );
        }

        let response = send(&app, empty_request("GET", "/accounts/1")).await;
        let mut expected = ann();
        expected["id"] = json!(1);
        assert_eq!(body_json(response).await, expected);
    }

    #[tokio::test]
    async fn update_with_empty_object_changes_nothing() {
        let app = app();
        send(&app, json_request("POST", "/accounts", ann())).await;

        let response = send(&app, json_request("PUT", "/accounts/1", json!({}))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let mut expected = ann();
        expected["id"] = json!(1);
        assert_eq!(body_json(response).await, expected);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_204() {
        let app = app();
        let response = send(&app, empty_request("DELETE", "/accounts/12345")).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn non_integer_id_is_404() {
        let app = app();
        for method in ["GET", "DELETE"] {
            let response = send(&app, empty_request(method, "/accounts/abc")).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let app = app();
        let response = send(&app, empty_request("GET", "/nope")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "Not found"}));
    }
}
