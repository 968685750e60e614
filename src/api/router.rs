//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::{ApiResponse, UserGetDto, UserPostRequest, UserProfileDto, UserUpdateRequest};
use crate::api::handlers::users::UserHandlerState;
use crate::api::handlers::{health, users};
use crate::application::UserService;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Users
        users::list_users,
        users::create_user,
        users::login,
        users::get_user,
        users::update_user,
        users::logout,
    ),
    components(
        schemas(
            ApiResponse<String>,
            UserGetDto,
            UserProfileDto,
            UserPostRequest,
            UserUpdateRequest,
            health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service availability check."),
        (name = "Users", description = "User accounts: registration, login/logout, profile lookup and edits. The `name` field doubles as the password. At most one user is ONLINE at a time; any login attempt first clears every online flag."),
    ),
    info(
        title = "User Directory API",
        version = "0.1.0",
        description = "Minimal user-account service: register, log in, log out, list users, fetch by id, edit username and birthday."
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(service: Arc<UserService>) -> Router {
    let state = UserHandlerState { service };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{id}", get(users::get_user).put(users::update_user))
        .route("/login", put(users::login))
        .route("/logout/{id}", put(users::logout))
        .with_state(state)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::repositories::UserRepository;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    async fn test_app() -> Router {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        let service = Arc::new(UserService::new(Arc::new(UserRepository::new(db))));
        create_api_router(service)
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        let app = test_app().await;

        let response = app.oneshot(empty_request(Method::GET, "/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn register_login_and_failed_login_flow() {
        let app = test_app().await;

        // Register alice and bob.
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/users",
                json!({"username": "alice", "name": "Alice A"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let alice = body_json(response).await;
        assert_eq!(alice["username"], "alice");
        assert_eq!(alice["status"], "OFFLINE");

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/users",
                json!({"username": "bob", "name": "Bob B"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let bob = body_json(response).await;
        assert_eq!(bob["status"], "OFFLINE");
        assert_ne!(bob["id"], alice["id"]);

        // Bob logs in and goes online; alice stays offline.
        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                "/login",
                json!({"username": "bob", "name": "Bob B"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let logged_in = body_json(response).await;
        assert_eq!(logged_in["status"], "ONLINE");

        let response = app
            .clone()
            .oneshot(empty_request(Method::GET, "/users"))
            .await
            .unwrap();
        let users = body_json(response).await;
        let statuses: Vec<(&str, &str)> = users
            .as_array()
            .unwrap()
            .iter()
            .map(|u| (u["username"].as_str().unwrap(), u["status"].as_str().unwrap()))
            .collect();
        assert!(statuses.contains(&("bob", "ONLINE")));
        assert!(statuses.contains(&("alice", "OFFLINE")));

        // A failed attempt against alice clears every online flag
        // before the mismatch is detected.
        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                "/login",
                json!({"username": "alice", "name": "wrong"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .clone()
            .oneshot(empty_request(Method::GET, "/users"))
            .await
            .unwrap();
        let users = body_json(response).await;
        assert!(users
            .as_array()
            .unwrap()
            .iter()
            .all(|u| u["status"] == "OFFLINE"));
    }

    #[tokio::test]
    async fn duplicate_username_is_conflict() {
        let app = test_app().await;

        let request = json!({"username": "alice", "name": "Alice A"});
        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/users", request.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/users",
                json!({"username": "alice", "name": "Someone Else"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("username"));
    }

    #[tokio::test]
    async fn login_unknown_username_is_not_found() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(
                Method::PUT,
                "/login",
                json!({"username": "nobody", "name": "x"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn profile_fetch_and_edit() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/users",
                json!({"username": "alice", "name": "Alice A"}),
            ))
            .await
            .unwrap();
        let created = body_json(response).await;
        let id = created["id"].as_i64().unwrap();

        // Unknown id reports 404.
        let response = app
            .clone()
            .oneshot(empty_request(Method::GET, "/users/9999"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Birthday-only edit leaves the username alone.
        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/users/{}", id),
                json!({"birthday": "01/01/2000"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(empty_request(Method::GET, &format!("/users/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let profile = body_json(response).await;
        assert_eq!(profile["username"], "alice");
        assert_eq!(profile["birthday"], "01/01/2000");
        assert!(profile["creationDate"].as_str().is_some());
    }

    #[tokio::test]
    async fn logout_returns_no_content() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/users",
                json!({"username": "alice", "name": "Alice A"}),
            ))
            .await
            .unwrap();
        let created = body_json(response).await;
        let id = created["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                "/login",
                json!({"username": "alice", "name": "Alice A"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(empty_request(Method::PUT, &format!("/logout/{}", id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(empty_request(Method::GET, &format!("/users/{}", id)))
            .await
            .unwrap();
        let profile = body_json(response).await;
        assert_eq!(profile["status"], "OFFLINE");
    }
}
