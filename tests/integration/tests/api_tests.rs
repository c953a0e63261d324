//! API integration tests
//!
//! Each test spawns the full application with in-memory storage, so no
//! external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, test_config, TestServer, API,
};
use reqwest::StatusCode;

async fn server() -> TestServer {
    TestServer::start().await.expect("Failed to start server")
}

async fn create_item(server: &TestServer, token: &str, name: &str) -> ItemResponse {
    let response = server
        .post_auth(&format!("{API}/items"), token, &CreateItemRequest::named(name))
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = server().await;
    let response = server.get(&format!("{API}/health")).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = server().await;
    let response = server.get(&format!("{API}/health/ready")).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["storage"], "healthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    let server = server().await;
    let request = RegisterRequest::unique();

    let auth = server.register(&request).await.unwrap();

    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.name, request.name);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_register_response_hides_password() {
    let server = server().await;
    let response = server
        .post(&format!("{API}/auth/register"), &RegisterRequest::unique())
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    let user = body["user"].as_object().unwrap();
    let mut keys: Vec<&str> = user.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["email", "id", "name"]);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = server().await;
    let request = RegisterRequest::unique();
    server.register(&request).await.unwrap();

    let response = server
        .post(&format!("{API}/auth/register"), &request)
        .await
        .unwrap();
    let body = assert_error(response, StatusCode::CONFLICT, "CONFLICT")
        .await
        .unwrap();
    assert_eq!(body.message, "A user with this email already exists");
}

#[tokio::test]
async fn test_register_invalid_input() {
    let server = server().await;

    let mut short_password = RegisterRequest::unique();
    short_password.password = "short".to_string();
    let mut bad_email = RegisterRequest::unique();
    bad_email.email = "not-an-email".to_string();
    let mut blank_name = RegisterRequest::unique();
    blank_name.name = "   ".to_string();

    for request in [short_password, bad_email, blank_name] {
        let response = server
            .post(&format!("{API}/auth/register"), &request)
            .await
            .unwrap();
        assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_login() {
    let server = server().await;
    let request = RegisterRequest::unique();
    let registered = server.register(&request).await.unwrap();

    let response = server
        .post(
            &format!("{API}/auth/login"),
            &LoginRequest::from_register(&request),
        )
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user, registered.user);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let server = server().await;
    let request = RegisterRequest::unique();
    server.register(&request).await.unwrap();

    let wrong_password = LoginRequest {
        email: request.email.clone(),
        password: "WrongPass123!".to_string(),
    };
    let unknown_email = LoginRequest {
        email: "nobody@example.com".to_string(),
        password: request.password.clone(),
    };

    let mut bodies = Vec::new();
    for login in [wrong_password, unknown_email] {
        let response = server
            .post(&format!("{API}/auth/login"), &login)
            .await
            .unwrap();
        bodies.push(
            assert_error(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
                .await
                .unwrap()
                .message,
        );
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[0], "Invalid email or password");
}

#[tokio::test]
async fn test_me() {
    let server = server().await;
    let auth = server.register(&RegisterRequest::unique()).await.unwrap();

    let response = server
        .get_auth(&format!("{API}/auth/me"), &auth.token)
        .await
        .unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me, auth.user);
}

#[tokio::test]
async fn test_missing_or_invalid_token() {
    let server = server().await;

    let response = server.get(&format!("{API}/items")).await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
        .await
        .unwrap();

    let response = server
        .get_auth(&format!("{API}/auth/me"), "not.a.token")
        .await
        .unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_token_from_other_secret_is_rejected() {
    let issuer = TestServer::start_with_config(
        test_config(&[("JWT_SECRET", "another-secret-entirely-0123456789abcdef")]).unwrap(),
    )
    .await
    .unwrap();
    let foreign = issuer.register(&RegisterRequest::unique()).await.unwrap();

    let server = server().await;
    let response = server
        .get_auth(&format!("{API}/items"), &foreign.token)
        .await
        .unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
        .await
        .unwrap();
}

// ============================================================================
// Item Tests
// ============================================================================

#[tokio::test]
async fn test_create_item() {
    let server = server().await;
    let auth = server.register(&RegisterRequest::unique()).await.unwrap();

    let item = create_item(&server, &auth.token, "First").await;

    assert_eq!(item.name, "First");
    assert_eq!(item.description, "First description");
    assert_eq!(item.status, ItemStatus::Inactive);
    assert_eq!(item.created_at, item.updated_at);
}

#[tokio::test]
async fn test_item_wire_shape() {
    let server = server().await;
    let auth = server.register(&RegisterRequest::unique()).await.unwrap();

    let response = server
        .post_auth(
            &format!("{API}/items"),
            &auth.token,
            &CreateItemRequest {
                name: "Bare".to_string(),
                description: None,
            },
        )
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body["description"], "");
    assert_eq!(body["status"], "inactive");
    assert!(body.get("createdAt").is_some());
    assert!(body.get("updatedAt").is_some());
    assert!(body.get("userId").is_none());
}

#[tokio::test]
async fn test_create_item_validation() {
    let server = server().await;
    let auth = server.register(&RegisterRequest::unique()).await.unwrap();

    let too_long = "x".repeat(201);
    for name in ["", "   ", too_long.as_str()] {
        let response = server
            .post_auth(
                &format!("{API}/items"),
                &auth.token,
                &CreateItemRequest::named(name),
            )
            .await
            .unwrap();
        assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            .await
            .unwrap();
    }

    let long_description = CreateItemRequest {
        name: "ok".to_string(),
        description: Some("d".repeat(1001)),
    };
    let response = server
        .post_auth(&format!("{API}/items"), &auth.token, &long_description)
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();

    // Nothing was persisted
    let response = server
        .get_auth(&format!("{API}/items"), &auth.token)
        .await
        .unwrap();
    let list: ItemListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list.total, 0);
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let server = server().await;
    let auth = server.register(&RegisterRequest::unique()).await.unwrap();

    let response = server
        .post_raw(&format!("{API}/items"), &auth.token, "{\"name\": ")
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_item_bad_id() {
    let server = server().await;
    let auth = server.register(&RegisterRequest::unique()).await.unwrap();

    let response = server
        .get_auth(&format!("{API}/items/not-a-uuid"), &auth.token)
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_unknown_item() {
    let server = server().await;
    let auth = server.register(&RegisterRequest::unique()).await.unwrap();

    let response = server
        .get_auth(
            &format!("{API}/items/00000000-0000-4000-8000-000000000000"),
            &auth.token,
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_activate_and_deactivate() {
    let server = server().await;
    let auth = server.register(&RegisterRequest::unique()).await.unwrap();
    let item = create_item(&server, &auth.token, "Toggle").await;

    let path = format!("{API}/items/{}", item.id);

    // Deactivating a never-activated item fails
    let response = server
        .post_empty_auth(&format!("{path}/deactivate"), &auth.token)
        .await
        .unwrap();
    let body = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();
    assert_eq!(body.message, "Item is already inactive");

    let response = server
        .post_empty_auth(&format!("{path}/activate"), &auth.token)
        .await
        .unwrap();
    let active: ItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(active.status, ItemStatus::Active);
    assert!(active.updated_at > item.updated_at);

    let response = server
        .post_empty_auth(&format!("{path}/activate"), &auth.token)
        .await
        .unwrap();
    let body = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();
    assert_eq!(body.message, "Item is already active");

    let response = server
        .post_empty_auth(&format!("{path}/deactivate"), &auth.token)
        .await
        .unwrap();
    let inactive: ItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(inactive.status, ItemStatus::Inactive);
}

#[tokio::test]
async fn test_update_item() {
    let server = server().await;
    let auth = server.register(&RegisterRequest::unique()).await.unwrap();
    let item = create_item(&server, &auth.token, "Before").await;
    let path = format!("{API}/items/{}", item.id);

    let response = server
        .patch_auth(
            &path,
            &auth.token,
            &UpdateItemRequest {
                name: Some("After".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let updated: ItemResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.name, "After");
    assert_eq!(updated.description, item.description);
    assert_eq!(updated.status, item.status);
    assert_eq!(updated.created_at, item.created_at);
    assert!(updated.updated_at > item.updated_at);

    let response = server
        .patch_auth(
            &path,
            &auth.token,
            &UpdateItemRequest {
                name: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();

    let response = server.get_auth(&path, &auth.token).await.unwrap();
    let stored: ItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_delete_item() {
    let server = server().await;
    let auth = server.register(&RegisterRequest::unique()).await.unwrap();
    let item = create_item(&server, &auth.token, "Doomed").await;
    let path = format!("{API}/items/{}", item.id);

    let response = server.delete_auth(&path, &auth.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&path, &auth.token).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND")
        .await
        .unwrap();

    let response = server.delete_auth(&path, &auth.token).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_items_are_isolated_between_users() {
    let server = server().await;
    let owner = server.register(&RegisterRequest::unique()).await.unwrap();
    let other = server.register(&RegisterRequest::unique()).await.unwrap();
    let item = create_item(&server, &owner.token, "Private").await;
    let path = format!("{API}/items/{}", item.id);

    let responses = [
        server.get_auth(&path, &other.token).await.unwrap(),
        server
            .patch_auth(
                &path,
                &other.token,
                &UpdateItemRequest {
                    name: Some("Hijacked".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap(),
        server
            .post_empty_auth(&format!("{path}/activate"), &other.token)
            .await
            .unwrap(),
        server.delete_auth(&path, &other.token).await.unwrap(),
    ];
    for response in responses {
        let body = assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND")
            .await
            .unwrap();
        assert_eq!(body.message, "Item not found");
    }

    let response = server
        .get_auth(&format!("{API}/items"), &other.token)
        .await
        .unwrap();
    let list: ItemListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(list.items.is_empty());

    let response = server.get_auth(&path, &owner.token).await.unwrap();
    let stored: ItemResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stored, item);
}

#[tokio::test]
async fn test_list_items_pagination() {
    let server = server().await;
    let auth = server.register(&RegisterRequest::unique()).await.unwrap();
    for name in ["one", "two", "three"] {
        create_item(&server, &auth.token, name).await;
    }

    let response = server
        .get_auth(&format!("{API}/items?page=1&limit=2"), &auth.token)
        .await
        .unwrap();
    let first: ItemListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.total, 3);
    assert_eq!((first.page, first.limit), (1, 2));
    assert_eq!(first.items[0].name, "three");

    let response = server
        .get_auth(&format!("{API}/items?page=2&limit=2"), &auth.token)
        .await
        .unwrap();
    let second: ItemListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].name, "one");

    let response = server
        .get_auth(&format!("{API}/items?page=9"), &auth.token)
        .await
        .unwrap();
    let beyond: ItemListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total, 3);
    assert_eq!(beyond.limit, 20);
}

#[tokio::test]
async fn test_list_items_bad_query() {
    let server = server().await;
    let auth = server.register(&RegisterRequest::unique()).await.unwrap();

    for query in ["page=0", "limit=0", "limit=101", "page=abc"] {
        let response = server
            .get_auth(&format!("{API}/items?{query}"), &auth.token)
            .await
            .unwrap();
        assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            .await
            .unwrap();
    }
}

// ============================================================================
// Middleware Tests
// ============================================================================

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = server().await;
    let response = server
        .post(&format!("{API}/auth/login"), &LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "whatever".to_string(),
        })
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_rate_limit_skips_health() {
    let config = test_config(&[
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1"),
        ("RATE_LIMIT_BURST", "2"),
    ])
    .unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();

    let mut statuses = Vec::new();
    for _ in 0..5 {
        statuses.push(server.get(&format!("{API}/auth/me")).await.unwrap().status());
    }
    assert!(statuses.contains(&StatusCode::TOO_MANY_REQUESTS));

    let response = server.get(&format!("{API}/health")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
