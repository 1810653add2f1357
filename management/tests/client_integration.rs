use auth0_management::{ManagementClient, ManagementError, RetryConfig};
use serde_json::{Value, json};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn token_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "access_token": "mgmt-token",
        "token_type": "Bearer",
        "expires_in": 86400
    }))
}

fn client_for(server: &MockServer) -> ManagementClient {
    ManagementClient::builder(server.uri())
        .client_credentials("client-id", "client-secret")
        .user_agent("Terraform-Provider-Auth0/test")
        .retry(RetryConfig {
            max_retries: 1,
            initial_backoff_ms: 10,
            max_backoff_ms: 20
        })
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_build_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(token_response())
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(!client.has_cached_token().await);
}

#[tokio::test]
async fn test_token_exchange_sends_client_credentials() {
    let server = MockServer::start().await;
    let audience = urlencoding::encode(&format!("{}/api/v2/", server.uri())).into_owned();

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=client-id"))
        .and(body_string_contains("client_secret=client-secret"))
        .and(body_string_contains(format!("audience={audience}")))
        .respond_with(token_response())
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.access_token().await.unwrap(), "mgmt-token");
    assert!(client.has_cached_token().await);
}

#[tokio::test]
async fn test_token_is_cached_across_requests() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(token_response())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/roles"))
        .and(header("Authorization", "Bearer mgmt-token"))
        .and(header("User-Agent", "Terraform-Provider-Auth0/test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "rol_1" }])))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first: Vec<Value> = client.get("/roles").await.unwrap();
    let second: Vec<Value> = client.get("roles").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first[0]["id"], "rol_1");
}

#[tokio::test]
async fn test_token_rejection_surfaces_oauth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("access_denied"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get::<Value>("/clients").await.unwrap_err();
    assert!(matches!(err, ManagementError::OAuthError(ref msg) if msg.contains("access_denied")));
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(token_response())
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/roles"))
        .and(body_string_contains("\"name\":\"admin\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "rol_2", "name": "admin" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created: Value = client.post("/roles", &json!({ "name": "admin" })).await.unwrap();
    assert_eq!(created["id"], "rol_2");
}

#[tokio::test]
async fn test_delete_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(token_response())
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/roles/rol_2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete("/roles/rol_2").await.unwrap();
}

#[tokio::test]
async fn test_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(token_response())
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/clients/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get::<Value>("/clients/missing").await.unwrap_err();
    assert!(matches!(err, ManagementError::NotFound(ref p) if p == "/clients/missing"));
}

#[tokio::test]
async fn test_unauthorized_drops_cached_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(token_response())
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/tenants/settings"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get::<Value>("/tenants/settings").await.unwrap_err();
    assert!(matches!(err, ManagementError::AuthenticationError(_)));
    assert!(!client.has_cached_token().await);
}

#[tokio::test]
async fn test_rate_limit_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(token_response())
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/rules"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/rules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let rules: Vec<Value> = client.get("/rules").await.unwrap();
    assert!(rules.is_empty());
}

#[tokio::test]
async fn test_rate_limit_exhausted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(token_response())
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/hooks"))
        .respond_with(ResponseTemplate::new(429))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get::<Value>("/hooks").await.unwrap_err();
    assert!(err.is_retryable());
    assert!(err.retry_after().is_some());
}

#[tokio::test]
async fn test_server_error_keeps_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(token_response())
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/v2/branding"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .patch::<_, Value>("/branding", &json!({ "colors": {} }))
        .await
        .unwrap_err();
    assert!(matches!(err, ManagementError::ApiError { status: 500, ref message } if message == "boom"));
}

#[tokio::test]
async fn test_out_of_range_token_lifetime_is_rejected() {
    for expires_in in [json!(9_223_372_036_854_775_u64), json!(u64::MAX)] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "mgmt-token",
                "token_type": "Bearer",
                "expires_in": expires_in
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.access_token().await.unwrap_err();
        assert!(
            matches!(err, ManagementError::OAuthError(ref msg) if msg.contains("invalid expires_in")),
            "expires_in={expires_in}: {err}"
        );
        assert!(!client.has_cached_token().await);
    }
}
