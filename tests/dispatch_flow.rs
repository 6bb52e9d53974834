//! Integration tests for the shared dispatcher: authentication, status
//! classification, decoding failures and call-context cancellation.

use std::time::{Duration, Instant};

use akerun::config::Config;
use akerun::models::{Token, UsersParameter};
use akerun::{AkerunClient, AkerunError, CallContext};
use pretty_assertions::assert_eq;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_client(server: &MockServer) -> AkerunClient {
    AkerunClient::new(&Config::new(server.uri()).unwrap()).unwrap()
}

fn token() -> Token {
    Token::bearer("test_token")
}

#[tokio::test]
async fn bearer_token_is_attached() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/v3/organizations/org1/users/user1"))
        .and(header("authorization", "Bearer test_token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"user": {"id": "user1"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    client
        .get_user(&CallContext::new(), &token(), "org1", "user1")
        .await
        .unwrap();
}

#[tokio::test]
async fn server_error_carries_structured_body() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/v3/organizations/org1/users/user1"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"message": "internal error"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .get_user(&CallContext::new(), &token(), "org1", "user1")
        .await
        .unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    match err {
        AkerunError::Api { detail, .. } => {
            assert_eq!(detail.unwrap().message.as_deref(), Some("internal error"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn mismatched_body_is_decode_error() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/v3/organizations/org1/users/user1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"user": {"id": 42, "name": "Test User"}})),
        )
        .mount(&server)
        .await;

    let err = client
        .get_user(&CallContext::new(), &token(), "org1", "user1")
        .await
        .unwrap_err();

    assert!(matches!(err, AkerunError::Decode(_)));
}

#[tokio::test]
async fn empty_success_body_for_singular_resource_is_decode_error() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/v3/organizations/org1/users/user1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = client
        .get_user(&CallContext::new(), &token(), "org1", "user1")
        .await
        .unwrap_err();

    assert!(matches!(err, AkerunError::Decode(_)));
}

#[tokio::test]
async fn cancellation_abandons_pending_request() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/v3/organizations/org1/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"users": [{"id": "user1"}]}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let ctx = CallContext::new();
    let canceller = ctx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        canceller.cancel();
    });

    let started = Instant::now();
    let err = client
        .list_users(&ctx, &token(), "org1", UsersParameter::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AkerunError::Cancelled));
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn cancelled_context_sends_nothing() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = CallContext::new();
    ctx.cancel();

    let err = client
        .get_user(&ctx, &token(), "org1", "user1")
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
}

#[tokio::test]
async fn deadline_exceeded_while_waiting() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/v3/organizations/org1/users/user1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"user": {"id": "user1"}}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let ctx = CallContext::new().with_timeout(Duration::from_millis(100));
    let err = client
        .get_user(&ctx, &token(), "org1", "user1")
        .await
        .unwrap_err();

    assert!(matches!(err, AkerunError::DeadlineExceeded));
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    // Port 9 (discard) is closed on test hosts; the connect fails fast.
    let client = AkerunClient::new(&Config::new("http://127.0.0.1:9").unwrap()).unwrap();

    let err = client
        .get_user(&CallContext::new(), &token(), "org1", "user1")
        .await
        .unwrap_err();

    assert!(matches!(err, AkerunError::Http(_)));
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/v3/organizations/org1/users/user1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"user": {"id": "user1"}})),
        )
        .expect(4)
        .mount(&server)
        .await;

    let mut handles = Vec::new();
    for _ in 0..4 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .get_user(&CallContext::new(), &token(), "org1", "user1")
                .await
        }));
    }

    for handle in handles {
        let user = handle.await.unwrap().unwrap();
        assert_eq!(user.id, "user1");
    }
}
