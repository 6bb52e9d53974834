//! Integration tests for the organizations endpoints using wiremock.

use akerun::config::Config;
use akerun::models::{OrganizationsParameter, Token};
use akerun::{AkerunClient, CallContext};
use pretty_assertions::assert_eq;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_client(server: &MockServer) -> AkerunClient {
    AkerunClient::new(&Config::new(server.uri()).unwrap()).unwrap()
}

#[tokio::test]
async fn list_organizations_passes_cursor_parameters() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/v3/organizations"))
        .and(query_param("limit", "2"))
        .and(query_param("id_after", "O-100"))
        .and(header("authorization", "Bearer org_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "organizations": [{"id": "O-101"}, {"id": "O-102"}]
        })))
        .mount(&server)
        .await;

    let params = OrganizationsParameter {
        limit: 2,
        id_after: "O-100".to_string(),
        ..Default::default()
    };
    let organizations = client
        .list_organizations(&CallContext::new(), &Token::bearer("org_token"), params)
        .await
        .unwrap();

    let ids: Vec<&str> = organizations.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["O-101", "O-102"]);
}

#[tokio::test]
async fn get_organization_returns_name() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/v3/organizations/O-101"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "organization": {"id": "O-101", "name": "Photosynth"}
        })))
        .mount(&server)
        .await;

    let organization = client
        .get_organization(&CallContext::new(), &Token::bearer("org_token"), "O-101")
        .await
        .unwrap();

    assert_eq!(organization.id, "O-101");
    assert_eq!(organization.name, "Photosynth");
}

#[tokio::test]
async fn expired_token_surfaces_as_unauthorized() {
    let server = MockServer::start().await;
    let client = mock_client(&server);

    Mock::given(method("GET"))
        .and(path("/v3/organizations"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "invalid_token",
            "error_description": "The access token expired"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client
        .list_organizations(
            &CallContext::new(),
            &Token::bearer("stale"),
            OrganizationsParameter::default(),
        )
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert!(err.to_string().contains("The access token expired"));
}
