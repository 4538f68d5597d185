//! Integration tests for the GraphQL request dispatcher.
//!
//! These tests run the client against a local mock endpoint and verify the
//! request body, header handling and the mapping of responses to errors.

use flight_board::clients::HttpError;
use flight_board::{ClientConfig, Endpoint, GraphqlClient, GraphqlError};
use serde_json::json;
use wiremock::matchers::{body_json, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client posting to `/graphql` on the mock server.
fn create_client(server: &MockServer) -> GraphqlClient {
    let config = ClientConfig::builder()
        .endpoint(Endpoint::new(format!("{}/graphql", server.uri())).unwrap())
        .build();
    GraphqlClient::new(&config)
}

// ============================================================================
// Request Shape
// ============================================================================

#[tokio::test]
async fn test_request_posts_query_and_empty_variables() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "query": "query { airlines { id } }",
            "variables": {}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"airlines": []}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let data = client
        .send_request("query { airlines { id } }", None)
        .await
        .unwrap();

    assert_eq!(data, json!({"airlines": []}));
}

#[tokio::test]
async fn test_request_forwards_variables() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({
            "query": "query($code: String!) { findAirportByCode(code: $code) { id } }",
            "variables": {"code": "JFK"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"findAirportByCode": {"id": "1"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let data = client
        .send_request(
            "query($code: String!) { findAirportByCode(code: $code) { id } }",
            Some(json!({"code": "JFK"})),
        )
        .await
        .unwrap();

    assert_eq!(data["findAirportByCode"]["id"], "1");
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header_regex("user-agent", r"^Flight Board Client v\S+ \| Rust "))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let data = client
        .send_request("query { flights { status } }", None)
        .await
        .unwrap();

    assert_eq!(data, json!({}));
}

#[tokio::test]
async fn test_user_agent_prefix_is_prepended() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header_regex("user-agent", r"^Departures Screen \| Flight Board Client v"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .endpoint(Endpoint::new(format!("{}/graphql", server.uri())).unwrap())
        .user_agent_prefix("Departures Screen")
        .build();
    let client = GraphqlClient::new(&config);

    client
        .send_request("query { flights { status } }", None)
        .await
        .unwrap();
}

// ============================================================================
// Error Mapping
// ============================================================================

#[tokio::test]
async fn test_single_graphql_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"message": "Not found"}]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client
        .send_request("query { flights { status } }", None)
        .await
        .unwrap_err();

    assert!(matches!(error, GraphqlError::Response { .. }));
    assert_eq!(error.to_string(), "Not found");
}

#[tokio::test]
async fn test_two_graphql_errors_are_comma_joined() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [
                {"message": "Airline not found"},
                {"message": "Airport not found"}
            ]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client
        .send_request("mutation { createFlight { status } }", None)
        .await
        .unwrap_err();

    assert_eq!(error.to_string(), "Airline not found, Airport not found");
}

#[tokio::test]
async fn test_graphql_errors_win_over_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{"message": "Cannot query field \"foo\" on type \"Query\"."}]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client.send_request("query { foo }", None).await.unwrap_err();

    assert_eq!(
        error.to_string(),
        "Cannot query field \"foo\" on type \"Query\"."
    );
}

#[tokio::test]
async fn test_server_error_without_graphql_errors_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client
        .send_request("query { flights { status } }", None)
        .await
        .unwrap_err();

    match error {
        GraphqlError::Http(HttpError::Response(e)) => {
            assert_eq!(e.code, 500);
            assert!(e.message.contains("upstream exploded"));
        }
        other => panic!("expected HTTP response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_data_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .mount(&server)
        .await;

    let client = create_client(&server);
    let error = client
        .send_request("query { flights { status } }", None)
        .await
        .unwrap_err();

    assert!(matches!(error, GraphqlError::MissingData));
}

#[tokio::test]
async fn test_typed_query_reports_shape_mismatch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"airlines": "not a list"}
        })))
        .mount(&server)
        .await;

    #[derive(Debug, serde::Deserialize)]
    struct Airlines {
        #[allow(dead_code)]
        airlines: Vec<serde_json::Value>,
    }

    let client = create_client(&server);
    let result = client
        .query::<Airlines>("query { airlines { id } }", None)
        .await;

    assert!(matches!(result, Err(GraphqlError::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    // Bind and release a port so nothing is listening on it.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let config = ClientConfig::builder()
        .endpoint(Endpoint::new(format!("http://127.0.0.1:{port}/graphql")).unwrap())
        .build();
    let client = GraphqlClient::new(&config);

    let error = client
        .send_request("query { flights { status } }", None)
        .await
        .unwrap_err();

    assert!(matches!(error, GraphqlError::Http(HttpError::Network(_))));
}
