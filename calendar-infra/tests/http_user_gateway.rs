use anyhow::Result as AnyResult;
use calendar_application::{AppContext, Credentials, ErrorKind, gateway::UserGateway};
use calendar_infra::{HttpUserGateway, config::UserGatewayConfig};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OWNER: &str = "6d322c66-bf4d-427a-970c-874f3745f653";

fn gateway(server: &MockServer) -> AnyResult<HttpUserGateway> {
    let config = UserGatewayConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(2),
    };
    Ok(HttpUserGateway::new(&config)?)
}

fn ctx(token: &str) -> AppContext {
    AppContext::builder()
        .correlation_id("cor-1".to_string())
        .credentials(Credentials::bearer(token))
        .build()
}

#[tokio::test]
async fn forwards_bearer_token_and_parses_user_id() -> AnyResult<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .and(header("authorization", "Bearer token-abc"))
        .and(header("x-correlation-id", "cor-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user_id": OWNER })))
        .expect(1)
        .mount(&server)
        .await;

    let user = gateway(&server)?.get_user(&ctx("token-abc")).await?;

    assert_eq!(user.to_string(), OWNER);
    Ok(())
}

#[tokio::test]
async fn missing_credentials_never_reach_the_service() -> AnyResult<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = gateway(&server)?
        .get_user(&AppContext::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Authentication);
    Ok(())
}

#[tokio::test]
async fn rejected_token_is_an_authentication_error() -> AnyResult<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = gateway(&server)?.get_user(&ctx("expired")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Authentication);
    Ok(())
}

#[tokio::test]
async fn non_uuid_identity_is_an_authentication_error() -> AnyResult<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user_id": "alice" })))
        .mount(&server)
        .await;

    let err = gateway(&server)?.get_user(&ctx("token")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);

    Ok(())
}

#[tokio::test]
async fn malformed_body_is_an_authentication_error() -> AnyResult<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = gateway(&server)?.get_user(&ctx("token")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);

    Ok(())
}
