use anyhow::Result as AnyResult;
use calendar_application::{
    AppContext, Credentials, ErrorKind, EventUsecase,
    event::{CreateEvent, UpdateEvent},
};
use calendar_infra::{HttpUserGateway, InMemoryEventRepository, config::UserGatewayConfig};
use chrono::{Duration, Utc};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ALICE: &str = "6d322c66-bf4d-427a-970c-874f3745f653";
const BOB: &str = "fe8c2263-bbac-4bb9-a41d-b04f5afc4425";

async fn identity_service() -> MockServer {
    let server = MockServer::start().await;
    for (token, user_id) in [("alice-token", ALICE), ("bob-token", BOB)] {
        Mock::given(method("GET"))
            .and(path("/v1/users/me"))
            .and(header("authorization", format!("Bearer {token}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user_id": user_id })))
            .mount(&server)
            .await;
    }
    server
}

fn ctx(token: &str) -> AppContext {
    AppContext::builder()
        .credentials(Credentials::bearer(token))
        .build()
}

#[tokio::test]
async fn owner_scoped_flow_over_http_identity() -> AnyResult<()> {
    let server = identity_service().await;
    let gateway = HttpUserGateway::new(&UserGatewayConfig {
        base_url: server.uri(),
        timeout: std::time::Duration::from_secs(2),
    })?;
    let repo = Arc::new(InMemoryEventRepository::new());
    let usecase = EventUsecase::new(repo.clone(), gateway);

    let start = Utc::now();
    let created = usecase
        .create_event(
            &ctx("alice-token"),
            CreateEvent {
                title: "standup".into(),
                description: "daily sync".into(),
                start_time: Some(start),
                end_time: Some(start + Duration::minutes(15)),
                color: None,
            },
        )
        .await?;
    assert_eq!(created.user_id().to_string(), ALICE);
    assert_eq!(repo.len(), 1);

    let id = created.id().to_string();
    let err = usecase
        .update_event(
            &ctx("bob-token"),
            UpdateEvent {
                event_id: id.clone(),
                title: "hijacked".into(),
                description: "nope".into(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);

    assert!(usecase.list_events(&ctx("bob-token")).await?.is_empty());

    let err = usecase.list_events(&ctx("unknown-token")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);

    usecase.delete_event(&ctx("alice-token"), &id).await?;
    assert!(repo.is_empty());
    Ok(())
}
