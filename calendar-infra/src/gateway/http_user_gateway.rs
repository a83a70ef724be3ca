use crate::config::UserGatewayConfig;
use async_trait::async_trait;
use calendar_application::{AppContext, AppError, gateway::UserGateway};
use calendar_domain::value_object::UserId;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

const CORRELATION_HEADER: &str = "x-correlation-id";

#[derive(Debug, Deserialize)]
struct CurrentUser {
    user_id: String,
}

/// 通过 HTTP 调用身份服务解析调用者
///
/// 将请求中的 bearer 令牌原样转发到 `GET {base_url}/v1/users/me`。
#[derive(Debug, Clone)]
pub struct HttpUserGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserGateway {
    pub fn new(config: &UserGatewayConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl UserGateway for HttpUserGateway {
    #[instrument(skip_all, fields(correlation_id = ctx.correlation_id()))]
    async fn get_user(&self, ctx: &AppContext) -> Result<UserId, AppError> {
        let credentials = ctx
            .credentials()
            .ok_or_else(|| AppError::Authentication("metadata is missing".to_string()))?;

        let url = format!("{}/v1/users/me", self.base_url);
        let mut request = self
            .client
            .get(&url)
            .header(AUTHORIZATION, credentials.authorization_header());
        if let Some(correlation_id) = ctx.correlation_id() {
            request = request.header(CORRELATION_HEADER, correlation_id);
        }

        let response = request
            .send()
            .await
            .map_err(|err| AppError::Authentication(format!("user service unreachable: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "user service rejected credentials");
            return Err(AppError::Authentication(format!(
                "user service responded with {status}"
            )));
        }

        let body: CurrentUser = response
            .json()
            .await
            .map_err(|err| AppError::Authentication(format!("malformed user response: {err}")))?;

        let user_id = UserId::parse(&body.user_id)
            .map_err(|err| AppError::Authentication(err.to_string()))?;

        debug!(user_id = %user_id, "caller resolved");
        Ok(user_id)
    }
}
