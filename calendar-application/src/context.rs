use bon::Builder;
use std::fmt;

/// 应用层上下文（Application Context）
///
/// 承载一次应用层调用（命令/查询）所需的横切信息：
/// - 调用凭据（`credentials`）：由传输层从请求元数据中提取，原样转发给身份服务；
/// - 关联追踪 `correlation_id`：写入日志 span，便于串联一次请求。
///
/// 典型用法：
/// ```rust
/// use calendar_application::context::{AppContext, Credentials};
///
/// let ctx = AppContext::builder()
///     .correlation_id("cor-123".to_string())
///     .credentials(Credentials::bearer("token-abc"))
///     .build();
///
/// assert_eq!(ctx.correlation_id(), Some("cor-123"));
/// assert_eq!(ctx.credentials().map(|c| c.token()), Some("token-abc"));
/// ```
#[derive(Clone, Debug, Default, Builder)]
pub struct AppContext {
    /// 关联ID
    correlation_id: Option<String>,
    /// 调用凭据；缺失时身份解析必然失败
    credentials: Option<Credentials>,
}

impl AppContext {
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}

/// 请求携带的访问令牌（Debug 输出脱敏）
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// `Authorization` 头的取值
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .finish()
    }
}
