//! 外部协作者（Gateway）
//!
//! 调用者身份的唯一来源是 [`UserGateway`]：应用层不再维护独立的令牌校验路径。
//!
use crate::{context::AppContext, error::AppError};
use async_trait::async_trait;
use calendar_domain::value_object::UserId;
use std::sync::Arc;

/// 根据请求凭据解析调用者身份
///
/// 凭据缺失、下游调用失败或返回的身份无法解析时，实现方应返回
/// `AppError::Authentication`。
#[async_trait]
pub trait UserGateway: Send + Sync {
    async fn get_user(&self, ctx: &AppContext) -> Result<UserId, AppError>;
}

#[async_trait]
impl<T> UserGateway for Arc<T>
where
    T: UserGateway + ?Sized,
{
    async fn get_user(&self, ctx: &AppContext) -> Result<UserId, AppError> {
        (**self).get_user(ctx).await
    }
}
