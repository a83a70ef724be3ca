//! 领域层统一错误定义
//!
//! 覆盖值校验、标识解析、聚合查找与持久化四类失败，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use crate::aggregate::Aggregate;
use std::fmt::Display;
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 值校验 ---
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("invalid {kind}: {reason}")]
    InvalidIdentifier { kind: &'static str, reason: String },

    // --- 聚合查找 ---
    #[error("not found: {reason}")]
    NotFound { reason: String },

    // --- 仓储/持久化 ---
    #[error("storage error: {reason}")]
    Storage { reason: String },
}

impl DomainError {
    /// 指定聚合类型与标识的“未找到”错误
    pub fn not_found<A>(id: impl Display) -> Self
    where
        A: Aggregate,
    {
        DomainError::NotFound {
            reason: format!("{} {id}", A::TYPE),
        }
    }

    pub fn storage(reason: impl Display) -> Self {
        DomainError::Storage {
            reason: reason.to_string(),
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

// 允许在基础设施层直接使用 `?` 将 sqlx 错误转换为 DomainError
#[cfg(feature = "infra-sqlx")]
impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DomainError::NotFound {
                reason: "row not found".to_string(),
            },
            other => DomainError::Storage {
                reason: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;

    #[test]
    fn not_found_names_the_aggregate() {
        let err = DomainError::not_found::<Event>("fe8c2263-bbac-4bb9-a41d-b04f5afc4425");
        assert_eq!(
            err.to_string(),
            "not found: event fe8c2263-bbac-4bb9-a41d-b04f5afc4425"
        );
    }

    #[test]
    fn validation_message_includes_field() {
        let err = DomainError::Validation {
            field: "title",
            reason: "must not be blank".into(),
        };
        assert_eq!(err.to_string(), "invalid title: must not be blank");
    }
}
