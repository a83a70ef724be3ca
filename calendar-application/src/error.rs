use calendar_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("authentication: {0}")]
    Authentication(String),

    #[error("permission denied: {aggregate} {id}")]
    PermissionDenied { aggregate: &'static str, id: String },
}

/// 面向传输层的错误分类，每个错误恰好落入其中一类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    InvalidIdentifier,
    Authentication,
    PermissionDenied,
    NotFound,
    Storage,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::MissingField(_) => ErrorKind::Validation,
            AppError::Authentication(_) => ErrorKind::Authentication,
            AppError::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            AppError::Domain(err) => match err {
                DomainError::Validation { .. } => ErrorKind::Validation,
                DomainError::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
                DomainError::NotFound { .. } => ErrorKind::NotFound,
                DomainError::Storage { .. } => ErrorKind::Storage,
                // 领域层新增的错误类型在归类前按存储失败处理
                _ => ErrorKind::Storage,
            },
        }
    }
}
