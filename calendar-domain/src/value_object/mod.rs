//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//! `Title`、`Description`、`Color` 只能经由构造函数校验后得到：既不实现
//! `Default`（`Color` 除外，其默认值本身合法），也不支持反序列化。
//! 标识（`EventId`、`UserId`）包装的 UUID 本身即合法值，可直接反序列化。
//!
mod color;
mod identifier;
mod text;

pub use color::Color;
pub use identifier::{EventId, UserId};
pub use text::{Description, Title};

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}
