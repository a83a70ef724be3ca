//! 日历领域的过程宏（calendar-macros）
//!
//! - `#[value_object]`：为自校验的值对象补齐派生，可选生成字符串访问器；
//! - `#[entity_id]`：为单字段标识类型生成构造、解析、显示与转换实现。
//!
use proc_macro::TokenStream;

mod derive_utils;
mod entity_id;
mod value_object;

/// 值对象宏
///
/// 合并/追加派生：Debug（可关闭）、Clone、PartialEq、Eq、Hash、Serialize。
/// 不派生 `Default` 与 `Deserialize`，值对象只能经由构造函数校验后得到。
///
/// 参数：
/// - `debug = false`：不自动派生 `Debug`
/// - `string`：单字段 `String` 包装类型额外生成 `as_str`、`Display`、`AsRef<str>`
///   以及 `From<Self> for String`
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}

/// 实体 ID 宏
///
/// 用于 `struct EventId(Uuid);` 这类单字段 tuple struct，生成：
/// - 派生：Debug、Clone、PartialEq、Eq、PartialOrd、Ord、Hash、Serialize、Deserialize
/// - `new` / `into_inner`、`Display`、`FromStr`（委托内部类型）、`AsRef` 与双向 `From`
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}
