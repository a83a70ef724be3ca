use super::ValueObject;
use crate::error::{DomainError, DomainResult};
use calendar_macros::value_object;
use regex::Regex;
use std::sync::LazyLock;

static COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("color pattern is a valid regex")
});

/// 事件颜色（`#RRGGBB`）
///
/// 空字符串表示“未指定”，解析为默认色 `#FFFFFF`；其余输入必须是 6 位十六进制色值，
/// 合法输入原样保留（不做大小写归一）。
///
/// ```
/// use calendar_domain::value_object::Color;
///
/// assert_eq!(Color::new("").unwrap().as_str(), "#FFFFFF");
/// assert_eq!(Color::new("#a1B2c3").unwrap().as_str(), "#a1B2c3");
/// assert!(Color::new("red").is_err());
/// ```
#[value_object(string)]
pub struct Color(String);

impl Color {
    pub const DEFAULT_HEX: &'static str = "#FFFFFF";

    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let value = value.as_ref();
        if value.is_empty() {
            return Ok(Self::default());
        }

        let color = Self(value.to_string());
        color.validate()?;
        Ok(color)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self(Self::DEFAULT_HEX.to_string())
    }
}

impl ValueObject for Color {
    type Error = DomainError;

    fn validate(&self) -> DomainResult<()> {
        if !COLOR_PATTERN.is_match(&self.0) {
            return Err(DomainError::Validation {
                field: "color",
                reason: format!("{:?} is not a #RRGGBB hex color", self.0),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_resolves_to_default() {
        let color = Color::new("").unwrap();
        assert_eq!(color.as_str(), "#FFFFFF");
        assert_eq!(color, Color::default());
    }

    #[test]
    fn matching_hex_is_kept_verbatim() {
        for raw in ["#FF0000", "#ffffff", "#a1B2c3", "#000000"] {
            assert_eq!(Color::new(raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn anything_else_is_rejected() {
        for raw in [
            "red", "FF0000", "#FFF", "#FF00000", "#GG0000", " #FF0000", "#FF0000 ", " ",
        ] {
            let err = Color::new(raw).unwrap_err();
            assert!(
                matches!(err, DomainError::Validation { field: "color", .. }),
                "input {raw:?} gave {err:?}"
            );
        }
    }
}
