use super::ValueObject;
use crate::error::{DomainError, DomainResult};
use calendar_macros::value_object;

/// 事件标题：去除首尾空白后不能为空
#[value_object(string)]
pub struct Title(String);

/// 事件描述：去除首尾空白后不能为空
#[value_object(string)]
pub struct Description(String);

impl Title {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let title = Self(value.as_ref().trim().to_string());
        title.validate()?;
        Ok(title)
    }
}

impl ValueObject for Title {
    type Error = DomainError;

    fn validate(&self) -> DomainResult<()> {
        ensure_not_blank("title", &self.0)
    }
}

impl Description {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let description = Self(value.as_ref().trim().to_string());
        description.validate()?;
        Ok(description)
    }
}

impl ValueObject for Description {
    type Error = DomainError;

    fn validate(&self) -> DomainResult<()> {
        ensure_not_blank("description", &self.0)
    }
}

fn ensure_not_blank(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation {
            field,
            reason: "must not be blank".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_keeps_trimmed_content() {
        for (raw, expected) in [
            ("title", "title"),
            ("  title", "title"),
            ("title \t\n", "title"),
            ("  weekly sync  ", "weekly sync"),
        ] {
            let title = Title::new(raw).unwrap();
            assert_eq!(title.as_str(), expected, "input {raw:?}");
        }
    }

    #[test]
    fn blank_title_is_rejected() {
        for raw in ["", " ", "\t\n  "] {
            let err = Title::new(raw).unwrap_err();
            assert!(
                matches!(err, DomainError::Validation { field: "title", .. }),
                "input {raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn description_keeps_trimmed_content() {
        let description = Description::new("\n description \n").unwrap();
        assert_eq!(description.as_str(), "description");
        assert_eq!(description.to_string(), "description");
    }

    #[test]
    fn blank_description_is_rejected() {
        for raw in ["", "   "] {
            let err = Description::new(raw).unwrap_err();
            assert!(matches!(
                err,
                DomainError::Validation {
                    field: "description",
                    ..
                }
            ));
        }
    }

    // 序列化为裸字符串，便于 DTO 直接复用
    #[test]
    fn title_serializes_as_plain_string() {
        let title = Title::new("title").unwrap();
        assert_eq!(serde_json::to_string(&title).unwrap(), "\"title\"");
    }
}
