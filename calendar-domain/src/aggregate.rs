//! 聚合（Aggregate）抽象
//!
//! 聚合是一致性边界，同时也是访问控制的单位：每个聚合都有唯一的归属者，
//! 应用层据此执行所有权校验。
//!
use crate::entity::Entity;

/// 聚合根接口
pub trait Aggregate: Entity {
    /// 稳定的聚合类型名（用于日志与错误信息）
    const TYPE: &'static str;

    /// 归属者标识类型
    type Owner: PartialEq;

    /// 获取聚合的归属者
    fn owner(&self) -> &Self::Owner;

    /// 所有权校验：严格相等，不存在角色或管理员旁路
    fn is_owned_by(&self, candidate: &Self::Owner) -> bool {
        self.owner() == candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 聚合只需要标识与归属者，不要求可序列化
    struct Note {
        id: String,
        author: u32,
    }

    impl Entity for Note {
        type Id = String;

        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    impl Aggregate for Note {
        const TYPE: &'static str = "note";

        type Owner = u32;

        fn owner(&self) -> &Self::Owner {
            &self.author
        }
    }

    #[test]
    fn ownership_defaults_to_equality() {
        let note = Note {
            id: "n-1".to_string(),
            author: 7,
        };

        assert!(note.is_owned_by(&7));
        assert!(!note.is_owned_by(&8));
        assert_eq!(Note::TYPE, "note");
    }
}
