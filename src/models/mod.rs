//! Data models module
//!
//! This module contains the managed entities, their editable form data and
//! the registry describing where each entity lives on the backend.

pub mod entity;
pub mod user;
pub mod role;
pub mod banner;
pub mod promotional_banner;
pub mod article;
pub mod faq;

// Re-export commonly used models
pub use entity::{EntityConfig, EntityKind, ManagedEntity};
pub use user::{User, UserFormData, UserStatus};
pub use role::{Role, RoleFormData, RoleStatus};
pub use banner::{Banner, BannerFormData, BannerStatus};
pub use promotional_banner::{PromotionalBanner, PromotionalBannerFormData, PromotionStatus};
pub use article::{Article, ArticleFormData, ArticleStatus};
pub use faq::{Faq, FaqFormData, FaqStatus};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_deserializes_without_timestamps() {
        let user: User = serde_json::from_value(json!({
            "id": "u1",
            "username": "alice",
            "email": "alice@example.com",
            "full_name": null,
            "phone": null,
            "role_id": "r1"
        }))
        .unwrap();

        assert_eq!(user.id(), "u1");
        assert_eq!(user.label(), "alice");
        assert_eq!(user.status, UserStatus::Active);
        assert!(user.created_at.is_none());
    }

    #[test]
    fn test_entities_need_only_identifier_and_label() {
        let user: User = serde_json::from_value(json!({ "id": "u1", "username": "alice" })).unwrap();
        assert_eq!(user.label(), "alice");
        assert!(user.email.is_empty());

        let banner: Banner = serde_json::from_value(json!({ "id": "b1", "title": "Summer" })).unwrap();
        assert!(banner.image_url.is_empty());

        let promo: PromotionalBanner =
            serde_json::from_value(json!({ "id": "p1", "title": "Flash sale" })).unwrap();
        assert_eq!(promo.status, PromotionStatus::Active);

        assert!(serde_json::from_value::<User>(json!({ "id": "u1" })).is_err());
    }

    #[test]
    fn test_form_data_omits_unset_fields() {
        let form = UserFormData {
            username: Some("alice".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value, json!({ "username": "alice" }));
    }

    #[test]
    fn test_form_data_never_carries_identifier() {
        let article: Article = serde_json::from_value(json!({
            "id": "a7",
            "title": "Spring sale",
            "slug": "spring-sale",
            "excerpt": null,
            "content": "Everything must go",
            "category_id": "c2",
            "author": null,
            "status": "published",
            "published_at": "2024-03-01T10:00:00Z",
            "created_at": "2024-02-28T09:00:00Z",
            "updated_at": "2024-03-01T10:00:00Z"
        }))
        .unwrap();

        let value = serde_json::to_value(article.to_form_data()).unwrap();
        let fields = value.as_object().unwrap();
        assert!(!fields.contains_key("id"));
        assert!(!fields.contains_key("created_at"));
        assert!(!fields.contains_key("updated_at"));
        assert_eq!(fields["status"], json!("published"));
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_value(ArticleStatus::Trash).unwrap(), json!("trash"));
        assert_eq!(serde_json::to_value(PromotionStatus::Scheduled).unwrap(), json!("scheduled"));
        assert_eq!(serde_json::to_value(FaqStatus::Published).unwrap(), json!("published"));
        assert_eq!(serde_json::to_value(RoleStatus::Inactive).unwrap(), json!("inactive"));
    }

    #[test]
    fn test_labels_per_entity() {
        let faq: Faq = serde_json::from_value(json!({
            "id": "f1",
            "question": "How do refunds work?",
            "category": null
        }))
        .unwrap();
        assert_eq!(faq.label(), "How do refunds work?");
        assert_eq!(Faq::config().name, "FAQ");

        let role: Role = serde_json::from_value(json!({
            "id": "r1",
            "name": "editor",
            "description": null,
            "permissions": ["articles:write"]
        }))
        .unwrap();
        assert_eq!(role.label(), "editor");
        assert_eq!(role.to_form_data().permissions, vec!["articles:write".to_string()]);
    }
}
