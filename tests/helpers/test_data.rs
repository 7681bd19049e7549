//! Test data for the admin API tests
//!
//! Backend-shaped JSON payloads and matching form data for every entity.

use serde_json::{json, Value};

use storefront_admin::models::{
    ArticleFormData, ArticleStatus, BannerFormData, FaqFormData, PromotionalBannerFormData,
    RoleFormData, UserFormData, UserStatus,
};

pub fn alice_form() -> UserFormData {
    UserFormData {
        username: Some("alice".to_string()),
        email: Some("alice@example.com".to_string()),
        full_name: Some("Alice Liddell".to_string()),
        phone: None,
        role_id: Some("r1".to_string()),
        status: Some(UserStatus::Active),
        password: Some("correct horse battery staple".to_string()),
    }
}

pub fn alice_json(id: &str) -> Value {
    json!({
        "id": id,
        "username": "alice",
        "email": "alice@example.com",
        "full_name": "Alice Liddell",
        "phone": null,
        "role_id": "r1",
        "status": "active",
        "created_at": "2024-05-01T12:00:00Z",
        "updated_at": "2024-05-01T12:00:00Z"
    })
}

pub fn editor_role_form() -> RoleFormData {
    RoleFormData {
        name: Some("editor".to_string()),
        description: Some("Can edit website content".to_string()),
        permissions: vec!["articles:write".to_string(), "faqs:write".to_string()],
        status: None,
    }
}

pub fn editor_role_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "editor",
        "description": "Can edit website content",
        "permissions": ["articles:write", "faqs:write"],
        "status": "active"
    })
}

pub fn banner_form() -> BannerFormData {
    BannerFormData {
        title: Some("Summer collection".to_string()),
        image_url: Some("https://cdn.example.com/summer.png".to_string()),
        link_url: Some("/collections/summer".to_string()),
        position: Some(1),
        status: None,
    }
}

pub fn banner_json(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Summer collection",
        "image_url": "https://cdn.example.com/summer.png",
        "link_url": "/collections/summer",
        "position": 1,
        "status": "active"
    })
}

pub fn promotional_banner_form() -> PromotionalBannerFormData {
    PromotionalBannerFormData {
        title: Some("Black Friday".to_string()),
        subtitle: Some("Up to 50% off".to_string()),
        image_url: Some("https://cdn.example.com/bf.png".to_string()),
        discount_percent: Some(50),
        ..Default::default()
    }
}

pub fn promotional_banner_json(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Black Friday",
        "subtitle": "Up to 50% off",
        "image_url": "https://cdn.example.com/bf.png",
        "link_url": null,
        "discount_percent": 50,
        "starts_at": "2024-11-29T00:00:00Z",
        "ends_at": "2024-12-02T00:00:00Z",
        "status": "scheduled"
    })
}

pub fn article_form() -> ArticleFormData {
    ArticleFormData {
        title: Some("How we source our cotton".to_string()),
        slug: Some("how-we-source-our-cotton".to_string()),
        content: Some("A long story about farms.".to_string()),
        status: Some(ArticleStatus::Draft),
        ..Default::default()
    }
}

pub fn article_json(id: &str) -> Value {
    json!({
        "id": id,
        "title": "How we source our cotton",
        "slug": "how-we-source-our-cotton",
        "excerpt": null,
        "content": "A long story about farms.",
        "category_id": null,
        "author": null,
        "status": "draft",
        "published_at": null
    })
}

pub fn faq_form() -> FaqFormData {
    FaqFormData {
        question: Some("How long does shipping take?".to_string()),
        answer: Some("Three to five business days.".to_string()),
        category: Some("shipping".to_string()),
        sort_order: Some(10),
        status: None,
    }
}

pub fn faq_json(id: &str) -> Value {
    json!({
        "id": id,
        "question": "How long does shipping take?",
        "answer": "Three to five business days.",
        "category": "shipping",
        "sort_order": 10,
        "status": "published"
    })
}
