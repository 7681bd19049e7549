//! Article model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use super::entity::{EntityKind, ManagedEntity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
    Trash,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    pub category_id: Option<String>,
    pub author: Option<String>,
    #[serde(default)]
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleFormData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl ManagedEntity for Article {
    type FormData = ArticleFormData;

    const KIND: EntityKind = EntityKind::Article;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn to_form_data(&self) -> ArticleFormData {
        ArticleFormData {
            title: Some(self.title.clone()),
            slug: self.slug.clone(),
            excerpt: self.excerpt.clone(),
            content: Some(self.content.clone()),
            category_id: self.category_id.clone(),
            author: self.author.clone(),
            status: Some(self.status),
            published_at: self.published_at,
        }
    }
}
