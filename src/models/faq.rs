//! FAQ model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use super::entity::{EntityKind, ManagedEntity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqStatus {
    #[default]
    Draft,
    Published,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub answer: String,
    pub category: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub status: FaqStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqFormData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FaqStatus>,
}

impl ManagedEntity for Faq {
    type FormData = FaqFormData;

    const KIND: EntityKind = EntityKind::Faq;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.question
    }

    fn to_form_data(&self) -> FaqFormData {
        FaqFormData {
            question: Some(self.question.clone()),
            answer: Some(self.answer.clone()),
            category: self.category.clone(),
            sort_order: Some(self.sort_order),
            status: Some(self.status),
        }
    }
}
