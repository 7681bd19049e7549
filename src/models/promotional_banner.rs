//! Promotional banner model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use super::entity::{EntityKind, ManagedEntity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionStatus {
    #[default]
    Active,
    Inactive,
    Scheduled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionalBanner {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(default)]
    pub image_url: String,
    pub link_url: Option<String>,
    pub discount_percent: Option<u8>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: PromotionStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromotionalBannerFormData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PromotionStatus>,
}

impl ManagedEntity for PromotionalBanner {
    type FormData = PromotionalBannerFormData;

    const KIND: EntityKind = EntityKind::PromotionalBanner;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn to_form_data(&self) -> PromotionalBannerFormData {
        PromotionalBannerFormData {
            title: Some(self.title.clone()),
            subtitle: self.subtitle.clone(),
            image_url: Some(self.image_url.clone()),
            link_url: self.link_url.clone(),
            discount_percent: self.discount_percent,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            status: Some(self.status),
        }
    }
}
