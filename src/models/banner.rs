//! Banner model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use super::entity::{EntityKind, ManagedEntity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    pub link_url: Option<String>,
    /// Display order on the storefront, lowest first
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub status: BannerStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BannerFormData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BannerStatus>,
}

impl ManagedEntity for Banner {
    type FormData = BannerFormData;

    const KIND: EntityKind = EntityKind::Banner;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn to_form_data(&self) -> BannerFormData {
        BannerFormData {
            title: Some(self.title.clone()),
            image_url: Some(self.image_url.clone()),
            link_url: self.link_url.clone(),
            position: Some(self.position),
            status: Some(self.status),
        }
    }
}
