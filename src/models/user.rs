//! User model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use super::entity::{EntityKind, ManagedEntity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Banned,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub role_id: Option<String>,
    #[serde(default)]
    pub status: UserStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Editable user fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserFormData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    /// Write-only, never returned by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ManagedEntity for User {
    type FormData = UserFormData;

    const KIND: EntityKind = EntityKind::User;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.username
    }

    fn to_form_data(&self) -> UserFormData {
        UserFormData {
            username: Some(self.username.clone()),
            email: Some(self.email.clone()),
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
            role_id: self.role_id.clone(),
            status: Some(self.status),
            password: None,
        }
    }
}
