//! Role model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use super::entity::{EntityKind, ManagedEntity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Permission strings, e.g. `["orders:read", "products:write"]`
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub status: RoleStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleFormData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RoleStatus>,
}

impl ManagedEntity for Role {
    type FormData = RoleFormData;

    const KIND: EntityKind = EntityKind::Role;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn to_form_data(&self) -> RoleFormData {
        RoleFormData {
            name: Some(self.name.clone()),
            description: self.description.clone(),
            permissions: self.permissions.clone(),
            status: Some(self.status),
        }
    }
}
