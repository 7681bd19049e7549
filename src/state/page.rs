//! Page loaders
//!
//! Each dashboard page performs a single unconditional request on load. A
//! missing edit target is not an error for the page: it becomes
//! [`EditPage::NotFound`] so the shell can render a not-found view instead of
//! a blank form.

use tracing::{debug, info};
use crate::models::{EntityKind, ManagedEntity};
use crate::services::api_client::AdminApiClient;
use crate::utils::errors::{AdminError, Result};
use super::form::FormSession;

/// Outcome of opening an "Edit" page
#[derive(Debug, Clone)]
pub enum EditPage<E: ManagedEntity> {
    Ready(FormSession<E>),
    NotFound { entity: EntityKind, id: String },
}

impl<E: ManagedEntity> EditPage<E> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, EditPage::NotFound { .. })
    }

    pub fn into_session(self) -> Option<FormSession<E>> {
        match self {
            EditPage::Ready(session) => Some(session),
            EditPage::NotFound { .. } => None,
        }
    }
}

/// Open a "New" page: a blank form, no request
pub fn new_page<E: ManagedEntity>() -> FormSession<E> {
    debug!(entity = %E::KIND, "Opening new page");
    FormSession::new()
}

/// Open an "Edit" page, pre-populated from the backend
pub async fn open_edit_page<E: ManagedEntity>(client: &AdminApiClient, id: &str) -> Result<EditPage<E>> {
    debug!(entity = %E::KIND, id = id, "Opening edit page");

    match client.fetch::<E>(id).await {
        Ok(entity) => Ok(EditPage::Ready(FormSession::from_entity(&entity))),
        Err(AdminError::NotFound { entity, id }) => {
            info!(entity = %entity, id = %id, "Edit target not found");
            Ok(EditPage::NotFound { entity, id })
        }
        Err(e) => Err(e),
    }
}

/// Open a list page: the whole collection
pub async fn open_list_page<E: ManagedEntity>(client: &AdminApiClient) -> Result<Vec<E>> {
    debug!(entity = %E::KIND, "Opening list page");

    let entities = client.list::<E>().await?;
    debug!(entity = %E::KIND, count = entities.len(), "List page loaded");
    Ok(entities)
}
