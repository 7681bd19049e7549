//! Submission controller
//!
//! One generic "submit, notify, maybe navigate" routine shared by every
//! entity's New/Edit page. The entity type selects the endpoint, the name used
//! in messages and the list route through its [`EntityConfig`].
//!
//! The controller does not guard against double submission: two identical
//! create calls issue two requests and yield two entities.
//!
//! [`EntityConfig`]: crate::models::EntityConfig

use std::fmt;
use std::time::Instant;
use thiserror::Error;
use crate::models::{EntityKind, ManagedEntity};
use crate::services::api_client::AdminApiClient;
use crate::services::navigation::Navigator;
use crate::services::notification::Notification;
use crate::utils::errors::AdminError;
use crate::utils::logging;

/// Which write a submission performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveTarget<'a> {
    Create,
    Update(&'a str),
}

impl SaveTarget<'_> {
    pub fn operation(&self) -> Operation {
        match self {
            SaveTarget::Create => Operation::Create,
            SaveTarget::Update(_) => Operation::Update,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
}

impl Operation {
    pub fn verb(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            Operation::Create => "created",
            Operation::Update => "updated",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Successful submission
#[derive(Debug, Clone)]
pub struct Submitted<E> {
    /// Entity as returned by the backend, identifier included
    pub entity: E,
    pub notification: Notification,
    /// Route navigated to, when the caller asked to exit after saving
    pub navigated_to: Option<&'static str>,
}

/// Failed submission, handed back to the form so it can stay populated
#[derive(Debug, Error)]
#[error("{notification}")]
pub struct SubmissionError {
    pub notification: Notification,
    #[source]
    pub source: AdminError,
}

/// Text shown on success, always containing the entity label
pub fn success_message(kind: EntityKind, operation: Operation, label: &str) -> String {
    format!("{} \"{}\" {} successfully", kind, label, operation.past_tense())
}

/// Text shown on failure.
///
/// A non-empty server message wins verbatim; otherwise a default names the
/// entity and the operation.
pub fn failure_message(kind: EntityKind, operation: Operation, error: &AdminError) -> String {
    let entity = kind.noun();
    match error {
        AdminError::RequestFailed { message: Some(message), .. } => message.clone(),
        AdminError::NetworkFailure(_) => {
            format!("Failed to {} {}. Please try again.", operation.verb(), entity)
        }
        AdminError::NotFound { .. } => {
            format!("Failed to {} {}: it no longer exists", operation.verb(), entity)
        }
        _ => format!("Failed to {} {}", operation.verb(), entity),
    }
}

/// Generic create/update controller for all managed entities
#[derive(Debug, Clone)]
pub struct SubmissionController<N> {
    client: AdminApiClient,
    navigator: N,
}

impl<N: Navigator> SubmissionController<N> {
    pub fn new(client: AdminApiClient, navigator: N) -> Self {
        Self { client, navigator }
    }

    pub fn client(&self) -> &AdminApiClient {
        &self.client
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Create a new entity from form data
    pub async fn create<E: ManagedEntity>(
        &self,
        form: &E::FormData,
        exit_after_save: bool,
    ) -> Result<Submitted<E>, SubmissionError> {
        self.submit(SaveTarget::Create, form, exit_after_save).await
    }

    /// Update an existing entity from form data
    pub async fn update<E: ManagedEntity>(
        &self,
        id: &str,
        form: &E::FormData,
        exit_after_save: bool,
    ) -> Result<Submitted<E>, SubmissionError> {
        self.submit(SaveTarget::Update(id), form, exit_after_save).await
    }

    /// Issue exactly one write request and turn its outcome into a notification.
    ///
    /// The form data is only borrowed, so a failure can never clear what the
    /// user typed.
    pub async fn submit<E: ManagedEntity>(
        &self,
        target: SaveTarget<'_>,
        form: &E::FormData,
        exit_after_save: bool,
    ) -> Result<Submitted<E>, SubmissionError> {
        let operation = target.operation();
        let started = Instant::now();

        let result = match target {
            SaveTarget::Create => self.client.create::<E>(form).await,
            SaveTarget::Update(id) => self.client.update::<E>(id, form).await,
        };

        let elapsed = started.elapsed().as_millis() as u64;
        logging::log_submission(E::KIND, operation.verb(), result.is_ok(), elapsed);

        match result {
            Ok(entity) => {
                let notification = Notification::success(
                    success_message(E::KIND, operation, entity.label()),
                );

                let navigated_to = if exit_after_save {
                    let route = E::KIND.list_route();
                    self.navigator.navigate(route);
                    Some(route)
                } else {
                    None
                };

                Ok(Submitted { entity, notification, navigated_to })
            }
            Err(error) => {
                logging::log_api_error(E::KIND.endpoint(), &error, Some(operation.verb()));
                let notification = Notification::failure(failure_message(E::KIND, operation, &error));
                Err(SubmissionError { notification, source: error })
            }
        }
    }
}
