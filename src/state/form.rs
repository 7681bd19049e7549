//! Form session state
//!
//! A [`FormSession`] is the in-memory form of one New/Edit page. It owns the
//! form data, the backend identifier once one is known and the
//! `editing -> submitting -> (succeeded | failed)` state machine. `failed`
//! always falls back to `editing` with the user's input intact.

use std::fmt;
use tracing::debug;
use crate::models::ManagedEntity;
use crate::services::navigation::Navigator;
use crate::services::notification::Notification;
use crate::services::submission::{SaveTarget, Submitted, SubmissionController, SubmissionError};
use crate::utils::errors::AdminError;

/// Phase of a form session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

impl fmt::Display for FormPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormPhase::Editing => write!(f, "editing"),
            FormPhase::Submitting => write!(f, "submitting"),
            FormPhase::Succeeded => write!(f, "succeeded"),
            FormPhase::Failed => write!(f, "failed"),
        }
    }
}

/// In-memory form for one entity
#[derive(Debug, Clone)]
pub struct FormSession<E: ManagedEntity> {
    id: Option<String>,
    data: E::FormData,
    phase: FormPhase,
    last_notification: Option<Notification>,
}

impl<E: ManagedEntity> Default for FormSession<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ManagedEntity> FormSession<E> {
    /// Blank form for a "New" page
    pub fn new() -> Self {
        Self::with_data(E::FormData::default())
    }

    /// Form for a "New" page with pre-filled values
    pub fn with_data(data: E::FormData) -> Self {
        Self {
            id: None,
            data,
            phase: FormPhase::Editing,
            last_notification: None,
        }
    }

    /// Form for an "Edit" page, pre-populated from a fetched entity
    pub fn from_entity(entity: &E) -> Self {
        Self {
            id: Some(entity.id().to_string()),
            data: entity.to_form_data(),
            phase: FormPhase::Editing,
            last_notification: None,
        }
    }

    /// Backend identifier, known only for existing entities
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn data(&self) -> &E::FormData {
        &self.data
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.last_notification.as_ref()
    }

    /// Mutable access for user input.
    ///
    /// Editing after a successful save returns the session to `editing`.
    pub fn data_mut(&mut self) -> Result<&mut E::FormData, AdminError> {
        match self.phase {
            FormPhase::Submitting => Err(self.transition_error(FormPhase::Editing)),
            _ => {
                self.phase = FormPhase::Editing;
                Ok(&mut self.data)
            }
        }
    }

    /// Where the next save goes: create for new forms, update otherwise
    pub fn save_target(&self) -> SaveTarget<'_> {
        target_for(&self.id)
    }

    /// Submit the form once through the controller.
    ///
    /// On success a new entity's identifier is recorded so later saves update
    /// it; the form data is kept as typed. On failure the session returns to
    /// `editing` and the failure is handed back to the caller.
    pub async fn save<N: Navigator>(
        &mut self,
        controller: &SubmissionController<N>,
        exit_after_save: bool,
    ) -> Result<Submitted<E>, SubmissionError> {
        match self.phase {
            FormPhase::Editing | FormPhase::Succeeded => {}
            _ => {
                let source = self.transition_error(FormPhase::Submitting);
                let notification = Notification::failure(source.to_string());
                return Err(SubmissionError { notification, source });
            }
        }

        self.phase = FormPhase::Submitting;

        // Dropping this future mid-request abandons the request, not the form
        let result = {
            let _guard = SubmittingGuard { phase: &mut self.phase };
            let target = target_for(&self.id);
            controller.submit::<E>(target, &self.data, exit_after_save).await
        };

        match result {
            Ok(submitted) => {
                if self.id.is_none() {
                    self.id = Some(submitted.entity.id().to_string());
                }
                self.phase = FormPhase::Succeeded;
                self.last_notification = Some(submitted.notification.clone());
                Ok(submitted)
            }
            Err(error) => {
                self.phase = FormPhase::Failed;
                debug!(entity = %E::KIND, phase = %self.phase, "Submission rejected, form kept");
                self.last_notification = Some(error.notification.clone());
                self.phase = FormPhase::Editing;
                Err(error)
            }
        }
    }

    fn transition_error(&self, to: FormPhase) -> AdminError {
        AdminError::InvalidStateTransition {
            from: self.phase.to_string(),
            to: to.to_string(),
        }
    }
}

fn target_for(id: &Option<String>) -> SaveTarget<'_> {
    match id {
        Some(id) => SaveTarget::Update(id),
        None => SaveTarget::Create,
    }
}

/// Puts a session that is still `submitting` back to `editing` when dropped
struct SubmittingGuard<'a> {
    phase: &'a mut FormPhase,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        if *self.phase == FormPhase::Submitting {
            *self.phase = FormPhase::Editing;
        }
    }
}
