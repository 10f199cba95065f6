//! Reservation form state machine
//!
//! ```text
//!            submit (fields ok)              resolved Ok
//!   Idle ─────────────────────► Submitting ─────────────► Success
//!   Error ───────────────────►       │                      (fields reset)
//!                                    │ resolved Err
//!                                    └──────────────────► Error
//!                                                          (fields kept)
//! ```
//!
//! Edits never change the status. Submit while `Submitting` is ignored.

use shared::models::{
    ReservationField, ReservationFormSnapshot, ReservationRequest, SubmissionStatus,
};
use shared::{AppError, AppResult};
use uuid::Uuid;

use super::submitter::ReservationSubmitter;

/// Input to [`ReservationForm::apply`]
#[derive(Debug, Clone)]
pub enum FormEvent {
    /// The guest changed one field
    Edit(ReservationField, String),
    /// The guest pressed the submit button
    Submit,
    /// The in-flight submission finished
    Resolved(AppResult<()>),
}

/// What an event did to the form
#[derive(Debug, Clone)]
pub enum Transition {
    /// A field changed; status untouched
    Edited,
    /// Status moved to `Submitting`; carries the request being sent
    Started(ReservationRequest),
    /// Submit refused by the required-field guard; nothing changed
    Rejected(AppError),
    /// Event had no effect (submit while in flight, stray resolution)
    Ignored,
    /// Status moved to `Success` and the fields were reset
    Succeeded,
    /// Status moved to `Error`; fields kept for resubmission
    Failed(AppError),
}

/// One reservation form instance
#[derive(Debug, Clone, Default)]
pub struct ReservationForm {
    fields: ReservationRequest,
    status: SubmissionStatus,
}

impl ReservationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-filled fields (a posted HTML form)
    pub fn with_fields(fields: ReservationRequest) -> Self {
        Self {
            fields,
            status: SubmissionStatus::Idle,
        }
    }

    pub fn fields(&self) -> &ReservationRequest {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_busy(&self) -> bool {
        self.status.is_busy()
    }

    /// Advance the state machine by one event
    pub fn apply(&mut self, event: FormEvent) -> Transition {
        match event {
            FormEvent::Edit(field, value) => {
                self.fields.set(field, value);
                Transition::Edited
            }
            FormEvent::Submit => {
                if self.status.is_busy() {
                    return Transition::Ignored;
                }
                if let Err(e) = check_submittable(&self.fields) {
                    return Transition::Rejected(e);
                }
                self.status = SubmissionStatus::Submitting;
                Transition::Started(self.fields.clone())
            }
            FormEvent::Resolved(outcome) => {
                if !self.status.is_busy() {
                    return Transition::Ignored;
                }
                match outcome {
                    Ok(()) => {
                        self.status = SubmissionStatus::Success;
                        self.fields = ReservationRequest::default();
                        Transition::Succeeded
                    }
                    Err(cause) => {
                        self.status = SubmissionStatus::Error;
                        Transition::Failed(as_submission_failure(cause))
                    }
                }
            }
        }
    }

    pub fn edit(&mut self, field: ReservationField, value: impl Into<String>) {
        self.apply(FormEvent::Edit(field, value.into()));
    }

    /// Enter `Submitting` and return the request to send
    pub fn begin_submit(&mut self) -> AppResult<ReservationRequest> {
        match self.apply(FormEvent::Submit) {
            Transition::Started(request) => Ok(request),
            Transition::Rejected(e) => Err(e),
            _ => Err(AppError::submission_in_progress()),
        }
    }

    /// Settle the in-flight submission
    pub fn resolve(&mut self, outcome: AppResult<()>) -> Transition {
        self.apply(FormEvent::Resolved(outcome))
    }

    /// Run one full lifecycle against `submitter`, awaiting its result
    ///
    /// Returns the guard error if the form could not be submitted at all.
    pub async fn submit_with(
        &mut self,
        submitter: &dyn ReservationSubmitter,
    ) -> AppResult<Transition> {
        let request = self.begin_submit()?;
        crate::reservation_log!(
            "submitting",
            guests = request.guests.as_str(),
            date = request.date.as_str()
        );
        let outcome = submitter.submit(&request).await;
        let transition = self.resolve(outcome);
        log_resolution(&transition);
        Ok(transition)
    }

    pub fn snapshot(&self, id: Uuid) -> ReservationFormSnapshot {
        ReservationFormSnapshot {
            id,
            status: self.status,
            fields: self.fields.clone(),
            busy: self.status.is_busy(),
            submit_label: self.status.submit_label().to_string(),
            banner: self.status.banner().map(str::to_string),
        }
    }
}

/// The browser-side `required` guard, applied before leaving Idle/Error
pub fn check_submittable(fields: &ReservationRequest) -> AppResult<()> {
    let missing = fields.missing_required();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
        return Err(AppError::required_fields(&names));
    }
    if fields.guest_count().is_none() {
        return Err(AppError::guests_out_of_range(fields.guests.as_str()));
    }
    Ok(())
}

/// Every backend failure surfaces as the single user-facing submission error
fn as_submission_failure(cause: AppError) -> AppError {
    if cause.code == shared::ErrorCode::SubmissionFailed {
        return cause;
    }
    AppError::submission_failed().with_detail("cause", cause.message)
}

pub(crate) fn log_resolution(transition: &Transition) {
    match transition {
        Transition::Succeeded => crate::reservation_log!("succeeded"),
        Transition::Failed(e) => {
            crate::reservation_log!("failed", code = e.code.code(), reason = e.message.as_str())
        }
        _ => {}
    }
}
