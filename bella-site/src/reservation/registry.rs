//! Server-held reservation forms
//!
//! Each visitor session gets its own [`ReservationForm`] addressed by UUID.
//! A submission runs on a spawned task; the entry lock is never held across
//! the submitter's await.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use shared::models::{ReservationFormSnapshot, ReservationUpdate};
use shared::{AppError, AppResult};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use super::form::{ReservationForm, log_resolution};
use super::submitter::ReservationSubmitter;

#[derive(Debug)]
struct FormEntry {
    form: ReservationForm,
    touched: Instant,
}

impl FormEntry {
    fn new() -> Self {
        Self {
            form: ReservationForm::new(),
            touched: Instant::now(),
        }
    }
}

/// Open forms allowed before `create` refuses new ones
pub const DEFAULT_FORM_CAPACITY: usize = 10_000;

pub struct FormRegistry {
    forms: DashMap<Uuid, FormEntry>,
    submitter: Arc<dyn ReservationSubmitter>,
    ttl: Duration,
    capacity: usize,
}

impl std::fmt::Debug for FormRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormRegistry")
            .field("forms", &self.forms.len())
            .field("ttl", &self.ttl)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl FormRegistry {
    pub fn new(submitter: Arc<dyn ReservationSubmitter>, ttl: Duration) -> Self {
        Self {
            forms: DashMap::new(),
            submitter,
            ttl,
            capacity: DEFAULT_FORM_CAPACITY,
        }
    }

    /// Limit the number of open forms
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn submitter(&self) -> Arc<dyn ReservationSubmitter> {
        Arc::clone(&self.submitter)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Open a fresh form (idle, default fields)
    ///
    /// At capacity, idle forms past their TTL are evicted first; if the registry
    /// is still full the form is refused with `FormCapacityReached`. The check
    /// is not atomic with the insert, so concurrent creates may overshoot by a few.
    pub fn create(&self) -> AppResult<ReservationFormSnapshot> {
        if self.forms.len() >= self.capacity {
            self.evict_idle();
            if self.forms.len() >= self.capacity {
                tracing::warn!(capacity = self.capacity, "Reservation form capacity reached");
                return Err(AppError::form_capacity_reached(self.capacity));
            }
        }

        let id = Uuid::new_v4();
        let entry = FormEntry::new();
        let snapshot = entry.form.snapshot(id);
        self.forms.insert(id, entry);
        tracing::debug!(form_id = %id, "Reservation form created");
        Ok(snapshot)
    }

    pub fn snapshot(&self, id: Uuid) -> AppResult<ReservationFormSnapshot> {
        self.forms
            .get(&id)
            .map(|entry| entry.form.snapshot(id))
            .ok_or_else(|| AppError::form_not_found(id))
    }

    /// Apply field edits; the status is never changed by an edit
    pub fn edit(&self, id: Uuid, update: ReservationUpdate) -> AppResult<ReservationFormSnapshot> {
        let mut entry = self
            .forms
            .get_mut(&id)
            .ok_or_else(|| AppError::form_not_found(id))?;
        entry.touched = Instant::now();
        for (field, value) in update.into_edits() {
            entry.form.edit(field, value);
        }
        Ok(entry.form.snapshot(id))
    }

    /// Move the form to `Submitting` and hand the request to the submitter
    ///
    /// Returns the `Submitting` snapshot and the task that settles the form.
    /// A form already in flight yields `SubmissionInProgress` and is left as is.
    pub fn submit(
        self: &Arc<Self>,
        id: Uuid,
    ) -> AppResult<(ReservationFormSnapshot, JoinHandle<()>)> {
        let (request, snapshot) = {
            let mut entry = self
                .forms
                .get_mut(&id)
                .ok_or_else(|| AppError::form_not_found(id))?;
            entry.touched = Instant::now();
            let request = entry.form.begin_submit()?;
            (request, entry.form.snapshot(id))
        };

        let span = tracing::info_span!("reservation_form", form_id = %id);
        span.in_scope(|| {
            crate::reservation_log!(
                "submitting",
                guests = request.guests.as_str(),
                date = request.date.as_str(),
                time = request.time.as_str()
            )
        });

        let registry = Arc::clone(self);
        let submitter = Arc::clone(&self.submitter);
        let handle = tokio::spawn(
            async move {
                let outcome = submitter.submit(&request).await;
                registry.resolve(id, outcome);
            }
            .instrument(span),
        );

        Ok((snapshot, handle))
    }

    fn resolve(&self, id: Uuid, outcome: AppResult<()>) {
        let transition = match self.forms.get_mut(&id) {
            Some(mut entry) => {
                entry.touched = Instant::now();
                entry.form.resolve(outcome)
            }
            None => {
                tracing::warn!(form_id = %id, "Form evicted before its submission resolved");
                return;
            }
        };
        log_resolution(&transition);
    }

    /// Drop forms untouched for longer than the TTL; in-flight forms stay
    pub fn evict_idle(&self) -> usize {
        let before = self.forms.len();
        self.forms
            .retain(|_, entry| entry.form.is_busy() || entry.touched.elapsed() < self.ttl);
        let evicted = before.saturating_sub(self.forms.len());
        if evicted > 0 {
            tracing::debug!(
                evicted,
                remaining = self.forms.len(),
                "Evicted idle reservation forms"
            );
        }
        evicted
    }

    /// Periodically evict idle forms
    pub fn spawn_sweeper(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let registry = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                registry.evict_idle();
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::submitter::SimulatedSubmitter;
    use async_trait::async_trait;
    use shared::ErrorCode;
    use shared::models::{ReservationRequest, SubmissionStatus};

    struct FailingSubmitter;

    #[async_trait]
    impl ReservationSubmitter for FailingSubmitter {
        async fn submit(&self, _request: &ReservationRequest) -> AppResult<()> {
            Err(AppError::internal("backend down"))
        }
    }

    fn registry(submitter: Arc<dyn ReservationSubmitter>) -> Arc<FormRegistry> {
        Arc::new(FormRegistry::new(submitter, Duration::from_secs(60)))
    }

    fn simulated(delay: Duration) -> Arc<FormRegistry> {
        registry(Arc::new(SimulatedSubmitter::new(delay)))
    }

    fn complete() -> ReservationUpdate {
        ReservationUpdate {
            name: Some("Jo".into()),
            email: Some("jo@x.com".into()),
            date: Some("2025-05-01".into()),
            time: Some("18:00".into()),
            guests: Some("2".into()),
            message: Some(String::new()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_and_edit() {
        let forms = simulated(Duration::ZERO);
        let created = forms.create().unwrap();
        assert_eq!(created.status, SubmissionStatus::Idle);
        assert_eq!(created.fields.guests, "2");
        assert_eq!(forms.len(), 1);

        let edited = forms
            .edit(
                created.id,
                ReservationUpdate {
                    name: Some("Jo".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(edited.fields.name, "Jo");
        assert_eq!(edited.status, SubmissionStatus::Idle);
        assert_eq!(forms.snapshot(created.id).unwrap().fields.name, "Jo");
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_refused_at_capacity() {
        let forms = FormRegistry::new(
            Arc::new(SimulatedSubmitter::new(Duration::ZERO)),
            Duration::from_secs(60),
        )
        .with_capacity(2);
        forms.create().unwrap();
        forms.create().unwrap();

        let err = forms.create().unwrap_err();
        assert_eq!(err.code, ErrorCode::FormCapacityReached);
        assert_eq!(forms.len(), 2);

        // expired forms make room
        tokio::time::advance(Duration::from_secs(61)).await;
        assert!(forms.create().is_ok());
        assert_eq!(forms.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_form() {
        let forms = simulated(Duration::ZERO);
        let id = Uuid::new_v4();
        assert_eq!(forms.snapshot(id).unwrap_err().code, ErrorCode::FormNotFound);
        assert_eq!(
            forms.edit(id, ReservationUpdate::default()).unwrap_err().code,
            ErrorCode::FormNotFound
        );
        assert_eq!(forms.submit(id).unwrap_err().code, ErrorCode::FormNotFound);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_lifecycle_success() {
        let forms = simulated(Duration::from_secs(1));
        let id = forms.create().unwrap().id;
        forms.edit(id, complete()).unwrap();

        let (submitting, handle) = forms.submit(id).unwrap();
        assert_eq!(submitting.status, SubmissionStatus::Submitting);
        assert!(submitting.busy);
        assert_eq!(submitting.submit_label, "Submitting...");

        handle.await.unwrap();

        let done = forms.snapshot(id).unwrap();
        assert_eq!(done.status, SubmissionStatus::Success);
        assert!(done.fields.is_pristine());
        assert!(done.banner.unwrap().starts_with("Thank you!"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_while_in_flight_has_no_effect() {
        let forms = simulated(Duration::from_secs(1));
        let id = forms.create().unwrap().id;
        forms.edit(id, complete()).unwrap();

        let (_, handle) = forms.submit(id).unwrap();
        let err = forms.submit(id).unwrap_err();
        assert_eq!(err.code, ErrorCode::SubmissionInProgress);

        // edits while in flight do not move the status
        let edited = forms
            .edit(
                id,
                ReservationUpdate {
                    message: Some("window seat".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(edited.status, SubmissionStatus::Submitting);

        handle.await.unwrap();
        assert_eq!(forms.snapshot(id).unwrap().status, SubmissionStatus::Success);
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_fields() {
        let forms = registry(Arc::new(FailingSubmitter));
        let id = forms.create().unwrap().id;
        forms.edit(id, complete()).unwrap();

        let (_, handle) = forms.submit(id).unwrap();
        handle.await.unwrap();

        let failed = forms.snapshot(id).unwrap();
        assert_eq!(failed.status, SubmissionStatus::Error);
        assert_eq!(failed.fields.name, "Jo");
        assert!(!failed.busy);
        assert!(failed.banner.unwrap().contains("call us directly"));

        // resubmission is allowed from the error state
        let (again, handle) = forms.submit(id).unwrap();
        assert_eq!(again.status, SubmissionStatus::Submitting);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_incomplete_form_is_not_submitted() {
        let forms = simulated(Duration::ZERO);
        let id = forms.create().unwrap().id;
        let err = forms.submit(id).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredFieldMissing);
        assert_eq!(forms.snapshot(id).unwrap().status, SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evict_idle_forms() {
        let forms = simulated(Duration::from_secs(600));
        let stale = forms.create().unwrap().id;
        let fresh = forms.create().unwrap().id;
        let in_flight = forms.create().unwrap().id;
        forms.edit(in_flight, complete()).unwrap();

        tokio::time::advance(Duration::from_secs(45)).await;
        forms.edit(fresh, ReservationUpdate::default()).unwrap();
        let (_, handle) = forms.submit(in_flight).unwrap();

        tokio::time::advance(Duration::from_secs(30)).await;
        assert_eq!(forms.evict_idle(), 1);
        assert_eq!(forms.snapshot(stale).unwrap_err().code, ErrorCode::FormNotFound);
        assert!(forms.snapshot(fresh).is_ok());
        assert_eq!(
            forms.snapshot(in_flight).unwrap().status,
            SubmissionStatus::Submitting
        );

        handle.abort();
    }
}
