//! Form controller
//!
//! Owns the six-field form state and the result of the latest submission, and
//! orchestrates `submit`. The handle is cheap to clone; every clone shares the
//! same state. The lock is only ever held for synchronous state changes, never
//! across the network call, so the form stays editable while a request is out.
//!
//! Overlapping submissions are ordered by a sequence number: every accepted
//! submission takes the next number, and a response is applied only if its
//! number is still the latest issued. The result therefore always reflects the
//! most recently *requested* submission, whatever order responses arrive in.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use curpgen_domain::{
    CurpCode, DomainError, FieldName, FormFields, IdentityAttributes, ResultState,
};

use crate::application::error::ServiceError;
use crate::application::services::CurpService;

/// Everything the view needs to render, taken in one consistent read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub fields: FormFields,
    pub result: ResultState,
    /// The latest submission is still waiting for a response
    pub submitting: bool,
    /// Every field is filled and nothing is in flight
    pub can_submit: bool,
}

/// What happened to one `submit` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Code stored as the current result
    Generated(CurpCode),
    /// Failure stored as the current result
    Failed(ServiceError),
    /// Refused before any request was sent. An incomplete form leaves the
    /// result untouched; a complete but invalid one records the validation error
    Rejected(DomainError),
    /// A newer submission (or a reset) happened while this one was in flight;
    /// its response was dropped
    Superseded,
}

#[derive(Debug, Default)]
struct FormState {
    fields: FormFields,
    result: ResultState,
    /// Sequence number of the most recent submission (or reset)
    latest: u64,
    /// Sequence number of the latest submission while it awaits a response
    in_flight: Option<u64>,
}

#[derive(Clone)]
pub struct FormController {
    state: Arc<Mutex<FormState>>,
    service: CurpService,
}

impl FormController {
    /// Mount state: every field empty, no result.
    pub fn new(service: CurpService) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::default())),
            service,
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace one field. The previous snapshot is never mutated.
    pub fn update_field(&self, field: FieldName, value: impl Into<String>) {
        let mut state = self.lock();
        state.fields = state.fields.with_field(field, value);
    }

    pub fn fields(&self) -> FormFields {
        self.lock().fields.clone()
    }

    pub fn result(&self) -> ResultState {
        self.lock().result.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.lock().in_flight.is_some()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.lock();
        let submitting = state.in_flight.is_some();
        FormSnapshot {
            fields: state.fields.clone(),
            result: state.result.clone(),
            submitting,
            can_submit: !submitting && state.fields.is_complete(),
        }
    }

    /// Back to the mount state. A submission still in flight is superseded.
    pub fn reset(&self) {
        let mut state = self.lock();
        state.latest += 1;
        state.in_flight = None;
        state.fields = FormFields::default();
        state.result = ResultState::Empty;
        tracing::debug!(sequence = state.latest, "Form reset");
    }

    /// Freeze the current fields and request a code, recording the outcome.
    ///
    /// Incomplete or invalid fields are refused without contacting the service.
    /// When every field is filled but a value is malformed, the refusal is
    /// stored as `ResultState::Error` so the view can show it.
    pub async fn submit(&self) -> SubmitOutcome {
        match self.begin_submit() {
            Ok(pending) => pending.resolve().await,
            Err(e) => SubmitOutcome::Rejected(e),
        }
    }

    /// Synchronous half of `submit`: validate, freeze the snapshot, and mark it
    /// in flight. The view uses this to render the submitting state before the
    /// request is awaited.
    pub fn begin_submit(&self) -> Result<PendingSubmission, DomainError> {
        let mut state = self.lock();
        let attrs = match state.fields.validate() {
            Ok(attrs) => attrs,
            Err(e) if state.fields.is_complete() => {
                tracing::warn!("Submission refused: {}", e);
                state.result = ResultState::Error(ServiceError::from(e.clone()).user_message());
                return Err(e);
            }
            Err(e) => {
                tracing::debug!("Submission refused: {}", e);
                return Err(e);
            }
        };
        state.latest += 1;
        state.in_flight = Some(state.latest);

        Ok(PendingSubmission {
            controller: self.clone(),
            sequence: state.latest,
            attrs,
        })
    }

    fn complete(&self, sequence: u64, outcome: Result<CurpCode, ServiceError>) -> SubmitOutcome {
        let mut state = self.lock();
        if state.latest != sequence {
            tracing::debug!(
                sequence,
                latest = state.latest,
                "Dropping response of superseded submission"
            );
            return SubmitOutcome::Superseded;
        }
        state.in_flight = None;

        match outcome {
            Ok(code) => {
                tracing::info!(sequence, "CURP generated");
                state.result = ResultState::Code(code.clone());
                SubmitOutcome::Generated(code)
            }
            Err(e) => {
                tracing::error!(sequence, error = %e, "There was an error generating the CURP");
                state.result = ResultState::Error(e.user_message());
                SubmitOutcome::Failed(e)
            }
        }
    }
}

/// An accepted submission waiting to be sent. Holds the frozen snapshot.
pub struct PendingSubmission {
    controller: FormController,
    sequence: u64,
    attrs: IdentityAttributes,
}

impl PendingSubmission {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Perform the request and apply the outcome if still current.
    pub async fn resolve(self) -> SubmitOutcome {
        tracing::info!(sequence = self.sequence, "Submitting identity attributes");
        let outcome = self.controller.service.generate(&self.attrs).await;
        self.controller.complete(self.sequence, outcome)
    }
}
