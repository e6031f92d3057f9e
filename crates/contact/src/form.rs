use std::sync::Arc;

use tokio::sync::watch;

use crate::{ContactInquiry, Dispatcher, Field, FieldErrors, RELAY_FAILURE_MESSAGE, Receipt};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(Receipt),
    Failed(String),
}

impl FormStatus {
    /// Banner text, only present once a submission settled.
    pub fn message(&self) -> Option<&str> {
        match self {
            FormStatus::Idle | FormStatus::Submitting => None,
            FormStatus::Succeeded(receipt) => Some(receipt.message()),
            FormStatus::Failed(message) => Some(message.as_str()),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormState {
    pub status: FormStatus,
    pub fields: ContactInquiry,
    pub errors: FieldErrors,
}

/// One contact form instance.
///
/// Clones share the same state, so a second `submit` issued while the first is
/// still waiting on the relay sees `Submitting` and returns without delivering.
#[derive(Clone)]
pub struct ContactForm {
    dispatcher: Dispatcher,
    state: Arc<watch::Sender<FormState>>,
}

impl ContactForm {
    pub fn new(dispatcher: Dispatcher) -> Self {
        let (state, _) = watch::channel(FormState::default());

        Self {
            dispatcher,
            state: Arc::new(state),
        }
    }

    pub fn current_state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    pub fn edit(&self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|state| state.fields.set(field, value));
    }

    pub async fn submit(&self, draft: ContactInquiry) -> FormState {
        let errors = draft.check();
        let mut accepted = None;

        self.state.send_if_modified(|state| {
            if state.status.is_submitting() {
                return false;
            }

            state.fields = draft;

            if !errors.is_empty() {
                state.status = FormStatus::Idle;
                state.errors = errors;
                return true;
            }

            state.status = FormStatus::Submitting;
            state.errors = FieldErrors::default();
            accepted = Some(state.fields.clone());

            true
        });

        let Some(inquiry) = accepted else {
            tracing::debug!("submit ignored, form is busy or invalid");
            return self.current_state();
        };

        let in_flight = InFlight {
            state: &*self.state,
            settled: false,
        };

        let outcome = self.dispatcher.deliver(&inquiry).await;

        in_flight.settle(|state| match outcome {
            Ok(receipt) => {
                state.fields = ContactInquiry::default();
                state.status = FormStatus::Succeeded(receipt);
            }
            Err(err) => {
                state.status = FormStatus::Failed(err.status_message().to_owned());
            }
        });

        self.current_state()
    }

    /// "Send another message": leaves a settled state and re-enables the form.
    pub fn reset(&self) -> FormState {
        self.state.send_if_modified(|state| match state.status {
            FormStatus::Succeeded(_) | FormStatus::Failed(_) => {
                state.status = FormStatus::Idle;
                true
            }
            FormStatus::Idle | FormStatus::Submitting => false,
        });

        self.current_state()
    }
}

/// Holds a form in `Submitting` until the delivery outcome is written back.
///
/// A submit future dropped mid-delivery (request cancelled, caller timeout)
/// leaves the form `Failed` instead of stuck in `Submitting`.
struct InFlight<'a> {
    state: &'a watch::Sender<FormState>,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, apply: impl FnOnce(&mut FormState)) {
        self.settled = true;
        self.state.send_modify(apply);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }

        tracing::warn!("submission dropped before delivery settled");

        self.state.send_if_modified(|state| {
            if !state.status.is_submitting() {
                return false;
            }

            state.status = FormStatus::Failed(RELAY_FAILURE_MESSAGE.to_owned());
            true
        });
    }
}
