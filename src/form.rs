//! Login form state machine
//!
//! [`FormState`] holds the credentials draft, which fields have been
//! interacted with, the visible field errors and the submission phase. It
//! has no notion of time. [`LoginController`] wraps it with a
//! [`Scheduler`] to run the simulated submission and to tear down cleanly
//! when the form goes away.
//!
//! ```text
//! Idle --submit--> Validating --valid----> Submitting --timer--> Idle
//!                              \--invalid--> Idle (field errors set)
//! ```

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};

use crate::config::{FormConfig, LOGGING_IN_LABEL, LOGIN_LABEL};
use crate::timer::{Scheduler, TimerHandle};
use crate::types::{
    CredentialsDraft, FieldErrors, FieldName, SubmitPhase, SubmitRejected, SubmitTicket,
};
use crate::validation::{validate, validate_field};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    draft: CredentialsDraft,
    touched: BTreeSet<FieldName>,
    submit_attempted: bool,
    errors: FieldErrors,
    phase: SubmitPhase,
    next_ticket: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &CredentialsDraft {
        &self.draft
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.draft.get(field)
    }

    /// Message to show under `field`, if any
    pub fn error(&self, field: FieldName) -> Option<&'static str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting(_))
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.is_submitting()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            LOGGING_IN_LABEL
        } else {
            LOGIN_LABEL
        }
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// Set a field's value. Only that field is re-validated, and only once
    /// its message is allowed to show.
    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.draft.set(field, value.into());
        if self.shows_errors_for(field) {
            self.revalidate(field);
        }
    }

    /// Mark a field as interacted with (blur) and show its current message
    pub fn touch(&mut self, field: FieldName) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    /// Validate the draft and move to `Submitting` if it is clean.
    ///
    /// An invalid draft leaves the form idle with every failing field's
    /// message set.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }

        self.submit_attempted = true;
        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            return Err(SubmitRejected::Invalid(self.errors.clone()));
        }

        self.next_ticket += 1;
        let ticket = SubmitTicket(self.next_ticket);
        self.phase = SubmitPhase::Submitting(ticket);
        Ok(ticket)
    }

    /// Return to idle if `ticket` is the submission in flight.
    ///
    /// Returns false, changing nothing, for any other ticket.
    pub fn finish_submit(&mut self, ticket: SubmitTicket) -> bool {
        if self.phase != SubmitPhase::Submitting(ticket) {
            return false;
        }
        self.phase = SubmitPhase::Idle;
        true
    }

    fn shows_errors_for(&self, field: FieldName) -> bool {
        self.submit_attempted || self.is_touched(field)
    }

    fn revalidate(&mut self, field: FieldName) {
        let message = validate_field(field, self.draft.get(field));
        self.errors.set(field, message);
    }
}

type Listener = Box<dyn Fn(&FormState)>;

struct Inner<S: Scheduler> {
    state: RefCell<FormState>,
    scheduler: S,
    config: FormConfig,
    pending: RefCell<Option<S::Handle>>,
    listener: RefCell<Option<Listener>>,
    mounted: Cell<bool>,
}

impl<S: Scheduler> Inner<S> {
    fn notify(&self) {
        if !self.mounted.get() {
            return;
        }
        if let Some(listener) = self.listener.borrow().as_ref() {
            listener(&self.state.borrow());
        }
    }

    fn complete(&self, ticket: SubmitTicket) {
        if !self.mounted.get() {
            tracing::debug!("Ignoring login completion after teardown");
            return;
        }

        // The fired handle stays in `pending` until the next submit or
        // teardown; it is still running this callback.
        let finished = self.state.borrow_mut().finish_submit(ticket);
        if finished {
            tracing::info!("Simulated login finished");
            self.notify();
        } else {
            tracing::debug!(?ticket, "Ignoring stale login completion");
        }
    }
}

/// Drives a [`FormState`] through the simulated submission.
///
/// Cloning yields another handle to the same form.
pub struct LoginController<S: Scheduler> {
    inner: Rc<Inner<S>>,
}

impl<S: Scheduler> Clone for LoginController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: Scheduler + 'static> LoginController<S> {
    pub fn new(scheduler: S, config: FormConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(FormState::new()),
                scheduler,
                config,
                pending: RefCell::new(None),
                listener: RefCell::new(None),
                mounted: Cell::new(true),
            }),
        }
    }

    /// Register the function called with the new state after every change.
    /// Replaces any previous listener.
    pub fn subscribe(&self, listener: impl Fn(&FormState) + 'static) {
        *self.inner.listener.borrow_mut() = Some(Box::new(listener));
    }

    pub fn snapshot(&self) -> FormState {
        self.inner.state.borrow().clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.get()
    }

    pub fn update_field(&self, field: FieldName, value: impl Into<String>) {
        if !self.is_mounted() {
            return;
        }
        self.inner.state.borrow_mut().update_field(field, value);
        self.inner.notify();
    }

    pub fn touch(&self, field: FieldName) {
        if !self.is_mounted() {
            return;
        }
        self.inner.state.borrow_mut().touch(field);
        self.inner.notify();
    }

    /// Validate and, if clean, start the simulated login.
    pub fn submit(&self) -> Result<SubmitTicket, SubmitRejected> {
        if !self.is_mounted() {
            return Err(SubmitRejected::Unmounted);
        }

        let result = self.inner.state.borrow_mut().begin_submit();
        let ticket = match result {
            Ok(ticket) => ticket,
            Err(rejected) => {
                tracing::debug!(%rejected, "Login not submitted");
                self.inner.notify();
                return Err(rejected);
            }
        };

        {
            let state = self.inner.state.borrow();
            tracing::info!(email = %state.draft().email, ?ticket, "Login submitted");
        }

        let weak: Weak<Inner<S>> = Rc::downgrade(&self.inner);
        let handle = self.inner.scheduler.schedule(
            self.inner.config.submit_delay,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.complete(ticket);
                }
            }),
        );
        *self.inner.pending.borrow_mut() = Some(handle);

        self.inner.notify();
        Ok(ticket)
    }

    /// Stop reacting to anything. Cancels a pending submission timer; a
    /// completion that still arrives is ignored.
    pub fn teardown(&self) {
        if !self.inner.mounted.replace(false) {
            return;
        }
        if let Some(handle) = self.inner.pending.borrow_mut().take() {
            tracing::debug!("Cancelling pending login on teardown");
            handle.cancel();
        }
        self.inner.listener.borrow_mut().take();
    }
}
