//! Contact form submission: a simulated send with the form's visible phases.
//!
//! Idle → Submitting (fixed delay) → Submitted (fixed display) → Idle.
//! Invalid input never leaves Idle. The service drives a form as far as
//! Submitted; the last step belongs to the client, which keeps the
//! confirmation up for `display_for` and then clears it.
//!
//! No message is transmitted anywhere: the only `MessageTransport` is
//! `SimulatedTransport`, which waits and logs.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::contact::validation::{validate_contact, ContactDraft, FieldError};

pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);
pub const SUBMITTED_DISPLAY: Duration = Duration::from_secs(5);

/// Delivers a validated contact message. Swap in a real transport (SMTP, a
/// ticketing API) without touching the form or the handler.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    async fn deliver(&self, message: &ContactDraft) -> anyhow::Result<()>;
}

/// Waits `delay`, logs the message metadata, sends nothing.
pub struct SimulatedTransport {
    pub delay: Duration,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self {
            delay: SUBMIT_DELAY,
        }
    }
}

#[async_trait]
impl MessageTransport for SimulatedTransport {
    async fn deliver(&self, message: &ContactDraft) -> anyhow::Result<()> {
        tokio::time::sleep(self.delay).await;
        info!(
            name = %message.name,
            subject = %message.subject,
            "Contact message accepted (simulated, not transmitted)"
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    Idle,
    Submitting,
    Submitted,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("contact form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),

    #[error("message delivery failed: {0}")]
    Delivery(#[from] anyhow::Error),
}

/// One visitor's contact form.
pub struct ContactForm {
    draft: ContactDraft,
    phase: FormPhase,
    display_for: Duration,
}

impl ContactForm {
    pub fn new(draft: ContactDraft, display_for: Duration) -> Self {
        Self {
            draft,
            phase: FormPhase::Idle,
            display_for,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// How long the client keeps the confirmation visible before resetting.
    pub fn display_for(&self) -> Duration {
        self.display_for
    }

    fn set_phase(&mut self, next: FormPhase) {
        debug!(from = ?self.phase, to = ?next, "Contact form phase");
        self.phase = next;
    }

    /// Validates, then hands the draft to `transport`. On success the form is
    /// cleared and left in `Submitted`.
    pub async fn submit(&mut self, transport: &dyn MessageTransport) -> Result<(), SubmitError> {
        validate_contact(&self.draft).map_err(SubmitError::Invalid)?;

        self.set_phase(FormPhase::Submitting);
        if let Err(e) = transport.deliver(&self.draft).await {
            self.set_phase(FormPhase::Idle);
            return Err(SubmitError::Delivery(e));
        }

        self.draft = ContactDraft::default();
        self.set_phase(FormPhase::Submitted);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::valid_draft;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::Instant;

    #[derive(Default)]
    struct CountingTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl MessageTransport for CountingTransport {
        async fn deliver(&self, _message: &ContactDraft) -> anyhow::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl MessageTransport for FailingTransport {
        async fn deliver(&self, _message: &ContactDraft) -> anyhow::Result<()> {
            anyhow::bail!("smtp down")
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_email_blocks_submission_without_delay() {
        let transport = CountingTransport::default();
        let mut form = ContactForm::new(
            ContactDraft {
                email: "not-an-email".to_string(),
                ..valid_draft()
            },
            SUBMITTED_DISPLAY,
        );

        let started = Instant::now();
        let err = form.submit(&transport).await.unwrap_err();

        assert!(matches!(&err, SubmitError::Invalid(fields) if fields[0].field == "email"));
        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.draft().email, "not-an-email");
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_send_takes_the_fixed_delay() {
        let mut form = ContactForm::new(valid_draft(), SUBMITTED_DISPLAY);
        let started = Instant::now();

        form.submit(&SimulatedTransport::default()).await.unwrap();

        assert_eq!(started.elapsed(), SUBMIT_DELAY);
        assert_eq!(form.phase(), FormPhase::Submitted);
        assert_eq!(form.draft(), &ContactDraft::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_ends_in_submitted_with_display_duration() {
        let transport = CountingTransport::default();
        let display = Duration::from_millis(1500);
        let mut form = ContactForm::new(valid_draft(), display);
        assert_eq!(form.phase(), FormPhase::Idle);

        form.submit(&transport).await.unwrap();

        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert_eq!(form.phase(), FormPhase::Submitted);
        assert_eq!(form.display_for(), display);
    }

    #[tokio::test]
    async fn test_delivery_failure_returns_to_idle_and_keeps_draft() {
        let mut form = ContactForm::new(valid_draft(), SUBMITTED_DISPLAY);
        let err = form.submit(&FailingTransport).await.unwrap_err();
        assert!(matches!(err, SubmitError::Delivery(_)));
        assert_eq!(form.phase(), FormPhase::Idle);
        assert_eq!(form.draft(), &valid_draft());
    }
}
