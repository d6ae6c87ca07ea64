//! Contact form state: field validation and a simulated submission that
//! completes after a fixed delay.
//!
//! Submission is poll-based. The host calls [`ContactForm::poll`] from
//! its frame loop; on the tick the delay elapses the fields clear and a
//! confirmation message is returned once.

use std::time::{Duration, Instant};

use crate::core::error::{EngineError, EngineResult};

/// Simulated round-trip time for a submission.
const SUBMIT_DELAY: Duration = Duration::from_secs(2);

const CONFIRMATION: &str = "Message sent! I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Submitted,
}

/// The contact form's fields and submission lifecycle.
#[derive(Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    state: SubmissionState,
    started: Option<Instant>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            state: SubmissionState::Idle,
            started: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Validate and begin the simulated submission.
    pub fn submit(&mut self, now: Instant) -> EngineResult<()> {
        if self.state == SubmissionState::Submitting {
            return Err(EngineError::SubmissionInProgress);
        }
        self.validate()?;
        self.state = SubmissionState::Submitting;
        self.started = Some(now);
        log::info!("contact form submitted by {}", self.name);
        Ok(())
    }

    /// Advance the submission. Returns the confirmation message exactly
    /// once, on the tick the delay elapses; the fields clear then.
    pub fn poll(&mut self, now: Instant) -> Option<&'static str> {
        let started = self.started?;
        if self.state != SubmissionState::Submitting {
            return None;
        }
        if now.saturating_duration_since(started) < SUBMIT_DELAY {
            return None;
        }
        self.clear();
        self.state = SubmissionState::Submitted;
        self.started = None;
        Some(CONFIRMATION)
    }

    fn validate(&self) -> EngineResult<()> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            missing.push("email");
        }
        if self.subject.trim().is_empty() {
            missing.push("subject");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(EngineError::IncompleteForm(missing.join(", ")))
        }
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.name = "Ada".into();
        form.email = "ada@example.com".into();
        form.subject = "Hello".into();
        form.message = "Nice site".into();
        form
    }

    #[test]
    fn test_each_field_is_required() {
        let now = Instant::now();
        for field in ["name", "email", "subject", "message"] {
            let mut form = filled();
            match field {
                "name" => form.name.clear(),
                "email" => form.email.clear(),
                "subject" => form.subject.clear(),
                _ => form.message.clear(),
            }
            match form.submit(now) {
                Err(EngineError::IncompleteForm(f)) => assert_eq!(f, field),
                other => panic!("expected IncompleteForm({}), got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_empty_form_lists_every_field() {
        let mut form = ContactForm::new();
        match form.submit(Instant::now()) {
            Err(EngineError::IncompleteForm(fields)) => {
                assert_eq!(fields, "name, email, subject, message");
            }
            other => panic!("expected IncompleteForm, got {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_only_field_rejected() {
        let now = Instant::now();
        let mut form = filled();
        form.message = "   ".into();
        assert!(matches!(
            form.submit(now),
            Err(EngineError::IncompleteForm(f)) if f == "message"
        ));
    }

    #[test]
    fn test_email_needs_at_sign() {
        let now = Instant::now();
        let mut form = filled();
        form.email = "not-an-address".into();
        assert!(matches!(
            form.submit(now),
            Err(EngineError::IncompleteForm(f)) if f == "email"
        ));
    }

    #[test]
    fn test_submission_completes_after_delay() {
        let t0 = Instant::now();
        let mut form = filled();
        form.submit(t0).unwrap();
        assert!(form.is_submitting());

        assert_eq!(form.poll(t0 + Duration::from_millis(500)), None);
        assert!(form.is_submitting());

        let msg = form.poll(t0 + Duration::from_secs(2));
        assert!(msg.is_some());
        assert_eq!(form.state(), SubmissionState::Submitted);
        assert!(form.name.is_empty());
        assert!(form.message.is_empty());

        // The confirmation is delivered once.
        assert_eq!(form.poll(t0 + Duration::from_secs(3)), None);
    }

    #[test]
    fn test_double_submit_rejected_while_pending() {
        let t0 = Instant::now();
        let mut form = filled();
        form.submit(t0).unwrap();
        assert!(matches!(
            form.submit(t0 + Duration::from_millis(100)),
            Err(EngineError::SubmissionInProgress)
        ));
    }

    #[test]
    fn test_resubmit_allowed_after_completion() {
        let t0 = Instant::now();
        let mut form = filled();
        form.submit(t0).unwrap();
        form.poll(t0 + Duration::from_secs(2)).unwrap();

        // Fields were cleared; refill and submit again.
        let mut form2 = filled();
        std::mem::swap(&mut form.name, &mut form2.name);
        std::mem::swap(&mut form.email, &mut form2.email);
        std::mem::swap(&mut form.subject, &mut form2.subject);
        std::mem::swap(&mut form.message, &mut form2.message);
        assert!(form.submit(t0 + Duration::from_secs(5)).is_ok());
    }
}
