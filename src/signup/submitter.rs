use crate::domain::signup_client::{SignupClient, SignupError};
use crate::domain::signup_email::SignupEmail;
use crate::signup::form::{MessageKind, SignupForm};
use crate::tracking::track_signup;

/// Copy shown once the backend has accepted the address.
pub const SUCCESS_MESSAGE: &str = "You're on the list! We'll be in touch soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Drives one request/response cycle for the signup form: validate the field,
/// hold the form in its busy presentation across the network call, surface the
/// outcome, and always hand the form back interactive.
pub struct SignupSubmitter<C: SignupClient> {
    client: C,
    state: SubmissionState,
}

impl<C: SignupClient> SignupSubmitter<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    #[tracing::instrument(name = "Running a signup submission cycle", skip(self, form))]
    pub async fn submit(&mut self, form: &mut dyn SignupForm) -> SubmissionState {
        // The exclusive borrow already rules out overlapping cycles; the state
        // check additionally refuses entry if a cycle was somehow left open.
        if self.state == SubmissionState::Submitting {
            tracing::warn!("A submission is already in flight, ignoring");
            return self.state;
        }

        let email = match SignupEmail::parse(form.email_value()).map_err(SignupError::Validation) {
            Ok(email) => email,
            Err(error) => {
                return self.fail(form, error);
            }
        };

        self.state = SubmissionState::Submitting;
        form.begin_busy();

        // The one suspension point of the whole cycle.
        let outcome = self.client.submit(&email).await;

        self.state = match outcome {
            Ok(()) => {
                form.clear_email();
                form.render_message(SUCCESS_MESSAGE, MessageKind::Success);
                track_signup(email.as_ref());
                SubmissionState::Succeeded
            }
            Err(error) => {
                tracing::warn!("Signup attempt failed: {:?}", error);
                form.render_message(&error.to_string(), MessageKind::Error);
                SubmissionState::Failed
            }
        };

        // Runs on every outcome so the form is never left disabled.
        form.end_busy();
        self.state
    }

    fn fail(&mut self, form: &mut dyn SignupForm, error: SignupError) -> SubmissionState {
        self.state = SubmissionState::Failed;
        form.render_message(&error.to_string(), MessageKind::Error);
        form.end_busy();
        self.state
    }
}
