// File: src/controller.rs
// Purpose: Submission controller - input handling, batch validation, hand-off

use crate::challenge::{Challenge, ChallengeSource, RandomChallenges};
use crate::channel::{ChannelResponse, SubmissionChannel};
use crate::config::{ContactFormConfig, FieldNames, MessageConfig};
use crate::error::SubmitError;
use crate::form::{live_filter, ContactForm, Validity};
use crate::payload::SubmissionPayload;
use crate::presenter::Presenter;
use crate::validation::{validate_attempt, ChallengeStatus, ValidationReport};
use contact_form_validation::{accepts_keystroke, dial_code, email_domain, FieldId};
use tracing::{debug, info, warn};

/// The single notice shown for any transport or rejection failure
pub const FAILURE_NOTICE: &str =
    "There was an error submitting your form. Please check your connection and try again.";

/// Where the controller is in a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Validating,
    HasErrors,
    AllValid,
    Submitting,
    Success,
    Failure,
}

/// How a submit intent ended
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; every error has been presented
    Invalid(ValidationReport),
    /// The endpoint accepted the payload
    Accepted { status: u16 },
    /// Delivery failed; field values are untouched
    Failed(SubmitError),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

/// Owns the form, the current challenge and the presentation hooks
///
/// Host events map onto plain method calls: `input`, `paste`, `keystroke`,
/// `change`, `refresh_challenge`, and the one async `submit`.
pub struct SubmissionController<C, P> {
    form: ContactForm,
    challenge: Challenge,
    challenges: Box<dyn ChallengeSource + Send>,
    channel: C,
    presenter: P,
    message: MessageConfig,
    names: FieldNames,
    state: ControllerState,
}

impl<C: SubmissionChannel, P: Presenter> SubmissionController<C, P> {
    /// Create a controller with random challenges
    pub fn new(channel: C, presenter: P, config: &ContactFormConfig) -> Self {
        Self::with_challenges(
            channel,
            presenter,
            config,
            Box::new(RandomChallenges::from_entropy()),
        )
    }

    /// Create a controller drawing challenges from `challenges`
    ///
    /// The first challenge is generated and shown immediately.
    pub fn with_challenges(
        channel: C,
        mut presenter: P,
        config: &ContactFormConfig,
        mut challenges: Box<dyn ChallengeSource + Send>,
    ) -> Self {
        let challenge = challenges.next_challenge();
        presenter.show_challenge(challenge.question());

        Self {
            form: ContactForm::new(),
            challenge,
            challenges,
            channel,
            presenter,
            message: config.message.clone(),
            names: config.fields.clone(),
            state: ControllerState::Idle,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// Question currently on screen
    pub fn question(&self) -> &str {
        self.challenge.question()
    }

    /// Typed text; returns the filtered value to write back
    pub fn input(&mut self, field: FieldId, raw: &str) -> String {
        let value = self.form.apply_input(field, raw);
        if value != raw {
            self.presenter.set_value(field, &value);
        }
        self.presenter.hide_error(field);
        value
    }

    /// Pasted text replaces the whole value, filtered
    pub fn paste(&mut self, field: FieldId, pasted: &str) -> String {
        let value = self.form.apply_input(field, pasted);
        self.presenter.set_value(field, &value);
        self.presenter.hide_error(field);
        value
    }

    /// Whether a keystroke may be inserted into the field's current value
    pub fn keystroke(&self, field: FieldId, ch: char) -> bool {
        match live_filter(field) {
            Some(mode) => accepts_keystroke(mode, self.form.value(field), ch),
            None => true,
        }
    }

    /// A select box changed
    ///
    /// Picking a country pre-selects its dial code when one is known.
    pub fn change(&mut self, field: FieldId, value: &str) {
        self.form.set_value(field, value.to_string());
        self.presenter.hide_error(field);

        if field == FieldId::Country {
            if let Some(code) = dial_code(value.trim()) {
                self.presenter.show_dial_code(Some(code));
            }
        }
    }

    /// Explicit refresh: new question, answer and its error cleared
    pub fn refresh_challenge(&mut self) {
        self.replace_challenge();
        self.presenter.hide_error(FieldId::ChallengeAnswer);
    }

    /// Validate everything and, if clean, hand the payload to the channel
    ///
    /// Taking `&mut self` keeps at most one submission in flight. If the
    /// returned future is dropped while the channel is still sending, the
    /// controller goes back to `Idle` with the submit button and native
    /// validation re-enabled, and the form keeps its values.
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.transition(ControllerState::Validating);
        self.presenter.set_native_validation(false);
        self.hide_all_errors();

        let attempt = self.form.snapshot();
        let report = validate_attempt(&attempt, &self.challenge);

        for field in FieldId::TRACKED {
            self.form
                .mark(field, Validity::from_check(report.get_error(field).map(str::to_string)));
        }

        if report.has_errors() {
            self.transition(ControllerState::HasErrors);
            self.present_errors(&report);
            self.presenter.set_native_validation(true);
            self.transition(ControllerState::Idle);
            return SubmitOutcome::Invalid(report);
        }

        self.transition(ControllerState::AllValid);
        let payload = SubmissionPayload::build(&attempt, &self.message, &self.names);

        self.transition(ControllerState::Submitting);
        info!(
            channel = self.channel.name(),
            entries = payload.len(),
            reply_domain = email_domain(attempt.value(FieldId::Email)).unwrap_or(""),
            "handing submission to channel"
        );

        let result = {
            let flight = InFlight::begin(&mut self.state, &mut self.presenter);
            let result = match self.channel.send(&payload).await {
                Ok(response) => resolve_response(response),
                Err(e) => Err(SubmitError::from(e)),
            };
            flight.land();
            result
        };

        let outcome = match result {
            Ok(status) => {
                self.complete_success(status);
                SubmitOutcome::Accepted { status }
            }
            Err(e) => {
                self.complete_failure(&e);
                SubmitOutcome::Failed(e)
            }
        };

        self.presenter.set_native_validation(true);
        self.transition(ControllerState::Idle);
        outcome
    }

    fn present_errors(&mut self, report: &ValidationReport) {
        // Every error goes out in one batch
        for error in report.errors() {
            self.presenter.show_error(error.field, &error.message);
        }
        debug!(count = report.len(), "presented validation errors");

        if report.challenge() == ChallengeStatus::Mismatch {
            self.replace_challenge();
        }
    }

    fn complete_success(&mut self, status: u16) {
        self.transition(ControllerState::Success);
        info!(status, "submission accepted");

        self.form.clear();
        for field in FieldId::TRACKED {
            self.presenter.set_value(field, "");
        }
        self.presenter.show_dial_code(None);
        self.hide_all_errors();
        self.replace_challenge();
        self.presenter.on_success();
    }

    fn complete_failure(&mut self, error: &SubmitError) {
        self.transition(ControllerState::Failure);
        match error {
            SubmitError::Rejected { status, detail } => {
                warn!(status, detail = detail.as_deref().unwrap_or(""), "submission rejected")
            }
            SubmitError::Transport(e) => warn!(error = %e, "submission transport failed"),
        }
        self.presenter.on_failure(FAILURE_NOTICE);
    }

    /// Swap in a new challenge and keep the screen in sync with it
    fn replace_challenge(&mut self) {
        self.challenge = self.challenges.next_challenge();
        self.form.clear_challenge_answer();
        self.presenter.show_challenge(self.challenge.question());
        self.presenter.set_value(FieldId::ChallengeAnswer, "");
        debug!("challenge regenerated");
    }

    fn hide_all_errors(&mut self) {
        for field in FieldId::TRACKED {
            self.presenter.hide_error(field);
        }
        self.presenter.hide_error(FieldId::ChallengeAnswer);
    }

    fn transition(&mut self, next: ControllerState) {
        debug!(from = ?self.state, to = ?next, "controller state");
        self.state = next;
    }
}

/// Holds the submit button disabled while the channel is sending
///
/// Dropping it re-enables the button. If it is dropped without `land`, the
/// submit future was cancelled mid-send and the attempt is rolled back.
struct InFlight<'a, P: Presenter> {
    state: &'a mut ControllerState,
    presenter: &'a mut P,
    landed: bool,
}

impl<'a, P: Presenter> InFlight<'a, P> {
    fn begin(state: &'a mut ControllerState, presenter: &'a mut P) -> Self {
        presenter.set_submit_enabled(false);
        Self {
            state,
            presenter,
            landed: false,
        }
    }

    /// The channel answered; the caller decides Success or Failure
    fn land(mut self) {
        self.landed = true;
    }
}

impl<P: Presenter> Drop for InFlight<'_, P> {
    fn drop(&mut self) {
        self.presenter.set_submit_enabled(true);
        if !self.landed {
            warn!("submission cancelled while in flight");
            self.presenter.set_native_validation(true);
            *self.state = ControllerState::Idle;
        }
    }
}

/// 2xx means accepted even when the body is not JSON
fn resolve_response(response: ChannelResponse) -> Result<u16, SubmitError> {
    if response.is_accepted() {
        if !response.body.trim().is_empty() && response.json().is_none() {
            debug!(status = response.status, "response body is not JSON; treating as accepted");
        }
        return Ok(response.status);
    }

    Err(SubmitError::Rejected {
        status: response.status,
        detail: response.error_detail(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_accepts_unparseable_success() {
        assert_eq!(resolve_response(ChannelResponse::new(200, "<html>thanks</html>")).unwrap(), 200);
        assert_eq!(resolve_response(ChannelResponse::new(201, "")).unwrap(), 201);
    }

    #[test]
    fn test_resolve_rejects_non_2xx() {
        let err = resolve_response(ChannelResponse::new(422, r#"{"error":"bad email"}"#)).unwrap_err();
        assert_eq!(err.status(), Some(422));
        match err {
            SubmitError::Rejected { detail, .. } => assert_eq!(detail.as_deref(), Some("bad email")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
