// File: src/validation.rs
// Purpose: Whole-form validation of a submit attempt

use crate::challenge::Challenge;
use crate::form::SubmissionAttempt;
use contact_form_validation::{validate, FieldId};

/// A failing field and the message to show for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

/// How the challenge answer fared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeStatus {
    Solved,
    /// Nothing was typed
    Missing,
    /// An answer was typed but it is wrong
    Mismatch,
}

/// Result of validating a whole attempt
///
/// Errors are kept in page order, challenge last.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
    challenge: ChallengeStatus,
}

impl ValidationReport {
    /// Check if the attempt passed every rule
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the error for a specific field
    pub fn get_error(&self, field: FieldId) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn challenge(&self) -> ChallengeStatus {
        self.challenge
    }
}

/// Evaluate every tracked field and the challenge answer
///
/// Never stops at the first failure: the report always holds every error
/// so they can be shown together.
pub fn validate_attempt(attempt: &SubmissionAttempt, challenge: &Challenge) -> ValidationReport {
    let mut errors: Vec<FieldError> = FieldId::TRACKED
        .iter()
        .filter_map(|field| {
            validate(*field, attempt.value(*field)).map(|message| FieldError {
                field: *field,
                message,
            })
        })
        .collect();

    let answer = attempt.challenge_answer();
    let challenge_status = match validate(FieldId::ChallengeAnswer, answer) {
        Some(message) => {
            errors.push(FieldError {
                field: FieldId::ChallengeAnswer,
                message,
            });
            ChallengeStatus::Missing
        }
        None => match challenge.check(answer) {
            Some(message) => {
                errors.push(FieldError {
                    field: FieldId::ChallengeAnswer,
                    message,
                });
                ChallengeStatus::Mismatch
            }
            None => ChallengeStatus::Solved,
        },
    };

    ValidationReport {
        errors,
        challenge: challenge_status,
    }
}
