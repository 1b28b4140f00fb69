// Contact Form - validation, anti-bot challenge and submission hand-off
// The page stays static; delivery is delegated to a hosted form endpoint.

pub mod challenge;
pub mod channel;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod payload;
pub mod presenter;
pub mod validation;

// Re-export core types
pub use challenge::{generate, Challenge, ChallengeSource, Operator, RandomChallenges};
pub use channel::{ChannelResponse, HttpChannel, MemoryChannel, SubmissionChannel};
pub use config::ContactFormConfig;
pub use controller::{ControllerState, SubmissionController, SubmitOutcome, FAILURE_NOTICE};
pub use error::{SubmitError, TransportError};
pub use form::{ContactForm, Field, SubmissionAttempt, Validity};
pub use payload::SubmissionPayload;
pub use presenter::{FormView, Presenter};
pub use validation::{validate_attempt, ChallengeStatus, FieldError, ValidationReport};

// Re-export the pure validation layer
pub use contact_form_validation as validators;
pub use contact_form_validation::FieldId;
