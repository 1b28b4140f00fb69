// File: src/payload.rs
// Purpose: Form-encoded body handed to the hosted endpoint

use crate::config::{FieldNames, MessageConfig};
use crate::form::SubmissionAttempt;
use contact_form_validation::{dial_code, FieldId};

/// Ordered name/value pairs, posted as `application/x-www-form-urlencoded`
///
/// Carries every tracked field under its transport name plus `_subject`,
/// `_format` and `_replyto`. The challenge is never included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    entries: Vec<(String, String)>,
}

impl SubmissionPayload {
    pub fn build(attempt: &SubmissionAttempt, message: &MessageConfig, names: &FieldNames) -> Self {
        let mut entries = Vec::with_capacity(FieldId::TRACKED.len() + 4);

        for field in FieldId::TRACKED {
            if let Some(name) = names.name_for(field) {
                entries.push((name.to_string(), attempt.value(field).to_string()));
            }
        }

        if let Some(code) = dial_code(attempt.value(FieldId::Country).trim()) {
            entries.push((names.phone_code.clone(), code.to_string()));
        }

        entries.push(("_subject".to_string(), message.subject.clone()));
        entries.push(("_format".to_string(), message.format.clone()));

        let email = attempt.value(FieldId::Email).trim();
        if !email.is_empty() {
            entries.push(("_replyto".to_string(), email.to_string()));
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// First value posted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encode as a request body: `name=value&name=value`
    pub fn to_form_body(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
