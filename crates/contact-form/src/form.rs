// File: src/form.rs
// Purpose: Field values and per-field validity as the visitor edits them

use contact_form_validation::{filter_text, FieldId, FilterMode};

/// Validity of a field since it was last edited
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Unknown,
    Valid,
    Invalid(String),
}

impl Validity {
    pub fn from_check(result: Option<String>) -> Self {
        match result {
            Some(message) => Validity::Invalid(message),
            None => Validity::Valid,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Validity::Invalid(_))
    }
}

/// A tracked form field
#[derive(Debug, Clone)]
pub struct Field {
    id: FieldId,
    value: String,
    validity: Validity,
}

impl Field {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            validity: Validity::Unknown,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn validity(&self) -> &Validity {
        &self.validity
    }

    /// Any edit forgets the previous verdict
    fn edit(&mut self, value: String) {
        self.value = value;
        self.validity = Validity::Unknown;
    }
}

/// Filter applied to a field while typing and pasting, if any
pub fn live_filter(field: FieldId) -> Option<FilterMode> {
    match field {
        FieldId::FirstName | FieldId::LastName | FieldId::Company => Some(FilterMode::Alpha),
        FieldId::Phone => Some(FilterMode::PhoneDigitsWithHyphen),
        _ => None,
    }
}

/// Every value the visitor submits, captured at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionAttempt {
    values: Vec<(FieldId, String)>,
    challenge_answer: String,
}

impl SubmissionAttempt {
    pub fn new(values: Vec<(FieldId, String)>, challenge_answer: impl Into<String>) -> Self {
        Self {
            values,
            challenge_answer: challenge_answer.into(),
        }
    }

    /// Value captured for a field; missing fields read as empty
    pub fn value(&self, field: FieldId) -> &str {
        if field == FieldId::ChallengeAnswer {
            return &self.challenge_answer;
        }
        self.values
            .iter()
            .find(|(id, _)| *id == field)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    pub fn challenge_answer(&self) -> &str {
        &self.challenge_answer
    }
}

/// Current state of the contact form
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<Field>,
    challenge_answer: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: FieldId::TRACKED.iter().map(|id| Field::new(*id)).collect(),
            challenge_answer: String::new(),
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Tracked field by id; `None` for the challenge answer
    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    fn field_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    pub fn value(&self, id: FieldId) -> &str {
        match id {
            FieldId::ChallengeAnswer => &self.challenge_answer,
            _ => self.field(id).map(Field::value).unwrap_or(""),
        }
    }

    /// Store typed or pasted text after the field's live filter
    ///
    /// Returns the value actually kept, which the host writes back into the
    /// input element.
    pub fn apply_input(&mut self, id: FieldId, raw: &str) -> String {
        let value = match live_filter(id) {
            Some(mode) => filter_text(raw, mode),
            None => raw.to_string(),
        };
        self.set_value(id, value.clone());
        value
    }

    /// Store a value verbatim (select boxes, programmatic fills)
    pub fn set_value(&mut self, id: FieldId, value: String) {
        match id {
            FieldId::ChallengeAnswer => self.challenge_answer = value,
            _ => {
                if let Some(field) = self.field_mut(id) {
                    field.edit(value);
                }
            }
        }
    }

    pub fn mark(&mut self, id: FieldId, validity: Validity) {
        if let Some(field) = self.field_mut(id) {
            field.validity = validity;
        }
    }

    pub fn clear_challenge_answer(&mut self) {
        self.challenge_answer.clear();
    }

    /// Empty every value and forget every verdict
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.edit(String::new());
        }
        self.challenge_answer.clear();
    }

    /// Capture all values at once for a submit attempt
    pub fn snapshot(&self) -> SubmissionAttempt {
        SubmissionAttempt::new(
            self.fields
                .iter()
                .map(|f| (f.id, f.value.clone()))
                .collect(),
            self.challenge_answer.clone(),
        )
    }

    pub fn invalid_fields(&self) -> Vec<FieldId> {
        self.fields
            .iter()
            .filter(|f| f.validity.is_invalid())
            .map(|f| f.id)
            .collect()
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
