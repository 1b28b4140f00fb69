// File: src/presenter.rs
// Purpose: Presentation boundary between the controller and the page

use contact_form_validation::FieldId;
use std::collections::BTreeMap;

/// What the surrounding UI must provide
///
/// Only the four core hooks are required. The rest default to no-ops for
/// hosts that have no such element.
pub trait Presenter {
    /// Show `message` under the field and mark the input as erroneous
    fn show_error(&mut self, field: FieldId, message: &str);

    /// Remove the field's message and error class
    fn hide_error(&mut self, field: FieldId);

    /// The endpoint accepted the submission
    fn on_success(&mut self);

    /// The submission failed; `notice` is a generic, user-facing text
    fn on_failure(&mut self, notice: &str);

    /// Render a new challenge question
    fn show_challenge(&mut self, _question: &str) {}

    /// Write a value back into an input (filtered text, cleared fields)
    fn set_value(&mut self, _field: FieldId, _value: &str) {}

    /// Enable or disable the submit button
    fn set_submit_enabled(&mut self, _enabled: bool) {}

    /// Turn the host's own per-field validation popups on or off
    fn set_native_validation(&mut self, _enabled: bool) {}

    /// Display the dial code matching the selected country, or clear it
    fn show_dial_code(&mut self, _code: Option<&str>) {}
}

/// In-memory rendition of everything the page would display
#[derive(Debug, Clone)]
pub struct FormView {
    /// Field to visible error message
    pub errors: BTreeMap<FieldId, String>,
    /// Values written back into inputs
    pub values: BTreeMap<FieldId, String>,
    pub question: Option<String>,
    pub dial_code: Option<String>,
    pub submit_enabled: bool,
    pub native_validation: bool,
    pub successes: usize,
    pub failures: Vec<String>,
}

impl FormView {
    /// Create an empty view
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
            values: BTreeMap::new(),
            question: None,
            dial_code: None,
            submit_enabled: true,
            native_validation: true,
            successes: 0,
            failures: Vec::new(),
        }
    }

    /// Check if field has an error
    pub fn has_error(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    /// Get error message for a field
    pub fn get_error(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(|s| s.as_str())
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the last value written into a field
    pub fn get_value(&self, field: FieldId) -> Option<&str> {
        self.values.get(&field).map(|s| s.as_str())
    }
}

impl Default for FormView {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for FormView {
    fn show_error(&mut self, field: FieldId, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    fn hide_error(&mut self, field: FieldId) {
        self.errors.remove(&field);
    }

    fn on_success(&mut self) {
        self.successes += 1;
    }

    fn on_failure(&mut self, notice: &str) {
        self.failures.push(notice.to_string());
    }

    fn show_challenge(&mut self, question: &str) {
        self.question = Some(question.to_string());
    }

    fn set_value(&mut self, field: FieldId, value: &str) {
        self.values.insert(field, value.to_string());
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    fn set_native_validation(&mut self, enabled: bool) {
        self.native_validation = enabled;
    }

    fn show_dial_code(&mut self, code: Option<&str>) {
        self.dial_code = code.map(str::to_string);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_view_errors() {
        let mut view = FormView::new();
        view.show_error(FieldId::Email, "Please enter valid e-mail address...");

        assert!(view.has_error(FieldId::Email));
        assert_eq!(
            view.get_error(FieldId::Email),
            Some("Please enter valid e-mail address...")
        );
        assert!(view.has_errors());

        view.hide_error(FieldId::Email);
        assert!(!view.has_errors());
    }

    #[test]
    fn test_form_view_values() {
        let mut view = FormView::new();
        view.set_value(FieldId::FirstName, "John");
        assert_eq!(view.get_value(FieldId::FirstName), Some("John"));
    }

    #[test]
    fn test_empty_form_view() {
        let view = FormView::default();
        assert!(!view.has_errors());
        assert!(view.submit_enabled);
        assert!(view.native_validation);
        assert!(view.get_error(FieldId::Phone).is_none());
        assert!(view.get_value(FieldId::Phone).is_none());
    }
}
