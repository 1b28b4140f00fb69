//! Contact Form WASM
//!
//! WebAssembly bindings for the contact form's live filtering and
//! validation. The page calls these from its input, paste and keypress
//! handlers so client-side messages match the native controller exactly.

use contact_form_validation as core;
use contact_form_validation::{FieldId, FilterMode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validation error returned to JavaScript
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

fn parse_field(field_id: &str) -> Result<FieldId, JsValue> {
    field_id.parse::<FieldId>().map_err(|e| {
        web_sys::console::warn_1(&JsValue::from_str(&e.to_string()));
        JsValue::from_str(&e.to_string())
    })
}

fn parse_mode(mode: &str) -> Result<FilterMode, JsValue> {
    FilterMode::parse(mode)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown filter mode: {}", mode)))
}

/// Validate a single field value
///
/// # Returns
/// The error message, or `undefined` when the value is valid
///
/// # Example (JavaScript)
/// ```javascript
/// const error = validateField('firstName', input.value);
/// if (error) showError('firstName', error);
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_id: &str, value: &str) -> Result<Option<String>, JsValue> {
    let field = parse_field(field_id)?;
    Ok(core::validate(field, value))
}

/// Validate every tracked field at once
///
/// # Arguments
/// * `values` - object mapping field ids to their current values;
///   missing fields count as empty
///
/// # Returns
/// Array of `{ field, message }` in page order (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateForm({ firstName: 'Al', email: 'a@@b.com' });
/// errors.forEach(({ field, message }) => showError(field, message));
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(values: JsValue) -> Result<JsValue, JsValue> {
    let values: HashMap<String, String> = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))?;

    let errors = collect_errors(&values);
    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

fn collect_errors(values: &HashMap<String, String>) -> Vec<ValidationError> {
    FieldId::TRACKED
        .iter()
        .filter_map(|field| {
            let value = values.get(field.as_str()).map(String::as_str).unwrap_or("");
            core::validate(*field, value).map(|message| ValidationError {
                field: field.as_str().to_string(),
                message,
            })
        })
        .collect()
}

/// Check the challenge answer against the expected result
#[wasm_bindgen(js_name = validateChallengeAnswer)]
pub fn validate_challenge_answer_js(value: &str, expected: i32) -> Option<String> {
    core::validate_challenge_answer(value, i64::from(expected))
}

/// Filter text for a mode: `"alpha"` or `"phone"`
#[wasm_bindgen(js_name = filterText)]
pub fn filter_text_js(raw: &str, mode: &str) -> Result<String, JsValue> {
    Ok(core::filter_text(raw, parse_mode(mode)?))
}

/// Keypress interception; only the first character of `key` is considered
#[wasm_bindgen(js_name = acceptsKeystroke)]
pub fn accepts_keystroke_js(mode: &str, current: &str, key: &str) -> Result<bool, JsValue> {
    let mode = parse_mode(mode)?;
    Ok(key
        .chars()
        .next()
        .map(|ch| core::accepts_keystroke(mode, current, ch))
        .unwrap_or(false))
}

/// Quick injection heuristic check
#[wasm_bindgen(js_name = looksLikeInjection)]
pub fn looks_like_injection_js(text: &str) -> bool {
    core::looks_like_injection(text)
}

/// Dial code for a two-letter country code
#[wasm_bindgen(js_name = dialCode)]
pub fn dial_code_js(country: &str) -> Option<String> {
    core::dial_code(country).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_field_validation() {
        assert_eq!(validate_field("firstName", "Alice").unwrap(), None);
        assert!(validate_field("firstName", "Al").unwrap().is_some());
        assert!(validate_field("nickname", "Al").is_err());
    }

    #[wasm_bindgen_test]
    fn test_collect_errors_reports_every_field() {
        let mut values = HashMap::new();
        values.insert("firstName".to_string(), "Al".to_string());
        values.insert("email".to_string(), "a@@b.com".to_string());
        let errors = collect_errors(&values);
        assert_eq!(errors.len(), FieldId::TRACKED.len());
        assert_eq!(errors[1].field, "firstName");
    }

    #[wasm_bindgen_test]
    fn test_filters() {
        assert_eq!(filter_text_js("Jo3hn", "alpha").unwrap(), "John");
        assert_eq!(filter_text_js("12-34-56", "phone").unwrap(), "12-3456");
        assert!(filter_text_js("x", "digits").is_err());
        assert!(accepts_keystroke_js("phone", "555", "-").unwrap());
        assert!(!accepts_keystroke_js("alpha", "", "").unwrap());
    }

    #[wasm_bindgen_test]
    fn test_helpers() {
        assert!(looks_like_injection_js("x OR 1=1"));
        assert_eq!(dial_code_js("IN").as_deref(), Some("+91"));
        assert_eq!(validate_challenge_answer_js("12", 12), None);
    }
}
