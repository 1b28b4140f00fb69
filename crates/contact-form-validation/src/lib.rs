//! Contact Form Validation
//!
//! Pure validation and input-filtering functions for the contact form.
//! Used by the submission controller and by the WASM client-side bindings,
//! so both hosts report exactly the same messages.

pub mod dial_codes;
pub mod email;
pub mod field;
pub mod rules;
pub mod sanitize;
pub mod string;

// Re-export the public surface
pub use dial_codes::*;
pub use email::*;
pub use field::*;
pub use rules::*;
pub use sanitize::*;
pub use string::*;
