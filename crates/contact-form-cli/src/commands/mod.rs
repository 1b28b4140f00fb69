pub mod challenge;
pub mod check;
pub mod dial_code;
pub mod filter;
pub mod submit;
