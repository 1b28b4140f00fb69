// File: src/config.rs
// Purpose: Configuration parsing from contact-form.toml

use anyhow::{Context, Result};
use contact_form_validation::FieldId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable that overrides `endpoint.url`
pub const ENDPOINT_ENV: &str = "CONTACT_FORM_ENDPOINT";

/// Contact form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContactFormConfig {
    #[serde(default)]
    pub endpoint: EndpointConfig,

    #[serde(default)]
    pub message: MessageConfig,

    #[serde(default)]
    pub fields: FieldNames,
}

/// Hosted form endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Where submissions are POSTed (e.g. a Formspree form URL)
    #[serde(default)]
    pub url: String,

    /// Give up on a hung request after this many seconds.
    /// Unset means wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Value of the Accept header
    #[serde(default = "default_accept")]
    pub accept: String,
}

/// Metadata attached to every submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageConfig {
    /// Sent as `_subject`
    #[serde(default = "default_subject")]
    pub subject: String,

    /// Sent as `_format`
    #[serde(default = "default_format")]
    pub format: String,
}

/// Transport field names, i.e. the `name` attribute each input posts under
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldNames {
    #[serde(default = "default_description_name")]
    pub description: String,
    #[serde(default = "default_first_name")]
    pub first_name: String,
    #[serde(default = "default_last_name")]
    pub last_name: String,
    #[serde(default = "default_country_name")]
    pub country: String,
    #[serde(default = "default_phone_name")]
    pub phone: String,
    #[serde(default = "default_phone_code_name")]
    pub phone_code: String,
    #[serde(default = "default_email_name")]
    pub email: String,
    #[serde(default = "default_company_name")]
    pub company: String,
    #[serde(default = "default_relationship_name")]
    pub relationship: String,
}

impl FieldNames {
    /// Transport name for a tracked field. The challenge answer is never
    /// transported and has no name.
    pub fn name_for(&self, field: FieldId) -> Option<&str> {
        let name = match field {
            FieldId::Description => &self.description,
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Country => &self.country,
            FieldId::Phone => &self.phone,
            FieldId::Email => &self.email,
            FieldId::Company => &self.company,
            FieldId::Relationship => &self.relationship,
            FieldId::ChallengeAnswer => return None,
        };
        Some(name.as_str())
    }
}

// Default values
fn default_accept() -> String {
    "application/json".to_string()
}

fn default_subject() -> String {
    "New Contact Form Submission".to_string()
}

fn default_format() -> String {
    "plain".to_string()
}

fn default_description_name() -> String {
    "message".to_string()
}

fn default_first_name() -> String {
    "firstName".to_string()
}

fn default_last_name() -> String {
    "lastName".to_string()
}

fn default_country_name() -> String {
    "country".to_string()
}

fn default_phone_name() -> String {
    "phone".to_string()
}

fn default_phone_code_name() -> String {
    "phoneCode".to_string()
}

fn default_email_name() -> String {
    "email".to_string()
}

fn default_company_name() -> String {
    "company".to_string()
}

fn default_relationship_name() -> String {
    "relationship".to_string()
}

// Default implementations
impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_secs: None,
            accept: default_accept(),
        }
    }
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            subject: default_subject(),
            format: default_format(),
        }
    }
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            description: default_description_name(),
            first_name: default_first_name(),
            last_name: default_last_name(),
            country: default_country_name(),
            phone: default_phone_name(),
            phone_code: default_phone_code_name(),
            email: default_email_name(),
            company: default_company_name(),
            relationship: default_relationship_name(),
        }
    }
}

impl EndpointConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl ContactFormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ContactFormConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./contact-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("contact-form.toml")
    }

    /// Apply `CONTACT_FORM_ENDPOINT` if it is set and non-empty
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(ENDPOINT_ENV) {
            if !url.trim().is_empty() {
                self.endpoint.url = url.trim().to_string();
            }
        }
        self
    }
}
