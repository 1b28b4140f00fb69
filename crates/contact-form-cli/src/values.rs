// Field values read from a TOML or JSON file

use anyhow::{bail, Context, Result};
use contact_form_validation::FieldId;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A scalar as written in the file; phone numbers may be bare integers
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// Values for the tracked fields, keyed by element id
#[derive(Debug, Default)]
pub struct FormValues {
    values: BTreeMap<FieldId, String>,
}

impl FormValues {
    /// Load from `path`; `.json` files are JSON, everything else TOML
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read values file: {:?}", path))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let raw: BTreeMap<String, Scalar> = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON values: {:?}", path))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML values: {:?}", path))?
        };

        Self::from_raw(raw)
    }

    fn from_raw(raw: BTreeMap<String, Scalar>) -> Result<Self> {
        let mut values = BTreeMap::new();
        for (key, value) in raw {
            let field: FieldId = key.parse()?;
            if field == FieldId::ChallengeAnswer {
                bail!("{} is answered interactively, remove it from the file", key);
            }
            values.insert(field, value.into_text());
        }
        Ok(Self { values })
    }

    /// Value for a field; absent fields read as empty
    pub fn get(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Present values in page order
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        FieldId::TRACKED
            .into_iter()
            .filter_map(move |field| self.values.get(&field).map(|v| (field, v.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_toml_with_integer_phone() {
        let file = write_file(
            ".toml",
            "firstName = \"John\"\nphone = 5551234567\ncountry = \"IN\"\n",
        );
        let values = FormValues::load(file.path()).unwrap();

        assert_eq!(values.get(FieldId::FirstName), "John");
        assert_eq!(values.get(FieldId::Phone), "5551234567");
        assert_eq!(values.get(FieldId::Email), "");
    }

    #[test]
    fn test_load_json() {
        let file = write_file(".json", r#"{"email": "john@example.com", "company": "Acme"}"#);
        let values = FormValues::load(file.path()).unwrap();

        let present: Vec<_> = values.iter().collect();
        assert_eq!(
            present,
            vec![(FieldId::Email, "john@example.com"), (FieldId::Company, "Acme")]
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let file = write_file(".toml", "nickname = \"JJ\"\n");
        let err = FormValues::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("unknown form field: nickname"));
    }

    #[test]
    fn test_challenge_answer_is_rejected() {
        let file = write_file(".json", r#"{"challengeAnswer": "7"}"#);
        assert!(FormValues::load(file.path()).is_err());
    }
}
