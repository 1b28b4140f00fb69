//! Field identifiers understood by the contact form

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a contact form field
///
/// The eight tracked fields plus the challenge answer input. Identifiers
/// serialize to the camelCase element ids the page uses (`firstName`,
/// `challengeAnswer`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Description,
    FirstName,
    LastName,
    Country,
    Phone,
    Email,
    Company,
    Relationship,
    ChallengeAnswer,
}

impl FieldId {
    /// Form fields in page order. Excludes the challenge answer, which is
    /// validated against the current challenge rather than on its own.
    pub const TRACKED: [FieldId; 8] = [
        FieldId::Description,
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Country,
        FieldId::Phone,
        FieldId::Email,
        FieldId::Company,
        FieldId::Relationship,
    ];

    /// Element id used by the page
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Description => "description",
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Country => "country",
            FieldId::Phone => "phone",
            FieldId::Email => "email",
            FieldId::Company => "company",
            FieldId::Relationship => "relationship",
            FieldId::ChallengeAnswer => "challengeAnswer",
        }
    }

    /// Id of the element that carries this field's error message
    pub fn error_element_id(&self) -> String {
        format!("{}Error", self.as_str())
    }

    /// Select-style fields clear their error on `change` rather than `input`
    pub fn is_select(&self) -> bool {
        matches!(self, FieldId::Country | FieldId::Relationship)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown form field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::TRACKED
            .iter()
            .chain(std::iter::once(&FieldId::ChallengeAnswer))
            .find(|id| id.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
