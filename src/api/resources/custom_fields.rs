//
//  incidentio-client
//  api/resources/custom_fields.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Custom field types.
//!
//! Custom fields attach extra structured data to incidents. Their
//! `field_type` and `required` policy come from closed sets; both enums
//! parse from strings with [`FromStr`] so that host input can be checked
//! before any request is made.
//!
//! ```rust
//! use incidentio_client::api::resources::{FieldRequirement, FieldType};
//!
//! let field_type: FieldType = "multi_select".parse().unwrap();
//! assert_eq!(field_type, FieldType::MultiSelect);
//!
//! assert!("sometimes".parse::<FieldRequirement>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::custom_field_options::CustomFieldOptionRecord;
use crate::api::error::ApiError;
use crate::api::resource::{Resource, ResourceKind, Validate};
use crate::api::Envelope;

/// Kind of value a custom field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    SingleSelect,
    MultiSelect,
    Text,
    Link,
    Numeric,
}

impl FieldType {
    pub const ALL: [FieldType; 5] = [
        Self::SingleSelect,
        Self::MultiSelect,
        Self::Text,
        Self::Link,
        Self::Numeric,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SingleSelect => "single_select",
            Self::MultiSelect => "multi_select",
            Self::Text => "text",
            Self::Link => "link",
            Self::Numeric => "numeric",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value| value.as_str() == s)
            .ok_or_else(|| ApiError::InvalidValue {
                field: "field_type",
                value: s.to_string(),
                expected: one_of(Self::ALL.iter().map(Self::as_str)),
            })
    }
}

/// When a custom field must be filled in during the incident lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRequirement {
    Never,
    BeforeClosure,
    Always,
}

impl FieldRequirement {
    pub const ALL: [FieldRequirement; 3] = [Self::Never, Self::BeforeClosure, Self::Always];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::BeforeClosure => "before_closure",
            Self::Always => "always",
        }
    }
}

impl fmt::Display for FieldRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldRequirement {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value| value.as_str() == s)
            .ok_or_else(|| ApiError::InvalidValue {
                field: "required",
                value: s.to_string(),
                expected: one_of(Self::ALL.iter().map(Self::as_str)),
            })
    }
}

/// Renders `one of 'a', 'b' or 'c'`.
fn one_of<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = values.map(|v| format!("'{}'", v)).collect();
    match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            format!("one of {} or {}", rest.join(", "), last)
        }
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

/// Mutable fields of a custom field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub name: String,
    pub description: String,
    pub field_type: FieldType,
    pub required: FieldRequirement,

    /// Show the field in the incident creation modal. Must be true when
    /// the field is always required.
    pub show_before_creation: bool,

    /// Show the field in the incident close modal.
    pub show_before_closure: bool,

    /// Show the field in the incident update modal.
    pub show_before_update: bool,
}

impl Validate for CustomField {}

/// A custom field as stored by incident.io.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldRecord {
    pub id: String,

    #[serde(flatten)]
    pub fields: CustomField,

    /// Options currently attached to the field. Managed separately through
    /// `/v1/custom_field_options`.
    #[serde(default)]
    pub options: Vec<CustomFieldOptionRecord>,

    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Wire envelope: `{"custom_field": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomFieldResponse {
    pub custom_field: CustomFieldRecord,
}

impl Envelope for CustomFieldResponse {
    type Record = CustomFieldRecord;

    fn into_record(self) -> CustomFieldRecord {
        self.custom_field
    }
}

/// Marker for the `/v1/custom_fields` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct CustomFields;

impl Resource for CustomFields {
    const KIND: ResourceKind = ResourceKind {
        segment: "custom_fields",
        delete_success: &[StatusCode::NO_CONTENT],
    };

    type Fields = CustomField;
    type Response = CustomFieldResponse;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_type() {
        for value in FieldType::ALL {
            assert_eq!(value.as_str().parse::<FieldType>().unwrap(), value);
        }

        let err = "dropdown".parse::<FieldType>().unwrap_err();
        assert!(err.is_caller_error());
        assert_eq!(
            err.to_string(),
            "invalid field_type 'dropdown': expected one of 'single_select', 'multi_select', 'text', 'link' or 'numeric'"
        );
    }

    #[test]
    fn test_parse_field_requirement() {
        assert_eq!(
            "before_closure".parse::<FieldRequirement>().unwrap(),
            FieldRequirement::BeforeClosure
        );
        assert!("Always".parse::<FieldRequirement>().is_err());

        let err = "".parse::<FieldRequirement>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid required '': expected one of 'never', 'before_closure' or 'always'"
        );
    }

    #[test]
    fn test_decode_response() {
        let json = r#"{
            "custom_field": {
                "id": "01G44T2BWJY0ZMV945X32RAJ5C",
                "name": "Affected Team",
                "description": "The team which was responsible for resolving this incident.",
                "field_type": "multi_select",
                "required": "always",
                "show_before_creation": false,
                "show_before_closure": true,
                "show_before_update": true,
                "options": [],
                "created_at": "2022-05-28T07:46:07.385Z",
                "updated_at": "2022-05-28T07:46:07.385Z"
            }
        }"#;

        let record = serde_json::from_str::<CustomFieldResponse>(json)
            .unwrap()
            .into_record();
        assert_eq!(record.fields.name, "Affected Team");
        assert_eq!(record.fields.field_type, FieldType::MultiSelect);
        assert_eq!(record.fields.required, FieldRequirement::Always);
        assert!(!record.fields.show_before_creation);
        assert!(record.fields.show_before_closure);
        assert!(record.fields.show_before_update);
        assert!(record.options.is_empty());
    }

    #[test]
    fn test_unknown_field_type_in_response_is_rejected() {
        let json = r#"{"custom_field": {"id": "x", "name": "n", "description": "d",
            "field_type": "dropdown", "required": "never",
            "show_before_creation": false, "show_before_closure": false, "show_before_update": false}}"#;

        assert!(serde_json::from_str::<CustomFieldResponse>(json).is_err());
    }
}
