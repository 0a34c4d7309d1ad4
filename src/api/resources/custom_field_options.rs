//
//  incidentio-client
//  api/resources/custom_field_options.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Custom field option types.
//!
//! Options are the selectable values of `single_select` and `multi_select`
//! custom fields. Each one belongs to exactly one field and is ordered by
//! its `sort_key`.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::resource::{Resource, ResourceKind, Validate};
use crate::api::Envelope;

/// Mutable fields of a custom field option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldOption {
    /// Id of the owning custom field.
    pub custom_field_id: String,
    pub sort_key: i64,
    pub value: String,
}

impl Validate for CustomFieldOption {}

/// A custom field option as stored by incident.io.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldOptionRecord {
    pub id: String,

    #[serde(flatten)]
    pub fields: CustomFieldOption,

    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Wire envelope: `{"custom_field_option": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomFieldOptionResponse {
    pub custom_field_option: CustomFieldOptionRecord,
}

impl Envelope for CustomFieldOptionResponse {
    type Record = CustomFieldOptionRecord;

    fn into_record(self) -> CustomFieldOptionRecord {
        self.custom_field_option
    }
}

/// Marker for the `/v1/custom_field_options` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct CustomFieldOptions;

impl Resource for CustomFieldOptions {
    const KIND: ResourceKind = ResourceKind {
        segment: "custom_field_options",
        delete_success: &[StatusCode::NO_CONTENT],
    };

    type Fields = CustomFieldOption;
    type Response = CustomFieldOptionResponse;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_response_without_timestamps() {
        let json = r#"{
            "custom_field_option": {
                "id": "01FCNDV6P870EA6S7TK1DSYDG0",
                "custom_field_id": "01FCNDV6P870EA6S7TK1DSYDG1",
                "sort_key": 10,
                "value": "Product"
            }
        }"#;

        let record = serde_json::from_str::<CustomFieldOptionResponse>(json)
            .unwrap()
            .into_record();
        assert_eq!(record.fields.sort_key, 10);
        assert_eq!(record.fields.value, "Product");
        assert_eq!(record.created_at, "");
    }
}
