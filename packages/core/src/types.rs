// ABOUTME: Laundry item type definitions
// ABOUTME: Item entity, lifecycle status and create/update inputs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::patch::Patch;
use crate::validation::ValidationError;

/// Lifecycle stage of a laundry item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LaundryStatus {
    #[default]
    Dirty,
    Washing,
    Drying,
    Clean,
    Folded,
}

impl LaundryStatus {
    pub const ALL: [LaundryStatus; 5] = [
        LaundryStatus::Dirty,
        LaundryStatus::Washing,
        LaundryStatus::Drying,
        LaundryStatus::Clean,
        LaundryStatus::Folded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LaundryStatus::Dirty => "dirty",
            LaundryStatus::Washing => "washing",
            LaundryStatus::Drying => "drying",
            LaundryStatus::Clean => "clean",
            LaundryStatus::Folded => "folded",
        }
    }
}

impl fmt::Display for LaundryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaundryItem {
    pub id: i64,
    pub label: String,
    pub material: Option<String>,
    pub color: Option<String>,
    pub tag_id: Option<String>,
    pub status: LaundryStatus,
}

/// Payload for creating an item. Unknown JSON keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaundryItemCreateInput {
    pub label: String,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub tag_id: Option<String>,
    #[serde(default)]
    pub status: Option<LaundryStatus>,
}

impl LaundryItemCreateInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::empty_label());
        }
        Ok(())
    }
}

/// Partial update payload as received over the wire.
///
/// Every field keeps track of whether it was sent. `label` and `status`
/// cannot be cleared, so `into_input` rejects an explicit null for them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LaundryItemUpdateRequest {
    #[serde(default)]
    pub label: Patch<String>,
    #[serde(default)]
    pub material: Patch<String>,
    #[serde(default)]
    pub color: Patch<String>,
    #[serde(default)]
    pub tag_id: Patch<String>,
    #[serde(default)]
    pub status: Patch<LaundryStatus>,
}

impl LaundryItemUpdateRequest {
    pub fn into_input(self) -> Result<LaundryItemUpdateInput, ValidationError> {
        let label = match self.label {
            Patch::Absent => None,
            Patch::Null => return Err(ValidationError::null_not_allowed("label")),
            Patch::Value(label) if label.trim().is_empty() => {
                return Err(ValidationError::empty_label())
            }
            Patch::Value(label) => Some(label),
        };

        let status = match self.status {
            Patch::Absent => None,
            Patch::Null => return Err(ValidationError::null_not_allowed("status")),
            Patch::Value(status) => Some(status),
        };

        Ok(LaundryItemUpdateInput {
            label,
            material: self.material,
            color: self.color,
            tag_id: self.tag_id,
            status,
        })
    }
}

/// Validated partial update handed to the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaundryItemUpdateInput {
    pub label: Option<String>,
    pub material: Patch<String>,
    pub color: Patch<String>,
    pub tag_id: Patch<String>,
    pub status: Option<LaundryStatus>,
}

impl LaundryItemUpdateInput {
    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.material.is_absent()
            && self.color.is_absent()
            && self.tag_id.is_absent()
            && self.status.is_none()
    }
}

/// Blank tag identifiers are stored as absent so the unique index
/// never sees `""` as a real tag.
pub fn normalize_tag_id(tag_id: Option<String>) -> Option<String> {
    tag_id.filter(|tag| !tag.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&LaundryStatus::Drying).unwrap();
        assert_eq!(json, r#""drying""#);
        assert_eq!(LaundryStatus::Folded.to_string(), "folded");
    }

    #[test]
    fn test_status_rejects_unknown_value() {
        let result: Result<LaundryStatus, _> = serde_json::from_str(r#""soaking""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_status_defaults_to_dirty() {
        assert_eq!(LaundryStatus::default(), LaundryStatus::Dirty);
    }

    #[test]
    fn test_create_input_ignores_unknown_fields() {
        let input: LaundryItemCreateInput =
            serde_json::from_str(r#"{"label": "Towels", "weight_kg": 2}"#).unwrap();
        assert_eq!(input.label, "Towels");
        assert!(input.status.is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_input_rejects_blank_label() {
        let input = LaundryItemCreateInput::new("   ");
        let err = input.validate().unwrap_err();
        assert_eq!(err.field, "label");
    }

    #[test]
    fn test_update_request_only_keeps_sent_fields() {
        let request: LaundryItemUpdateRequest =
            serde_json::from_str(r#"{"color": "blue"}"#).unwrap();
        let input = request.into_input().unwrap();

        assert_eq!(
            input,
            LaundryItemUpdateInput {
                color: Patch::Value("blue".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_update_request_allows_clearing_optional_fields() {
        let request: LaundryItemUpdateRequest =
            serde_json::from_str(r#"{"material": null, "tag_id": null}"#).unwrap();
        let input = request.into_input().unwrap();

        assert_eq!(input.material, Patch::Null);
        assert_eq!(input.tag_id, Patch::Null);
        assert!(input.label.is_none());
    }

    #[test]
    fn test_update_request_rejects_null_label_and_status() {
        let request: LaundryItemUpdateRequest =
            serde_json::from_str(r#"{"label": null}"#).unwrap();
        assert_eq!(request.into_input().unwrap_err().field, "label");

        let request: LaundryItemUpdateRequest =
            serde_json::from_str(r#"{"status": null}"#).unwrap();
        assert_eq!(request.into_input().unwrap_err().field, "status");
    }

    #[test]
    fn test_update_request_rejects_empty_label() {
        let request: LaundryItemUpdateRequest =
            serde_json::from_str(r#"{"label": ""}"#).unwrap();
        assert_eq!(request.into_input().unwrap_err(), ValidationError::empty_label());
    }

    #[test]
    fn test_empty_update_input() {
        assert!(LaundryItemUpdateInput::default().is_empty());
    }

    #[test]
    fn test_normalize_tag_id() {
        assert_eq!(normalize_tag_id(None), None);
        assert_eq!(normalize_tag_id(Some("  ".to_string())), None);
        assert_eq!(
            normalize_tag_id(Some("tag-1".to_string())),
            Some("tag-1".to_string())
        );
    }
}
