//! # Domain models for relief resources
//!
//! Defines the [`Resource`] record persisted by [`crate::ResourceRepository`] and
//! rendered by the UI, together with its enumerations and the [`ResourceFilter`]
//! used to narrow the rendered list.
//!
//! ## Wire format
//!
//! Resources are stored as a JSON array under a single storage key. Field names
//! are camelCase (`organizationId`, `expiryDate`, `lastUpdated`) and enum values
//! are lowercase strings, so collections written by the earlier browser-only
//! admin page load unchanged. Two quirks of that data are normalised on read:
//!
//! | Stored value | Read as |
//! |--------------|---------|
//! | `"expiryDate": ""` | `expiry_date: None` |
//! | `"conditions": []` or only blank labels | `conditions: None` |
//! | `"conditions": ["a", ""]` | `conditions: Some(["a"])` |
//!
//! Absent optional fields are omitted on write.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Resource`] | One trackable unit of aid supply. Immutable once created. |
//! | [`ResourceType`] | `food`, `medicine`, `shelter` or `equipment`. |
//! | [`ResourceStatus`] | `available`, `allocated` or `depleted`. |
//! | [`Location`] | Latitude/longitude pair. Never edited by the form. |
//! | [`ResourceFilter`] | Optional type and status criteria for the list view. |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ParseEnumError;

/// A relief supply tracked by the admin page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub r#type: ResourceType,
    pub quantity: f64,
    /// Free-text unit label: "kg", "boxes", "bottles"
    pub unit: String,
    pub status: ResourceStatus,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub organization_id: String,
    #[serde(
        default,
        deserialize_with = "empty_string_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "conditions_from_stored",
        skip_serializing_if = "Option::is_none"
    )]
    pub conditions: Option<Vec<String>>,
    /// RFC 3339 creation timestamp. Not touched after creation.
    pub last_updated: String,
}

impl Resource {
    /// Condition labels to render, empty when none were recorded.
    pub fn condition_tags(&self) -> &[String] {
        self.conditions.as_deref().unwrap_or_default()
    }

    /// `"500 bottles"`
    pub fn quantity_label(&self) -> String {
        if self.unit.is_empty() {
            self.quantity.to_string()
        } else {
            format!("{} {}", self.quantity, self.unit)
        }
    }
}

/// Latitude/longitude pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// Kind of supply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    #[default]
    Food,
    Medicine,
    Shelter,
    Equipment,
}

impl ResourceType {
    pub const ALL: [ResourceType; 4] = [
        ResourceType::Food,
        ResourceType::Medicine,
        ResourceType::Shelter,
        ResourceType::Equipment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Food => "food",
            ResourceType::Medicine => "medicine",
            ResourceType::Shelter => "shelter",
            ResourceType::Equipment => "equipment",
        }
    }

    /// Capitalised display label.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceType::Food => "Food",
            ResourceType::Medicine => "Medicine",
            ResourceType::Shelter => "Shelter",
            ResourceType::Equipment => "Equipment",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(ResourceType::Food),
            "medicine" => Ok(ResourceType::Medicine),
            "shelter" => Ok(ResourceType::Shelter),
            "equipment" => Ok(ResourceType::Equipment),
            _ => Err(ParseEnumError::new("resource type", s)),
        }
    }
}

/// Lifecycle state of a resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    #[default]
    Available,
    Allocated,
    Depleted,
}

impl ResourceStatus {
    pub const ALL: [ResourceStatus; 3] = [
        ResourceStatus::Available,
        ResourceStatus::Allocated,
        ResourceStatus::Depleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceStatus::Available => "available",
            ResourceStatus::Allocated => "allocated",
            ResourceStatus::Depleted => "depleted",
        }
    }

    /// Capitalised display label, as shown on the status badge.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceStatus::Available => "Available",
            ResourceStatus::Allocated => "Allocated",
            ResourceStatus::Depleted => "Depleted",
        }
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(ResourceStatus::Available),
            "allocated" => Ok(ResourceStatus::Allocated),
            "depleted" => Ok(ResourceStatus::Depleted),
            _ => Err(ParseEnumError::new("resource status", s)),
        }
    }
}

/// Criteria for narrowing the rendered list. `None` matches anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    pub r#type: Option<ResourceType>,
    pub status: Option<ResourceStatus>,
}

impl ResourceFilter {
    pub fn is_active(&self) -> bool {
        self.r#type.is_some() || self.status.is_some()
    }

    pub fn matches(&self, resource: &Resource) -> bool {
        self.r#type.map_or(true, |t| resource.r#type == t)
            && self.status.map_or(true, |s| resource.status == s)
    }

    /// Matching resources in their original order.
    pub fn apply<'a>(&self, resources: &'a [Resource]) -> Vec<&'a Resource> {
        resources.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Split a comma-separated conditions field into trimmed, non-empty labels.
///
/// `"clean, sealed"` → `["clean", "sealed"]`, `"a,,b ,"` → `["a", "b"]`.
pub fn parse_conditions(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Stored labels go through the same trim-and-drop-blanks rule as form input.
fn conditions_from_stored<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(value
        .map(|list| {
            list.iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(|list| !list.is_empty()))
}
