//! # Form drafts
//!
//! [`ResourceDraft`] holds everything the creation form edits: every
//! [`Resource`] field except the identifier and the timestamp. The conditions
//! field is kept as the raw text the user typed and only tokenized (via
//! [`parse_conditions`]) when the draft is turned into a resource, so partial
//! input while typing never produces half-split labels.
//!
//! `location` and `organization_id` have no form controls and keep their
//! defaults; whoever owns them can set them on the draft before submission.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::DraftError;
use crate::ids::{IdGenerator, UuidIds};
use crate::models::{parse_conditions, Location, Resource, ResourceStatus, ResourceType};

/// In-progress resource as edited by the creation form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceDraft {
    pub name: String,
    pub r#type: ResourceType,
    pub quantity: f64,
    pub unit: String,
    pub status: ResourceStatus,
    pub location: Location,
    pub organization_id: String,
    /// `YYYY-MM-DD` from a date input, empty when unset.
    pub expiry_date: String,
    /// Raw comma-separated conditions text.
    pub conditions: String,
}

impl ResourceDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the fields the form marks as required.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        if !self.quantity.is_finite() {
            return Err(DraftError::InvalidQuantity);
        }
        if self.unit.trim().is_empty() {
            return Err(DraftError::MissingUnit);
        }
        Ok(())
    }

    /// Build a resource with a fresh id and the given creation time.
    pub fn into_resource(
        self,
        ids: &impl IdGenerator,
        now: DateTime<Utc>,
    ) -> Result<Resource, DraftError> {
        self.validate()?;

        let conditions = parse_conditions(&self.conditions);
        let expiry_date = self.expiry_date.trim();

        Ok(Resource {
            id: ids.next_id(),
            name: self.name,
            r#type: self.r#type,
            quantity: self.quantity,
            unit: self.unit,
            status: self.status,
            location: self.location,
            organization_id: self.organization_id,
            expiry_date: (!expiry_date.is_empty()).then(|| expiry_date.to_string()),
            conditions: (!conditions.is_empty()).then_some(conditions),
            last_updated: timestamp(now),
        })
    }

    /// [`into_resource`](Self::into_resource) with a UUID and the current time.
    pub fn submit(self) -> Result<Resource, DraftError> {
        self.into_resource(&UuidIds, Utc::now())
    }
}

/// Parse a number input the way a browser coerces it: blank is zero,
/// anything unparsable is NaN and fails validation.
pub fn parse_quantity(input: &str) -> f64 {
    let input = input.trim();
    if input.is_empty() {
        return 0.0;
    }
    input.parse().unwrap_or(f64::NAN)
}

/// `2024-05-01T12:00:00.000Z`
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_defaults() {
        let draft = ResourceDraft::new();
        assert_eq!(draft.r#type, ResourceType::Food);
        assert_eq!(draft.status, ResourceStatus::Available);
        assert_eq!(draft.quantity, 0.0);
        assert_eq!(draft.location, Location { lat: 0.0, lng: 0.0 });
        assert!(draft.organization_id.is_empty());
        assert!(draft.conditions.is_empty());
    }

    #[test]
    fn test_water_bottles_example() {
        let draft = ResourceDraft {
            name: "Water Bottles".to_string(),
            r#type: ResourceType::Food,
            quantity: 500.0,
            unit: "bottles".to_string(),
            status: ResourceStatus::Available,
            conditions: "clean, sealed".to_string(),
            ..ResourceDraft::default()
        };

        let ids = SequentialIds::new();
        let resource = draft.into_resource(&ids, fixed_now()).unwrap();

        assert_eq!(resource.id, "1");
        assert_eq!(resource.name, "Water Bottles");
        assert_eq!(
            resource.conditions,
            Some(vec!["clean".to_string(), "sealed".to_string()])
        );
        assert_eq!(resource.status.label(), "Available");
        assert_eq!(resource.expiry_date, None);
        assert_eq!(resource.organization_id, "");
        assert_eq!(resource.last_updated, "2024-05-01T12:00:00.000Z");
    }

    #[test]
    fn test_blank_optionals_are_absent() {
        let draft = ResourceDraft {
            name: "Generators".to_string(),
            r#type: ResourceType::Equipment,
            quantity: 3.0,
            unit: "units".to_string(),
            expiry_date: "  ".to_string(),
            conditions: " , ".to_string(),
            ..ResourceDraft::default()
        };

        let resource = draft.into_resource(&SequentialIds::new(), fixed_now()).unwrap();
        assert_eq!(resource.expiry_date, None);
        assert_eq!(resource.conditions, None);
    }

    #[test]
    fn test_expiry_date_kept() {
        let draft = ResourceDraft {
            name: "Insulin".to_string(),
            r#type: ResourceType::Medicine,
            quantity: 40.0,
            unit: "vials".to_string(),
            expiry_date: "2025-03-01".to_string(),
            ..ResourceDraft::default()
        };

        let resource = draft.into_resource(&SequentialIds::new(), fixed_now()).unwrap();
        assert_eq!(resource.expiry_date.as_deref(), Some("2025-03-01"));
    }

    #[test]
    fn test_required_fields() {
        let ok = ResourceDraft {
            name: "Rice".to_string(),
            unit: "kg".to_string(),
            ..ResourceDraft::default()
        };
        assert_eq!(ok.validate(), Ok(()));

        let no_name = ResourceDraft {
            name: "   ".to_string(),
            ..ok.clone()
        };
        assert_eq!(no_name.validate(), Err(DraftError::MissingName));

        let no_unit = ResourceDraft {
            unit: String::new(),
            ..ok.clone()
        };
        assert_eq!(no_unit.validate(), Err(DraftError::MissingUnit));

        let bad_quantity = ResourceDraft {
            quantity: parse_quantity("lots"),
            ..ok
        };
        assert_eq!(bad_quantity.validate(), Err(DraftError::InvalidQuantity));
    }

    #[test]
    fn test_invalid_draft_consumes_no_id() {
        let ids = SequentialIds::new();
        assert!(ResourceDraft::new().into_resource(&ids, fixed_now()).is_err());
        assert_eq!(ids.next_id(), "1");
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(""), 0.0);
        assert_eq!(parse_quantity("500"), 500.0);
        assert_eq!(parse_quantity(" 2.5 "), 2.5);
        assert!(parse_quantity("abc").is_nan());
    }

    #[test]
    fn test_submit_generates_uuid() {
        let draft = ResourceDraft {
            name: "Blankets".to_string(),
            unit: "pieces".to_string(),
            ..ResourceDraft::default()
        };
        let resource = draft.submit().unwrap();
        assert!(uuid::Uuid::parse_str(&resource.id).is_ok());
        assert!(resource.last_updated.ends_with('Z'));
    }
}
