//! Customer domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clientele_core::{CustomerId, OwnerId};

/// A customer record owned by a single agent.
///
/// The address and health fields mirror the client's intake form. Blank
/// inputs are stored as empty strings rather than NULLs so the client can
/// render every field without null checks.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub city: String,
    pub district: String,
    pub village: String,
    pub neighborhood: String,
    pub street_type: String,
    pub street_name: String,
    pub lane: String,
    pub alley: String,
    pub number: String,
    pub floor: String,
    pub full_address: String,
    pub health_status: String,
    pub medications: String,
    pub supplements: String,
    /// Avatar image as a data URL, or empty when none was uploaded.
    pub avatar: String,
    pub created_at: DateTime<Utc>,
    pub created_by: OwnerId,
}

/// Client-submitted customer fields.
///
/// Every field may be omitted or `null`; whatever the client leaves out is
/// stored as an empty string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub village: Option<String>,
    pub neighborhood: Option<String>,
    pub street_type: Option<String>,
    pub street_name: Option<String>,
    pub lane: Option<String>,
    pub alley: Option<String>,
    pub number: Option<String>,
    pub floor: Option<String>,
    pub full_address: Option<String>,
    pub health_status: Option<String>,
    pub medications: Option<String>,
    pub supplements: Option<String>,
    pub avatar: Option<String>,
}

impl Customer {
    /// Build a full record from a draft, filling unspecified fields with
    /// empty strings and stamping the creation time.
    #[must_use]
    pub fn from_draft(id: CustomerId, owner: OwnerId, draft: CustomerDraft) -> Self {
        Self {
            id,
            name: draft.name.unwrap_or_default(),
            phone: draft.phone.unwrap_or_default(),
            city: draft.city.unwrap_or_default(),
            district: draft.district.unwrap_or_default(),
            village: draft.village.unwrap_or_default(),
            neighborhood: draft.neighborhood.unwrap_or_default(),
            street_type: draft.street_type.unwrap_or_default(),
            street_name: draft.street_name.unwrap_or_default(),
            lane: draft.lane.unwrap_or_default(),
            alley: draft.alley.unwrap_or_default(),
            number: draft.number.unwrap_or_default(),
            floor: draft.floor.unwrap_or_default(),
            full_address: draft.full_address.unwrap_or_default(),
            health_status: draft.health_status.unwrap_or_default(),
            medications: draft.medications.unwrap_or_default(),
            supplements: draft.supplements.unwrap_or_default(),
            avatar: draft.avatar.unwrap_or_default(),
            created_at: Utc::now(),
            created_by: owner,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clientele_core::OwnerId;

    #[test]
    fn from_draft_fills_missing_fields_with_empty_strings() {
        let draft: CustomerDraft =
            serde_json::from_str(r#"{"name": "Mrs. Chen", "phone": null}"#).unwrap();
        let customer = Customer::from_draft(
            CustomerId::generate(),
            OwnerId::new("agent-1"),
            draft,
        );

        assert_eq!(customer.name, "Mrs. Chen");
        assert_eq!(customer.phone, "");
        assert_eq!(customer.full_address, "");
        assert_eq!(customer.created_by, OwnerId::new("agent-1"));
    }

    #[test]
    fn empty_draft_yields_all_empty_fields() {
        let draft: CustomerDraft = serde_json::from_str("{}").unwrap();
        let customer =
            Customer::from_draft(CustomerId::generate(), OwnerId::new("agent-1"), draft);

        assert_eq!(customer.name, "");
        assert_eq!(customer.health_status, "");
        assert_eq!(customer.avatar, "");
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let draft: CustomerDraft = serde_json::from_str(
            r#"{"name": "Mr. Lin", "streetName": "Zhongshan Rd", "healthStatus": "stable"}"#,
        )
        .unwrap();
        let customer =
            Customer::from_draft(CustomerId::generate(), OwnerId::new("agent-1"), draft);

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["streetName"], "Zhongshan Rd");
        assert_eq!(json["healthStatus"], "stable");
        assert_eq!(json["createdBy"], "agent-1");
        assert!(json.get("street_name").is_none());
    }
}
