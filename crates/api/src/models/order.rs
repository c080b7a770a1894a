//! Order domain types.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use clientele_core::types::time::opt_date;
use clientele_core::{CustomerId, OrderId, OwnerId};

/// A sales order owned by a single agent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub date: NaiveDate,
    /// Optional link to one of the owner's customers. The value is kept
    /// verbatim as submitted, so it may name a customer that has since been
    /// deleted, or even be an empty string.
    pub customer_id: Option<CustomerId>,
    /// Customer name resolved at read time. `None` when no customer is
    /// linked, `Some("")` when the link does not resolve.
    pub customer_name: Option<String>,
    pub product: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub paid: bool,
    pub notes: String,
    pub created_by: OwnerId,
}

/// Client-submitted order fields.
///
/// Every field may be omitted. A blank `date` means "today"; the remaining
/// fields fall back to the defaults documented on [`Order::from_draft`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    #[serde(default, with = "opt_date")]
    pub date: Option<NaiveDate>,
    pub customer_id: Option<String>,
    pub product: Option<String>,
    pub quantity: Option<i32>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,
    pub paid: Option<bool>,
    pub notes: Option<String>,
}

impl Order {
    /// Build a full record from a draft.
    ///
    /// Defaults: `date` today, `quantity` 1, `amount` 0, `paid` false,
    /// `product`/`notes` empty. The customer name is left unresolved.
    #[must_use]
    pub fn from_draft(id: OrderId, owner: OwnerId, draft: OrderDraft) -> Self {
        Self {
            id,
            date: draft.date.unwrap_or_else(|| Utc::now().date_naive()),
            customer_id: draft.customer_id.map(CustomerId::new),
            customer_name: None,
            product: draft.product.unwrap_or_default(),
            quantity: draft.quantity.unwrap_or(1),
            amount: draft.amount.unwrap_or(Decimal::ZERO),
            paid: draft.paid.unwrap_or(false),
            notes: draft.notes.unwrap_or_default(),
            created_by: owner,
        }
    }
}

// Manual FromRow: `amount` is stored as text and parsed back into a
// `Decimal`, and `customer_name` only exists in queries that join against
// the customers table.
impl FromRow<'_, SqliteRow> for Order {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let amount_text: String = row.try_get("amount")?;
        let amount = amount_text
            .parse::<Decimal>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "amount".into(),
                source: Box::new(e),
            })?;

        let customer_name = match row.try_get::<Option<String>, _>("customer_name") {
            Ok(name) => name,
            Err(sqlx::Error::ColumnNotFound(_)) => None,
            Err(e) => return Err(e),
        };

        Ok(Self {
            id: row.try_get("id")?,
            date: row.try_get("date")?,
            customer_id: row.try_get("customer_id")?,
            customer_name,
            product: row.try_get("product")?,
            quantity: row.try_get("quantity")?,
            amount,
            paid: row.try_get("paid")?,
            notes: row.try_get("notes")?,
            created_by: row.try_get("created_by")?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn draft(json: &str) -> OrderDraft {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn from_draft_applies_defaults() {
        let order = Order::from_draft(OrderId::generate(), OwnerId::new("agent-1"), draft("{}"));

        assert_eq!(order.date, Utc::now().date_naive());
        assert_eq!(order.customer_id, None);
        assert_eq!(order.product, "");
        assert_eq!(order.quantity, 1);
        assert_eq!(order.amount, Decimal::ZERO);
        assert!(!order.paid);
        assert_eq!(order.notes, "");
    }

    #[test]
    fn blank_date_means_today() {
        let order = Order::from_draft(
            OrderId::generate(),
            OwnerId::new("agent-1"),
            draft(r#"{"product": "Fish oil", "date": ""}"#),
        );
        assert_eq!(order.date, Utc::now().date_naive());
    }

    #[test]
    fn amount_accepts_json_numbers_and_serializes_back_as_one() {
        let order = Order::from_draft(
            OrderId::generate(),
            OwnerId::new("agent-1"),
            draft(r#"{"product": "Fish oil", "amount": 1500.5, "quantity": 2}"#),
        );
        assert_eq!(order.amount.to_string(), "1500.5");

        let json = serde_json::to_value(&order).unwrap();
        assert!(json["amount"].is_number());
        assert!((json["amount"].as_f64().unwrap() - 1500.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_customer_reference_is_kept_verbatim() {
        let order = Order::from_draft(
            OrderId::generate(),
            OwnerId::new("agent-1"),
            draft(r#"{"product": "Fish oil", "customerId": ""}"#),
        );
        assert_eq!(order.customer_id, Some(CustomerId::new("")));

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["customerId"], "");
        assert_eq!(json["customerName"], serde_json::Value::Null);
    }

    #[test]
    fn date_serializes_as_plain_iso_date() {
        let mut order = Order::from_draft(
            OrderId::generate(),
            OwnerId::new("agent-1"),
            draft(r#"{"product": "Fish oil", "date": "2024-03-15"}"#),
        );
        order.customer_name = Some("Mrs. Chen".to_owned());

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["date"], "2024-03-15");
        assert_eq!(json["customerName"], "Mrs. Chen");
    }
}
