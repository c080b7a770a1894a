//! Schedule domain types.

use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use clientele_core::types::time::{opt_date, opt_hhmm};
use clientele_core::{CustomerId, OwnerId, ScheduleId};

/// Fallback entry kind when the client does not pick one.
pub const DEFAULT_KIND: &str = "other";

/// A calendar entry owned by a single agent.
///
/// `kind` is a free-form category string (the client offers visit, call,
/// delivery, followup and other); unknown values are stored as-is.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: ScheduleId,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "opt_hhmm")]
    pub start_time: Option<NaiveTime>,
    #[serde(with = "opt_hhmm")]
    pub end_time: Option<NaiveTime>,
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional link to one of the owner's customers, kept verbatim as
    /// submitted.
    pub customer_id: Option<CustomerId>,
    /// Customer name resolved at read time. `None` when no customer is
    /// linked, `Some("")` when the link does not resolve.
    pub customer_name: Option<String>,
    pub notes: String,
    pub created_by: OwnerId,
}

/// Client-submitted schedule fields.
///
/// Every field may be omitted. Times arrive as `HH:MM` strings and may be
/// blank; a blank `date` means "today".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDraft {
    pub title: Option<String>,
    #[serde(default, with = "opt_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, with = "opt_hhmm")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "opt_hhmm")]
    pub end_time: Option<NaiveTime>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub customer_id: Option<String>,
    pub notes: Option<String>,
}

impl Schedule {
    /// Build a full record from a draft.
    ///
    /// Defaults: `date` today, `kind` [`DEFAULT_KIND`], `title`/`notes`
    /// empty. A blank `kind` counts as unset.
    #[must_use]
    pub fn from_draft(id: ScheduleId, owner: OwnerId, draft: ScheduleDraft) -> Self {
        Self {
            id,
            title: draft.title.unwrap_or_default(),
            date: draft.date.unwrap_or_else(|| Utc::now().date_naive()),
            start_time: draft.start_time,
            end_time: draft.end_time,
            kind: draft
                .kind
                .filter(|kind| !kind.is_empty())
                .unwrap_or_else(|| DEFAULT_KIND.to_owned()),
            customer_id: draft.customer_id.map(CustomerId::new),
            customer_name: None,
            notes: draft.notes.unwrap_or_default(),
            created_by: owner,
        }
    }
}
