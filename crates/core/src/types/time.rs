//! Serde adapters for HTML form date and time values.
//!
//! The browser client submits values exactly as HTML form controls produce
//! them: `<input type="date">` yields `YYYY-MM-DD`, `<input type="time">`
//! yields `HH:MM`, and a blank control submits an empty string rather than
//! omitting the field. The adapters here accept those shapes, treat `""`,
//! `null`, and a missing field all as absent, and serialize times back
//! without a seconds component.
//!
//! Pair each adapter with `#[serde(default, with = "...")]` so a missing
//! field deserializes to `None` instead of erroring.

/// `Option<NaiveDate>` as `YYYY-MM-DD`; `""` and `null` mean absent.
pub mod opt_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// `Option<NaiveTime>` as `HH:MM`; `""` and `null` mean absent.
///
/// Accepts `HH:MM:SS` on input as well, but always serializes as `HH:MM`.
pub mod opt_hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";
    const FORMAT_WITH_SECONDS: &str = "%H:%M:%S";

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&time.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => NaiveTime::parse_from_str(text, FORMAT_WITH_SECONDS)
                .or_else(|_| NaiveTime::parse_from_str(text, FORMAT))
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
