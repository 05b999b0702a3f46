use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Deserializer, Serialize};

/// Persisted row of the `tenders` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tenders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub procurement_number: Option<String>,
    pub subject_of_procurement: Option<String>,
    pub procuring_entity: Option<String>,
    pub status: Option<String>,
    pub tender_deadline: Option<DateTimeWithTimeZone>,
    pub budget_amount: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A procurement record as seen by the service and the HTTP API.
///
/// `id` is `None` until the store assigns one. Every other field is free-form;
/// a field missing from incoming JSON deserializes to `None` (or `0.0` for the budget).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub procurement_number: Option<String>,
    #[serde(default)]
    pub subject_of_procurement: Option<String>,
    #[serde(default)]
    pub procuring_entity: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_deadline")]
    pub tender_deadline: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_budget")]
    pub budget_amount: f64,
}

impl From<Model> for Tender {
    fn from(m: Model) -> Self {
        Self {
            id: Some(m.id),
            procurement_number: m.procurement_number,
            subject_of_procurement: m.subject_of_procurement,
            procuring_entity: m.procuring_entity,
            status: m.status,
            tender_deadline: m.tender_deadline.map(|d| d.with_timezone(&Utc)),
            budget_amount: m.budget_amount,
        }
    }
}

impl Tender {
    /// Row for an INSERT; the key is left to the database sequence.
    pub fn into_new_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            ..self.into_columns()
        }
    }

    /// Row for an UPDATE of `id`; every column is written.
    pub fn into_active_model_with_id(self, id: i64) -> ActiveModel {
        ActiveModel {
            id: Set(id),
            ..self.into_columns()
        }
    }

    fn into_columns(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            procurement_number: Set(self.procurement_number),
            subject_of_procurement: Set(self.subject_of_procurement),
            procuring_entity: Set(self.procuring_entity),
            status: Set(self.status),
            tender_deadline: Set(self.tender_deadline.map(Into::into)),
            budget_amount: Set(self.budget_amount),
        }
    }

    /// Replace every mutable field with the value from `details`, keeping `id`.
    /// Fields absent from `details` are overwritten too; there is no partial update.
    pub fn overwrite_from(&mut self, details: Tender) {
        self.procurement_number = details.procurement_number;
        self.subject_of_procurement = details.subject_of_procurement;
        self.procuring_entity = details.procuring_entity;
        self.status = details.status;
        self.tender_deadline = details.tender_deadline;
        self.budget_amount = details.budget_amount;
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDeadline {
    EpochMillis(i64),
    Text(String),
}

/// Accepts RFC 3339 timestamps, bare `YYYY-MM-DD` dates (midnight UTC) and epoch milliseconds.
pub fn parse_deadline(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = d.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }
    Err(format!("invalid tenderDeadline `{s}`: expected RFC 3339 timestamp or YYYY-MM-DD"))
}

fn deserialize_deadline<'de, D>(d: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawDeadline>::deserialize(d)? {
        None => Ok(None),
        Some(RawDeadline::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawDeadline::Text(s)) => parse_deadline(s.trim()).map(Some).map_err(serde::de::Error::custom),
        Some(RawDeadline::EpochMillis(ms)) => DateTime::<Utc>::from_timestamp_millis(ms)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("tenderDeadline out of range: {ms}"))),
    }
}

// A primitive double in the wire format: `null` reads as zero.
fn deserialize_budget<'de, D>(d: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(d)?.unwrap_or(0.0))
}
