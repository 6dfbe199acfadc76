//! Hospital record types exchanged between the HTTP surface, service, and store.

use serde::{Deserialize, Serialize};

/// One persisted hospital. A stored record always has an id and four
/// non-blank fields; construction goes through the service, never directly
/// from request input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub id: i64,
    pub hospital_name: String,
    pub hospital_address: String,
    pub hospital_city: String,
    pub hospital_state: String,
}

/// Incoming payload before validation. Every field may be absent; the
/// service decides which absences are errors per operation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalDraft {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub hospital_name: Option<String>,
    #[serde(default)]
    pub hospital_address: Option<String>,
    #[serde(default)]
    pub hospital_city: Option<String>,
    #[serde(default)]
    pub hospital_state: Option<String>,
}

/// The four required fields after validation; the only write payload the
/// store accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HospitalFields {
    pub hospital_name: String,
    pub hospital_address: String,
    pub hospital_city: String,
    pub hospital_state: String,
}

/// One page of records with pagination totals. Page numbers are 0-based.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalPage {
    pub items: Vec<Hospital>,
    pub page: i64,
    pub page_size: i64,
    pub total_items: u64,
    pub total_pages: u64,
}
