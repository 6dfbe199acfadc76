//! Required-field validation for hospital write payloads.

use crate::error::AppError;
use crate::model::{HospitalDraft, HospitalFields};

/// Wire names of the validated fields, as they appear in request bodies.
pub mod fields {
    pub const ID: &str = "id";
    pub const NAME: &str = "hospitalName";
    pub const ADDRESS: &str = "hospitalAddress";
    pub const CITY: &str = "hospitalCity";
    pub const STATE: &str = "hospitalState";
}

/// Check the four required fields in fixed order (name, address, city,
/// state), stopping at the first absent-or-blank one. The stored values are
/// the originals; trimming applies only to the check.
pub fn require_fields(draft: &HospitalDraft) -> Result<HospitalFields, AppError> {
    let hospital_name = require(&draft.hospital_name, fields::NAME, "Hospital name is required")?;
    let hospital_address = require(
        &draft.hospital_address,
        fields::ADDRESS,
        "Hospital address is required",
    )?;
    let hospital_city = require(&draft.hospital_city, fields::CITY, "Hospital city is required")?;
    let hospital_state = require(
        &draft.hospital_state,
        fields::STATE,
        "Hospital state is required",
    )?;
    Ok(HospitalFields {
        hospital_name,
        hospital_address,
        hospital_city,
        hospital_state,
    })
}

fn require(value: &Option<String>, field: &'static str, message: &str) -> Result<String, AppError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(AppError::Validation {
            field,
            message: message.to_string(),
        }),
    }
}
