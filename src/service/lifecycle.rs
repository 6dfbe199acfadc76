//! Lifecycle rules for hospital records: argument checks, existence checks,
//! and delegation to the persistence gateway. This layer never logs and
//! never retries; every failure returns to the caller.

use crate::error::AppError;
use crate::model::{Hospital, HospitalDraft, HospitalPage};
use crate::service::validation::{self, fields};
use crate::store::HospitalStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct HospitalService {
    store: Arc<dyn HospitalStore>,
}

impl HospitalService {
    pub fn new(store: Arc<dyn HospitalStore>) -> Self {
        Self { store }
    }

    /// Look up one record. A missing id is an argument error; an absent
    /// record is `Ok(None)` so callers can tell the two apart.
    pub async fn get_by_id(&self, id: Option<i64>) -> Result<Option<Hospital>, AppError> {
        let id = id.ok_or_else(|| AppError::BadRequest("id is required".into()))?;
        self.store.find_by_id(id).await
    }

    pub async fn get_all(&self) -> Result<Vec<Hospital>, AppError> {
        self.store.find_all().await
    }

    /// Fetch one 0-based page. `page_size` must be positive and `page`
    /// non-negative.
    pub async fn get_page(&self, page: i64, page_size: i64) -> Result<HospitalPage, AppError> {
        if page_size <= 0 {
            return Err(AppError::BadRequest(
                "page size must be greater than zero".into(),
            ));
        }
        if page < 0 {
            return Err(AppError::BadRequest(
                "page number must not be negative".into(),
            ));
        }
        let offset = page
            .checked_mul(page_size)
            .ok_or_else(|| AppError::BadRequest("page number out of range".into()))?;
        let (items, total_items) = self.store.find_page(offset, page_size).await?;
        let total_pages = total_items.div_ceil(page_size as u64);
        Ok(HospitalPage {
            items,
            page,
            page_size,
            total_items,
            total_pages,
        })
    }

    /// All records matching both name and address; zero matches is success.
    pub async fn get_by_name_and_address(
        &self,
        name: Option<&str>,
        address: Option<&str>,
    ) -> Result<Vec<Hospital>, AppError> {
        let (name, address) = match (name, address) {
            (Some(n), Some(a)) => (n, a),
            _ => {
                return Err(AppError::BadRequest(
                    "hospitalName and hospitalAddress are required".into(),
                ))
            }
        };
        self.store.find_by_name_and_address(name, address).await
    }

    /// Validate and insert. The gateway assigns the id; any id on the draft
    /// is ignored.
    pub async fn insert(&self, draft: &HospitalDraft) -> Result<Hospital, AppError> {
        let fields = validation::require_fields(draft)?;
        self.store.insert(&fields).await
    }

    /// Overwrite an existing record. Check order is fixed: id present,
    /// record exists, then required fields.
    pub async fn update(&self, draft: &HospitalDraft) -> Result<Hospital, AppError> {
        let id = draft.id.ok_or_else(|| AppError::Validation {
            field: fields::ID,
            message: "Hospital ID is required for update".into(),
        })?;
        if !self.store.exists_by_id(id).await? {
            return Err(AppError::BadRequest(format!(
                "Hospital with ID {} not found",
                id
            )));
        }
        let fields = validation::require_fields(draft)?;
        self.store
            .update(&Hospital {
                id,
                hospital_name: fields.hospital_name,
                hospital_address: fields.hospital_address,
                hospital_city: fields.hospital_city,
                hospital_state: fields.hospital_state,
            })
            .await
    }

    /// Remove a record permanently. Requires the id to be present and the
    /// record to exist.
    pub async fn delete(&self, id: Option<i64>) -> Result<(), AppError> {
        let id = id.ok_or_else(|| AppError::BadRequest("id is required".into()))?;
        if !self.store.exists_by_id(id).await? {
            return Err(AppError::BadRequest(format!(
                "Hospital with ID {} not found",
                id
            )));
        }
        self.store.delete_by_id(id).await
    }

    /// Gateway readiness probe for `/ready`.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }
}
