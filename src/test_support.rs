//! In-memory persistence gateway and fixtures for unit tests.

use crate::error::AppError;
use crate::model::{Hospital, HospitalDraft, HospitalFields};
use crate::service::HospitalService;
use crate::state::AppState;
use crate::store::HospitalStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// Gateway backed by a BTreeMap, ids assigned from a sequence starting at 1.
/// `fail_writes` makes every subsequent write report an integrity conflict,
/// the way the Postgres gateway translates constraint violations.
#[derive(Default)]
pub(crate) struct MemoryHospitalStore {
    rows: Mutex<BTreeMap<i64, Hospital>>,
    next_id: AtomicI64,
    conflict: AtomicBool,
}

impl MemoryHospitalStore {
    pub(crate) fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub(crate) fn fail_writes(&self) {
        self.conflict.store(true, Ordering::SeqCst);
    }

    fn check_conflict(&self) -> Result<(), AppError> {
        if self.conflict.load(Ordering::SeqCst) {
            return Err(AppError::BadRequest(
                "Data integrity violation: duplicate key value".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl HospitalStore for MemoryHospitalStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Hospital>, AppError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Hospital>, AppError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn find_page(&self, offset: i64, limit: i64) -> Result<(Vec<Hospital>, u64), AppError> {
        let rows = self.rows.lock().unwrap();
        let items = rows
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok((items, rows.len() as u64))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.rows.lock().unwrap().contains_key(&id))
    }

    async fn insert(&self, fields: &HospitalFields) -> Result<Hospital, AppError> {
        self.check_conflict()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let hospital = Hospital {
            id,
            hospital_name: fields.hospital_name.clone(),
            hospital_address: fields.hospital_address.clone(),
            hospital_city: fields.hospital_city.clone(),
            hospital_state: fields.hospital_state.clone(),
        };
        self.rows.lock().unwrap().insert(id, hospital.clone());
        Ok(hospital)
    }

    async fn update(&self, record: &Hospital) -> Result<Hospital, AppError> {
        self.check_conflict()?;
        self.rows.lock().unwrap().insert(record.id, record.clone());
        Ok(record.clone())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.rows.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Hospital>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|h| h.hospital_name == name)
            .cloned()
            .collect())
    }

    async fn find_by_name_and_address(
        &self,
        name: &str,
        address: &str,
    ) -> Result<Vec<Hospital>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|h| h.hospital_name == name && h.hospital_address == address)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

pub(crate) fn memory_service() -> (HospitalService, Arc<MemoryHospitalStore>) {
    let store = Arc::new(MemoryHospitalStore::default());
    (HospitalService::new(store.clone()), store)
}

pub(crate) fn memory_state() -> (AppState, Arc<MemoryHospitalStore>) {
    let (service, store) = memory_service();
    (AppState { service }, store)
}

pub(crate) fn draft(name: &str, address: &str, city: &str, state: &str) -> HospitalDraft {
    HospitalDraft {
        id: None,
        hospital_name: Some(name.to_string()),
        hospital_address: Some(address.to_string()),
        hospital_city: Some(city.to_string()),
        hospital_state: Some(state.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn derived_lookups_filter_by_name() {
        let store = MemoryHospitalStore::default();
        let fields = |name: &str, address: &str| HospitalFields {
            hospital_name: name.into(),
            hospital_address: address.into(),
            hospital_city: "Springfield".into(),
            hospital_state: "IL".into(),
        };
        store.insert(&fields("General", "1 Main St")).await.unwrap();
        store.insert(&fields("General", "2 Oak Ave")).await.unwrap();
        store.insert(&fields("Mercy", "3 Elm Rd")).await.unwrap();

        assert_eq!(store.find_by_name("General").await.unwrap().len(), 2);
        assert_eq!(
            store
                .find_by_name_and_address("General", "2 Oak Ave")
                .await
                .unwrap()
                .len(),
            1
        );
        assert!(store.find_by_name("Unknown").await.unwrap().is_empty());
    }
}
