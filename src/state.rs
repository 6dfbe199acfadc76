//! Shared application state for all routes.

use crate::service::HospitalService;

#[derive(Clone)]
pub struct AppState {
    pub service: HospitalService,
}
