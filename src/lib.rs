//! Hospital registry: CRUD REST service over a PostgreSQL `hospitals` table.

pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::AppError;
pub use model::{Hospital, HospitalDraft, HospitalPage};
pub use routes::{common_routes, common_routes_with_ready, hospital_routes};
pub use service::HospitalService;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_hospitals_table, HospitalStore, PgHospitalStore};
