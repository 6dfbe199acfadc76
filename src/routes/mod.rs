//! Routers: hospital CRUD routes plus common service routes.

mod common;
mod hospital;

pub use common::{common_routes, common_routes_with_ready};
pub use hospital::hospital_routes;
