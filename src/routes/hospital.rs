//! Hospital CRUD routes, mounted at the application root.

use crate::handlers::hospital::{
    delete_by_id, find_all, find_page, get_by_id, get_by_name_and_address, insert, update,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn hospital_routes(state: AppState) -> Router {
    Router::new()
        .route("/getbyid", get(get_by_id))
        .route("/getbyNameAndAddress", get(get_by_name_and_address))
        .route("/findall", get(find_all))
        .route("/findall/:page/:size", get(find_page))
        .route("/insert", post(insert))
        .route("/update", put(update))
        .route("/deletebyid", delete(delete_by_id))
        .with_state(state)
}
