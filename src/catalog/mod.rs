use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod repo;

pub use repo::Vegetable;

pub fn router() -> Router<AppState> {
    handlers::catalog_routes()
}
