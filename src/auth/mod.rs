use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod password;
pub mod service;

pub use dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
pub use service::AuthService;

pub fn router() -> Router<AppState> {
    handlers::auth_routes()
}
