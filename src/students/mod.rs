use crate::state::AppState;
use axum::Router;

mod dto;
mod errors;
mod extractors;
pub mod handlers;
pub mod repo;
pub mod repo_types;

pub fn router() -> Router<AppState> {
    handlers::student_routes()
}
