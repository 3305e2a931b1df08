//! API layer - HTTP transport for the user service.
//!
//! Handlers stay thin: they extract input, call the `UserService`, and map
//! absence to `AppError::NotFound`. Status codes are decided here and in
//! `AppError`'s `IntoResponse`, nowhere else.

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
