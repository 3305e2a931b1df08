//! Request extractors that reject with `AppError`.

mod json_body;
mod list_query;

pub use json_body::JsonBody;
pub use list_query::ListQuery;
