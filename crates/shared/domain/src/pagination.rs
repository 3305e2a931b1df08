//! Pagination types for list results.

use serde::Serialize;

use crate::filter::UserFilter;
use crate::user::User;

/// One window of the filtered user set plus the size of the whole set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPage {
    pub users: Vec<User>,
    /// Number of matching users, ignoring limit and offset
    pub total: u64,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub limit: u64,
    pub offset: u64,
    pub has_more: bool,
}

impl PaginationMeta {
    /// Build metadata for a window of `returned` records out of `total`.
    ///
    /// Without an explicit limit the window size is reported as the limit.
    pub fn new(limit: Option<u64>, offset: u64, returned: u64, total: u64) -> Self {
        Self {
            limit: limit.unwrap_or(returned),
            offset,
            has_more: offset.saturating_add(returned) < total,
        }
    }
}

/// List response body
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserListResponse {
    pub records: Vec<User>,
    pub total: u64,
    pub returned_count: u64,
    pub pagination: PaginationMeta,
}

impl UserListResponse {
    /// Wrap a page with the metadata derived from the filter that produced it
    pub fn new(page: UserPage, filter: &UserFilter) -> Self {
        let returned_count = page.users.len() as u64;
        let pagination = PaginationMeta::new(
            filter.effective_limit(),
            filter.effective_offset(),
            returned_count,
            page.total,
        );

        Self {
            records: page.users,
            total: page.total,
            returned_count,
            pagination,
        }
    }
}
