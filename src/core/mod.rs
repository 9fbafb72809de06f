//! Core business logic - framework-agnostic operations over the record store.
//!
//! Every function in this layer takes an explicit database connection and an
//! explicit authenticated user id; nothing reads ambient session state or the
//! clock. "Today" is always computed by the caller and passed in.

/// Check-in creation, same-day upsert, and history queries
pub mod checkin;

/// One-entry-per-day journal operations
pub mod journal;

/// Streak calculation over check-in history
pub mod streak;

/// Todo CRUD, goal import, task breakdown, and display ordering
pub mod todo;

use serde::Serialize;

/// One page of a sorted listing, together with the pagination metadata the
/// API returns alongside the items.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items on this page, already sorted
    pub items: Vec<T>,
    /// Pagination metadata
    pub pagination: PageMeta,
}

/// Metadata describing where a [`Page`] sits in the full result set.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total number of items across all pages
    pub total: u64,
    /// Current page number, 1-based
    pub page: u64,
    /// Items per page
    pub limit: u64,
    /// Total number of pages
    pub total_pages: u64,
}
