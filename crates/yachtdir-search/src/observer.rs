//! Injection point for search diagnostics.
//!
//! The filtering code never logs on its own; callers choose an observer.

use yachtdir_core::{CoordinateError, Vendor};

use crate::error::SearchError;

/// Summary emitted after a distance filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub total: usize,
    pub with_coordinates: usize,
    pub matched: usize,
}

pub trait SearchObserver {
    /// A vendor was skipped because one of its locations could not be measured.
    fn distance_failed(&self, _vendor: &Vendor, _error: &CoordinateError) {}

    /// A search was aborted and returned an error result.
    fn search_failed(&self, _error: &SearchError) {}

    fn filter_completed(&self, _stats: FilterStats) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn distance_failed(&self, vendor: &Vendor, error: &CoordinateError) {
        tracing::warn!(
            vendor_id = %vendor.id,
            vendor_name = %vendor.name,
            error = %error,
            "distance calculation failed; vendor excluded"
        );
    }

    fn search_failed(&self, error: &SearchError) {
        tracing::warn!(error = %error, "vendor search failed");
    }

    fn filter_completed(&self, stats: FilterStats) {
        tracing::debug!(
            total = stats.total,
            with_coordinates = stats.with_coordinates,
            matched = stats.matched,
            "distance filter completed"
        );
    }
}
