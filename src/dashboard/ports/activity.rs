//! Activity feed port.

use crate::dashboard::domain::{ActivityKind, ActivityRecord};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for activity feed operations.
pub type ActivityFeedResult<T> = Result<T, ActivityFeedError>;

/// Bounded feed of recent production activity.
///
/// Both workflows append here; the feed keeps only a recent window, so it
/// is a display aid rather than an audit log.
#[async_trait]
pub trait ActivityFeed: Send + Sync {
    /// Appends an activity record.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityFeedError::Unavailable`] when the backing store
    /// cannot be written.
    async fn record(&self, activity: &ActivityRecord) -> ActivityFeedResult<()>;

    /// Returns up to `limit` of the most recent records, newest first.
    async fn recent(&self, limit: usize) -> ActivityFeedResult<Vec<ActivityRecord>>;

    /// Returns up to `limit` of the most recent records of one kind,
    /// newest first.
    async fn recent_of_kind(
        &self,
        kind: ActivityKind,
        limit: usize,
    ) -> ActivityFeedResult<Vec<ActivityRecord>>;

    /// Returns how many retained records were stamped with the given date.
    async fn count_on(&self, date: NaiveDate) -> ActivityFeedResult<usize>;
}

/// Errors returned by activity feed implementations.
#[derive(Debug, Clone, Error)]
pub enum ActivityFeedError {
    /// The backing store failed.
    #[error("activity feed unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl ActivityFeedError {
    /// Wraps a backing-store failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
