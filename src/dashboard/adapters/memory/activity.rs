//! Bounded in-memory activity feed.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::dashboard::domain::{ActivityKind, ActivityRecord};
use crate::dashboard::ports::{ActivityFeed, ActivityFeedError, ActivityFeedResult};

/// Default number of records the feed retains.
const DEFAULT_CAPACITY: usize = 100;

/// Thread-safe in-memory activity feed with bounded retention.
#[derive(Debug, Clone)]
pub struct InMemoryActivityFeed {
    capacity: usize,
    state: Arc<RwLock<VecDeque<ActivityRecord>>>,
}

impl InMemoryActivityFeed {
    /// Creates a feed retaining the default number of records.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a feed retaining at most `capacity` records.
    ///
    /// A zero capacity retains nothing; records are accepted and dropped.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            state: Arc::new(RwLock::new(VecDeque::new())),
        }
    }

    /// Returns the configured retention capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryActivityFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityFeed for InMemoryActivityFeed {
    async fn record(&self, activity: &ActivityRecord) -> ActivityFeedResult<()> {
        let mut state = self.state.write().map_err(|err| {
            ActivityFeedError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        state.push_back(activity.clone());
        while state.len() > self.capacity {
            state.pop_front();
        }
        Ok(())
    }

    async fn recent(&self, limit: usize) -> ActivityFeedResult<Vec<ActivityRecord>> {
        let state = self.state.read().map_err(|err| {
            ActivityFeedError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.iter().rev().take(limit).cloned().collect())
    }

    async fn recent_of_kind(
        &self,
        kind: ActivityKind,
        limit: usize,
    ) -> ActivityFeedResult<Vec<ActivityRecord>> {
        let state = self.state.read().map_err(|err| {
            ActivityFeedError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .iter()
            .rev()
            .filter(|record| record.kind() == kind)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count_on(&self, date: NaiveDate) -> ActivityFeedResult<usize> {
        let state = self.state.read().map_err(|err| {
            ActivityFeedError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .iter()
            .filter(|record| record.occurred_at().date_naive() == date)
            .count())
    }
}
