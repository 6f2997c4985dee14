//! Unit tests for the bounded activity feed.

use std::sync::Arc;

use crate::dashboard::adapters::memory::InMemoryActivityFeed;
use crate::dashboard::domain::{ActivityKind, ActivityRecord};
use crate::dashboard::ports::ActivityFeed;
use mockable::{Clock, DefaultClock};
use rstest::rstest;

fn record(kind: ActivityKind, operator: &str, description: &str) -> ActivityRecord {
    ActivityRecord::new(kind, operator, description, &DefaultClock)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn recent_returns_newest_first() {
    let feed = Arc::new(InMemoryActivityFeed::new());
    feed.record(&record(ActivityKind::PacketEntry, "John Doe", "first"))
        .await
        .expect("record");
    feed.record(&record(ActivityKind::LaserLot, "Jane Smith", "second"))
        .await
        .expect("record");

    let recent = feed.recent(10).await.expect("read");
    assert_eq!(
        recent.iter().map(ActivityRecord::description).collect::<Vec<_>>(),
        vec!["second", "first"]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn retention_drops_the_oldest_records() {
    let feed = Arc::new(InMemoryActivityFeed::with_capacity(2));
    for description in ["one", "two", "three"] {
        feed.record(&record(ActivityKind::PacketEntry, "John Doe", description))
            .await
            .expect("record");
    }

    let recent = feed.recent(10).await.expect("read");
    assert_eq!(
        recent.iter().map(ActivityRecord::description).collect::<Vec<_>>(),
        vec!["three", "two"]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filtering_by_kind_skips_other_workflows() {
    let feed = Arc::new(InMemoryActivityFeed::new());
    feed.record(&record(ActivityKind::PacketEntry, "John Doe", "entry"))
        .await
        .expect("record");
    feed.record(&record(ActivityKind::Reassignment, "John Doe", "transfer"))
        .await
        .expect("record");

    let reassignments = feed
        .recent_of_kind(ActivityKind::Reassignment, 10)
        .await
        .expect("read");
    assert_eq!(reassignments.len(), 1);
    assert_eq!(
        reassignments.first().map(ActivityRecord::description),
        Some("transfer")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn todays_records_are_counted() {
    let clock = DefaultClock;
    let feed = Arc::new(InMemoryActivityFeed::new());
    feed.record(&record(ActivityKind::Analysis, "Sarah Johnson", "analysis"))
        .await
        .expect("record");

    let today = clock.utc().date_naive();
    assert_eq!(feed.count_on(today).await.expect("count"), 1);
    let yesterday = today.pred_opt().expect("date arithmetic");
    assert_eq!(feed.count_on(yesterday).await.expect("count"), 0);
}
