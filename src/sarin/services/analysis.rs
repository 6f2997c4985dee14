//! Service layer for per-lot entry analysis.

use crate::dashboard::domain::{ActivityKind, ActivityRecord};
use crate::dashboard::ports::{ActivityFeed, ActivityFeedError};
use crate::sarin::domain::{LotNumber, MainPacketNumber, OperatorName, PacketEntry};
use crate::sarin::ports::{PacketEntryRepository, PacketEntryRepositoryError};
use mockable::Clock;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Aggregated view of every entry recorded against one lot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotAnalysisReport {
    lot: LotNumber,
    total_entries: usize,
    total_packets: u64,
    operators: Vec<OperatorName>,
    main_packets: Vec<MainPacketNumber>,
    jiram_entries: usize,
    entries: Vec<PacketEntry>,
}

impl LotAnalysisReport {
    /// Returns the analysed lot.
    #[must_use]
    pub const fn lot(&self) -> &LotNumber {
        &self.lot
    }

    /// Returns the number of entries recorded against the lot.
    #[must_use]
    pub const fn total_entries(&self) -> usize {
        self.total_entries
    }

    /// Returns the packets recorded across all entries.
    #[must_use]
    pub const fn total_packets(&self) -> u64 {
        self.total_packets
    }

    /// Returns the distinct operators with entries in the lot, sorted.
    #[must_use]
    pub fn operators(&self) -> &[OperatorName] {
        &self.operators
    }

    /// Returns the distinct main packet numbers in the lot, sorted.
    #[must_use]
    pub fn main_packets(&self) -> &[MainPacketNumber] {
        &self.main_packets
    }

    /// Returns how many entries carry a jiram annotation.
    #[must_use]
    pub const fn jiram_entries(&self) -> usize {
        self.jiram_entries
    }

    /// Returns the underlying entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[PacketEntry] {
        &self.entries
    }
}

/// Service-level errors for lot analysis.
#[derive(Debug, Error)]
pub enum LotAnalysisError {
    /// No entries exist for the requested lot.
    #[error("no entries found for lot {0}")]
    NoEntriesFound(LotNumber),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] PacketEntryRepositoryError),
    /// The activity feed failed.
    #[error(transparent)]
    Activity(#[from] ActivityFeedError),
}

/// Result type for lot analysis operations.
pub type LotAnalysisResult<T> = Result<T, LotAnalysisError>;

/// Lot analysis orchestration service.
#[derive(Clone)]
pub struct LotAnalysisService<R, F, C>
where
    R: PacketEntryRepository,
    F: ActivityFeed,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    activity: Arc<F>,
    clock: Arc<C>,
}

impl<R, F, C> LotAnalysisService<R, F, C>
where
    R: PacketEntryRepository,
    F: ActivityFeed,
    C: Clock + Send + Sync,
{
    /// Creates a new lot analysis service.
    #[must_use]
    pub const fn new(repository: Arc<R>, activity: Arc<F>, clock: Arc<C>) -> Self {
        Self {
            repository,
            activity,
            clock,
        }
    }

    /// Builds the analysis report for one lot on behalf of `requested_by`.
    ///
    /// # Errors
    ///
    /// Returns [`LotAnalysisError::NoEntriesFound`] when the lot has no
    /// entries, or another [`LotAnalysisError`] variant when a
    /// collaborator fails.
    pub async fn analyze(
        &self,
        lot: &LotNumber,
        requested_by: &OperatorName,
    ) -> LotAnalysisResult<LotAnalysisReport> {
        let entries = self.repository.find_by_lot(lot).await?;
        if entries.is_empty() {
            return Err(LotAnalysisError::NoEntriesFound(lot.clone()));
        }

        let total_packets = entries
            .iter()
            .map(|entry| entry.quantity().value())
            .sum();
        let operators: BTreeSet<_> = entries
            .iter()
            .map(|entry| entry.operator().clone())
            .collect();
        let main_packets: BTreeSet<_> = entries
            .iter()
            .filter_map(|entry| entry.main_packet().cloned())
            .collect();
        let jiram_entries = entries
            .iter()
            .filter(|entry| entry.jiram().is_some())
            .count();

        let report = LotAnalysisReport {
            lot: lot.clone(),
            total_entries: entries.len(),
            total_packets,
            operators: operators.into_iter().collect(),
            main_packets: main_packets.into_iter().collect(),
            jiram_entries,
            entries,
        };

        let description = format!("Completed analysis for lot {}", report.lot());
        let record = ActivityRecord::new(
            ActivityKind::Analysis,
            requested_by.as_str(),
            description,
            &*self.clock,
        );
        self.activity.record(&record).await?;

        Ok(report)
    }
}
