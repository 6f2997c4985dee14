//! Port contracts for the Sarin context.

pub mod journal;
pub mod ledger;
pub mod repository;

pub use journal::{TransferJournal, TransferJournalError, TransferJournalResult};
pub use ledger::{CommittedTransfer, LedgerError, LedgerResult, PacketLedger};
pub use repository::{
    PacketEntryRepository, PacketEntryRepositoryError, PacketEntryRepositoryResult,
};
