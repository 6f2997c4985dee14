//! Packet entry aggregate and form input.

use super::ids::{EntryId, KapanNumber, LotNumber, MachineNumber, MainPacketNumber, OperatorName};
use super::quantity::PacketQuantity;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Free-text jiram annotation on a packet entry.
///
/// Jiram notes flag entries for special handling; they have no effect on
/// balance accounting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JiramNote(String);

impl JiramNote {
    /// Creates a jiram note, trimming surrounding whitespace.
    ///
    /// Returns `None` for blank input; an absent note is modelled as
    /// `Option<JiramNote>` on the entry rather than as an empty string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let normalized = value.into().trim().to_owned();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    /// Returns the note text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Raw packet entry form input, prior to validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketEntryDraft {
    sender_name: String,
    operator_name: String,
    machine_number: String,
    kapan_number: String,
    lot_number: String,
    main_packet_number: Option<String>,
    packet_count: i64,
    jiram: Option<String>,
}

impl PacketEntryDraft {
    /// Creates a draft with the required form fields.
    #[must_use]
    pub fn new(
        sender_name: impl Into<String>,
        operator_name: impl Into<String>,
        machine_number: impl Into<String>,
        kapan_number: impl Into<String>,
        lot_number: impl Into<String>,
        packet_count: i64,
    ) -> Self {
        Self {
            sender_name: sender_name.into(),
            operator_name: operator_name.into(),
            machine_number: machine_number.into(),
            kapan_number: kapan_number.into(),
            lot_number: lot_number.into(),
            main_packet_number: None,
            packet_count,
            jiram: None,
        }
    }

    /// Sets the optional main packet number.
    #[must_use]
    pub fn with_main_packet_number(mut self, value: impl Into<String>) -> Self {
        self.main_packet_number = Some(value.into());
        self
    }

    /// Sets the optional jiram annotation.
    #[must_use]
    pub fn with_jiram(mut self, value: impl Into<String>) -> Self {
        self.jiram = Some(value.into());
        self
    }

    /// Returns the raw sender name field.
    #[must_use]
    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    /// Returns the raw operator name field.
    #[must_use]
    pub fn operator_name(&self) -> &str {
        &self.operator_name
    }

    /// Returns the raw machine number field.
    #[must_use]
    pub fn machine_number(&self) -> &str {
        &self.machine_number
    }

    /// Returns the raw kapan number field.
    #[must_use]
    pub fn kapan_number(&self) -> &str {
        &self.kapan_number
    }

    /// Returns the raw lot number field.
    #[must_use]
    pub fn lot_number(&self) -> &str {
        &self.lot_number
    }

    /// Returns the raw main packet number field, if entered.
    #[must_use]
    pub fn main_packet_number(&self) -> Option<&str> {
        self.main_packet_number.as_deref()
    }

    /// Returns the raw packet count field.
    #[must_use]
    pub const fn packet_count(&self) -> i64 {
        self.packet_count
    }

    /// Returns the raw jiram field, if entered.
    #[must_use]
    pub fn jiram(&self) -> Option<&str> {
        self.jiram.as_deref()
    }
}

/// Validated fields of a packet entry, prior to identity and timestamping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketEntryFields {
    /// Who sent the packets to the operator.
    pub sender: OperatorName,
    /// The operator the packets are attributed to.
    pub operator: OperatorName,
    /// The machine the packets were processed on.
    pub machine: MachineNumber,
    /// The source kapan.
    pub kapan: KapanNumber,
    /// The lot the packets belong to.
    pub lot: LotNumber,
    /// Optional grouping main packet number.
    pub main_packet: Option<MainPacketNumber>,
    /// Number of packets recorded.
    pub quantity: PacketQuantity,
    /// Optional jiram annotation.
    pub jiram: Option<JiramNote>,
}

/// Packet entry aggregate root.
///
/// A packet entry attributes a positive number of packets to an operator
/// within a lot; recording one credits the operator's ledger balance for
/// that lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacketEntry {
    id: EntryId,
    sender: OperatorName,
    operator: OperatorName,
    machine: MachineNumber,
    kapan: KapanNumber,
    lot: LotNumber,
    main_packet: Option<MainPacketNumber>,
    quantity: PacketQuantity,
    jiram: Option<JiramNote>,
    recorded_at: DateTime<Utc>,
}

impl PacketEntry {
    /// Creates a new packet entry from validated fields.
    #[must_use]
    pub fn new(fields: PacketEntryFields, clock: &impl Clock) -> Self {
        Self {
            id: EntryId::new(),
            sender: fields.sender,
            operator: fields.operator,
            machine: fields.machine,
            kapan: fields.kapan,
            lot: fields.lot,
            main_packet: fields.main_packet,
            quantity: fields.quantity,
            jiram: fields.jiram,
            recorded_at: clock.utc(),
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> EntryId {
        self.id
    }

    /// Returns the sender name.
    #[must_use]
    pub const fn sender(&self) -> &OperatorName {
        &self.sender
    }

    /// Returns the operator the packets are attributed to.
    #[must_use]
    pub const fn operator(&self) -> &OperatorName {
        &self.operator
    }

    /// Returns the machine number.
    #[must_use]
    pub const fn machine(&self) -> &MachineNumber {
        &self.machine
    }

    /// Returns the kapan number.
    #[must_use]
    pub const fn kapan(&self) -> &KapanNumber {
        &self.kapan
    }

    /// Returns the lot number.
    #[must_use]
    pub const fn lot(&self) -> &LotNumber {
        &self.lot
    }

    /// Returns the main packet number, if any.
    #[must_use]
    pub const fn main_packet(&self) -> Option<&MainPacketNumber> {
        self.main_packet.as_ref()
    }

    /// Returns the recorded packet count.
    #[must_use]
    pub const fn quantity(&self) -> PacketQuantity {
        self.quantity
    }

    /// Returns the jiram annotation, if any.
    #[must_use]
    pub const fn jiram(&self) -> Option<&JiramNote> {
        self.jiram.as_ref()
    }

    /// Returns the recording timestamp.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
