use primitive_types::{H160, H256};

/// Read-only view of the ledger's storage at the current point of execution.
///
/// Reads observe every write the traced transaction has already applied, but
/// not the write performed by the instruction currently being dispatched; a
/// lookup during an `SSTORE` callback returns the pre-write value.
pub trait StateView {
    /// Returns the value currently stored at `slot` of the contract at
    /// `address`, or the zero word if the slot has never been written.
    fn storage_value(&self, address: H160, slot: H256) -> H256;
}
