use primitive_types::{H160, H256};
use serde::Serialize;
use storage_tracer_interface::Opcode;

use crate::encoding;

/// Kind of storage access an instruction performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    /// `SLOAD`; the recorded value is the value the instruction observes.
    Read,
    /// `SSTORE`; the recorded value is the pre-write value, since the write
    /// has not been applied yet when the tracer runs.
    Write,
}

impl AccessKind {
    /// Classifies an opcode, returning `None` for instructions that do not
    /// touch persistent storage.
    pub fn from_opcode(opcode: Opcode) -> Option<Self> {
        match opcode {
            Opcode::SLOAD => Some(Self::Read),
            Opcode::SSTORE => Some(Self::Write),
            _ => None,
        }
    }

    /// Opcode this access kind corresponds to.
    pub fn opcode(self) -> Opcode {
        match self {
            Self::Read => Opcode::SLOAD,
            Self::Write => Opcode::SSTORE,
        }
    }
}

/// One observed storage access.
///
/// Serializes as `{"op": <opcode byte>, "addr": ..., "slot": ..., "value": ...}`
/// with fixed-width lowercase hex strings (see [`crate::encoding`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessRecord {
    /// Whether the access is a read or a write.
    #[serde(rename = "op", serialize_with = "encoding::serialize_op")]
    pub kind: AccessKind,
    /// Contract whose storage context the access executed in.
    #[serde(rename = "addr", serialize_with = "encoding::serialize_address")]
    pub contract: H160,
    /// 32-byte storage slot that was accessed.
    #[serde(serialize_with = "encoding::serialize_word")]
    pub slot: H256,
    /// Value stored at the slot at the moment of the access.
    #[serde(serialize_with = "encoding::serialize_word")]
    pub value: H256,
}

/// Append-only, chronologically ordered log of storage accesses.
///
/// Owned by exactly one tracer for the lifetime of one traced transaction.
/// Records are never removed or reordered once pushed; insertion order is
/// instruction execution order, including across nested contract calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AccessLog(Vec<AccessRecord>);

impl AccessLog {
    pub(crate) fn push(&mut self, record: AccessRecord) {
        self.0.push(record);
    }

    /// Number of recorded accesses.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no storage instruction has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records in the order the accesses executed.
    pub fn as_slice(&self) -> &[AccessRecord] {
        &self.0
    }

    /// Iterates over records in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &AccessRecord> {
        self.0.iter()
    }

    /// Iterates over `SLOAD` records only, in execution order.
    pub fn reads(&self) -> impl Iterator<Item = &AccessRecord> {
        self.iter().filter(|record| record.kind == AccessKind::Read)
    }

    /// Iterates over `SSTORE` records only, in execution order.
    pub fn writes(&self) -> impl Iterator<Item = &AccessRecord> {
        self.iter()
            .filter(|record| record.kind == AccessKind::Write)
    }
}

impl<'a> IntoIterator for &'a AccessLog {
    type Item = &'a AccessRecord;
    type IntoIter = std::slice::Iter<'a, AccessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
