//! Fixed-width normalization and hex rendering for trace serialization.
//!
//! Addresses render as 40 hex digits and storage words as 64, always
//! lowercase and `0x`-prefixed, so downstream consumers can compare fields
//! textually without re-parsing them.

use primitive_types::{H160, H256, U256};
use serde::Serializer;

use crate::log::AccessKind;

/// Normalizes a VM stack operand to a fixed 32-byte storage word.
///
/// `U256` carries no width information, so the value is rendered big-endian
/// and left-zero-padded: operands `0x1` and `0x0000..0001` produce the same
/// word.
pub fn word_from_u256(value: U256) -> H256 {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    H256(bytes)
}

/// Lowercase `0x`-prefixed rendering of a byte sequence. Empty input renders
/// as `"0x"`.
pub fn hex_bytes(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

pub(crate) fn serialize_op<S: Serializer>(
    kind: &AccessKind,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(kind.opcode().as_u8())
}

pub(crate) fn serialize_address<S: Serializer>(
    address: &H160,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex_bytes(address.as_bytes()))
}

pub(crate) fn serialize_word<S: Serializer>(
    word: &H256,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex_bytes(word.as_bytes()))
}

pub(crate) fn serialize_output<S: Serializer>(
    output: &[u8],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex_bytes(output))
}
