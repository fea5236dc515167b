//! Minimal host doubles for exercising tracers without a real interpreter.
//!
//! These model only the observation surface a tracer consumes: a frozen
//! instruction snapshot and a flat in-memory storage map.

use std::collections::HashMap;

use primitive_types::{H160, H256, U256};
use storage_tracer_interface::{InstructionContext, Opcode, StateView};

/// Instruction snapshot with a fixed opcode, operand stack, and executing
/// contract.
#[derive(Debug, Clone)]
pub struct TestInstruction {
    opcode: Opcode,
    stack: Vec<U256>,
    contract: H160,
}

impl TestInstruction {
    /// Creates an instruction executing in `contract`; the operand stack
    /// starts empty.
    pub fn new(opcode: Opcode, contract: H160) -> Self {
        Self {
            opcode,
            stack: vec![],
            contract,
        }
    }

    /// Pushes an operand; the most recently pushed value is the top of the
    /// stack.
    #[must_use]
    pub fn push(mut self, value: impl Into<U256>) -> Self {
        self.stack.push(value.into());
        self
    }
}

impl InstructionContext for TestInstruction {
    fn opcode(&self) -> Opcode {
        self.opcode
    }

    fn stack_peek(&self, depth: usize) -> U256 {
        self.stack[self.stack.len() - 1 - depth]
    }

    fn contract_address(&self) -> H160 {
        self.contract
    }
}

/// In-memory storage keyed by contract and slot; unwritten slots read as the
/// zero word.
#[derive(Debug, Clone, Default)]
pub struct TestStorage {
    slots: HashMap<(H160, H256), H256>,
}

impl TestStorage {
    /// Sets the value read back for the given contract and slot.
    pub fn insert(&mut self, address: H160, slot: H256, value: H256) {
        self.slots.insert((address, slot), value);
    }
}

impl StateView for TestStorage {
    fn storage_value(&self, address: H160, slot: H256) -> H256 {
        self.slots
            .get(&(address, slot))
            .copied()
            .unwrap_or_default()
    }
}
