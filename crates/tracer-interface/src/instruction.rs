use primitive_types::{H160, U256};

/// Single-byte instruction code as defined by the EVM instruction set.
///
/// Tracers do not decode instructions; the only opcodes they distinguish are
/// the two storage opcodes, so those are the only named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode(u8);

impl Opcode {
    /// `SLOAD` (0x54) — reads a word from the executing contract's storage.
    pub const SLOAD: Self = Self(0x54);
    /// `SSTORE` (0x55) — writes a word to the executing contract's storage.
    pub const SSTORE: Self = Self(0x55);

    /// Wraps a raw instruction byte.
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw instruction byte.
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl From<u8> for Opcode {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

/// Point-in-time view of the instruction the interpreter is about to execute.
///
/// Everything here refers to the moment just before the instruction runs: the
/// operand stack still holds the instruction's inputs and storage has not
/// been mutated by it yet. The view is only valid for the duration of one
/// tracer callback.
pub trait InstructionContext {
    /// Opcode of the instruction about to execute.
    fn opcode(&self) -> Opcode;

    /// Peeks a word on the operand stack without popping it. Depth 0 is the
    /// top of the stack.
    ///
    /// The interpreter guarantees that every operand required by the current
    /// opcode is present before dispatching it, so implementations may panic
    /// on depths beyond the stack height.
    fn stack_peek(&self, depth: usize) -> U256;

    /// Address of the contract whose storage context the instruction executes
    /// in. Changes across nested calls; the interpreter reports the frame that
    /// is current for this instruction.
    fn contract_address(&self) -> H160;
}
