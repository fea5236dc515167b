/// Reason the interpreter aborted a traced execution.
///
/// Tracers treat this as an opaque signal and consume no variant data; the
/// variants exist so that hosts can report real abort reasons without
/// stringly-typed errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExecutionFault {
    /// The execution ran out of gas.
    OutOfGas,
    /// An invalid or unknown opcode was reached.
    InvalidInstruction,
    /// Any other VM-level failure.
    Internal,
}

/// Final state of a traced execution, handed to the tracer at finalization.
///
/// Produced by the interpreter whether the execution completed normally or
/// was finalized after a fault.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinalExecutionContext {
    /// Raw bytes returned by the execution; empty if it produced no return
    /// data.
    pub output: Vec<u8>,
}

impl FinalExecutionContext {
    /// Context for an execution that returned the given data.
    pub fn with_output(output: impl Into<Vec<u8>>) -> Self {
        Self {
            output: output.into(),
        }
    }
}
