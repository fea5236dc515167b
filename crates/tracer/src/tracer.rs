use storage_tracer_interface::{
    ExecutionFault, FinalExecutionContext, InstructionContext, StateView,
};
use tracing::trace;

use crate::{
    encoding::word_from_u256,
    log::{AccessKind, AccessLog, AccessRecord},
    trace::TraceResult,
};

/// Lifecycle phase of a tracer.
///
/// Finalization is not a phase: [`AccessTracer::on_result()`] consumes the
/// tracer, so a finalized tracer cannot receive further callbacks by
/// construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Phase {
    /// Constructed; no callback received yet.
    #[default]
    Idle,
    /// At least one step or fault observed.
    Tracing,
}

/// Per-transaction storage access tracer.
///
/// Constructed fresh for every traced transaction and driven synchronously by
/// the interpreter's dispatch loop: [`Self::on_step()`] once per executed
/// instruction in program order, [`Self::on_fault()`] at most once if
/// execution aborts, and [`Self::on_result()`] exactly once at the end. Each
/// callback completes before the interpreter proceeds; the tracer never
/// blocks and keeps nothing from the host views between calls.
///
/// # Examples
///
/// ```
/// use primitive_types::{H160, H256};
/// use storage_tracer::{
///     testonly::{TestInstruction, TestStorage},
///     AccessTracer, FinalExecutionContext, Opcode,
/// };
///
/// let contract = H160::repeat_byte(0x11);
/// let mut state = TestStorage::default();
/// state.insert(contract, H256::from_low_u64_be(7), H256::from_low_u64_be(0x2a));
///
/// let mut tracer = AccessTracer::new();
/// tracer.on_step(&TestInstruction::new(Opcode::SSTORE, contract).push(1).push(7), &state);
///
/// let result = tracer.on_result(&FinalExecutionContext::default());
/// assert_eq!(result.accesses.as_slice()[0].value, H256::from_low_u64_be(0x2a));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AccessTracer {
    log: AccessLog,
    phase: Phase,
}

impl AccessTracer {
    /// Creates a tracer with an empty access log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes one instruction just before the interpreter executes it.
    ///
    /// `SLOAD` and `SSTORE` are recorded; every other opcode returns
    /// immediately, since this runs once per instruction for the whole
    /// transaction. For storage opcodes the slot key sits at the top of the
    /// operand stack (the EVM calling convention for both opcodes), and the
    /// recorded value is whatever the state holds for that slot at this
    /// moment, so `SSTORE` captures the pre-write value.
    pub fn on_step(&mut self, instruction: &impl InstructionContext, state: &impl StateView) {
        self.phase = Phase::Tracing;

        let Some(kind) = AccessKind::from_opcode(instruction.opcode()) else {
            return;
        };

        let contract = instruction.contract_address();
        let slot = word_from_u256(instruction.stack_peek(0));
        let value = state.storage_value(contract, slot);

        self.log.push(AccessRecord {
            kind,
            contract,
            slot,
            value,
        });
    }

    /// Handles abnormal termination of the traced execution.
    ///
    /// Everything recorded so far is kept: a partial trace of an aborted
    /// transaction still tells a downstream classifier which slots were
    /// touched before the fault.
    pub fn on_fault(&mut self, fault: ExecutionFault) {
        self.phase = Phase::Tracing;
        trace!(?fault, recorded = self.log.len(), "execution faulted");
    }

    /// Finalizes the trace, returning the accumulated log in execution order
    /// together with the execution's return data, copied verbatim.
    ///
    /// Consumes the tracer, so no callback can be delivered after
    /// finalization and the trace cannot be finalized twice.
    pub fn on_result(self, ctx: &FinalExecutionContext) -> TraceResult {
        trace!(
            recorded = self.log.len(),
            output_len = ctx.output.len(),
            "trace finalized"
        );
        TraceResult {
            accesses: self.log,
            output: ctx.output.clone(),
        }
    }

    /// Whether the tracer has observed at least one callback.
    pub fn is_tracing(&self) -> bool {
        self.phase == Phase::Tracing
    }

    /// Read-only view of the log accumulated so far.
    pub fn log(&self) -> &AccessLog {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use primitive_types::{H160, H256};
    use storage_tracer_interface::Opcode;

    use super::*;
    use crate::testonly::{TestInstruction, TestStorage};

    #[test]
    fn non_storage_opcodes_are_not_recorded() {
        let contract = H160::repeat_byte(0x01);
        let state = TestStorage::default();
        let mut tracer = AccessTracer::new();

        for raw in [0x00, 0x01, 0x52, 0x56, 0xf1] {
            tracer.on_step(&TestInstruction::new(Opcode::new(raw), contract), &state);
        }
        assert!(tracer.log().is_empty());
        assert!(tracer.is_tracing());
    }

    #[test]
    fn records_top_of_stack_as_slot() {
        let contract = H160::repeat_byte(0x01);
        let state = TestStorage::default();
        let mut tracer = AccessTracer::new();

        // 7 is pushed last, so it is the top of the stack and the slot key.
        tracer.on_step(
            &TestInstruction::new(Opcode::SSTORE, contract).push(1).push(7),
            &state,
        );

        assert_eq!(tracer.log().as_slice()[0].slot, H256::from_low_u64_be(7));
    }

    #[test]
    fn fault_keeps_accumulated_records() {
        let contract = H160::repeat_byte(0x01);
        let state = TestStorage::default();
        let mut tracer = AccessTracer::new();

        tracer.on_step(&TestInstruction::new(Opcode::SLOAD, contract).push(5), &state);
        tracer.on_fault(ExecutionFault::OutOfGas);

        let result = tracer.on_result(&FinalExecutionContext::default());
        assert_eq!(result.accesses.len(), 1);
    }

    #[test]
    fn fresh_tracer_is_idle_until_first_callback() {
        let mut tracer = AccessTracer::new();
        assert!(!tracer.is_tracing());

        tracer.on_fault(ExecutionFault::Internal);
        assert!(tracer.is_tracing());
    }

    #[test]
    fn each_contract_address_is_taken_per_step() {
        let state = TestStorage::default();
        let mut tracer = AccessTracer::new();

        // Nested call: the inner contract executes the second access.
        let outer = H160::repeat_byte(0xaa);
        let inner = H160::repeat_byte(0xbb);
        tracer.on_step(&TestInstruction::new(Opcode::SLOAD, outer).push(1), &state);
        tracer.on_step(&TestInstruction::new(Opcode::SLOAD, inner).push(2), &state);
        tracer.on_step(&TestInstruction::new(Opcode::SLOAD, outer).push(3), &state);

        let contracts: Vec<_> = tracer.log().iter().map(|r| r.contract).collect();
        assert_eq!(contracts, [outer, inner, outer]);
    }
}
