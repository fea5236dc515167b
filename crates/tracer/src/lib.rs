//! Per-transaction storage access tracing for an EVM-style interpreter.
//!
//! An [`AccessTracer`] is constructed fresh for each traced transaction and
//! driven by the interpreter through a three-call protocol:
//! [`AccessTracer::on_step()`] once per executed instruction,
//! [`AccessTracer::on_fault()`] at most once if execution aborts, and
//! [`AccessTracer::on_result()`] exactly once at the end. The tracer is a
//! passive observer: it records which storage slots `SLOAD` and `SSTORE`
//! touch, together with the value stored at each slot at that moment, and
//! renders the whole trace as a compact JSON artifact for storage-pattern
//! classification.
//!
//! # Examples
//!
//! ```
//! use primitive_types::H160;
//! use storage_tracer::{
//!     testonly::{TestInstruction, TestStorage},
//!     AccessTracer, FinalExecutionContext, Opcode,
//! };
//!
//! let contract = H160::repeat_byte(0xaa);
//! let state = TestStorage::default();
//! let mut tracer = AccessTracer::new();
//!
//! tracer.on_step(&TestInstruction::new(Opcode::new(0x01), contract), &state);
//! tracer.on_step(&TestInstruction::new(Opcode::SLOAD, contract).push(5), &state);
//!
//! let result = tracer.on_result(&FinalExecutionContext::default());
//! assert_eq!(result.accesses.len(), 1);
//! ```

pub use storage_tracer_interface::{
    ExecutionFault, FinalExecutionContext, InstructionContext, Opcode, StateView,
};

pub use self::{
    log::{AccessKind, AccessLog, AccessRecord},
    trace::TraceResult,
    tracer::AccessTracer,
};

pub mod encoding;
mod log;
pub mod testonly;
mod trace;
mod tracer;
