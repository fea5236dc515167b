//! # Storage tracer interface
//!
//! This crate defines the contract between an EVM-style interpreter and a
//! per-transaction storage access tracer.
//!
//! The interpreter implements [`InstructionContext`] and [`StateView`] and
//! drives a tracer from its dispatch loop, once per executed instruction.
//! Both traits are deliberately read-only: observing a transaction must not
//! be able to change its outcome. The interpreter owns the views it passes
//! in; tracers must not retain them beyond a single callback.
//!
//! At the end of an execution the interpreter hands the tracer a
//! [`FinalExecutionContext`]; if execution aborted, it reports an
//! [`ExecutionFault`] first.

pub use self::{execution::*, instruction::*, state_view::*};

mod execution;
mod instruction;
mod state_view;
