//! Evaluation module.
//!
//! This module evaluates expression trees. It contains:
//!
//! - The persistent, arena-backed variable environment
//! - Operator semantics with per-operator type checks
//! - The recursive evaluator
//! - The driver that runs a whole program
//!
//! Type checking happens as values are produced; there is no pass over
//! the tree before evaluation starts.

pub mod driver;
pub mod environment;
pub mod interpreter;
pub mod operators;

pub use driver::{run, run_stdout, RunResult};

#[cfg(test)]
mod tests;
