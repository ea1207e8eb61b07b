//! Error types and error handling for the interpreter.
//!
//! This module defines the error types used from tokenizing through
//! evaluation. It includes:
//!
//! - Error structures with optional source position information
//! - Specific error variants for the front end and the evaluator
//! - The `ErrorKind` classification callers branch on
//! - Helpful error messages and suggestions

pub mod errors;
