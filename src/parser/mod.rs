//! Parser module for building the expression tree.
//!
//! This module contains the parser that transforms a stream of tokens
//! into an `Expr` tree rooted at `Expr::Program`. It uses a Pratt parser
//! for expressions with proper operator precedence and handles:
//!
//! - Item separation with `;` (optional around `}`)
//! - Expression parsing (binary ops, prefix ops, literals, grouping)
//! - Blocks, conditionals and loops
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

pub use parser::parse;
