/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: The expression sum type and its operators
/// - expressions: Constructors for building expression trees
/// - types: Runtime type tags and values
pub mod ast;
pub mod expressions;
pub mod types;
