//! Persistent variable environment.
//!
//! Bindings live in an append-only arena. An environment is a handle to
//! one binding record (its head), and every record points at its parent,
//! so a handle describes the whole chain back to the empty sentinel.
//! Extending pushes a new record and returns a new handle; records are
//! never mutated or removed, so every handle ever returned stays valid.

use crate::ast::types::{Type, Value};

/// Handle to the head of a binding chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnvRef(Option<usize>);

impl EnvRef {
    /// The empty sentinel which carries no binding.
    pub const EMPTY: EnvRef = EnvRef(None);

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl Default for EnvRef {
    fn default() -> Self {
        EnvRef::EMPTY
    }
}

/// A single `(name, value)` record; its type tag is the value's tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub value: Value,
    parent: EnvRef,
}

impl Binding {
    pub fn ty(&self) -> Type {
        self.value.ty()
    }

    pub fn parent(&self) -> EnvRef {
        self.parent
    }
}

#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: Vec<Binding>,
}

impl Environment {
    pub fn new() -> Self {
        Environment { bindings: vec![] }
    }

    /// Returns the innermost binding of `name` reachable from `env`.
    pub fn lookup(&self, env: EnvRef, name: &str) -> Option<&Binding> {
        self.bindings(env).find(|binding| binding.name == name)
    }

    /// Prepends a binding to `env`, returning the new head.
    ///
    /// `env` and everything reachable from it is left untouched.
    pub fn extend<A: AsRef<str>>(&mut self, env: EnvRef, name: A, value: Value) -> EnvRef {
        self.bindings.push(Binding {
            name: name.as_ref().to_owned(),
            value,
            parent: env,
        });
        let index = self.bindings.len() - 1;

        tracing::debug!(name = name.as_ref(), index, "extended environment");
        EnvRef(Some(index))
    }

    /// Walks the chain from `env` to the sentinel, innermost first.
    pub fn bindings(&self, env: EnvRef) -> Bindings<'_> {
        Bindings {
            environment: self,
            current: env,
        }
    }

    /// Number of bindings in the chain headed by `env`, shadowed ones included.
    pub fn depth(&self, env: EnvRef) -> usize {
        self.bindings(env).count()
    }

    /// Total number of records in the arena, across all chains.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Renders the chain as `name: (value, type)` entries, innermost first.
    pub fn render(&self, env: EnvRef) -> String {
        let mut result = String::new();
        for (i, binding) in self.bindings(env).enumerate() {
            if i > 0 {
                result.push_str(", ");
            }
            result.push_str(&format!(
                "{}: ({}, {})",
                binding.name,
                binding.value,
                binding.ty()
            ));
        }
        result
    }
}

/// Iterator over a binding chain.
pub struct Bindings<'a> {
    environment: &'a Environment,
    current: EnvRef,
}

impl<'a> Iterator for Bindings<'a> {
    type Item = &'a Binding;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current.0?;
        let binding = &self.environment.bindings[index];
        self.current = binding.parent;
        Some(binding)
    }
}
