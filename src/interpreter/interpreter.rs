//! Recursive evaluator over the expression tree.
//!
//! Every evaluation step takes an environment handle and hands back the
//! value it produced together with the environment to continue from.
//! Sub-expressions are evaluated left to right, each one starting from
//! the environment its predecessor returned.

use std::io::Write;

use crate::{
    ast::{
        ast::Expr,
        types::{Type, Value},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{
    environment::{Binding, EnvRef, Environment},
    operators,
};

/// The result of evaluating one expression: its value (which carries
/// the type tag) and the environment produced along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub value: Value,
    pub env: EnvRef,
}

impl Evaluation {
    pub fn unit(env: EnvRef) -> Self {
        Evaluation {
            value: Value::Unit,
            env,
        }
    }

    pub fn ty(&self) -> Type {
        self.value.ty()
    }
}

/// Evaluates expressions, writing `print` output to `W`.
///
/// The interpreter owns the binding arena. Handles returned by earlier
/// evaluations stay valid for the interpreter's whole lifetime.
pub struct Interpreter<W: Write> {
    environment: Environment,
    output: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(output: W) -> Self {
        Interpreter {
            environment: Environment::new(),
            output,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Consumes the interpreter, returning the binding arena and output sink.
    pub fn into_parts(self) -> (Environment, W) {
        (self.environment, self.output)
    }

    pub fn lookup(&self, env: EnvRef, name: &str) -> Option<&Binding> {
        self.environment.lookup(env, name)
    }

    pub fn evaluate(&mut self, expr: &Expr, env: EnvRef) -> Result<Evaluation, Error> {
        tracing::trace!(expr = %expr, "evaluating");

        match expr {
            Expr::Literal(value) => Ok(Evaluation {
                value: value.clone(),
                env,
            }),
            Expr::Print(inner) => {
                let result = self.evaluate(inner, env)?;
                self.print(&result.value)?;
                Ok(result)
            }
            Expr::Sequence(exprs) | Expr::Program(exprs) => self.evaluate_sequence(exprs, env),
            Expr::Variable(name) => match self.environment.lookup(env, name) {
                Some(binding) => Ok(Evaluation {
                    value: binding.value.clone(),
                    env,
                }),
                None => Err(Error::runtime(ErrorImpl::VariableNotDeclared {
                    variable: name.clone(),
                })),
            },
            Expr::Assign { name, value } => self.evaluate_assign(name, value, env),
            Expr::Arithmetic { op, left, right } => {
                let (left, right, env) = self.evaluate_operands(left, right, env)?;
                Ok(Evaluation {
                    value: operators::arithmetic(*op, left, right)?,
                    env,
                })
            }
            Expr::Logical { op, left, right } => {
                // Both sides run, side effects included, before the operator applies
                let (left, right, env) = self.evaluate_operands(left, right, env)?;
                Ok(Evaluation {
                    value: operators::logical(*op, left, right)?,
                    env,
                })
            }
            Expr::Not(inner) => {
                let result = self.evaluate(inner, env)?;
                Ok(Evaluation {
                    value: operators::not(result.value)?,
                    env: result.env,
                })
            }
            Expr::Comparison { op, left, right } => {
                let (left, right, env) = self.evaluate_operands(left, right, env)?;
                Ok(Evaluation {
                    value: operators::compare(*op, &left, &right)?,
                    env,
                })
            }
            Expr::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let condition = self.evaluate(condition, env)?;
                if expect_condition("if", &condition.value)? {
                    self.evaluate(then_branch, condition.env)
                } else {
                    self.evaluate(else_branch, condition.env)
                }
            }
            Expr::While { condition, body } => self.evaluate_while(condition, body, env),
        }
    }

    fn evaluate_sequence(&mut self, exprs: &[Expr], env: EnvRef) -> Result<Evaluation, Error> {
        let mut result = Evaluation::unit(env);
        for expr in exprs {
            result = self.evaluate(expr, result.env)?;
        }
        Ok(result)
    }

    fn evaluate_assign(&mut self, name: &str, value: &Expr, env: EnvRef) -> Result<Evaluation, Error> {
        let result = self.evaluate(value, env)?;

        if let Some(existing) = self.environment.lookup(result.env, name) {
            if existing.ty() != result.ty() {
                return Err(Error::runtime(ErrorImpl::AssignmentTypeMatchError {
                    variable: name.to_owned(),
                    expected: existing.ty(),
                    received: result.ty(),
                }));
            }
        }

        let env = self.environment.extend(result.env, name, result.value.clone());
        Ok(Evaluation {
            value: result.value,
            env,
        })
    }

    fn evaluate_operands(
        &mut self,
        left: &Expr,
        right: &Expr,
        env: EnvRef,
    ) -> Result<(Value, Value, EnvRef), Error> {
        let left = self.evaluate(left, env)?;
        let right = self.evaluate(right, left.env)?;
        Ok((left.value, right.value, right.env))
    }

    fn evaluate_while(&mut self, condition: &Expr, body: &Expr, env: EnvRef) -> Result<Evaluation, Error> {
        let mut last = Evaluation::unit(env);
        let mut iterations = 0usize;

        loop {
            let checked = self.evaluate(condition, last.env)?;
            if !expect_condition("while", &checked.value)? {
                break;
            }

            last = self.evaluate(body, checked.env)?;
            iterations += 1;
            tracing::trace!(iterations, "loop iteration finished");
        }

        Ok(last)
    }

    fn print(&mut self, value: &Value) -> Result<(), Error> {
        writeln!(self.output, "{}", value).map_err(|e| {
            Error::runtime(ErrorImpl::OutputError {
                message: e.to_string(),
            })
        })
    }
}

fn expect_condition(construct: &'static str, value: &Value) -> Result<bool, Error> {
    match value {
        Value::Boolean(b) => Ok(*b),
        other => Err(Error::runtime(ErrorImpl::ConditionExpectsBoolean {
            construct,
            received: other.ty(),
        })),
    }
}
