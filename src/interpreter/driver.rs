//! Program entry point.
//!
//! Runs a whole program from the empty environment and hands back the
//! final value together with the environment it left behind.

use std::io::{self, Write};

use crate::{
    ast::{
        ast::Expr,
        types::{Type, Value},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{
    environment::{Binding, EnvRef, Environment},
    interpreter::Interpreter,
};

/// Final state of a successful run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub value: Value,
    pub ty: Type,
    /// Head of the final binding chain inside `environment`.
    pub env: EnvRef,
    pub environment: Environment,
}

impl RunResult {
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        self.environment.lookup(self.env, name)
    }

    pub fn render_environment(&self) -> String {
        self.environment.render(self.env)
    }
}

/// Evaluates `program` starting from the empty environment.
///
/// Evaluation errors are returned untouched. With `debug` set, a dump of
/// the program, the final value and the final environment is written to
/// `output` after a successful run.
pub fn run<W: Write>(program: &Expr, debug: bool, output: W) -> Result<RunResult, Error> {
    // `debug` as a bare field would resolve to `tracing::field::debug` inside the macro.
    let debug_flag = debug;
    tracing::debug!(debug = debug_flag, "running program");

    let mut interpreter = Interpreter::new(output);
    let result = interpreter.evaluate(program, EnvRef::EMPTY)?;
    let (environment, mut output) = interpreter.into_parts();

    let run = RunResult {
        ty: result.ty(),
        value: result.value,
        env: result.env,
        environment,
    };

    tracing::debug!(
        value = %run.value,
        ty = %run.ty,
        bindings = run.environment.len(),
        "program finished"
    );

    if debug {
        write_dump(&mut output, program, &run).map_err(|e| {
            Error::runtime(ErrorImpl::OutputError {
                message: e.to_string(),
            })
        })?;
    }

    Ok(run)
}

/// Runs `program` with `print` output going to stdout.
pub fn run_stdout(program: &Expr, debug: bool) -> Result<RunResult, Error> {
    run(program, debug, io::stdout().lock())
}

fn write_dump<W: Write>(output: &mut W, program: &Expr, run: &RunResult) -> io::Result<()> {
    writeln!(output, "program: {}", program)?;
    writeln!(output, "final_value: ({}, {})", run.value, run.ty)?;
    writeln!(output, "final_state: {}", run.render_environment())?;
    output.flush()
}
