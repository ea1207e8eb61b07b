//! Unit tests for the evaluator, environment and driver.

use pretty_assertions::assert_eq;

use crate::{
    ast::{
        ast::Expr,
        types::{Type, Value},
    },
    errors::errors::ErrorKind,
};

use super::{
    environment::{EnvRef, Environment},
    interpreter::{Evaluation, Interpreter},
    run,
};

fn evaluate(expr: &Expr) -> Result<Evaluation, ErrorKind> {
    let mut interpreter = Interpreter::new(Vec::new());
    interpreter.evaluate(expr, EnvRef::EMPTY).map_err(|e| e.kind())
}

fn value_of(expr: Expr) -> Value {
    evaluate(&expr).unwrap().value
}

fn error_of(expr: Expr) -> ErrorKind {
    evaluate(&expr).unwrap_err()
}

fn output_of(expr: &Expr) -> String {
    let mut interpreter = Interpreter::new(Vec::new());
    interpreter.evaluate(expr, EnvRef::EMPTY).unwrap();
    let (_, output) = interpreter.into_parts();
    String::from_utf8(output).unwrap()
}

// ENVIRONMENT

#[test]
fn test_environment_lookup_empty() {
    let environment = Environment::new();
    assert!(environment.lookup(EnvRef::EMPTY, "x").is_none());
    assert_eq!(environment.render(EnvRef::EMPTY), "");
}

#[test]
fn test_environment_shadowing_keeps_old_chain() {
    let mut environment = Environment::new();
    let first = environment.extend(EnvRef::EMPTY, "x", Value::Integer(1));
    let second = environment.extend(first, "x", Value::Integer(2));

    assert_eq!(environment.lookup(second, "x").unwrap().value, Value::Integer(2));
    assert_eq!(environment.lookup(first, "x").unwrap().value, Value::Integer(1));
    assert!(environment.lookup(EnvRef::EMPTY, "x").is_none());
    assert_eq!(environment.depth(second), 2);
    assert_eq!(environment.lookup(second, "x").unwrap().parent(), first);
}

#[test]
fn test_environment_long_chain() {
    let mut environment = Environment::new();
    let mut env = EnvRef::EMPTY;
    for i in 0..10_000 {
        env = environment.extend(env, "i", Value::Integer(i));
    }

    assert_eq!(environment.len(), 10_000);
    assert_eq!(environment.depth(env), 10_000);
    assert_eq!(environment.lookup(env, "i").unwrap().value, Value::Integer(9_999));
}

#[test]
fn test_environment_branches_share_ancestor() {
    let mut environment = Environment::new();
    let base = environment.extend(EnvRef::EMPTY, "x", Value::Integer(1));
    let left = environment.extend(base, "y", Value::Boolean(true));
    let right = environment.extend(base, "z", Value::string("z"));

    assert!(environment.lookup(left, "z").is_none());
    assert!(environment.lookup(right, "y").is_none());
    assert_eq!(environment.lookup(left, "x").unwrap().ty(), Type::Integer);
    assert_eq!(environment.lookup(right, "x").unwrap().ty(), Type::Integer);
}

#[test]
fn test_environment_render_innermost_first() {
    let mut environment = Environment::new();
    let env = environment.extend(EnvRef::EMPTY, "x", Value::Integer(1));
    let env = environment.extend(env, "name", Value::string("bob"));
    let env = environment.extend(env, "x", Value::Integer(2));

    assert_eq!(
        environment.render(env),
        "x: (2, Integer), name: (bob, String), x: (1, Integer)"
    );
}

// LITERALS

#[test]
fn test_literals_evaluate_to_themselves() {
    let mut interpreter = Interpreter::new(Vec::new());
    let env = interpreter
        .evaluate(&Expr::assign("x", Expr::int(1)), EnvRef::EMPTY)
        .unwrap()
        .env;

    let literals = [
        (Expr::unit(), Value::Unit, Type::Unit),
        (Expr::int(7), Value::Integer(7), Type::Integer),
        (Expr::float(1.25), Value::FloatingPoint(1.25), Type::FloatingPoint),
        (Expr::string("hello"), Value::string("hello"), Type::String),
        (Expr::boolean(true), Value::Boolean(true), Type::Boolean),
    ];

    for (expr, value, ty) in literals {
        let result = interpreter.evaluate(&expr, env).unwrap();
        assert_eq!(result.value, value);
        assert_eq!(result.ty(), ty);
        assert_eq!(result.env, env);
    }
}

#[test]
fn test_pure_expressions_leave_environment_alone() {
    let mut interpreter = Interpreter::new(Vec::new());
    let env = interpreter
        .evaluate(&Expr::assign("x", Expr::int(4)), EnvRef::EMPTY)
        .unwrap()
        .env;
    let arena_size = interpreter.environment().len();

    let expr = Expr::if_else(
        Expr::gt(Expr::variable("x"), Expr::int(2)),
        Expr::multiply(Expr::variable("x"), Expr::int(10)),
        Expr::int(0),
    );

    let first = interpreter.evaluate(&expr, env).unwrap();
    let second = interpreter.evaluate(&expr, env).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.value, Value::Integer(40));
    assert_eq!(first.env, env);
    assert_eq!(interpreter.environment().len(), arena_size);
}

// VARIABLES AND ASSIGNMENT

#[test]
fn test_unbound_variable() {
    assert_eq!(error_of(Expr::variable("missing")), ErrorKind::UnboundName);
}

#[test]
fn test_assignment_binds_and_returns_value() {
    let result = evaluate(&Expr::assign("x", Expr::string("hi"))).unwrap();
    assert_eq!(result.value, Value::string("hi"));
    assert_eq!(result.ty(), Type::String);
    assert!(!result.env.is_empty());
}

#[test]
fn test_reassignment_with_same_type() {
    let program = Expr::Program(vec![
        Expr::assign("x", Expr::int(1)),
        Expr::assign("x", Expr::int(2)),
        Expr::variable("x"),
    ]);
    assert_eq!(value_of(program), Value::Integer(2));
}

#[test]
fn test_reassignment_with_different_type() {
    let program = Expr::Program(vec![
        Expr::assign("x", Expr::int(1)),
        Expr::assign("x", Expr::float(1.0)),
    ]);
    assert_eq!(error_of(program), ErrorKind::TypeMismatch);
}

#[test]
fn test_shadow_without_erase() {
    let mut interpreter = Interpreter::new(Vec::new());
    let first = interpreter
        .evaluate(&Expr::assign("x", Expr::int(1)), EnvRef::EMPTY)
        .unwrap()
        .env;
    let second = interpreter
        .evaluate(&Expr::assign("x", Expr::int(2)), first)
        .unwrap()
        .env;

    assert_eq!(interpreter.lookup(second, "x").unwrap().value, Value::Integer(2));
    assert_eq!(interpreter.lookup(first, "x").unwrap().value, Value::Integer(1));
}

#[test]
fn test_assignment_type_checked_against_value_environment() {
    // The value expression's own binding is what the target is checked against
    let program = Expr::assign("x", Expr::Sequence(vec![
        Expr::assign("x", Expr::string("a")),
        Expr::int(3),
    ]));
    assert_eq!(error_of(program), ErrorKind::TypeMismatch);
}

// ARITHMETIC

#[test]
fn test_add() {
    assert_eq!(value_of(Expr::add(Expr::int(2), Expr::int(3))), Value::Integer(5));
    assert_eq!(
        value_of(Expr::add(Expr::float(1.5), Expr::float(2.25))),
        Value::FloatingPoint(3.75)
    );
    assert_eq!(
        value_of(Expr::add(Expr::string("foo"), Expr::string("bar"))),
        Value::string("foobar")
    );
}

#[test]
fn test_add_rejects_mismatched_and_unsupported_tags() {
    assert_eq!(error_of(Expr::add(Expr::int(1), Expr::float(1.0))), ErrorKind::TypeMismatch);
    assert_eq!(error_of(Expr::add(Expr::int(1), Expr::string("1"))), ErrorKind::TypeMismatch);
    assert_eq!(
        error_of(Expr::add(Expr::boolean(true), Expr::boolean(false))),
        ErrorKind::TypeMismatch
    );
    assert_eq!(error_of(Expr::add(Expr::unit(), Expr::unit())), ErrorKind::TypeMismatch);
}

#[test]
fn test_subtract_and_multiply() {
    assert_eq!(value_of(Expr::subtract(Expr::int(2), Expr::int(5))), Value::Integer(-3));
    assert_eq!(
        value_of(Expr::subtract(Expr::float(2.5), Expr::float(0.5))),
        Value::FloatingPoint(2.0)
    );
    assert_eq!(value_of(Expr::multiply(Expr::int(6), Expr::int(7))), Value::Integer(42));
    assert_eq!(
        value_of(Expr::multiply(Expr::float(1.5), Expr::float(2.0))),
        Value::FloatingPoint(3.0)
    );
}

#[test]
fn test_subtract_and_multiply_reject_strings() {
    assert_eq!(
        error_of(Expr::subtract(Expr::string("a"), Expr::string("b"))),
        ErrorKind::TypeMismatch
    );
    assert_eq!(
        error_of(Expr::multiply(Expr::string("a"), Expr::string("b"))),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn test_divide() {
    assert_eq!(value_of(Expr::divide(Expr::int(7), Expr::int(2))), Value::Integer(3));
    assert_eq!(
        value_of(Expr::divide(Expr::float(7.0), Expr::float(2.0))),
        Value::FloatingPoint(3.5)
    );
}

#[test]
fn test_integer_divide_floors() {
    assert_eq!(value_of(Expr::divide(Expr::int(-7), Expr::int(2))), Value::Integer(-4));
    assert_eq!(value_of(Expr::divide(Expr::int(7), Expr::int(-2))), Value::Integer(-4));
    assert_eq!(value_of(Expr::divide(Expr::int(-7), Expr::int(-2))), Value::Integer(3));
    assert_eq!(value_of(Expr::divide(Expr::int(-8), Expr::int(2))), Value::Integer(-4));
}

#[test]
fn test_divide_by_zero() {
    assert_eq!(error_of(Expr::divide(Expr::int(5), Expr::int(0))), ErrorKind::DivideByZero);
    assert_eq!(
        error_of(Expr::divide(Expr::float(5.0), Expr::float(0.0))),
        ErrorKind::DivideByZero
    );
    assert_eq!(
        error_of(Expr::divide(Expr::float(5.0), Expr::float(-0.0))),
        ErrorKind::DivideByZero
    );
    assert_eq!(
        error_of(Expr::divide(Expr::boolean(true), Expr::boolean(false))),
        ErrorKind::DivideByZero
    );
    // Non-zero booleans still fail the tag check
    assert_eq!(
        error_of(Expr::divide(Expr::boolean(true), Expr::boolean(true))),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn test_divide_rejects_mismatch_before_zero_check() {
    assert_eq!(error_of(Expr::divide(Expr::float(5.0), Expr::int(0))), ErrorKind::TypeMismatch);
    assert_eq!(
        error_of(Expr::divide(Expr::string("a"), Expr::string("b"))),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn test_integer_overflow_wraps() {
    assert_eq!(
        value_of(Expr::add(Expr::int(i64::MAX), Expr::int(1))),
        Value::Integer(i64::MIN)
    );
    assert_eq!(
        value_of(Expr::divide(Expr::int(i64::MIN), Expr::int(-1))),
        Value::Integer(i64::MIN)
    );
}

#[test]
fn test_operands_thread_environment() {
    let expr = Expr::add(Expr::assign("x", Expr::int(1)), Expr::variable("x"));
    let result = evaluate(&expr).unwrap();
    assert_eq!(result.value, Value::Integer(2));
    assert!(!result.env.is_empty());
}

// LOGICAL

#[test]
fn test_and_or_not() {
    assert_eq!(
        value_of(Expr::and(Expr::boolean(true), Expr::boolean(false))),
        Value::Boolean(false)
    );
    assert_eq!(
        value_of(Expr::and(Expr::boolean(true), Expr::boolean(true))),
        Value::Boolean(true)
    );
    assert_eq!(
        value_of(Expr::or(Expr::boolean(false), Expr::boolean(true))),
        Value::Boolean(true)
    );
    assert_eq!(
        value_of(Expr::or(Expr::boolean(false), Expr::boolean(false))),
        Value::Boolean(false)
    );
    assert_eq!(value_of(Expr::not(Expr::boolean(false))), Value::Boolean(true));
}

#[test]
fn test_logical_rejects_non_boolean() {
    assert_eq!(error_of(Expr::and(Expr::int(1), Expr::int(1))), ErrorKind::TypeMismatch);
    assert_eq!(error_of(Expr::or(Expr::boolean(true), Expr::int(1))), ErrorKind::TypeMismatch);
    assert_eq!(error_of(Expr::not(Expr::string("true"))), ErrorKind::TypeMismatch);
}

// And/Or deliberately evaluate both operands. If short-circuiting is ever
// introduced, these two tests are the ones that should change.
#[test]
fn test_and_does_not_short_circuit() {
    let expr = Expr::and(Expr::boolean(false), Expr::print(Expr::boolean(true)));
    assert_eq!(value_of(expr.clone()), Value::Boolean(false));
    assert_eq!(output_of(&expr), "true\n");
}

#[test]
fn test_or_does_not_short_circuit() {
    let expr = Expr::or(
        Expr::boolean(true),
        Expr::Sequence(vec![Expr::print(Expr::string("ran")), Expr::boolean(false)]),
    );
    assert_eq!(value_of(expr.clone()), Value::Boolean(true));
    assert_eq!(output_of(&expr), "ran\n");
}

// COMPARISON

#[test]
fn test_comparisons() {
    assert_eq!(value_of(Expr::lt(Expr::int(1), Expr::int(2))), Value::Boolean(true));
    assert_eq!(value_of(Expr::lte(Expr::int(2), Expr::int(2))), Value::Boolean(true));
    assert_eq!(value_of(Expr::gt(Expr::float(1.5), Expr::float(2.5))), Value::Boolean(false));
    assert_eq!(value_of(Expr::gte(Expr::float(2.5), Expr::float(2.5))), Value::Boolean(true));
    assert_eq!(
        value_of(Expr::lt(Expr::string("apple"), Expr::string("banana"))),
        Value::Boolean(true)
    );
    assert_eq!(
        value_of(Expr::lt(Expr::boolean(false), Expr::boolean(true))),
        Value::Boolean(true)
    );
    assert_eq!(
        value_of(Expr::equal(Expr::string("a"), Expr::string("a"))),
        Value::Boolean(true)
    );
    assert_eq!(value_of(Expr::not_equal(Expr::int(1), Expr::int(1))), Value::Boolean(false));
}

#[test]
fn test_unit_comparisons() {
    let cases = [
        (Expr::lt(Expr::unit(), Expr::unit()), false),
        (Expr::lte(Expr::unit(), Expr::unit()), true),
        (Expr::gt(Expr::unit(), Expr::unit()), false),
        (Expr::gte(Expr::unit(), Expr::unit()), true),
        (Expr::equal(Expr::unit(), Expr::unit()), true),
        (Expr::not_equal(Expr::unit(), Expr::unit()), false),
    ];

    for (expr, expected) in cases {
        let result = evaluate(&expr).unwrap();
        assert_eq!(result.value, Value::Boolean(expected), "{}", expr);
        assert_eq!(result.ty(), Type::Boolean);
        assert_eq!(result.env, EnvRef::EMPTY);
    }
}

#[test]
fn test_nan_comparisons() {
    let nan = || Expr::float(f64::NAN);
    let cases = [
        (Expr::lt(nan(), nan()), false),
        (Expr::lte(nan(), nan()), false),
        (Expr::gt(nan(), nan()), false),
        (Expr::gte(nan(), nan()), false),
        (Expr::equal(nan(), nan()), false),
        (Expr::not_equal(nan(), nan()), true),
        (Expr::lt(nan(), Expr::float(1.0)), false),
        (Expr::gte(Expr::float(1.0), nan()), false),
    ];

    for (expr, expected) in cases {
        assert_eq!(value_of(expr.clone()), Value::Boolean(expected), "{}", expr);
    }
}

#[test]
fn test_comparison_rejects_mismatched_tags() {
    assert_eq!(error_of(Expr::equal(Expr::int(1), Expr::float(1.0))), ErrorKind::TypeMismatch);
    assert_eq!(error_of(Expr::lt(Expr::unit(), Expr::int(0))), ErrorKind::TypeMismatch);
}

// CONTROL FLOW

#[test]
fn test_if_takes_one_branch() {
    let expr = Expr::if_else(
        Expr::boolean(false),
        Expr::print(Expr::string("then")),
        Expr::print(Expr::string("else")),
    );
    assert_eq!(value_of(expr.clone()), Value::string("else"));
    assert_eq!(output_of(&expr), "else\n");
}

#[test]
fn test_if_threads_condition_environment() {
    let expr = Expr::if_else(
        Expr::Sequence(vec![Expr::assign("x", Expr::int(5)), Expr::boolean(true)]),
        Expr::variable("x"),
        Expr::int(0),
    );
    assert_eq!(value_of(expr), Value::Integer(5));
}

#[test]
fn test_if_requires_boolean_condition() {
    assert_eq!(
        error_of(Expr::if_else(Expr::int(1), Expr::unit(), Expr::unit())),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn test_while_false_on_first_check() {
    let expr = Expr::while_loop(Expr::boolean(false), Expr::print(Expr::string("body")));
    let result = evaluate(&expr).unwrap();

    assert_eq!(result.value, Value::Unit);
    assert_eq!(result.ty(), Type::Unit);
    assert_eq!(result.env, EnvRef::EMPTY);
    assert_eq!(output_of(&expr), "");
}

#[test]
fn test_while_returns_last_body_result() {
    let program = Expr::Program(vec![
        Expr::assign("i", Expr::int(0)),
        Expr::while_loop(
            Expr::lt(Expr::variable("i"), Expr::int(4)),
            Expr::assign("i", Expr::add(Expr::variable("i"), Expr::int(1))),
        ),
    ]);
    let result = evaluate(&program).unwrap();
    assert_eq!(result.value, Value::Integer(4));
    assert_eq!(result.ty(), Type::Integer);
}

/// Loop over `i < limit` whose condition also bumps a counter `c`.
fn counting_loop(start: i64, limit: i64) -> (Interpreter<Vec<u8>>, Evaluation) {
    let program = Expr::Program(vec![
        Expr::assign("i", Expr::int(start)),
        Expr::assign("c", Expr::int(0)),
        Expr::while_loop(
            Expr::Sequence(vec![
                Expr::assign("c", Expr::add(Expr::variable("c"), Expr::int(1))),
                Expr::lt(Expr::variable("i"), Expr::int(limit)),
            ]),
            Expr::assign("i", Expr::add(Expr::variable("i"), Expr::int(1))),
        ),
    ]);

    let mut interpreter = Interpreter::new(Vec::new());
    let result = interpreter.evaluate(&program, EnvRef::EMPTY).unwrap();
    (interpreter, result)
}

#[test]
fn test_while_drops_final_condition_bindings() {
    // Never entered: the one condition check ran, but its binding is gone
    let (interpreter, result) = counting_loop(1, 1);
    assert_eq!(result.value, Value::Unit);
    assert_eq!(interpreter.lookup(result.env, "c").unwrap().value, Value::Integer(0));

    // Entered once: the second, false check is dropped
    let (interpreter, result) = counting_loop(0, 1);
    assert_eq!(result.value, Value::Integer(1));
    assert_eq!(interpreter.lookup(result.env, "i").unwrap().value, Value::Integer(1));
    assert_eq!(interpreter.lookup(result.env, "c").unwrap().value, Value::Integer(1));
}

#[test]
fn test_while_requires_boolean_condition() {
    assert_eq!(
        error_of(Expr::while_loop(Expr::int(1), Expr::unit())),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn test_sequence() {
    assert_eq!(value_of(Expr::Sequence(vec![])), Value::Unit);
    assert_eq!(
        value_of(Expr::Sequence(vec![Expr::int(1), Expr::string("last")])),
        Value::string("last")
    );
}

#[test]
fn test_error_aborts_sequence() {
    let mut interpreter = Interpreter::new(Vec::new());
    let program = Expr::Program(vec![
        Expr::print(Expr::int(1)),
        Expr::variable("nope"),
        Expr::print(Expr::int(2)),
    ]);

    let error = interpreter.evaluate(&program, EnvRef::EMPTY).unwrap_err();
    let (_, output) = interpreter.into_parts();

    assert_eq!(error.kind(), ErrorKind::UnboundName);
    assert_eq!(String::from_utf8(output).unwrap(), "1\n");
}

// PRINT

#[test]
fn test_print_passes_value_through() {
    let result = evaluate(&Expr::print(Expr::float(2.0))).unwrap();
    assert_eq!(result.value, Value::FloatingPoint(2.0));
    assert_eq!(result.ty(), Type::FloatingPoint);
}

#[test]
fn test_print_renderings() {
    let program = Expr::Program(vec![
        Expr::print(Expr::unit()),
        Expr::print(Expr::int(-12)),
        Expr::print(Expr::float(0.5)),
        Expr::print(Expr::float(3.0)),
        Expr::print(Expr::string("text with spaces")),
        Expr::print(Expr::boolean(true)),
    ]);
    assert_eq!(
        output_of(&program),
        "Unit\n-12\n0.5\n3.0\ntext with spaces\ntrue\n"
    );
}

// DRIVER

fn counter_program() -> Expr {
    Expr::Program(vec![
        Expr::assign("x", Expr::int(0)),
        Expr::while_loop(
            Expr::lt(Expr::variable("x"), Expr::int(3)),
            Expr::assign("x", Expr::add(Expr::variable("x"), Expr::int(1))),
        ),
    ])
}

#[test]
fn test_run_counter_program() {
    let mut output = Vec::new();
    let result = run(&counter_program(), false, &mut output).unwrap();

    assert_eq!(result.lookup("x").unwrap().value, Value::Integer(3));
    assert_eq!(result.value, Value::Integer(3));
    assert_eq!(result.ty, Type::Integer);
    assert!(output.is_empty());
}

#[test]
fn test_run_debug_dump() {
    let program = Expr::Program(vec![
        Expr::assign("x", Expr::int(1)),
        Expr::assign("y", Expr::string("a")),
    ]);
    let mut output = Vec::new();
    run(&program, true, &mut output).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "program: Program(Assign(x, Integer(1)), Assign(y, String(\"a\")))\n\
         final_value: (a, String)\n\
         final_state: y: (a, String), x: (1, Integer)\n"
    );
}

#[test]
fn test_run_empty_program() {
    let mut output = Vec::new();
    let result = run(&Expr::Program(vec![]), true, &mut output).unwrap();

    assert_eq!(result.value, Value::Unit);
    assert_eq!(result.env, EnvRef::EMPTY);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "program: Program()\nfinal_value: (Unit, Unit)\nfinal_state: \n"
    );
}

#[test]
fn test_run_propagates_errors_without_dump() {
    let mut output = Vec::new();
    let program = Expr::Program(vec![Expr::divide(Expr::int(1), Expr::int(0))]);
    let error = run(&program, true, &mut output).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::DivideByZero);
    assert!(output.is_empty());
}
