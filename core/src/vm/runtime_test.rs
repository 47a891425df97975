use pretty_assertions::assert_eq;

use crate::api::InterpreterOptions;
use crate::parser::BinaryOp;
use crate::test_utils::init_test_logging;
use crate::types::StaticType;
use crate::values::{Value, ValueError, ValueKind};
use crate::vm::{Command, RuntimeError, VM};

fn push(n: i64) -> Command {
    Command::Push(Value::int(n))
}

fn push_str(s: &str) -> Command {
    Command::Push(Value::string(s))
}

fn read(key: &str) -> Command {
    Command::Read(key.to_string())
}

fn write(key: &str) -> Command {
    Command::Write {
        key: key.to_string(),
        declared: None,
    }
}

fn write_judged(key: &str, ty: &str) -> Command {
    Command::Write {
        key: key.to_string(),
        declared: Some(ty.to_string()),
    }
}

fn vm() -> VM {
    VM::new(&InterpreterOptions::default())
}

#[test]
fn test_empty_sequence_yields_nothing() {
    let mut vm = vm();
    assert_eq!(vm.execute(&[]), Ok(None));
}

#[test]
fn test_left_operand_is_on_top() {
    // 10 - 4: right operand pushed first.
    let mut vm = vm();
    let result = vm.execute(&[push(4), push(10), Command::Subtract]);
    assert_eq!(result, Ok(Some(Value::int(6))));

    let result = vm.execute(&[push(4), push(10), Command::Divide]);
    assert_eq!(result, Ok(Some(Value::number(2.5))));
}

#[test]
fn test_write_keeps_value_on_stack() {
    init_test_logging();
    let mut vm = vm();
    let result = vm.execute(&[push(3), write("a")]);
    assert_eq!(result, Ok(Some(Value::int(3))));
    assert_eq!(vm.variable("a"), Some(&Value::int(3)));
    assert_eq!(vm.stack_depth(), 0);
}

#[test]
fn test_read_after_write_across_executions() {
    let mut vm = vm();
    vm.execute(&[push(3), write("a")]).unwrap();
    let result = vm.execute(&[push(4), read("a"), Command::Add]);
    assert_eq!(result, Ok(Some(Value::int(7))));
    // Reading twice yields the same value.
    assert_eq!(vm.execute(&[read("a")]), Ok(Some(Value::int(3))));
    assert_eq!(vm.execute(&[read("a")]), Ok(Some(Value::int(3))));
}

#[test]
fn test_read_undefined() {
    let mut vm = vm();
    assert_eq!(
        vm.execute(&[read("ghost")]),
        Err(RuntimeError::UndefinedVariable {
            name: "ghost".to_string()
        })
    );
}

#[test]
fn test_judged_write_records_type() {
    let mut vm = vm();
    vm.execute(&[push_str("x"), write_judged("s", "String")])
        .unwrap();
    assert_eq!(vm.types().inferred_type("s"), Some(StaticType::Str));
    assert_eq!(vm.variable("s"), Some(&Value::string("x")));
}

#[test]
fn test_judged_write_checks_value() {
    let mut vm = vm();
    assert_eq!(
        vm.execute(&[push(5), write_judged("s", "String")]),
        Err(RuntimeError::JudgmentMismatch {
            name: "s".to_string(),
            declared: StaticType::Str,
            actual: StaticType::Int,
        })
    );
    assert_eq!(vm.variable("s"), None);
}

#[test]
fn test_judged_write_unknown_type() {
    let mut vm = vm();
    assert_eq!(
        vm.execute(&[push(5), write_judged("s", "Float")]),
        Err(RuntimeError::UnknownType {
            name: "Float".to_string()
        })
    );
}

#[test]
fn test_write_on_empty_stack() {
    let mut vm = vm();
    assert_eq!(
        vm.execute(&[write("a")]),
        Err(RuntimeError::StackUnderflow {
            command: "WRITE _TOP_ TO a".to_string()
        })
    );
}

#[test]
fn test_binary_underflow() {
    let mut vm = vm();
    assert!(matches!(
        vm.execute(&[push(1), Command::Add]),
        Err(RuntimeError::StackUnderflow { .. })
    ));
}

#[test]
fn test_runtime_operator_check_uses_left_table() {
    let mut vm = vm();
    // String on top (left), String below (right): `*` not in String's table.
    assert_eq!(
        vm.execute(&[push_str("b"), push_str("a"), Command::Multiply]),
        Err(RuntimeError::BinaryOperator {
            op: BinaryOp::Mul,
            left: StaticType::Str,
            right: StaticType::Str,
        })
    );
    // Int * String is in Int's table but the value operation refuses it.
    assert_eq!(
        vm.execute(&[push_str("ab"), push(3), Command::Multiply]),
        Err(RuntimeError::Value(ValueError::TypeMismatch {
            op: BinaryOp::Mul,
            left: ValueKind::Int,
            right: ValueKind::Str,
        }))
    );
}

#[test]
fn test_value_errors_propagate() {
    let mut vm = vm();
    assert_eq!(
        vm.execute(&[push(0), push(1), Command::Divide]),
        Err(RuntimeError::Value(ValueError::DivisionByZero))
    );
    assert_eq!(
        vm.execute(&[push(-2), push_str("ab"), Command::Multiply]),
        Err(RuntimeError::Value(ValueError::InvalidRepetition {
            count: "-2".to_string()
        }))
    );
}

#[test]
fn test_failure_keeps_earlier_writes() {
    let mut vm = vm();
    let result = vm.execute(&[push(1), write("a"), read("missing"), write("b")]);
    assert!(result.is_err());
    assert_eq!(vm.variable("a"), Some(&Value::int(1)));
    assert_eq!(vm.variable("b"), None);
}

#[test]
fn test_stack_overflow() {
    let options = InterpreterOptions {
        max_stack_size: 2,
        ..InterpreterOptions::default()
    };
    let mut vm = VM::new(&options);
    assert_eq!(
        vm.execute(&[push(1), push(2), push(3)]),
        Err(RuntimeError::StackOverflow { max_size: 2 })
    );
    // The stack is reset by the next execution.
    assert_eq!(vm.execute(&[push(1), push(2), Command::Add]), Ok(Some(Value::int(3))));
}

#[test]
fn test_tracing_does_not_change_results() {
    init_test_logging();
    let options = InterpreterOptions {
        trace_commands: true,
        ..InterpreterOptions::default()
    };
    let mut vm = VM::new(&options);
    assert_eq!(
        vm.execute(&[push(2), push_str("x"), Command::Add, write("s")]),
        Ok(Some(Value::string("x2")))
    );
}

#[test]
fn test_statement_boundaries_reset_the_stack() {
    let options = InterpreterOptions {
        max_stack_size: 2,
        ..InterpreterOptions::default()
    };
    let mut vm = VM::new(&options);
    let statements: Vec<Vec<Command>> = (0..5)
        .map(|n| vec![push(n), write(&format!("v{n}"))])
        .collect();
    assert_eq!(vm.execute_statements(&statements), Ok(Some(Value::int(4))));
    assert_eq!(vm.variable("v0"), Some(&Value::int(0)));
    assert_eq!(vm.stack_depth(), 0);

    // The bound still applies within one statement.
    assert_eq!(
        vm.execute_statements(&[vec![push(1)], vec![push(1), push(2), push(3)]]),
        Err(RuntimeError::StackOverflow { max_size: 2 })
    );
}

#[test]
fn test_no_statements_yield_nothing() {
    let mut vm = vm();
    assert_eq!(vm.execute_statements(&[]), Ok(None));
}
