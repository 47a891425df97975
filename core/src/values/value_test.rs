use crate::parser::BinaryOp;
use crate::values::{Value, ValueError, ValueKind};

#[test]
fn test_int_arithmetic() {
    let (a, b) = (Value::int(7), Value::int(2));
    assert_eq!(a.plus(&b), Ok(Value::int(9)));
    assert_eq!(a.minus(&b), Ok(Value::int(5)));
    assert_eq!(a.times(&b), Ok(Value::int(14)));
    assert_eq!(a.divide(&b), Ok(Value::number(3.5)));
}

#[test]
fn test_int_division_is_not_truncated() {
    let result = Value::int(2).divide(&Value::int(9)).unwrap();
    assert_eq!(result.as_number(), Some(2.0 / 9.0));
    assert_eq!(result.as_int(), None);

    let whole = Value::int(9).divide(&Value::int(3)).unwrap();
    assert_eq!(whole.as_int(), Some(3));
}

#[test]
fn test_int_division_by_zero() {
    assert_eq!(
        Value::int(1).divide(&Value::int(0)),
        Err(ValueError::DivisionByZero)
    );
}

#[test]
fn test_operands_are_not_mutated() {
    let a = Value::string("abc");
    let b = Value::string("b");
    let _ = a.minus(&b).unwrap();
    assert_eq!(a, Value::string("abc"));
    assert_eq!(b, Value::string("b"));
}

#[test]
fn test_string_plus_accepts_strings_and_ints() {
    let s = Value::string("n=");
    assert_eq!(s.plus(&Value::string("x")), Ok(Value::string("n=x")));
    assert_eq!(s.plus(&Value::int(4)), Ok(Value::string("n=4")));
}

#[test]
fn test_int_plus_string_renders_the_int() {
    assert_eq!(
        Value::int(12).plus(&Value::string("px")),
        Ok(Value::string("12px"))
    );
}

#[test]
fn test_string_minus_removes_first_occurrence() {
    assert_eq!(
        Value::string("banana").minus(&Value::string("an")),
        Ok(Value::string("bana"))
    );
    assert_eq!(
        Value::string("abc").minus(&Value::string("z")),
        Ok(Value::string("abc"))
    );
}

#[test]
fn test_string_minus_requires_string() {
    assert_eq!(
        Value::string("abc").minus(&Value::int(1)),
        Err(ValueError::TypeMismatch {
            op: BinaryOp::Sub,
            left: ValueKind::Str,
            right: ValueKind::Int,
        })
    );
}

#[test]
fn test_string_repetition() {
    let s = Value::string("ab");
    assert_eq!(s.times(&Value::int(3)), Ok(Value::string("ababab")));
    assert_eq!(s.times(&Value::int(0)), Ok(Value::string("")));
}

#[test]
fn test_string_repetition_rejects_bad_counts() {
    let s = Value::string("ab");
    assert_eq!(
        s.times(&Value::int(-1)),
        Err(ValueError::InvalidRepetition {
            count: "-1".to_string()
        })
    );
    assert_eq!(
        s.times(&Value::number(1.5)),
        Err(ValueError::InvalidRepetition {
            count: "1.5".to_string()
        })
    );
}

#[test]
fn test_string_repetition_is_length_limited() {
    let s = Value::string("ab");
    assert_eq!(
        s.times(&Value::int(5_000_000_000_000_000_000)),
        Err(ValueError::InvalidRepetition {
            count: "5000000000000000000".to_string()
        })
    );
    let limit = (Value::MAX_STRING_LEN / 2) as i64;
    assert!(matches!(
        s.times(&Value::int(limit + 1)),
        Err(ValueError::InvalidRepetition { .. })
    ));
    assert_eq!(
        Value::string("").times(&Value::int(5_000_000_000_000_000_000)),
        Ok(Value::string(""))
    );
}

#[test]
fn test_as_int_range() {
    assert_eq!(Value::number(9007199254740992.0).as_int(), Some(1 << 53));
    assert_eq!(Value::number(9223372036854775808.0).as_int(), None);
}

#[test]
fn test_int_times_requires_int() {
    assert_eq!(
        Value::int(3).times(&Value::string("ab")),
        Err(ValueError::TypeMismatch {
            op: BinaryOp::Mul,
            left: ValueKind::Int,
            right: ValueKind::Str,
        })
    );
}

#[test]
fn test_string_division_is_identity() {
    let s = Value::string("abc");
    assert_eq!(s.divide(&Value::string("b")), Ok(s.clone()));
    assert_eq!(s.divide(&Value::int(2)), Ok(s.clone()));
}

#[test]
fn test_apply_dispatches_on_operator() {
    let (a, b) = (Value::int(10), Value::int(4));
    assert_eq!(a.apply(BinaryOp::Add, &b), Ok(Value::int(14)));
    assert_eq!(a.apply(BinaryOp::Sub, &b), Ok(Value::int(6)));
    assert_eq!(a.apply(BinaryOp::Mul, &b), Ok(Value::int(40)));
    assert_eq!(a.apply(BinaryOp::Div, &b), Ok(Value::number(2.5)));
}

#[test]
fn test_kinds() {
    assert_eq!(Value::int(1).kind(), ValueKind::Int);
    assert_eq!(Value::string("").kind(), ValueKind::Str);
    assert_eq!(ValueKind::Str.name(), "String");
}
