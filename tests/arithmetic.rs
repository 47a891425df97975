/*
 * Integer arithmetic, precedence and parentheses.
 */

#[macro_use]
mod cases;

test_case! { name: addition, input: "12 + 30", value: "42" }
test_case! { name: subtraction, input: "7 - 10", value: "-3" }
test_case! { name: multiplication, input: "6 * 7", value: "42" }
test_case! { name: exact_division, input: "9 / 3", value: "3" }

test_case! { name: real_division, input: "10 / 4", value: "2.5" }
// Division is not truncated

test_case! { name: repeating_division, input: "1 / 3", value: "0.3333333333333333" }

test_case! { name: subtraction_is_left_associative, input: "10 - 4 - 3", value: "3" }
test_case! { name: division_is_left_associative, input: "100 / 10 / 5", value: "2" }

test_case! { name: multiplication_binds_tighter, input: "2+3*4", value: "14" }
test_case! { name: division_binds_tighter, input: "2+9/3", value: "5" }
test_case! { name: parentheses_override_precedence, input: "2*(3+4)", value: "14" }
test_case! { name: nested_parentheses, input: "((2 + 3) * (4 - 1)) / 5", value: "3" }

test_case! { name: whitespace_and_comments, input: "  1 +\n 2 // three\n", value: "3" }

test_case! {
    name: division_by_zero,
    input: "1 / (2 - 2)",
    error: DivisionByZero,
    message: "Division by zero",
}

test_case! {
    name: integer_literal_too_large,
    input: "99999999999999999999",
    error: Parse,
    message: "Invalid number literal '99999999999999999999'",
}

test_case! { name: largest_exact_literal, input: "9007199254740992 - 1", value: "9007199254740991" }

test_case! {
    name: inexact_literal_is_rejected,
    input: "9007199254740993 + 0",
    error: Parse,
    message: "Invalid number literal '9007199254740993'",
}

#[test]
fn arithmetic_matches_real_arithmetic() {
    let pairs = [(0, 1), (3, 4), (-5, 2), (17, -3), (1000, 7), (-8, -8)];
    let mut kal = cases::session(&[]);
    for (a, b) in pairs {
        // Negative numbers are written as subtractions from zero.
        let lit = |n: i64| if n < 0 { format!("(0 - {})", -n) } else { n.to_string() };
        let (la, lb) = (lit(a), lit(b));

        let eval = |kal: &mut kallipolis::Interpreter, op: &str| {
            kal.evaluate(&format!("{} {} {}", la, op, lb))
                .unwrap()
                .and_then(|v| v.as_number())
                .unwrap()
        };
        assert_eq!(eval(&mut kal, "+"), (a + b) as f64);
        assert_eq!(eval(&mut kal, "-"), (a - b) as f64);
        assert_eq!(eval(&mut kal, "*"), (a * b) as f64);
        assert_eq!(eval(&mut kal, "/"), a as f64 / b as f64);
    }
}
