//! Shared helpers for the end-to-end tests.

use kallipolis::Interpreter;

/// Creates a session and runs `setup` on it, in order.
pub fn session(setup: &[&str]) -> Interpreter {
    let mut kal = Interpreter::new();
    for source in setup {
        if let Err(err) = kal.evaluate(source) {
            panic!("setup {:?} failed: {}", source, err);
        }
    }
    kal
}

/// Evaluates `input` and renders the result the way the shell prints it.
pub fn evaluate(kal: &mut Interpreter, input: &str) -> Result<Option<String>, kallipolis::Error> {
    kal.evaluate(input)
        .map(|value| value.map(|value| value.to_string()))
}

/// Declares one end-to-end test.
///
/// ```ignore
/// test_case! {
///     name: addition,
///     setup: ["a = 3"],
///     input: "a + 4",
///     value: "7",
/// }
///
/// test_case! {
///     name: bad_judgment,
///     input: "b: String = 1",
///     error: TypeJudgmentMismatch,
///     message: "Type judgment failed for 'b': declared String, found Int",
/// }
/// ```
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        $(setup: [$($setup:expr),* $(,)?],)?
        input: $input:expr,
        value: $value:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let mut kal = $crate::cases::session(&[$($($setup),*)?]);
            pretty_assertions::assert_eq!(
                $crate::cases::evaluate(&mut kal, $input),
                Ok(Some(String::from($value))),
                "input: {:?}",
                $input
            );
        }
    };

    (
        name: $name:ident,
        $(setup: [$($setup:expr),* $(,)?],)?
        input: $input:expr,
        error: $kind:ident
        $(, message: $message:expr)? $(,)?
    ) => {
        #[test]
        fn $name() {
            let mut kal = $crate::cases::session(&[$($($setup),*)?]);
            let err = match kal.evaluate($input) {
                Ok(value) => panic!("{:?} should fail, got {:?}", $input, value),
                Err(err) => err,
            };
            pretty_assertions::assert_eq!(err.kind(), kallipolis::ErrorKind::$kind);
            $(pretty_assertions::assert_eq!(err.to_diagnostic().message, $message);)?
        }
    };
}
