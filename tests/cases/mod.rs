use keypad::{Engine, Error};

/// Code of the first diagnostic attached to `err`, if any.
pub fn error_code(err: &Error) -> Option<&str> {
    match err {
        Error::Compilation { diagnostics, .. } => {
            diagnostics.first().and_then(|d| d.code.as_deref())
        }
        Error::Runtime { diagnostic, .. } => diagnostic.code.as_deref(),
        Error::ResourceExceeded(_) | Error::Format(_) => None,
    }
}

pub fn engine() -> Engine {
    Engine::default()
}

/// Declares one evaluation test.
///
/// - `display:` the formatted result for `input`.
/// - `error:` the diagnostic code `input` fails with.
/// - `blank` asserts that nothing is left to evaluate.
macro_rules! test_case {
    ($name:ident, input: $input:expr, display: $display:expr $(,)?) => {
        #[test]
        fn $name() {
            let evaluation = cases::engine()
                .evaluate($input)
                .unwrap_or_else(|e| panic!("{:?} failed: {}", $input, e))
                .unwrap_or_else(|| panic!("{:?} had nothing to evaluate", $input));
            pretty_assertions::assert_eq!(evaluation.display, $display);
        }
    };
    ($name:ident, input: $input:expr, error: $code:expr $(,)?) => {
        #[test]
        fn $name() {
            match cases::engine().evaluate($input) {
                Err(e) => pretty_assertions::assert_eq!(cases::error_code(&e), Some($code)),
                Ok(result) => panic!("expected {} for {:?}, got {:?}", $code, $input, result),
            }
        }
    };
    ($name:ident, input: $input:expr, blank $(,)?) => {
        #[test]
        fn $name() {
            let result = cases::engine().evaluate($input);
            assert!(matches!(result, Ok(None)), "{:?}: {:?}", $input, result);
        }
    };
}
