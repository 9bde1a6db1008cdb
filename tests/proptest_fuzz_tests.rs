//! Property-based tests for the minihs tokenizer, loader and evaluator
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. Tokenizing, loading and evaluating never panic on arbitrary input
//! 2. Well-formed programs compute the expected values

use minihs::{tokenize, InterpreterConfig, Session, Value};
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Generate random strings that might break the scanner
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E\n]{0,200}").unwrap()
}

/// Generate expression-like text out of language fragments
fn expression_like_string() -> impl Strategy<Value = String> {
    prop::collection::vec(expression_token(), 0..30).prop_map(|tokens| tokens.join(" "))
}

fn expression_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just("[".to_string()),
        Just("]".to_string()),
        Just(",".to_string()),
        Just(":".to_string()),
        Just("=".to_string()),
        Just("==".to_string()),
        Just("/=".to_string()),
        Just("+".to_string()),
        Just("-".to_string()),
        Just("*".to_string()),
        Just("/".to_string()),
        Just("<".to_string()),
        Just("map".to_string()),
        Just("filter".to_string()),
        Just("fold".to_string()),
        Just("head".to_string()),
        Just("tail".to_string()),
        Just("x".to_string()),
        Just("True".to_string()),
        Just("\"s\"".to_string()),
        (-1000i64..1000i64).prop_map(|n| n.to_string()),
        (0.0f64..100.0f64).prop_map(|f| format!("{:.2}", f)),
    ]
}

fn small_session() -> Session {
    Session::with_config(InterpreterConfig {
        max_depth: 64,
        ..InterpreterConfig::default()
    })
}

// =============================================================================
// NEVER-PANIC PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn tokenizer_never_panics(source in arbitrary_source_string()) {
        let _ = tokenize(&source);
    }

    #[test]
    fn evaluation_never_panics(source in expression_like_string()) {
        let session = small_session();
        let _ = session.evaluate(&source);
    }

    #[test]
    fn load_never_panics(lines in prop::collection::vec(expression_like_string(), 0..8)) {
        let mut session = small_session();
        let outcome = session.load(&lines.join("\n"));
        prop_assert_eq!(outcome.ok, outcome.error_message.is_none());
    }

    #[test]
    fn token_offsets_increase(source in arbitrary_source_string()) {
        let tokens = tokenize(&source);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].offset < pair[1].offset);
        }
    }
}

// =============================================================================
// SEMANTIC PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn factorial_matches_product(n in 0u32..12) {
        let mut session = small_session();
        session.load("factorial 0 = 1\nfactorial n = n * factorial (n - 1)");
        let expected: f64 = (1..=n).map(f64::from).product();
        prop_assert_eq!(
            session.evaluate(&format!("factorial {}", n)).unwrap(),
            Value::Number(expected)
        );
    }

    #[test]
    fn cons_round_trip(items in prop::collection::vec(-50i32..50, 1..10)) {
        let mut session = small_session();
        session.load("rebuild (x:xs) = x:xs");
        let literal = format!(
            "[{}]",
            items.iter().map(i32::to_string).collect::<Vec<_>>().join(", ")
        );
        let expected = Value::List(items.iter().map(|i| Value::Number(f64::from(*i))).collect());
        prop_assert_eq!(session.evaluate(&format!("rebuild {}", literal)).unwrap(), expected);
    }

    #[test]
    fn fold_sum_matches(items in prop::collection::vec(0i32..100, 0..20)) {
        let session = small_session();
        let literal = format!(
            "[{}]",
            items.iter().map(i32::to_string).collect::<Vec<_>>().join(", ")
        );
        let expected: i32 = items.iter().sum();
        prop_assert_eq!(
            session.evaluate(&format!("fold (+) 0 {}", literal)).unwrap(),
            Value::Number(f64::from(expected))
        );
    }

    #[test]
    fn map_preserves_length(items in prop::collection::vec(-20i32..20, 0..20)) {
        let session = small_session();
        let literal = format!(
            "[{}]",
            items.iter().map(i32::to_string).collect::<Vec<_>>().join(", ")
        );
        let result = session.evaluate(&format!("map (*3) {}", literal)).unwrap();
        prop_assert_eq!(result.as_list().unwrap().len(), items.len());
    }
}
