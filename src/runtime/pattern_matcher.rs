use crate::parser::{Clause, Pattern};
use crate::runtime::{Bindings, Value};

/// Matches one parameter pattern against an argument value
///
/// Returns the names the pattern binds, or `None` when it does not match.
pub fn match_pattern(pattern: &Pattern, value: &Value) -> Option<Bindings> {
    let mut bindings = Bindings::new();

    match pattern {
        Pattern::EmptyList => match value {
            Value::List(items) if items.is_empty() => {}
            _ => return None,
        },
        Pattern::Cons { head, tail } => match value {
            Value::List(items) if !items.is_empty() => {
                bind(&mut bindings, head, items[0].clone());
                bind(&mut bindings, tail, Value::List(items[1..].to_vec()));
            }
            _ => return None,
        },
        Pattern::ListDestructure(names) => match value {
            Value::List(items) if items.len() == names.len() => {
                for (name, item) in names.iter().zip(items) {
                    bind(&mut bindings, name, item.clone());
                }
            }
            _ => return None,
        },
        Pattern::Variable(name) => bind(&mut bindings, name, value.clone()),
        Pattern::Wildcard => {}
        Pattern::Literal(expected) => {
            if expected != value {
                return None;
            }
        }
    }

    Some(bindings)
}

/// Matches every parameter of `clause` against `args`, position by position
///
/// A clause with a different parameter count never matches. Bindings from
/// later positions overwrite same-named earlier ones.
pub fn match_clause(clause: &Clause, args: &[Value]) -> Option<Bindings> {
    if clause.arity() != args.len() {
        return None;
    }

    let mut bindings = Bindings::new();
    for (pattern, arg) in clause.params.iter().zip(args) {
        bindings.extend(match_pattern(pattern, arg)?);
    }
    Some(bindings)
}

fn bind(bindings: &mut Bindings, name: &str, value: Value) {
    if name != "_" {
        bindings.insert(name.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Expression, Literal};

    fn numbers(ns: &[f64]) -> Value {
        Value::List(ns.iter().map(|n| Value::Number(*n)).collect())
    }

    #[test]
    fn test_empty_list_pattern() {
        assert!(match_pattern(&Pattern::EmptyList, &numbers(&[])).is_some());
        assert!(match_pattern(&Pattern::EmptyList, &numbers(&[1.0])).is_none());
        assert!(match_pattern(&Pattern::EmptyList, &Value::Number(0.0)).is_none());
    }

    #[test]
    fn test_cons_pattern_binds_head_and_tail() {
        let pattern = Pattern::Cons {
            head: "x".to_string(),
            tail: "xs".to_string(),
        };
        let bindings = match_pattern(&pattern, &numbers(&[1.0, 2.0, 3.0])).unwrap();
        assert_eq!(bindings["x"], Value::Number(1.0));
        assert_eq!(bindings["xs"], numbers(&[2.0, 3.0]));

        let single = match_pattern(&pattern, &numbers(&[7.0])).unwrap();
        assert_eq!(single["xs"], numbers(&[]));

        assert!(match_pattern(&pattern, &numbers(&[])).is_none());
    }

    #[test]
    fn test_list_destructure_requires_exact_arity() {
        let pattern = Pattern::ListDestructure(vec!["a".to_string(), "b".to_string()]);
        let bindings = match_pattern(&pattern, &numbers(&[1.0, 2.0])).unwrap();
        assert_eq!(bindings["a"], Value::Number(1.0));
        assert_eq!(bindings["b"], Value::Number(2.0));
        assert!(match_pattern(&pattern, &numbers(&[1.0])).is_none());
        assert!(match_pattern(&pattern, &numbers(&[1.0, 2.0, 3.0])).is_none());
    }

    #[test]
    fn test_variable_and_wildcard() {
        let bindings =
            match_pattern(&Pattern::Variable("v".to_string()), &Value::Bool(true)).unwrap();
        assert_eq!(bindings["v"], Value::Bool(true));
        assert!(match_pattern(&Pattern::Wildcard, &Value::Bool(true))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_literal_pattern_uses_value_equality() {
        let zero = Pattern::Literal(Value::Number(0.0));
        assert!(match_pattern(&zero, &Value::Number(0.0)).unwrap().is_empty());
        assert!(match_pattern(&zero, &Value::Number(1.0)).is_none());
        assert!(match_pattern(&zero, &Value::Bool(false)).is_none());
    }

    #[test]
    fn test_clause_arity_mismatch_never_matches() {
        let clause = Clause {
            params: vec![
                Pattern::Variable("a".to_string()),
                Pattern::Variable("b".to_string()),
            ],
            body: Expression::Literal(Literal::Number(0.0)),
        };
        assert!(match_clause(&clause, &[Value::Number(1.0)]).is_none());
        assert!(match_clause(
            &clause,
            &[Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]
        )
        .is_none());
        let bindings = match_clause(&clause, &[Value::Number(1.0), Value::Number(2.0)]).unwrap();
        assert_eq!(bindings.len(), 2);
    }

    #[test]
    fn test_clause_fails_if_any_position_fails() {
        let clause = Clause {
            params: vec![Pattern::Variable("n".to_string()), Pattern::EmptyList],
            body: Expression::Literal(Literal::Number(0.0)),
        };
        assert!(match_clause(&clause, &[Value::Number(1.0), numbers(&[2.0])]).is_none());
    }
}
