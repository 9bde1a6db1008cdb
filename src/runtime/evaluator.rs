use crate::config::InterpreterConfig;
use crate::error::{Error, Result};
use crate::parser::{parse_expression, BinaryOp, Clause, Expression, Literal, Section};
use crate::runtime::pattern_matcher::match_clause;
use crate::runtime::{Bindings, Callable, DefinitionStore, Environment, Value};
use crate::tools::ToolRegistry;
use std::cell::Cell;
use std::sync::Arc;

/// Names of the builtins that call back into the evaluator
const HIGHER_ORDER_BUILTINS: [&str; 3] = ["map", "filter", "fold"];

/// Remaining stack below which evaluation moves to a fresh segment
const STACK_RED_ZONE: usize = 128 * 1024;
/// Size of each additional stack segment
const STACK_GROW_SIZE: usize = 4 * 1024 * 1024;

/// Tree-walking evaluator over the loaded definitions
///
/// Holds the user function clauses, the top-level variables and the
/// builtin registry. Clause bodies are evaluated against the binding set of
/// the clause that matched, so parameter names never leak into other frames.
pub struct Interpreter {
    /// User-defined functions
    store: DefinitionStore,
    /// Top-level variables
    env: Environment,
    /// First-order builtins
    registry: Arc<ToolRegistry>,
    /// Limits and comment syntax
    config: InterpreterConfig,
    /// Current nesting of user function applications
    depth: Cell<usize>,
}

impl Interpreter {
    /// Creates an interpreter with the standard builtins
    pub fn new(config: InterpreterConfig) -> Self {
        Self::with_registry(config, Arc::new(ToolRegistry::new()))
    }

    /// Creates an interpreter sharing an existing builtin registry
    pub fn with_registry(config: InterpreterConfig, registry: Arc<ToolRegistry>) -> Self {
        Interpreter {
            store: DefinitionStore::new(),
            env: Environment::new(),
            registry,
            config,
            depth: Cell::new(0),
        }
    }

    pub fn store(&self) -> &DefinitionStore {
        &self.store
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Stores the clauses of a user function, returning the ones replaced
    pub fn define_function(&mut self, name: String, clauses: Vec<Clause>) -> Option<Vec<Clause>> {
        self.store.insert(name, clauses)
    }

    /// Binds a top-level variable once
    pub fn define_variable(&mut self, name: String, value: Value) -> Result<()> {
        self.env.define(name, value)
    }

    /// Parses and evaluates one expression against the top-level state
    pub fn evaluate(&self, text: &str) -> Result<Value> {
        let expr = parse_expression(text)?;
        self.eval(&expr, &Bindings::new())
    }

    /// Evaluates an expression tree
    ///
    /// `frame` holds the parameter bindings of the clause being evaluated;
    /// they shadow top-level variables and function names.
    ///
    /// The stack grows on demand, so nesting is bounded by `max_depth`
    /// rather than by the size of the calling thread's stack.
    pub fn eval(&self, expr: &Expression, frame: &Bindings) -> Result<Value> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
            self.eval_inner(expr, frame)
        })
    }

    fn eval_inner(&self, expr: &Expression, frame: &Bindings) -> Result<Value> {
        match expr {
            Expression::Literal(Literal::Number(n)) => Ok(Value::Number(*n)),
            Expression::Literal(Literal::String(s)) => Ok(Value::String(s.clone())),
            Expression::Literal(Literal::Bool(b)) => Ok(Value::Bool(*b)),

            Expression::ListLiteral(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    values.push(self.eval(item, frame)?);
                }
                Ok(Value::List(values))
            }

            Expression::Variable(name) => self.lookup(name, frame),

            Expression::Binary { op, left, right } => {
                let left_val = self.eval(left, frame)?;
                let right_val = self.eval(right, frame)?;
                apply_operator(*op, left_val, right_val)
            }

            Expression::Section(section) => {
                let callable = match section {
                    Section::Bare(op) => Callable::Operator(*op),
                    Section::Left { op, operand } => Callable::LeftSection {
                        op: *op,
                        operand: Box::new(self.eval(operand, frame)?),
                    },
                    Section::Right { op, operand } => Callable::RightSection {
                        op: *op,
                        operand: Box::new(self.eval(operand, frame)?),
                    },
                };
                Ok(Value::Function(callable))
            }

            Expression::Application { name, args } => {
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval(arg, frame)?);
                }

                match frame.get(name).or_else(|| self.env.get(name)) {
                    Some(Value::Function(callable)) => self.call(callable, values),
                    Some(other) => Err(Error::type_error("function", other.type_name())),
                    None => self.apply(name, values),
                }
            }
        }
    }

    fn lookup(&self, name: &str, frame: &Bindings) -> Result<Value> {
        if let Some(value) = frame.get(name).or_else(|| self.env.get(name)) {
            return Ok(value.clone());
        }
        if self.is_function(name) {
            return Ok(Value::Function(Callable::Named(name.to_string())));
        }
        Err(Error::UndefinedVariable {
            name: name.to_string(),
        })
    }

    /// Checks if `name` can be applied as a builtin or user function
    pub fn is_function(&self, name: &str) -> bool {
        HIGHER_ORDER_BUILTINS.contains(&name)
            || self.registry.has(name)
            || self.store.contains(name)
    }

    /// Applies a function by name
    ///
    /// Builtins are resolved before user-defined functions.
    pub fn apply(&self, name: &str, args: Vec<Value>) -> Result<Value> {
        match name {
            "map" => return self.eval_map(&args),
            "filter" => return self.eval_filter(&args),
            "fold" => return self.eval_fold(&args),
            _ => {}
        }

        if self.registry.has(name) {
            return self.registry.call(name, &args);
        }

        match self.store.get(name) {
            Some(clauses) => self.apply_clauses(name, clauses, &args),
            None => Err(Error::UndefinedFunction {
                name: name.to_string(),
            }),
        }
    }

    fn apply_clauses(&self, name: &str, clauses: &[Clause], args: &[Value]) -> Result<Value> {
        let depth = self.depth.get() + 1;
        if depth > self.config.max_depth {
            return Err(Error::RecursionLimit {
                limit: self.config.max_depth,
            });
        }

        self.depth.set(depth);
        let result = self.select_clause(name, clauses, args);
        self.depth.set(depth - 1);
        result
    }

    fn select_clause(&self, name: &str, clauses: &[Clause], args: &[Value]) -> Result<Value> {
        for (index, clause) in clauses.iter().enumerate() {
            if let Some(bindings) = match_clause(clause, args) {
                tracing::trace!(
                    function = name,
                    arity = args.len(),
                    clause = index,
                    depth = self.depth.get(),
                    "clause matched"
                );
                return self.eval(&clause.body, &bindings);
            }
        }

        Err(Error::NoClauseMatched {
            function: name.to_string(),
            arguments: args.iter().map(Value::to_string).collect(),
        })
    }

    /// Applies a function value to arguments
    pub fn call(&self, callable: &Callable, args: Vec<Value>) -> Result<Value> {
        match callable {
            Callable::Named(name) => self.apply(name, args),
            Callable::Operator(op) => {
                let got = args.len();
                let mut args = args.into_iter();
                match (args.next(), args.next(), args.next()) {
                    (Some(left), Some(right), None) => apply_operator(*op, left, right),
                    _ => Err(section_arity(callable, 2, got)),
                }
            }
            Callable::LeftSection { op, operand } => {
                let arg = single_argument(callable, args)?;
                apply_operator(*op, (**operand).clone(), arg)
            }
            Callable::RightSection { op, operand } => {
                let arg = single_argument(callable, args)?;
                apply_operator(*op, arg, (**operand).clone())
            }
        }
    }

    /// `map f list`
    fn eval_map(&self, args: &[Value]) -> Result<Value> {
        check_builtin_arity("map", 2, args)?;
        let func = args[0].as_callable()?;
        let items = args[1].as_list()?;

        let mut results = Vec::with_capacity(items.len());
        for item in items {
            results.push(self.call(func, vec![item.clone()])?);
        }
        Ok(Value::List(results))
    }

    /// `filter predicate list`, keeping elements whose result is truthy
    fn eval_filter(&self, args: &[Value]) -> Result<Value> {
        check_builtin_arity("filter", 2, args)?;
        let func = args[0].as_callable()?;
        let items = args[1].as_list()?;

        let mut kept = Vec::new();
        for item in items {
            if self.call(func, vec![item.clone()])?.is_truthy() {
                kept.push(item.clone());
            }
        }
        Ok(Value::List(kept))
    }

    /// `fold f initial list`, threading the accumulator left to right
    fn eval_fold(&self, args: &[Value]) -> Result<Value> {
        check_builtin_arity("fold", 3, args)?;
        let func = args[0].as_callable()?;
        let items = args[2].as_list()?;

        let mut acc = args[1].clone();
        for item in items {
            acc = self.call(func, vec![acc, item.clone()])?;
        }
        Ok(acc)
    }
}

fn check_builtin_arity(function: &str, expected: usize, args: &[Value]) -> Result<()> {
    if args.len() != expected {
        return Err(Error::PatternArityMismatch {
            function: function.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn section_arity(callable: &Callable, expected: usize, got: usize) -> Error {
    Error::PatternArityMismatch {
        function: callable.to_string(),
        expected,
        got,
    }
}

fn single_argument(callable: &Callable, args: Vec<Value>) -> Result<Value> {
    let got = args.len();
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(arg), None) => Ok(arg),
        _ => Err(section_arity(callable, 1, got)),
    }
}

/// Applies a binary operator to evaluated operands
pub fn apply_operator(op: BinaryOp, left: Value, right: Value) -> Result<Value> {
    match op {
        BinaryOp::Add => arithmetic(left, right, |a, b| a + b),
        BinaryOp::Sub => arithmetic(left, right, |a, b| a - b),
        BinaryOp::Mul => arithmetic(left, right, |a, b| a * b),
        BinaryOp::Div => arithmetic(left, right, |a, b| a / b),

        BinaryOp::Lt => compare(op, &left, &right),
        BinaryOp::Gt => compare(op, &left, &right),
        BinaryOp::LtEq => compare(op, &left, &right),
        BinaryOp::GtEq => compare(op, &left, &right),

        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),

        BinaryOp::Cons => {
            let mut items = vec![left];
            match right {
                Value::List(rest) => items.extend(rest),
                other => items.push(other),
            }
            Ok(Value::List(items))
        }
    }
}

fn arithmetic(left: Value, right: Value, f: impl Fn(f64, f64) -> f64) -> Result<Value> {
    Ok(Value::Number(f(left.as_number()?, right.as_number()?)))
}

fn compare(op: BinaryOp, left: &Value, right: &Value) -> Result<Value> {
    let ordering = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Number(_), other) => {
            return Err(Error::type_error("number", other.type_name()));
        }
        (Value::String(_), other) => {
            return Err(Error::type_error("string", other.type_name()));
        }
        (other, _) => {
            return Err(Error::type_error("number or string", other.type_name()));
        }
    };

    // NaN compares false with everything
    let result = match ordering {
        Some(ord) => match op {
            BinaryOp::Lt => ord.is_lt(),
            BinaryOp::Gt => ord.is_gt(),
            BinaryOp::LtEq => ord.is_le(),
            BinaryOp::GtEq => ord.is_ge(),
            _ => false,
        },
        None => false,
    };
    Ok(Value::Bool(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Pattern;

    fn n(x: f64) -> Value {
        Value::Number(x)
    }

    fn numbers(ns: &[f64]) -> Value {
        Value::List(ns.iter().map(|x| Value::Number(*x)).collect())
    }

    fn interpreter_with(defs: &[(&str, &str, &str)]) -> Interpreter {
        let mut interp = Interpreter::new(InterpreterConfig {
            max_depth: 50,
            ..InterpreterConfig::default()
        });
        let mut grouped: Vec<(String, Vec<Clause>)> = Vec::new();
        for (name, params, body) in defs {
            let clause = Clause {
                params: crate::parser::parse_patterns(params).unwrap(),
                body: parse_expression(body).unwrap(),
            };
            match grouped.last_mut() {
                Some((last, clauses)) if last == name => clauses.push(clause),
                _ => grouped.push((name.to_string(), vec![clause])),
            }
        }
        for (name, clauses) in grouped {
            interp.define_function(name, clauses);
        }
        interp
    }

    #[test]
    fn test_operator_order_is_split_order() {
        let interp = interpreter_with(&[]);
        assert_eq!(interp.evaluate("2 * 3 + 1").unwrap(), n(7.0));
        assert_eq!(interp.evaluate("10 - 2 - 3").unwrap(), n(11.0));
        assert_eq!(interp.evaluate("(1 + 2) == 3").unwrap(), Value::Bool(true));
        // `+` splits first, leaving `1 + (2 == 3)`
        assert!(matches!(
            interp.evaluate("1 + 2 == 3"),
            Err(Error::TypeError { .. })
        ));
    }

    #[test]
    fn test_arithmetic_and_comparison() {
        let interp = interpreter_with(&[]);
        assert_eq!(interp.evaluate("7 / 2").unwrap(), n(3.5));
        assert_eq!(interp.evaluate("3 <= 3").unwrap(), Value::Bool(true));
        assert_eq!(interp.evaluate("\"a\" < \"b\"").unwrap(), Value::Bool(true));
        assert_eq!(interp.evaluate("[1, 2] == [1, 2]").unwrap(), Value::Bool(true));
        assert_eq!(interp.evaluate("1 /= 2").unwrap(), Value::Bool(true));
        assert!(matches!(
            interp.evaluate("True < 1"),
            Err(Error::TypeError { .. })
        ));
        assert!(matches!(
            interp.evaluate("1 + True"),
            Err(Error::TypeError { .. })
        ));
    }

    #[test]
    fn test_cons_wraps_non_list() {
        let interp = interpreter_with(&[]);
        assert_eq!(interp.evaluate("1 : [2, 3]").unwrap(), numbers(&[1.0, 2.0, 3.0]));
        assert_eq!(interp.evaluate("1 : 2").unwrap(), numbers(&[1.0, 2.0]));
        assert_eq!(interp.evaluate("1 : []").unwrap(), numbers(&[1.0]));
    }

    #[test]
    fn test_factorial() {
        let interp = interpreter_with(&[
            ("factorial", "0", "1"),
            ("factorial", "n", "n * factorial (n - 1)"),
        ]);
        assert_eq!(interp.evaluate("factorial 5").unwrap(), n(120.0));
        assert_eq!(interp.apply("factorial", vec![n(0.0)]).unwrap(), n(1.0));
    }

    #[test]
    fn test_clause_order_decides() {
        let interp = interpreter_with(&[("f", "x", "1"), ("f", "0", "2")]);
        assert_eq!(interp.evaluate("f 0").unwrap(), n(1.0));
    }

    #[test]
    fn test_no_clause_matched_reports_arguments() {
        let interp = interpreter_with(&[("f", "[]", "0")]);
        assert_eq!(
            interp.evaluate("f [1]"),
            Err(Error::NoClauseMatched {
                function: "f".to_string(),
                arguments: vec!["[1]".to_string()],
            })
        );
        assert!(matches!(
            interp.evaluate("f [] []"),
            Err(Error::NoClauseMatched { .. })
        ));
    }

    #[test]
    fn test_higher_order_builtins() {
        let interp = interpreter_with(&[("double", "x", "x * 2")]);
        assert_eq!(interp.evaluate("map double [1, 2, 3]").unwrap(), numbers(&[2.0, 4.0, 6.0]));
        assert_eq!(interp.evaluate("filter (<3) [1, 2, 3, 4]").unwrap(), numbers(&[1.0, 2.0]));
        assert_eq!(interp.evaluate("map (10-) [1, 2]").unwrap(), numbers(&[9.0, 8.0]));
        assert_eq!(interp.evaluate("fold (*) 1 [1, 2, 3, 4]").unwrap(), n(24.0));
        assert_eq!(interp.evaluate("fold (+) 0 []").unwrap(), n(0.0));
        assert_eq!(interp.evaluate("map head [[1, 2], [3]]").unwrap(), numbers(&[1.0, 3.0]));
    }

    #[test]
    fn test_higher_order_builtins_reject_non_lists() {
        let interp = interpreter_with(&[("double", "x", "x * 2")]);
        for text in ["map double 3", "filter double 3", "fold (+) 0 3"] {
            assert!(matches!(interp.evaluate(text), Err(Error::TypeError { .. })));
        }
        assert!(matches!(
            interp.evaluate("map 3 [1]"),
            Err(Error::TypeError { .. })
        ));
    }

    #[test]
    fn test_local_function_parameter() {
        let interp = interpreter_with(&[("twice", "f x", "f (f x)"), ("inc", "x", "x + 1")]);
        assert_eq!(interp.evaluate("twice inc 5").unwrap(), n(7.0));
        assert_eq!(interp.evaluate("twice (*2) 3").unwrap(), n(12.0));
    }

    #[test]
    fn test_applying_non_function_local() {
        let interp = interpreter_with(&[("g", "f", "f 1")]);
        assert!(matches!(
            interp.evaluate("g 3"),
            Err(Error::TypeError { .. })
        ));
    }

    #[test]
    fn test_recursion_limit() {
        let interp = interpreter_with(&[("loop", "x", "loop x")]);
        assert_eq!(
            interp.evaluate("loop 1"),
            Err(Error::RecursionLimit { limit: 50 })
        );
        // depth is restored after the failure
        assert_eq!(interp.depth.get(), 0);
    }

    #[test]
    fn test_undefined_names() {
        let interp = interpreter_with(&[]);
        assert!(matches!(
            interp.evaluate("nope 1"),
            Err(Error::UndefinedFunction { .. })
        ));
        assert!(matches!(
            interp.evaluate("nope"),
            Err(Error::UndefinedVariable { .. })
        ));
    }

    #[test]
    fn test_builtins_shadow_user_functions() {
        let mut interp = interpreter_with(&[]);
        interp.define_function(
            "head".to_string(),
            vec![Clause {
                params: vec![Pattern::Wildcard],
                body: Expression::Literal(Literal::Number(99.0)),
            }],
        );
        assert_eq!(interp.evaluate("head [1]").unwrap(), n(1.0));
    }

    #[test]
    fn test_variables() {
        let mut interp = interpreter_with(&[]);
        interp.define_variable("x".to_string(), n(4.0)).unwrap();
        assert_eq!(interp.evaluate("x * x").unwrap(), n(16.0));
        assert!(interp.define_variable("x".to_string(), n(5.0)).is_err());
    }
}
