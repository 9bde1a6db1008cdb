use serde::{Deserialize, Serialize};
use std::fmt;

use crate::runtime::Value;

/// Expressions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Number, string or boolean literal
    Literal(Literal),

    /// List literal `[a, b, ...]`
    ListLiteral(Vec<Expression>),

    /// Variable or function reference
    Variable(String),

    /// Binary operation expression
    Binary {
        /// Binary operator to apply
        op: BinaryOp,
        /// Left operand expression
        left: Box<Expression>,
        /// Right operand expression
        right: Box<Expression>,
    },

    /// Function application `name arg1 arg2 ...`
    Application {
        /// Name of the applied function
        name: String,
        /// Positional argument expressions
        args: Vec<Expression>,
    },

    /// Operator section such as `(<10)`, `(10+)` or `(*)`
    Section(Section),
}

/// Literal values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// Floating-point number
    Number(f64),
    /// String contents, without quotes
    String(String),
    /// Boolean
    Bool(bool),
}

/// Partially applied binary operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Section {
    /// `(op)`: the operator itself as a two-argument function
    Bare(BinaryOp),
    /// `(operand op)`: the argument becomes the right operand
    Left {
        /// Operator
        op: BinaryOp,
        /// Fixed left operand
        operand: Box<Expression>,
    },
    /// `(op operand)`: the argument becomes the left operand
    Right {
        /// Operator
        op: BinaryOp,
        /// Fixed right operand
        operand: Box<Expression>,
    },
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    // Arithmetic
    /// Addition operator (+)
    Add,
    /// Subtraction operator (-)
    Sub,
    /// Multiplication operator (*)
    Mul,
    /// Division operator (/)
    Div,

    // Comparison
    /// Less than operator (<)
    Lt,
    /// Greater than operator (>)
    Gt,
    /// Less than or equal operator (<=)
    LtEq,
    /// Greater than or equal operator (>=)
    GtEq,
    /// Equality operator (==)
    Eq,

    // Lists
    /// List construction operator (:)
    Cons,

    /// Inequality operator (/=)
    NotEq,
}

impl BinaryOp {
    /// Order in which operators are tried when splitting an expression.
    ///
    /// The first operator in this list that occurs at the top level of an
    /// expression becomes its root, so the list doubles as the precedence
    /// table: earlier entries bind loosest.
    pub const SPLIT_ORDER: [BinaryOp; 11] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Lt,
        BinaryOp::Gt,
        BinaryOp::LtEq,
        BinaryOp::GtEq,
        BinaryOp::Eq,
        BinaryOp::Cons,
        BinaryOp::NotEq,
    ];

    /// Source spelling of the operator
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Cons => ":",
            BinaryOp::NotEq => "/=",
        }
    }

    /// Looks up an operator by its exact spelling
    pub fn from_symbol(symbol: &str) -> Option<BinaryOp> {
        BinaryOp::SPLIT_ORDER
            .iter()
            .copied()
            .find(|op| op.symbol() == symbol)
    }
}

impl Expression {
    /// Folds literal-only expressions into a value
    ///
    /// Returns `None` as soon as anything other than a literal or a list of
    /// literals is involved.
    pub fn as_constant(&self) -> Option<Value> {
        match self {
            Expression::Literal(Literal::Number(n)) => Some(Value::Number(*n)),
            Expression::Literal(Literal::String(s)) => Some(Value::String(s.clone())),
            Expression::Literal(Literal::Bool(b)) => Some(Value::Bool(*b)),
            Expression::ListLiteral(items) => items
                .iter()
                .map(Expression::as_constant)
                .collect::<Option<Vec<_>>>()
                .map(Value::List),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Literal(Literal::Number(n)) => write!(f, "{}", n),
            Expression::Literal(Literal::String(s)) => write!(f, "\"{}\"", s),
            Expression::Literal(Literal::Bool(true)) => write!(f, "True"),
            Expression::Literal(Literal::Bool(false)) => write!(f, "False"),
            Expression::ListLiteral(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Expression::Variable(name) => write!(f, "{}", name),
            Expression::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Expression::Application { name, args } => {
                write!(f, "({}", name)?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                write!(f, ")")
            }
            Expression::Section(Section::Bare(op)) => write!(f, "({})", op),
            Expression::Section(Section::Left { op, operand }) => write!(f, "({} {})", operand, op),
            Expression::Section(Section::Right { op, operand }) => write!(f, "({} {})", op, operand),
        }
    }
}

/// Parameter pattern of a clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Pattern {
    /// `[]`: only the empty list
    EmptyList,
    /// `(h:t)`: a non-empty list split into first element and rest
    Cons {
        /// Name bound to the first element
        head: String,
        /// Name bound to the remaining elements
        tail: String,
    },
    /// `[a, b, ...]`: a list of exactly this many elements
    ListDestructure(Vec<String>),
    /// Bare identifier: matches anything and binds it
    Variable(String),
    /// `_`: matches anything, binds nothing
    Wildcard,
    /// Constant compared by value equality
    Literal(Value),
}

/// One pattern-matched definition line of a function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    /// Parameter patterns, positionally matched against arguments
    pub params: Vec<Pattern>,
    /// Body evaluated when every parameter matches
    pub body: Expression,
}

impl Clause {
    /// Number of arguments this clause accepts
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}
