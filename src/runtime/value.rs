use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::parser::BinaryOp;

/// Runtime value representation
///
/// Lists own their elements; every list-producing operation builds a fresh
/// vector instead of sharing the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    /// Floating-point number
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// String value
    String(String),
    /// Ordered list of values
    List(Vec<Value>),
    /// Callable reference usable wherever a function argument is expected
    Function(Callable),
}

/// Something that can be applied to argument values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Callable {
    /// A builtin or user-defined function, by name
    Named(String),
    /// A bare operator such as `(+)`
    Operator(BinaryOp),
    /// `(operand op)`: the argument is the right operand
    LeftSection {
        /// Operator
        op: BinaryOp,
        /// Captured left operand
        operand: Box<Value>,
    },
    /// `(op operand)`: the argument is the left operand
    RightSection {
        /// Operator
        op: BinaryOp,
        /// Captured right operand
        operand: Box<Value>,
    },
}

impl Value {
    /// Returns the type name as a string
    pub fn type_name(&self) -> String {
        match self {
            Value::Number(_) => "number".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::String(_) => "string".to_string(),
            Value::List(_) => "list".to_string(),
            Value::Function(_) => "function".to_string(),
        }
    }

    /// Returns true if the value is truthy in a boolean context
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::List(items) => !items.is_empty(),
            Value::Function(_) => true,
        }
    }

    /// Returns the numeric value
    pub fn as_number(&self) -> Result<f64> {
        match self {
            Value::Number(n) => Ok(*n),
            _ => Err(Error::type_error("number", self.type_name())),
        }
    }

    /// Returns the boolean value
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(Error::type_error("bool", self.type_name())),
        }
    }

    /// Returns a reference to the list elements
    pub fn as_list(&self) -> Result<&[Value]> {
        match self {
            Value::List(items) => Ok(items),
            _ => Err(Error::type_error("list", self.type_name())),
        }
    }

    /// Returns the callable reference
    pub fn as_callable(&self) -> Result<&Callable> {
        match self {
            Value::Function(callable) => Ok(callable),
            _ => Err(Error::type_error("function", self.type_name())),
        }
    }
}

impl PartialEq for Value {
    /// Values of different kinds are never equal, and neither are functions
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Function(callable) => write!(f, "{}", callable),
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Callable::Named(name) => write!(f, "<function {}>", name),
            Callable::Operator(op) => write!(f, "<section ({})>", op),
            Callable::LeftSection { op, operand } => write!(f, "<section ({}{})>", operand, op),
            Callable::RightSection { op, operand } => write!(f, "<section ({}{})>", op, operand),
        }
    }
}
