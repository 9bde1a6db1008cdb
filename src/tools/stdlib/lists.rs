//! List tools

use crate::error::{Error, Result};
use crate::runtime::Value;
use crate::tools::{argument, Tool, ToolRegistry};

/// Register list tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(HeadTool);
    registry.register(TailTool);
    registry.register(LengthTool);
    registry.register(NullTool);
    registry.register(SumTool);
    registry.register(ReverseTool);
}

/// Elements of a non-empty list; anything else is an empty-list error
fn non_empty<'a>(operation: &str, value: &'a Value) -> Result<&'a [Value]> {
    match value {
        Value::List(items) if !items.is_empty() => Ok(items),
        _ => Err(Error::EmptyList {
            operation: operation.to_string(),
        }),
    }
}

/// Tool returning the first element of a list
///
/// Usage: `head list`
/// Example: `head [5]` returns `5`
pub struct HeadTool;

impl Tool for HeadTool {
    fn name(&self) -> &str {
        "head"
    }

    fn description(&self) -> &str {
        "First element of a non-empty list"
    }

    fn execute(&self, args: &[Value]) -> Result<Value> {
        let items = non_empty("head", argument(self.name(), args, 0)?)?;
        Ok(items[0].clone())
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }
}

/// Tool returning everything but the first element of a list
///
/// Usage: `tail list`
/// Example: `tail [5, 6, 7]` returns `[6, 7]`
pub struct TailTool;

impl Tool for TailTool {
    fn name(&self) -> &str {
        "tail"
    }

    fn description(&self) -> &str {
        "All elements after the first of a non-empty list"
    }

    fn execute(&self, args: &[Value]) -> Result<Value> {
        let items = non_empty("tail", argument(self.name(), args, 0)?)?;
        Ok(Value::List(items[1..].to_vec()))
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }
}

/// Tool counting list elements
pub struct LengthTool;

impl Tool for LengthTool {
    fn name(&self) -> &str {
        "length"
    }

    fn description(&self) -> &str {
        "Number of elements in a list"
    }

    fn execute(&self, args: &[Value]) -> Result<Value> {
        Ok(Value::Number(argument(self.name(), args, 0)?.as_list()?.len() as f64))
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }
}

/// Tool testing for the empty list
pub struct NullTool;

impl Tool for NullTool {
    fn name(&self) -> &str {
        "null"
    }

    fn description(&self) -> &str {
        "True for the empty list"
    }

    fn execute(&self, args: &[Value]) -> Result<Value> {
        Ok(Value::Bool(argument(self.name(), args, 0)?.as_list()?.is_empty()))
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }
}

/// Tool adding up a list of numbers
pub struct SumTool;

impl Tool for SumTool {
    fn name(&self) -> &str {
        "sum"
    }

    fn description(&self) -> &str {
        "Sum of a list of numbers"
    }

    fn execute(&self, args: &[Value]) -> Result<Value> {
        let mut total = 0.0;
        for item in argument(self.name(), args, 0)?.as_list()? {
            total += item.as_number()?;
        }
        Ok(Value::Number(total))
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }
}

/// Tool reversing a list
pub struct ReverseTool;

impl Tool for ReverseTool {
    fn name(&self) -> &str {
        "reverse"
    }

    fn description(&self) -> &str {
        "Elements of a list in reverse order"
    }

    fn execute(&self, args: &[Value]) -> Result<Value> {
        let items = argument(self.name(), args, 0)?.as_list()?;
        Ok(Value::List(items.iter().rev().cloned().collect()))
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(ns: &[f64]) -> Value {
        Value::List(ns.iter().map(|n| Value::Number(*n)).collect())
    }

    #[test]
    fn test_head_and_tail() {
        assert_eq!(HeadTool.execute(&[numbers(&[5.0])]).unwrap(), Value::Number(5.0));
        assert_eq!(
            TailTool.execute(&[numbers(&[5.0, 6.0, 7.0])]).unwrap(),
            numbers(&[6.0, 7.0])
        );
        assert_eq!(TailTool.execute(&[numbers(&[5.0])]).unwrap(), numbers(&[]));
    }

    #[test]
    fn test_head_and_tail_of_empty_list() {
        assert_eq!(
            HeadTool.execute(&[numbers(&[])]),
            Err(Error::EmptyList {
                operation: "head".to_string()
            })
        );
        assert_eq!(
            TailTool.execute(&[numbers(&[])]),
            Err(Error::EmptyList {
                operation: "tail".to_string()
            })
        );
    }

    #[test]
    fn test_head_of_non_list() {
        assert!(matches!(
            HeadTool.execute(&[Value::Number(1.0)]),
            Err(Error::EmptyList { .. })
        ));
    }

    #[test]
    fn test_length_null_sum_reverse() {
        let list = numbers(&[1.0, 2.0, 3.0]);
        assert_eq!(LengthTool.execute(&[list.clone()]).unwrap(), Value::Number(3.0));
        assert_eq!(NullTool.execute(&[list.clone()]).unwrap(), Value::Bool(false));
        assert_eq!(NullTool.execute(&[numbers(&[])]).unwrap(), Value::Bool(true));
        assert_eq!(SumTool.execute(&[list.clone()]).unwrap(), Value::Number(6.0));
        assert_eq!(
            ReverseTool.execute(&[list]).unwrap(),
            numbers(&[3.0, 2.0, 1.0])
        );
    }

    #[test]
    fn test_missing_argument_is_an_error() {
        assert_eq!(
            HeadTool.execute(&[]),
            Err(Error::InvalidArguments {
                function: "head".to_string(),
                reason: "missing argument 1".to_string(),
            })
        );
        for tool in [&TailTool as &dyn Tool, &LengthTool, &NullTool, &SumTool, &ReverseTool] {
            assert!(matches!(
                tool.execute(&[]),
                Err(Error::InvalidArguments { .. })
            ));
        }
    }

    #[test]
    fn test_sum_rejects_non_numbers() {
        let mixed = Value::List(vec![Value::Number(1.0), Value::Bool(true)]);
        assert!(matches!(
            SumTool.execute(&[mixed]),
            Err(Error::TypeError { .. })
        ));
    }
}
