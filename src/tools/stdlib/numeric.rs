//! Numeric and boolean tools

use crate::error::{Error, Result};
use crate::runtime::Value;
use crate::tools::{argument, Tool, ToolRegistry};

/// Register numeric tools
pub fn register(registry: &mut ToolRegistry) {
    registry.register(ModTool);
    registry.register(DivTool);
    registry.register(NotTool);
}

fn nonzero_divisor(tool: &str, value: &Value) -> Result<f64> {
    let divisor = value.as_number()?;
    if divisor == 0.0 {
        return Err(Error::InvalidArguments {
            function: tool.to_string(),
            reason: "divisor must not be zero".to_string(),
        });
    }
    Ok(divisor)
}

/// Tool for the floored remainder
///
/// Usage: `mod a b`
/// Example: `mod (-7) 2` returns `1`; the result takes the sign of `b`
pub struct ModTool;

impl Tool for ModTool {
    fn name(&self) -> &str {
        "mod"
    }

    fn description(&self) -> &str {
        "Remainder of floored division"
    }

    fn execute(&self, args: &[Value]) -> Result<Value> {
        let dividend = argument(self.name(), args, 0)?.as_number()?;
        let divisor = nonzero_divisor("mod", argument(self.name(), args, 1)?)?;
        Ok(Value::Number(dividend - divisor * (dividend / divisor).floor()))
    }

    fn arity(&self) -> Option<usize> {
        Some(2)
    }
}

/// Tool for floored integer division
///
/// Usage: `div a b`
/// Example: `div 7 2` returns `3`
pub struct DivTool;

impl Tool for DivTool {
    fn name(&self) -> &str {
        "div"
    }

    fn description(&self) -> &str {
        "Quotient of floored division"
    }

    fn execute(&self, args: &[Value]) -> Result<Value> {
        let dividend = argument(self.name(), args, 0)?.as_number()?;
        let divisor = nonzero_divisor("div", argument(self.name(), args, 1)?)?;
        Ok(Value::Number((dividend / divisor).floor()))
    }

    fn arity(&self) -> Option<usize> {
        Some(2)
    }
}

/// Tool negating a boolean
pub struct NotTool;

impl Tool for NotTool {
    fn name(&self) -> &str {
        "not"
    }

    fn description(&self) -> &str {
        "Boolean negation"
    }

    fn execute(&self, args: &[Value]) -> Result<Value> {
        Ok(Value::Bool(!argument(self.name(), args, 0)?.as_bool()?))
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }
}
