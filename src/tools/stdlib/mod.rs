//! Standard library builtins for minihs

pub mod lists;
pub mod numeric;

use crate::tools::ToolRegistry;

/// Register all standard library tools
pub fn register_all(registry: &mut ToolRegistry) {
    lists::register(registry);
    numeric::register(registry);
}
