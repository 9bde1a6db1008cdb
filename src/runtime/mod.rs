//! Runtime evaluation of minihs definitions and expressions

mod environment;
mod evaluator;
mod pattern_matcher;
mod store;
mod value;

pub use environment::{Bindings, Environment};
pub use evaluator::{apply_operator, Interpreter};
pub use pattern_matcher::{match_clause, match_pattern};
pub use store::DefinitionStore;
pub use value::{Callable, Value};
