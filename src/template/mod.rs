//! Reply template engine
//!
//! Finds `{name}` placeholders in reply templates and substitutes live values
//! from the connection, the current request and the server statistics.

pub mod resolver;
pub mod scanner;
pub mod variables;

pub use resolver::VariableResolver;
pub use scanner::scan;
pub use variables::{Category, Variable};
