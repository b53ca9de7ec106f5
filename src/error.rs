/// Parsing errors.
///
/// Defines all error types that can occur while turning source text into a
/// syntax tree: lexical errors (unrecognized characters), indentation errors
/// (orphaned or missing indented blocks), and syntax errors (invalid token
/// sequences or operators).
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unbound
/// variable lookups, invalid assignment targets, calls to non-callable
/// values, type mismatches, and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
