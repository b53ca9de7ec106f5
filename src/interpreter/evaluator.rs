/// Binary operator evaluation logic.
///
/// The single definition of the language's arithmetic and comparison
/// semantics, shared between the evaluator and the constant folder.
pub mod binary;

/// Built-in functions.
///
/// The callables pre-bound in every fresh environment: `print`, `int`,
/// `input`, and `chr`.
pub mod builtin;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine and the flat variable environment.
pub mod core;
