/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the syntax tree, executes statements in order,
/// performs arithmetic and comparison operations, manages the single global
/// variable environment, and dispatches built-in function calls. It is the
/// core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles assignments, `while`/`if` blocks, and built-in calls.
/// - Reports runtime errors such as unbound names or division by zero.
pub mod evaluator;
/// The folder module collapses constant subexpressions.
///
/// Constant folding is a post-pass over the parsed tree: any operation whose
/// operands are both compile-time literals is replaced by the literal it
/// computes, using the evaluator's own semantics so behavior is unchanged.
///
/// # Responsibilities
/// - Rebuilds the tree bottom-up, folding literal operations.
/// - Leaves assignments and non-literal operands untouched.
/// - Surfaces host-semantics failures between literals before the run.
pub mod folder;
/// The grouper module nests statement lines by indentation.
///
/// Between lexing and parsing, the flat per-line token sequences are grouped
/// into a recursive structure that mirrors the source's four-space block
/// nesting; the parser then attaches each nested group to the `while`/`if`
/// header above it.
///
/// # Responsibilities
/// - Counts leading indent tokens to find each line's depth.
/// - Nests deeper lines beneath the preceding shallower line.
/// - Never fails; shape errors are left to the parser.
pub mod grouper;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads one raw source line at a time and produces a stream of
/// tokens: identifiers, integer literals, punctuation symbols, indent units,
/// and the newline terminator. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts each input line into tokens; no token spans a line boundary.
/// - Collapses four-space runs into indent units and drops lone spaces.
/// - Reports lexical errors naming the offending character and line.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the grouped token lines and constructs a tree of
/// operations, blocks, calls, identifiers, and literals. Operator precedence
/// is resolved by climbing through three ordered bands; indentation shape is
/// validated while attaching block bodies to their headers.
///
/// # Responsibilities
/// - Converts grouped token lines into structured AST nodes.
/// - Resolves operator precedence and the two-character operator upgrades.
/// - Validates block structure, reporting errors with location info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during execution (integers,
/// reals, strings, booleans, callables, and the no-value marker) along with
/// truthiness, type names for error messages, and conversions to and from
/// syntax-tree literals.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements truthiness, display, and literal conversion.
/// - Provides safe promotion from integers to reals.
pub mod value;
