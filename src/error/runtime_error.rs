#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left side of an assignment was not a plain identifier.
    InvalidAssignmentTarget {
        /// A rendering of the offending target expression.
        target: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Tried to call a value that is not callable.
    NotCallable {
        /// The type of the value that was called.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division (or remainder) by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator reached evaluation in a position it cannot be computed in.
    InvalidOperation {
        /// The operator as written.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An argument to a built-in function was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Reading from standard input failed.
    InputFailed {
        /// The underlying I/O failure.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric value was too large to be represented safely.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::InvalidAssignmentTarget { target, line } => write!(f,
                                                                     "Error on line {line}: Cannot assign to `{target}`; the target must be an identifier."),

            Self::NotCallable { found, line } => {
                write!(f, "Error on line {line}: Value of type {found} is not callable.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::InvalidOperation { operator, line } => {
                write!(f, "Error on line {line}: Invalid operation `{operator}`.")
            },
            Self::InvalidArgument { details, line } => {
                write!(f, "Error on line {line}: Invalid argument: {details}.")
            },
            Self::InputFailed { details, line } => {
                write!(f, "Error on line {line}: Failed to read input: {details}.")
            },
            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
