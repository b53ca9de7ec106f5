use std::io::{self, BufRead, Write};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
    util::num::f64_to_i64_checked,
};

/// The built-in functions pre-bound in every fresh environment.
///
/// Each built-in takes exactly one argument, because the call syntax always
/// supplies exactly one; `input` simply ignores a null argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `print(value)`: write the value and a newline to standard output.
    Print,
    /// `int(value)`: convert a number, string, or boolean to an integer.
    Int,
    /// `input(prompt)`: read one line from standard input; a non-null
    /// argument is written first as a prompt.
    Input,
    /// `chr(code)`: the one-character string for a character code.
    Chr,
}

impl Builtin {
    /// The name the built-in is bound to in the initial environment.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Int => "int",
            Self::Input => "input",
            Self::Chr => "chr",
        }
    }

    /// Invokes the built-in with its single argument.
    ///
    /// # Parameters
    /// - `argument`: The already-evaluated argument value.
    /// - `line`: Line number of the call, for error reporting.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] when the argument has the wrong type or an
    /// invalid value, or when reading standard input fails.
    pub fn call(self, argument: &Value, line: usize) -> EvalResult<Value> {
        match self {
            Self::Print => print(argument),
            Self::Int => int(argument, line),
            Self::Input => input(argument, line),
            Self::Chr => chr(argument, line),
        }
    }
}

impl std::fmt::Display for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Prints a value to standard output, followed by a newline.
///
/// The value is formatted with its `Display` implementation; every value
/// variant is printable. Always returns the no-value marker.
fn print(argument: &Value) -> EvalResult<Value> {
    println!("{argument}");
    Ok(Value::Null)
}

/// Converts a value to an integer.
///
/// Integers pass through, reals truncate toward zero, strings are parsed as
/// decimal after trimming whitespace, and booleans map to `0`/`1`.
fn int(argument: &Value, line: usize) -> EvalResult<Value> {
    match argument {
        Value::Integer(n) => Ok(Value::Integer(*n)),
        Value::Real(r) => Ok(Value::Integer(f64_to_i64_checked(r.trunc(), line)?)),
        Value::Str(s) => {
            s.trim()
             .parse::<i64>()
             .map(Value::Integer)
             .map_err(|_| RuntimeError::InvalidArgument { details: format!("cannot convert '{s}' to an integer"),
                                                          line })
        },
        Value::Bool(b) => Ok(Value::Integer(i64::from(*b))),
        other => Err(RuntimeError::TypeError { details: format!("cannot convert {} to an integer",
                                                                other.type_name()),
                                               line }),
    }
}

/// Reads one line from standard input, returning it without its newline.
///
/// A non-null argument is written to standard output first, with no newline,
/// as a prompt.
fn input(argument: &Value, line: usize) -> EvalResult<Value> {
    let failed = |e: io::Error| RuntimeError::InputFailed { details: e.to_string(),
                                                            line };

    if *argument != Value::Null {
        print!("{argument}");
        io::stdout().flush().map_err(failed)?;
    }

    let mut buffer = String::new();
    io::stdin().lock().read_line(&mut buffer).map_err(failed)?;

    while buffer.ends_with('\n') || buffer.ends_with('\r') {
        buffer.pop();
    }

    Ok(Value::Str(buffer))
}

/// Returns the one-character string for an integer character code.
fn chr(argument: &Value, line: usize) -> EvalResult<Value> {
    match argument {
        Value::Integer(code) => {
            u32::try_from(*code).ok()
                                .and_then(char::from_u32)
                                .map(|c| Value::Str(c.to_string()))
                                .ok_or_else(|| RuntimeError::InvalidArgument { details: format!("{code} is not a valid character code"),
                                                                               line })
        },
        other => Err(RuntimeError::TypeError { details: format!("character code must be an integer, found {}",
                                                                other.type_name()),
                                               line }),
    }
}
