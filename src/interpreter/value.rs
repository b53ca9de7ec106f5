use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::{builtin::Builtin, core::EvalResult},
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types a variable can be bound to and an
/// expression can evaluate to.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A double-precision floating-point value.
    Real(f64),
    /// A string value. No string literal syntax exists; strings enter a
    /// program through the `input` and `chr` built-ins.
    Str(String),
    /// A boolean value, produced by comparisons or the `true`/`false`
    /// constants.
    Bool(bool),
    /// A callable built-in function.
    Builtin(Builtin),
    /// The no-value marker: the result of assignments, blocks, and `print`.
    Null,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => (*n).into(),
            LiteralValue::Real(r) => (*r).into(),
            LiteralValue::Str(s) => s.clone().into(),
            LiteralValue::Bool(b) => (*b).into(),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Real` and `Value::Integer`. For integers, conversion
    /// fails if the value is too large to be represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use pyrite::interpreter::value::Value;
    ///
    /// let x = Value::Integer(10);
    /// assert_eq!(x.as_real(1).unwrap(), 10.0);
    /// ```
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge { line })?),
            _ => Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                                self.type_name()),
                                               line }),
        }
    }

    /// Decides whether the value counts as true in a block condition.
    ///
    /// Zero, the empty string, and the no-value marker are false; everything
    /// else is true.
    ///
    /// # Example
    /// ```
    /// use pyrite::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Builtin(_) => true,
            Self::Null => false,
        }
    }

    /// Converts the value back into a syntax-tree literal, if it has one.
    ///
    /// Callables and the no-value marker have no literal form; the constant
    /// folder leaves operations producing them alone.
    #[must_use]
    pub fn into_literal(self) -> Option<LiteralValue> {
        match self {
            Self::Integer(n) => Some(LiteralValue::Integer(n)),
            Self::Real(r) => Some(LiteralValue::Real(r)),
            Self::Str(s) => Some(LiteralValue::Str(s)),
            Self::Bool(b) => Some(LiteralValue::Bool(b)),
            Self::Builtin(_) | Self::Null => None,
        }
    }

    /// The user-facing name of the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Builtin(_) => "builtin",
            Self::Null => "null",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Builtin(builtin) => write!(f, "<built-in {builtin}>"),
            Self::Null => write!(f, "null"),
        }
    }
}
