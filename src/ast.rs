/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values a syntax-tree leaf can
/// carry. Only integer literals can be written directly in source; the other
/// variants are produced by constant folding (booleans from folded
/// comparisons) and mirror the runtime values built-ins return.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
    /// A string literal value.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// An abstract syntax tree (AST) node.
///
/// `Expr` covers every construct of the language: literals, identifiers,
/// binary operations (including assignments), indented `while`/`if` blocks,
/// and single-argument function calls. Each variant carries the 1-based
/// source line it was parsed from for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation: arithmetic, comparison, or (compound) assignment.
    Operation {
        /// Left operand; for assignments, the target.
        left:     Box<Self>,
        /// The operator.
        operator: Operator,
        /// Right operand.
        right:    Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// An indented block introduced by a `while` or `if` header line.
    Block {
        /// Whether the block repeats or runs at most once.
        kind:      BlockKind,
        /// The header condition, re-tested per iteration for `while`.
        condition: Box<Self>,
        /// Statements of the indented body, in source order.
        body:      Vec<Self>,
        /// Line number of the header in the source code.
        line:      usize,
    },
    /// A function call with exactly one argument, e.g. `print(x)`.
    ///
    /// Chained calls nest leftward: `f(1)(2)` is a call whose callee is the
    /// call `f(1)`.
    FunctionCall {
        /// The expression being called.
        callee:   Box<Self>,
        /// The single argument expression.
        argument: Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::Operation { left, operator, right, .. } => {
                write!(f, "({left}){operator}({right})")
            },
            Self::Block { kind, condition, body, .. } => {
                write!(f, "{kind} {condition}: [")?;
                for (index, statement) in body.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{statement}")?;
                }
                write!(f, "]")
            },
            Self::FunctionCall { callee, argument, .. } => write!(f, "{callee}({argument})"),
        }
    }
}

/// The two kinds of indented block.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// `while`: re-test the condition before every iteration.
    While,
    /// `if`: test the condition once, run the body at most once.
    If,
}

impl BlockKind {
    /// Maps a block keyword to its kind.
    ///
    /// Returns `None` for identifiers that do not start a block, which is how
    /// the parser tells header lines apart from expression statements.
    #[must_use]
    pub fn from_keyword(name: &str) -> Option<Self> {
        match name {
            "while" => Some(Self::While),
            "if" => Some(Self::If),
            _ => None,
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::While => write!(f, "while"),
            Self::If => write!(f, "if"),
        }
    }
}

/// Represents a binary operator.
///
/// Operators are grouped by the parser into three precedence bands, loosest
/// first: comparison/assignment, additive, multiplicative. Compound
/// assignments belong to the band of their single-character spelling.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    /// Assignment (`=`)
    Assign,
    /// Compound addition (`+=`)
    AddAssign,
    /// Compound subtraction (`-=`)
    SubAssign,
    /// Compound multiplication (`*=`)
    MulAssign,
    /// Compound division (`/=`)
    DivAssign,
    /// Compound remainder (`%=`)
    ModAssign,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
}

impl Operator {
    /// Returns `true` when the operator binds a value to a target instead of
    /// producing one.
    ///
    /// ## Example
    /// ```
    /// use pyrite::ast::Operator;
    ///
    /// assert!(Operator::AddAssign.is_assignment());
    /// assert!(!Operator::Equal.is_assignment());
    /// ```
    #[must_use]
    pub const fn is_assignment(self) -> bool {
        matches!(self,
                 Self::Assign
                 | Self::AddAssign
                 | Self::SubAssign
                 | Self::MulAssign
                 | Self::DivAssign
                 | Self::ModAssign)
    }

    /// Returns the arithmetic operator a compound assignment combines the old
    /// and new values with, e.g. `+` for `+=`. Non-compound operators are
    /// returned unchanged.
    #[must_use]
    pub const fn combining(self) -> Self {
        match self {
            Self::AddAssign => Self::Add,
            Self::SubAssign => Self::Sub,
            Self::MulAssign => Self::Mul,
            Self::DivAssign => Self::Div,
            Self::ModAssign => Self::Mod,
            other => other,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::ModAssign => "%=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}
