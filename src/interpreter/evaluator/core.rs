use std::collections::HashMap;

use crate::{
    ast::{BlockKind, Expr, Operator},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::eval_binary, builtin::Builtin},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context is a single flat mapping from variable names to values:
/// the language has one global namespace, and blocks do not open scopes.
/// It is created once per run with the built-in functions and the boolean
/// constants pre-bound, threaded through every evaluation call, and dropped
/// when the run ends.
pub struct Context {
    variables: HashMap<String, Value>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a fresh environment holding the initial bindings: the
    /// built-ins `print`, `int`, `input`, and `chr`, plus the constants
    /// `true` and `false`.
    ///
    /// # Example
    /// ```
    /// use pyrite::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let context = Context::new();
    ///
    /// assert_eq!(context.get_variable("true"), Some(&Value::Bool(true)));
    /// assert!(matches!(context.get_variable("print"), Some(Value::Builtin(_))));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut variables = HashMap::new();

        for builtin in [Builtin::Print, Builtin::Int, Builtin::Input, Builtin::Chr] {
            variables.insert(builtin.name().to_string(), Value::Builtin(builtin));
        }
        variables.insert("true".to_string(), Value::Bool(true));
        variables.insert("false".to_string(), Value::Bool(false));

        Self { variables }
    }

    /// Executes a sequence of statements strictly in order.
    ///
    /// The first error aborts the whole run; there is no recovery.
    ///
    /// # Errors
    /// Propagates the first [`RuntimeError`] any statement raises.
    pub fn run(&mut self, statements: &[Expr]) -> EvalResult<()> {
        for statement in statements {
            self.eval(statement)?;
        }
        Ok(())
    }

    /// Evaluates a single syntax node and returns its value.
    ///
    /// This is the main entry point for evaluation. Dispatch is exhaustive
    /// over the node kinds: literals evaluate to themselves, identifiers to
    /// their binding, operations to assignments or computed values, blocks to
    /// repeated or conditional body execution, and calls to the result of the
    /// invoked built-in. Constructs that exist for their side effects
    /// (assignments, blocks, `print`) evaluate to [`Value::Null`].
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] for unbound identifiers, non-identifier
    /// assignment targets, calls to non-callable values, and host-semantics
    /// failures such as type mismatches or division by zero.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Identifier { name, line } => self.eval_identifier(name, *line),
            Expr::Operation { left,
                              operator,
                              right,
                              line, } => {
                if operator.is_assignment() {
                    self.eval_assignment(left, *operator, right, *line)
                } else {
                    let left = self.eval(left)?;
                    let right = self.eval(right)?;
                    eval_binary(*operator, &left, &right, *line)
                }
            },
            Expr::Block { kind, condition, body, .. } => self.eval_block(*kind, condition, body),
            Expr::FunctionCall { callee, argument, line } => {
                self.eval_call(callee, argument, *line)
            },
        }
    }

    /// Evaluates an assignment or compound assignment.
    ///
    /// The right side is evaluated first; the target must then be a plain
    /// identifier. Plain `=` creates or replaces the binding; the compound
    /// operators combine the existing binding (which must exist) with the new
    /// value through the shared binary semantics. The operation's own value
    /// is the no-value marker.
    fn eval_assignment(&mut self,
                       target: &Expr,
                       operator: Operator,
                       value: &Expr,
                       line: usize)
                       -> EvalResult<Value> {
        let value = self.eval(value)?;

        let Expr::Identifier { name, .. } = target else {
            return Err(RuntimeError::InvalidAssignmentTarget { target: target.to_string(),
                                                               line });
        };

        if operator == Operator::Assign {
            self.variables.insert(name.clone(), value);
        } else {
            let current =
                self.variables
                    .get(name)
                    .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                   line })?;
            let combined = eval_binary(operator.combining(), current, &value, line)?;
            self.variables.insert(name.clone(), combined);
        }

        Ok(Value::Null)
    }

    /// Evaluates a `while` or `if` block.
    ///
    /// `while` re-evaluates the condition before every iteration and runs the
    /// body while it is truthy; `if` evaluates it once and runs the body at
    /// most once. There is no `else`. Blocks produce no value.
    fn eval_block(&mut self, kind: BlockKind, condition: &Expr, body: &[Expr]) -> EvalResult<Value> {
        match kind {
            BlockKind::While => {
                while self.eval(condition)?.is_truthy() {
                    self.run(body)?;
                }
            },
            BlockKind::If => {
                if self.eval(condition)?.is_truthy() {
                    self.run(body)?;
                }
            },
        }
        Ok(Value::Null)
    }

    /// Evaluates a single-argument function call.
    ///
    /// The callee must evaluate to a callable value; anything else is
    /// reported with its type. The argument is evaluated before invocation.
    fn eval_call(&mut self, callee: &Expr, argument: &Expr, line: usize) -> EvalResult<Value> {
        let callee = self.eval(callee)?;
        let argument = self.eval(argument)?;

        match callee {
            Value::Builtin(builtin) => builtin.call(&argument, line),
            other => Err(RuntimeError::NotCallable { found: other.type_name().to_string(),
                                                     line }),
        }
    }

    /// Looks up an identifier's binding.
    fn eval_identifier(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Retrieves a variable from the environment.
    ///
    /// # Example
    /// ```
    /// use pyrite::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let mut context = Context::new();
    /// context.set_variable("x", Value::Integer(5));
    ///
    /// assert_eq!(context.get_variable("x"), Some(&Value::Integer(5)));
    /// assert_eq!(context.get_variable("y"), None);
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds a variable in the environment, replacing any existing binding.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }
}
