use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a binary operation of the form `Value <Operator> Value`.
///
/// This is the single definition of the language's operator semantics: the
/// evaluator calls it for every non-assignment operation and for the
/// combining step of compound assignments, and the constant folder calls it
/// to collapse literal operands. Routing both through one function is what
/// guarantees that folding cannot change a program's meaning.
///
/// Assignment operators have no value semantics and are rejected here; the
/// evaluator handles them before ever reaching this function.
///
/// # Parameters
/// - `operator`: The operator to apply.
/// - `left`: The left-hand value.
/// - `right`: The right-hand value.
/// - `line`: Current line number used for error reporting.
///
/// # Example
/// ```
/// use pyrite::{
///     ast::Operator,
///     interpreter::{evaluator::binary::eval_binary, value::Value},
/// };
///
/// let result = eval_binary(Operator::Mul, &Value::Integer(6), &Value::Integer(7), 1);
/// assert_eq!(result.unwrap(), Value::Integer(42));
///
/// let result = eval_binary(Operator::Less, &Value::Integer(2), &Value::Real(2.5), 1);
/// assert_eq!(result.unwrap(), Value::Bool(true));
/// ```
pub fn eval_binary(operator: Operator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match operator {
        Operator::Add | Operator::Sub | Operator::Mul | Operator::Div | Operator::Mod => {
            eval_arithmetic(operator, left, right, line)
        },
        Operator::Less | Operator::Greater | Operator::LessEqual | Operator::GreaterEqual => {
            eval_ordering(operator, left, right, line)
        },
        Operator::Equal | Operator::NotEqual => eval_equality(operator, left, right, line),
        _ => Err(RuntimeError::InvalidOperation { operator: operator.to_string(),
                                                  line }),
    }
}

/// Evaluates an arithmetic operation.
///
/// Two integers stay in integer arithmetic (including `/` and `%`, which
/// truncate); once a real is involved both operands are promoted to reals;
/// `+` additionally concatenates two strings. Division and remainder check
/// the divisor explicitly, for integers and reals alike.
fn eval_arithmetic(operator: Operator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    use Operator::{Add, Div, Mod, Mul, Sub};
    use Value::{Integer, Real, Str};

    match (left, right) {
        (Str(a), Str(b)) if operator == Add => Ok(Str(format!("{a}{b}"))),
        (Integer(a), Integer(b)) => match operator {
            Add => Ok(Integer(a + b)),
            Sub => Ok(Integer(a - b)),
            Mul => Ok(Integer(a * b)),
            Div => {
                if *b == 0 {
                    Err(RuntimeError::DivisionByZero { line })
                } else {
                    Ok(Integer(a / b))
                }
            },
            Mod => {
                if *b == 0 {
                    Err(RuntimeError::DivisionByZero { line })
                } else {
                    Ok(Integer(a % b))
                }
            },
            _ => unreachable!(),
        },
        (Real(_) | Integer(_), Real(_) | Integer(_)) => {
            let a = left.as_real(line)?;
            let b = right.as_real(line)?;

            Ok(Real(match operator {
                        Add => a + b,
                        Sub => a - b,
                        Mul => a * b,
                        Div => {
                            if b == 0.0 {
                                return Err(RuntimeError::DivisionByZero { line });
                            }
                            a / b
                        },
                        Mod => {
                            if b == 0.0 {
                                return Err(RuntimeError::DivisionByZero { line });
                            }
                            a % b
                        },
                        _ => unreachable!(),
                    }))
        },
        _ => Err(RuntimeError::TypeError { details: invalid_operands(operator, left, right),
                                           line }),
    }
}

/// Evaluates an ordering comparison (`<`, `>`, `<=`, `>=`).
///
/// Numbers compare after promotion to a common type; strings compare
/// lexicographically; every other pairing is a type error.
fn eval_ordering(operator: Operator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    use Operator::{Greater, GreaterEqual, Less, LessEqual};
    use Value::{Integer, Real, Str};

    let is_true = match (left, right) {
        (Str(a), Str(b)) => match operator {
            Less => a < b,
            Greater => a > b,
            LessEqual => a <= b,
            GreaterEqual => a >= b,
            _ => unreachable!(),
        },
        (Integer(a), Integer(b)) => match operator {
            Less => a < b,
            Greater => a > b,
            LessEqual => a <= b,
            GreaterEqual => a >= b,
            _ => unreachable!(),
        },
        (Real(_) | Integer(_), Real(_) | Integer(_)) => {
            let a = left.as_real(line)?;
            let b = right.as_real(line)?;
            match operator {
                Less => a < b,
                Greater => a > b,
                LessEqual => a <= b,
                GreaterEqual => a >= b,
                _ => unreachable!(),
            }
        },
        _ => {
            return Err(RuntimeError::TypeError { details: invalid_operands(operator, left, right),
                                                 line });
        },
    };

    Ok(Value::Bool(is_true))
}

/// Evaluates an equality comparison (`==`, `!=`).
///
/// Numbers compare after promotion, so `2 == 2.0` holds; same-kind values
/// compare structurally; values of different kinds are simply unequal rather
/// than an error.
fn eval_equality(operator: Operator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    use Value::{Bool, Builtin, Integer, Null, Real, Str};

    let is_equal = match (left, right) {
        (Integer(a), Integer(b)) => a == b,
        (Real(_) | Integer(_), Real(_) | Integer(_)) => {
            left.as_real(line)? == right.as_real(line)?
        },
        (Str(a), Str(b)) => a == b,
        (Bool(a), Bool(b)) => a == b,
        (Builtin(a), Builtin(b)) => a == b,
        (Null, Null) => true,
        _ => false,
    };

    Ok(Value::Bool(match operator {
                       Operator::Equal => is_equal,
                       Operator::NotEqual => !is_equal,
                       _ => unreachable!(),
                   }))
}

/// Formats the standard "invalid operands" detail message.
fn invalid_operands(operator: Operator, left: &Value, right: &Value) -> String {
    format!("invalid operands for `{operator}`: {} and {}",
            left.type_name(),
            right.type_name())
}
