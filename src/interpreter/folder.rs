use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{binary::eval_binary, core::EvalResult},
        value::Value,
    },
};

/// Folds constant subexpressions of a syntax node.
///
/// This is a pure bottom-up rebuild: children are folded first, and an
/// operation whose operator produces a value and whose two folded children
/// are both literals is replaced by the single literal obtained from the
/// evaluator's own binary semantics. Assignment operators are never
/// collapsed (they need a mutable target, not a value), though their
/// children still fold. Block conditions, block bodies, and call arguments
/// are folded recursively, so the finished tree contains no operation with
/// two literal children anywhere.
///
/// Because the computation is the evaluator's, folding cannot change what a
/// program means, and folding an already-folded tree rebuilds it unchanged.
///
/// # Errors
/// A host-semantics failure between two literals (`1 / 0` is the classic)
/// surfaces here, before the program ever runs, as the same `RuntimeError`
/// evaluation would have produced.
///
/// # Example
/// ```
/// use pyrite::{ast::Expr, interpreter::folder::fold, parse_source};
///
/// let program = parse_source("x = 2 + 3 * 4\n").unwrap();
/// let folded = program.into_iter().map(fold).collect::<Result<Vec<_>, _>>().unwrap();
///
/// // The right-hand side has collapsed to the literal 14.
/// assert!(matches!(&folded[0],
///                  Expr::Operation { right, .. }
///                      if matches!(**right, Expr::Literal { .. })));
/// ```
pub fn fold(expr: Expr) -> EvalResult<Expr> {
    Ok(match expr {
        Expr::Operation { left,
                          operator,
                          right,
                          line, } => {
            let left = fold(*left)?;
            let right = fold(*right)?;

            if !operator.is_assignment()
               && let (Expr::Literal { value: left_value, .. },
                       Expr::Literal { value: right_value, .. }) = (&left, &right)
            {
                let computed = eval_binary(operator,
                                           &Value::from(left_value),
                                           &Value::from(right_value),
                                           line)?;
                if let Some(value) = computed.into_literal() {
                    return Ok(Expr::Literal { value, line });
                }
            }

            Expr::Operation { left: Box::new(left),
                              operator,
                              right: Box::new(right),
                              line }
        },
        Expr::Block { kind,
                      condition,
                      body,
                      line, } => {
            let condition = Box::new(fold(*condition)?);
            let body = body.into_iter().map(fold).collect::<EvalResult<Vec<_>>>()?;

            Expr::Block { kind,
                          condition,
                          body,
                          line }
        },
        Expr::FunctionCall { callee, argument, line } => {
            Expr::FunctionCall { callee:   Box::new(fold(*callee)?),
                                 argument: Box::new(fold(*argument)?),
                                 line }
        },
        leaf @ (Expr::Literal { .. } | Expr::Identifier { .. }) => leaf,
    })
}
