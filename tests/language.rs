use std::fs;

use pyrite::{
    ast::{Expr, LiteralValue, Operator},
    interpreter::{
        evaluator::{binary::eval_binary, builtin::Builtin, core::Context},
        folder::fold,
        grouper::{LineGroup, group_lines},
        lexer::{Token, TokenLine, tokenize_source},
        parser::core::parse_program,
        value::Value,
    },
    parse_source, run_source,
};

fn assert_success(src: &str) {
    if let Err(e) = run_source(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run_source(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

/// Parses and runs a script, returning the environment for inspection.
fn run_program(src: &str) -> Context {
    let program = parse_source(src).unwrap_or_else(|e| panic!("Script failed to parse: {e}"));
    let mut context = Context::new();
    if let Err(e) = context.run(&program) {
        panic!("Script failed: {e}");
    }
    context
}

fn variable(context: &Context, name: &str) -> Value {
    context.get_variable(name)
           .cloned()
           .unwrap_or_else(|| panic!("variable '{name}' is unbound"))
}

/// Parses without the constant-folding pass.
fn parse_unfolded(src: &str) -> Vec<Expr> {
    let lines = tokenize_source(src).expect("lexing failed");
    parse_program(&group_lines(&lines)).expect("parsing failed")
}

#[test]
fn assignment_and_basic_arithmetic() {
    let context = run_program("x = 1 + 2\ny = 7 * 9\nz = 8 - 5\nw = 10 / 2\nr = 10 % 3\n");
    assert_eq!(variable(&context, "x"), Value::Integer(3));
    assert_eq!(variable(&context, "y"), Value::Integer(63));
    assert_eq!(variable(&context, "z"), Value::Integer(3));
    assert_eq!(variable(&context, "w"), Value::Integer(5));
    assert_eq!(variable(&context, "r"), Value::Integer(1));
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let context = run_program("x = 2 + 3 * 4\n");
    assert_eq!(variable(&context, "x"), Value::Integer(14));
}

#[test]
fn bands_are_left_associative() {
    let context = run_program("x = 10 - 4 - 3\ny = 100 / 5 / 2\n");
    assert_eq!(variable(&context, "x"), Value::Integer(3));
    assert_eq!(variable(&context, "y"), Value::Integer(10));
}

#[test]
fn compound_assignments() {
    let context = run_program("x = 5\nx += 3\n");
    assert_eq!(variable(&context, "x"), Value::Integer(8));

    let context = run_program("a = 7\na -= 2\nb = 4\nb *= 2\nc = 9\nc /= 3\nd = 9\nd %= 4\n");
    assert_eq!(variable(&context, "a"), Value::Integer(5));
    assert_eq!(variable(&context, "b"), Value::Integer(8));
    assert_eq!(variable(&context, "c"), Value::Integer(3));
    assert_eq!(variable(&context, "d"), Value::Integer(1));
}

#[test]
fn assignment_produces_no_value() {
    // The value of `x += 3` itself is the no-value marker.
    let context = run_program("x = 5\ny = x += 3\n");
    assert_eq!(variable(&context, "x"), Value::Integer(8));
    assert_eq!(variable(&context, "y"), Value::Null);
}

#[test]
fn while_loop_runs_to_termination() {
    let context = run_program("x = 0\nn = 0\nwhile x < 3:\n    x = x + 1\n    n += 1\n");
    assert_eq!(variable(&context, "x"), Value::Integer(3));
    assert_eq!(variable(&context, "n"), Value::Integer(3));
}

#[test]
fn while_loop_may_run_zero_times() {
    let context = run_program("x = 5\nwhile x < 0:\n    x += 1\n");
    assert_eq!(variable(&context, "x"), Value::Integer(5));
}

#[test]
fn conditional_runs_body_once() {
    let context = run_program("x = 1\nif x < 10:\n    x = 99\n");
    assert_eq!(variable(&context, "x"), Value::Integer(99));
}

#[test]
fn conditional_skips_body_entirely() {
    let context = run_program("x = 1\nif x > 10:\n    x = 99\n");
    assert_eq!(variable(&context, "x"), Value::Integer(1));
}

#[test]
fn blocks_nest() {
    let src = "total = 0\nn = 0\nwhile n < 5:\n    if n % 2 == 0:\n        total += n\n    n += 1\n";
    let context = run_program(src);
    assert_eq!(variable(&context, "total"), Value::Integer(6));
}

#[test]
fn blocks_share_the_global_namespace() {
    // Bindings created inside a block survive it; there are no scopes.
    let context = run_program("x = 1\nif x:\n    inner = 42\ny = inner\n");
    assert_eq!(variable(&context, "y"), Value::Integer(42));
}

#[test]
fn chained_calls_nest_leftward() {
    let program = parse_source("f(1)(2)\n").unwrap();

    let expected = Expr::FunctionCall {
        callee:   Box::new(Expr::FunctionCall {
            callee:   Box::new(Expr::Identifier { name: "f".to_string(),
                                                  line: 1 }),
            argument: Box::new(Expr::Literal { value: LiteralValue::Integer(1),
                                               line:  1 }),
            line:     1,
        }),
        argument: Box::new(Expr::Literal { value: LiteralValue::Integer(2),
                                           line:  1 }),
        line:     1,
    };

    assert_eq!(program, vec![expected]);
}

#[test]
fn assignment_target_must_be_an_identifier() {
    assert_failure("1 = 2\n");
    assert_failure("1 + 2 = 3\n");
    assert_failure("print(1) = 2\n");
    // `=` is left-associative within its band, so a chained assignment makes
    // the second `=` target the operation `(x = y)` rather than a name.
    assert_failure("x = y = 3\n");
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("x = y\n");
    // Compound assignment needs an existing binding to combine with.
    assert_failure("x += 1\n");
}

#[test]
fn folding_is_idempotent() {
    let src = "x = 1 + 2 * 3\nwhile 1 < 2:\n    x -= 1\n    if x < 0:\n        x = 4 % 3\n";
    let parsed = parse_unfolded(src);

    let once: Vec<Expr> = parsed.into_iter().map(fold).collect::<Result<_, _>>().unwrap();
    let twice: Vec<Expr> = once.clone().into_iter().map(fold).collect::<Result<_, _>>().unwrap();

    assert_eq!(twice, once);
}

#[test]
fn folding_preserves_semantics() {
    let src = "x = 2 + 3 * 4\nz = 7 % 4 + 1\nw = 6 / 2 - 9\ny = 0\nif 10 < 3:\n    y = 1\nif 2 == 2:\n    y = y + 2\n";

    let mut folded = Context::new();
    folded.run(&parse_source(src).unwrap()).unwrap();

    let mut unfolded = Context::new();
    unfolded.run(&parse_unfolded(src)).unwrap();

    for name in ["x", "z", "w", "y"] {
        assert_eq!(variable(&folded, name), variable(&unfolded, name));
    }
    assert_eq!(variable(&folded, "y"), Value::Integer(2));
}

#[test]
fn folding_collapses_literal_operations() {
    let program = parse_source("x = 2 + 3 * 4\n").unwrap();

    let Expr::Operation { right, .. } = &program[0] else {
        panic!("expected an assignment, found {}", program[0]);
    };
    assert_eq!(**right,
               Expr::Literal { value: LiteralValue::Integer(14),
                               line:  1 });
}

#[test]
fn folding_reaches_block_conditions_and_bodies() {
    let program = parse_source("while 1 < 2:\n    x = 2 * 3\n").unwrap();

    let Expr::Block { condition, body, .. } = &program[0] else {
        panic!("expected a block, found {}", program[0]);
    };
    assert_eq!(**condition,
               Expr::Literal { value: LiteralValue::Bool(true),
                               line:  1 });
    assert!(matches!(&body[0],
                     Expr::Operation { right, .. }
                         if matches!(**right, Expr::Literal { .. })));
}

#[test]
fn division_by_zero_literal_fails_while_folding() {
    assert!(parse_source("x = 1 / 0\n").is_err());
    assert!(parse_source("x = 5 % 0\n").is_err());
}

#[test]
fn division_by_zero_variable_fails_at_runtime() {
    assert!(parse_source("x = 0\ny = 1 / x\n").is_ok());
    assert_failure("x = 0\ny = 1 / x\n");
    assert_failure("x = 0\ny = 1 % x\n");
}

#[test]
fn grouping_preserves_statement_order() {
    let src = "a = 1\nwhile a < 3:\n    b = 2\n    if b > 1:\n        c = 3\nd = 4\n";
    let lines = tokenize_source(src).unwrap();

    let mut flattened = Vec::new();
    flatten(&group_lines(&lines), &mut flattened);

    let stripped: Vec<TokenLine> =
        lines.iter()
             .map(|line| {
                 let depth = line.tokens
                                 .iter()
                                 .take_while(|token| **token == Token::Indent)
                                 .count();
                 TokenLine { number: line.number,
                             tokens: line.tokens[depth..].to_vec(), }
             })
             .collect();

    assert_eq!(flattened, stripped);
}

fn flatten(elements: &[LineGroup], out: &mut Vec<TokenLine>) {
    for element in elements {
        match element {
            LineGroup::Line(line) => out.push(line.clone()),
            LineGroup::Nested(inner) => flatten(inner, out),
        }
    }
}

#[test]
fn indentation_may_jump_more_than_one_level() {
    // The grouper is deliberately permissive: a body indented three levels
    // under its header is accepted and simply nests deeper.
    let context = run_program("x = 0\nif x == 0:\n            x = 1\n");
    assert_eq!(variable(&context, "x"), Value::Integer(1));
}

#[test]
fn orphan_indent_is_error() {
    assert_failure("    x = 1\n");
    assert_failure("x = 1\n        y = 2\n");
}

#[test]
fn block_header_requires_a_body() {
    assert_failure("while true\n");
    assert_failure("if 1 < 2:\nx = 3\n");
}

#[test]
fn blank_lines_are_skipped() {
    let context = run_program("\n\nx = 1\n\n");
    assert_eq!(variable(&context, "x"), Value::Integer(1));
}

#[test]
fn header_colon_is_decorative() {
    // The expression parser stops at the `:`; the rest of the header line is
    // ignored, so omitting the colon parses identically.
    let with_colon = run_program("x = 0\nif x == 0:\n    x = 1\n");
    let without_colon = run_program("x = 0\nif x == 0\n    x = 1\n");
    assert_eq!(variable(&with_colon, "x"), variable(&without_colon, "x"));
}

#[test]
fn lone_bang_is_invalid() {
    assert_failure("x = 1 ! 2\n");
}

#[test]
fn unexpected_characters_fail_to_lex() {
    assert_failure("x = 1 \u{7f}\n");
    assert_failure("x = \u{3c0}\n");
}

#[test]
fn oversized_integer_literal_fails_to_lex() {
    assert_failure("x = 99999999999999999999\n");
}

#[test]
fn malformed_expressions_fail_to_parse() {
    assert_failure("x = )\n");
    assert_failure("x = f(1\n");
    assert_failure("x = 1 +\n");
}

#[test]
fn boolean_constants_are_bound() {
    let context = run_program("x = true\ny = 0\nif x:\n    y = 1\nif false == false:\n    y += 1\n");
    assert_eq!(variable(&context, "x"), Value::Bool(true));
    assert_eq!(variable(&context, "y"), Value::Integer(2));
}

#[test]
fn comparisons_produce_booleans() {
    let cases = [(Operator::Less, true),
                 (Operator::LessEqual, true),
                 (Operator::Greater, false),
                 (Operator::GreaterEqual, false),
                 (Operator::NotEqual, true),
                 (Operator::Equal, false)];

    for (operator, expected) in cases {
        assert_eq!(eval_binary(operator, &Value::Integer(2), &Value::Integer(3), 1).unwrap(),
                   Value::Bool(expected));
    }
}

#[test]
fn equality_across_kinds_is_false_not_an_error() {
    let context = run_program("x = 0\nif true == 1:\n    x = 1\nif true != 1:\n    x = 2\n");
    assert_eq!(variable(&context, "x"), Value::Integer(2));

    let equal = eval_binary(Operator::Equal, &Value::Bool(true), &Value::Integer(1), 1).unwrap();
    assert_eq!(equal, Value::Bool(false));
}

#[test]
fn zero_and_empty_values_are_falsy() {
    let context = run_program("x = 0\ny = 7\nif x:\n    y = 1\nif x == 0:\n    y = 2\n");
    assert_eq!(variable(&context, "y"), Value::Integer(2));
}

#[test]
fn chr_builds_strings() {
    let context = run_program("s = chr(72) + chr(105)\nt = 0\nif chr(65) < chr(66):\n    t = 1\n");
    assert_eq!(variable(&context, "s"), Value::Str("Hi".to_string()));
    assert_eq!(variable(&context, "t"), Value::Integer(1));
}

#[test]
fn int_converts_values() {
    let context = run_program("a = int(41)\nb = int(true)\nc = int(chr(57))\n");
    assert_eq!(variable(&context, "a"), Value::Integer(41));
    assert_eq!(variable(&context, "b"), Value::Integer(1));
    assert_eq!(variable(&context, "c"), Value::Integer(9));
}

#[test]
fn int_truncates_reals_toward_zero() {
    assert_eq!(Builtin::Int.call(&Value::Real(2.9), 1).unwrap(), Value::Integer(2));
    assert_eq!(Builtin::Int.call(&Value::Real(-2.9), 1).unwrap(), Value::Integer(-2));
}

#[test]
fn int_rejects_unparsable_strings() {
    assert_failure("x = int(chr(65))\n");
}

#[test]
fn chr_rejects_invalid_codes() {
    assert_failure("x = chr(1114112)\n");
    assert_failure("x = chr(0 - 1)\n");
}

#[test]
fn print_produces_no_value() {
    let context = run_program("x = print(5)\n");
    assert_eq!(variable(&context, "x"), Value::Null);
}

#[test]
fn only_builtins_are_callable() {
    assert_failure("x = 5\ny = x(1)\n");
    assert_failure("y = f(1)\n");
}

#[test]
fn builtins_can_be_rebound() {
    // The environment is one flat namespace with nothing reserved.
    let context = run_program("print = 3\nx = print + 1\n");
    assert_eq!(variable(&context, "x"), Value::Integer(4));
}

#[test]
fn mixed_arithmetic_promotes_to_real() {
    let sum = eval_binary(Operator::Add, &Value::Integer(2), &Value::Real(0.5), 1).unwrap();
    assert_eq!(sum, Value::Real(2.5));

    let less = eval_binary(Operator::Less, &Value::Integer(2), &Value::Real(2.5), 1).unwrap();
    assert_eq!(less, Value::Bool(true));

    let equal = eval_binary(Operator::Equal, &Value::Integer(2), &Value::Real(2.0), 1).unwrap();
    assert_eq!(equal, Value::Bool(true));
}

#[test]
fn real_division_by_zero_is_error() {
    assert!(eval_binary(Operator::Div, &Value::Real(1.0), &Value::Real(0.0), 1).is_err());
}

#[test]
fn arithmetic_on_mismatched_kinds_is_error() {
    assert!(eval_binary(Operator::Add, &Value::Integer(1), &Value::Bool(true), 1).is_err());
    assert!(eval_binary(Operator::Less, &Value::Str("a".to_string()), &Value::Integer(1), 1).is_err());
}

#[test]
fn example_script_runs() {
    let script = fs::read_to_string("tests/countdown.pyr").expect("missing file");
    assert_success(&script);
}
