use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, Operator},
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// The operator bands, loosest-binding first. Within a band, operators are
/// left-associative; each band parses its operands with the next band, and
/// the band after the last is the atom level.
const BANDS: [&[char]; 3] = [&['<', '>', '!', '='], &['+', '-'], &['*', '/', '%']];

/// Parses a full expression from the tokens of one statement line.
///
/// This is the entry point for expression parsing. It begins at the loosest
/// precedence band, comparison and assignment, and recursively descends
/// through the tighter bands to the atoms. Tokens after the expression are
/// left unconsumed; the statement parser ignores them, which is how the
/// decorative `:` on block header lines is skipped.
///
/// # Parameters
/// - `tokens`: Token iterator over the (indent-stripped) statement line.
/// - `line`: The statement's source line number.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_band(tokens, 0, line)
}

/// Parses one precedence band.
///
/// The rule for band `n` is: `band_n := band_n+1 (op_n band_n+1)*`, where a
/// band operator immediately followed by `=` upgrades to its two-character
/// form (`<=`, `>=`, `!=`, `==`, `+=`, `-=`, `*=`, `/=`, `%=`). A lone `!`
/// has no single-character meaning and is rejected.
fn parse_band<'a, I>(tokens: &mut Peekable<I>, band: usize, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(operators) = BANDS.get(band) else {
        return parse_atom(tokens, line);
    };

    let mut left = parse_band(tokens, band + 1, line)?;
    loop {
        if let Some(Token::Symbol(c)) = tokens.peek()
           && operators.contains(c)
        {
            let character = *c;
            tokens.next();

            let compound = matches!(tokens.peek(), Some(Token::Symbol('=')));
            if compound {
                tokens.next();
            }

            let Some(operator) = band_operator(character, compound) else {
                let mut spelling = character.to_string();
                if compound {
                    spelling.push('=');
                }
                return Err(ParseError::InvalidOperator { operator: spelling,
                                                         line });
            };

            let right = parse_band(tokens, band + 1, line)?;
            left = Expr::Operation { left: Box::new(left),
                                     operator,
                                     right: Box::new(right),
                                     line };
            continue;
        }
        break;
    }

    Ok(left)
}

/// Parses the smallest unit of syntax: an identifier or an integer literal,
/// followed by any chain of `( expression )` call suffixes.
///
/// Chained calls nest leftward, so `f(1)(2)` becomes a call whose callee is
/// the call `f(1)` and whose argument is `2`. There is no parenthesized
/// grouping: a `(` is only meaningful after an atom.
fn parse_atom<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut atom = match tokens.next() {
        Some(Token::Identifier(name)) => Expr::Identifier { name: name.clone(),
                                                            line },
        Some(Token::Integer(value)) => Expr::Literal { value: LiteralValue::Integer(*value),
                                                       line },
        Some(token) => {
            return Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                     line });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    };

    loop {
        if let Some(Token::Symbol('(')) = tokens.peek() {
            tokens.next();
            let argument = parse_expression(tokens, line)?;
            match tokens.next() {
                Some(Token::Symbol(')')) => {},
                _ => return Err(ParseError::ExpectedClosingParen { line }),
            }
            atom = Expr::FunctionCall { callee:   Box::new(atom),
                                        argument: Box::new(argument),
                                        line };
            continue;
        }
        break;
    }

    Ok(atom)
}

/// Maps a band character and its optional `=` upgrade to an operator.
///
/// Returns `None` for the one spelling with no meaning: a lone `!`.
const fn band_operator(character: char, compound: bool) -> Option<Operator> {
    Some(match (character, compound) {
             ('<', false) => Operator::Less,
             ('<', true) => Operator::LessEqual,
             ('>', false) => Operator::Greater,
             ('>', true) => Operator::GreaterEqual,
             ('=', false) => Operator::Assign,
             ('=', true) => Operator::Equal,
             ('!', true) => Operator::NotEqual,
             ('+', false) => Operator::Add,
             ('+', true) => Operator::AddAssign,
             ('-', false) => Operator::Sub,
             ('-', true) => Operator::SubAssign,
             ('*', false) => Operator::Mul,
             ('*', true) => Operator::MulAssign,
             ('/', false) => Operator::Div,
             ('/', true) => Operator::DivAssign,
             ('%', false) => Operator::Mod,
             ('%', true) => Operator::ModAssign,
             _ => return None,
         })
}
