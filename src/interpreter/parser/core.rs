use crate::{
    ast::{BlockKind, Expr},
    error::ParseError,
    interpreter::{
        grouper::LineGroup,
        lexer::Token,
        parser::expression::parse_expression,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a grouped program into a sequence of statements.
///
/// Each element of the grouped input is either one statement line or a
/// nested block belonging to the `while`/`if` header line just before it.
/// A nested block with no header is an indentation error; a line holding
/// only its newline yields no statement. Block bodies re-enter this function
/// recursively.
///
/// # Parameters
/// - `elements`: The grouped lines of one indentation level.
///
/// # Returns
/// The statements of this level, in source order.
///
/// # Errors
/// Returns a [`ParseError`] for orphaned indentation, malformed expressions,
/// or a block header with no indented body.
pub fn parse_program(elements: &[LineGroup]) -> ParseResult<Vec<Expr>> {
    let mut statements = Vec::new();
    let mut index = 0;

    while index < elements.len() {
        let (next_index, statement) = parse_statement(elements, index)?;
        if let Some(statement) = statement {
            statements.push(statement);
        }
        index = next_index;
    }

    Ok(statements)
}

/// Parses the element at `index` as one statement.
///
/// Returns the index to resume at (one past the line for ordinary
/// statements, two past for a block header that consumed its body group)
/// and the parsed statement, or `None` for a blank line.
fn parse_statement(elements: &[LineGroup], index: usize) -> ParseResult<(usize, Option<Expr>)> {
    let line_tokens = match &elements[index] {
        LineGroup::Nested(group) => {
            return Err(ParseError::UnexpectedIndent { line: first_line(group) });
        },
        LineGroup::Line(line_tokens) => line_tokens,
    };

    let line = line_tokens.number;
    let mut tokens = line_tokens.tokens.iter().peekable();

    if let Some(Token::NewLine) = tokens.peek() {
        return Ok((index + 1, None));
    }

    if let Some(Token::Identifier(name)) = tokens.peek()
       && let Some(kind) = BlockKind::from_keyword(name)
    {
        tokens.next();
        let condition = parse_expression(&mut tokens, line)?;

        let body = match elements.get(index + 1) {
            Some(LineGroup::Nested(group)) => parse_program(group)?,
            _ => return Err(ParseError::ExpectedIndentedBlock { line }),
        };

        return Ok((index + 2,
                   Some(Expr::Block { kind,
                                      condition: Box::new(condition),
                                      body,
                                      line })));
    }

    let statement = parse_expression(&mut tokens, line)?;
    Ok((index + 1, Some(statement)))
}

/// Digs out the first source line number inside a nested group, for
/// positioning indentation errors.
fn first_line(group: &[LineGroup]) -> usize {
    match group.first() {
        Some(LineGroup::Line(line_tokens)) => line_tokens.number,
        Some(LineGroup::Nested(inner)) => first_line(inner),
        None => 0,
    }
}
