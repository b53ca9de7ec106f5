use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in one source line.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Keywords are not distinguished here; `while` and `if` reach the parser as
/// ordinary identifiers, matching the source language's keyword-free lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    /// Identifier tokens: a letter or underscore followed by alphanumerics or
    /// underscores, such as `x` or `loop_count`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Integer literal tokens, such as `42`. A digit run that overflows `i64`
    /// fails to lex.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// One indentation step: exactly four consecutive spaces, or a literal
    /// tab. Maximal munch lets the four-space form win over the single-space
    /// skip below.
    #[token("    ")]
    #[token("\t")]
    Indent,
    /// The line terminator. `tokenize_line` appends one to every line, so a
    /// literal `\n` in the input also maps here.
    #[token("\n")]
    NewLine,
    /// Any single punctuation character in the ASCII bands `!`..`/`, `:`..`@`,
    /// `[`..`^`, `` ` ``, and `{`..`~`. The underscore is carved out of the
    /// third band because it starts identifiers.
    #[regex(r"[!-/:-@\[-^`{-~]", symbol_char)]
    Symbol(char),
    /// Lone spaces (runs shorter than four) are dropped.
    #[regex(r" ", logos::skip)]
    Ignored,
}

/// One physical source line as a token sequence.
///
/// `tokens` always ends with [`Token::NewLine`]; `number` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenLine {
    /// The 1-based source line number.
    pub number: usize,
    /// The tokens of the line, terminated by a newline token.
    pub tokens: Vec<Token>,
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Extracts the single punctuation character from the current token slice.
fn symbol_char(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}

/// Tokenizes one source line.
///
/// Scans left to right in a single pass. Four-space runs collapse to one
/// [`Token::Indent`]; shorter space runs are dropped one space at a time; any
/// character outside the recognized classes fails the whole line. The
/// returned line is always terminated by a [`Token::NewLine`], whether or not
/// the input carried one.
///
/// # Parameters
/// - `line`: The text of the line, without its trailing newline.
/// - `number`: The 1-based line number, attached to the result and to errors.
///
/// # Errors
/// Returns [`ParseError::UnexpectedCharacter`] naming the first character of
/// the unrecognized input.
///
/// # Example
/// ```
/// use pyrite::interpreter::lexer::{Token, tokenize_line};
///
/// let line = tokenize_line("x = 41", 1).unwrap();
///
/// assert_eq!(line.tokens,
///            vec![Token::Identifier("x".to_string()),
///                 Token::Symbol('='),
///                 Token::Integer(41),
///                 Token::NewLine]);
/// ```
pub fn tokenize_line(line: &str, number: usize) -> Result<TokenLine, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        if let Ok(token) = token {
            tokens.push(token);
        } else {
            let character = lexer.slice().chars().next().unwrap_or('\0');
            return Err(ParseError::UnexpectedCharacter { character,
                                                         line: number });
        }
    }

    if tokens.last() != Some(&Token::NewLine) {
        tokens.push(Token::NewLine);
    }

    Ok(TokenLine { number, tokens })
}

/// Tokenizes a whole source text, one [`TokenLine`] per physical line.
///
/// No token ever spans a line boundary; each line is lexed independently.
///
/// # Errors
/// Returns the first [`ParseError`] any line produces.
pub fn tokenize_source(source: &str) -> Result<Vec<TokenLine>, ParseError> {
    source.lines()
          .enumerate()
          .map(|(index, line)| tokenize_line(line, index + 1))
          .collect()
}
