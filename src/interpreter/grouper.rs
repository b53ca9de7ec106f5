use crate::interpreter::lexer::{Token, TokenLine};

/// One element of a grouped program: either a single statement line (its
/// leading indent tokens already stripped) or a nested block of deeper lines.
#[derive(Debug, Clone, PartialEq)]
pub enum LineGroup {
    /// A statement line at the current indentation level.
    Line(TokenLine),
    /// The lines of a more deeply indented block, grouped recursively.
    Nested(Vec<LineGroup>),
}

/// Groups a flat sequence of token lines by indentation depth.
///
/// A line's depth is the number of leading [`Token::Indent`] tokens. A line
/// deeper than the current level opens a nested group at that line's depth;
/// jumps of more than one level are accepted and simply nest deeper. A line
/// shallower than the current level ends the group and is handed back to the
/// caller; reaching the end of input ends every open group. Grouping never
/// fails: shape errors (an indented block with no header) are left for the
/// parser to detect.
///
/// # Example
/// ```
/// use pyrite::interpreter::{
///     grouper::{LineGroup, group_lines},
///     lexer::tokenize_source,
/// };
///
/// let lines = tokenize_source("while x:\n    y = 1\nz = 2\n").unwrap();
/// let grouped = group_lines(&lines);
///
/// assert_eq!(grouped.len(), 3);
/// assert!(matches!(grouped[1], LineGroup::Nested(_)));
/// ```
#[must_use]
pub fn group_lines(lines: &[TokenLine]) -> Vec<LineGroup> {
    let (_, elements) = group_from(lines, 0, 0);
    elements
}

/// Walks `lines` from `start`, collecting elements at indentation `indent`.
///
/// Returns the index of the last line that belongs to the group, so the
/// caller resumes on the following one.
fn group_from(lines: &[TokenLine], start: usize, indent: usize) -> (usize, Vec<LineGroup>) {
    let mut elements = Vec::new();
    let mut index = start;

    while index < lines.len() {
        let line = &lines[index];
        let depth = line.tokens
                        .iter()
                        .take_while(|token| **token == Token::Indent)
                        .count();

        if depth < indent {
            return (index - 1, elements);
        }
        if depth > indent {
            let (resume, nested) = group_from(lines, index, depth);
            elements.push(LineGroup::Nested(nested));
            index = resume;
        } else {
            elements.push(LineGroup::Line(TokenLine { number: line.number,
                                                      tokens: line.tokens[depth..].to_vec(), }));
        }
        index += 1;
    }

    (index, elements)
}
