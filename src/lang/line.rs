use super::error::Error;
use super::lex::lex;
use super::token::*;
use super::LineNumber;
use std::ops::Range;

/// ## One line of BASIC
///
/// The tokens of a line and where each colon-separated statement lies
/// within them. A statement starting with `IF` or `REM` runs to the end
/// of the line.

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: LineNumber,
    tokens: Vec<Token>,
    statements: Vec<Range<usize>>,
    errors: Vec<Error>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        let (number, tokens, errors) = lex(s);
        let statements = split_statements(&tokens);
        Line {
            number,
            tokens,
            statements,
            errors,
        }
    }

    pub fn from_tokens(number: LineNumber, tokens: Vec<Token>) -> Line {
        let statements = split_statements(&tokens);
        Line {
            number,
            tokens,
            statements,
            errors: vec![],
        }
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn is_direct(&self) -> bool {
        self.number.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Lexical errors found while tokenizing.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn statement_count(&self) -> usize {
        self.statements.len()
    }

    pub fn statement(&self, index: usize) -> Option<&[Token]> {
        self.statements
            .get(index)
            .map(|range| &self.tokens[range.clone()])
    }

    pub fn statements(&self) -> impl Iterator<Item = &[Token]> {
        self.statements
            .iter()
            .map(move |range| &self.tokens[range.clone()])
    }
}

pub fn split_statements(tokens: &[Token]) -> Vec<Range<usize>> {
    let mut statements = vec![];
    let mut start = 0;
    let mut index = 0;
    while index < tokens.len() {
        if index == start && (tokens[index].is_word(Word::If) || tokens[index].is_word(Word::Rem))
        {
            break;
        }
        if tokens[index] == Token::Colon {
            if index > start {
                statements.push(start..index);
            }
            start = index + 1;
        }
        index += 1;
    }
    if start < tokens.len() {
        statements.push(start..tokens.len());
    }
    statements
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = self
            .tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        match self.number {
            Some(number) if s.is_empty() => write!(f, "{}", number),
            Some(number) => write!(f, "{} {}", number, s),
            None => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements() {
        let line = Line::new("10 A=1:PRINT A::B=2");
        assert_eq!(line.statement_count(), 3);
        assert_eq!(line.statement(1).map(|s| s.len()), Some(2));
        assert_eq!(line.statement(3), None);
    }

    #[test]
    fn test_if_runs_to_end_of_line() {
        let line = Line::new("A=1:IF A THEN PRINT 1:PRINT 2");
        assert_eq!(line.statement_count(), 2);
        assert_eq!(line.statement(1).map(|s| s.len()), Some(8));
    }

    #[test]
    fn test_display() {
        let line = Line::new("10 print \"HI\";x");
        assert_eq!(line.to_string(), "10 PRINT \"HI\" ; x");
        assert_eq!(Line::new("20").to_string(), "20");
        assert_eq!(Line::new("30 'note").to_string(), "30 REM note");
    }
}
