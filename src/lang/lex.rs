use super::{token::*, Error, LineNumber, MAX_LINE_NUMBER};
use crate::error;

/// Split one line of text into its line number and tokens.
/// Lexical errors are returned alongside; lexing continues past them.
pub fn lex(s: &str) -> (LineNumber, Vec<Token>, Vec<Error>) {
    BasicLexer::lex(s)
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_line_end(c: char) -> bool {
    c == '\r' || c == '\n'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

// Underscores may continue a name but never start one.
fn is_basic_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars().peek().copied() {
            if !is_basic_whitespace(pk) {
                break;
            }
            self.chars().next();
        }
    }

    fn digit_follows_point(&mut self) -> bool {
        let mut ahead = self.chars().clone();
        ahead.next();
        match ahead.peek() {
            Some(ch) => is_basic_digit(*ch),
            None => false,
        }
    }

    fn number(&mut self) -> Token {
        let mut s = String::new();
        let mut decimal = false;
        while let Some(pk) = self.chars().peek().copied() {
            if pk == '.' {
                if decimal {
                    break;
                }
                decimal = true;
            } else if !is_basic_digit(pk) {
                break;
            }
            s.push(pk);
            self.chars().next();
        }
        Token::Literal(Literal::Number(s))
    }

    /// `Err` carries the text of an unterminated string.
    fn string(&mut self) -> Result<Token, String> {
        let mut s = String::new();
        self.chars().next();
        loop {
            match self.chars().peek().copied() {
                Some('"') => {
                    self.chars().next();
                    return Ok(Token::Literal(Literal::String(s)));
                }
                Some(ch) if !is_basic_line_end(ch) => {
                    s.push(ch);
                    self.chars().next();
                }
                _ => return Err(s),
            }
        }
    }

    fn alphabetic(&mut self) -> Token {
        let mut s = String::new();
        while let Some(pk) = self.chars().peek().copied() {
            if !is_basic_name_char(pk) {
                break;
            }
            s.push(pk);
            self.chars().next();
        }
        if let Some('$') = self.chars().peek() {
            self.chars().next();
            s.push('$');
            return Token::Ident(Ident::new(&s));
        }
        match Word::from_string(&s) {
            Some(word) => Token::Word(word),
            None => Token::Ident(Ident::new(&s)),
        }
    }

    fn remark_text(&mut self) -> Option<Token> {
        self.whitespace();
        let mut s = String::new();
        while let Some(ch) = self.chars().next() {
            if is_basic_line_end(ch) {
                break;
            }
            s.push(ch);
        }
        let s = s.trim_end();
        if s.is_empty() {
            None
        } else {
            Some(Token::Remark(s.to_string()))
        }
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    remark: bool,
    done: bool,
    errors: Vec<Error>,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }
            self.whitespace();
            let pk = match self.chars.peek().copied() {
                Some(pk) if !is_basic_line_end(pk) => pk,
                _ => {
                    self.done = true;
                    return None;
                }
            };
            if self.remark {
                self.done = true;
                return self.remark_text();
            }
            if is_basic_digit(pk) || (pk == '.' && self.digit_follows_point()) {
                return Some(self.number());
            }
            if is_basic_alphabetic(pk) {
                let token = self.alphabetic();
                if token.is_word(Word::Rem) {
                    self.remark = true;
                }
                return Some(token);
            }
            if pk == '"' {
                return match self.string() {
                    Ok(token) => Some(token),
                    Err(s) => {
                        tracing::debug!(text = %s, "unterminated string");
                        self.errors.push(error!(SyntaxError; "UNTERMINATED STRING"));
                        self.done = true;
                        Some(Token::Unknown(format!("\"{}", s)))
                    }
                };
            }
            self.chars.next();
            if pk == '\'' {
                self.remark = true;
                return Some(Token::Word(Word::Rem));
            }
            if let Some(token) = Token::from_char(pk) {
                return Some(token);
            }
            tracing::warn!(character = %pk, "invalid character skipped");
            self.errors
                .push(error!(SyntaxError; &format!("INVALID CHARACTER {}", pk)));
        }
    }
}

impl<'a> BasicLexer<'a> {
    fn new(s: &'a str) -> BasicLexer<'a> {
        BasicLexer {
            chars: s.chars().peekable(),
            remark: false,
            done: false,
            errors: vec![],
        }
    }

    fn lex(s: &str) -> (LineNumber, Vec<Token>, Vec<Error>) {
        let mut lexer = BasicLexer::new(s);
        if let Some(Token::Literal(Literal::Number(n))) = lexer.next() {
            if let Some(line_number) = BasicLexer::line_number(&n) {
                let tokens: Vec<Token> = lexer.by_ref().collect();
                return (line_number, tokens, lexer.errors);
            }
        }
        // Not a line number; the first token belongs to the statement.
        let mut lexer = BasicLexer::new(s);
        let tokens: Vec<Token> = lexer.by_ref().collect();
        (None, tokens, lexer.errors)
    }

    /// Zero is accepted and means a direct line.
    fn line_number(s: &str) -> Option<LineNumber> {
        if !s.chars().all(|c| is_basic_digit(c)) {
            return None;
        }
        match s.parse::<u16>() {
            Ok(0) => Some(None),
            Ok(n) if n <= MAX_LINE_NUMBER => Some(Some(n)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(s: &str) -> Token {
        Token::Literal(Literal::Number(s.to_string()))
    }

    #[test]
    fn test_line_number_split() {
        let (ln, tokens, errors) = lex("10 PRINT 1");
        assert_eq!(ln, Some(10));
        assert_eq!(tokens, vec![Token::Word(Word::Print), number("1")]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_fractional_first_token_is_direct() {
        let (ln, tokens, _) = lex("10.5 PRINT");
        assert_eq!(ln, None);
        assert_eq!(tokens, vec![number("10.5"), Token::Word(Word::Print)]);
    }

    #[test]
    fn test_zero_line_is_direct() {
        let (ln, tokens, _) = lex("0 END");
        assert_eq!(ln, None);
        assert_eq!(tokens, vec![Token::Word(Word::End)]);
    }

    #[test]
    fn test_one_decimal_point() {
        let (_, tokens, _) = lex("PRINT 1.2.3");
        assert_eq!(tokens[1], number("1.2"));
        assert_eq!(tokens[2], number(".3"));
    }

    #[test]
    fn test_tick_consumes_line() {
        let (ln, tokens, errors) = lex("20 ' what? : PRINT");
        assert_eq!(ln, Some(20));
        assert_eq!(
            tokens,
            vec![
                Token::Word(Word::Rem),
                Token::Remark("what? : PRINT".to_string())
            ]
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_unterminated_string() {
        let (_, tokens, errors) = lex("PRINT \"ABC");
        assert_eq!(tokens.last(), Some(&Token::Unknown("\"ABC".to_string())));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_invalid_character_skipped() {
        let (_, tokens, errors) = lex("A = 1 & 2");
        assert_eq!(tokens.len(), 4);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "SYNTAX ERROR; INVALID CHARACTER &");
    }

    #[test]
    fn test_underscore_in_name() {
        let (_, tokens, errors) = lex("SET emu_amiga_m68k = TRUE");
        assert_eq!(tokens[1], Token::Ident(Ident::new("emu_amiga_m68k")));
        assert!(errors.is_empty());
    }
}
