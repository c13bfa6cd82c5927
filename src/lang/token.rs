pub use super::ident::Ident;
use super::{Error, MAX_LINE_NUMBER};
use crate::error;
use std::collections::HashMap;

thread_local!(
    static STRING_TO_WORD: HashMap<String, Word> = Word::ALL
        .iter()
        .map(|w| (w.to_string(), w.clone()))
        .collect();
);

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Remark(String),
    Literal(Literal),
    Word(Word),
    Operator(Operator),
    Ident(Ident),
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
}

impl Token {
    /// Single character operators and punctuation.
    pub fn from_char(ch: char) -> Option<Token> {
        Some(match ch {
            '+' => Token::Operator(Operator::Plus),
            '-' => Token::Operator(Operator::Minus),
            '*' => Token::Operator(Operator::Multiply),
            '/' => Token::Operator(Operator::Divide),
            '=' => Token::Operator(Operator::Equal),
            '<' => Token::Operator(Operator::Less),
            '>' => Token::Operator(Operator::Greater),
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            ';' => Token::Semicolon,
            ':' => Token::Colon,
            _ => return None,
        })
    }

    pub fn is_word(&self, word: Word) -> bool {
        matches!(self, Token::Word(w) if *w == word)
    }

    pub fn is_operator(&self, op: Operator) -> bool {
        matches!(self, Token::Operator(o) if *o == op)
    }

    /// A token that can stand alone as an operand.
    pub fn is_value(&self) -> bool {
        matches!(self, Token::Literal(_) | Token::Ident(_))
    }

    pub fn line_number(&self) -> Result<u16, Error> {
        let msg = "INVALID LINE NUMBER";
        if let Token::Literal(Literal::Number(s)) = self {
            if s.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(line) = s.parse::<u16>() {
                    if line > 0 && line <= MAX_LINE_NUMBER {
                        return Ok(line);
                    }
                }
                return Err(error!(UndefinedLine; msg));
            }
        }
        Err(error!(SyntaxError; msg))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Remark(s) => write!(f, "{}", s),
            Literal(s) => write!(f, "{}", s),
            Word(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Colon => write!(f, ":"),
            Semicolon => write!(f, ";"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(String),
    String(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Literal::*;
        match self {
            Number(s) => write!(f, "{}", s),
            String(s) => write!(f, "\"{}\"", s),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Word {
    Abs,
    Add,
    Clear,
    Data,
    Dir,
    Div,
    End,
    Floor,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Int,
    Let,
    List,
    Load,
    New,
    Next,
    Print,
    Read,
    Rem,
    Restore,
    Return,
    Rnd,
    Run,
    Set,
    Sin,
    Sqr,
    Step,
    Stop,
    Sub,
    Tab,
    Then,
    To,
    Usr,
}

impl Word {
    const ALL: [Word; 36] = [
        Word::Abs,
        Word::Add,
        Word::Clear,
        Word::Data,
        Word::Dir,
        Word::Div,
        Word::End,
        Word::Floor,
        Word::For,
        Word::Gosub,
        Word::Goto,
        Word::If,
        Word::Input,
        Word::Int,
        Word::Let,
        Word::List,
        Word::Load,
        Word::New,
        Word::Next,
        Word::Print,
        Word::Read,
        Word::Rem,
        Word::Restore,
        Word::Return,
        Word::Rnd,
        Word::Run,
        Word::Set,
        Word::Sin,
        Word::Sqr,
        Word::Step,
        Word::Stop,
        Word::Sub,
        Word::Tab,
        Word::Then,
        Word::To,
        Word::Usr,
    ];

    /// Case-insensitive keyword lookup.
    pub fn from_string(s: &str) -> Option<Word> {
        let s = s.to_ascii_uppercase();
        STRING_TO_WORD.with(|stw| stw.get(&s).copied())
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Abs => write!(f, "ABS"),
            Add => write!(f, "ADD"),
            Clear => write!(f, "CLEAR"),
            Data => write!(f, "DATA"),
            Dir => write!(f, "DIR"),
            Div => write!(f, "DIV"),
            End => write!(f, "END"),
            Floor => write!(f, "FLOOR"),
            For => write!(f, "FOR"),
            Gosub => write!(f, "GOSUB"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Input => write!(f, "INPUT"),
            Int => write!(f, "INT"),
            Let => write!(f, "LET"),
            List => write!(f, "LIST"),
            Load => write!(f, "LOAD"),
            New => write!(f, "NEW"),
            Next => write!(f, "NEXT"),
            Print => write!(f, "PRINT"),
            Read => write!(f, "READ"),
            Rem => write!(f, "REM"),
            Restore => write!(f, "RESTORE"),
            Return => write!(f, "RETURN"),
            Rnd => write!(f, "RND"),
            Run => write!(f, "RUN"),
            Set => write!(f, "SET"),
            Sin => write!(f, "SIN"),
            Sqr => write!(f, "SQR"),
            Step => write!(f, "STEP"),
            Stop => write!(f, "STOP"),
            Sub => write!(f, "SUB"),
            Tab => write!(f, "TAB"),
            Then => write!(f, "THEN"),
            To => write!(f, "TO"),
            Usr => write!(f, "USR"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    Less,
    Greater,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Equal => write!(f, "="),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
        }
    }
}
