use crate::error;
use crate::lang::token::{Literal, Operator, Token};
use crate::lang::Error;

/// ## Pending DATA pool
///
/// Values appended in program order by the DATA scan, consumed by READ.

#[derive(Debug)]
pub struct Data {
    values: Vec<f64>,
    read: usize,
    max_len: usize,
}

impl Data {
    pub fn new(max_len: usize) -> Data {
        Data {
            values: vec![],
            read: 0,
            max_len,
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.read = 0;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[cfg(test)]
    pub fn remaining(&self) -> usize {
        self.values.len() - self.read
    }

    pub fn push(&mut self, value: f64) -> Result<(), Error> {
        if self.values.len() >= self.max_len {
            return Err(error!(OutOfMemory; "TOO MANY DATA VALUES"));
        }
        self.values.push(value);
        Ok(())
    }

    /// Append the values of one DATA statement. Values before an
    /// error stay in the pool.
    pub fn scan(&mut self, tokens: &[Token]) -> Result<(), Error> {
        let mut iter = tokens.iter();
        while let Some(token) = iter.next() {
            let value = match token {
                Token::Comma => continue,
                Token::Literal(Literal::Number(s)) => number(s)?,
                Token::Operator(Operator::Minus) => match iter.next() {
                    Some(Token::Literal(Literal::Number(s))) => -number(s)?,
                    _ => return Err(error!(SyntaxError; "INVALID DATA")),
                },
                Token::Literal(Literal::String(_)) => {
                    return Err(error!(TypeMismatch; "STRING DATA NOT SUPPORTED"))
                }
                _ => return Err(error!(SyntaxError; "INVALID DATA")),
            };
            self.push(value)?;
        }
        Ok(())
    }

    pub fn read(&mut self) -> Option<f64> {
        let value = self.values.get(self.read).copied()?;
        self.read += 1;
        Some(value)
    }

    pub fn restore(&mut self) {
        self.read = 0;
    }
}

fn number(s: &str) -> Result<f64, Error> {
    s.parse::<f64>()
        .map_err(|_| error!(SyntaxError; "INVALID NUMBER"))
}
