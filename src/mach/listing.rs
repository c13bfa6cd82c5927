use super::Address;
use crate::error;
use crate::lang::{token::Token, Error, Line};
use std::ops::RangeInclusive;
use std::rc::Rc;

/// ## Program store
///
/// Stored lines kept sorted by line number. A store position is an
/// index into this order; it shifts whenever a new line is inserted.

#[derive(Debug, Clone)]
pub struct Listing {
    source: Vec<Rc<Line>>,
    max_lines: usize,
}

impl Listing {
    pub fn new(max_lines: usize) -> Listing {
        Listing {
            source: vec![],
            max_lines,
        }
    }

    pub fn clear(&mut self) {
        self.source.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Insert or replace by line number.
    pub fn insert(&mut self, line: Line) -> Result<(), Error> {
        if line.is_direct() {
            return Err(error!(InternalError; "DIRECT LINE IN LISTING"));
        }
        match self
            .source
            .binary_search_by_key(&line.number(), |l| l.number())
        {
            Ok(index) => self.source[index] = Rc::new(line),
            Err(index) => {
                if self.source.len() >= self.max_lines {
                    return Err(error!(OutOfMemory; "PROGRAM TOO LARGE"));
                }
                tracing::trace!(line = ?line.number(), position = index, "line inserted");
                self.source.insert(index, Rc::new(line));
            }
        }
        Ok(())
    }

    pub fn position(&self, line_number: u16) -> Option<usize> {
        self.source
            .binary_search_by_key(&Some(line_number), |l| l.number())
            .ok()
    }

    pub fn get(&self, position: usize) -> Option<&Rc<Line>> {
        self.source.get(position)
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.source.iter().map(|l| l.as_ref())
    }

    /// Every statement stored after `address`, in program order.
    pub fn statements_after(
        &self,
        address: Address,
    ) -> impl Iterator<Item = (Address, &[Token])> + '_ {
        self.source
            .iter()
            .enumerate()
            .skip(address.line)
            .flat_map(|(position, line)| {
                line.statements()
                    .enumerate()
                    .map(move |(index, tokens)| (Address::new(position, index), tokens))
            })
            .filter(move |(at, _)| *at > address)
    }

    pub fn range(&self, range: RangeInclusive<u16>) -> impl Iterator<Item = &Line> {
        self.lines().filter(move |l| match l.number() {
            Some(number) => range.contains(&number),
            None => false,
        })
    }
}
