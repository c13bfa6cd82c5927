use crate::lang::token::Ident;

/// ## Statement address
///
/// Store position of a line and the index of a statement within it.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Address {
    pub line: usize,
    pub statement: usize,
}

impl Address {
    pub fn new(line: usize, statement: usize) -> Address {
        Address { line, statement }
    }

    pub fn start_of(line: usize) -> Address {
        Address { line, statement: 0 }
    }
}

/// The statement executing and where execution resumes after it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub current: Address,
    pub next: Address,
}

impl Cursor {
    pub fn start(at: Address) -> Cursor {
        Cursor {
            current: at,
            next: at,
        }
    }
}

/// ## Active FOR loop
///
/// `body` is the statement after the FOR.

#[derive(Debug, Clone, PartialEq)]
pub struct LoopFrame {
    pub var: Ident,
    pub end: f64,
    pub step: f64,
    pub body: Address,
}

impl LoopFrame {
    /// A zero step never finishes.
    pub fn is_finished(&self, value: f64) -> bool {
        (self.step > 0.0 && value > self.end) || (self.step < 0.0 && value < self.end)
    }
}

/// What the run loop does after a statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flow {
    Next,
    Jump,
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(end: f64, step: f64) -> LoopFrame {
        LoopFrame {
            var: Ident::new("I"),
            end,
            step,
            body: Address::default(),
        }
    }

    #[test]
    fn test_is_finished() {
        assert!(!frame(3.0, 1.0).is_finished(3.0));
        assert!(frame(3.0, 1.0).is_finished(4.0));
        assert!(!frame(1.0, -1.0).is_finished(1.0));
        assert!(frame(1.0, -1.0).is_finished(0.0));
        assert!(!frame(1.0, 0.0).is_finished(100.0));
    }

    #[test]
    fn test_address_order() {
        assert!(Address::new(1, 5) < Address::new(2, 0));
        assert!(Address::new(2, 0) < Address::new(2, 1));
    }
}
