use super::Val;
use crate::error;
use crate::lang::{token::Ident, Error};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Names are case-insensitive. A trailing `$` makes a string variable;
/// everything else is numeric. The type never changes after creation.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<String, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, ident: &Ident) -> bool {
        self.vars.contains_key(&ident.key())
    }

    /// Look without creating.
    pub fn get(&self, ident: &Ident) -> Option<&Val> {
        self.vars.get(&ident.key())
    }

    /// Reading a variable that does not exist creates it with its default.
    pub fn fetch(&mut self, ident: &Ident) -> Val {
        self.vars
            .entry(ident.key())
            .or_insert_with(|| Var::default_val(ident))
            .clone()
    }

    pub fn fetch_number(&mut self, ident: &Ident) -> Result<f64> {
        match self.fetch(ident) {
            Val::Number(n) => Ok(n),
            Val::String(_) => Err(error!(TypeMismatch; &format!("{} IS NOT NUMERIC", ident))),
        }
    }

    pub fn fetch_string(&mut self, ident: &Ident) -> Result<String> {
        match self.fetch(ident) {
            Val::String(s) => Ok(s),
            Val::Number(_) => Err(error!(TypeMismatch; &format!("{} IS NOT A STRING", ident))),
        }
    }

    pub fn store(&mut self, ident: &Ident, value: Val) -> Result<()> {
        if ident.is_string() != value.is_string() {
            return Err(error!(TypeMismatch));
        }
        match self.vars.get_mut(&ident.key()) {
            Some(var) => *var = value,
            None => {
                self.vars.insert(ident.key(), value);
            }
        };
        Ok(())
    }

    fn default_val(ident: &Ident) -> Val {
        if ident.is_string() {
            Val::String(String::new())
        } else {
            Val::Number(0.0)
        }
    }
}
