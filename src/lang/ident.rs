// Used in both Token and the variable table

#[derive(Debug, PartialEq, Hash, Clone)]
pub enum Ident {
    Plain(String),
    String(String),
}

impl Ident {
    /// Identifiers ending in `$` name string variables.
    pub fn new(s: &str) -> Ident {
        if s.ends_with('$') {
            Ident::String(s.to_string())
        } else {
            Ident::Plain(s.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Ident::Plain(s) | Ident::String(s) => s,
        }
    }

    /// Variable names are case-insensitive.
    pub fn key(&self) -> String {
        self.name().to_ascii_uppercase()
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Ident::String(_))
    }

    pub fn matches(&self, other: &Ident) -> bool {
        self.name().eq_ignore_ascii_case(other.name())
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
