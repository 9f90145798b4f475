use std::fmt;
use std::str::FromStr;

use crate::error::AstError;

/// Marker used when none is configured.
pub const DEFAULT_VARIABLE: Variable = Variable('y');

/// The symbol standing for the polynomial's single variable.
///
/// Restricted to ASCII letters so it can never collide with digits,
/// sign characters or the `^` exponent marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable(char);

impl Variable {
    pub fn new(symbol: char) -> Result<Self, AstError> {
        if symbol.is_ascii_alphabetic() {
            Ok(Variable(symbol))
        } else {
            Err(AstError::InvalidVariable(symbol.to_string()))
        }
    }

    pub fn symbol(self) -> char {
        self.0
    }
}

impl Default for Variable {
    fn default() -> Self {
        DEFAULT_VARIABLE
    }
}

impl FromStr for Variable {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Variable::new(c),
            _ => Err(AstError::InvalidVariable(s.to_string())),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
