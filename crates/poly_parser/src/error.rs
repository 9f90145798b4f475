use thiserror::Error;

/// Why a single term could not be parsed.
///
/// Every variant carries the offending segment (sign included, whitespace
/// already stripped) so callers can report it verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid integer literal '{literal}' in term '{segment}'")]
    InvalidInteger { segment: String, literal: String },
    #[error("malformed exponent in term '{segment}'")]
    MalformedExponent { segment: String },
    #[error("exponent '{exponent}' in term '{segment}' is out of range")]
    ExponentOutOfRange { segment: String, exponent: String },
    #[error("term '{segment}' contains more than one '{variable}'")]
    MultipleVariables { segment: String, variable: char },
    #[error("empty term '{segment}'")]
    EmptyTerm { segment: String },
}

impl ParseError {
    /// The segment that was skipped.
    pub fn segment(&self) -> &str {
        match self {
            ParseError::InvalidInteger { segment, .. }
            | ParseError::MalformedExponent { segment }
            | ParseError::ExponentOutOfRange { segment, .. }
            | ParseError::MultipleVariables { segment, .. }
            | ParseError::EmptyTerm { segment } => segment,
        }
    }

    /// Stable machine-readable code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::InvalidInteger { .. } => "E_INTEGER",
            ParseError::MalformedExponent { .. } => "E_EXPONENT",
            ParseError::ExponentOutOfRange { .. } => "E_EXPONENT_RANGE",
            ParseError::MultipleVariables { .. } => "E_MULTI_VAR",
            ParseError::EmptyTerm { .. } => "E_EMPTY",
        }
    }
}
