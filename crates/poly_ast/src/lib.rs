pub mod error;
pub mod polynomial;
pub mod term;
pub mod variable;

pub use error::AstError;
pub use polynomial::Polynomial;
pub use term::Term;
pub use variable::{Variable, DEFAULT_VARIABLE};
