use std::fmt;

use num_traits::{One, Signed};
use poly_ast::{Polynomial, Term, Variable};

/// Writes terms as `3y^2 + 2y - 5` for a given variable marker.
///
/// Terms are written in the order given; callers wanting canonical output
/// normalize first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    variable: Variable,
}

impl Renderer {
    pub fn new(variable: Variable) -> Self {
        Renderer { variable }
    }

    pub fn render(&self, terms: &[Term]) -> String {
        self.display(terms).to_string()
    }

    pub fn display<'a>(&self, terms: &'a [Term]) -> DisplayPoly<'a> {
        DisplayPoly {
            terms,
            variable: self.variable,
        }
    }
}

/// Render with the default `y` marker.
pub fn render(terms: &[Term]) -> String {
    Renderer::default().render(terms)
}

/// `Display` adapter, mirroring how expressions are displayed with a context.
pub struct DisplayPoly<'a> {
    pub terms: &'a [Term],
    pub variable: Variable,
}

impl fmt::Display for DisplayPoly<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        for (i, term) in self.terms.iter().enumerate() {
            let negative = term.coefficient().is_negative();
            match (i, negative) {
                (0, false) => {}
                (0, true) => write!(f, "- ")?,
                (_, false) => write!(f, " + ")?,
                (_, true) => write!(f, " - ")?,
            }
            write_magnitude(f, term, self.variable)?;
        }
        Ok(())
    }
}

// Unsigned body of a term: `5`, `y`, `3y`, `y^4`, `2y^4`.
fn write_magnitude(f: &mut fmt::Formatter<'_>, term: &Term, variable: Variable) -> fmt::Result {
    let abs = term.coefficient().abs();
    if term.degree() == 0 {
        return write!(f, "{}", abs);
    }

    if !abs.is_one() {
        write!(f, "{}", abs)?;
    }
    write!(f, "{}", variable)?;
    if term.degree() > 1 {
        write!(f, "^{}", term.degree())?;
    }
    Ok(())
}

pub trait Format {
    fn to_canonical_string(&self) -> String;
}

impl Format for [Term] {
    fn to_canonical_string(&self) -> String {
        render(self)
    }
}

impl Format for Polynomial {
    fn to_canonical_string(&self) -> String {
        render(self.terms())
    }
}
