use std::collections::BTreeMap;

use num_bigint::BigInt;
use num_traits::Zero;
use poly_ast::{Polynomial, Term};
use tracing::debug;

/// Combine like terms.
///
/// Coefficients are summed per degree; degrees whose sum is zero are dropped
/// and the rest come out in strictly descending degree order. Input order
/// does not matter.
pub fn normalize<I>(terms: I) -> Polynomial
where
    I: IntoIterator<Item = Term>,
{
    let mut by_degree: BTreeMap<u32, BigInt> = BTreeMap::new();
    let mut seen = 0usize;
    for term in terms {
        let (coefficient, degree) = term.into_parts();
        *by_degree.entry(degree).or_insert_with(BigInt::zero) += coefficient;
        seen += 1;
    }

    let result: Polynomial = by_degree
        .into_iter()
        .rev()
        .filter(|(_, coefficient)| !coefficient.is_zero())
        .map(|(degree, coefficient)| Term::new(coefficient, degree))
        .collect();

    debug!(input_terms = seen, output_terms = result.len(), "normalized");
    result
}

/// True when `poly` has unique, strictly descending degrees and no zero
/// coefficients.
pub fn is_canonical(poly: &Polynomial) -> bool {
    poly.iter().all(|t| !t.is_zero())
        && poly
            .terms()
            .windows(2)
            .all(|pair| pair[0].degree() > pair[1].degree())
}
