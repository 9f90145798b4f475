use num_bigint::BigInt;
use num_traits::Zero;

/// A single monomial: `coefficient * var^degree`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    coefficient: BigInt,
    degree: u32,
}

impl Term {
    pub fn new(coefficient: impl Into<BigInt>, degree: u32) -> Self {
        Term {
            coefficient: coefficient.into(),
            degree,
        }
    }

    /// A degree-0 term.
    pub fn constant(value: impl Into<BigInt>) -> Self {
        Term::new(value, 0)
    }

    pub fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    pub fn is_constant(&self) -> bool {
        self.degree == 0
    }

    pub fn into_parts(self) -> (BigInt, u32) {
        (self.coefficient, self.degree)
    }
}
