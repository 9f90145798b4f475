use poly_ast::Term;
use proptest::prelude::*;

pub fn arb_term() -> impl Strategy<Value = Term> {
    // Small ranges so that like terms collide often
    (-20i64..20, 0u32..6).prop_map(|(c, d)| Term::new(c, d))
}

pub fn arb_terms() -> impl Strategy<Value = Vec<Term>> {
    prop::collection::vec(arb_term(), 0..12)
}

/// The same terms twice, the second copy shuffled.
pub fn arb_terms_and_shuffle() -> impl Strategy<Value = (Vec<Term>, Vec<Term>)> {
    arb_terms().prop_flat_map(|terms| (Just(terms.clone()), Just(terms).prop_shuffle()))
}

/// Raw input lines, well-formed or not.
pub fn arb_input() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9y^+\\- ]{0,24}",
        arb_terms().prop_map(|terms| {
            terms
                .iter()
                .map(|t| format!("{:+}y^{}", t.coefficient(), t.degree()))
                .collect::<String>()
        }),
    ]
}
