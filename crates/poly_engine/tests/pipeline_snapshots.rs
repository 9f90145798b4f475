//! Rendered output of the full pipeline for representative inputs.

use poly_ast::{Term, Variable};
use poly_engine::{normalize, Pipeline};
use poly_format::render;
use poly_parser::parse;

fn run(input: &str) -> String {
    let report = Pipeline::default().run(input);
    format!(
        "parsed: {}\nnormalized: {}\nerrors: {}",
        report.parsed_text,
        report.normalized_text,
        report.errors.len()
    )
}

#[test]
fn snapshot_simple_polynomial() {
    insta::assert_snapshot!(run("3y^2 + 2y - 5"), @r###"
    parsed: 3y^2 + 2y - 5
    normalized: 3y^2 + 2y - 5
    errors: 0
    "###);
}

#[test]
fn snapshot_like_terms_combined() {
    insta::assert_snapshot!(run("y + 4 - 2y^3 + 3y - 1 + y^3"), @r###"
    parsed: y + 4 - 2y^3 + 3y - 1 + y^3
    normalized: - y^3 + 4y + 3
    errors: 0
    "###);
}

#[test]
fn snapshot_full_cancellation() {
    insta::assert_snapshot!(run("y^2 - y^2 + 5 - 5"), @r###"
    parsed: y^2 - y^2 + 5 - 5
    normalized: 0
    errors: 0
    "###);
}

#[test]
fn snapshot_malformed_terms_skipped() {
    insta::assert_snapshot!(run("3y^ + 2 - qy + y"), @r###"
    parsed: 2 + y
    normalized: y + 2
    errors: 2
    "###);
}

#[test]
fn sign_rendering() {
    assert_eq!(render(normalize(parse("-y^2+3y-5").polynomial).terms()), "- y^2 + 3y - 5");
}

#[test]
fn cancellation_is_empty() {
    assert!(normalize(parse("y - y").polynomial).is_empty());
    assert_eq!(render(&[]), "0");
}

#[test]
fn bare_variable_defaults() {
    assert_eq!(parse("y").polynomial.terms(), &[Term::new(1, 1)]);
    assert_eq!(parse("-y").polynomial.terms(), &[Term::new(-1, 1)]);
}

#[test]
fn malformed_term_tolerance() {
    let out = parse("3y^ + 2");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].segment(), "3y^");
    assert_eq!(out.polynomial.terms(), &[Term::constant(2)]);
}

#[test]
fn constant_only() {
    let out = parse("7");
    assert_eq!(out.polynomial.terms(), &[Term::constant(7)]);
    assert_eq!(render(out.polynomial.terms()), "7");
}

#[test]
fn other_variable_marker() {
    let z = Variable::new('z').unwrap();
    let report = Pipeline::new(z).run("z^3 + z^3 - 4z");
    assert_eq!(report.normalized_text, "2z^3 - 4z");
}

#[test]
fn snapshot_text_after_marker_is_kept() {
    insta::assert_snapshot!(run("3y2 + 3y^2x - y^2^3 + 1"), @r###"
    parsed: 3y + 3y^2 - y^2 + 1
    normalized: 2y^2 + 3y + 1
    errors: 0
    "###);
}
