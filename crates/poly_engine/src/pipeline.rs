//! Parse → render → normalize → render, in one call.

use poly_ast::{Polynomial, Variable};
use poly_format::Renderer;
use poly_parser::{ParseError, Parser};

use crate::normalize::normalize;

/// Everything produced by one run over an input line.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    pub input: String,
    /// Terms in input order, before like terms are combined.
    pub parsed: Polynomial,
    pub parsed_text: String,
    pub normalized: Polynomial,
    pub normalized_text: String,
    pub errors: Vec<ParseError>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    parser: Parser,
    renderer: Renderer,
}

impl Pipeline {
    pub fn new(variable: Variable) -> Self {
        Pipeline {
            parser: Parser::new(variable),
            renderer: Renderer::new(variable),
        }
    }

    pub fn variable(&self) -> Variable {
        self.parser.variable()
    }

    pub fn run(&self, input: &str) -> PipelineReport {
        let span = tracing::debug_span!("pipeline", variable = %self.variable());
        let _enter = span.enter();

        let (parsed, errors) = self.parser.parse(input).into_parts();
        let parsed_text = self.renderer.render(parsed.terms());
        tracing::debug!(text = %parsed_text, "as parsed");

        let normalized = normalize(parsed.clone());
        let normalized_text = self.renderer.render(normalized.terms());
        tracing::debug!(text = %normalized_text, "after normalization");

        PipelineReport {
            input: input.to_string(),
            parsed,
            parsed_text,
            normalized,
            normalized_text,
            errors,
        }
    }
}
