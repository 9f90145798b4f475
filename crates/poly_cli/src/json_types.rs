//! JSON output types for `--json`.

use std::path::Path;

use poly_engine::PipelineReport;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct ReportJson {
    pub ok: bool,
    pub input: String,
    pub variable: String,
    /// Rendering before like terms are combined
    pub parsed: String,
    pub normalized: String,
    pub terms: Vec<TermJson>,
    pub errors: Vec<TermErrorJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appended_to: Option<String>,
}

/// Coefficients are decimal strings so arbitrarily large values survive.
#[derive(Serialize, Debug)]
pub struct TermJson {
    pub coefficient: String,
    pub degree: u32,
}

#[derive(Serialize, Debug)]
pub struct TermErrorJson {
    pub segment: String,
    pub code: String,
    pub message: String,
}

#[derive(Serialize, Debug)]
pub struct ErrorJsonOutput {
    pub ok: bool,
    pub error: String,
}

impl ReportJson {
    pub fn new(report: &PipelineReport, variable: char, appended_to: Option<&Path>) -> Self {
        Self {
            ok: true,
            input: report.input.clone(),
            variable: variable.to_string(),
            parsed: report.parsed_text.clone(),
            normalized: report.normalized_text.clone(),
            terms: report
                .normalized
                .iter()
                .map(|t| TermJson {
                    coefficient: t.coefficient().to_string(),
                    degree: t.degree(),
                })
                .collect(),
            errors: report
                .errors
                .iter()
                .map(|e| TermErrorJson {
                    segment: e.segment().to_string(),
                    code: e.code().to_string(),
                    message: e.to_string(),
                })
                .collect(),
            appended_to: appended_to.map(|p| p.display().to_string()),
        }
    }
}

impl ErrorJsonOutput {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: error.into(),
        }
    }
}
