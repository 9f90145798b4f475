use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use poly_ast::Variable;
use poly_engine::{Pipeline, PipelineReport};

mod config;
mod json_types;
mod source;

use config::PolyConfig;
use json_types::{ErrorJsonOutput, ReportJson};

/// Combine like terms of a single-variable polynomial.
#[derive(Parser, Debug)]
#[command(name = "poly_cli", version)]
struct Cli {
    /// File whose first line holds the polynomial; the result is appended to it
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Polynomial text to use instead of reading a file
    #[arg(short, long)]
    expr: Option<String>,

    /// Variable marker (a single ASCII letter)
    #[arg(long)]
    variable: Option<Variable>,

    /// Do not append the result to the file
    #[arg(long, default_value_t = false)]
    no_append: bool,

    /// Print a JSON report instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Config file (default: poly_config.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                print_pretty_json(&ErrorJsonOutput::new(format!("{:#}", e)));
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => PolyConfig::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PolyConfig::load(),
    };
    let variable = match cli.variable {
        Some(v) => v,
        None => config.variable()?,
    };

    // An expression given on the command line is only written back when a
    // file is named explicitly.
    let (input, sink) = match &cli.expr {
        Some(expr) => (expr.clone(), cli.file.clone()),
        None => {
            let path = cli.file.clone().unwrap_or_else(|| config.file.clone());
            let line = source::read_first_line(&path)?;
            (line, Some(path))
        }
    };
    let sink = sink.filter(|_| config.append && !cli.no_append);

    let report = Pipeline::new(variable).run(&input);

    if cli.json {
        if let Some(path) = &sink {
            source::append_line(path, &report.normalized_text)?;
        }
        print_pretty_json(&ReportJson::new(&report, variable.symbol(), sink.as_deref()));
        return Ok(());
    }

    print_report(&report);
    if let Some(path) = &sink {
        source::append_line(path, &report.normalized_text)?;
        println!("Result appended to {}", path.display());
    }
    Ok(())
}

fn print_report(report: &PipelineReport) {
    println!("Parsed polynomial:");
    println!("{}", report.parsed_text);
    println!("Combined polynomial:");
    println!("{}", report.normalized_text);
}

fn print_pretty_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Error: failed to serialize output: {}", e),
    }
}
