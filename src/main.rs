use std::{env, fs, process};

use elm_cst::{
    batch::{BatchError, parse_paths},
    diagnostics::{DEFAULT_MAX_ERRORS, Diagnostic, DiagnosticsAggregator},
    parse,
    syntax::{file::File, lexer::Lexer},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("Error reading {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Error: file must have .elm extension: {0}")]
    NotElmFile(String),
    #[error("Error: --max-errors expects a non-negative integer.")]
    InvalidMaxErrors,
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Error: cannot serialize output: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Batch(#[from] BatchError),
}

#[derive(Serialize)]
struct ParseOutput<'a> {
    file: &'a File,
    diagnostics: &'a [Diagnostic],
}

fn main() {
    let mut args: Vec<String> = env::args().collect();
    let verbose = args.iter().any(|arg| arg == "--verbose");
    let json = args.iter().any(|arg| arg == "--json");
    if verbose {
        args.retain(|arg| arg != "--verbose");
    }
    if json {
        args.retain(|arg| arg != "--json");
    }

    init_logging(verbose);

    let max_errors = match extract_max_errors(&mut args) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(2);
        }
    };

    if args.len() < 2 {
        print_help();
        return;
    }

    let outcome = match args[1].as_str() {
        "-h" | "--help" | "help" => {
            print_help();
            Ok(true)
        }
        "tokens" => single_file(&args, "elm-cst tokens <file.elm>").and_then(show_tokens),
        "parse" => single_file(&args, "elm-cst parse [--json] <file.elm>")
            .and_then(|path| parse_file(path, json, max_errors)),
        "check" => {
            if args.len() < 3 {
                Err(CliError::Usage("elm-cst check <file.elm>..."))
            } else {
                check_files(&args[2..], max_errors)
            }
        }
        path if is_elm_file(path) => parse_file(path, json, max_errors),
        _ => {
            print_help();
            Err(CliError::Usage("elm-cst <command> <file.elm>"))
        }
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(2);
        }
    }
}

/// `--verbose` turns on debug logs; otherwise `RUST_LOG` decides.
fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn print_help() {
    println!(
        "\
elm-cst

Usage:
  elm-cst <file.elm>
  elm-cst tokens <file.elm>
  elm-cst parse [--json] <file.elm>
  elm-cst check <file.elm>...

Flags:
  --json             Print the syntax tree and diagnostics as JSON
  --max-errors <n>   Limit displayed errors (default: 50)
  --verbose          Log lexer and parser phases to stderr
  -h, --help         Show this help message
"
    );
}

fn single_file<'a>(args: &'a [String], usage: &'static str) -> Result<&'a str, CliError> {
    let Some(path) = args.get(2) else {
        return Err(CliError::Usage(usage));
    };
    if !is_elm_file(path) {
        return Err(CliError::NotElmFile(path.clone()));
    }
    Ok(path)
}

fn is_elm_file(path: &str) -> bool {
    path.ends_with(".elm")
}

fn read_source(path: &str) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

fn extract_max_errors(args: &mut Vec<String>) -> Result<usize, CliError> {
    let mut max_errors = DEFAULT_MAX_ERRORS;
    let mut i = 0;
    while i < args.len() {
        if args[i] == "--max-errors" {
            if i + 1 >= args.len() {
                return Err(CliError::Usage("elm-cst <file.elm> --max-errors <n>"));
            }
            let value = args.remove(i + 1);
            args.remove(i);
            max_errors = value
                .parse::<usize>()
                .map_err(|_| CliError::InvalidMaxErrors)?;
            continue;
        }
        i += 1;
    }
    Ok(max_errors)
}

fn show_tokens(path: &str) -> Result<bool, CliError> {
    let source = read_source(path)?;
    let mut lexer = Lexer::new(source.as_str());
    println!("Tokens from {}:", path);
    println!("{}", "─".repeat(50));
    for tok in lexer.tokenize() {
        if tok.token_type.is_trivia() && !tok.token_type.is_comment() {
            continue;
        }
        println!(
            "{:>3}:{:<3} {:12} {:?}",
            tok.position.line,
            tok.position.column,
            tok.token_type.to_string(),
            tok.text()
        );
    }

    let errors: Vec<Diagnostic> = lexer.errors().iter().map(|err| err.to_diagnostic()).collect();
    report(&errors, path, &source, DEFAULT_MAX_ERRORS);
    Ok(errors.is_empty())
}

fn parse_file(path: &str, json: bool, max_errors: usize) -> Result<bool, CliError> {
    let source = read_source(path)?;
    let result = parse(&source);

    if json {
        let output = ParseOutput {
            file: &result.file,
            diagnostics: &result.diagnostics,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", result.file);
        report(&result.diagnostics, path, &source, max_errors);
    }

    Ok(!result.has_errors())
}

/// Parses every file in parallel and prints one combined report.
fn check_files(paths: &[String], max_errors: usize) -> Result<bool, CliError> {
    if let Some(path) = paths.iter().find(|path| !is_elm_file(path)) {
        return Err(CliError::NotElmFile(path.clone()));
    }

    let mut diagnostics = Vec::new();
    let mut sources = Vec::new();
    for parsed in parse_paths(paths) {
        let parsed = parsed?;
        diagnostics.extend(parsed.result.diagnostics);
        sources.push((parsed.name, parsed.source));
    }

    let mut aggregator =
        DiagnosticsAggregator::new(&diagnostics).with_max_errors(Some(max_errors));
    for (name, source) in sources {
        aggregator = aggregator.with_source(name, source);
    }
    let report = aggregator.report();

    if report.counts.errors == 0 {
        println!("Checked {} files, no errors.", paths.len());
        return Ok(true);
    }
    eprintln!("{}", report.rendered);
    Ok(false)
}

fn report(diagnostics: &[Diagnostic], path: &str, source: &str, max_errors: usize) {
    if diagnostics.is_empty() {
        return;
    }
    let report = DiagnosticsAggregator::new(diagnostics)
        .with_default_source(path, source)
        .with_max_errors(Some(max_errors))
        .report();
    eprintln!("{}", report.rendered);
}
