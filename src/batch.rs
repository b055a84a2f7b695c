//! Parsing many files at once.
//!
//! Every file gets its own lexer and parser, so files are parsed in parallel
//! on the rayon pool with no shared state. Results keep the input order.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use thiserror::Error;

use crate::{ParseResult, parse};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("cannot read `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One parsed file. Diagnostics carry `name` as their file.
#[derive(Debug, Clone)]
pub struct ParsedSource {
    pub name: String,
    pub source: String,
    pub result: ParseResult,
}

impl ParsedSource {
    fn new(name: String, source: String) -> Self {
        let mut result = parse(&source);
        for diagnostic in &mut result.diagnostics {
            diagnostic.file = Some(name.clone());
        }
        Self {
            name,
            source,
            result,
        }
    }
}

/// Parses `(name, text)` pairs in parallel.
pub fn parse_sources<N, S>(sources: &[(N, S)]) -> Vec<ParsedSource>
where
    N: AsRef<str> + Sync,
    S: AsRef<str> + Sync,
{
    let parsed: Vec<ParsedSource> = sources
        .par_iter()
        .map(|(name, source)| {
            ParsedSource::new(name.as_ref().to_string(), source.as_ref().to_string())
        })
        .collect();
    log::debug!("parsed {} sources", parsed.len());
    parsed
}

/// Reads and parses files in parallel. A file that cannot be read yields an
/// error in its slot; the others are still parsed.
pub fn parse_paths<P>(paths: &[P]) -> Vec<Result<ParsedSource, BatchError>>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            let source = fs::read_to_string(path).map_err(|source| BatchError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(ParsedSource::new(path.display().to_string(), source))
        })
        .collect()
}
