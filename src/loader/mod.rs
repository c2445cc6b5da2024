use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: `{text}` is not an 8-bit binary literal")]
    InvalidByte { line: usize, text: String },
}

/// Strips comments and blank lines, leaving `(line number, literal)` pairs.
fn significant_lines(source: &str) -> Vec<(usize, &str)> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let literal = line.split('#').next().unwrap_or("").trim();
            (!literal.is_empty()).then_some((i + 1, literal))
        })
        .collect()
}

fn parse_byte(line: usize, literal: &str) -> Result<u8, LoadError> {
    let invalid = || LoadError::InvalidByte {
        line,
        text: literal.to_string(),
    };

    // from_str_radix alone would also accept a leading `+`.
    if !literal.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(invalid());
    }

    u8::from_str_radix(literal, 2).map_err(|_| invalid())
}

/// Parses a program image: one base-2 byte per line, `#` starts a comment.
///
/// Lines are parsed in parallel; the error reported is the one on the
/// earliest line.
pub fn parse(source: &str) -> Result<Vec<u8>, LoadError> {
    significant_lines(source)
        .par_iter()
        .map(|&(line, literal)| parse_byte(line, literal))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let program = parse(&source)?;
    debug!("parsed {} bytes from {}", program.len(), path.display());

    Ok(program)
}
