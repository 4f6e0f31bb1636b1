//! Error types for replimut.
//!
//! Matrix problems are reported as [`ValidationError`] at the loading boundary;
//! everything downstream assumes a valid row-stochastic matrix.

use std::io;
use std::num;
use std::result;

use thiserror::Error;

/// Ways a substitution matrix can fail validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("matrix must be 4x4 (found {rows}x{cols})")]
    Shape { rows: usize, cols: usize },
    #[error("CSV header must be: A,C,G,U (found {found})")]
    Header { found: String },
    #[error("row {row} must be labelled {expected} (found {found})")]
    RowOrder { row: usize, expected: char, found: String },
    #[error("row {row} must sum to 1.0 (sums to {sum})")]
    RowSum { row: usize, sum: f64 },
    #[error("entry ({row}, {col}) must be a probability in [0, 1] (found {value})")]
    Value { row: usize, col: usize, value: f64 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid substitution matrix: {0}")]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("could not parse matrix entry ({row}, {col}): {source}")]
    ParseFloat {
        row: usize,
        col: usize,
        #[source]
        source: num::ParseFloatError,
    },
}

pub type Result<T> = result::Result<T, Error>;
