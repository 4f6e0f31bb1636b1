use std::convert::AsRef;
use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::constants::*;
use crate::error::{Error, Result, ValidationError};
use crate::mutation::SubstitutionMatrix;

/// A substitution matrix CSV reader.
///
/// The first row is the header `A,C,G,U`; the four following rows hold the
/// per-cycle substitution probabilities for A, C, G, U in that order. A leading
/// label column is accepted when the header starts with an empty cell. T is
/// read as U in labels.
pub struct Reader<R: io::Read> {
    inner: csv::Reader<R>,
}

impl Reader<fs::File> {
    /// Read from a given file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        fs::File::open(path).map(Reader::new)
    }
}

impl<R: io::Read> Reader<R> {
    /// Read from a given reader.
    pub fn new(reader: R) -> Self {
        Reader {
            inner: csv::ReaderBuilder::new()
                .has_headers(false)
                .comment(Some(b'#'))
                .trim(csv::Trim::All)
                .flexible(true)
                .from_reader(reader),
        }
    }

    /// Read and validate the matrix.
    pub fn read(&mut self) -> Result<SubstitutionMatrix> {
        let mut records = self.inner.records();

        let header = match records.next() {
            Some(record) => record?,
            None => return Err(ValidationError::Header { found: String::new() }.into()),
        };
        let header: Vec<String> = header.iter().map(canonical_label).collect();

        let labelled = if header.len() == N_NUCLEOTIDES + 1 && header[0].is_empty() {
            true
        } else if header.len() == N_NUCLEOTIDES {
            false
        } else {
            return Err(ValidationError::Header { found: header.join(",") }.into());
        };
        let offset = if labelled { 1 } else { 0 };
        if !header[offset..].iter().zip(NUCLEOTIDES.iter()).all(|(h, &nt)| h.as_bytes() == [nt]) {
            return Err(ValidationError::Header { found: header.join(",") }.into());
        }

        let mut rows: Vec<Vec<f64>> = Vec::with_capacity(N_NUCLEOTIDES);
        for (i, record) in records.enumerate() {
            let record = record?;
            let mut fields = record.iter();
            if labelled {
                let label = fields.next().map(canonical_label).unwrap_or_default();
                if i < N_NUCLEOTIDES && label.as_bytes() != [NUCLEOTIDES[i]] {
                    return Err(ValidationError::RowOrder {
                        row: i,
                        expected: NUCLEOTIDES[i] as char,
                        found: label,
                    }
                    .into());
                }
            }
            let row = fields
                .enumerate()
                .map(|(j, x)| {
                    x.parse::<f64>()
                        .map_err(|source| Error::ParseFloat { row: i, col: j, source })
                })
                .collect::<Result<Vec<f64>>>()?;
            rows.push(row);
        }

        let matrix = SubstitutionMatrix::from_rows(&rows)?;
        debug!("loaded substitution matrix:\n{}", matrix);
        Ok(matrix)
    }
}

/// Load and validate a substitution matrix from a CSV file.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<SubstitutionMatrix> {
    Reader::from_file(path)?.read()
}

fn canonical_label(x: &str) -> String {
    let x = x.trim().to_ascii_uppercase();
    if x == "T" {
        String::from("U")
    } else {
        x
    }
}
