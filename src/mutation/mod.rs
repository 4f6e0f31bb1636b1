pub mod coding;

use std::fmt;
use std::ops;

use tracing::debug;

use crate::constants::*;
use crate::error::{Error, Result, ValidationError};
use crate::seq::{nucleotide_index, Nucleotide};

type Rows = [[f64; N_NUCLEOTIDES]; N_NUCLEOTIDES];

const IDENTITY: Rows = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Per-cycle nucleotide substitution matrix.
///
/// Entry (i, j) is the probability that nucleotide i is copied as nucleotide j
/// in one replication cycle. Rows and columns follow the canonical order
/// A, C, G, U. Every row sums to 1 within `ROW_SUM_TOLERANCE`.
#[derive(Clone, Copy, PartialEq)]
pub struct SubstitutionMatrix(Rows);

/// Substitution matrix raised to the number of replication rounds.
///
/// Cycles are independent of each other, so the cumulative substitution
/// probability after R cycles is the R-th matrix power.
#[derive(Clone, Copy, PartialEq)]
pub struct EffectiveMatrix {
    inner: Rows,
    rounds: u64,
}

/// Check that rows form a row-stochastic matrix.
///
/// Entries may exceed the [0, 1] bounds by at most `ROW_SUM_TOLERANCE`, the
/// same slack allowed for row sums.
pub fn validate(rows: &Rows) -> std::result::Result<(), ValidationError> {
    for (i, row) in rows.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            if !(-ROW_SUM_TOLERANCE..=1.0 + ROW_SUM_TOLERANCE).contains(&value) {
                return Err(ValidationError::Value { row: i, col: j, value });
            }
        }
        let sum: f64 = row.iter().sum();
        if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
            return Err(ValidationError::RowSum { row: i, sum });
        }
    }
    Ok(())
}

impl SubstitutionMatrix {
    /// Construct a validated substitution matrix.
    pub fn new(rows: Rows) -> std::result::Result<SubstitutionMatrix, ValidationError> {
        validate(&rows)?;
        Ok(SubstitutionMatrix(rows))
    }

    /// Construct from dynamically sized rows, checking the 4x4 shape first.
    pub fn from_rows(rows: &[Vec<f64>]) -> std::result::Result<SubstitutionMatrix, ValidationError> {
        let cols = rows.iter().map(|r| r.len()).find(|&n| n != N_NUCLEOTIDES);
        if rows.len() != N_NUCLEOTIDES || cols.is_some() {
            return Err(ValidationError::Shape {
                rows: rows.len(),
                cols: cols.unwrap_or(N_NUCLEOTIDES),
            });
        }

        let mut x = [[0.0; N_NUCLEOTIDES]; N_NUCLEOTIDES];
        for (i, row) in rows.iter().enumerate() {
            x[i].copy_from_slice(row);
        }
        SubstitutionMatrix::new(x)
    }

    /// Matrix without any substitution.
    #[inline]
    pub fn identity() -> SubstitutionMatrix {
        SubstitutionMatrix(IDENTITY)
    }

    /// Every nucleotide is replaced by any other with total probability `mu`,
    /// split evenly among the three alternatives.
    pub fn uniform(mu: f64) -> std::result::Result<SubstitutionMatrix, ValidationError> {
        let off = mu / 3.0;
        let mut x = [[off; N_NUCLEOTIDES]; N_NUCLEOTIDES];
        for (i, row) in x.iter_mut().enumerate() {
            row[i] = 1.0 - mu;
        }
        SubstitutionMatrix::new(x)
    }

    #[inline]
    pub fn rows(&self) -> &Rows {
        &self.0
    }

    /// Probability that `from` becomes `to` in a single cycle.
    #[inline]
    pub fn prob(&self, from: Nucleotide, to: Nucleotide) -> f64 {
        match (nucleotide_index(from), nucleotide_index(to)) {
            (Some(i), Some(j)) => self.0[i][j],
            _ => 0.0,
        }
    }

    /// Cumulative substitution matrix after `rounds` replication cycles.
    ///
    /// Zero rounds yields the identity. Computed by repeated squaring, so
    /// hundreds of rounds take only a handful of multiplications.
    pub fn power(&self, rounds: i64) -> Result<EffectiveMatrix> {
        if rounds < 0 {
            return Err(Error::InvalidArgument(String::from("rounds must be >= 0")));
        }
        let rounds = rounds as u64;

        let mut result = IDENTITY;
        let mut base = self.0;
        let mut e = rounds;
        while e > 0 {
            if e & 1 == 1 {
                result = multiply(&result, &base);
            }
            e >>= 1;
            if e > 0 {
                base = multiply(&base, &base);
            }
        }

        debug!("effective substitution matrix after {} rounds:\n{}", rounds, Table(&result));

        Ok(EffectiveMatrix { inner: result, rounds })
    }
}

impl EffectiveMatrix {
    #[inline]
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    #[inline]
    pub fn rows(&self) -> &Rows {
        &self.inner
    }

    /// Cumulative probability that `from` is observed as `to`.
    #[inline]
    pub fn prob(&self, from: Nucleotide, to: Nucleotide) -> f64 {
        match (nucleotide_index(from), nucleotide_index(to)) {
            (Some(i), Some(j)) => self.inner[i][j],
            _ => 0.0,
        }
    }

    pub fn row_sums(&self) -> [f64; N_NUCLEOTIDES] {
        let mut sums = [0.0; N_NUCLEOTIDES];
        for (s, row) in sums.iter_mut().zip(self.inner.iter()) {
            *s = row.iter().sum();
        }
        sums
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.inner == IDENTITY
    }
}

fn multiply(a: &Rows, b: &Rows) -> Rows {
    let mut c = [[0.0; N_NUCLEOTIDES]; N_NUCLEOTIDES];
    for i in 0..N_NUCLEOTIDES {
        for k in 0..N_NUCLEOTIDES {
            let aik = a[i][k];
            if aik == 0.0 {
                continue;
            }
            for j in 0..N_NUCLEOTIDES {
                c[i][j] += aik * b[k][j];
            }
        }
    }
    c
}

impl ops::Index<(usize, usize)> for SubstitutionMatrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.0[i][j]
    }
}

impl ops::Index<(usize, usize)> for EffectiveMatrix {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.inner[i][j]
    }
}

/// Display helper: matrix with nucleotide row and column labels.
struct Table<'a>(&'a Rows);

impl<'a> fmt::Display for Table<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, " ")?;
        for &nt in NUCLEOTIDES.iter() {
            write!(f, " {:>10}", nt as char)?;
        }
        for (i, row) in self.0.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{}", NUCLEOTIDES[i] as char)?;
            for x in row.iter() {
                write!(f, " {:>10.8}", x)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for SubstitutionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Table(&self.0).fmt(f)
    }
}

impl fmt::Debug for SubstitutionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for EffectiveMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Table(&self.inner).fmt(f)
    }
}

impl fmt::Debug for EffectiveMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("EffectiveMatrix")
            .field("rounds", &self.rounds)
            .field("inner", &self.inner)
            .finish()
    }
}
