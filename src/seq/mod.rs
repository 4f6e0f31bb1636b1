pub mod codon;
pub mod coding;

use crate::constants::*;

pub type Nucleotide = u8;
pub type Residue = u8;

pub type Codon = [Nucleotide; 3];

pub type RnaSeq = Vec<Nucleotide>;
pub type Peptide = Vec<Residue>;

/// Canonicalize raw sequence text into an RNA sequence.
///
/// Input is uppercased, every T becomes U, and any character outside {A, C, G, U}
/// (whitespace, gaps, N, digits) is discarded.
pub fn normalize<S: AsRef<[u8]>>(raw: S) -> RnaSeq {
    raw.as_ref()
        .iter()
        .map(|x| match x.to_ascii_uppercase() {
            b'T' => b'U',
            y => y,
        })
        .filter(|x| NUCLEOTIDES.contains(x))
        .collect()
}

/// Canonical index of a nucleotide (A=0, C=1, G=2, U=3).
#[inline]
pub fn nucleotide_index(x: Nucleotide) -> Option<usize> {
    match x {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'U' => Some(3),
        _ => None,
    }
}

/// Index of a codon among the 64 codons; the first position varies slowest.
#[inline]
pub fn codon_index(codon: &Codon) -> Option<usize> {
    let i = nucleotide_index(codon[0])?;
    let j = nucleotide_index(codon[1])?;
    let k = nucleotide_index(codon[2])?;
    Some((i * N_NUCLEOTIDES + j) * N_NUCLEOTIDES + k)
}

/// Inverse of `codon_index`.
#[inline]
pub fn codon_from_index(idx: usize) -> Codon {
    debug_assert!(idx < N_CODONS);
    [
        NUCLEOTIDES[(idx / (N_NUCLEOTIDES * N_NUCLEOTIDES)) % N_NUCLEOTIDES],
        NUCLEOTIDES[(idx / N_NUCLEOTIDES) % N_NUCLEOTIDES],
        NUCLEOTIDES[idx % N_NUCLEOTIDES],
    ]
}

/// Iterate over all 64 codons in index order.
pub fn all_codons() -> impl Iterator<Item = Codon> {
    (0..N_CODONS).map(codon_from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("atg gcT\ntaa"), b"AUGGCUUAA".to_vec());
        assert_eq!(normalize("NNAC-G1U"), b"ACGU".to_vec());
        assert_eq!(normalize(""), Vec::<u8>::new());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let x = normalize("ggAUGttxCCA");
        assert_eq!(normalize(&x), x);
    }

    #[test]
    fn test_codon_index() {
        assert_eq!(codon_index(b"AAA"), Some(0));
        assert_eq!(codon_index(b"AUG"), Some(14));
        assert_eq!(codon_index(b"UUU"), Some(63));
        assert_eq!(codon_index(b"ATG"), None);
        for i in 0..N_CODONS {
            assert_eq!(codon_index(&codon_from_index(i)), Some(i));
        }
    }
}
