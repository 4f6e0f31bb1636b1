use std::slice;

use tracing::{debug, warn};

use super::codon::{is_start, is_stop, translate_codon};
use super::{normalize, Codon, Nucleotide};

/// Coding sequence framed from the first start codon up to, but excluding,
/// the first in-frame stop codon.
///
/// No member codon is a stop codon. A sequence without any AUG yields an empty
/// coding sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodingSequence {
    codons: Vec<Codon>,
}

impl CodingSequence {
    /// Extract the coding sequence from raw sequence text.
    ///
    /// The input is normalized first, so DNA, lowercase, and stray characters
    /// are all accepted.
    pub fn from_sequence<S: AsRef<[u8]>>(raw: S) -> CodingSequence {
        CodingSequence::from_rna(&normalize(raw))
    }

    /// Extract the coding sequence from an already normalized RNA sequence.
    pub fn from_rna(seq: &[Nucleotide]) -> CodingSequence {
        let start = match seq.windows(3).position(|w| is_start(&[w[0], w[1], w[2]])) {
            Some(i) => i,
            None => {
                warn!("no AUG start codon found; coding sequence is empty");
                return CodingSequence::default();
            }
        };

        let mut codons = Vec::with_capacity((seq.len() - start) / 3);
        let mut stopped = false;
        for chunk in seq[start..].chunks_exact(3) {
            let codon = [chunk[0], chunk[1], chunk[2]];
            if is_stop(&codon) {
                stopped = true;
                break;
            }
            codons.push(codon);
        }

        if !stopped {
            // chunks_exact drops the trailing partial codon
            let partial = (seq.len() - start) % 3;
            if partial > 0 {
                warn!(
                    "no in-frame stop codon after start at {}; trailing partial codon of {} nt dropped",
                    start + 1,
                    partial
                );
            } else {
                debug!("no in-frame stop codon after start at {}", start + 1);
            }
        }
        debug!("coding sequence starts at nt {} with {} codons", start + 1, codons.len());

        CodingSequence { codons }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.codons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }

    #[inline]
    pub fn codons(&self) -> &[Codon] {
        &self.codons
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Codon> {
        self.codons.iter()
    }

    /// Protein encoded by the unmutated coding sequence, one letter per residue.
    pub fn translate(&self) -> String {
        self.codons
            .iter()
            .map(|c| translate_codon(c).unwrap_or(b'?') as char)
            .collect()
    }
}

impl<'a> IntoIterator for &'a CodingSequence {
    type Item = &'a Codon;
    type IntoIter = slice::Iter<'a, Codon>;

    fn into_iter(self) -> Self::IntoIter {
        self.codons.iter()
    }
}
