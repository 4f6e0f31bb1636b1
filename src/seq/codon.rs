//! Standard genetic code over RNA codons.

use super::{codon_index, Codon, Residue};
use crate::constants::*;

// residues for codons in `codon_index` order (A, C, G, U; first position slowest)
static STANDARD_CODE: &[u8; N_CODONS] =
    b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

/// Amino acid encoded by a codon, `*` for stops, or `None` for a codon
/// containing anything other than A, C, G, U.
#[inline]
pub fn translate_codon(codon: &Codon) -> Option<Residue> {
    codon_index(codon).map(|i| STANDARD_CODE[i])
}

/// Residue by codon index.
#[inline]
pub fn residue_at(idx: usize) -> Residue {
    STANDARD_CODE[idx]
}

#[inline]
pub fn is_stop(codon: &Codon) -> bool {
    translate_codon(codon) == Some(STOP_RESIDUE)
}

#[inline]
pub fn is_start(codon: &Codon) -> bool {
    *codon == START_CODON
}

/// Number of codons encoding the same residue (degeneracy).
pub fn degeneracy(residue: Residue) -> usize {
    STANDARD_CODE.iter().filter(|&&x| x == residue).count()
}
