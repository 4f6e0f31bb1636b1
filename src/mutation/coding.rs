//! Codon-level consequences of nucleotide substitution.
//!
//! The three positions of a codon mutate independently, so the probability of
//! observing a target codon is the product of the per-position probabilities
//! taken from the effective matrix.

use std::fmt;
use std::slice;

use crate::constants::*;
use crate::mutation::EffectiveMatrix;
use crate::seq::codon::{residue_at, translate_codon};
use crate::seq::{all_codons, codon_from_index, Codon};

/// Impact of a codon change on the encoded protein.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MutImpact {
    Synonymous,
    Missense,
    Nonsense,
}

impl MutImpact {
    pub fn iter() -> slice::Iter<'static, MutImpact> {
        use self::MutImpact::*;
        static MUTATION_CLASSES: [MutImpact; 3] = [Synonymous, Missense, Nonsense];
        MUTATION_CLASSES.iter()
    }

    /// Classify the change from a sense codon to a target codon.
    ///
    /// Returns `None` when the original codon is a stop or is not a valid codon.
    pub fn classify(orig: &Codon, target: &Codon) -> Option<MutImpact> {
        let aa_ref = translate_codon(orig)?;
        let aa_alt = translate_codon(target)?;
        if aa_ref == STOP_RESIDUE {
            None
        } else if aa_alt == aa_ref {
            Some(MutImpact::Synonymous)
        } else if aa_alt == STOP_RESIDUE {
            Some(MutImpact::Nonsense)
        } else {
            Some(MutImpact::Missense)
        }
    }
}

impl fmt::Display for MutImpact {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = match *self {
            MutImpact::Synonymous => "syn",
            MutImpact::Missense => "mis",
            MutImpact::Nonsense => "non",
        };

        write!(f, "{}", c)
    }
}

/// Probability that `orig` is observed as `target` after the effective number of rounds.
#[inline]
pub fn transition_probability(orig: &Codon, target: &Codon, tr: &EffectiveMatrix) -> f64 {
    orig.iter()
        .zip(target.iter())
        .map(|(&a, &b)| tr.prob(a, b))
        .product()
}

/// Probability that the codon still encodes the same amino acid, including
/// the probability of not changing at all.
///
/// Zero for stop codons and for codons with invalid nucleotides.
pub fn same_amino_acid_probability(orig: &Codon, tr: &EffectiveMatrix) -> f64 {
    let aa = match translate_codon(orig) {
        Some(x) if x != STOP_RESIDUE => x,
        _ => return 0.0,
    };

    (0..N_CODONS)
        .filter(|&i| residue_at(i) == aa)
        .map(|i| transition_probability(orig, &codon_from_index(i), tr))
        .sum()
}

/// Probability that the codon becomes any of the stop codons.
pub fn stop_probability(orig: &Codon, tr: &EffectiveMatrix) -> f64 {
    STOP_CODONS
        .iter()
        .map(|stop| transition_probability(orig, stop, tr))
        .sum()
}

/// Probability of each impact class for a single sense codon.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CodonOutcome {
    pub synonymous: f64,
    pub missense: f64,
    pub nonsense: f64,
}

impl CodonOutcome {
    /// Partition the 64 target codons of a sense codon by impact.
    ///
    /// Returns `None` for stop codons and invalid codons.
    pub fn compute(orig: &Codon, tr: &EffectiveMatrix) -> Option<CodonOutcome> {
        let mut x = CodonOutcome { synonymous: 0.0, missense: 0.0, nonsense: 0.0 };
        for target in all_codons() {
            let p = transition_probability(orig, &target, tr);
            match MutImpact::classify(orig, &target)? {
                MutImpact::Synonymous => x.synonymous += p,
                MutImpact::Missense => x.missense += p,
                MutImpact::Nonsense => x.nonsense += p,
            }
        }
        Some(x)
    }

    #[inline]
    pub fn get(&self, impact: MutImpact) -> f64 {
        match impact {
            MutImpact::Synonymous => self.synonymous,
            MutImpact::Missense => self.missense,
            MutImpact::Nonsense => self.nonsense,
        }
    }

    /// Probability the encoded amino acid changes (missense or nonsense).
    #[inline]
    pub fn nonsilent(&self) -> f64 {
        self.missense + self.nonsense
    }

    #[inline]
    pub fn total(&self) -> f64 {
        MutImpact::iter().map(|&cl| self.get(cl)).sum()
    }
}
