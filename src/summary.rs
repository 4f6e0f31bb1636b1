//! Whole-protein statistics and region-of-interest probabilities.

use tracing::{debug, warn};

use crate::mutation::coding::{same_amino_acid_probability, stop_probability, CodonOutcome};
use crate::mutation::EffectiveMatrix;
use crate::seq::coding::CodingSequence;
use crate::stats;

/// Mutation probabilities of one codon of the coding sequence.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PerCodonProbability {
    /// Probability the codon still encodes the same amino acid
    pub same: f64,
    /// Probability the codon becomes any stop codon
    pub stop: f64,
}

impl PerCodonProbability {
    /// Probability the encoded amino acid changes.
    #[inline]
    pub fn nonsilent(&self) -> f64 {
        1.0 - self.same
    }
}

/// Probabilities for every codon of a coding sequence, in order.
pub fn per_codon_probabilities(cds: &CodingSequence, tr: &EffectiveMatrix) -> Vec<PerCodonProbability> {
    cds.iter()
        .map(|codon| PerCodonProbability {
            same: same_amino_acid_probability(codon, tr),
            stop: stop_probability(codon, tr),
        })
        .collect()
}

/// Region of interest result.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RegionOfInterest {
    /// Nucleotide range after clamping, 1-based inclusive
    pub nt_span: (u64, u64),
    /// Codon range, 0-based inclusive; the end is -1 for an empty coding sequence
    pub codon_span: (i64, i64),
    /// Probability of at least one nonsilent codon within the span
    pub p_any_nonsilent: f64,
}

impl RegionOfInterest {
    /// Whether the codon span selects no codon at all.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.codon_span.1 < self.codon_span.0
    }
}

/// Map a 1-based inclusive nucleotide range onto codon indices of a coding
/// sequence of `n_codons` codons.
///
/// The start is clamped to at least 1 and the end to at least the start. The
/// end codon is clamped to the last codon, so the span is empty (end < start)
/// when the region begins past the end of the coding sequence.
pub fn codon_span(start_nt: u64, end_nt: u64, n_codons: usize) -> ((u64, u64), (i64, i64)) {
    let a = start_nt.max(1);
    let b = end_nt.max(a);
    let start_codon = ((a - 1) / 3) as i64;
    let end_codon = ((b / 3) as i64).min(n_codons as i64 - 1);
    ((a, b), (start_codon, end_codon))
}

/// Probability of at least one nonsilent codon in a nucleotide region.
///
/// A degenerate span has probability 0.
pub fn region_of_interest(q: &[f64], start_nt: u64, end_nt: u64) -> RegionOfInterest {
    let (nt_span, span) = codon_span(start_nt, end_nt, q.len());
    let p_any_nonsilent = if span.1 >= span.0 {
        stats::prob_any(&q[span.0 as usize..=span.1 as usize])
    } else {
        warn!(
            "region {}-{} lies beyond the {} codons of the coding sequence; probability set to 0",
            nt_span.0,
            nt_span.1,
            q.len()
        );
        0.0
    };
    debug!("region {:?} maps to codons {:?}", nt_span, span);

    RegionOfInterest { nt_span, codon_span: span, p_any_nonsilent }
}

/// Whole-protein outcome of substitution after the effective number of rounds.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    /// Number of codons in the coding sequence
    pub n_codons: usize,
    /// Probability that the translated protein is unchanged
    pub p_unchanged_protein: f64,
    /// Probability that any codon becomes a stop before the natural stop
    pub p_premature_stop: f64,
    /// Distribution of the number of nonsilent codons, k = 0..=n_codons
    pub pmf_k_nonsilent: Vec<f64>,
    /// Per-codon nonsilent probabilities
    pub nonsilent: Vec<f64>,
    /// Expected number of codons turned into a different amino acid
    pub expected_missense: f64,
    /// Expected number of codons turned into a stop
    pub expected_nonsense: f64,
    /// Optional region of interest
    pub roi: Option<RegionOfInterest>,
}

impl Summary {
    /// Expected number of nonsilent codons.
    pub fn expected_nonsilent(&self) -> f64 {
        self.nonsilent.iter().sum()
    }

    /// Mean of the nonsilent count distribution.
    pub fn pmf_mean(&self) -> f64 {
        stats::pmf_mean(&self.pmf_k_nonsilent)
    }
}

/// Summarize mutation outcomes of a coding sequence.
///
/// `region` is an optional 1-based inclusive nucleotide range.
pub fn summarize(cds: &CodingSequence, tr: &EffectiveMatrix, region: Option<(u64, u64)>) -> Summary {
    let probs = per_codon_probabilities(cds, tr);
    let q: Vec<f64> = probs.iter().map(|p| p.nonsilent()).collect();
    let stops: Vec<f64> = probs.iter().map(|p| p.stop).collect();

    let p_unchanged_protein = stats::prob_none(&q);
    let pmf_k_nonsilent = stats::poisson_binomial_pmf(&q);
    let p_premature_stop = stats::prob_any(&stops);

    let roi = region.map(|(a, b)| region_of_interest(&q, a, b));

    let (expected_missense, expected_nonsense) = cds
        .iter()
        .filter_map(|codon| CodonOutcome::compute(codon, tr))
        .fold((0.0, 0.0), |(mis, non), x| (mis + x.missense, non + x.nonsense));

    debug!(
        "{} codons after {} rounds: p_unchanged = {}, p_premature_stop = {}",
        cds.len(),
        tr.rounds(),
        p_unchanged_protein,
        p_premature_stop
    );

    Summary {
        n_codons: cds.len(),
        p_unchanged_protein,
        p_premature_stop,
        pmf_k_nonsilent,
        nonsilent: q,
        expected_missense,
        expected_nonsense,
        roi,
    }
}
