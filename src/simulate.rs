//! Monte Carlo replication of the substitution process.
//!
//! Every nucleotide of the coding sequence is copied through each replication
//! cycle by sampling from its row of the per-cycle matrix. The resulting
//! frequencies converge to the analytic summary and serve as a cross-check.

use rand::Rng;
use tracing::debug;

use crate::constants::*;
use crate::error::{Error, Result};
use crate::mutation::SubstitutionMatrix;
use crate::seq::codon::translate_codon;
use crate::seq::coding::CodingSequence;
use crate::seq::{nucleotide_index, Codon};
use crate::stats;

/// Empirical outcome frequencies over simulated replicates.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationSummary {
    pub replicates: usize,
    /// Fraction of replicates whose protein is unchanged
    pub p_unchanged_protein: f64,
    /// Fraction of replicates with at least one codon turned into a stop
    pub p_premature_stop: f64,
    /// Empirical distribution of the number of nonsilent codons
    pub pmf_k_nonsilent: Vec<f64>,
}

impl SimulationSummary {
    /// Jensen-Shannon divergence from an analytic distribution.
    pub fn divergence_from(&self, pmf: &[f64]) -> f64 {
        stats::js_divergence(&self.pmf_k_nonsilent, pmf)
    }
}

/// Samples nucleotide copies through repeated replication cycles.
pub struct Simulator {
    cumulative: [[f64; N_NUCLEOTIDES]; N_NUCLEOTIDES],
    rounds: u64,
}

impl Simulator {
    pub fn new(matrix: &SubstitutionMatrix, rounds: u64) -> Simulator {
        let mut cumulative = [[0.0; N_NUCLEOTIDES]; N_NUCLEOTIDES];
        for (cum, row) in cumulative.iter_mut().zip(matrix.rows().iter()) {
            let mut s = 0.0;
            for (c, &p) in cum.iter_mut().zip(row.iter()) {
                s += p;
                *c = s;
            }
        }
        Simulator { cumulative, rounds }
    }

    /// Copy a nucleotide (by canonical index) through a single cycle.
    #[inline]
    fn copy<R: Rng + ?Sized>(&self, i: usize, rng: &mut R) -> usize {
        let cum = &self.cumulative[i];
        let r = rng.random::<f64>() * cum[N_NUCLEOTIDES - 1];
        cum.iter().position(|&c| r < c).unwrap_or(i)
    }

    /// Copy a codon through all rounds.
    pub fn mutate_codon<R: Rng + ?Sized>(&self, codon: &Codon, rng: &mut R) -> Codon {
        let mut out = *codon;
        for nt in out.iter_mut() {
            if let Some(mut i) = nucleotide_index(*nt) {
                for _ in 0..self.rounds {
                    i = self.copy(i, rng);
                }
                *nt = NUCLEOTIDES[i];
            }
        }
        out
    }

    /// Simulate `replicates` independent lineages of the coding sequence.
    pub fn run<R: Rng + ?Sized>(
        &self,
        cds: &CodingSequence,
        replicates: usize,
        rng: &mut R,
    ) -> Result<SimulationSummary> {
        if replicates == 0 {
            return Err(Error::InvalidArgument(String::from("number of simulations must be > 0")));
        }

        let n = cds.len();
        let mut counts = vec![0usize; n + 1];
        let mut n_stop = 0usize;

        for _ in 0..replicates {
            let mut k = 0;
            let mut stopped = false;
            for codon in cds.iter() {
                let mutant = self.mutate_codon(codon, rng);
                let aa_alt = translate_codon(&mutant);
                if aa_alt != translate_codon(codon) {
                    k += 1;
                    if aa_alt == Some(STOP_RESIDUE) {
                        stopped = true;
                    }
                }
            }
            counts[k] += 1;
            if stopped {
                n_stop += 1;
            }
        }

        let total = replicates as f64;
        let pmf_k_nonsilent: Vec<f64> = counts.iter().map(|&c| c as f64 / total).collect();
        debug!("simulated {} replicates over {} rounds", replicates, self.rounds);

        Ok(SimulationSummary {
            replicates,
            p_unchanged_protein: pmf_k_nonsilent[0],
            p_premature_stop: n_stop as f64 / total,
            pmf_k_nonsilent,
        })
    }
}
