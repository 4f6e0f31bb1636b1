//! Human-readable report of a summary.

use std::cmp;
use std::io::{self, Write};
use std::path::Path;

use crate::simulate::SimulationSummary;
use crate::summary::Summary;

/// Number of residues of the unmutated protein shown.
const PROTEIN_PREVIEW: usize = 60;

/// Everything shown in a report.
pub struct Report<'a> {
    pub fasta: &'a Path,
    pub matrix: &'a Path,
    pub rounds: u64,
    /// Length of the normalized input sequence
    pub seq_len: usize,
    /// Unmutated protein
    pub protein: &'a str,
    pub summary: &'a Summary,
    pub simulation: Option<&'a SimulationSummary>,
    pub max_k: usize,
}

#[inline]
fn percent(p: f64) -> String {
    format!("{:.6}%", 100.0 * p)
}

pub fn write_report<W: Write>(out: &mut W, report: &Report) -> io::Result<()> {
    let summary = report.summary;

    writeln!(out, "=== replimut ===")?;
    writeln!(out, "FASTA:    {}", report.fasta.display())?;
    writeln!(out, "Bias CSV: {}", report.matrix.display())?;
    writeln!(out, "Rounds:   {}", report.rounds)?;
    writeln!(out)?;

    writeln!(out, "Sequence length (nt): {}", report.seq_len)?;
    if summary.n_codons == 0 {
        writeln!(out, "Protein (no mutations): no AUG found")?;
    } else if report.protein.len() > PROTEIN_PREVIEW {
        writeln!(out, "Protein (no mutations): {}...", &report.protein[..PROTEIN_PREVIEW])?;
    } else {
        writeln!(out, "Protein (no mutations): {}", report.protein)?;
    }
    writeln!(out, "Codons in CDS: {}", summary.n_codons)?;
    writeln!(out, "% Unchanged protein: {}", percent(summary.p_unchanged_protein))?;
    writeln!(out, "% Premature STOP:    {}", percent(summary.p_premature_stop))?;
    writeln!(out, "Expected nonsilent codons: {:.6}", summary.expected_nonsilent())?;
    writeln!(out, "  missense: {:.6}", summary.expected_missense)?;
    writeln!(out, "  nonsense: {:.6}", summary.expected_nonsense)?;

    let k_max = cmp::min(report.max_k, summary.pmf_k_nonsilent.len() - 1);
    for (k, p) in summary.pmf_k_nonsilent[..=k_max].iter().enumerate() {
        writeln!(out, "P(k={} nonsilent) = {}", k, percent(*p))?;
    }

    if let Some(roi) = summary.roi {
        writeln!(out, "ROI codons: {}-{}", roi.codon_span.0, roi.codon_span.1)?;
        writeln!(out, "% ≥1 nonsilent in ROI: {}", percent(roi.p_any_nonsilent))?;
    }

    if let Some(sim) = report.simulation {
        writeln!(out)?;
        writeln!(out, "Simulated replicates: {}", sim.replicates)?;
        writeln!(out, "% Unchanged protein (simulated): {}", percent(sim.p_unchanged_protein))?;
        writeln!(out, "% Premature STOP (simulated):    {}", percent(sim.p_premature_stop))?;
        writeln!(
            out,
            "JS divergence (simulated vs analytic): {:.6}",
            sim.divergence_from(&summary.pmf_k_nonsilent)
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::SubstitutionMatrix;
    use crate::seq::coding::CodingSequence;
    use crate::summary::summarize;

    fn render(seq: &str, rounds: i64, region: Option<(u64, u64)>, max_k: usize) -> String {
        let cds = CodingSequence::from_sequence(seq);
        let tr = SubstitutionMatrix::uniform(0.01).unwrap().power(rounds).unwrap();
        let summary = summarize(&cds, &tr, region);
        let protein = cds.translate();
        let report = Report {
            fasta: Path::new("in.fa"),
            matrix: Path::new("bias.csv"),
            rounds: rounds as u64,
            seq_len: seq.len(),
            protein: &protein,
            summary: &summary,
            simulation: None,
            max_k,
        };
        let mut out: Vec<u8> = Vec::new();
        write_report(&mut out, &report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_zero_rounds() {
        let text = render("AUGGCAUAA", 0, Some((1, 6)), 10);
        assert!(text.contains("Rounds:   0\n"));
        assert!(text.contains("Sequence length (nt): 9\n"));
        assert!(text.contains("Protein (no mutations): MA\n"));
        assert!(text.contains("Codons in CDS: 2\n"));
        assert!(text.contains("% Unchanged protein: 100.000000%\n"));
        assert!(text.contains("% Premature STOP:    0.000000%\n"));
        assert!(text.contains("Expected nonsilent codons: 0.000000\n"));
        assert!(text.contains("  nonsense: 0.000000\n"));
        assert!(text.contains("P(k=0 nonsilent) = 100.000000%\n"));
        assert!(text.contains("P(k=2 nonsilent) = 0.000000%\n"));
        assert!(!text.contains("P(k=3"));
        assert!(text.contains("ROI codons: 0-1\n"));
        assert!(text.contains("% ≥1 nonsilent in ROI: 0.000000%\n"));
    }

    #[test]
    fn test_report_no_start() {
        let text = render("CCCUUU", 3, None, 10);
        assert!(text.contains("Protein (no mutations): no AUG found\n"));
        assert!(text.contains("Codons in CDS: 0\n"));
        assert!(text.contains("P(k=0 nonsilent) = 100.000000%\n"));
        assert!(!text.contains("ROI"));
    }

    #[test]
    fn test_report_truncates_protein_and_pmf() {
        let seq = format!("AUG{}UAA", "GCA".repeat(80));
        let text = render(&seq, 2, None, 3);
        assert!(text.contains(&format!("Protein (no mutations): M{}...\n", "A".repeat(59))));
        assert!(text.contains("P(k=3 nonsilent)"));
        assert!(!text.contains("P(k=4 nonsilent)"));
    }
}
