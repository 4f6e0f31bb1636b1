//! Property-based tests for the probability engine.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

use replimut::mutation::coding::same_amino_acid_probability;
use replimut::seq::codon::is_stop;
use replimut::seq::{all_codons, Codon};
use replimut::stats::{poisson_binomial_pmf, prob_none};
use replimut::{summarize, CodingSequence, SubstitutionMatrix};

/// Generate a row-stochastic 4x4 matrix.
fn stochastic_matrix() -> impl Strategy<Value = SubstitutionMatrix> {
    prop::array::uniform4(prop::array::uniform4(0.001f64..1.0)).prop_map(|rows| {
        let mut x = rows;
        for row in x.iter_mut() {
            let s: f64 = row.iter().sum();
            for v in row.iter_mut() {
                *v /= s;
            }
        }
        SubstitutionMatrix::new(x).unwrap()
    })
}

/// Generate a coding sequence of up to 60 sense codons.
fn coding_sequence() -> impl Strategy<Value = CodingSequence> {
    "[ACGU]{0,180}".prop_map(|body| CodingSequence::from_sequence(format!("AUG{}", body)))
}

/// Pick one of the 61 sense codons.
fn sense_codon() -> impl Strategy<Value = Codon> {
    let codons: Vec<Codon> = all_codons().filter(|c| !is_stop(c)).collect();
    prop::sample::select(codons)
}

fn sequence_of(codons: &[Codon]) -> String {
    let mut seq = String::from("AUG");
    for codon in codons {
        seq.push_str(std::str::from_utf8(codon).unwrap());
    }
    seq.push_str("UAA");
    seq
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn pmf_sums_to_one(q in prop::collection::vec(0.0f64..=1.0, 0..300)) {
        let pmf = poisson_binomial_pmf(&q);
        prop_assert_eq!(pmf.len(), q.len() + 1);
        prop_assert!((pmf.iter().sum::<f64>() - 1.0).abs() < 1.0e-9);
    }

    #[test]
    fn matrix_power_rows_sum_to_one(m in stochastic_matrix(), rounds in 0i64..800) {
        let tr = m.power(rounds).unwrap();
        for s in tr.row_sums().iter() {
            prop_assert!((s - 1.0).abs() < 1.0e-6);
        }
    }

    #[test]
    fn unchanged_equals_pmf_zero(cds in coding_sequence(), m in stochastic_matrix(), rounds in 0i64..30) {
        let summary = summarize(&cds, &m.power(rounds).unwrap(), None);
        prop_assert!((summary.p_unchanged_protein - summary.pmf_k_nonsilent[0]).abs() < 1.0e-9);
        prop_assert!((0.0..=1.0 + 1.0e-12).contains(&summary.p_premature_stop));
    }

    #[test]
    fn full_span_region_matches_protein(cds in coding_sequence(), m in stochastic_matrix(), rounds in 1i64..10) {
        let n_nt = 3 * cds.len() as u64;
        let summary = summarize(&cds, &m.power(rounds).unwrap(), Some((1, n_nt.max(1))));
        let roi = summary.roi.unwrap();
        if cds.is_empty() {
            prop_assert_eq!(roi.p_any_nonsilent, 0.0);
        } else {
            prop_assert_eq!(roi.codon_span, (0, cds.len() as i64 - 1));
            prop_assert!((roi.p_any_nonsilent - (1.0 - summary.p_unchanged_protein)).abs() < 1.0e-9);
        }
    }

    #[test]
    fn raising_one_probability_never_raises_unchanged(
        q in prop::collection::vec(0.0f64..=1.0, 1..50),
        idx in any::<prop::sample::Index>(),
        bump in 0.0f64..=1.0,
    ) {
        let i = idx.index(q.len());
        let mut r = q.clone();
        r[i] = q[i] + (1.0 - q[i]) * bump;
        prop_assert!(prob_none(&r) <= prob_none(&q) + 1.0e-12);
    }

    #[test]
    fn swapping_in_a_riskier_codon_never_raises_unchanged(
        body in prop::collection::vec(sense_codon(), 1..40),
        idx in any::<prop::sample::Index>(),
        replacement in sense_codon(),
        m in stochastic_matrix(),
        rounds in 1i64..20,
    ) {
        let tr = m.power(rounds).unwrap();
        let i = idx.index(body.len());
        let mut other = body.clone();
        other[i] = replacement;

        // body follows the leading AUG, so codon i of body is codon i + 1 of the CDS
        let a = CodingSequence::from_sequence(sequence_of(&body));
        let b = CodingSequence::from_sequence(sequence_of(&other));
        prop_assert_eq!(a.len(), body.len() + 1);
        prop_assert_eq!(b.len(), body.len() + 1);

        let q_a = 1.0 - same_amino_acid_probability(&body[i], &tr);
        let q_b = 1.0 - same_amino_acid_probability(&replacement, &tr);
        let (safer, riskier) = if q_b >= q_a { (&a, &b) } else { (&b, &a) };

        let s_safer = summarize(safer, &tr, None);
        let s_riskier = summarize(riskier, &tr, None);
        prop_assert!(s_riskier.p_unchanged_protein <= s_safer.p_unchanged_protein + 1.0e-12);
        prop_assert!((s_riskier.p_unchanged_protein - prob_none(&s_riskier.nonsilent)).abs() < 1.0e-15);
    }
}
