use replimut::mutation::coding::{same_amino_acid_probability, transition_probability};
use replimut::seq::all_codons;
use replimut::seq::codon::{is_stop, translate_codon};
use replimut::{summarize, CodingSequence, SubstitutionMatrix};

const EPS: f64 = 1.0e-12;

#[test]
fn identity_matrix_leaves_protein_unchanged() {
    let cds = CodingSequence::from_sequence("AUGGCAUAA");
    assert_eq!(cds.codons(), &[*b"AUG", *b"GCA"]);

    let tr = SubstitutionMatrix::identity().power(1).unwrap();
    let summary = summarize(&cds, &tr, None);
    assert_eq!(summary.n_codons, 2);
    assert_eq!(summary.p_unchanged_protein, 1.0);
    assert_eq!(summary.p_premature_stop, 0.0);
    assert_eq!(summary.pmf_k_nonsilent, vec![1.0, 0.0, 0.0]);
}

#[test]
fn sequence_without_start_codon_is_neutral() {
    let cds = CodingSequence::from_sequence("GGCCUUAAGGCCUUAA");
    let tr = SubstitutionMatrix::uniform(0.3).unwrap().power(4).unwrap();
    let summary = summarize(&cds, &tr, None);
    assert_eq!(summary.n_codons, 0);
    assert_eq!(summary.p_unchanged_protein, 1.0);
    assert_eq!(summary.pmf_k_nonsilent, vec![1.0]);
    assert_eq!(summary.p_premature_stop, 0.0);
}

#[test]
fn uniform_matrix_gives_degeneracy_over_64() {
    let tr = SubstitutionMatrix::new([[0.25; 4]; 4]).unwrap().power(1).unwrap();
    for orig in all_codons().filter(|c| !is_stop(c)) {
        let aa = translate_codon(&orig);
        // brute force over all 64 targets
        let brute: f64 = all_codons()
            .filter(|t| translate_codon(t) == aa)
            .map(|t| transition_probability(&orig, &t, &tr))
            .sum();
        let n_syn = all_codons().filter(|t| translate_codon(t) == aa).count();
        let p = same_amino_acid_probability(&orig, &tr);
        assert!((p - brute).abs() < EPS);
        assert!((p - n_syn as f64 / 64.0).abs() < EPS);
    }
}

#[test]
fn zero_rounds_is_identity_for_any_matrix() {
    let m = SubstitutionMatrix::new([
        [0.7, 0.1, 0.1, 0.1],
        [0.05, 0.8, 0.1, 0.05],
        [0.2, 0.2, 0.4, 0.2],
        [0.0, 0.5, 0.0, 0.5],
    ])
    .unwrap();
    let tr = m.power(0).unwrap();
    assert!(tr.is_identity());

    let cds = CodingSequence::from_sequence("ATGTGGCTGAGCAAATTTTGA");
    let summary = summarize(&cds, &tr, Some((1, 100)));
    assert_eq!(summary.p_unchanged_protein, 1.0);
    assert_eq!(summary.pmf_k_nonsilent[0], 1.0);
    assert!(summary.pmf_k_nonsilent[1..].iter().all(|&p| p == 0.0));
    assert_eq!(summary.roi.unwrap().p_any_nonsilent, 0.0);
}

#[test]
fn region_beyond_coding_sequence_is_zero() {
    let cds = CodingSequence::from_sequence("AUGGCAUGGUAA");
    let tr = SubstitutionMatrix::uniform(0.1).unwrap().power(10).unwrap();
    let summary = summarize(&cds, &tr, Some((301, 600)));
    let roi = summary.roi.unwrap();
    assert_eq!(roi.codon_span, (100, 2));
    assert_eq!(roi.p_any_nonsilent, 0.0);
}
