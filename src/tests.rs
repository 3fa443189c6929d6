use bio::alignment::distance::levenshtein;
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::generate::{generate_pair, ErrorModel, GenerateOptions};
use crate::*;

/// Random pairs of various lengths, error rates and error models.
fn gen_seqs(seed: u64) -> impl Iterator<Item = (Sequence, Sequence)> {
    let ns = [0usize, 1, 2, 3, 5, 8, 13, 20, 50, 100];
    let es = [0.0f32, 0.05, 0.2, 0.5, 1.0];
    let models = [ErrorModel::Uniform, ErrorModel::Gap, ErrorModel::Move];
    let rng = &mut ChaCha8Rng::seed_from_u64(seed);
    ns.into_iter()
        .cartesian_product(es)
        .cartesian_product(models)
        .map(|((length, error_rate), error_model)| {
            generate_pair(
                &GenerateOptions {
                    length,
                    error_rate,
                    error_model,
                },
                rng,
            )
        })
        .collect_vec()
        .into_iter()
}

fn random_cost_model(rng: &mut impl Rng) -> CostModel {
    CostModel::new(rng.gen_range(0..5), rng.gen_range(0..5), rng.gen_range(0..5)).unwrap()
}

#[test]
fn unit_cost_matches_bio() {
    for (a, b) in gen_seqs(31415) {
        let l = Levenshtein::unit(&a, &b).unwrap();
        assert_eq!(l.distance(), levenshtein(&a, &b) as Cost);
    }
}

#[test]
fn script_cost_is_distance() {
    let rng = &mut ChaCha8Rng::seed_from_u64(2);
    for (a, b) in gen_seqs(2) {
        let cm = random_cost_model(rng);
        let l = Levenshtein::new(&a, &b, cm).unwrap();
        let script = l.edit_ops();
        assert_eq!(script.verify(&cm, &a, &b), l.distance(), "{cm:?}");
        assert_eq!(script.apply(&a, &b), b);
    }
}

#[test]
fn script_consumes_both_sequences() {
    let cm = CostModel::new(1, 2, 3).unwrap();
    for (a, b) in gen_seqs(3) {
        let script = Levenshtein::new(&a, &b, cm).unwrap().edit_ops();
        let source = script
            .iter()
            .filter(|op| op.kind.consumes_source())
            .map(|op| a[op.i])
            .collect_vec();
        let target = script
            .iter()
            .filter(|op| op.kind.consumes_target())
            .map(|op| b[op.j])
            .collect_vec();
        assert_eq!(source, a);
        assert_eq!(target, b);
        assert_eq!(script.to_path().last(), Some(&Pos(a.len(), b.len())));
    }
}

#[test]
fn symmetric_costs_give_symmetric_distance() {
    for (a, b) in gen_seqs(4) {
        for cm in [CostModel::unit(), CostModel::linear(3, 2).unwrap()] {
            assert_eq!(
                Levenshtein::new(&a, &b, cm).unwrap().distance(),
                Levenshtein::new(&b, &a, cm).unwrap().distance()
            );
        }
    }
}

#[test]
fn asymmetric_costs_swap_roles() {
    // Swapping the sequences turns insertions into deletions.
    let rng = &mut ChaCha8Rng::seed_from_u64(5);
    for (a, b) in gen_seqs(5) {
        let cm = random_cost_model(rng);
        let swapped = CostModel::new(cm.del(), cm.ins(), cm.sub()).unwrap();
        assert_eq!(
            Levenshtein::new(&a, &b, cm).unwrap().distance(),
            Levenshtein::new(&b, &a, swapped).unwrap().distance()
        );
    }
}

#[test]
fn identical_sequences() {
    let rng = &mut ChaCha8Rng::seed_from_u64(6);
    for (a, _) in gen_seqs(6) {
        let l = Levenshtein::new(&a, &a, random_cost_model(rng)).unwrap();
        assert_eq!(l.distance(), 0);
        let script = l.edit_ops();
        assert_eq!(script.len(), a.len());
        for (idx, op) in script.iter().enumerate() {
            assert_eq!(*op, EditOp::new(EditOpKind::Match, idx, idx));
        }
    }
}

#[test]
fn against_empty() {
    let cm = CostModel::new(2, 3, 1).unwrap();
    for (a, _) in gen_seqs(7) {
        let empty: &[u8] = &[];
        assert_eq!(
            Levenshtein::new(&a, empty, cm).unwrap().distance(),
            a.len() as Cost * cm.del()
        );
        assert_eq!(
            Levenshtein::new(empty, &a, cm).unwrap().distance(),
            a.len() as Cost * cm.ins()
        );
    }
}

#[test]
fn equal_suffix_keeps_distance() {
    let rng = &mut ChaCha8Rng::seed_from_u64(8);
    for (mut a, mut b) in gen_seqs(8) {
        let cm = random_cost_model(rng);
        let d = Levenshtein::new(&a, &b, cm).unwrap().distance();
        let c = b"ACGT"[rng.gen_range(0..4)];
        a.push(c);
        b.push(c);
        assert_eq!(Levenshtein::new(&a, &b, cm).unwrap().distance(), d);
    }
}

#[test]
fn free_functions_match_object() {
    let (a, b) = generate::setup_sequences(40, 0.3);
    let matrix = build(&a, &b, (2, 1, 3)).unwrap();
    let cm = *matrix.cost_model();
    let l = Levenshtein::with_costs(&a, &b, (2, 1, 3)).unwrap();
    assert_eq!(&matrix, l.matrix());
    assert_eq!(reconstruct(&matrix, &a, &b, &cm).unwrap(), l.edit_ops());
}

#[test]
fn scenarios() {
    let l = Levenshtein::new(b"hello", b"world", CostModel::new(2, 2, 1).unwrap()).unwrap();
    assert_eq!(l.distance(), 4);
    assert_eq!(l.edit_ops().to_cigar(), "3X1M1X");

    let l = Levenshtein::<u8>::unit(b"", b"").unwrap();
    assert_eq!(l.distance(), 0);
    assert!(l.edit_ops().is_empty());

    let l = Levenshtein::unit(b"cat", b"cats").unwrap();
    assert_eq!(l.distance(), 1);
    assert_eq!(l.edit_ops()[3], EditOp::new(EditOpKind::Insertion, 3, 3));

    assert_eq!(
        Levenshtein::with_costs(b"a", b"b", (1, -1, 1)).unwrap_err(),
        Error::InvalidConfiguration {
            op: "deletion",
            cost: -1
        }
    );
    assert_eq!(
        Levenshtein::with_costs(b"ab", b"", (1, Cost::MAX, 1)).unwrap_err(),
        Error::CostOverflow { len_a: 2, len_b: 0 }
    );
}
