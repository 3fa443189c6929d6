use levenshtein_aligner::*;
use EditOpKind::*;

fn ops(script: &EditScript) -> Vec<(EditOpKind, usize, usize)> {
    script.iter().map(|op| (op.kind, op.i, op.j)).collect()
}

#[test]
fn hello_world() {
    let l = Levenshtein::with_costs(b"hello", b"world", (2, 2, 1)).unwrap();
    assert_eq!(l.distance(), 4);
    assert_eq!(
        ops(&l.edit_ops()),
        [
            (Substitution, 0, 0),
            (Substitution, 1, 1),
            (Substitution, 2, 2),
            (Match, 3, 3),
            (Substitution, 4, 4)
        ]
    );
    let a: Vec<char> = "hello".chars().collect();
    let b: Vec<char> = "world".chars().collect();
    let l = Levenshtein::with_costs(&a, &b, (2, 2, 1)).unwrap();
    assert!(l.matrix_table().to_string().ends_with(" o 10  9  7  7  5  4 \n"));
}

#[test]
fn empty_pair() {
    let l = Levenshtein::<u8>::unit(&[], &[]).unwrap();
    assert_eq!(l.distance(), 0);
    assert_eq!(l.matrix().rows(), 1);
    assert_eq!(l.edit_ops(), EditScript::default());
}

#[test]
fn cat_cats() {
    let l = Levenshtein::unit(b"cat", b"cats").unwrap();
    assert_eq!(l.distance(), 1);
    assert_eq!(
        ops(&l.edit_ops()),
        [(Match, 0, 0), (Match, 1, 1), (Match, 2, 2), (Insertion, 3, 3)]
    );
}

#[test]
fn words_as_symbols() {
    let a = "the cat sat on the mat".split(' ').collect::<Vec<_>>();
    let b = "the cat sat on a mat today".split(' ').collect::<Vec<_>>();
    let l = Levenshtein::unit(&a, &b).unwrap();
    assert_eq!(l.distance(), 2);
    assert_eq!(l.edit_ops().to_cigar(), "4M1X1M1I");
}

#[test]
fn reconstruct_requires_matching_matrix() {
    let cm = CostModel::unit();
    let m = DistanceMatrix::build(b"abc", b"abd", &cm).unwrap();
    assert!(reconstruct(&m, b"abc", b"abd", &cm).is_ok());
    assert_eq!(
        reconstruct(&m, b"abc", b"ab", &cm),
        Err(Error::NotComputed { len_a: 3, len_b: 2 })
    );
}
