use rand::prelude::*;
use test_case::test_case;

use seqgen::random_data::IndependentGenerator;
use seqgen::random_edits::{generate_random_edit, k_mutations, k_mutations_traced, Edit};

#[test]
fn seeded_generators_agree() {
    let first = IndependentGenerator::new(4, Some(42)).unwrap().generate(10);
    let second = IndependentGenerator::new(4, Some(42)).unwrap().generate(10);
    assert_eq!(first, second);
    assert_eq!(first.len(), 10);
    assert!(first.iter().all(|&i| (0..4).contains(&i)));
}

#[test_case(1, 4 ; "k1 dna")]
#[test_case(2, 4 ; "k2 dna")]
#[test_case(5, 20 ; "k5 protein")]
#[test_case(17, 15 ; "k17 iupac")]
#[test_case(40, 26 ; "k40 english")]
fn k_mutations_keep_length(k: usize, alphabet_size: usize) {
    let mut generator = IndependentGenerator::new(alphabet_size, Some(k as u64)).unwrap();
    let original = generator.generate(30);
    let snapshot = original.clone();

    for _ in 0..50 {
        let mutation = k_mutations_traced(&original, k, alphabet_size, generator.rng_mut()).unwrap();
        assert_eq!(original, snapshot, "the original sequence was modified");
        assert_eq!(mutation.sequence.len(), original.len());
        assert!(mutation.sequence.iter().all(|&i| 0 <= i && (i as usize) < alphabet_size));

        assert!(!mutation.edits.is_empty());
        assert_eq!(mutation.spent, mutation.edits.iter().map(Edit::cost).sum::<usize>());
        assert!(mutation.spent == k || mutation.spent == k + 1);

        // Replaying the edits on the original reproduces the mutated sequence.
        let mut replayed = original.clone();
        for edit in &mutation.edits {
            edit.apply(&mut replayed);
        }
        assert_eq!(replayed, mutation.sequence);
    }
}

#[test]
fn mutations_are_reproducible() {
    let original = vec![0, 1, 2, 3, 0, 1, 2, 3];
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..10)
            .map(|_| k_mutations(&original, 4, 4, &mut rng).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(11), run(11));
}

#[test]
fn random_edits_stay_in_bounds() {
    let mut rng = StdRng::seed_from_u64(5);
    let sequence = vec![2; 3];
    for _ in 0..100 {
        match generate_random_edit(&sequence, 4, &mut rng).unwrap() {
            Edit::Sub { position, symbol } => {
                assert!(position < 3);
                assert!((0..4).contains(&symbol));
            }
            Edit::DelIns {
                deleted,
                inserted,
                symbol,
            } => {
                assert!(deleted < 3 && inserted < 3);
                assert!((0..4).contains(&symbol));
            }
        }
    }
}
