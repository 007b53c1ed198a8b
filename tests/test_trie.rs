extern crate prefix_trie;
extern crate rand;

use prefix_trie::trie::Trie;
use rand::Rng;
use std::collections::{BTreeSet, HashSet};
use std::iter;

const NUM_OF_OPERATIONS: usize = 50_000;
const ALPHABET: [char; 4] = ['a', 'b', 'c', 'd'];

fn gen_word<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(0, 7);
    iter::repeat(())
        .map(|()| ALPHABET[rng.gen_range(0, ALPHABET.len())])
        .take(len)
        .collect()
}

fn distinct_prefixes(words: &BTreeSet<String>) -> usize {
    let mut prefixes = HashSet::new();
    for word in words {
        for (index, _) in word.char_indices() {
            prefixes.insert(&word[..=index]);
        }
    }
    prefixes.len()
}

#[test]
fn int_test_trie_physical() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut trie = Trie::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let word = gen_word(&mut rng);
        if rng.gen::<bool>() {
            assert_eq!(trie.insert(&word), expected.insert(word.clone()));
        } else {
            assert_eq!(trie.delete_physically(&word), expected.remove(&word));
        }

        assert_eq!(trie.search(&word), expected.contains(&word));
        assert_eq!(trie.len(), expected.len());
    }

    // without logical deletions every node lies on the path of a stored word
    assert_eq!(trie.node_count(), distinct_prefixes(&expected) + 1);

    for word in &expected {
        assert!(trie.search(word));
        for (index, _) in word.char_indices() {
            assert!(trie.starts_with(&word[..index]));
        }
    }

    let words: Vec<String> = expected.iter().cloned().collect();
    for word in words {
        assert!(trie.delete_physically(&word));
        expected.remove(&word);
        assert_eq!(trie.node_count(), distinct_prefixes(&expected) + 1);
    }
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 1);
}

#[test]
fn int_test_trie_mixed_deletes() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([2, 2, 2, 2]);
    let mut trie = Trie::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let word = gen_word(&mut rng);
        let nodes = trie.node_count();
        match rng.gen_range(0, 3) {
            0 => {
                assert_eq!(trie.insert(&word), expected.insert(word.clone()));
            },
            1 => {
                assert_eq!(trie.delete_logically(&word), expected.remove(&word));
                assert_eq!(trie.node_count(), nodes);
            },
            _ => {
                assert_eq!(trie.delete_physically(&word), expected.remove(&word));
                assert!(trie.node_count() <= nodes);
            },
        }

        assert_eq!(trie.search(&word), expected.contains(&word));
        assert_eq!(trie.len(), expected.len());
    }

    for word in &expected {
        assert!(trie.search(word));
        assert!(trie.starts_with(word));
    }
}

#[test]
fn int_test_trie_scenario() {
    let mut trie: Trie = vec!["their", "there", "answer", "any", "bye"]
        .into_iter()
        .collect();
    assert!(trie.starts_with("th"));
    assert!(!trie.search("the"));
    assert!(trie.search("there"));

    trie.delete_physically("answer");
    assert!(trie.search("any"));
    assert!(!trie.starts_with("ans"));
    assert!(trie.starts_with("an"));

    trie.delete_logically("bye");
    assert!(!trie.search("bye"));
    assert!(trie.starts_with("bye"));
    assert_eq!(trie.len(), 3);
}
