use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prefix_trie::trie::Trie;
use rand::Rng;
use std::collections::BTreeSet;
use std::iter;

const NUM_OF_OPERATIONS: usize = 100;

fn gen_words() -> Vec<String> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS)
        .map(|_| {
            let len = rng.gen_range(3, 12);
            iter::repeat(())
                .map(|()| (b'a' + rng.gen_range(0, 26)) as char)
                .take(len)
                .collect()
        })
        .collect()
}

fn bench_trie_insert(c: &mut Criterion) {
    let words = gen_words();
    c.bench_function("bench trie insert", move |b| {
        b.iter(|| {
            let mut trie = Trie::new();
            for word in &words {
                trie.insert(word);
            }
        })
    });
}

fn bench_trie_search(c: &mut Criterion) {
    let words = gen_words();
    let trie: Trie = words.iter().map(String::as_str).collect();
    c.bench_function("bench trie search", move |b| {
        b.iter(|| {
            for word in &words {
                black_box(trie.search(word));
            }
        })
    });
}

fn bench_trie_delete_physically(c: &mut Criterion) {
    let words = gen_words();
    let trie: Trie = words.iter().map(String::as_str).collect();
    c.bench_function("bench trie delete physically", move |b| {
        b.iter(|| {
            let mut trie = trie.clone();
            for word in &words {
                trie.delete_physically(word);
            }
        })
    });
}

fn bench_btreeset_insert(c: &mut Criterion) {
    let words = gen_words();
    c.bench_function("bench btreeset insert", move |b| {
        b.iter(|| {
            let mut set = BTreeSet::new();
            for word in &words {
                set.insert(word.clone());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_trie_insert,
    bench_trie_search,
    bench_trie_delete_physically,
    bench_btreeset_insert
);
criterion_main!(benches);
