mod common;

use std::sync::Arc;
use std::thread;

use common::{class, setup};
use verbclad::index::Index;
use verbclad::interface::SharedIndex;

#[test]
fn snapshot_survives_swap() {
    let shared = SharedIndex::new(setup());
    let (generation, before) = shared.versioned_snapshot();
    assert_eq!(generation.value(), 0);

    let replaced = shared.swap(Index::build(vec![class("begin-55.1", &["begin"])]).expect("index builds"));
    assert!(Arc::ptr_eq(&before, &replaced));
    assert_eq!(shared.generation().value(), 1);

    // the old snapshot still answers from the old resource
    assert_eq!(before.get_by_lemma("climb").len(), 1);
    assert!(shared.snapshot().get_by_lemma("climb").is_empty());
    assert_eq!(shared.run_sync(|index| index.forest().len()), 1);
}

#[test]
fn concurrent_readers_across_swaps() {
    let shared = Arc::new(SharedIndex::new(setup()));
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for _ in 0..200 {
                    let (generation, index) = shared.versioned_snapshot();
                    let begin = index.get_by_lemma("begin");
                    // every published index knows "begin", only the first knows "climb"
                    assert_eq!(begin.len(), 1);
                    if generation.value() == 0 {
                        assert_eq!(index.get_by_lemma("climb").len(), 1);
                    } else {
                        assert!(index.get_by_lemma("climb").is_empty());
                    }
                }
            })
        })
        .collect();
    for _ in 0..10 {
        shared.swap(Index::build(vec![class("begin-55.1", &["begin", "start"])]).expect("index builds"));
    }
    for reader in readers {
        reader.join().expect("reader finished");
    }
    assert_eq!(shared.generation().value(), 10);
}

#[test]
fn generations_only_increase_with_concurrent_swaps() {
    let shared = Arc::new(SharedIndex::new(setup()));
    let watcher = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || {
            let mut last = shared.generation();
            for _ in 0..2000 {
                let current = shared.generation();
                assert!(current >= last, "generation went from {:?} back to {:?}", last, current);
                last = current;
            }
        })
    };
    let swappers: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for _ in 0..25 {
                    let index = Index::build(vec![class("begin-55.1", &["begin"])]).expect("index builds");
                    shared.swap(index);
                }
            })
        })
        .collect();
    for swapper in swappers {
        swapper.join().expect("swapper finished");
    }
    watcher.join().expect("watcher finished");
    // every swap published exactly one generation
    assert_eq!(shared.generation().value(), 100);
}
