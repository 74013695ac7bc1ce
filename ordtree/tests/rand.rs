use rand_xoshiro::Xoshiro256StarStar;
use rstest::rstest;
use rstest_reuse::{self, *};
use rand::prelude::*;
use ordtree::OrderedTree;

fn random_tree(len: usize, key_range: i64, seed: u8) -> (Vec<i64>, OrderedTree<i64>) {
    let mut rng = Xoshiro256StarStar::from_seed([seed; 32]);
    let data = (0..len)
        .map(|_| rng.gen_range(-key_range..key_range))
        .collect::<Vec<_>>();

    let mut tree = OrderedTree::new();
    for key in &data {
        tree.insert(*key);
    }

    (data, tree)
}

/// Collects (key, lower bound, upper bound) for every node by following the
/// child links reported in the traversal.
fn bounds(tree: &OrderedTree<i64>) -> Vec<(i64, Option<i64>, Option<i64>)> {
    let visits = tree.traverse().map(|v| v.copied()).collect::<Vec<_>>();
    let mut out = Vec::with_capacity(visits.len());
    // pre-order: a node's left child directly follows it, its right child
    // follows its whole left subtree
    let mut pending = if visits.is_empty() { vec![] } else { vec![(None, None)] };
    for (key, left, right) in visits {
        let (lower, upper) = pending.pop().unwrap();
        out.push((key, lower, upper));
        if right.is_some() {
            pending.push((Some(key), upper));
        }
        if left.is_some() {
            pending.push((lower, Some(key)));
        }
    }
    assert!(pending.is_empty());
    out
}

#[template]
#[rstest]
fn random_tree_template(
    #[values(0, 1, 10, 100, 1000)]
    len: usize,
    #[values(4, 100, 1_000_000)]
    key_range: i64,
    #[values(1, 2, 3)]
    seed: u8
) {}

#[apply(random_tree_template)]
fn keeps_every_key(len: usize, key_range: i64, seed: u8) {
    let (mut data, tree) = random_tree(len, key_range, seed);

    assert_eq!(tree.len(), len);
    assert_eq!(tree.traverse().len(), len);

    data.sort();
    let mut out = tree.traverse().map(|v| *v.key).collect::<Vec<_>>();
    out.sort();
    assert_eq!(data, out);
}

#[apply(random_tree_template)]
fn search_order(len: usize, key_range: i64, seed: u8) {
    let (_, tree) = random_tree(len, key_range, seed);

    for (key, lower, upper) in bounds(&tree) {
        if let Some(lower) = lower {
            assert!(key >= lower, "{} placed right of {}", key, lower);
        }
        if let Some(upper) = upper {
            assert!(key < upper, "{} placed left of {}", key, upper);
        }
    }
}

#[apply(random_tree_template)]
fn child_keys_match_next_visits(len: usize, key_range: i64, seed: u8) {
    let (_, tree) = random_tree(len, key_range, seed);

    let visits = tree.traverse().map(|v| v.copied()).collect::<Vec<_>>();
    for window in visits.windows(2) {
        let (_, left, _) = window[0];
        if let Some(left) = left {
            assert_eq!(left, window[1].0);
        }
    }
}

#[apply(random_tree_template)]
fn traverse_is_restartable(len: usize, key_range: i64, seed: u8) {
    let (_, tree) = random_tree(len, key_range, seed);

    let first = tree.traverse().collect::<Vec<_>>();
    let second = tree.traverse().collect::<Vec<_>>();
    assert_eq!(first, second);
}

#[apply(random_tree_template)]
fn from_iter_matches_insert(len: usize, key_range: i64, seed: u8) {
    let (data, tree) = random_tree(len, key_range, seed);

    let collected = data.iter().copied().collect::<OrderedTree<i64>>();
    let a = tree.traverse().map(|v| v.copied()).collect::<Vec<_>>();
    let b = collected.traverse().map(|v| v.copied()).collect::<Vec<_>>();
    assert_eq!(a, b);
}

#[rstest]
#[case::ascending(1)]
#[case::descending(-1)]
fn degenerate_chain(#[case] step: i64) {
    let len = 10_000;
    // far too small for one frame per node
    let worker = std::thread::Builder::new()
        .stack_size(64 * 1024)
        .spawn(move || {
            let tree = (0..len).map(|i| i * step).collect::<OrderedTree<i64>>();

            assert_eq!(tree.len(), len as usize);
            assert_eq!(tree.depth(), len as usize);
            assert_eq!(tree.traverse().count(), len as usize);
            drop(tree);
        })
        .unwrap();
    worker.join().unwrap();
}
