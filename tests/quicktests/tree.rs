use bintree::{Order, Tree};

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a map.
/// This way we can ensure that after a random smattering of inserts,
/// removes and rebalances we have the same set of keys in both.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Tree<K, V>, map: &mut BTreeMap<K, V>) -> bool
where
    K: Ord + Clone,
    V: Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                bst.insert(k.clone(), v.clone());
                map.insert(k.clone(), v.clone());
            }
            Op::Remove(k) => {
                if bst.remove(k) != map.remove(k).is_some() {
                    return false;
                }
            }
            Op::Balance => bst.balance(),
        }
        if bst.len() != map.len() {
            return false;
        }
    }
    true
}

/// Smallest possible height for `n` nodes.
fn min_depth(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map)
        && tree.is_search_tree()
        && map.iter().all(|(key, value)| tree.search(key) == Some(value))
        && tree
            .to_vec(Order::Lkr)
            .into_iter()
            .eq(map.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }

    xs.iter().all(|x| tree.search(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    for remove in &removes {
        tree.remove(remove);
    }

    let mut still_present = xs;
    for remove in &removes {
        // We may have inserted the same value multiple times - remove each one.
        while let Some(pos) = still_present.iter().position(|x| x == remove) {
            still_present.swap_remove(pos);
        }
    }

    removes.iter().all(|x| tree.search(x).is_none())
        && still_present.iter().all(|x| tree.search(x).is_some())
        && tree.is_search_tree()
}

#[quickcheck]
fn balance_keeps_pairs_and_minimises_depth(pairs: Vec<(i16, u8)>) -> bool {
    let mut tree = Tree::new();
    for (k, v) in &pairs {
        tree.insert(*k, *v);
    }
    let before: Vec<(i16, u8)> = tree
        .to_vec(Order::Lkr)
        .into_iter()
        .map(|(k, v)| (*k, *v))
        .collect();

    tree.balance();
    let after: Vec<(i16, u8)> = tree
        .to_vec(Order::Lkr)
        .into_iter()
        .map(|(k, v)| (*k, *v))
        .collect();

    before == after && tree.depth() == min_depth(tree.len()) && tree.is_search_tree()
}

#[quickcheck]
fn min_max_match_extremes(pairs: Vec<(i8, i8)>) -> bool {
    let mut tree = Tree::new();
    let mut map = BTreeMap::new();
    for (k, v) in &pairs {
        tree.insert(*k, *v);
        map.insert(*k, *v);
    }

    match (map.values().next(), map.values().next_back()) {
        (Some(min), Some(max)) => tree.min() == Ok(min) && tree.max() == Ok(max),
        _ => tree.min().is_err() && tree.max().is_err(),
    }
}

#[quickcheck]
fn merge_right_wins(a: Vec<(i8, i8)>, b: Vec<(i8, i8)>) -> bool {
    let mut left = Tree::new();
    let mut right = Tree::new();
    let mut expected = BTreeMap::new();
    for (k, v) in &a {
        left.insert(*k, *v);
        expected.insert(*k, *v);
    }
    for (k, v) in &b {
        right.insert(*k, *v);
        expected.insert(*k, *v);
    }

    let merged = left.merge(&right);
    merged.len() == expected.len()
        && expected.iter().all(|(k, v)| merged.search(k) == Some(v))
        && merged.depth() == min_depth(merged.len())
        && merged.is_search_tree()
}

#[quickcheck]
fn extracted_subtree_is_contained_and_independent(xs: Vec<i8>, pick: usize) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x, *x);
    }
    if xs.is_empty() {
        return tree.extract_subtree(&0).is_err();
    }
    let key = xs[pick % xs.len()];
    let before = tree.clone();

    let mut sub = match tree.extract_subtree(&key) {
        Ok(sub) => sub,
        Err(_) => return false,
    };
    let contained = tree.contains_subtree(&sub) && sub.search(&key) == Some(&key);

    sub.remove(&key);
    sub.insert(i8::MIN, 0);
    contained && tree == before && tree.search(&key) == Some(&key)
}
