use classic_ds::{avl, bst};

use std::collections::{HashMap, HashSet};

use crate::Op;

/// Checks ordering, stored heights, and balance for every node under `node`. Returns the
/// subtree's height.
fn check_avl<K: Ord, V>(node: &avl::Node<K, V>, lower: Option<&K>, upper: Option<&K>) -> usize {
    assert!(lower.map_or(true, |lower| lower < node.key()));
    assert!(upper.map_or(true, |upper| node.key() < upper));

    let left_height = node
        .left()
        .map_or(0, |n| check_avl(n, lower, Some(node.key())));
    let right_height = node
        .right()
        .map_or(0, |n| check_avl(n, Some(node.key()), upper));

    assert_eq!(node.height(), left_height.max(right_height) + 1);
    assert_eq!(
        node.balance_factor(),
        left_height as isize - right_height as isize
    );
    assert!(node.balance_factor().abs() <= 1);
    node.height()
}

/// Applies a set of operations to both trees and a hashmap that keeps the first value inserted
/// for each key. This way we can ensure that after a random smattering of inserts the trees hold
/// the same records as the map.
fn do_ops<K, V>(
    ops: &[Op<K, V>],
    bst: &mut bst::Tree<K, V>,
    avl: &mut avl::Tree<K, V>,
    map: &mut HashMap<K, V>,
) -> bool
where
    K: std::hash::Hash + Eq + Clone + Ord,
    V: std::fmt::Debug + PartialEq + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                let fresh = !map.contains_key(k);
                map.entry(k.clone()).or_insert_with(|| v.clone());

                if bst.insert(k.clone(), v.clone()) != fresh {
                    return false;
                }
                if avl.insert(k.clone(), v.clone()) != fresh {
                    return false;
                }
                if let Some(root) = avl.root() {
                    check_avl(root, None, None);
                }
            }
            Op::Find(k) => {
                if bst.find(k) != map.get(k) || avl.find(k) != map.get(k) {
                    return false;
                }
            }
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut bst = bst::Tree::new();
    let mut avl = avl::Tree::new();
    let mut map = HashMap::new();

    do_ops(&ops, &mut bst, &mut avl, &mut map)
        && map.keys().all(|key| bst.find(key) == map.get(key))
        && map.keys().all(|key| avl.find(key) == map.get(key))
        && bst.len() == map.len()
        && avl.len() == map.len()
}

#[quickcheck]
fn first_write_wins(pairs: Vec<(i8, u32)>) -> bool {
    let avl: avl::Tree<_, _> = pairs.iter().copied().collect();
    let bst: bst::Tree<_, _> = pairs.iter().copied().collect();

    let mut first = HashMap::new();
    for (k, v) in &pairs {
        first.entry(*k).or_insert(*v);
    }

    first
        .iter()
        .all(|(k, v)| avl.find(k) == Some(v) && bst.find(k) == Some(v))
}

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<i16>) -> bool {
    let avl: avl::Tree<_, _> = xs.iter().map(|x| (*x, ())).collect();
    let bst: bst::Tree<_, _> = xs.iter().map(|x| (*x, ())).collect();

    let avl_keys: Vec<_> = avl.iter().map(|(k, _)| *k).collect();
    let bst_keys: Vec<_> = bst.iter().map(|(k, _)| *k).collect();

    avl_keys.windows(2).all(|w| w[0] < w[1]) && bst_keys.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn bst_and_avl_agree(xs: Vec<i8>) -> bool {
    let distinct: HashSet<_> = xs.iter().copied().collect();

    let mut bst = bst::Tree::new();
    let mut avl = avl::Tree::new();
    for x in &xs {
        bst.insert(*x, i32::from(*x) * 3);
        avl.insert(*x, i32::from(*x) * 3);
    }

    bst.iter().eq(avl.iter()) && avl.len() == distinct.len()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let avl: avl::Tree<_, _> = xs.iter().map(|x| (*x, *x)).collect();
    let bst: bst::Tree<_, _> = xs.iter().map(|x| (*x, *x)).collect();

    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| avl.search(x).is_none() && !bst.contains_key(x))
}

#[test]
fn sorted_inserts_only_hurt_the_bst() {
    let bst: bst::Tree<_, _> = (0..127).map(|x| (x, ())).collect();
    let avl: avl::Tree<_, _> = (0..127).map(|x| (x, ())).collect();

    assert_eq!(bst.height(), 127);
    assert_eq!(avl.height(), 7);
    assert!(bst.iter().map(|(k, _)| k).eq(avl.iter().map(|(k, _)| k)));
}
